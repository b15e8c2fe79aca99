
//////
//
// Imports
//

// Standard library
use std::io::Cursor;

// Local imports
use crate::pak::*;
use crate::util::binwrite::PADDING_SENTINEL;



//////
//
// Helpers
//

// Serializes the given permutations into container bytes.
fn writeContainer (permutations: &[(u64, &[u8])]) -> Vec<u8>
{
	let mut writer = Writer::new(Cursor::new(Vec::new()), permutations.len() as u32).unwrap();
	for &(declaredMask, blob) in permutations {
		writer.appendPermutation(declaredMask, blob).unwrap();
	}
	writer.finish().unwrap().into_inner()
}



//////
//
// Tests
//

#[test]
fn test_wireFormat ()
{
	let bytes = writeContainer(&[(0x03, &[0xDE,0xAD,0xBE,0xEF,0x01])]);

	// Header: container tag, version 1, permutation tag, count 1
	assert_eq!(&bytes[0..4], b"RHS\0");
	assert_eq!(&bytes[4..8], [1,0,0,0]);
	assert_eq!(&bytes[8..12], b"LTEM");
	assert_eq!(&bytes[12..16], [1,0,0,0]);

	// Record: mask, primary length 5, secondary length 0, offset-to-next 32, padding 0
	assert_eq!(&bytes[16..24], [3,0,0,0,0,0,0,0]);
	assert_eq!(&bytes[24..28], [5,0,0,0]);
	assert_eq!(&bytes[28..32], [0,0,0,0]);
	assert_eq!(&bytes[32..36], [32,0,0,0]);
	assert_eq!(&bytes[36..40], [0,0,0,0]);

	// Blob plus sentinel-filled alignment padding, then end of stream
	assert_eq!(&bytes[40..45], [0xDE,0xAD,0xBE,0xEF,0x01]);
	assert_eq!(&bytes[45..48], [PADDING_SENTINEL; 3]);
	assert_eq!(bytes.len(), 48);
}

#[test]
fn test_roundTrip ()
{
	let permutations: [(u64, &[u8]); 4] = [
		(0b11, b"abc"), (0b01, b"defgh"), (0b10, b""), (0b00, b"xy")
	];
	let bytes = writeContainer(&permutations);
	let package = Package::deserialize(&bytes).unwrap();

	assert_eq!(package.version(), crate::SHADER_FORMAT_VERSION);
	assert_eq!(package.permutations().len(), permutations.len());
	for (record, &(declaredMask, blob)) in package.permutations().iter().zip(&permutations)
	{
		assert_eq!(record.declaredMask, declaredMask);
		assert_eq!(record.blob, blob);
		assert_eq!(record.secondaryLength, 0);
	}
}

#[test]
fn test_offsetsMatchRecordDistances ()
{
	let bytes = writeContainer(&[(7, b"abc"), (1, b"defgh"), (0, b"")]);
	let package = Package::deserialize(&bytes).unwrap();

	// Each offset field equals the true distance to the next record's first field; the last one points at the end of
	// the stream
	let mut pos = 16u32;
	for record in package.permutations() {
		pos += record.ofsNextRecord;
	}
	assert_eq!(pos as usize, bytes.len());
	assert_eq!(package.permutations()[0].ofsNextRecord, 28); // 24 fixed fields + 3 blob bytes, aligned to 4
	assert_eq!(package.permutations()[1].ofsNextRecord, 32);
	assert_eq!(package.permutations()[2].ofsNextRecord, 24);
}

#[test]
fn test_findBestMatch ()
{
	// Popcount-descending order, as the enumerator emits it
	let bytes = writeContainer(&[(0b11, b"both"), (0b01, b"foo"), (0b10, b"bar"), (0b00, b"none")]);
	let package = Package::deserialize(&bytes).unwrap();

	assert_eq!(package.findBestMatch(0b11).unwrap().blob, b"both");
	assert_eq!(package.findBestMatch(0b01).unwrap().blob, b"foo");
	assert_eq!(package.findBestMatch(0b10).unwrap().blob, b"bar");
	assert_eq!(package.findBestMatch(0).unwrap().blob, b"none");

	// Features beyond what the container knows don't prevent a match
	assert_eq!(package.findBestMatch(0b111).unwrap().blob, b"both");
}

#[test]
fn test_malformedContainers ()
{
	let good = writeContainer(&[(1, b"abc")]);

	// Bad container tag
	let mut bad = good.clone();
	bad[0] = b'X';
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());

	// Unsupported version
	let mut bad = good.clone();
	bad[4] = 99;
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());

	// Bad permutation tag
	let mut bad = good.clone();
	bad[8] = b'X';
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());

	// Truncated record
	assert!(Package::deserialize(&good[..good.len()-8]).unwrap_err().is::<MalformedContainerError>());

	// Trailing garbage after the last record
	let mut bad = good.clone();
	bad.extend_from_slice(&[0,0,0,0]);
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());

	// Length field large enough to overflow a 32-bit record size computation
	let mut bad = good.clone();
	bad[24..28].copy_from_slice(&(u32::MAX - 24).to_le_bytes());
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());

	// Count field claiming far more records than the bytes could possibly hold
	let mut bad = good.clone();
	bad[12..16].copy_from_slice(&u32::MAX.to_le_bytes());
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());

	// Offset field disagreeing with the record's true size
	let mut bad = good;
	bad[32] = 77;
	assert!(Package::deserialize(&bad).unwrap_err().is::<MalformedContainerError>());
}

#[test]
fn test_emptyContainer ()
{
	// A container can technically hold zero permutations (no shader produces one, but the format allows it)
	let bytes = writeContainer(&[]);
	let package = Package::deserialize(&bytes).unwrap();
	assert!(package.permutations().is_empty());
	assert!(package.findBestMatch(u64::MAX).is_none());
}

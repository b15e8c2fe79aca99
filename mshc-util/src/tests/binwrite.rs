
//////
//
// Imports
//

// Standard library
use std::io::Cursor;

// Local imports
use crate::binwrite::*;



//////
//
// Helpers
//

fn newWriter () -> BinaryWriter<Cursor<Vec<u8>>> {
	BinaryWriter::new(Cursor::new(Vec::new()))
}

fn bytesOf (writer: BinaryWriter<Cursor<Vec<u8>>>) -> Vec<u8> {
	writer.intoInner().into_inner()
}



//////
//
// Tests
//

#[test]
fn test_littleEndianEncoding ()
{
	let mut writer = newWriter();
	writer.write32(0x11223344).unwrap();
	writer.write64(0x5566778899AABBCC).unwrap();
	assert_eq!(
		bytesOf(writer),
		[0x44,0x33,0x22,0x11,  0xCC,0xBB,0xAA,0x99, 0x88,0x77,0x66,0x55]
	);
}

#[test]
fn test_sentinelPadding ()
{
	let mut writer = newWriter();
	writer.write8(0x01).unwrap();
	writer.write32(0x22222222).unwrap();
	assert_eq!(
		bytesOf(writer),
		[0x01, PADDING_SENTINEL,PADDING_SENTINEL,PADDING_SENTINEL, 0x22,0x22,0x22,0x22]
	);
}

#[test]
fn test_sentinelPadding16 ()
{
	// 16-bit fields only align to 2 bytes
	let mut writer = newWriter();
	writer.write8(0x01).unwrap();
	writer.write16(0x2233).unwrap();
	assert_eq!(bytesOf(writer), [0x01, PADDING_SENTINEL, 0x33,0x22]);
}

#[test]
fn test_rawDataAligned ()
{
	let mut writer = newWriter();
	writer.write8(0x01).unwrap();
	writer.write8(0x02).unwrap();
	writer.writeRawData(&[0xDE,0xAD]).unwrap();
	assert_eq!(
		bytesOf(writer),
		[0x01,0x02, PADDING_SENTINEL,PADDING_SENTINEL, 0xDE,0xAD]
	);
}

#[test]
fn test_temp32Patching ()
{
	let mut writer = newWriter();
	writer.write32(0xAAAAAAAA).unwrap();
	let pos = writer.writeTemp32().unwrap();
	writer.write32(0xBBBBBBBB).unwrap();

	// The placeholder is all-ones until patched
	assert_eq!(pos, 4);
	writer.overwriteTemp32(pos, 0x0BADF00D).unwrap();
	let bytes = bytesOf(writer);
	assert_eq!(&bytes[4..8], [0x0D,0xF0,0xAD,0x0B]);
	assert_eq!(&bytes[8..12], [0xBB,0xBB,0xBB,0xBB]);
}

#[test]
fn test_overwriteTemp32_restoresPosition ()
{
	let mut writer = newWriter();
	let pos = writer.writeTemp32().unwrap();
	writer.overwriteTemp32(pos, 7).unwrap();
	writer.write32(0xCCCCCCCC).unwrap();

	// The second field must land after the patched one, not over it
	assert_eq!(bytesOf(writer), [0x07,0,0,0, 0xCC,0xCC,0xCC,0xCC]);
}

#[test]
fn test_writeStr_zeroFill ()
{
	// "ab" + NUL = 3 bytes, zero-filled (not sentinel-filled) to 4
	let mut writer = newWriter();
	writer.writeStr("ab").unwrap();
	assert_eq!(bytesOf(writer), [b'a',b'b',0, 0]);

	// "abc" + NUL = 4 bytes, already aligned
	let mut writer = newWriter();
	writer.writeStr("abc").unwrap();
	assert_eq!(bytesOf(writer), [b'a',b'b',b'c',0]);
}

#[test]
fn test_alignAndTell ()
{
	let mut writer = newWriter();
	writer.write8(1).unwrap();
	assert_eq!(writer.alignAndTell().unwrap(), 4);
	assert_eq!(writer.alignAndTell().unwrap(), 4); // idempotent once aligned
}

#[test]
fn test_relativeOffset ()
{
	let mut writer = newWriter();
	let start = writer.alignAndTell().unwrap();
	writer.write32(0).unwrap();
	writer.writeRawData(&[1,2,3]).unwrap();
	// 4 field bytes + 3 blob bytes, aligned up to 8
	assert_eq!(writer.relativeOffset(start).unwrap(), 8);
}

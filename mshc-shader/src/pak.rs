
//////
//
// Imports
//

// Standard library
use std::{fmt::{Display, Formatter}, io, path::Path};

// Anyhow library
use anyhow;

// Local imports
use crate::SHADER_FORMAT_VERSION;
use crate::util::binwrite::BinaryWriter;



//////
//
// Constants
//

/// The 4-byte tag opening every container.
pub const CONTAINER_TAG: &[u8; 4] = b"RHS\0";

/// The second 4-byte tag of the container header, introducing the permutation records.
pub const PERMUTATION_TAG: &[u8; 4] = b"LTEM";

// Fixed per-record field size: u64 mask + 4 u32 fields, before the blob
const RECORD_FIELDS_SIZE: u32 = 24;



//////
//
// Errors
//

/// An error resulting from attempting to read a byte stream that is not a well-formed shader container.
#[derive(Debug)]
pub struct MalformedContainerError {
	/// Human-readable description of the first violation encountered.
	pub reason: String
}
impl MalformedContainerError {
	fn new (reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}
}
impl Display for MalformedContainerError {
	fn fmt (&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "MalformedContainerError[{}]", self.reason)
	}
}
impl std::error::Error for MalformedContainerError {}



//////
//
// Classes
//

////
// Writer

/// Serializes the container: a fixed header followed by one record per permutation, in the order the caller appends
/// them (which [the enumerator](crate::permute::enumerate) arranges to be popcount-descending so that loaders find the
/// most specific variant first). All integers are little-endian and all multi-byte fields are 4-byte aligned, with
/// sentinel-filled padding, courtesy of [`BinaryWriter`].
pub struct Writer<Sink: io::Write+io::Seek> {
	writer: BinaryWriter<Sink>
}
impl<Sink: io::Write+io::Seek> Writer<Sink>
{
	/// Create a container writer over the given sink and write the header.
	///
	/// # Arguments
	///
	/// * `sink` – The byte sink the container gets serialized into.
	/// * `nPermutations` – The total number of records the container will hold. The caller must append exactly this
	///                     many permutations.
	pub fn new (sink: Sink, nPermutations: u32) -> io::Result<Self>
	{
		let mut writer = BinaryWriter::new(sink);
		writer.writeRawData(CONTAINER_TAG)?;
		writer.write32(SHADER_FORMAT_VERSION)?;
		writer.writeRawData(PERMUTATION_TAG)?;
		writer.write32(nPermutations)?;
		Ok(Self { writer })
	}

	/// Append one permutation record.
	///
	/// The record's offset-to-next-record field cannot be known until the blob has been written, so a placeholder is
	/// emitted first and patched once the record's true end position (including alignment padding) is known.
	///
	/// # Arguments
	///
	/// * `declaredMask` – The permutation's declared-index bitmask.
	/// * `blob` – The compiled library blob for this permutation.
	pub fn appendPermutation (&mut self, declaredMask: u64, blob: &[u8]) -> io::Result<()>
	{
		let recordPos = self.writer.alignAndTell()?;
		self.writer.write64(declaredMask)?;
		self.writer.write32(blob.len() as u32)?; // primary blob length
		self.writer.write32(0)?; // secondary blob length (reserved)
		let ofsNextField = self.writer.writeTemp32()?;
		self.writer.write32(0)?; // padding (for alignment purposes)
		self.writer.writeRawData(blob)?;
		let recordSize = self.writer.relativeOffset(recordPos)?;
		self.writer.overwriteTemp32(ofsNextField, recordSize)
	}

	/// Flush the container and hand back the sink.
	pub fn finish (mut self) -> io::Result<Sink> {
		self.writer.flush()?;
		Ok(self.writer.intoInner())
	}
}


////
// Package

/// One permutation record read back from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	/// The permutation's declared-index bitmask.
	pub declaredMask: u64,

	/// The compiled library blob.
	pub blob: Vec<u8>,

	/// The reserved secondary blob length. Always 0 as of format version 1.
	pub secondaryLength: u32,

	/// The distance (in bytes) from this record's first field to the next record's first field, alignment padding
	/// included. For the last record this points at the end of the container.
	pub ofsNextRecord: u32
}

/// A fully parsed shader container, holding the compiled blob of every option permutation of one shader.
#[derive(Debug)]
pub struct Package {
	version: u32,
	records: Vec<Record>
}
impl Package
{
	/// Deserialize a container from the given bytes.
	pub fn deserialize (bytes: &[u8]) -> anyhow::Result<Self>
	{
		// Header
		if bytes.len() < 16 {
			return Err(MalformedContainerError::new("truncated header").into());
		}
		if &bytes[0..4] != CONTAINER_TAG {
			return Err(MalformedContainerError::new("bad container tag").into());
		}
		let version = readU32(bytes, 4);
		if version != SHADER_FORMAT_VERSION {
			return Err(MalformedContainerError::new(format!("unsupported format version {version}")).into());
		}
		if &bytes[8..12] != PERMUTATION_TAG {
			return Err(MalformedContainerError::new("bad permutation tag").into());
		}
		let nPermutations = readU32(bytes, 12);

		// Records - the count field is untrusted, so cap the pre-reservation by what the remaining bytes could
		// possibly hold
		let mut records = Vec::with_capacity(
			(nPermutations as usize).min(bytes.len() / RECORD_FIELDS_SIZE as usize)
		);
		let mut pos = 16usize;
		for recordIdx in 0..nPermutations
		{
			if pos + RECORD_FIELDS_SIZE as usize > bytes.len() {
				return Err(MalformedContainerError::new(format!("truncated record #{recordIdx}")).into());
			}
			let declaredMask = readU64(bytes, pos);
			let primaryLength = readU32(bytes, pos+8);
			let secondaryLength = readU32(bytes, pos+12);
			let ofsNextRecord = readU32(bytes, pos+16);

			// The offset field must equal the true (alignment-padded) record size. The length field is untrusted,
			// so the expected size is computed in u64 where it cannot overflow
			let expectedOfs = (RECORD_FIELDS_SIZE as u64 + primaryLength as u64).next_multiple_of(4);
			if ofsNextRecord as u64 != expectedOfs {
				return Err(MalformedContainerError::new(format!(
					"record #{recordIdx} claims size {ofsNextRecord}, expected {expectedOfs}"
				)).into());
			}
			if pos + ofsNextRecord as usize > bytes.len() {
				return Err(MalformedContainerError::new(format!("truncated blob in record #{recordIdx}")).into());
			}

			let blobStart = pos + RECORD_FIELDS_SIZE as usize;
			records.push(Record {
				declaredMask, secondaryLength, ofsNextRecord,
				blob: bytes[blobStart..blobStart+primaryLength as usize].to_vec()
			});
			pos += ofsNextRecord as usize;
		}
		if pos != bytes.len() {
			return Err(MalformedContainerError::new("trailing bytes after last record").into());
		}

		// Done!
		Ok(Self { version, records })
	}

	/// Deserialize a container from the given file.
	pub fn fromFile (filename: impl AsRef<Path>) -> anyhow::Result<Self> {
		Self::deserialize(crate::util::fs::readAllBytes(filename)?.as_slice())
	}

	/// Report the format version the container was written with.
	#[inline]
	pub fn version (&self) -> u32 {
		self.version
	}

	/// Borrow the permutation records, in container order.
	#[inline]
	pub fn permutations (&self) -> &[Record] {
		self.records.as_slice()
	}

	/// Find the most specific compiled variant usable under the given runtime feature mask: the first record (in
	/// container order) whose declared mask is a subset of the features. Because records are written popcount-
	/// descending, the first hit of this linear scan is the most specific match.
	///
	/// # Arguments
	///
	/// * `featureMask` – Declared-index bitmask of the features enabled at runtime.
	pub fn findBestMatch (&self, featureMask: u64) -> Option<&Record> {
		self.records.iter().find(|record| record.declaredMask & !featureMask == 0)
	}
}



//////
//
// Functions
//

#[inline(always)]
fn readU32 (bytes: &[u8], pos: usize) -> u32 {
	u32::from_le_bytes(bytes[pos..pos+4].try_into().unwrap())
}

#[inline(always)]
fn readU64 (bytes: &[u8], pos: usize) -> u64 {
	u64::from_le_bytes(bytes[pos..pos+8].try_into().unwrap())
}

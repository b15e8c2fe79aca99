
//////
//
// Imports
//

// Standard library
use std::io::{self, Seek, SeekFrom, Write};



//////
//
// Constants
//

/// The default alignment (in bytes) that [`BinaryWriter`] enforces for multi-byte fields and raw data.
pub const ALIGNMENT: u64 = 4;

/// The byte value used to fill alignment padding. Deliberately non-zero so misaligned reads stand out when inspecting
/// a hexdump of the produced stream.
pub const PADDING_SENTINEL: u8 = 0xAA;



//////
//
// Classes
//

/// A binary writer producing a little-endian byte stream in which every multi-byte field starts on an
/// [`ALIGNMENT`]-byte boundary. Alignment padding is filled with [`PADDING_SENTINEL`] bytes. The writer supports
/// seek-back patching of previously written placeholder fields via [`writeTemp32`](BinaryWriter::writeTemp32) /
/// [`overwriteTemp32`](BinaryWriter::overwriteTemp32).
pub struct BinaryWriter<Sink: Write+Seek> {
	sink: Sink
}
impl<Sink: Write+Seek> BinaryWriter<Sink>
{
	/// Create a binary writer over the given sink. The sink is used as-is, i.e. writing starts at its current stream
	/// position.
	pub fn new (sink: Sink) -> Self {
		Self { sink }
	}

	/// Write a single byte. Single bytes are never aligned.
	pub fn write8 (&mut self, n: u8) -> io::Result<()> {
		self.sink.write_all(&[n])
	}

	/// Write a 16-bit unsigned integer, aligned to 2 bytes.
	pub fn write16 (&mut self, n: u16) -> io::Result<()> {
		self.checkAlign(2)?;
		self.sink.write_all(&n.to_le_bytes())
	}

	/// Write a 32-bit unsigned integer, aligned to [`ALIGNMENT`] bytes.
	pub fn write32 (&mut self, n: u32) -> io::Result<()> {
		self.checkAlign(4)?;
		self.sink.write_all(&n.to_le_bytes())
	}

	/// Write a 32-bit float, aligned to [`ALIGNMENT`] bytes.
	pub fn writeF32 (&mut self, n: f32) -> io::Result<()> {
		self.checkAlign(4)?;
		self.sink.write_all(&n.to_le_bytes())
	}

	/// Write a 64-bit unsigned integer, aligned to [`ALIGNMENT`] bytes.
	pub fn write64 (&mut self, n: u64) -> io::Result<()> {
		self.checkAlign(ALIGNMENT)?;
		self.sink.write_all(&n.to_le_bytes())
	}

	/// Write a raw blob of bytes verbatim, starting on an [`ALIGNMENT`]-byte boundary.
	pub fn writeRawData (&mut self, data: &[u8]) -> io::Result<()> {
		self.checkAlign(ALIGNMENT)?;
		self.sink.write_all(data)
	}

	/// Write a `0xFFFFFFFF` placeholder for a 32-bit field whose value is not yet known, aligned to [`ALIGNMENT`]
	/// bytes.
	///
	/// # Returns
	///
	/// The stream position of the placeholder, for later patching via [`overwriteTemp32`](Self::overwriteTemp32).
	pub fn writeTemp32 (&mut self) -> io::Result<u64> {
		self.checkAlign(4)?;
		let pos = self.sink.stream_position()?;
		self.sink.write_all(&u32::MAX.to_le_bytes())?;
		Ok(pos)
	}

	/// Overwrite a placeholder written by [`writeTemp32`](Self::writeTemp32) with its final value. The current stream
	/// position is restored afterwards.
	///
	/// # Arguments
	///
	/// * `pos` – The placeholder position as reported by [`writeTemp32`](Self::writeTemp32).
	/// * `n` – The final value of the field.
	pub fn overwriteTemp32 (&mut self, pos: u64, n: u32) -> io::Result<()> {
		let prevPos = self.sink.stream_position()?;
		self.sink.seek(SeekFrom::Start(pos))?;
		self.sink.write_all(&n.to_le_bytes())?;
		self.sink.seek(SeekFrom::Start(prevPos))?;
		Ok(())
	}

	/// Write a NUL-terminated string, followed by zero-fill up to the next [`ALIGNMENT`]-byte boundary. Unlike field
	/// alignment padding, the zero-fill belongs to the string itself and is therefore not sentinel-filled.
	pub fn writeStr (&mut self, st: &str) -> io::Result<()> {
		self.sink.write_all(st.as_bytes())?;
		self.sink.write_all(&[0])?;
		let remainder = self.sink.stream_position()? % ALIGNMENT;
		if remainder != 0 {
			for _ in 0..ALIGNMENT-remainder {
				self.sink.write_all(&[0])?;
			}
		}
		Ok(())
	}

	/// Report the distance from the given stream position to the current (aligned) write position.
	///
	/// # Arguments
	///
	/// * `pos` – The reference position the offset is measured from.
	pub fn relativeOffset (&mut self, pos: u64) -> io::Result<u32> {
		Ok((self.alignAndTell()? - pos) as u32)
	}

	/// Pad the stream up to the next [`ALIGNMENT`]-byte boundary and report the resulting write position.
	pub fn alignAndTell (&mut self) -> io::Result<u64> {
		self.checkAlign(ALIGNMENT)?;
		self.sink.stream_position()
	}

	/// Flush the underlying sink.
	pub fn flush (&mut self) -> io::Result<()> {
		self.sink.flush()
	}

	/// Consume the writer, returning the underlying sink.
	pub fn intoInner (self) -> Sink {
		self.sink
	}

	// Pads the stream with sentinel bytes until the write position is a multiple of `alignment`.
	fn checkAlign (&mut self, alignment: u64) -> io::Result<()> {
		let remainder = self.sink.stream_position()? % alignment;
		if remainder != 0 {
			for _ in 0..alignment-remainder {
				self.sink.write_all(&[PADDING_SENTINEL])?;
			}
		}
		Ok(())
	}
}

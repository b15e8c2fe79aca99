
//////
//
// Imports
//

// Standard library
use std::{collections::BTreeMap, fmt::{Display, Formatter}};



//////
//
// Constants
//

/// The token prefix that identifies a conditional-compile option in shader source code. The prefix must be immediately
/// followed by the two decimal digits of the option's declared index.
pub const OPTION_PREFIX: &str = "F_";

/// The maximum number of distinct options a single shader source may declare. The permutation count is `2^N` and gets
/// stored in (and counted with) a `u32`, so the cap has to stay well below 32. Sources exceeding it are rejected.
pub const MAX_OPTIONS: usize = 20;

// The directive keyword that can introduce an option declaration.
const DIRECTIVE: &str = "#ifdef";



//////
//
// Errors
//

/// An error resulting from a shader source declaring more distinct options than [`MAX_OPTIONS`] allows.
#[derive(Debug)]
pub struct TooManyOptionsError {
	/// The number of distinct options the offending source declared.
	pub count: usize
}
impl Display for TooManyOptionsError {
	fn fmt (&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "TooManyOptionsError[{} declared, at most {MAX_OPTIONS} supported]", self.count)
	}
}
impl std::error::Error for TooManyOptionsError {}



//////
//
// Classes
//

/// The set of conditional-compile options declared by one shader source, keyed by declared index (the two-digit suffix
/// of the option token, `0..=99`).
///
/// Iteration happens in ascending declared-index order. This order is load-bearing: the j-th entry of the set defines
/// the meaning of bit `j` in a [permutation's](crate::permute::Permutation) enumeration mask. If a source declares two
/// options with the same index, the later declaration wins, name included.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionSet {
	options: BTreeMap<u32, String>
}
impl OptionSet
{
	/// Scan the given shader source text for option declarations.
	///
	/// An option declaration is a line containing an `#ifdef` directive whose (whitespace-separated) argument token
	/// starts with [`OPTION_PREFIX`] immediately followed by two decimal digits. The full token becomes the option
	/// name, so any qualifier characters trailing the two digits are retained. Only the first directive occurrence on
	/// each physical line is examined; near-matches (e.g. a single-digit suffix) are silently skipped.
	///
	/// # Arguments
	///
	/// * `source` – The shader source text to scan.
	///
	/// # Returns
	///
	/// The set of declared options, or a [`TooManyOptionsError`] if the source declares more distinct options than the
	/// permutation counter can handle.
	pub fn scan (source: &str) -> Result<Self, TooManyOptionsError>
	{
		let mut options = Self::default();
		for line in source.lines() {
			if let Some((declaredIndex, name)) = scanLine(line) {
				options.insert(declaredIndex, name);
			}
		}
		if options.len() > MAX_OPTIONS {
			return Err(TooManyOptionsError { count: options.len() });
		}
		Ok(options)
	}

	/// Insert an option, overwriting any previous declaration of the same index.
	pub fn insert (&mut self, declaredIndex: u32, name: impl Into<String>) {
		self.options.insert(declaredIndex, name.into());
	}

	/// Report the number of options in the set.
	#[inline]
	pub fn len (&self) -> usize {
		self.options.len()
	}

	/// Report whether the set is empty.
	#[inline]
	pub fn isEmpty (&self) -> bool {
		self.options.is_empty()
	}

	/// Look up the name of the option with the given declared index.
	pub fn name (&self, declaredIndex: u32) -> Option<&str> {
		self.options.get(&declaredIndex).map(String::as_str)
	}

	/// Iterate all `(declaredIndex, name)` pairs in ascending declared-index order.
	pub fn iter (&self) -> impl Iterator<Item=(u32, &str)> {
		self.options.iter().map(|(&declaredIndex, name)| (declaredIndex, name.as_str()))
	}
}



//////
//
// Functions
//

/// Extract the option declaration from a single source line, if there is one. Returns the declared index and the full
/// option token.
fn scanLine (line: &str) -> Option<(u32, &str)>
{
	// Locate the (first) directive on the line
	let pos = line.find(DIRECTIVE)? + DIRECTIVE.len();
	let rest = line[pos..].trim_start();

	// Prefix match
	let token = rest.strip_prefix(OPTION_PREFIX)?;

	// Exactly two decimal digits must follow the prefix
	let digits = token.as_bytes();
	if digits.len() < 2 || !digits[0].is_ascii_digit() || !digits[1].is_ascii_digit() {
		return None;
	}
	let declaredIndex = (digits[0] - b'0') as u32*10  +  (digits[1] - b'0') as u32;

	// The option name is the full non-whitespace token starting at the prefix
	let tokenEnd = rest.find(char::is_whitespace).unwrap_or(rest.len());
	Some((declaredIndex, &rest[..tokenEnd]))
}

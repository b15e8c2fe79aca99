
//////
//
// Imports
//

// Local imports
use crate::options::OptionSet;



//////
//
// Structs
//

/// One combination of enabled options, identified two ways simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation {
	/// Bitmask over the compact `0..N-1` positions of the discovered options: bit `j` is set iff the j-th entry of the
	/// [`OptionSet`] (in ascending declared-index order) is enabled. Used only to drive combination generation and
	/// macro-list derivation, never persisted.
	pub enumerationMask: u32,

	/// Bitmask over the declared indices (`0..=99` as far as the format is concerned, in practice bounded by
	/// [`MAX_OPTIONS`](crate::options::MAX_OPTIONS)): bit `declaredIndex` is set iff that option is enabled. This is
	/// the value persisted in the container.
	pub declaredMask: u64
}



//////
//
// Functions
//

/// Enumerate all `2^N` permutations of the given option set, in container write order.
///
/// The order is: number of enabled options **descending**, ties broken by ascending numeric enumeration mask. A loader
/// holding a runtime feature mask can then scan the container front to back and accept the first permutation whose
/// declared mask is a subset of the features, which yields the most specific available variant without any lookup
/// index.
///
/// # Arguments
///
/// * `options` – The option set to permute. Must hold at most
///               [`MAX_OPTIONS`](crate::options::MAX_OPTIONS) entries, which
///               [`OptionSet::scan`](crate::options::OptionSet::scan) guarantees.
pub fn enumerate (options: &OptionSet) -> Vec<Permutation>
{
	let nPermutations = 1u32 << options.len() as u32;

	// The tie-break relies on the masks being generated in ascending order and the sort being stable
	let mut masks: Vec<u32> = (0..nPermutations).collect();
	masks.sort_by(|a, b| b.count_ones().cmp(&a.count_ones()));

	masks.into_iter().map(|enumerationMask| Permutation {
		enumerationMask, declaredMask: declaredMask(options, enumerationMask)
	}).collect()
}

/// Translate an enumeration mask into the corresponding declared mask by mapping each set bit `j` to the declared
/// index of the j-th option-set entry.
pub fn declaredMask (options: &OptionSet, enumerationMask: u32) -> u64
{
	let mut mask = 0u64;
	for (j, (declaredIndex, _)) in options.iter().enumerate() {
		if enumerationMask & 1<<j != 0 {
			mask |= 1u64 << declaredIndex;
		}
	}
	mask
}

/// Collect the macro names to define for the given enumeration mask: the names of all enabled options, in option-set
/// order.
pub fn macroList (options: &OptionSet, enumerationMask: u32) -> Vec<String>
{
	options.iter().enumerate()
		.filter(|&(j, _)| enumerationMask & 1<<j != 0)
		.map(|(_, (_, name))| name.to_owned())
		.collect()
}

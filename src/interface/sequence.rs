//! Traits for nucleotide sequences.

use crate::error::StrandError;
use crate::interface::alphabet::Nucleotide;

/// A sequence of nucleotide bases addressable by position.
///
/// Externally a sequence is represented as ordered bases; the internal
/// representation is implementation specific.
pub trait NucleotideSequence {
    /// Returns the number of bases in the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence contains no bases.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the base at the given position, or
    /// [StrandError::IndexOutOfBounds] if the position is at or past the end
    /// of the sequence.
    fn get(&self, index: usize) -> Result<Nucleotide, StrandError>;

    /// Copies this sequence into a `Vec` of ASCII characters.
    fn clone_as_vec(&self) -> Vec<u8> {
        (0..self.len())
            .map(|index| {
                u8::from(
                    self.get(index)
                        .expect("sequence is shorter than its reported length"),
                )
            })
            .collect()
    }

    /// Returns the sequence as a nucleotide string, one character per base.
    fn as_string(&self) -> String {
        String::from_utf8(self.clone_as_vec())
            .expect("sequence contains non-utf8 characters (it should be ASCII only)")
    }
}

//! The error types of this crate.

use crate::implementation::packed_strand::RnaStrand;
use thiserror::Error;

/// The error type for strand indexing and duplex pairing.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum StrandError {
    /// A read or write addressed a position at or past the end of the strand.
    #[error("index {index} is out of bounds for a strand of length {length}")]
    IndexOutOfBounds {
        /// The position that was addressed.
        index: usize,
        /// The length of the strand at the time of the access.
        length: usize,
    },

    /// Two strands that are not mutual complements were paired.
    ///
    /// The rejected strands are handed back, so the caller keeps ownership
    /// of both.
    #[error("the paired strands are not mutual complements")]
    NotComplementary {
        /// The strand that was offered as the sense strand.
        sense: RnaStrand,
        /// The strand that was offered as the antisense strand.
        antisense: RnaStrand,
    },
}

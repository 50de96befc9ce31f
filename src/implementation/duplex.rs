//! A double strand built from two complementary nucleotide strands.

use crate::error::StrandError;
use crate::implementation::packed_strand::RnaStrand;
use std::fmt;

/// Two nucleotide strands validated to be mutual complements.
///
/// Complementarity is checked once, when the strands are paired. The duplex
/// exposes no mutators afterwards, so the invariant
/// `sense == antisense.complement()` holds for the lifetime of the value
/// without ever being re-checked.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DnaDuplex {
    sense: RnaStrand,
    antisense: RnaStrand,
}

impl DnaDuplex {
    /// Pairs the two given strands into a duplex.
    ///
    /// Fails with [StrandError::NotComplementary] if `sense` is not the
    /// complement of `antisense`. On failure no duplex is observable and
    /// both strands are handed back inside the error.
    pub fn pair(sense: RnaStrand, antisense: RnaStrand) -> Result<Self, StrandError> {
        if sense != antisense.complement() {
            return Err(StrandError::NotComplementary { sense, antisense });
        }
        Ok(Self { sense, antisense })
    }

    /// Builds a duplex from a single strand by computing its complement as
    /// the antisense strand. Cannot fail.
    pub fn from_sense(sense: RnaStrand) -> Self {
        let antisense = sense.complement();
        Self { sense, antisense }
    }

    /// Returns the sense strand.
    pub fn sense(&self) -> &RnaStrand {
        &self.sense
    }

    /// Returns the antisense strand.
    pub fn antisense(&self) -> &RnaStrand {
        &self.antisense
    }

    /// Returns the number of base pairs in the duplex.
    pub fn len(&self) -> usize {
        self.sense.len()
    }

    /// Returns true if the duplex contains no base pairs.
    pub fn is_empty(&self) -> bool {
        self.sense.is_empty()
    }
}

impl fmt::Display for DnaDuplex {
    /// Renders one line per position, showing the base on the sense strand,
    /// a pairing marker and the base it pairs with, e.g. `A-<>-T`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sense, antisense) in self.sense.iter().zip(self.antisense.iter()) {
            writeln!(f, "{}-<>-{}", sense, antisense)?;
        }
        Ok(())
    }
}

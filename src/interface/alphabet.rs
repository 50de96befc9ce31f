//! The nucleotide alphabet, consisting of the bases A, G, C and T.

use itertools::Itertools;
use thiserror::Error;

/// A nucleotide base, encoded as a two-bit code.
///
/// The discriminants are chosen such that complementary bases have
/// bitwise-complementary codes: `complement(x)` has code `!code(x) & 0b11`.
/// The packed strand representation relies on this to complement whole
/// storage words at once.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine, code `0b00`.
    A = 0,
    /// Guanine, code `0b01`.
    G = 1,
    /// Cytosine, code `0b10`.
    C = 2,
    /// Thymine, code `0b11`.
    T = 3,
}

/// The error type for conversions from ASCII into the nucleotide alphabet.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AlphabetError {
    /// The given ASCII character does not code for a nucleotide.
    #[error("ASCII character {ascii} is not a nucleotide code")]
    AsciiNotPartOfAlphabet {
        /// The offending ASCII character.
        ascii: u8,
    },
}

static NUCLEOTIDE_TABLE: [Nucleotide; 4] =
    [Nucleotide::A, Nucleotide::G, Nucleotide::C, Nucleotide::T];

static NUCLEOTIDE_TO_ASCII_TABLE: [u8; 4] = [b'A', b'G', b'C', b'T'];

static ASCII_TO_NUCLEOTIDE_TABLE: [u8; 256] = [
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 0, 4, 2, 4, 4, 4, 1, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
];

impl Nucleotide {
    /// Returns the two-bit code of this base.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Constructs the base with the given two-bit code, returning `None` if
    /// the code is out of range.
    pub fn from_code(code: u8) -> Option<Self> {
        NUCLEOTIDE_TABLE.get(code as usize).copied()
    }

    /// Like [from_code](Self::from_code), but returns a static reference.
    pub fn from_code_ref(code: u8) -> Option<&'static Self> {
        NUCLEOTIDE_TABLE.get(code as usize)
    }

    /// Returns the base this base pairs with: A with T, and G with C.
    ///
    /// The mapping is an involution without fixed points. Under the two-bit
    /// encoding it flips both bits of the code.
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::T => Nucleotide::A,
        }
    }
}

impl From<Nucleotide> for u8 {
    fn from(base: Nucleotide) -> u8 {
        NUCLEOTIDE_TO_ASCII_TABLE[base as usize]
    }
}

impl From<Nucleotide> for char {
    fn from(base: Nucleotide) -> char {
        char::from(u8::from(base))
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = AlphabetError;

    fn try_from(ascii: u8) -> Result<Self, Self::Error> {
        // The table covers the whole range of u8 and maps everything outside
        // the alphabet to the sentinel 4.
        let code = ASCII_TO_NUCLEOTIDE_TABLE[ascii as usize];
        Nucleotide::from_code(code).ok_or(AlphabetError::AsciiNotPartOfAlphabet { ascii })
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Returns true if the given ASCII character codes for a nucleotide.
/// Valid characters are `A`, `G`, `C` and `T`.
pub fn is_valid_ascii_nucleotide(character: u8) -> bool {
    matches!(character, b'A' | b'G' | b'C' | b'T')
}

/// Returns the ASCII code of the complement of the given ASCII nucleotide.
/// Returns `None` if the given character [is invalid](is_valid_ascii_nucleotide).
pub fn ascii_complement(character: u8) -> Option<u8> {
    match character {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'G' => Some(b'C'),
        b'C' => Some(b'G'),
        _ => None,
    }
}

/// Returns a duplicate-free vector of all characters in the given slice that
/// do not code for a nucleotide, in order of first occurrence.
pub fn invalid_ascii_characters(slice: &[u8]) -> Vec<u8> {
    slice
        .iter()
        .copied()
        .filter(|character| !is_valid_ascii_nucleotide(*character))
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::interface::alphabet::{
        ascii_complement, invalid_ascii_characters, AlphabetError, Nucleotide,
    };

    #[test]
    fn test_ascii_conversion() {
        for ascii in 0u8..=255u8 {
            if ascii == b'A' || ascii == b'G' || ascii == b'C' || ascii == b'T' {
                assert_eq!(
                    u8::from(Nucleotide::try_from(ascii).unwrap_or_else(|_| panic!(
                        "character {} was expected to be valid, but is not",
                        ascii
                    ))),
                    ascii
                );
            } else {
                assert_eq!(
                    Nucleotide::try_from(ascii),
                    Err(AlphabetError::AsciiNotPartOfAlphabet { ascii })
                );
            }
        }
    }

    #[test]
    fn test_complement_is_fixed_point_free_involution() {
        for code in 0u8..4u8 {
            let base = Nucleotide::from_code(code).unwrap();
            assert_ne!(base.complement(), base);
            assert_eq!(base.complement().complement(), base);
        }
    }

    #[test]
    fn test_complement_flips_both_code_bits() {
        for code in 0u8..4u8 {
            let base = Nucleotide::from_code(code).unwrap();
            assert_eq!(base.complement().code(), !base.code() & 0b11);
        }
    }

    #[test]
    fn test_complement_pairing() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
    }

    #[test]
    fn test_ascii_complement_matches_base_complement() {
        for base in [Nucleotide::A, Nucleotide::G, Nucleotide::C, Nucleotide::T] {
            assert_eq!(
                ascii_complement(u8::from(base)),
                Some(u8::from(base.complement()))
            );
        }
        assert_eq!(ascii_complement(b'N'), None);
    }

    #[test]
    fn test_invalid_ascii_characters() {
        assert_eq!(invalid_ascii_characters(b"AGCT"), Vec::<u8>::new());
        assert_eq!(invalid_ascii_characters(b"AGNCTXNA"), vec![b'N', b'X']);
        assert_eq!(invalid_ascii_characters(b"acgt"), vec![b'a', b'c', b'g', b't']);
    }
}

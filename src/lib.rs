//! This crate provides a compact, mutable representation of nucleotide strands, storing each base in two bits of a packed word buffer, together with a validated double strand type.
#![warn(missing_docs)]

pub mod error;
pub mod implementation;
pub mod interface;

//! # Adaptive Arithmetic Coding
//!
//! *Order-0 entropy coding with a model that learns as it goes.*
//!
//! ## Intuition First
//!
//! Picture the interval `[0, 1)`. Give every possible byte a slice of it,
//! sized by how likely that byte is. To encode a message, zoom into the
//! slice of the first byte, then into the slice of the second byte *within*
//! that slice, and so on. Any number inside the final, tiny slice identifies
//! the whole message, and likely bytes shrink the slice less, so they cost
//! fewer bits to pin down.
//!
//! The model here starts with no opinion (every symbol weighs 1) and bumps a
//! symbol's weight each time it is seen. The decoder makes the same updates
//! in the same order, so no table ever needs to be transmitted.
//!
//! ## The Problem
//!
//! Real machines cannot zoom forever into `[0, 1)`. This coder keeps the
//! interval as two 16-bit integers and *renormalizes*: once both ends agree
//! on the leading bit, that bit is final, so it is written out and the
//! interval doubled. The awkward case is an interval squeezed around the
//! midpoint, where the next bit is still unknown; those bits are counted as
//! *pending* and settled later.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1976  Rissanen    Arithmetic coding with finite precision
//! 1979  Pasco       Source coding algorithms for fast data compression
//! 1987  Witten, Neal, Cleary   "Arithmetic Coding for Data Compression" (CACM)
//! ```
//!
//! The integer coder with a bit-plus-follow counter and an adaptive
//! cumulative table is the design of Witten, Neal and Cleary, which this crate follows.
//!
//! ## Mathematical Formulation
//!
//! With cumulative counts $F$ over symbols and total $T$, a symbol $s$ narrows
//! the working range $[l, h]$ of span $r = h - l + 1$ to
//!
//! ```text
//! h' = l + floor(r * F[s + 1] / T) - 1
//! l' = l + floor(r * F[s] / T)
//! ```
//!
//! The decoder recovers $s$ from its 16-bit window $v$ by finding the
//! interval containing `floor(((v - l + 1) * T - 1) / r)`.
//!
//! ## Failure Modes
//!
//! 1. **Precision**: $T$ must stay below 2^14 so the narrowed range never
//!    collapses; the model freezes at 2^14 - 1 and stops adapting.
//! 2. **No framing**: there is no header or checksum. Streams not produced
//!    by [`encode`] decode to unspecified bytes or fail with
//!    [`Error::InputExhausted`].
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`encode`] / [`decode`]**: whole-buffer compression and decompression.
//! - **[`ArithmeticEncoder`] / [`ArithmeticDecoder`]**: symbol-at-a-time access.
//! - **[`FrequencyModel`]**: the adaptive cumulative table.
//! - **[`BitWriter`] / [`BitReader`]**: the MSB-first bit streams underneath.
//!
//! ## References
//!
//! - Witten, I. H., Neal, R. M., Cleary, J. G. (1987). "Arithmetic Coding for Data Compression." CACM 30(6).
//! - Moffat, A., Neal, R. M., Witten, I. H. (1998). "Arithmetic Coding Revisited." ACM TOIS 16(3).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod bitio;
pub mod error;
pub mod model;

pub use arithmetic::{decode, encode, ArithmeticDecoder, ArithmeticEncoder};
pub use bitio::{BitReader, BitWriter};
pub use error::{Error, Result};
pub use model::{FrequencyModel, Probability, ALPHABET_SIZE, EOF_SYMBOL, MAX_FREQUENCY};

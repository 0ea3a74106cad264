//! Adaptive order-0 frequency model.
//!
//! The model keeps a cumulative frequency table over 257 symbols: the 256
//! byte values plus [`EOF_SYMBOL`]. Every symbol starts with weight 1. Each
//! lookup bumps the looked-up symbol's weight by one, so encoder and decoder
//! adapt identically as long as they see the same symbols in the same order.
//!
//! Adaptation stops for good once the total reaches [`MAX_FREQUENCY`]. The
//! coder works with 16-bit bounds, and a total above 2^14 - 1 could narrow a
//! renormalized range to an empty interval.

use crate::error::{Error, Result};

/// End-of-stream sentinel symbol.
pub const EOF_SYMBOL: u16 = 256;

/// Number of symbols in the alphabet (256 bytes plus the sentinel).
pub const ALPHABET_SIZE: usize = 257;

/// Precision of the frequency counts, in bits.
pub const FREQUENCY_BITS: u32 = 14;

/// Total frequency at which the model freezes.
pub const MAX_FREQUENCY: u32 = (1 << FREQUENCY_BITS) - 1;

/// Half-open cumulative interval `[low, high)` of one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probability {
    /// Cumulative frequency of all preceding symbols.
    pub low: u32,
    /// `low` plus the symbol's own frequency.
    pub high: u32,
}

impl Probability {
    /// Frequency of the symbol.
    pub fn width(&self) -> u32 {
        self.high - self.low
    }
}

/// Adaptive cumulative frequency table.
#[derive(Clone, Debug)]
pub struct FrequencyModel {
    /// `cumulative[s]..cumulative[s + 1]` is the interval of symbol `s`.
    cumulative: [u32; ALPHABET_SIZE + 1],
    total: u32,
    frozen: bool,
}

impl FrequencyModel {
    /// Create a model with a uniform prior.
    pub fn new() -> Self {
        let mut model = Self {
            cumulative: [0; ALPHABET_SIZE + 1],
            total: 0,
            frozen: false,
        };
        model.reset();
        model
    }

    /// Restore the uniform prior and resume adaptation.
    pub fn reset(&mut self) {
        for (i, slot) in self.cumulative.iter_mut().enumerate() {
            *slot = i as u32;
        }
        self.total = ALPHABET_SIZE as u32;
        self.frozen = false;
    }

    /// Current total frequency.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whether adaptation has stopped.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// The full cumulative table (`ALPHABET_SIZE + 1` entries).
    pub fn cumulative(&self) -> &[u32] {
        &self.cumulative
    }

    /// Look up the interval of `symbol`, then adapt.
    ///
    /// Returns the interval and the total it is scaled by, both as they were
    /// *before* the update.
    ///
    /// # Errors
    /// Returns `Error::InvalidSymbol` if `symbol` exceeds [`EOF_SYMBOL`].
    pub fn probability_for_symbol(&mut self, symbol: u16) -> Result<(Probability, u32)> {
        if symbol > EOF_SYMBOL {
            return Err(Error::InvalidSymbol(symbol));
        }
        Ok(self.lookup(symbol as usize))
    }

    /// Unchecked [`probability_for_symbol`](FrequencyModel::probability_for_symbol)
    /// for callers that already hold a valid symbol.
    pub(crate) fn lookup(&mut self, symbol: usize) -> (Probability, u32) {
        let prob = Probability {
            low: self.cumulative[symbol],
            high: self.cumulative[symbol + 1],
        };
        let total = self.total;
        self.update(symbol);
        (prob, total)
    }

    /// Resolve a cumulative `offset` to the symbol whose interval contains
    /// it, then adapt exactly like [`probability_for_symbol`].
    ///
    /// # Errors
    /// Returns `Error::OffsetOutOfRange` if `offset >= total()`.
    ///
    /// [`probability_for_symbol`]: FrequencyModel::probability_for_symbol
    pub fn symbol_for_offset(&mut self, offset: u32) -> Result<(Probability, u32, u16)> {
        if offset >= self.total {
            return Err(Error::OffsetOutOfRange {
                offset,
                total: self.total,
            });
        }
        // The table is strictly increasing, so the first upper bound above
        // `offset` identifies the symbol.
        let s = self.cumulative[1..].partition_point(|&high| high <= offset);
        let (prob, total) = self.lookup(s);
        Ok((prob, total, s as u16))
    }

    fn update(&mut self, symbol: usize) {
        if self.frozen {
            return;
        }
        for slot in &mut self.cumulative[symbol + 1..] {
            *slot += 1;
        }
        self.total += 1;
        if self.total >= MAX_FREQUENCY {
            self.frozen = true;
            tracing::debug!(total = self.total, "frequency model frozen");
        }
    }
}

impl Default for FrequencyModel {
    fn default() -> Self {
        Self::new()
    }
}

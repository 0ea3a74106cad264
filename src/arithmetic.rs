//! Binary arithmetic coder with 16-bit bounds.
//!
//! Encoder and decoder run the same state machine over a `[low, high]` range:
//! narrow the range to the current symbol's interval, then rescale while the
//! range sits entirely in one half of the code space, or straddles the
//! midpoint inside the middle half. The encoder turns each rescale into an
//! output bit; the decoder turns it into an input bit shifted into its
//! 16-bit `value` window.
//!
//! Midpoint straddles (underflow) are not resolved immediately. The encoder
//! counts them as *pending* bits and emits them, inverted, right after the
//! next resolved bit. This keeps the output bit-exact without propagating
//! carries back into already written bytes.
//!
//! There is no header. The stream ends with an in-band [`EOF_SYMBOL`], and
//! the decoder stops as soon as it resolves it.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::model::{FrequencyModel, Probability, EOF_SYMBOL};

/// Width of the code space, in bits.
pub const CODE_BITS: u32 = 16;
/// Largest code value.
pub const ONE: u32 = (1 << CODE_BITS) - 1;
/// Midpoint of the code space.
pub const HALF: u32 = 1 << (CODE_BITS - 1);
/// First quarter boundary.
pub const QUARTER: u32 = HALF / 2;
const THREE_QUARTERS: u32 = 3 * QUARTER;

/// Rescaling step chosen by [`CoderRange::shift`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shift {
    /// Range is below the midpoint: resolved bit 0.
    Lower,
    /// Range is at or above the midpoint: resolved bit 1.
    Upper,
    /// Range straddles the midpoint inside `[QUARTER, 3 * QUARTER)`.
    Straddle,
}

impl Shift {
    /// Amount subtracted from the bounds before doubling.
    fn offset(self) -> u32 {
        match self {
            Shift::Lower => 0,
            Shift::Upper => HALF,
            Shift::Straddle => QUARTER,
        }
    }
}

/// Inclusive working interval `[low, high]` of the code space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CoderRange {
    low: u32,
    high: u32,
}

impl CoderRange {
    fn new() -> Self {
        Self { low: 0, high: ONE }
    }

    fn span(&self) -> u32 {
        self.high - self.low + 1
    }

    /// Narrow to the sub-interval of `prob` out of `total`.
    fn narrow(&mut self, prob: Probability, total: u32) {
        let span = self.span();
        // `high` first: both bounds are scaled from the original `low`.
        self.high = self.low + span * prob.high / total - 1;
        self.low += span * prob.low / total;
    }

    /// The rescale the range needs next, if any.
    fn shift(&self) -> Option<Shift> {
        if self.high < HALF {
            Some(Shift::Lower)
        } else if self.low >= HALF {
            Some(Shift::Upper)
        } else if self.low >= QUARTER && self.high < THREE_QUARTERS {
            Some(Shift::Straddle)
        } else {
            None
        }
    }

    fn rescale(&mut self, shift: Shift) {
        let offset = shift.offset();
        self.low = ((self.low - offset) << 1) & ONE;
        self.high = (((self.high - offset) << 1) | 1) & ONE;
    }
}

/// Adaptive arithmetic encoder.
///
/// Single use: [`finish`](ArithmeticEncoder::finish) consumes the encoder,
/// so model and range state can never leak into a second pass.
#[derive(Debug)]
pub struct ArithmeticEncoder {
    model: FrequencyModel,
    writer: BitWriter,
    range: CoderRange,
    pending: u32,
    symbols: usize,
}

impl ArithmeticEncoder {
    /// Create an encoder with a fresh model.
    pub fn new() -> Self {
        Self {
            model: FrequencyModel::new(),
            writer: BitWriter::new(),
            range: CoderRange::new(),
            pending: 0,
            symbols: 0,
        }
    }

    /// Encode one byte.
    pub fn encode_byte(&mut self, byte: u8) {
        let (prob, total) = self.model.lookup(byte as usize);
        self.code(prob, total);
    }

    /// Encode one symbol of the 257-symbol alphabet.
    ///
    /// Encoding [`EOF_SYMBOL`] ends the stream as far as the decoder is
    /// concerned; anything after it is never decoded.
    ///
    /// # Errors
    /// Returns `Error::InvalidSymbol` if `symbol` exceeds [`EOF_SYMBOL`].
    pub fn encode_symbol(&mut self, symbol: u16) -> Result<()> {
        let (prob, total) = self.model.probability_for_symbol(symbol)?;
        self.code(prob, total);
        Ok(())
    }

    /// The encoder's model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Encode the end-of-stream symbol, resolve outstanding bits and return
    /// the compressed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let (prob, total) = self.model.lookup(EOF_SYMBOL as usize);
        self.code(prob, total);

        // Two more bits pin down a value inside the final range.
        self.pending += 1;
        if self.range.low < QUARTER {
            self.put_bit(0);
        } else {
            self.put_bit(1);
        }

        let bits = self.writer.bits_written();
        let out = self.writer.finish();
        tracing::trace!(
            symbols = self.symbols,
            bits,
            bytes = out.len(),
            "encoding finished"
        );
        out
    }

    fn code(&mut self, prob: Probability, total: u32) {
        self.symbols += 1;
        self.range.narrow(prob, total);
        while let Some(shift) = self.range.shift() {
            match shift {
                Shift::Lower => self.put_bit(0),
                Shift::Upper => self.put_bit(1),
                Shift::Straddle => self.pending += 1,
            }
            self.range.rescale(shift);
        }
    }

    /// Emit `bit`, then every pending bit as its complement.
    fn put_bit(&mut self, bit: u8) {
        self.writer.write_bit(bit);
        for _ in 0..self.pending {
            self.writer.write_bit(1 - bit);
        }
        self.pending = 0;
    }
}

impl Default for ArithmeticEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Adaptive arithmetic decoder.
#[derive(Debug)]
pub struct ArithmeticDecoder<'a> {
    model: FrequencyModel,
    reader: BitReader<'a>,
    range: CoderRange,
    /// 16-bit window into the stream; always within `range`.
    value: u32,
    finished: bool,
}

impl<'a> ArithmeticDecoder<'a> {
    /// Create a decoder over `data` and load the first 16 bits.
    ///
    /// # Errors
    /// Returns `Error::InputExhausted` if the stream cannot supply them,
    /// which the reader's synthetic tail rules out in practice.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut reader = BitReader::new(data);
        let mut value = 0;
        for _ in 0..CODE_BITS {
            value = (value << 1) | reader.read_bit().ok_or(Error::InputExhausted)?;
        }
        Ok(Self {
            model: FrequencyModel::new(),
            reader,
            range: CoderRange::new(),
            value,
            finished: false,
        })
    }

    /// Decode the next symbol.
    ///
    /// Once [`EOF_SYMBOL`] has been decoded, every later call returns it
    /// again without touching the model or the stream.
    ///
    /// # Errors
    /// Returns `Error::InputExhausted` if the stream runs dry before the
    /// end-of-stream symbol, which only happens for input this crate did
    /// not produce.
    pub fn decode_symbol(&mut self) -> Result<u16> {
        if self.finished {
            return Ok(EOF_SYMBOL);
        }

        let span = self.range.span();
        let offset = ((self.value - self.range.low + 1) * self.model.total() - 1) / span;
        let (prob, total, symbol) = self.model.symbol_for_offset(offset)?;

        if symbol == EOF_SYMBOL {
            self.finished = true;
            return Ok(symbol);
        }

        self.range.narrow(prob, total);
        while let Some(shift) = self.range.shift() {
            self.value -= shift.offset();
            self.range.rescale(shift);
            let bit = self.reader.read_bit().ok_or(Error::InputExhausted)?;
            self.value = (self.value << 1) | bit;
        }
        debug_assert!(self.range.low <= self.value && self.value <= self.range.high);
        Ok(symbol)
    }

    /// The decoder's model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Decode every symbol up to, but not including, the end-of-stream
    /// symbol.
    pub fn decode_to_end(mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            match self.decode_symbol() {
                Ok(EOF_SYMBOL) => break,
                Ok(symbol) => out.push(symbol as u8),
                Err(e) => {
                    tracing::debug!(decoded = out.len(), error = %e, "decoding failed");
                    return Err(e);
                }
            }
        }
        tracing::trace!(bytes = out.len(), "decoding finished");
        Ok(out)
    }
}

/// Compress `data`.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut encoder = ArithmeticEncoder::new();
    for &byte in data {
        encoder.encode_byte(byte);
    }
    encoder.finish()
}

/// Decompress a stream produced by [`encode`].
///
/// # Errors
/// Returns `Error::InputExhausted` when `data` ends before its end-of-stream
/// symbol. Other non-conforming input decodes to unspecified bytes.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    ArithmeticDecoder::new(data)?.decode_to_end()
}

use std::iter;

use super::interval::{Interval, Shift, renormalize};
use crate::core::dictionary::Dictionary;

/// Incremental range encoder.
///
/// Feed bytes with [`push`](Self::push) or [`extend`](Self::extend) and call
/// [`finish`](Self::finish) for the text. The result is the same as calling
/// [`encode`](crate::encode) on the concatenated input.
///
/// # Example
///
/// ```
/// use base_rc::{Dictionary, RangeEncoder, encode};
///
/// let dict = Dictionary::default();
/// let mut encoder = RangeEncoder::new(&dict);
/// encoder.extend(b"Hello, ".iter().copied());
/// encoder.extend(b"World!".iter().copied());
///
/// assert_eq!(encoder.finish(), encode(b"Hello, World!", &dict));
/// ```
#[derive(Debug, Clone)]
pub struct RangeEncoder<'a> {
    dictionary: &'a Dictionary,
    interval: Interval,
    pending: PendingDigits,
    bytes_encoded: u64,
    output: String,
}

/// Digits held back by deferrals until a later settle decides them.
#[derive(Debug, Clone, Copy, Default)]
struct PendingDigits {
    count: usize,
    reference: u64,
}

impl PendingDigits {
    fn defer(&mut self, reference: u64) {
        if self.count == 0 {
            self.reference = reference;
        }
        self.count += 1;
    }

    /// Writes out the held digits once the leading digit is known: `0` if it
    /// came out as the recorded reference, `base - 1` otherwise.
    fn resolve(&mut self, settled: u64, dictionary: &Dictionary, output: &mut String) {
        if self.count == 0 {
            return;
        }
        let digit = if settled == self.reference {
            0
        } else {
            dictionary.base() as u64 - 1
        };
        output.extend(iter::repeat_n(dictionary.symbol(digit), self.count));
        self.count = 0;
    }
}

fn emit(shift: Shift, dictionary: &Dictionary, pending: &mut PendingDigits, output: &mut String) {
    match shift {
        Shift::Settle(digit) => {
            output.push(dictionary.symbol(digit));
            pending.resolve(digit, dictionary, output);
        }
        Shift::Defer(reference) => pending.defer(reference),
    }
}

impl<'a> RangeEncoder<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_capacity(dictionary, 0)
    }

    /// Creates an encoder whose output buffer is sized for `len` input bytes.
    pub fn with_capacity(dictionary: &'a Dictionary, len: usize) -> Self {
        RangeEncoder {
            dictionary,
            interval: Interval::full(dictionary.precision()),
            pending: PendingDigits::default(),
            bytes_encoded: 0,
            output: String::with_capacity(estimated_len(dictionary, len)),
        }
    }

    /// Encodes one byte.
    pub fn push(&mut self, byte: u8) {
        let dictionary = self.dictionary;
        let precision = dictionary.precision();
        let pending = &mut self.pending;
        let output = &mut self.output;

        self.interval.narrow(byte);
        renormalize(
            &mut self.interval,
            precision,
            precision.max_digits_to_emit(),
            |shift| emit(shift, dictionary, pending, output),
        );
        self.bytes_encoded += 1;
    }

    /// Number of bytes encoded so far.
    pub fn bytes_encoded(&self) -> u64 {
        self.bytes_encoded
    }

    /// Flushes the interval and appends the parity terminator.
    pub fn finish(mut self) -> String {
        let dictionary = self.dictionary;
        let precision = dictionary.precision();
        let pending = &mut self.pending;
        let output = &mut self.output;

        renormalize(
            &mut self.interval,
            precision,
            precision.max_digits_to_decode(),
            |shift| emit(shift, dictionary, pending, output),
        );

        // Zero padding after this digit lands inside the final interval.
        let last = precision.leading_digit(self.interval.hi());
        emit(Shift::Settle(last), dictionary, pending, output);

        output.push(dictionary.symbol(self.bytes_encoded % 2));
        self.output
    }
}

impl Extend<u8> for RangeEncoder<'_> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push(byte);
        }
    }
}

/// Output size in bytes: about `8 / log2(base)` symbols per byte plus the
/// final digits, each symbol at its widest UTF-8 length.
fn estimated_len(dictionary: &Dictionary, len: usize) -> usize {
    let bits_per_symbol = (dictionary.base() as f64).log2();
    let symbols = (len as f64 * 8.0 / bits_per_symbol).ceil() as usize + 3;
    let widest = dictionary
        .chars()
        .iter()
        .map(|c| c.len_utf8())
        .max()
        .unwrap_or(1);
    symbols * widest
}

/// Encodes `data` as text over the dictionary's symbols.
pub fn encode(data: &[u8], dictionary: &Dictionary) -> String {
    let mut encoder = RangeEncoder::with_capacity(dictionary, data.len());
    encoder.extend(data.iter().copied());
    let text = encoder.finish();
    tracing::trace!(
        bytes = data.len(),
        symbols = text.chars().count(),
        base = dictionary.base(),
        "encoded"
    );
    text
}

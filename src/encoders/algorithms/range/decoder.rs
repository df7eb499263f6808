use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::str::Chars;

use super::interval::{Interval, Shift, projected_len, renormalize};
use crate::core::dictionary::Dictionary;
use crate::encoders::algorithms::errors::DecodeError;

/// Characters skipped between symbols: ASCII whitespace, no-break space and
/// the Unicode line and paragraph separators.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{A0}' | '\u{2028}' | '\u{2029}'
    )
}

/// Counts the data symbols in `body`, rejecting anything that is neither a
/// symbol nor a separator. Positions are byte offsets into `text`.
fn count_digits(body: &str, text: &str, dictionary: &Dictionary) -> Result<u64, DecodeError> {
    let mut digits = 0;
    for (position, c) in body.char_indices() {
        if dictionary.decode_char(c).is_some() {
            digits += 1;
        } else if !is_separator(c) {
            return Err(DecodeError::invalid_character(
                c,
                position,
                text,
                &dictionary.describe_symbols(),
            ));
        }
    }
    Ok(digits)
}

/// Reads digits from validated text, skipping separators and yielding `0`
/// once the symbols run out.
#[derive(Debug, Clone)]
struct SymbolCursor<'a> {
    chars: Chars<'a>,
    dictionary: &'a Dictionary,
}

impl<'a> SymbolCursor<'a> {
    fn new(body: &'a str, dictionary: &'a Dictionary) -> Self {
        SymbolCursor {
            chars: body.chars(),
            dictionary,
        }
    }

    fn next_digit(&mut self) -> u64 {
        self.chars
            .by_ref()
            .find_map(|c| self.dictionary.decode_char(c))
            .map_or(0, u64::from)
    }
}

/// Lazy range decoder over encoded text.
///
/// Yields the decoded bytes one at a time. Created by
/// [`decoder`](crate::decoder), which validates the whole text first, so
/// iteration itself cannot fail.
///
/// # Example
///
/// ```
/// use base_rc::{Dictionary, decoder, encode};
///
/// let dict = Dictionary::default();
/// let text = encode(b"lazy bytes", &dict);
///
/// let first_four: Vec<u8> = decoder(&text, &dict).unwrap().take(4).collect();
/// assert_eq!(first_four, b"lazy");
/// ```
#[derive(Debug, Clone)]
pub struct RangeDecoder<'a> {
    dictionary: &'a Dictionary,
    cursor: SymbolCursor<'a>,
    interval: Interval,
    window: u64,
    /// Data symbols in the text, excluding the terminator.
    digits: u64,
    parity: u64,
    shifts: u64,
    bytes_decoded: u64,
    previous_matched: bool,
    finished: bool,
}

impl<'a> RangeDecoder<'a> {
    /// Validates `text` and primes the digit window.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EmptyInput`] for an empty string
    /// - [`DecodeError::InvalidTerminator`] if the last character is not the
    ///   symbol for digit 0 or 1
    /// - [`DecodeError::InvalidCharacter`] for a character that is neither a
    ///   symbol nor a separator
    pub fn new(text: &'a str, dictionary: &'a Dictionary) -> Result<Self, DecodeError> {
        let Some((end, last)) = text.char_indices().next_back() else {
            return Err(DecodeError::EmptyInput);
        };
        let parity = match dictionary.decode_char(last) {
            Some(digit @ (0 | 1)) => u64::from(digit),
            _ => return Err(DecodeError::invalid_terminator(last, end, text)),
        };

        let body = &text[..end];
        let digits = count_digits(body, text, dictionary)?;

        let precision = dictionary.precision();
        let mut cursor = SymbolCursor::new(body, dictionary);
        let mut window = 0;
        for _ in 0..precision.max_digits_to_decode() {
            window = window * precision.base() + cursor.next_digit();
        }

        let interval = Interval::full(precision);
        let projected = projected_len(&interval, precision, 0);

        tracing::trace!(
            symbols = digits,
            parity,
            base = dictionary.base(),
            "decoder primed"
        );

        Ok(RangeDecoder {
            dictionary,
            cursor,
            interval,
            window,
            digits,
            parity,
            shifts: 0,
            bytes_decoded: 0,
            previous_matched: projected == digits,
            finished: projected > digits || (projected == digits && parity == 0),
        })
    }

    /// Number of bytes yielded so far.
    pub fn bytes_decoded(&self) -> u64 {
        self.bytes_decoded
    }
}

impl Iterator for RangeDecoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.finished {
            return None;
        }

        let dictionary = self.dictionary;
        let precision = dictionary.precision();
        let byte = self.interval.byte_at(self.window);
        self.interval.narrow(byte);

        let window = &mut self.window;
        let cursor = &mut self.cursor;
        let count = renormalize(
            &mut self.interval,
            precision,
            precision.max_digits_to_emit(),
            |shift| {
                let kept = match shift {
                    Shift::Settle(_) => precision.shift_out_leading(*window),
                    Shift::Defer(_) => precision.collapse_second(*window),
                };
                *window = kept + cursor.next_digit();
            },
        );
        self.shifts += u64::from(count);
        let candidate = self.bytes_decoded + 1;

        // Compare the encoder's output length, had the input ended here, with
        // the text we were given. It never decreases and matches for at most
        // two consecutive byte counts; the terminator parity picks one.
        let projected = projected_len(&self.interval, precision, self.shifts);
        match projected.cmp(&self.digits) {
            Ordering::Less => {
                self.previous_matched = false;
            }
            Ordering::Greater => {
                self.finished = true;
                return None;
            }
            Ordering::Equal if candidate % 2 == self.parity => {
                self.finished = true;
            }
            Ordering::Equal if self.previous_matched => {
                self.finished = true;
                return None;
            }
            Ordering::Equal => {
                self.previous_matched = true;
            }
        }

        self.bytes_decoded = candidate;
        Some(byte)
    }
}

impl FusedIterator for RangeDecoder<'_> {}

/// Creates a lazy decoder over `text`.
///
/// See [`RangeDecoder::new`] for the errors.
pub fn decoder<'a>(
    text: &'a str,
    dictionary: &'a Dictionary,
) -> Result<RangeDecoder<'a>, DecodeError> {
    RangeDecoder::new(text, dictionary)
}

/// Decodes `text` back into bytes.
pub fn decode(text: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    let bytes: Vec<u8> = decoder(text, dictionary)?.collect();
    tracing::trace!(symbols = text.chars().count(), bytes = bytes.len(), "decoded");
    Ok(bytes)
}

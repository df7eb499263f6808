//! Range-coded base-N text encoding.
//!
//! Turns arbitrary bytes into text over any alphabet of 2 to 256 distinct
//! symbols, and back. Instead of mapping fixed-size chunks the way base64 or
//! base85 do, the encoder narrows an integer interval by each byte and writes
//! out digits in the alphabet's base as soon as they are decided. Output stays
//! within a few symbols of `len * 8 / log2(base)` for every base.
//!
//! The output is not compatible with any standard encoding.
//!
//! # Example
//!
//! ```
//! use base_rc::{Dictionary, decode, encode};
//!
//! let dict = Dictionary::default();
//! let text = encode(b"hello", &dict);
//! assert_eq!(text, "yUsXPJ1");
//! assert_eq!(decode(&text, &dict).unwrap(), b"hello");
//! ```
//!
//! Named alphabets come from [`DictionaryRegistry`]:
//!
//! ```
//! use base_rc::{DictionaryRegistry, decode, encode};
//!
//! let registry = DictionaryRegistry::load_default().unwrap();
//! let hangul = registry.dictionary("hangul").unwrap();
//! let text = encode(b"\x00\xff", &hangul);
//! assert_eq!(decode(&text, &hangul).unwrap(), b"\x00\xff");
//! ```

mod core;
mod encoders;

pub mod convenience;
pub mod prelude;

pub use crate::core::config::{DEFAULT_DICTIONARY, DictionaryConfig, DictionaryRegistry, Settings};
pub use crate::core::dictionary::{DEFAULT_ALPHABET, Dictionary, DictionaryBuilder};
pub use crate::core::precision::{MAX_BASE, MIN_BASE, Precision};
pub use convenience::{decode_to_string, encode_str};
pub use encoders::algorithms::range::{RangeDecoder, RangeEncoder};
pub use encoders::algorithms::{
    DecodeError, DictionaryError, DictionaryNotFoundError, find_closest_dictionary,
};

/// Encodes binary data as text over the dictionary's symbols.
///
/// The output ends with the symbol for digit 0 or 1, which records whether
/// the input length is even or odd.
///
/// # Example
///
/// ```
/// use base_rc::{Dictionary, encode};
///
/// let binary: Dictionary = "01".parse().unwrap();
/// assert_eq!(encode(&[0xA5], &binary), "1010010111");
/// ```
pub fn encode(data: &[u8], dictionary: &Dictionary) -> String {
    encoders::algorithms::range::encode(data, dictionary)
}

/// Decodes text produced by [`encode`] with the same dictionary.
///
/// Separators (ASCII whitespace, U+00A0, U+2028, U+2029) may appear anywhere
/// before the final symbol and are skipped.
///
/// # Errors
///
/// Returns [`DecodeError`] if the text is empty, does not end with the symbol
/// for digit 0 or 1, or contains a character that is neither a symbol nor a
/// separator. Other text decodes to some bytes without error.
pub fn decode(encoded: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    encoders::algorithms::range::decode(encoded, dictionary)
}

/// Validates `encoded` and returns an iterator over the decoded bytes.
///
/// # Errors
///
/// The same as [`decode`]; all validation happens before the first byte.
pub fn decoder<'a>(
    encoded: &'a str,
    dictionary: &'a Dictionary,
) -> Result<RangeDecoder<'a>, DecodeError> {
    encoders::algorithms::range::decoder(encoded, dictionary)
}

//! String helpers around [`encode`] and [`decode`].

use crate::{DecodeError, Dictionary, decode, encode};

/// Encodes the UTF-8 bytes of `text`.
///
/// # Example
/// ```
/// use base_rc::{Dictionary, encode_str};
///
/// let dict = Dictionary::default();
/// assert_eq!(encode_str("hello", &dict), "yUsXPJ1");
/// ```
pub fn encode_str(text: &str, dictionary: &Dictionary) -> String {
    encode(text.as_bytes(), dictionary)
}

/// Decodes `encoded` and interprets the bytes as UTF-8.
///
/// # Errors
///
/// Any [`DecodeError`] from decoding, or [`DecodeError::InvalidUtf8`] if the
/// bytes are not valid UTF-8.
///
/// # Example
/// ```
/// use base_rc::{Dictionary, decode_to_string};
///
/// let dict = Dictionary::default();
/// assert_eq!(decode_to_string("yUsXPJ1", &dict).unwrap(), "hello");
/// ```
pub fn decode_to_string(encoded: &str, dictionary: &Dictionary) -> Result<String, DecodeError> {
    let bytes = decode(encoded, dictionary)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

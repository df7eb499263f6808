use std::collections::HashMap;
use std::str::FromStr;

use crate::core::precision::{MAX_BASE, MIN_BASE, Precision};
use crate::encoders::algorithms::errors::DictionaryError;

/// The 85-symbol alphabet used when no other is configured.
///
/// Digits, lower case, upper case, then punctuation. Contains no quotes,
/// backslashes or whitespace.
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// An encoding alphabet: the ordered symbols, their inverse lookup table and
/// the fixed-precision constants derived from the alphabet size.
///
/// Immutable once built, so one dictionary can serve any number of encode and
/// decode calls, including from several threads at once.
///
/// # Example
///
/// ```
/// use base_rc::Dictionary;
///
/// let dict = Dictionary::builder()
///     .chars_from_str("0123456789")
///     .build()
///     .unwrap();
///
/// assert_eq!(dict.base(), 10);
/// assert_eq!(dict.encode_digit(7), Some('7'));
/// assert_eq!(dict.decode_char('3'), Some(3));
/// assert_eq!(dict.decode_char('x'), None);
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    chars: Vec<char>,
    ascii_lookup: [Option<u8>; 128],
    char_to_digit: HashMap<char, u8>,
    precision: Precision,
}

impl Dictionary {
    /// Creates a new DictionaryBuilder.
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// Creates a dictionary from a list of symbols.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than 2 or more than 256 symbols, or if a
    /// symbol appears twice.
    pub fn new(chars: Vec<char>) -> Result<Self, DictionaryError> {
        Self::builder().chars(chars).build()
    }

    /// Returns the base (number of symbols).
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Returns the precision constants derived for this base.
    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Returns the symbols in digit order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Encodes a digit as its symbol.
    ///
    /// Returns `None` if the digit is not below the base.
    pub fn encode_digit(&self, digit: u8) -> Option<char> {
        self.chars.get(usize::from(digit)).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the character is not in the dictionary.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.ascii_lookup[c as usize]
        } else {
            self.char_to_digit.get(&c).copied()
        }
    }

    /// Symbol for a digit the range coder produced; always below the base.
    pub(crate) fn symbol(&self, digit: u64) -> char {
        self.chars[digit as usize]
    }

    /// Short description of the accepted symbols, for error hints.
    pub(crate) fn describe_symbols(&self) -> String {
        if self.base() <= 64 {
            self.chars.iter().collect()
        } else {
            format!("{} characters in dictionary", self.base())
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        DEFAULT_ALPHABET
            .parse()
            .expect("default alphabet has 85 distinct symbols")
    }
}

impl FromStr for Dictionary {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::builder().chars_from_str(s).build()
    }
}

/// Builder for constructing a Dictionary.
///
/// # Example
///
/// ```
/// use base_rc::Dictionary;
///
/// let dict = Dictionary::builder()
///     .chars(vec!['a', 'b', 'c'])
///     .build()
///     .unwrap();
/// assert_eq!(dict.base(), 3);
/// ```
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    chars: Option<Vec<char>>,
}

impl DictionaryBuilder {
    /// Creates a new DictionaryBuilder with no symbols.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbols, in digit order.
    pub fn chars<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.chars = Some(chars.into_iter().collect());
        self
    }

    /// Sets the symbols from the characters of a string.
    pub fn chars_from_str(self, s: &str) -> Self {
        self.chars(s.chars())
    }

    /// Validates the symbols and builds the lookup tables.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::InvalidSize`] for fewer than 2 or more than 256
    ///   symbols
    /// - [`DictionaryError::DuplicateSymbol`] if a symbol repeats
    pub fn build(self) -> Result<Dictionary, DictionaryError> {
        let chars = self.chars.unwrap_or_default();
        if !(MIN_BASE..=MAX_BASE).contains(&chars.len()) {
            return Err(DictionaryError::InvalidSize { size: chars.len() });
        }
        let precision = Precision::for_base(chars.len())?;

        let mut ascii_lookup = [None; 128];
        let mut char_to_digit = HashMap::new();
        let mut seen: HashMap<char, usize> = HashMap::with_capacity(chars.len());

        for (index, &c) in chars.iter().enumerate() {
            if let Some(first) = seen.insert(c, index) {
                return Err(DictionaryError::DuplicateSymbol {
                    symbol: c,
                    first,
                    second: index,
                });
            }
            // At most 256 symbols, so every index fits.
            let digit = index as u8;
            if c.is_ascii() {
                ascii_lookup[c as usize] = Some(digit);
            } else {
                char_to_digit.insert(c, digit);
            }
        }

        Ok(Dictionary {
            chars,
            ascii_lookup,
            char_to_digit,
            precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let dict = Dictionary::default();
        assert_eq!(dict.base(), 85);
        assert_eq!(dict.encode_digit(0), Some('0'));
        assert_eq!(dict.encode_digit(84), Some('#'));
        assert_eq!(dict.encode_digit(85), None);
        assert_eq!(dict.decode_char('Z'), Some(61));
        assert_eq!(dict.decode_char(' '), None);
        assert_eq!(dict.decode_char('"'), None);
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(
            Dictionary::from_str("a").unwrap_err(),
            DictionaryError::InvalidSize { size: 1 }
        );
        assert!(Dictionary::from_str("").is_err());
        assert!(Dictionary::builder().build().is_err());
        assert!(Dictionary::from_str("ab").is_ok());

        let max: Vec<char> = (0..256u32)
            .map(|i| char::from_u32(0x100 + i).unwrap())
            .collect();
        assert_eq!(Dictionary::new(max.clone()).unwrap().base(), 256);

        let mut too_many = max;
        too_many.push('!');
        assert_eq!(
            Dictionary::new(too_many).unwrap_err(),
            DictionaryError::InvalidSize { size: 257 }
        );
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = Dictionary::from_str("abcb").unwrap_err();
        assert_eq!(
            err,
            DictionaryError::DuplicateSymbol {
                symbol: 'b',
                first: 1,
                second: 3,
            }
        );
    }

    #[test]
    fn test_unicode_symbols() {
        let dict = Dictionary::from_str("αβγδ").unwrap();
        assert_eq!(dict.base(), 4);
        assert_eq!(dict.decode_char('γ'), Some(2));
        assert_eq!(dict.decode_char('a'), None);
        assert_eq!(dict.encode_digit(3), Some('δ'));
    }

    #[test]
    fn test_mixed_ascii_and_unicode() {
        let dict = Dictionary::from_str("0é1").unwrap();
        assert_eq!(dict.decode_char('0'), Some(0));
        assert_eq!(dict.decode_char('é'), Some(1));
        assert_eq!(dict.decode_char('1'), Some(2));
    }

    #[test]
    fn test_precision_follows_base() {
        let dict = Dictionary::from_str("0123456789abcdef").unwrap();
        assert_eq!(dict.precision(), &Precision::for_base(16).unwrap());
    }

    #[test]
    fn test_describe_symbols() {
        let small = Dictionary::from_str("01").unwrap();
        assert_eq!(small.describe_symbols(), "01");
        assert_eq!(
            Dictionary::default().describe_symbols(),
            "85 characters in dictionary"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary>();
    }
}

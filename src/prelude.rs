//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base_rc::prelude::*;
//!
//! let registry = DictionaryRegistry::load_default().unwrap();
//! let dict = registry.dictionary(registry.default_dictionary_name()).unwrap();
//! assert_eq!(decode_to_string(&encode_str("hi", &dict), &dict).unwrap(), "hi");
//! ```

// Core encoding/decoding
pub use crate::{decode, decode_to_string, decoder, encode, encode_str};

// Incremental forms
pub use crate::{RangeDecoder, RangeEncoder};

// Alphabets
pub use crate::{Dictionary, DictionaryRegistry, Precision};

// Errors
pub use crate::{DecodeError, DictionaryError};

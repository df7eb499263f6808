pub mod errors;
pub mod range;

// Re-export error types for public API
pub use errors::{DecodeError, DictionaryError, DictionaryNotFoundError, find_closest_dictionary};

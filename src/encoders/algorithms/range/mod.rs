//! Range coding between bytes and base-N digits.
//!
//! The encoder narrows an integer interval by each byte and emits output
//! digits as soon as the interval's leading digit is decided. The decoder
//! replays the same interval arithmetic against a window of input digits.
//! The final symbol records the parity of the byte count, which tells a
//! genuine trailing byte apart from the termination padding.

mod decoder;
mod encoder;
mod interval;

pub use decoder::{RangeDecoder, decode, decoder};
pub use encoder::{RangeEncoder, encode};

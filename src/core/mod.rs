pub mod config;
pub mod dictionary;
pub mod precision;

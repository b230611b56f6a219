//! Shared error types for the fixint big number library.

#![forbid(unsafe_code)]

mod error;

pub use error::BnError;

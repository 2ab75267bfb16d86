//! Immutable UTF-8 string views
//!
//! [`Text`] views shared bytes by byte range or as decoded code points. The
//! [`utf8`] module holds the single-step decoder both paths rely on.

mod text;
pub mod utf8;

pub use text::{Decode, Text};
pub use utf8::REPLACEMENT;

//! # Viewkit: View-Based Collections
//!
//! This crate provides three collections whose values are lightweight views
//! over storage that may be shared between several handles.
//!
//! ## Key Features
//!
//! - **Growable Sequence**: [`Seq<T>`] views share a backing allocation; appends
//!   within capacity are visible to every alias, appends beyond it reallocate
//! - **Associative Map**: [`Map<K, V>`] lookups never fail and report presence
//!   alongside the value type's default
//! - **UTF-8 String View**: [`Text`] slices by byte range and decodes lazily,
//!   substituting U+FFFD for malformed input
//! - **Configuration**: growth and map policies loadable from presets, the
//!   environment or JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use viewkit::{Map, Seq, Text};
//!
//! // Sub-views alias the parent's storage
//! let s: Seq<i32> = Seq::make(3, 5).unwrap();
//! let t = s.append(&[1]).unwrap();
//! let u = s.append(&[2]).unwrap();
//! assert_eq!(t.get(3).unwrap(), 2);
//! assert!(t.shares_storage_with(&u));
//!
//! // Missing keys read as the zero value
//! let mut counts: Map<&str, u32> = Map::new();
//! counts.increment_by("seen", 1);
//! assert_eq!(counts.get(&"seen"), (1, true));
//! assert_eq!(counts.get(&"unseen"), (0, false));
//!
//! // Byte views may split a code point
//! let text = Text::from("Hello 🌎");
//! let cut = text.byte_slice(4, 7).unwrap();
//! assert_eq!(cut.to_code_points(), vec!['o', ' ', '\u{FFFD}']);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod containers;
pub mod error;
pub mod hash_map;
pub mod string;

// Re-export core types
pub use config::{Config, GrowthPolicy, MapConfig};
pub use containers::{copy_into, Seq};
pub use error::{Result, ViewkitError};
pub use hash_map::Map;
pub use string::{Decode, Text};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (logs the version; safe to call repeatedly)
pub fn init() {
    log::debug!("Initializing viewkit v{}", VERSION);
}

//! Growable sequence views
//!
//! This module provides [`Seq<T>`], a resizable, indexable view over a shared
//! backing allocation.
//!
//! ## Aliasing rules
//!
//! - **Sub-views** ([`Seq::view`], [`Seq::slice`]) share storage and keep the
//!   parent's remaining capacity, so appending to them can overwrite elements
//!   the parent still sees.
//! - **Capped sub-views** ([`Seq::view_capped`]) cut the capacity, forcing an
//!   append past it to reallocate.
//! - **Reallocation** copies the visible elements; the new view is independent
//!   of every earlier alias.

mod seq;

pub use seq::{copy_into, Iter, Seq};

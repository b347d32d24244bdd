//! Style configuration store.
//!
//! This module provides the flat property map edited by the UI controls:
//!
//! - [`Property`]: The closed set of CSS properties the tool knows about
//! - [`Category`]: The editor panel a property belongs to
//! - [`StyleValue`]: A text or numeric property value
//! - [`StyleConfig`]: The store itself, with set, partial update and reset
//!
//! Structured state (gradients, filters, queries and so on) lives in its own
//! types and is combined with the store by [`Studio`](crate::Studio).

mod property;
mod store;
mod value;

pub use property::{Category, Property};
pub use store::StyleConfig;
pub use value::StyleValue;

//! Visual effect composers: filters and shadows.

mod filter;
mod shadow;

pub use filter::FilterSettings;
pub use shadow::{compose_box_shadow, compose_text_shadow, Shadow};

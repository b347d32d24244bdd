//! # Stylecraft - structured CSS authoring state
//!
//! Stylecraft is the model behind a visual CSS editor. Form controls write
//! into an owned [`Studio`]; the crate turns the current snapshot into CSS
//! declarations, stylesheets and a standalone HTML export on demand.
//!
//! ## Core concepts
//!
//! - [`StyleConfig`]: Flat map of known [`Property`] values with partial update and reset
//! - [`serialize`]: `property: value` declarations from a config snapshot
//! - [`GradientDescriptor`]: Color stops composed into a `<gradient-function>`
//! - [`PresetLibrary`]: Named gradient and style presets applied back into state
//! - [`Studio`]: All editors for one element, assembled into CSS
//! - [`Exporter`]: HTML document + stylesheet bundle
//!
//! ## Quick start
//!
//! ```rust
//! use stylecraft::{PresetLibrary, Property, Studio};
//!
//! let mut studio = Studio::new();
//! studio.config.set(Property::FontSize, "16px");
//! studio.config.set(Property::FontWeight, "");
//! studio.apply_gradient_preset(PresetLibrary::builtin().gradient("sunset").unwrap());
//!
//! assert_eq!(
//!     studio.css(),
//!     "font-size: 16px;\nbackground-image: linear-gradient(to right, #ff7e5f 0%, #feb47b 100%);"
//! );
//! ```
//!
//! ## Validation
//!
//! Values are never validated. A malformed color or length is emitted
//! verbatim; the CSS engine reading the output is the final judge and
//! drops what it cannot parse.

pub mod animation;
pub mod clip_path;
pub mod config;
pub mod custom;
pub mod effects;
mod error;
pub mod export;
pub mod gradient;
pub mod import;
pub mod preset;
pub mod responsive;
pub mod serialize;
mod studio;
pub mod transform;
mod util;

pub use animation::{AnimationSettings, Iteration, KeyframeStep, Keyframes};
pub use clip_path::{ClipShape, Point};
pub use config::{Category, Property, StyleConfig, StyleValue};
pub use custom::CustomProperty;
pub use effects::{FilterSettings, Shadow};
pub use error::{Error, Result};
pub use export::{ExportBundle, ExportOptions, Exporter};
pub use gradient::{ColorStop, Direction, GradientDescriptor, GradientKind};
pub use import::{ImportReport, SkipReason, SkippedDeclaration};
pub use preset::{GradientPreset, PresetLibrary, PresetStop, StylePreset};
pub use responsive::{
    ColorScheme, ContainerCondition, MediaCondition, Orientation, QueryKind, QueryRule,
};
pub use serialize::Declaration;
pub use studio::Studio;
pub use transform::TransformSettings;
pub use util::{sanitize_identifier, to_camel_case, to_kebab_case, with_unit};

//! Error type for the fallible edges of the crate.
//!
//! Serialization and composition never fail: malformed values are passed
//! through verbatim and left for the CSS engine to reject. Errors only come
//! from looking things up by name, decoding preset data and rendering the
//! export template.

use thiserror::Error;

/// Errors returned by stylecraft operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A property key that is not part of the known property set.
    #[error("unknown CSS property '{0}'")]
    UnknownProperty(String),

    /// A preset name that is not present in the library.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// A color stop id that does not exist in the gradient.
    #[error("no color stop with id '{0}'")]
    StopNotFound(String),

    /// Removing a stop would leave the gradient below its minimum.
    #[error("a gradient needs at least {min} color stops")]
    TooFewStops { min: usize },

    /// Preset or option data could not be decoded.
    #[error("invalid preset data: {0}")]
    PresetFormat(String),

    /// The export template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::PresetFormat(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::PresetFormat(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

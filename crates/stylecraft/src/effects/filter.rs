//! `filter` / `backdrop-filter` composition.

use serde::{Deserialize, Serialize};

use crate::util::with_unit;

/// Slider state for the filter editor.
///
/// Percentages are on the CSS scale (`100` is neutral for brightness,
/// contrast, opacity and saturate; `0` for the rest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Pixels.
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    /// Degrees.
    pub hue_rotate: f64,
    pub invert: f64,
    pub opacity: f64,
    pub saturate: f64,
    pub sepia: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            hue_rotate: 0.0,
            invert: 0.0,
            opacity: 100.0,
            saturate: 100.0,
            sepia: 0.0,
        }
    }
}

impl FilterSettings {
    /// Returns `true` when every slider is at its neutral value.
    pub fn is_neutral(&self) -> bool {
        *self == FilterSettings::default()
    }

    /// Composes the filter function list, or `None` when neutral.
    ///
    /// Only non-neutral functions are emitted, in a fixed order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::FilterSettings;
    ///
    /// let filter = FilterSettings { blur: 4.0, sepia: 30.0, ..Default::default() };
    /// assert_eq!(filter.compose().as_deref(), Some("blur(4px) sepia(30%)"));
    /// assert_eq!(FilterSettings::default().compose(), None);
    /// ```
    pub fn compose(&self) -> Option<String> {
        let defaults = FilterSettings::default();
        let functions: [(&str, f64, f64, &str); 9] = [
            ("blur", self.blur, defaults.blur, "px"),
            ("brightness", self.brightness, defaults.brightness, "%"),
            ("contrast", self.contrast, defaults.contrast, "%"),
            ("grayscale", self.grayscale, defaults.grayscale, "%"),
            ("hue-rotate", self.hue_rotate, defaults.hue_rotate, "deg"),
            ("invert", self.invert, defaults.invert, "%"),
            ("opacity", self.opacity, defaults.opacity, "%"),
            ("saturate", self.saturate, defaults.saturate, "%"),
            ("sepia", self.sepia, defaults.sepia, "%"),
        ];

        let parts: Vec<String> = functions
            .iter()
            .filter(|(_, value, neutral, _)| value != neutral)
            .map(|(name, value, _, unit)| format!("{}({})", name, with_unit(*value, unit)))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

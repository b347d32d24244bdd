//! `transform` composition.

use serde::{Deserialize, Serialize};

use crate::util::with_unit;

/// Slider state for the transform editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Pixels; `0` disables the `perspective()` function.
    pub perspective: f64,
    /// Pixels.
    pub translate_x: f64,
    /// Pixels.
    pub translate_y: f64,
    /// Degrees.
    pub rotate: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees.
    pub skew_x: f64,
    /// Degrees.
    pub skew_y: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            perspective: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl TransformSettings {
    /// Returns `true` when the settings describe the identity transform.
    pub fn is_identity(&self) -> bool {
        self.compose().is_none()
    }

    /// Composes the transform function list, or `None` for the identity.
    ///
    /// Functions are emitted in the order
    /// `perspective translate rotate scale skew`, each only when it changes
    /// something.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::TransformSettings;
    ///
    /// let t = TransformSettings { rotate: 45.0, scale_x: 1.5, scale_y: 1.5, ..Default::default() };
    /// assert_eq!(t.compose().as_deref(), Some("rotate(45deg) scale(1.5, 1.5)"));
    /// ```
    pub fn compose(&self) -> Option<String> {
        let mut parts = Vec::new();

        if self.perspective > 0.0 {
            parts.push(format!("perspective({})", with_unit(self.perspective, "px")));
        }
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            parts.push(format!(
                "translate({}, {})",
                with_unit(self.translate_x, "px"),
                with_unit(self.translate_y, "px")
            ));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({})", with_unit(self.rotate, "deg")));
        }
        if self.scale_x != 1.0 || self.scale_y != 1.0 {
            parts.push(format!(
                "scale({}, {})",
                with_unit(self.scale_x, ""),
                with_unit(self.scale_y, "")
            ));
        }
        if self.skew_x != 0.0 || self.skew_y != 0.0 {
            parts.push(format!(
                "skew({}, {})",
                with_unit(self.skew_x, "deg"),
                with_unit(self.skew_y, "deg")
            ));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert!(TransformSettings::default().is_identity());
        assert_eq!(TransformSettings::default().compose(), None);
    }

    #[test]
    fn test_all_functions_in_order() {
        let t = TransformSettings {
            perspective: 800.0,
            translate_x: 10.0,
            translate_y: -5.0,
            rotate: 30.0,
            scale_x: 2.0,
            scale_y: 0.5,
            skew_x: 10.0,
            skew_y: 0.0,
        };
        assert_eq!(
            t.compose().unwrap(),
            "perspective(800px) translate(10px, -5px) rotate(30deg) scale(2, 0.5) skew(10deg, 0deg)"
        );
    }

    #[test]
    fn test_translate_only_y() {
        let t = TransformSettings {
            translate_y: 12.0,
            ..Default::default()
        };
        assert_eq!(t.compose().unwrap(), "translate(0px, 12px)");
    }

    #[test]
    fn test_negative_perspective_ignored() {
        let t = TransformSettings {
            perspective: -10.0,
            ..Default::default()
        };
        assert_eq!(t.compose(), None);
        assert!(t.is_identity());
    }

    #[test]
    fn test_scale_is_not_identity() {
        let t = TransformSettings {
            scale_x: 2.0,
            ..Default::default()
        };
        assert!(!t.is_identity());
    }
}

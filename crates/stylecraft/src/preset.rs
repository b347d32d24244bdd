//! Presets and preset application.
//!
//! A preset is an immutable, named bundle of literal values. Applying one
//! overwrites the targeted state fields with those literals; there is no
//! merging.
//!
//! - [`GradientPreset`]: replaces a gradient's kind, direction, angle and stops
//! - [`StylePreset`]: overwrites the named properties of a [`StyleConfig`]
//! - [`PresetLibrary`]: a collection of both, decoded from YAML or JSON
//!
//! The crate ships a built-in library, see [`PresetLibrary::builtin`].

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::{Property, StyleConfig, StyleValue};
use crate::error::{Error, Result};
use crate::gradient::{Direction, GradientDescriptor, GradientKind};

const BUILTIN_PRESETS: &str = include_str!("../presets/builtin.yaml");

static BUILTIN: Lazy<PresetLibrary> = Lazy::new(|| {
    PresetLibrary::from_yaml_str(BUILTIN_PRESETS).expect("built-in presets are valid YAML")
});

/// A single color of a gradient preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetStop {
    pub color: String,
    pub position: f64,
}

/// A named gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientPreset {
    pub name: String,
    #[serde(default)]
    pub kind: GradientKind,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub angle: f64,
    pub colors: Vec<PresetStop>,
}

/// A named set of property values.
///
/// Keys may be camelCase keys or kebab-case CSS names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    pub name: String,
    pub properties: BTreeMap<String, StyleValue>,
}

/// A collection of gradient and style presets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    #[serde(default)]
    pub gradients: Vec<GradientPreset>,
    #[serde(default)]
    pub styles: Vec<StylePreset>,
}

impl PresetLibrary {
    /// The presets bundled with the crate.
    pub fn builtin() -> &'static PresetLibrary {
        &BUILTIN
    }

    /// Decodes a library from YAML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::PresetLibrary;
    ///
    /// let library = PresetLibrary::from_yaml_str(r#"
    /// gradients:
    ///   - name: fire
    ///     colors:
    ///       - { color: orange, position: 0 }
    ///       - { color: red, position: 100 }
    /// "#).unwrap();
    /// assert!(library.gradient("fire").is_ok());
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Decodes a library from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up a gradient preset by name.
    pub fn gradient(&self, name: &str) -> Result<&GradientPreset> {
        self.gradients
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// Looks up a style preset by name.
    pub fn style(&self, name: &str) -> Result<&StylePreset> {
        self.styles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// Adds the presets of another library, replacing same-named entries.
    pub fn extend(&mut self, other: PresetLibrary) {
        for preset in other.gradients {
            self.gradients.retain(|p| p.name != preset.name);
            self.gradients.push(preset);
        }
        for preset in other.styles {
            self.styles.retain(|p| p.name != preset.name);
            self.styles.push(preset);
        }
    }
}

impl GradientDescriptor {
    /// Replaces kind, direction, angle and stops with the preset's values.
    ///
    /// The repeating flag is left alone. Stops get fresh ids and keep the
    /// preset's listed order.
    pub fn apply_preset(&mut self, preset: &GradientPreset) {
        debug!("applying gradient preset '{}'", preset.name);
        self.kind = preset.kind;
        self.direction = preset.direction;
        self.angle = preset.angle;
        self.replace_stops(preset.colors.iter().map(|c| (c.color.clone(), c.position)));
    }
}

impl From<&GradientPreset> for GradientDescriptor {
    fn from(preset: &GradientPreset) -> Self {
        let mut gradient = GradientDescriptor::empty();
        gradient.apply_preset(preset);
        gradient
    }
}

impl StyleConfig {
    /// Overwrites the properties named by the preset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if any key is not a known
    /// property. Nothing is written in that case.
    pub fn apply_preset(&mut self, preset: &StylePreset) -> Result<()> {
        debug!("applying style preset '{}'", preset.name);
        let resolved = preset
            .properties
            .iter()
            .map(|(key, value)| Property::resolve(key).map(|p| (p, value.clone())))
            .collect::<Result<Vec<_>>>()?;
        self.update(resolved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_parses() {
        let library = PresetLibrary::builtin();
        assert!(!library.gradients.is_empty());
        assert!(!library.styles.is_empty());
    }

    #[test]
    fn test_builtin_style_keys_are_known() {
        for preset in &PresetLibrary::builtin().styles {
            for key in preset.properties.keys() {
                assert!(Property::resolve(key).is_ok(), "{}: {}", preset.name, key);
            }
        }
    }

    #[test]
    fn test_apply_gradient_preset_replaces_fields() {
        let preset = PresetLibrary::builtin().gradient("aurora").unwrap();
        let mut g = GradientDescriptor::new();
        g.kind = GradientKind::Conic;
        g.repeating = true;
        g.apply_preset(preset);

        assert_eq!(g.kind, GradientKind::Linear);
        assert_eq!(g.direction, Direction::Custom);
        assert_eq!(g.angle, 135.0);
        assert!(g.repeating);
        assert_eq!(g.stops().len(), 3);
        assert_eq!(
            g.compose().unwrap(),
            "repeating-linear-gradient(135deg, #00c9ff 0%, #92fe9d 50%, #f0f 100%)"
        );
    }

    #[test]
    fn test_apply_preset_sorts_unordered_colors() {
        let preset = GradientPreset {
            name: "reversed".into(),
            kind: GradientKind::Linear,
            direction: Direction::ToBottom,
            angle: 0.0,
            colors: vec![
                PresetStop { color: "white".into(), position: 100.0 },
                PresetStop { color: "black".into(), position: 0.0 },
            ],
        };
        let g = GradientDescriptor::from(&preset);
        assert_eq!(
            g.compose().unwrap(),
            "linear-gradient(to bottom, black 0%, white 100%)"
        );
    }

    #[test]
    fn test_unknown_preset() {
        let err = PresetLibrary::builtin().gradient("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownPreset(_)));
    }

    #[test]
    fn test_apply_style_preset_overwrites_only_named() {
        let mut config = StyleConfig::new()
            .with(Property::Display, "block")
            .with(Property::Color, "red");
        let preset = PresetLibrary::builtin().style("flex-center").unwrap();
        config.apply_preset(preset).unwrap();

        assert_eq!(config.get(Property::Display).unwrap().to_css(), "flex");
        assert_eq!(config.get(Property::Color).unwrap().to_css(), "red");
        assert!(config.has(Property::JustifyContent));
    }

    #[test]
    fn test_apply_style_preset_unknown_key_writes_nothing() {
        let mut properties = BTreeMap::new();
        properties.insert("display".to_string(), StyleValue::from("flex"));
        properties.insert("colour".to_string(), StyleValue::from("red"));
        let preset = StylePreset {
            name: "broken".into(),
            properties,
        };
        let mut config = StyleConfig::new();
        assert!(config.apply_preset(&preset).is_err());
        assert!(config.is_empty());
    }

    #[test]
    fn test_from_json() {
        let library = PresetLibrary::from_json_str(
            r#"{"styles":[{"name":"muted","properties":{"opacity":0.6,"color":"gray"}}]}"#,
        )
        .unwrap();
        let preset = library.style("muted").unwrap();
        assert_eq!(preset.properties["opacity"], StyleValue::Number(0.6));
    }

    #[test]
    fn test_invalid_yaml_is_preset_format_error() {
        let err = PresetLibrary::from_yaml_str("gradients: [ { name: 1").unwrap_err();
        assert!(matches!(err, Error::PresetFormat(_)));
    }

    #[test]
    fn test_extend_replaces_same_name() {
        let mut library = PresetLibrary::builtin().clone();
        let count = library.gradients.len();
        let custom = PresetLibrary::from_yaml_str(
            "gradients:\n  - name: sunset\n    colors:\n      - { color: black, position: 0 }\n",
        )
        .unwrap();
        library.extend(custom);
        assert_eq!(library.gradients.len(), count);
        assert_eq!(library.gradient("sunset").unwrap().colors.len(), 1);
    }
}

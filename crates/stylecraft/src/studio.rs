//! The owned editor state.
//!
//! [`Studio`] is the single state object the UI mutates. It combines the
//! flat [`StyleConfig`] with the structured editors and assembles CSS from
//! the current snapshot every time it is asked. Nothing is cached.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationSettings;
use crate::clip_path::ClipShape;
use crate::config::{Property, StyleConfig};
use crate::custom::{self, CustomProperty};
use crate::effects::{compose_box_shadow, compose_text_shadow, FilterSettings, Shadow};
use crate::error::Result;
use crate::gradient::GradientDescriptor;
use crate::preset::{GradientPreset, StylePreset};
use crate::responsive::QueryRule;
use crate::serialize::{self, join_declarations, rule_block, Declaration};
use crate::transform::TransformSettings;

/// All editor state for one styled element.
///
/// # Example
///
/// ```rust
/// use stylecraft::{FilterSettings, Property, Studio};
///
/// let mut studio = Studio::new();
/// studio.config.set(Property::Padding, "16px");
/// studio.filter = FilterSettings { grayscale: 100.0, ..Default::default() };
///
/// assert_eq!(studio.css(), "padding: 16px;\nfilter: grayscale(100%);");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Studio {
    pub config: StyleConfig,
    /// `None` while the gradient editor is off.
    pub gradient: Option<GradientDescriptor>,
    pub filter: FilterSettings,
    pub backdrop_filter: FilterSettings,
    pub transform: TransformSettings,
    pub clip_path: ClipShape,
    pub box_shadows: Vec<Shadow>,
    pub text_shadows: Vec<Shadow>,
    pub animation: AnimationSettings,
    pub custom_properties: Vec<CustomProperty>,
    pub queries: Vec<QueryRule>,
}

impl Studio {
    /// Creates a studio with every editor at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the gradient editor on, creating the default two-stop gradient
    /// if there is none yet.
    pub fn enable_gradient(&mut self) -> &mut GradientDescriptor {
        self.gradient.get_or_insert_with(GradientDescriptor::new)
    }

    /// Turns the gradient editor off, discarding its state.
    pub fn disable_gradient(&mut self) {
        self.gradient = None;
    }

    /// Applies a gradient preset, enabling the gradient editor.
    pub fn apply_gradient_preset(&mut self, preset: &GradientPreset) {
        self.gradient
            .get_or_insert_with(GradientDescriptor::empty)
            .apply_preset(preset);
    }

    /// Applies a style preset to the property store.
    pub fn apply_style_preset(&mut self, preset: &StylePreset) -> Result<()> {
        self.config.apply_preset(preset)
    }

    /// Declarations produced by the structured editors.
    ///
    /// Each one replaces a same-named entry of the property store.
    pub fn derived_declarations(&self) -> Vec<(Property, String)> {
        let derived = [
            (
                Property::BackgroundImage,
                self.gradient.as_ref().and_then(GradientDescriptor::compose),
            ),
            (Property::Filter, self.filter.compose()),
            (Property::BackdropFilter, self.backdrop_filter.compose()),
            (Property::Transform, self.transform.compose()),
            (Property::ClipPath, self.clip_path.compose()),
            (Property::BoxShadow, compose_box_shadow(&self.box_shadows)),
            (Property::TextShadow, compose_text_shadow(&self.text_shadows)),
            (Property::Animation, self.animation.compose()),
        ];
        derived
            .into_iter()
            .filter_map(|(property, value)| value.map(|v| (property, v)))
            .collect()
    }

    /// Every declaration for the element, in emission order.
    ///
    /// Store declarations come first (minus those a structured editor
    /// overrides), then the derived declarations, then custom properties.
    pub fn declarations(&self) -> Vec<Declaration> {
        let derived = self.derived_declarations();
        let overridden = |name: &str| derived.iter().any(|(p, _)| p.css_name() == name);

        let mut out: Vec<Declaration> = serialize::declarations(&self.config)
            .into_iter()
            .filter(|d| !overridden(d.property.as_str()))
            .collect();
        out.extend(
            derived
                .iter()
                .map(|(property, value)| Declaration::new(property.css_name(), value.clone())),
        );
        out.extend(custom::declarations(&self.custom_properties));
        out
    }

    /// The declaration list as text, `;\n`-joined with a trailing `;`.
    pub fn css(&self) -> String {
        join_declarations(&self.declarations())
    }

    /// A complete stylesheet for `selector`: the element rule, any keyframes,
    /// then the responsive rules, separated by blank lines.
    pub fn stylesheet(&self, selector: &str) -> String {
        let mut blocks = vec![rule_block(selector, &self.declarations(), 0)];
        blocks.extend(self.animation.keyframes_block());
        blocks.extend(self.queries.iter().filter_map(|q| q.render(selector)));
        blocks.join("\n\n")
    }

    /// Puts every editor back to its default.
    pub fn reset(&mut self) {
        debug!("resetting studio");
        *self = Studio::default();
    }
}

//! `box-shadow` / `text-shadow` composition.

use serde::{Deserialize, Serialize};

use crate::util::with_unit;

/// One shadow layer. Lengths are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub inset: bool,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 4.0,
            blur: 6.0,
            spread: 0.0,
            color: "rgba(0, 0, 0, 0.1)".to_string(),
            inset: false,
        }
    }
}

impl Shadow {
    /// Renders the layer for `box-shadow`.
    pub fn to_box_shadow(&self) -> String {
        let mut out = String::new();
        if self.inset {
            out.push_str("inset ");
        }
        out.push_str(&format!(
            "{} {} {} {} {}",
            with_unit(self.offset_x, "px"),
            with_unit(self.offset_y, "px"),
            with_unit(self.blur, "px"),
            with_unit(self.spread, "px"),
            self.color.trim()
        ));
        out
    }

    /// Renders the layer for `text-shadow`; spread and inset do not apply.
    pub fn to_text_shadow(&self) -> String {
        format!(
            "{} {} {} {}",
            with_unit(self.offset_x, "px"),
            with_unit(self.offset_y, "px"),
            with_unit(self.blur, "px"),
            self.color.trim()
        )
    }
}

/// Joins box-shadow layers with `, `, or `None` for no layers.
pub fn compose_box_shadow(layers: &[Shadow]) -> Option<String> {
    join_layers(layers.iter().map(Shadow::to_box_shadow))
}

/// Joins text-shadow layers with `, `, or `None` for no layers.
pub fn compose_text_shadow(layers: &[Shadow]) -> Option<String> {
    join_layers(layers.iter().map(Shadow::to_text_shadow))
}

fn join_layers(layers: impl Iterator<Item = String>) -> Option<String> {
    let layers: Vec<String> = layers.collect();
    if layers.is_empty() {
        None
    } else {
        Some(layers.join(", "))
    }
}

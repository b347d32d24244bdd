//! Gradient composition.
//!
//! A [`GradientDescriptor`] holds the gradient editor's state: the kind,
//! the direction or angle, the repeating flag and an ordered list of
//! [`ColorStop`]s. [`GradientDescriptor::compose`] turns it into a single
//! `<gradient-function>` value for `background-image`.
//!
//! Stops are sorted by position before serialization with a stable sort,
//! so stops sharing a position keep the order they were added in.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::serialize::Declaration;
use crate::util::with_unit;

/// Minimum number of stops the editor keeps when removing.
pub const MIN_STOPS: usize = 2;

/// The gradient function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// The CSS function name, without the `repeating-` prefix.
    pub fn function_name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::Conic => "conic-gradient",
        }
    }
}

/// Direction of a linear gradient.
///
/// Named variants map to `to <side>` tokens. [`Direction::Custom`] selects
/// the descriptor's numeric angle instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "to top")]
    ToTop,
    #[serde(rename = "to top right")]
    ToTopRight,
    #[default]
    #[serde(rename = "to right")]
    ToRight,
    #[serde(rename = "to bottom right")]
    ToBottomRight,
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to bottom left")]
    ToBottomLeft,
    #[serde(rename = "to left")]
    ToLeft,
    #[serde(rename = "to top left")]
    ToTopLeft,
    #[serde(rename = "custom")]
    Custom,
}

impl Direction {
    /// The CSS token, or `None` for [`Direction::Custom`].
    pub fn token(self) -> Option<&'static str> {
        Some(match self {
            Direction::ToTop => "to top",
            Direction::ToTopRight => "to top right",
            Direction::ToRight => "to right",
            Direction::ToBottomRight => "to bottom right",
            Direction::ToBottom => "to bottom",
            Direction::ToBottomLeft => "to bottom left",
            Direction::ToLeft => "to left",
            Direction::ToTopLeft => "to top left",
            Direction::Custom => return None,
        })
    }
}

/// A (color, position) point along a gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub id: String,
    /// Any CSS color syntax; not validated.
    pub color: String,
    /// Percentage along the gradient line, `0..=100`.
    pub position: f64,
}

impl ColorStop {
    fn to_css(&self) -> String {
        format!("{} {}", self.color.trim(), with_unit(self.position, "%"))
    }
}

/// The gradient editor state.
///
/// # Example
///
/// ```rust
/// use stylecraft::{Direction, GradientDescriptor, GradientKind};
///
/// let mut gradient = GradientDescriptor::empty();
/// gradient.add_stop("#ff0000", 100.0);
/// gradient.add_stop("#00ff00", 0.0);
/// gradient.direction = Direction::ToRight;
///
/// assert_eq!(
///     gradient.compose().as_deref(),
///     Some("linear-gradient(to right, #00ff00 0%, #ff0000 100%)")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientDescriptor {
    pub kind: GradientKind,
    pub direction: Direction,
    /// Degrees. Used by linear gradients with [`Direction::Custom`] and by conic gradients.
    pub angle: f64,
    pub repeating: bool,
    stops: Vec<ColorStop>,
    next_id: u64,
}

impl GradientDescriptor {
    /// Creates a linear gradient with the two default stops.
    pub fn new() -> Self {
        let mut gradient = Self::empty();
        gradient.add_stop("#3b82f6", 0.0);
        gradient.add_stop("#9333ea", 100.0);
        gradient
    }

    /// Creates a linear gradient with no stops.
    pub fn empty() -> Self {
        Self {
            kind: GradientKind::Linear,
            direction: Direction::ToRight,
            angle: 90.0,
            repeating: false,
            stops: Vec::new(),
            next_id: 0,
        }
    }

    /// The stops in insertion order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Looks up a stop by id.
    pub fn stop(&self, id: &str) -> Option<&ColorStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Appends a stop and returns its id. Position is clamped to `0..=100`.
    pub fn add_stop(&mut self, color: impl Into<String>, position: f64) -> String {
        self.next_id += 1;
        let id = format!("stop-{}", self.next_id);
        self.stops.push(ColorStop {
            id: id.clone(),
            color: color.into(),
            position: clamp_position(position),
        });
        id
    }

    /// Changes a stop's color.
    pub fn set_stop_color(&mut self, id: &str, color: impl Into<String>) -> Result<()> {
        self.stop_mut(id)?.color = color.into();
        Ok(())
    }

    /// Changes a stop's position, clamped to `0..=100`.
    pub fn set_stop_position(&mut self, id: &str, position: f64) -> Result<()> {
        self.stop_mut(id)?.position = clamp_position(position);
        Ok(())
    }

    /// Removes a stop, refusing to go below [`MIN_STOPS`].
    ///
    /// # Errors
    ///
    /// [`Error::StopNotFound`] for an unknown id, [`Error::TooFewStops`] if
    /// the gradient already has the minimum number of stops.
    pub fn remove_stop(&mut self, id: &str) -> Result<ColorStop> {
        let index = self
            .stops
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::StopNotFound(id.to_string()))?;
        if self.stops.len() <= MIN_STOPS {
            return Err(Error::TooFewStops { min: MIN_STOPS });
        }
        Ok(self.stops.remove(index))
    }

    /// Drops every stop. Composing an empty gradient yields nothing.
    pub fn clear_stops(&mut self) {
        self.stops.clear();
    }

    /// Replaces the stops wholesale, assigning fresh ids.
    pub fn replace_stops<I, C>(&mut self, stops: I)
    where
        I: IntoIterator<Item = (C, f64)>,
        C: Into<String>,
    {
        self.stops.clear();
        for (color, position) in stops {
            self.add_stop(color, position);
        }
        debug!("gradient stops replaced ({} stops)", self.stops.len());
    }

    /// The stops ordered by position; equal positions keep insertion order.
    pub fn sorted_stops(&self) -> Vec<&ColorStop> {
        let mut sorted: Vec<&ColorStop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }

    /// Composes the gradient function, or `None` when there are no stops.
    pub fn compose(&self) -> Option<String> {
        if self.stops.is_empty() {
            return None;
        }

        let stop_list = self
            .sorted_stops()
            .iter()
            .map(|s| s.to_css())
            .collect::<Vec<_>>()
            .join(", ");

        let prefix = if self.repeating { "repeating-" } else { "" };
        let function = self.kind.function_name();

        let lead = match self.kind {
            GradientKind::Linear => match self.direction.token() {
                Some(token) => token.to_string(),
                None => with_unit(self.angle, "deg"),
            },
            GradientKind::Radial => "circle".to_string(),
            GradientKind::Conic => format!("from {}", with_unit(self.angle, "deg")),
        };

        Some(format!("{}{}({}, {})", prefix, function, lead, stop_list))
    }

    /// The `background-image` declaration, or `None` when there are no stops.
    pub fn declaration(&self) -> Option<Declaration> {
        self.compose()
            .map(|value| Declaration::new("background-image", value))
    }

    fn stop_mut(&mut self, id: &str) -> Result<&mut ColorStop> {
        self.stops
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::StopNotFound(id.to_string()))
    }
}

impl Default for GradientDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stop(kind: GradientKind) -> GradientDescriptor {
        let mut g = GradientDescriptor::empty();
        g.kind = kind;
        g.add_stop("#ff0000", 100.0);
        g.add_stop("#00ff00", 0.0);
        g
    }

    #[test]
    fn test_linear_sorts_by_position() {
        let g = two_stop(GradientKind::Linear);
        assert_eq!(
            g.compose().unwrap(),
            "linear-gradient(to right, #00ff00 0%, #ff0000 100%)"
        );
    }

    #[test]
    fn test_linear_custom_angle() {
        let mut g = two_stop(GradientKind::Linear);
        g.direction = Direction::Custom;
        g.angle = 135.0;
        assert_eq!(
            g.compose().unwrap(),
            "linear-gradient(135deg, #00ff00 0%, #ff0000 100%)"
        );
    }

    #[test]
    fn test_radial_is_always_circle() {
        let mut g = two_stop(GradientKind::Radial);
        g.direction = Direction::ToLeft;
        assert_eq!(
            g.compose().unwrap(),
            "radial-gradient(circle, #00ff00 0%, #ff0000 100%)"
        );
    }

    #[test]
    fn test_conic_uses_angle() {
        let mut g = two_stop(GradientKind::Conic);
        g.angle = 45.0;
        assert_eq!(
            g.compose().unwrap(),
            "conic-gradient(from 45deg, #00ff00 0%, #ff0000 100%)"
        );
    }

    #[test]
    fn test_repeating_prefix() {
        let mut g = two_stop(GradientKind::Radial);
        g.repeating = true;
        assert!(g.compose().unwrap().starts_with("repeating-radial-gradient("));
    }

    #[test]
    fn test_zero_stops_compose_nothing() {
        let g = GradientDescriptor::empty();
        assert_eq!(g.compose(), None);
        assert_eq!(g.declaration(), None);
    }

    #[test]
    fn test_single_stop_is_well_formed() {
        let mut g = GradientDescriptor::empty();
        g.add_stop("red", 50.0);
        assert_eq!(g.compose().unwrap(), "linear-gradient(to right, red 50%)");
    }

    #[test]
    fn test_equal_positions_keep_insertion_order() {
        let mut g = GradientDescriptor::empty();
        g.add_stop("a", 50.0);
        g.add_stop("b", 10.0);
        g.add_stop("c", 50.0);
        g.add_stop("d", 50.0);
        let colors: Vec<&str> = g.sorted_stops().iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_positions_are_clamped() {
        let mut g = GradientDescriptor::empty();
        let id = g.add_stop("red", 140.0);
        assert_eq!(g.stop(&id).unwrap().position, 100.0);
        g.set_stop_position(&id, -5.0).unwrap();
        assert_eq!(g.stop(&id).unwrap().position, 0.0);
    }

    #[test]
    fn test_new_has_two_default_stops() {
        let g = GradientDescriptor::new();
        assert_eq!(g.stops().len(), 2);
        assert_ne!(g.stops()[0].id, g.stops()[1].id);
    }

    #[test]
    fn test_update_stop_color() {
        let mut g = GradientDescriptor::new();
        let id = g.stops()[0].id.clone();
        g.set_stop_color(&id, "tomato").unwrap();
        assert_eq!(g.stop(&id).unwrap().color, "tomato");
    }

    #[test]
    fn test_update_unknown_stop() {
        let mut g = GradientDescriptor::new();
        let err = g.set_stop_color("stop-99", "red").unwrap_err();
        assert!(matches!(err, Error::StopNotFound(_)));
    }

    #[test]
    fn test_remove_respects_minimum() {
        let mut g = GradientDescriptor::new();
        let id = g.stops()[0].id.clone();
        let err = g.remove_stop(&id).unwrap_err();
        assert!(matches!(err, Error::TooFewStops { min: 2 }));

        let extra = g.add_stop("white", 50.0);
        let removed = g.remove_stop(&extra).unwrap();
        assert_eq!(removed.color, "white");
        assert_eq!(g.stops().len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut g = GradientDescriptor::new();
        let third = g.add_stop("white", 50.0);
        g.remove_stop(&third).unwrap();
        let fourth = g.add_stop("black", 75.0);
        assert_ne!(third, fourth);
    }

    #[test]
    fn test_fractional_positions() {
        let mut g = GradientDescriptor::empty();
        g.add_stop("red", 0.0);
        g.add_stop("blue", 37.5);
        assert_eq!(
            g.compose().unwrap(),
            "linear-gradient(to right, red 0%, blue 37.5%)"
        );
    }
}

//! `clip-path` composition.
//!
//! Shapes are tagged variants with explicit fields. Positions and radii are
//! percentages of the element box; the inset corner radius is in pixels.

use serde::{Deserialize, Serialize};

use crate::util::with_unit;

/// A polygon vertex, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The clip shape selected in the clip-path editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ClipShape {
    #[default]
    None,
    Circle {
        radius: f64,
        x: f64,
        y: f64,
    },
    Ellipse {
        rx: f64,
        ry: f64,
        x: f64,
        y: f64,
    },
    Inset {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
        #[serde(default)]
        round: f64,
    },
    Polygon {
        points: Vec<Point>,
    },
}

const TRIANGLE: &[Point] = &[Point::new(50.0, 0.0), Point::new(100.0, 100.0), Point::new(0.0, 100.0)];
const RHOMBUS: &[Point] = &[
    Point::new(50.0, 0.0),
    Point::new(100.0, 50.0),
    Point::new(50.0, 100.0),
    Point::new(0.0, 50.0),
];
const PENTAGON: &[Point] = &[
    Point::new(50.0, 0.0),
    Point::new(100.0, 38.0),
    Point::new(82.0, 100.0),
    Point::new(18.0, 100.0),
    Point::new(0.0, 38.0),
];
const HEXAGON: &[Point] = &[
    Point::new(25.0, 0.0),
    Point::new(75.0, 0.0),
    Point::new(100.0, 50.0),
    Point::new(75.0, 100.0),
    Point::new(25.0, 100.0),
    Point::new(0.0, 50.0),
];
const STAR: &[Point] = &[
    Point::new(50.0, 0.0),
    Point::new(61.0, 35.0),
    Point::new(98.0, 35.0),
    Point::new(68.0, 57.0),
    Point::new(79.0, 91.0),
    Point::new(50.0, 70.0),
    Point::new(21.0, 91.0),
    Point::new(32.0, 57.0),
    Point::new(2.0, 35.0),
    Point::new(39.0, 35.0),
];
const ARROW: &[Point] = &[
    Point::new(0.0, 20.0),
    Point::new(60.0, 20.0),
    Point::new(60.0, 0.0),
    Point::new(100.0, 50.0),
    Point::new(60.0, 100.0),
    Point::new(60.0, 80.0),
    Point::new(0.0, 80.0),
];
const MESSAGE: &[Point] = &[
    Point::new(0.0, 0.0),
    Point::new(100.0, 0.0),
    Point::new(100.0, 75.0),
    Point::new(75.0, 75.0),
    Point::new(75.0, 100.0),
    Point::new(50.0, 75.0),
    Point::new(0.0, 75.0),
];

/// Names of the built-in polygon shapes.
pub const POLYGON_PRESETS: &[&str] = &[
    "triangle", "rhombus", "pentagon", "hexagon", "star", "arrow", "message",
];

impl ClipShape {
    /// A built-in polygon shape by name.
    pub fn polygon_preset(name: &str) -> Option<ClipShape> {
        let points = match name {
            "triangle" => TRIANGLE,
            "rhombus" => RHOMBUS,
            "pentagon" => PENTAGON,
            "hexagon" => HEXAGON,
            "star" => STAR,
            "arrow" => ARROW,
            "message" => MESSAGE,
            _ => return None,
        };
        Some(ClipShape::Polygon {
            points: points.to_vec(),
        })
    }

    /// Composes the shape function, or `None` for no clipping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::ClipShape;
    ///
    /// let circle = ClipShape::Circle { radius: 50.0, x: 50.0, y: 50.0 };
    /// assert_eq!(circle.compose().as_deref(), Some("circle(50% at 50% 50%)"));
    /// assert_eq!(ClipShape::None.compose(), None);
    /// ```
    pub fn compose(&self) -> Option<String> {
        let pct = |v: f64| with_unit(v, "%");
        match self {
            ClipShape::None => None,
            ClipShape::Circle { radius, x, y } => {
                Some(format!("circle({} at {} {})", pct(*radius), pct(*x), pct(*y)))
            }
            ClipShape::Ellipse { rx, ry, x, y } => Some(format!(
                "ellipse({} {} at {} {})",
                pct(*rx),
                pct(*ry),
                pct(*x),
                pct(*y)
            )),
            ClipShape::Inset {
                top,
                right,
                bottom,
                left,
                round,
            } => {
                let mut out = format!(
                    "inset({} {} {} {}",
                    pct(*top),
                    pct(*right),
                    pct(*bottom),
                    pct(*left)
                );
                if *round > 0.0 {
                    out.push_str(&format!(" round {}", with_unit(*round, "px")));
                }
                out.push(')');
                Some(out)
            }
            ClipShape::Polygon { points } => {
                if points.is_empty() {
                    return None;
                }
                let list = points
                    .iter()
                    .map(|p| format!("{} {}", pct(p.x), pct(p.y)))
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!("polygon({})", list))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse() {
        let shape = ClipShape::Ellipse {
            rx: 50.0,
            ry: 35.0,
            x: 50.0,
            y: 50.0,
        };
        assert_eq!(shape.compose().unwrap(), "ellipse(50% 35% at 50% 50%)");
    }

    #[test]
    fn test_inset_with_and_without_round() {
        let mut shape = ClipShape::Inset {
            top: 10.0,
            right: 5.0,
            bottom: 10.0,
            left: 5.0,
            round: 0.0,
        };
        assert_eq!(shape.compose().unwrap(), "inset(10% 5% 10% 5%)");
        if let ClipShape::Inset { round, .. } = &mut shape {
            *round = 8.0;
        }
        assert_eq!(shape.compose().unwrap(), "inset(10% 5% 10% 5% round 8px)");
    }

    #[test]
    fn test_triangle_preset() {
        let shape = ClipShape::polygon_preset("triangle").unwrap();
        assert_eq!(shape.compose().unwrap(), "polygon(50% 0%, 100% 100%, 0% 100%)");
    }

    #[test]
    fn test_every_preset_composes() {
        for name in POLYGON_PRESETS {
            let shape = ClipShape::polygon_preset(name).unwrap();
            assert!(shape.compose().unwrap().starts_with("polygon("));
        }
        assert!(ClipShape::polygon_preset("blob").is_none());
    }

    #[test]
    fn test_empty_polygon_composes_nothing() {
        let shape = ClipShape::Polygon { points: vec![] };
        assert_eq!(shape.compose(), None);
    }

    #[test]
    fn test_tagged_deserialize() {
        let shape: ClipShape =
            serde_yaml::from_str("shape: circle\nradius: 40\nx: 50\ny: 50\n").unwrap();
        assert_eq!(shape.compose().unwrap(), "circle(40% at 50% 50%)");
    }
}

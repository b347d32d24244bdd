//! Declaration serialization.
//!
//! Turns a [`StyleConfig`] snapshot into an ordered list of `property: value`
//! declarations and formats declaration lists as text or rule blocks.
//!
//! Values are never validated. A malformed color or length is emitted as-is
//! and left for the CSS engine that consumes the output to drop.

use serde::{Deserialize, Serialize};

use crate::config::StyleConfig;
use crate::util::to_kebab_case;

/// A single `property: value` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// Produces the declarations for every set property, in declaration order.
///
/// Unset values are skipped. The camelCase key is converted to kebab-case.
pub fn declarations(config: &StyleConfig) -> Vec<Declaration> {
    config
        .iter()
        .filter(|(_, value)| !value.is_unset())
        .map(|(property, value)| Declaration::new(to_kebab_case(property.key()), value.to_css()))
        .collect()
}

/// Joins declarations with `;\n` and appends a trailing `;`.
///
/// An empty list yields an empty string.
pub fn join_declarations(declarations: &[Declaration]) -> String {
    if declarations.is_empty() {
        return String::new();
    }
    let mut out = declarations
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(";\n");
    out.push(';');
    out
}

/// Serializes a config snapshot to declaration text.
///
/// # Example
///
/// ```rust
/// use stylecraft::{serialize, Property, StyleConfig};
///
/// let config = StyleConfig::new()
///     .with(Property::FontSize, "16px")
///     .with(Property::FontWeight, "")
///     .with(Property::Color, "#333");
///
/// assert_eq!(serialize::to_css(&config), "font-size: 16px;\ncolor: #333;");
/// ```
pub fn to_css(config: &StyleConfig) -> String {
    join_declarations(&declarations(config))
}

/// Formats a rule block, one declaration per line, indented by `depth` levels.
///
/// ```text
/// .card {
///   color: red;
/// }
/// ```
pub fn rule_block(selector: &str, declarations: &[Declaration], depth: usize) -> String {
    let outer = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);
    let mut out = format!("{}{} {{\n", outer, selector);
    for d in declarations {
        out.push_str(&format!("{}{};\n", inner, d));
    }
    out.push_str(&outer);
    out.push('}');
    out
}

pub(crate) const INDENT: &str = "  ";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Property;

    #[test]
    fn test_skips_empty_values() {
        let config = StyleConfig::new()
            .with(Property::FontSize, "16px")
            .with(Property::FontWeight, "");
        let css = to_css(&config);
        assert!(css.contains("font-size: 16px;"));
        assert!(!css.contains("font-weight"));
    }

    #[test]
    fn test_empty_config_is_empty_text() {
        assert_eq!(to_css(&StyleConfig::new()), "");
    }

    #[test]
    fn test_single_declaration_has_trailing_semicolon() {
        let config = StyleConfig::new().with(Property::Display, "grid");
        assert_eq!(to_css(&config), "display: grid;");
    }

    #[test]
    fn test_numbers_render_shortest() {
        let config = StyleConfig::new()
            .with(Property::Opacity, 0.5)
            .with(Property::ZIndex, 10);
        assert_eq!(to_css(&config), "z-index: 10;\nopacity: 0.5;");
    }

    #[test]
    fn test_malformed_values_pass_through() {
        let config = StyleConfig::new().with(Property::Color, "not-a-color(((");
        assert_eq!(to_css(&config), "color: not-a-color(((;");
    }

    #[test]
    fn test_rule_block_indents() {
        let decls = vec![Declaration::new("color", "red"), Declaration::new("gap", "4px")];
        assert_eq!(
            rule_block(".card", &decls, 1),
            "  .card {\n    color: red;\n    gap: 4px;\n  }"
        );
    }

    #[test]
    fn test_rule_block_empty() {
        assert_eq!(rule_block(".x", &[], 0), ".x {\n}");
    }
}

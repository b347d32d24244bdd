//! Property values.

use serde::{Deserialize, Serialize};

/// The value of a single property.
///
/// Values are never validated. Text is emitted verbatim (trimmed) and
/// numbers use the shortest `f64` display, so `16.0` renders as `16`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Returns `true` when the value should produce no declaration.
    ///
    /// Empty or whitespace-only text is unset; numbers are always set.
    pub fn is_unset(&self) -> bool {
        match self {
            StyleValue::Text(s) => s.trim().is_empty(),
            StyleValue::Number(n) => !n.is_finite(),
        }
    }

    /// Reads CSS value text, keeping plain numbers as numbers.
    ///
    /// Text becomes a number only when it is a finite `f64` that renders
    /// back to the same text, so `10` and `0.5` are numbers while `1e3`,
    /// `+5` and `16px` stay text.
    pub fn from_css(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() && crate::util::with_unit(n, "") == text => {
                StyleValue::Number(n)
            }
            _ => StyleValue::Text(text.to_string()),
        }
    }

    /// Renders the value as CSS text.
    pub fn to_css(&self) -> String {
        match self {
            StyleValue::Text(s) => s.trim().to_string(),
            StyleValue::Number(n) => crate::util::with_unit(*n, ""),
        }
    }
}

impl Default for StyleValue {
    fn default() -> Self {
        StyleValue::Text(String::new())
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<&String> for StyleValue {
    fn from(s: &String) -> Self {
        StyleValue::Text(s.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

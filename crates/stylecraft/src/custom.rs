//! Custom properties (`--name: value`).

use serde::{Deserialize, Serialize};

use crate::serialize::Declaration;

/// A user-defined custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
}

impl CustomProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The property name with exactly one `--` prefix, or `None` if blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::CustomProperty;
    ///
    /// assert_eq!(CustomProperty::new("brand", "red").css_name().as_deref(), Some("--brand"));
    /// assert_eq!(CustomProperty::new("--brand", "red").css_name().as_deref(), Some("--brand"));
    /// assert_eq!(CustomProperty::new("  ", "red").css_name(), None);
    /// ```
    pub fn css_name(&self) -> Option<String> {
        let bare = self.name.trim().trim_start_matches('-');
        if bare.is_empty() {
            None
        } else {
            Some(format!("--{}", bare))
        }
    }

    /// The declaration, or `None` when the name or value is blank.
    pub fn declaration(&self) -> Option<Declaration> {
        let value = self.value.trim();
        if value.is_empty() {
            return None;
        }
        self.css_name().map(|name| Declaration::new(name, value))
    }
}

/// Declarations for a list of custom properties, skipping blank entries.
pub fn declarations(properties: &[CustomProperty]) -> Vec<Declaration> {
    properties.iter().filter_map(CustomProperty::declaration).collect()
}

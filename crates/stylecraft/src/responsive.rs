//! Responsive rules: media and container queries.
//!
//! Each rule is a tagged condition plus a [`StyleConfig`] of overrides that
//! apply when the condition matches. Rendering wraps the element's selector
//! in the at-rule.

use serde::{Deserialize, Serialize};

use crate::config::StyleConfig;
use crate::serialize::{declarations, rule_block};

/// Screen orientation for media queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Preferred color scheme for media queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

/// A media query condition. Lengths are CSS text and are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum MediaCondition {
    MinWidth(String),
    MaxWidth(String),
    MinHeight(String),
    MaxHeight(String),
    Orientation(Orientation),
    PrefersColorScheme(ColorScheme),
    PrefersReducedMotion,
    /// A condition written by hand, emitted verbatim inside parentheses.
    Raw(String),
}

impl MediaCondition {
    /// The condition text inside the parentheses.
    pub fn to_css(&self) -> String {
        match self {
            MediaCondition::MinWidth(v) => format!("min-width: {}", v.trim()),
            MediaCondition::MaxWidth(v) => format!("max-width: {}", v.trim()),
            MediaCondition::MinHeight(v) => format!("min-height: {}", v.trim()),
            MediaCondition::MaxHeight(v) => format!("max-height: {}", v.trim()),
            MediaCondition::Orientation(Orientation::Portrait) => "orientation: portrait".into(),
            MediaCondition::Orientation(Orientation::Landscape) => "orientation: landscape".into(),
            MediaCondition::PrefersColorScheme(ColorScheme::Light) => {
                "prefers-color-scheme: light".into()
            }
            MediaCondition::PrefersColorScheme(ColorScheme::Dark) => {
                "prefers-color-scheme: dark".into()
            }
            MediaCondition::PrefersReducedMotion => "prefers-reduced-motion: reduce".into(),
            MediaCondition::Raw(v) => v.trim().to_string(),
        }
    }
}

/// A container query size condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ContainerCondition {
    MinWidth(String),
    MaxWidth(String),
    MinHeight(String),
    MaxHeight(String),
    Raw(String),
}

impl ContainerCondition {
    /// The condition text inside the parentheses.
    pub fn to_css(&self) -> String {
        match self {
            ContainerCondition::MinWidth(v) => format!("min-width: {}", v.trim()),
            ContainerCondition::MaxWidth(v) => format!("max-width: {}", v.trim()),
            ContainerCondition::MinHeight(v) => format!("min-height: {}", v.trim()),
            ContainerCondition::MaxHeight(v) => format!("max-height: {}", v.trim()),
            ContainerCondition::Raw(v) => v.trim().to_string(),
        }
    }
}

/// The at-rule a [`QueryRule`] is wrapped in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QueryKind {
    Media {
        condition: MediaCondition,
    },
    Container {
        #[serde(default)]
        name: Option<String>,
        condition: ContainerCondition,
    },
}

impl QueryKind {
    /// The at-rule prelude, e.g. `@media (min-width: 768px)`.
    pub fn prelude(&self) -> String {
        match self {
            QueryKind::Media { condition } => format!("@media ({})", condition.to_css()),
            QueryKind::Container { name, condition } => {
                match name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                    Some(name) => format!("@container {} ({})", name, condition.to_css()),
                    None => format!("@container ({})", condition.to_css()),
                }
            }
        }
    }
}

/// A set of overrides applied under a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRule {
    #[serde(flatten)]
    pub kind: QueryKind,
    #[serde(default)]
    pub declarations: StyleConfig,
}

impl QueryRule {
    pub fn media(condition: MediaCondition) -> Self {
        Self {
            kind: QueryKind::Media { condition },
            declarations: StyleConfig::new(),
        }
    }

    pub fn container(name: Option<String>, condition: ContainerCondition) -> Self {
        Self {
            kind: QueryKind::Container { name, condition },
            declarations: StyleConfig::new(),
        }
    }

    /// Renders the at-rule wrapping `selector`, or `None` with no overrides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::{MediaCondition, Property, QueryRule};
    ///
    /// let mut rule = QueryRule::media(MediaCondition::MaxWidth("640px".into()));
    /// rule.declarations.set(Property::FontSize, "14px");
    /// assert_eq!(
    ///     rule.render(".box").as_deref(),
    ///     Some("@media (max-width: 640px) {\n  .box {\n    font-size: 14px;\n  }\n}")
    /// );
    /// ```
    pub fn render(&self, selector: &str) -> Option<String> {
        let decls = declarations(&self.declarations);
        if decls.is_empty() {
            return None;
        }
        Some(format!(
            "{} {{\n{}\n}}",
            self.kind.prelude(),
            rule_block(selector, &decls, 1)
        ))
    }
}

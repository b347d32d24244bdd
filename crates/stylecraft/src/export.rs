//! Standalone HTML/CSS export.
//!
//! The export bundle is a static HTML document embedding the element's
//! stylesheet under a single class selector, plus the stylesheet on its
//! own. Both are returned as strings; writing them anywhere is up to the
//! caller.

use log::debug;
use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::studio::Studio;
use crate::util::sanitize_identifier;

const EXPORT_TEMPLATE_NAME: &str = "export.html";
const EXPORT_TEMPLATE: &str = include_str!("templates/export.html.j2");

/// Class name used when the configured one is unusable.
pub const DEFAULT_CLASS_NAME: &str = "preview-element";

/// Export settings.
///
/// # Example
///
/// ```rust
/// use stylecraft::ExportOptions;
///
/// let options = ExportOptions::from_yaml_str("class_name: Hero Card\n").unwrap();
/// assert_eq!(options.selector(), ".hero-card");
/// assert_eq!(options.title, "CSS Export");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub class_name: String,
    pub title: String,
    pub preview_text: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            title: "CSS Export".to_string(),
            preview_text: "Preview".to_string(),
        }
    }
}

impl ExportOptions {
    /// Decodes options from YAML; missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The sanitized class name.
    pub fn class_name(&self) -> String {
        sanitize_identifier(&self.class_name).unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string())
    }

    /// The class selector, e.g. `.preview-element`.
    pub fn selector(&self) -> String {
        format!(".{}", self.class_name())
    }
}

/// The exported files, as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportBundle {
    pub html: String,
    pub css: String,
}

/// Renders export bundles from a pre-compiled document template.
///
/// # Example
///
/// ```rust
/// use stylecraft::{Exporter, ExportOptions, Property, Studio};
///
/// let mut studio = Studio::new();
/// studio.config.set(Property::Color, "rebeccapurple");
///
/// let exporter = Exporter::new().unwrap();
/// let bundle = exporter.export(&studio, &ExportOptions::default()).unwrap();
/// assert!(bundle.css.starts_with(".preview-element {\n  color: rebeccapurple;"));
/// assert!(bundle.html.contains(r#"<div class="preview-element">Preview</div>"#));
/// ```
pub struct Exporter {
    env: Environment<'static>,
}

impl Exporter {
    /// Creates an exporter with the built-in document template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_template(EXPORT_TEMPLATE)
    }

    /// Creates an exporter with a custom document template.
    ///
    /// The template receives `title`, `class_name`, `stylesheet` and
    /// `preview_text`. Text is HTML-escaped; mark the stylesheet `| safe`.
    /// Every `</` in the embedded stylesheet is written as `<\/` so a value
    /// can never close the surrounding `<style>` element.
    pub fn with_template(source: &'static str) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(EXPORT_TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    /// Renders the bundle for the studio's current state.
    pub fn export(&self, studio: &Studio, options: &ExportOptions) -> Result<ExportBundle> {
        let selector = options.selector();
        let css = studio.stylesheet(&selector);
        debug!("exporting stylesheet for {}", selector);

        let html = self.env.get_template(EXPORT_TEMPLATE_NAME)?.render(context! {
            title => options.title,
            class_name => options.class_name(),
            stylesheet => embeddable(&css),
            preview_text => options.preview_text,
        })?;

        Ok(ExportBundle { html, css })
    }
}

// `\/` is a plain `/` to CSS but does not end a raw-text element.
fn embeddable(css: &str) -> String {
    css.replace("</", "<\\/")
}

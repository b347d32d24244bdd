//! Utility functions for property names, identifiers and numbers.

/// Converts a camelCase key to its kebab-case CSS name.
///
/// A `-` is inserted before each uppercase letter, which is lowercased.
///
/// # Example
///
/// ```rust
/// use stylecraft::to_kebab_case;
///
/// assert_eq!(to_kebab_case("fontSize"), "font-size");
/// assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
/// assert_eq!(to_kebab_case("color"), "color");
/// ```
pub fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a kebab-case CSS name back to its camelCase key.
///
/// # Example
///
/// ```rust
/// use stylecraft::to_camel_case;
///
/// assert_eq!(to_camel_case("font-size"), "fontSize");
/// assert_eq!(to_camel_case("z-index"), "zIndex");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Turns arbitrary text into a CSS identifier usable as a class or keyframes name.
///
/// Unicode is folded to ASCII, anything outside `[a-z0-9_-]` becomes `-`,
/// runs of dashes collapse, and a leading digit gets a `_` prefix.
/// Returns `None` when nothing usable remains.
///
/// # Example
///
/// ```rust
/// use stylecraft::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("Café Card").as_deref(), Some("cafe-card"));
/// assert_eq!(sanitize_identifier("3d box").as_deref(), Some("_3d-box"));
/// assert_eq!(sanitize_identifier("!!!"), None);
/// ```
pub fn sanitize_identifier(text: &str) -> Option<String> {
    let folded = deunicode::deunicode(text).to_ascii_lowercase();
    let mut out = String::with_capacity(folded.len());
    for c in folded.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '-'
        };
        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        return None;
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    Some(out)
}

/// Formats a number with a unit suffix (`12px`, `0.5deg`, `100%`).
///
/// Negative zero is printed as `0`.
pub fn with_unit(value: f64, unit: &str) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}{}", value, unit)
}

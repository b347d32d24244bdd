//! Importing CSS declaration text back into editor state.
//!
//! Parsing is done with `cssparser`'s rule-body parser, so comments,
//! strings and nested function arguments are handled the way a browser
//! would. Values are kept verbatim; only the property names are resolved.

use cssparser::{
    parse_one_rule, AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};
use log::{debug, warn};
use serde::Serialize;

use crate::config::{Property, StyleConfig, StyleValue};
use crate::custom::CustomProperty;
use crate::studio::Studio;

/// Why an imported declaration was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The property is not part of the known property set.
    UnknownProperty,
    /// The text could not be parsed as a declaration.
    Invalid,
    /// The declaration had no value.
    Empty,
}

/// A declaration that was left out of the import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDeclaration {
    pub text: String,
    pub reason: SkipReason,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    /// Properties written to the store.
    pub applied: Vec<Property>,
    /// Custom properties found in the input.
    pub custom: Vec<CustomProperty>,
    pub skipped: Vec<SkippedDeclaration>,
}

/// A raw `name: value` pair as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    pub name: String,
    pub value: String,
}

struct BodyParser;

impl<'i> DeclarationParser<'i> for BodyParser {
    type Declaration = RawDeclaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<RawDeclaration, ParseError<'i, ()>> {
        let start = input.position();
        while input.next().is_ok() {}
        Ok(RawDeclaration {
            name: name.to_string(),
            value: input.slice_from(start).trim().to_string(),
        })
    }
}

impl<'i> AtRuleParser<'i> for BodyParser {
    type Prelude = ();
    type AtRule = RawDeclaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for BodyParser {
    type Prelude = ();
    type QualifiedRule = RawDeclaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, RawDeclaration, ()> for BodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Declarations and unparseable text from one block.
type Body = (Vec<RawDeclaration>, Vec<String>);

/// Accepts a single `<selector> { ... }` rule and parses its block.
struct RuleParser;

impl<'i> QualifiedRuleParser<'i> for RuleParser {
    type Prelude = ();
    type QualifiedRule = Body;
    type Error = ();

    fn parse_prelude<'t>(&mut self, input: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
        // A `;` before the block means the text is a declaration list.
        while let Ok(token) = input.next() {
            if matches!(token, Token::Semicolon) {
                return Err(input.new_custom_error(()));
            }
        }
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: (),
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Body, ParseError<'i, ()>> {
        Ok(parse_body(input))
    }
}

impl<'i> AtRuleParser<'i> for RuleParser {
    type Prelude = ();
    type AtRule = Body;
    type Error = ();
}

fn parse_body(parser: &mut Parser<'_, '_>) -> Body {
    let mut body_parser = BodyParser;
    let mut parsed = Vec::new();
    let mut invalid = Vec::new();
    for item in RuleBodyParser::new(parser, &mut body_parser) {
        match item {
            Ok(decl) => parsed.push(decl),
            Err((_, slice)) => {
                let slice = slice.trim();
                if !slice.is_empty() {
                    invalid.push(slice.to_string());
                }
            }
        }
    }
    (parsed, invalid)
}

/// Splits declaration text into raw declarations.
///
/// Input is either a bare declaration list or a single rule
/// (`.x { ... }`), whose block is parsed. Text that cannot be parsed is
/// returned in the second list.
pub fn parse_declarations(css: &str) -> (Vec<RawDeclaration>, Vec<String>) {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    if let Ok(body) = parse_one_rule(&mut parser, &mut RuleParser) {
        return body;
    }

    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_body(&mut parser)
}

impl StyleConfig {
    /// Writes the known properties found in `css` into the store.
    ///
    /// Custom properties are reported but not stored; use
    /// [`Studio::import_css`] to keep them.
    pub fn import_css(&mut self, css: &str) -> ImportReport {
        let report = import_into(self, css);
        debug!(
            "imported {} declarations ({} skipped)",
            report.applied.len(),
            report.skipped.len()
        );
        report
    }
}

impl Studio {
    /// Imports declaration text into the property store and custom properties.
    ///
    /// Custom properties with a name already present are updated in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::Studio;
    ///
    /// let mut studio = Studio::new();
    /// let report = studio.import_css("font-size: 16px;\n--brand: #f00;\nfoo: bar;");
    /// assert_eq!(report.applied.len(), 1);
    /// assert_eq!(report.skipped.len(), 1);
    /// assert_eq!(studio.css(), "font-size: 16px;\n--brand: #f00;");
    /// ```
    pub fn import_css(&mut self, css: &str) -> ImportReport {
        let report = self.config.import_css(css);
        for prop in &report.custom {
            match self
                .custom_properties
                .iter_mut()
                .find(|p| p.css_name() == prop.css_name())
            {
                Some(existing) => existing.value = prop.value.clone(),
                None => self.custom_properties.push(prop.clone()),
            }
        }
        report
    }
}

fn import_into(config: &mut StyleConfig, css: &str) -> ImportReport {
    let (parsed, invalid) = parse_declarations(css);
    let mut report = ImportReport::default();

    for text in invalid {
        warn!("skipping unparseable declaration: {}", text);
        report.skipped.push(SkippedDeclaration {
            text,
            reason: SkipReason::Invalid,
        });
    }

    for decl in parsed {
        if decl.value.is_empty() {
            report.skipped.push(SkippedDeclaration {
                text: format!("{}:", decl.name),
                reason: SkipReason::Empty,
            });
            continue;
        }
        if decl.name.starts_with("--") {
            report.custom.push(CustomProperty::new(decl.name, decl.value));
            continue;
        }
        match Property::from_css_name(&decl.name) {
            Some(property) => {
                config.set(property, StyleValue::from_css(&decl.value));
                report.applied.push(property);
            }
            None => {
                warn!("skipping unknown property: {}", decl.name);
                report.skipped.push(SkippedDeclaration {
                    text: format!("{}: {}", decl.name, decl.value),
                    reason: SkipReason::UnknownProperty,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize;

    #[test]
    fn test_parse_simple_block() {
        let (decls, invalid) = parse_declarations("color: red; margin: 0 auto");
        assert!(invalid.is_empty());
        assert_eq!(
            decls,
            vec![
                RawDeclaration { name: "color".into(), value: "red".into() },
                RawDeclaration { name: "margin".into(), value: "0 auto".into() },
            ]
        );
    }

    #[test]
    fn test_parse_keeps_nested_functions() {
        let (decls, _) = parse_declarations(
            "background-image: linear-gradient(to right, rgba(0, 0, 0, 0.5) 0%, #fff 100%);",
        );
        assert_eq!(
            decls[0].value,
            "linear-gradient(to right, rgba(0, 0, 0, 0.5) 0%, #fff 100%)"
        );
    }

    #[test]
    fn test_parse_unwraps_rule() {
        let (decls, _) = parse_declarations(".card {\n  padding: 8px;\n}");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "padding");
    }

    #[test]
    fn test_parse_skips_comments() {
        let (decls, _) = parse_declarations("/* heading */ font-weight: 700;");
        assert_eq!(decls[0].name, "font-weight");
        assert_eq!(decls[0].value, "700");
    }

    #[test]
    fn test_invalid_text_reported() {
        let (decls, invalid) = parse_declarations("color red; gap: 4px;");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "gap");
        assert_eq!(invalid.len(), 1);
        assert!(invalid[0].starts_with("color red"));
    }

    #[test]
    fn test_import_round_trips_serializer() {
        let expected = StyleConfig::new()
            .with(Property::Display, "flex")
            .with(Property::FontSize, "16px")
            .with(Property::BorderTopLeftRadius, "4px")
            .with(Property::Color, "rgb(10, 20, 30)");
        let mut imported = StyleConfig::new();
        let report = imported.import_css(&serialize::to_css(&expected));
        assert!(report.skipped.is_empty());
        assert_eq!(imported, expected);
    }

    #[test]
    fn test_braces_inside_strings_stay_in_values() {
        let (decls, invalid) = parse_declarations("color: red;\ncontent: \"{ }\";");
        assert!(invalid.is_empty());
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[1].value, "\"{ }\"");

        let (decls, _) = parse_declarations(".quote { content: \"}\"; color: red }");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].value, "\"}\"");
    }

    #[test]
    fn test_import_round_trips_braced_string() {
        let expected = StyleConfig::new()
            .with(Property::Content, "\"{ }\"")
            .with(Property::Color, "red");
        let mut imported = StyleConfig::new();
        let report = imported.import_css(&serialize::to_css(&expected));
        assert!(report.skipped.is_empty());
        assert_eq!(imported, expected);
    }

    #[test]
    fn test_import_restores_numbers() {
        let expected = StyleConfig::new()
            .with(Property::ZIndex, 10)
            .with(Property::Opacity, 0.5)
            .with(Property::Width, "10px");
        let mut imported = StyleConfig::new();
        imported.import_css(&serialize::to_css(&expected));
        assert_eq!(imported, expected);
        assert_eq!(imported.get(Property::ZIndex), Some(&StyleValue::Number(10.0)));
    }

    #[test]
    fn test_import_unknown_and_empty() {
        let mut config = StyleConfig::new();
        let report = config.import_css("colour: red; color: ; display: grid");
        assert_eq!(report.applied, vec![Property::Display]);
        let reasons: Vec<&SkipReason> = report.skipped.iter().map(|s| &s.reason).collect();
        assert!(reasons.contains(&&SkipReason::UnknownProperty));
        assert!(reasons.contains(&&SkipReason::Empty));
    }

    #[test]
    fn test_studio_import_updates_custom_in_place() {
        let mut studio = Studio::new();
        studio.custom_properties.push(CustomProperty::new("brand", "blue"));
        studio.import_css("--brand: red; --space: 4px;");
        assert_eq!(studio.custom_properties.len(), 2);
        assert_eq!(studio.custom_properties[0].value, "red");
    }
}

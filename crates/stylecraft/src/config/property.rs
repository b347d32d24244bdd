//! The known CSS property set.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{to_camel_case, to_kebab_case};

/// Editor panel a property is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Layout,
    Spacing,
    Sizing,
    Flexbox,
    Grid,
    Typography,
    Colors,
    Background,
    Borders,
    Effects,
    Transforms,
    Animation,
    Misc,
}

impl Category {
    /// All categories in panel order.
    pub const ALL: &'static [Category] = &[
        Category::Layout,
        Category::Spacing,
        Category::Sizing,
        Category::Flexbox,
        Category::Grid,
        Category::Typography,
        Category::Colors,
        Category::Background,
        Category::Borders,
        Category::Effects,
        Category::Transforms,
        Category::Animation,
        Category::Misc,
    ];

    /// Returns the properties belonging to this category, in declaration order.
    pub fn properties(self) -> impl Iterator<Item = Property> {
        Property::ALL
            .iter()
            .copied()
            .filter(move |p| p.category() == self)
    }
}

macro_rules! properties {
    ($( $category:ident => [ $( $variant:ident = $key:literal ),* $(,)? ] ),* $(,)?) => {
        /// A CSS property editable through the style store.
        ///
        /// Variants are ordered the way declarations are emitted. Each has a
        /// camelCase key (`fontSize`) and a kebab-case CSS name (`font-size`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Property {
            $( $( #[serde(rename = $key)] $variant, )* )*
        }

        impl Property {
            /// Every known property, in declaration order.
            pub const ALL: &'static [Property] = &[ $( $( Property::$variant, )* )* ];

            /// The camelCase key, as used by presets and the UI.
            pub fn key(self) -> &'static str {
                match self {
                    $( $( Property::$variant => $key, )* )*
                }
            }

            /// The editor panel this property belongs to.
            pub fn category(self) -> Category {
                match self {
                    $( $( Property::$variant => Category::$category, )* )*
                }
            }
        }
    };
}

properties! {
    Layout => [
        Display = "display",
        Position = "position",
        Top = "top",
        Right = "right",
        Bottom = "bottom",
        Left = "left",
        ZIndex = "zIndex",
        Overflow = "overflow",
        OverflowX = "overflowX",
        OverflowY = "overflowY",
        Visibility = "visibility",
        Float = "float",
        Clear = "clear",
        BoxSizing = "boxSizing",
    ],
    Spacing => [
        Margin = "margin",
        MarginTop = "marginTop",
        MarginRight = "marginRight",
        MarginBottom = "marginBottom",
        MarginLeft = "marginLeft",
        Padding = "padding",
        PaddingTop = "paddingTop",
        PaddingRight = "paddingRight",
        PaddingBottom = "paddingBottom",
        PaddingLeft = "paddingLeft",
    ],
    Sizing => [
        Width = "width",
        Height = "height",
        MinWidth = "minWidth",
        MaxWidth = "maxWidth",
        MinHeight = "minHeight",
        MaxHeight = "maxHeight",
        AspectRatio = "aspectRatio",
    ],
    Flexbox => [
        FlexDirection = "flexDirection",
        FlexWrap = "flexWrap",
        JustifyContent = "justifyContent",
        AlignItems = "alignItems",
        AlignContent = "alignContent",
        AlignSelf = "alignSelf",
        Gap = "gap",
        RowGap = "rowGap",
        ColumnGap = "columnGap",
        FlexGrow = "flexGrow",
        FlexShrink = "flexShrink",
        FlexBasis = "flexBasis",
        Order = "order",
    ],
    Grid => [
        GridTemplateColumns = "gridTemplateColumns",
        GridTemplateRows = "gridTemplateRows",
        GridTemplateAreas = "gridTemplateAreas",
        GridAutoFlow = "gridAutoFlow",
        GridAutoColumns = "gridAutoColumns",
        GridAutoRows = "gridAutoRows",
        GridColumn = "gridColumn",
        GridRow = "gridRow",
        GridArea = "gridArea",
        JustifyItems = "justifyItems",
        JustifySelf = "justifySelf",
        PlaceItems = "placeItems",
        PlaceContent = "placeContent",
    ],
    Typography => [
        FontFamily = "fontFamily",
        FontSize = "fontSize",
        FontWeight = "fontWeight",
        FontStyle = "fontStyle",
        LineHeight = "lineHeight",
        LetterSpacing = "letterSpacing",
        WordSpacing = "wordSpacing",
        TextAlign = "textAlign",
        TextDecoration = "textDecoration",
        TextTransform = "textTransform",
        TextIndent = "textIndent",
        WhiteSpace = "whiteSpace",
        WordBreak = "wordBreak",
        TextOverflow = "textOverflow",
        TextShadow = "textShadow",
    ],
    Colors => [
        Color = "color",
        BackgroundColor = "backgroundColor",
        Opacity = "opacity",
        AccentColor = "accentColor",
        CaretColor = "caretColor",
    ],
    Background => [
        BackgroundImage = "backgroundImage",
        BackgroundSize = "backgroundSize",
        BackgroundPosition = "backgroundPosition",
        BackgroundRepeat = "backgroundRepeat",
        BackgroundAttachment = "backgroundAttachment",
        BackgroundClip = "backgroundClip",
        BackgroundBlendMode = "backgroundBlendMode",
    ],
    Borders => [
        Border = "border",
        BorderWidth = "borderWidth",
        BorderStyle = "borderStyle",
        BorderColor = "borderColor",
        BorderRadius = "borderRadius",
        BorderTopLeftRadius = "borderTopLeftRadius",
        BorderTopRightRadius = "borderTopRightRadius",
        BorderBottomRightRadius = "borderBottomRightRadius",
        BorderBottomLeftRadius = "borderBottomLeftRadius",
        Outline = "outline",
        OutlineOffset = "outlineOffset",
    ],
    Effects => [
        BoxShadow = "boxShadow",
        Filter = "filter",
        BackdropFilter = "backdropFilter",
        MixBlendMode = "mixBlendMode",
        ClipPath = "clipPath",
        Cursor = "cursor",
        PointerEvents = "pointerEvents",
    ],
    Transforms => [
        Transform = "transform",
        TransformOrigin = "transformOrigin",
        Perspective = "perspective",
        TransformStyle = "transformStyle",
        BackfaceVisibility = "backfaceVisibility",
    ],
    Animation => [
        Transition = "transition",
        TransitionProperty = "transitionProperty",
        TransitionDuration = "transitionDuration",
        TransitionTimingFunction = "transitionTimingFunction",
        TransitionDelay = "transitionDelay",
        Animation = "animation",
        WillChange = "willChange",
    ],
    Misc => [
        ObjectFit = "objectFit",
        ObjectPosition = "objectPosition",
        Content = "content",
        ListStyle = "listStyle",
        UserSelect = "userSelect",
    ],
}

impl Property {
    /// The kebab-case CSS property name.
    pub fn css_name(self) -> String {
        to_kebab_case(self.key())
    }

    /// Looks up a property by its camelCase key.
    pub fn from_key(key: &str) -> Option<Property> {
        Property::ALL.iter().copied().find(|p| p.key() == key)
    }

    /// Looks up a property by its kebab-case CSS name.
    pub fn from_css_name(name: &str) -> Option<Property> {
        Self::from_key(&to_camel_case(name.trim()))
    }

    /// Resolves either spelling, camelCase first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] when neither spelling matches.
    pub fn resolve(name: &str) -> Result<Property> {
        Self::from_key(name)
            .or_else(|| Self::from_css_name(name))
            .ok_or_else(|| Error::UnknownProperty(name.to_string()))
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css_name())
    }
}

impl std::str::FromStr for Property {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Property::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = Property::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), Property::ALL.len());
    }

    #[test]
    fn test_css_name_is_kebab() {
        assert_eq!(Property::FontSize.css_name(), "font-size");
        assert_eq!(Property::ZIndex.css_name(), "z-index");
        assert_eq!(Property::Color.css_name(), "color");
    }

    #[test]
    fn test_from_key_and_css_name() {
        assert_eq!(Property::from_key("backdropFilter"), Some(Property::BackdropFilter));
        assert_eq!(
            Property::from_css_name("backdrop-filter"),
            Some(Property::BackdropFilter)
        );
        assert_eq!(Property::from_key("background-color"), None);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = Property::resolve("fontSise").unwrap_err();
        assert!(matches!(err, Error::UnknownProperty(name) if name == "fontSise"));
    }

    #[test]
    fn test_every_css_name_resolves_back() {
        for p in Property::ALL {
            assert_eq!(Property::from_css_name(&p.css_name()), Some(*p));
        }
    }

    #[test]
    fn test_all_is_sorted_by_ord() {
        let mut sorted = Property::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Property::ALL);
    }

    #[test]
    fn test_every_category_has_properties() {
        for c in Category::ALL {
            assert!(c.properties().next().is_some(), "{:?} is empty", c);
        }
    }

    #[test]
    fn test_serde_uses_camel_key() {
        let json = serde_json::to_string(&Property::GridTemplateColumns).unwrap();
        assert_eq!(json, "\"gridTemplateColumns\"");
        let back: Property = serde_json::from_str("\"zIndex\"").unwrap();
        assert_eq!(back, Property::ZIndex);
    }
}

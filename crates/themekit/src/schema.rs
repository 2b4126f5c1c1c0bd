//! Schema registry
//!
//! Static tables relating token kinds, style properties and component kinds
//! to the buckets of the compiled theme. The bucket names and shapes here are
//! the contract the style runtime reads, so they must not drift.
//!
//! Wiring a new style property to an existing token pool only requires an
//! entry in [`STYLE_PROPERTIES`].

use crate::tokens::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

/// Shape of a top-level theme bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BucketShape {
    /// Ordered list of values (`space`, `fontSizes`, ...)
    List,
    /// Name -> value mapping (`colors`, `fonts`, ...)
    Named,
    /// Component or variant name -> style record (`buttons`, `cards`, ...)
    Nested,
}

impl Display for BucketShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Named => "named",
            Self::Nested => "nested",
        })
    }
}

/// UI component kinds that own a nested bucket of component and variant
/// styles.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Button,
    Text,
    Heading,
    Link,
    Image,
    Card,
    Layout,
    Input,
    Select,
    Textarea,
    Label,
    Badge,
    Alert,
    Message,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 14] = [
        ComponentKind::Button,
        ComponentKind::Text,
        ComponentKind::Heading,
        ComponentKind::Link,
        ComponentKind::Image,
        ComponentKind::Card,
        ComponentKind::Layout,
        ComponentKind::Input,
        ComponentKind::Select,
        ComponentKind::Textarea,
        ComponentKind::Label,
        ComponentKind::Badge,
        ComponentKind::Alert,
        ComponentKind::Message,
    ];

    /// Stable component id, also the key of the component's own style record.
    pub fn id(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Link => "link",
            Self::Image => "image",
            Self::Card => "card",
            Self::Layout => "layout",
            Self::Input => "input",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Label => "label",
            Self::Badge => "badge",
            Self::Alert => "alert",
            Self::Message => "message",
        }
    }

    /// Human-readable label, used for default variant names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Text => "Text",
            Self::Heading => "Heading",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Card => "Card",
            Self::Layout => "Layout",
            Self::Input => "Input",
            Self::Select => "Select",
            Self::Textarea => "Textarea",
            Self::Label => "Label",
            Self::Badge => "Badge",
            Self::Alert => "Alert",
            Self::Message => "Message",
        }
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown component id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component kind: {0}")]
pub struct UnknownComponentKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownComponentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownComponentKind(s.to_string()))
    }
}

/// Style properties backed by a token pool, grouped by the kind backing them.
pub const STYLE_PROPERTIES: &[(TokenKind, &[&str])] = &[
    (
        TokenKind::Spacing,
        &[
            "margin",
            "marginTop",
            "marginRight",
            "marginBottom",
            "marginLeft",
            "marginX",
            "marginY",
            "m",
            "mt",
            "mr",
            "mb",
            "ml",
            "mx",
            "my",
            "padding",
            "paddingTop",
            "paddingRight",
            "paddingBottom",
            "paddingLeft",
            "paddingX",
            "paddingY",
            "p",
            "pt",
            "pr",
            "pb",
            "pl",
            "px",
            "py",
            "top",
            "right",
            "bottom",
            "left",
        ],
    ),
    (
        TokenKind::Color,
        &[
            "color",
            "backgroundColor",
            "bg",
            "borderColor",
            "borderTopColor",
            "borderRightColor",
            "borderBottomColor",
            "borderLeftColor",
            "outlineColor",
            "caretColor",
            "fill",
            "stroke",
        ],
    ),
    (TokenKind::Font, &["fontFamily"]),
    (TokenKind::FontSize, &["fontSize"]),
    (TokenKind::FontWeight, &["fontWeight"]),
    (TokenKind::LineHeight, &["lineHeight"]),
    (TokenKind::LetterSpacing, &["letterSpacing"]),
    (
        TokenKind::Border,
        &[
            "border",
            "borderTop",
            "borderRight",
            "borderBottom",
            "borderLeft",
            "borderX",
            "borderY",
            "outline",
        ],
    ),
    (TokenKind::BorderStyle, &["borderStyle"]),
    (
        TokenKind::BorderWidth,
        &[
            "borderWidth",
            "borderTopWidth",
            "borderRightWidth",
            "borderBottomWidth",
            "borderLeftWidth",
            "outlineWidth",
        ],
    ),
    (
        TokenKind::Radius,
        &[
            "borderRadius",
            "borderTopLeftRadius",
            "borderTopRightRadius",
            "borderBottomLeftRadius",
            "borderBottomRightRadius",
        ],
    ),
    (TokenKind::Shadow, &["boxShadow", "textShadow"]),
    (TokenKind::ZIndex, &["zIndex"]),
    (TokenKind::Breakpoint, &[]),
    (
        TokenKind::Size,
        &[
            "width",
            "height",
            "minWidth",
            "maxWidth",
            "minHeight",
            "maxHeight",
            "size",
            "flexBasis",
        ],
    ),
    (
        TokenKind::GridGap,
        &[
            "gridGap",
            "gridColumnGap",
            "gridRowGap",
            "gap",
            "columnGap",
            "rowGap",
        ],
    ),
];

/// Style properties with no token representation. Their values are always
/// literals.
pub const LITERAL_STYLE_PROPERTIES: &[&str] = &[
    "textTransform",
    "textDecoration",
    "textAlign",
    "fontStyle",
    "whiteSpace",
    "verticalAlign",
    "display",
    "position",
    "overflow",
    "cursor",
    "opacity",
    "transition",
    "flexDirection",
    "flexWrap",
    "alignItems",
    "justifyContent",
    "objectFit",
    "appearance",
];

fn style_index() -> &'static HashMap<&'static str, TokenKind> {
    static INDEX: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::new();
        for (kind, properties) in STYLE_PROPERTIES {
            for property in *properties {
                // First declaration wins
                index.entry(*property).or_insert(*kind);
            }
        }
        index
    })
}

/// Token kind backing a style property, `None` when the property is not
/// token-backed.
pub fn property_for_style(property: &str) -> Option<TokenKind> {
    style_index().get(property).copied()
}

/// Whether the property is registered as literal-only.
pub fn is_literal_style(property: &str) -> bool {
    LITERAL_STYLE_PROPERTIES.contains(&property)
}

/// Whether the registry knows the property at all.
pub fn is_known_style(property: &str) -> bool {
    property_for_style(property).is_some() || is_literal_style(property)
}

/// Style properties backed by the given kind
pub fn styles_for_token_kind(kind: TokenKind) -> &'static [&'static str] {
    STYLE_PROPERTIES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, properties)| *properties)
        .unwrap_or(&[])
}

/// Top-level bucket of the compiled theme for a token kind.
pub fn bucket_for_token_kind(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Spacing => "space",
        TokenKind::Color => "colors",
        TokenKind::Font => "fonts",
        TokenKind::FontSize => "fontSizes",
        TokenKind::FontWeight => "fontWeights",
        TokenKind::LineHeight => "lineHeights",
        TokenKind::LetterSpacing => "letterSpacings",
        TokenKind::Border => "borders",
        TokenKind::BorderStyle => "borderStyles",
        TokenKind::BorderWidth => "borderWidths",
        TokenKind::Radius => "radii",
        TokenKind::Shadow => "shadows",
        TokenKind::ZIndex => "zIndices",
        TokenKind::Breakpoint => "breakpoints",
        TokenKind::Size => "sizes",
        TokenKind::GridGap => "gridGaps",
    }
}

/// Shape of the bucket for a token kind
pub fn shape_for_token_kind(kind: TokenKind) -> BucketShape {
    if kind.uses_names() {
        BucketShape::Named
    } else {
        BucketShape::List
    }
}

/// Top-level bucket of the compiled theme for a component kind.
pub fn bucket_for_component_kind(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Button => "buttons",
        ComponentKind::Text => "text",
        ComponentKind::Heading => "headings",
        ComponentKind::Link => "links",
        ComponentKind::Image => "images",
        ComponentKind::Card => "cards",
        ComponentKind::Layout => "layout",
        ComponentKind::Input => "inputs",
        ComponentKind::Select => "selects",
        ComponentKind::Textarea => "textareas",
        ComponentKind::Label => "labels",
        ComponentKind::Badge => "badges",
        ComponentKind::Alert => "alerts",
        ComponentKind::Message => "messages",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_token_kind_is_declared_once() {
        let declared: Vec<TokenKind> = STYLE_PROPERTIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(declared, TokenKind::ALL.to_vec());
    }

    #[test]
    fn style_properties_are_unique_across_tables() {
        let mut seen = HashSet::new();
        for (_, properties) in STYLE_PROPERTIES {
            for property in *properties {
                assert!(seen.insert(*property), "duplicate property {property}");
            }
        }
        for property in LITERAL_STYLE_PROPERTIES {
            assert!(seen.insert(*property), "duplicate property {property}");
        }
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(property_for_style("color"), Some(TokenKind::Color));
        assert_eq!(property_for_style("bg"), Some(TokenKind::Color));
        assert_eq!(property_for_style("paddingX"), Some(TokenKind::Spacing));
        assert_eq!(property_for_style("borderRadius"), Some(TokenKind::Radius));
        assert_eq!(property_for_style("gap"), Some(TokenKind::GridGap));
        assert_eq!(property_for_style("textTransform"), None);
        assert_eq!(property_for_style("colour"), None);
    }

    #[test]
    fn literal_properties_are_known_but_not_token_backed() {
        assert!(is_known_style("textTransform"));
        assert!(is_literal_style("textTransform"));
        assert!(is_known_style("fontSize"));
        assert!(!is_literal_style("fontSize"));
        assert!(!is_known_style("sparkle"));
    }

    #[test]
    fn bucket_names_are_distinct() {
        let mut seen = HashSet::new();
        for kind in TokenKind::ALL {
            assert!(seen.insert(bucket_for_token_kind(kind)));
        }
        for kind in ComponentKind::ALL {
            assert!(seen.insert(bucket_for_component_kind(kind)));
        }
    }

    #[test]
    fn shapes_follow_naming() {
        assert_eq!(shape_for_token_kind(TokenKind::Color), BucketShape::Named);
        assert_eq!(shape_for_token_kind(TokenKind::FontSize), BucketShape::List);
        assert_eq!(shape_for_token_kind(TokenKind::Breakpoint), BucketShape::List);
    }

    #[test]
    fn component_ids_parse() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.id().parse::<ComponentKind>(), Ok(kind));
        }
        assert_eq!(styles_for_token_kind(TokenKind::Breakpoint).len(), 0);
        assert!(styles_for_token_kind(TokenKind::Shadow).contains(&"boxShadow"));
    }
}

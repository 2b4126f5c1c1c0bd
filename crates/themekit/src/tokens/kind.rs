//! Token kinds

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The kind tag carried by every token.
///
/// The kind decides which bucket of the compiled theme a token lands in and
/// whether the token carries a name.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Spacing,
    Color,
    Font,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    Border,
    BorderStyle,
    BorderWidth,
    Radius,
    Shadow,
    ZIndex,
    Breakpoint,
    Size,
    GridGap,
}

impl TokenKind {
    /// Every declared kind, in bucket order.
    pub const ALL: [TokenKind; 16] = [
        TokenKind::Spacing,
        TokenKind::Color,
        TokenKind::Font,
        TokenKind::FontSize,
        TokenKind::FontWeight,
        TokenKind::LineHeight,
        TokenKind::LetterSpacing,
        TokenKind::Border,
        TokenKind::BorderStyle,
        TokenKind::BorderWidth,
        TokenKind::Radius,
        TokenKind::Shadow,
        TokenKind::ZIndex,
        TokenKind::Breakpoint,
        TokenKind::Size,
        TokenKind::GridGap,
    ];

    /// Stable kind id, as written in token documents.
    pub fn id(self) -> &'static str {
        match self {
            Self::Spacing => "spacing",
            Self::Color => "color",
            Self::Font => "font",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
            Self::Border => "border",
            Self::BorderStyle => "border-style",
            Self::BorderWidth => "border-width",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
            Self::ZIndex => "z-index",
            Self::Breakpoint => "breakpoint",
            Self::Size => "size",
            Self::GridGap => "grid-gap",
        }
    }

    /// Human-readable label, used for default names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spacing => "Spacing",
            Self::Color => "Color",
            Self::Font => "Font",
            Self::FontSize => "Font Size",
            Self::FontWeight => "Font Weight",
            Self::LineHeight => "Line Height",
            Self::LetterSpacing => "Letter Spacing",
            Self::Border => "Border",
            Self::BorderStyle => "Border Style",
            Self::BorderWidth => "Border Width",
            Self::Radius => "Radius",
            Self::Shadow => "Shadow",
            Self::ZIndex => "Z-Index",
            Self::Breakpoint => "Breakpoint",
            Self::Size => "Size",
            Self::GridGap => "Grid Gap",
        }
    }

    /// Whether tokens of this kind carry a `name`.
    ///
    /// Named kinds compile into a mapping bucket, the rest into a list bucket.
    pub fn uses_names(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::Font
                | Self::FontWeight
                | Self::LineHeight
                | Self::LetterSpacing
                | Self::Border
                | Self::BorderStyle
                | Self::Shadow
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown kind id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind: {0}")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.id().parse::<TokenKind>(), Ok(kind));
        }
        assert!("colour".parse::<TokenKind>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case_ids() {
        let json = serde_json::to_string(&TokenKind::LetterSpacing).unwrap();
        assert_eq!(json, "\"letter-spacing\"");
        let kind: TokenKind = serde_json::from_str("\"z-index\"").unwrap();
        assert_eq!(kind, TokenKind::ZIndex);
    }

    #[test]
    fn eight_kinds_use_names() {
        let named = TokenKind::ALL.iter().filter(|k| k.uses_names()).count();
        assert_eq!(named, 8);
        assert!(TokenKind::Color.uses_names());
        assert!(!TokenKind::Spacing.uses_names());
        assert!(!TokenKind::Breakpoint.uses_names());
    }
}

//! Token, group and variant factory
//!
//! Creates new records for authoring tools: a fresh id, kind defaults, then
//! caller overrides, then a name made unique within its scope. Existing
//! collections are only read.

use crate::schema::ComponentKind;
use crate::tokens::{Group, RawValue, Token, TokenKind};
use crate::variant::{StyleValue, Variant};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Generate a fresh token/group/variant id (hyphenated UUID v4).
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whether a string has the shape of a generated id.
///
/// The compiler uses this to tell token references from literals in variant
/// styles. It is a shape check only: a literal that happens to look like a
/// UUID is treated as a reference, and a hand-written id such as `"a"` is
/// treated as a literal.
pub fn looks_like_id(value: &str) -> bool {
    static ID_SHAPE: OnceLock<Regex> = OnceLock::new();
    ID_SHAPE
        .get_or_init(|| {
            Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
                .expect("id shape pattern is valid")
        })
        .is_match(value)
}

/// Return `desired` if it is free, else `"{desired} {n}"` for the smallest
/// free `n >= 2`.
pub fn unique_name(desired: &str, unavailable: &HashSet<&str>) -> String {
    if !unavailable.contains(desired) {
        return desired.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{desired} {n}");
        if !unavailable.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

/// Default record for a kind: a literal value, plus a name for named kinds.
pub fn default_token(kind: TokenKind, id: impl Into<String>) -> Token {
    let value: RawValue = match kind {
        TokenKind::Spacing => 8.into(),
        TokenKind::Color => "#000000".into(),
        TokenKind::Font => "system-ui, sans-serif".into(),
        TokenKind::FontSize => 16.into(),
        TokenKind::FontWeight => 400.into(),
        TokenKind::LineHeight => 1.5.into(),
        TokenKind::LetterSpacing => "normal".into(),
        TokenKind::Border => "1px solid".into(),
        TokenKind::BorderStyle => "solid".into(),
        TokenKind::BorderWidth => 1.into(),
        TokenKind::Radius => 4.into(),
        TokenKind::Shadow => "0 1px 3px rgba(0, 0, 0, 0.1)".into(),
        TokenKind::ZIndex => 1.into(),
        TokenKind::Breakpoint => "40em".into(),
        TokenKind::Size => 16.into(),
        TokenKind::GridGap => 8.into(),
    };
    if kind.uses_names() {
        Token::named(id, kind, kind.label(), value)
    } else {
        Token::new(id, kind, value)
    }
}

/// Caller-supplied fields for [`create_token`]
#[derive(Clone, Debug, Default)]
pub struct TokenOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<RawValue>,
    pub groups: Option<Vec<String>>,
}

impl TokenOverrides {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<RawValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }
}

/// Create a token of `kind` that fits into `existing`.
///
/// A name collision is scoped to same-kind tokens: all of them when the new
/// token is ungrouped, otherwise only those sharing one of its groups.
pub fn create_token(existing: &[Token], kind: TokenKind, overrides: TokenOverrides) -> Token {
    let id = overrides.id.unwrap_or_else(generate_id);
    let mut token = default_token(kind, id);

    if let Some(value) = overrides.value {
        token.value = value;
    }
    if let Some(groups) = overrides.groups.filter(|groups| !groups.is_empty()) {
        token.groups = Some(groups);
    }
    match overrides.name {
        Some(name) if kind.uses_names() => token.name = Some(name),
        Some(name) => {
            tracing::warn!("Ignoring name `{}` for unnamed token kind {}", name, kind);
        }
        None => {}
    }

    if let Some(desired) = token.name.as_deref() {
        let taken: HashSet<&str> = existing
            .iter()
            .filter(|other| other.kind() == kind)
            .filter(|other| !token.is_grouped() || token.shares_group_with(other))
            .filter_map(Token::name)
            .collect();
        let name = unique_name(desired, &taken);
        token.name = Some(name);
    }

    tracing::debug!("Created {} token {}", kind, token.id());
    token
}

/// Caller-supplied fields for [`create_group`]
#[derive(Clone, Debug, Default)]
pub struct GroupOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub members: Option<Vec<String>>,
}

impl GroupOverrides {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = Some(members.into_iter().map(Into::into).collect());
        self
    }
}

/// Create a group of `group_type`, its name unique among groups of that type.
pub fn create_group(existing: &[Group], group_type: TokenKind, overrides: GroupOverrides) -> Group {
    let id = overrides.id.unwrap_or_else(generate_id);
    let desired = overrides
        .name
        .unwrap_or_else(|| format!("{} Group", group_type.label()));

    let taken: HashSet<&str> = existing
        .iter()
        .filter(|group| group.group_type == group_type)
        .map(|group| group.name.as_str())
        .collect();

    let group = Group {
        id,
        group_type,
        name: unique_name(&desired, &taken),
        members: overrides.members.unwrap_or_default(),
    };
    tracing::debug!("Created {} group {} ({})", group_type, group.id, group.name);
    group
}

/// Caller-supplied fields for [`create_variant`]
#[derive(Clone, Debug, Default)]
pub struct VariantOverrides {
    pub id: Option<String>,
    pub name: Option<String>,
    pub styles: Option<IndexMap<String, StyleValue>>,
}

impl VariantOverrides {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.styles
            .get_or_insert_with(IndexMap::new)
            .insert(property.into(), value.into());
        self
    }
}

/// Create a variant of `variant_type`, its name unique among variants of that
/// type.
pub fn create_variant(
    existing: &[Variant],
    variant_type: ComponentKind,
    overrides: VariantOverrides,
) -> Variant {
    let id = overrides.id.unwrap_or_else(generate_id);
    let desired = overrides
        .name
        .unwrap_or_else(|| variant_type.label().to_string());

    let taken: HashSet<&str> = existing
        .iter()
        .filter(|variant| variant.variant_type == variant_type)
        .map(|variant| variant.name.as_str())
        .collect();

    let variant = Variant {
        id,
        variant_type,
        name: unique_name(&desired, &taken),
        styles: overrides.styles.unwrap_or_default(),
    };
    tracing::debug!(
        "Created {} variant {} ({})",
        variant_type,
        variant.id,
        variant.name
    );
    variant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_name_returns_free_name_unchanged() {
        let taken = HashSet::from(["Red"]);
        assert_eq!(unique_name("Blue", &taken), "Blue");
    }

    #[test]
    fn unique_name_picks_lowest_free_suffix() {
        let taken = HashSet::from(["Red", "Red 2", "Red 4"]);
        assert_eq!(unique_name("Red", &taken), "Red 3");
        assert_eq!(unique_name("Red", &HashSet::from(["Red"])), "Red 2");
    }

    #[test]
    fn generated_ids_have_id_shape() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(looks_like_id(&a));
        assert!(looks_like_id(&a.to_uppercase()));
    }

    #[test]
    fn literals_do_not_have_id_shape() {
        for literal in ["uppercase", "a", "#FF0000", "1px solid", "", "0 1px 3px"] {
            assert!(!looks_like_id(literal), "{literal}");
        }
        assert!(!looks_like_id("3f2504e0-4f89-11d3-9a0c-0305e82c3301x"));
    }

    #[test]
    fn defaults_are_named_only_for_named_kinds() {
        for kind in TokenKind::ALL {
            let token = default_token(kind, "id");
            assert_eq!(token.name().is_some(), kind.uses_names(), "{kind}");
            assert_eq!(token.kind(), kind);
        }
        assert_eq!(default_token(TokenKind::Color, "c").name(), Some("Color"));
    }

    #[test]
    fn name_override_is_ignored_for_unnamed_kinds() {
        let token = create_token(&[], TokenKind::Spacing, TokenOverrides::default().name("Small"));
        assert_eq!(token.name(), None);
    }

    #[test]
    fn empty_group_override_leaves_token_ungrouped() {
        let token = create_token(
            &[],
            TokenKind::Color,
            TokenOverrides::default().groups(Vec::<String>::new()),
        );
        assert!(token.groups.is_none());
    }
}

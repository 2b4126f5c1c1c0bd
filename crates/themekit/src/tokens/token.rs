//! Token records

use super::{RawValue, TokenKind};
use serde::{Deserialize, Serialize};

/// A single design value.
///
/// `id` and `kind` are fixed at construction. `name` is set only for kinds
/// where [`TokenKind::uses_names`] is true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    id: String,
    #[serde(rename = "type")]
    kind: TokenKind,
    pub value: RawValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
}

impl Token {
    /// Create an unnamed token (list-style kinds).
    pub fn new(id: impl Into<String>, kind: TokenKind, value: impl Into<RawValue>) -> Self {
        Self {
            id: id.into(),
            kind,
            value: value.into(),
            name: None,
            groups: None,
        }
    }

    /// Create a named token (mapping-style kinds).
    pub fn named(
        id: impl Into<String>,
        kind: TokenKind,
        name: impl Into<String>,
        value: impl Into<RawValue>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(id, kind, value)
        }
    }

    /// Attach group ids
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Group ids, empty when the token is ungrouped.
    pub fn group_ids(&self) -> &[String] {
        self.groups.as_deref().unwrap_or(&[])
    }

    pub fn is_grouped(&self) -> bool {
        !self.group_ids().is_empty()
    }

    /// Whether both tokens belong to at least one common group.
    pub fn shares_group_with(&self, other: &Token) -> bool {
        self.group_ids()
            .iter()
            .any(|group| other.group_ids().contains(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type_and_skips_absent_fields() {
        let token = Token::new("t1", TokenKind::Spacing, 4);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "t1", "type": "spacing", "value": 4 })
        );
    }

    #[test]
    fn deserializes_named_grouped_token() {
        let token: Token = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "type": "color",
            "name": "Primary",
            "value": "#1E66F5",
            "groups": ["brand"]
        }))
        .unwrap();
        assert_eq!(token.kind(), TokenKind::Color);
        assert_eq!(token.name(), Some("Primary"));
        assert_eq!(token.group_ids(), ["brand".to_string()]);
    }

    #[test]
    fn group_sharing() {
        let a = Token::named("a", TokenKind::Color, "Red", "#f00").with_groups(["x", "y"]);
        let b = Token::named("b", TokenKind::Color, "Red", "#e00").with_groups(["y"]);
        let c = Token::named("c", TokenKind::Color, "Red", "#d00").with_groups(["z"]);
        let ungrouped = Token::named("d", TokenKind::Color, "Red", "#c00");

        assert!(a.shares_group_with(&b));
        assert!(!a.shares_group_with(&c));
        assert!(!a.shares_group_with(&ungrouped));
        assert!(!ungrouped.is_grouped());
    }
}

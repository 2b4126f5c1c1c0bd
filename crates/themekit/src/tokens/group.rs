//! Token groups

use super::TokenKind;
use serde::{Deserialize, Serialize};

/// A named collection of same-kind tokens.
///
/// Groups are an alternate path into a bucket: at compile time each member
/// id is resolved to its token and merged like an ungrouped token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub group_type: TokenKind,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Group {
    pub fn new(id: impl Into<String>, group_type: TokenKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group_type,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append member token ids
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }
}

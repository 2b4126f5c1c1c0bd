//! Component overrides and variants

use crate::schema::ComponentKind;
use crate::tokens::RawValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A style property value: one raw value or a list of them.
///
/// In variant input each raw value is either a token id or a literal. In the
/// compiled theme the ids have been replaced by token values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Single(RawValue),
    Many(Vec<RawValue>),
}

impl StyleValue {
    pub fn as_single(&self) -> Option<&RawValue> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    pub fn values(&self) -> &[RawValue] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl From<RawValue> for StyleValue {
    fn from(value: RawValue) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Single(value.into())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        Self::Single(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Single(value.into())
    }
}

impl From<Vec<RawValue>> for StyleValue {
    fn from(values: Vec<RawValue>) -> Self {
        Self::Many(values)
    }
}

/// Default styles for a component kind, expressed as token ids.
///
/// An empty id marks the property as explicitly unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOverride {
    pub name: ComponentKind,
    #[serde(default)]
    pub styles: IndexMap<String, String>,
}

impl ComponentOverride {
    pub fn new(name: ComponentKind) -> Self {
        Self {
            name,
            styles: IndexMap::new(),
        }
    }

    /// Bind a style property to a token id
    pub fn style(mut self, property: impl Into<String>, token_id: impl Into<String>) -> Self {
        self.styles.insert(property.into(), token_id.into());
        self
    }
}

/// A named, reusable bundle of styles for one component kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub variant_type: ComponentKind,
    pub name: String,
    #[serde(default)]
    pub styles: IndexMap<String, StyleValue>,
}

impl Variant {
    pub fn new(
        id: impl Into<String>,
        variant_type: ComponentKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            variant_type,
            name: name.into(),
            styles: IndexMap::new(),
        }
    }

    /// Set a style property to a token id, a literal, or a list of either
    pub fn style(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }
}

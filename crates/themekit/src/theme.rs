//! Compiled theme object

use crate::error::{Result, ThemeError};
use crate::schema::{
    bucket_for_component_kind, bucket_for_token_kind, shape_for_token_kind, BucketShape,
    ComponentKind,
};
use crate::tokens::{RawValue, TokenKind};
use crate::variant::StyleValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolved styles of one component or variant: property -> value
pub type ComponentStyles = IndexMap<String, StyleValue>;

/// One top-level property of the compiled theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bucket {
    List(Vec<RawValue>),
    Named(IndexMap<String, RawValue>),
    Nested(IndexMap<String, ComponentStyles>),
}

impl Bucket {
    /// Empty bucket of the given shape
    pub fn empty(shape: BucketShape) -> Self {
        match shape {
            BucketShape::List => Self::List(Vec::new()),
            BucketShape::Named => Self::Named(IndexMap::new()),
            BucketShape::Nested => Self::Nested(IndexMap::new()),
        }
    }

    pub fn shape(&self) -> BucketShape {
        match self {
            Self::List(_) => BucketShape::List,
            Self::Named(_) => BucketShape::Named,
            Self::Nested(_) => BucketShape::Nested,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(values) => values.is_empty(),
            Self::Named(values) => values.is_empty(),
            Self::Nested(values) => values.is_empty(),
        }
    }
}

/// The nested theme object handed to the style runtime.
///
/// Serializes to a JSON object whose keys are bucket names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledTheme {
    buckets: IndexMap<String, Bucket>,
}

impl CompiledTheme {
    /// A theme with every token and component bucket present and empty.
    pub fn empty() -> Self {
        let mut buckets = IndexMap::new();
        for kind in TokenKind::ALL {
            buckets.insert(
                bucket_for_token_kind(kind).to_string(),
                Bucket::empty(shape_for_token_kind(kind)),
            );
        }
        for kind in ComponentKind::ALL {
            buckets.insert(
                bucket_for_component_kind(kind).to_string(),
                Bucket::empty(BucketShape::Nested),
            );
        }
        Self { buckets }
    }

    pub fn get(&self, bucket: &str) -> Option<&Bucket> {
        self.buckets.get(bucket)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.buckets.iter().map(|(name, bucket)| (name.as_str(), bucket))
    }

    pub fn list(&self, bucket: &str) -> Option<&[RawValue]> {
        match self.buckets.get(bucket)? {
            Bucket::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn named(&self, bucket: &str) -> Option<&IndexMap<String, RawValue>> {
        match self.buckets.get(bucket)? {
            Bucket::Named(values) => Some(values),
            _ => None,
        }
    }

    pub fn nested(&self, bucket: &str) -> Option<&IndexMap<String, ComponentStyles>> {
        match self.buckets.get(bucket)? {
            Bucket::Nested(values) => Some(values),
            _ => None,
        }
    }

    /// Resolved style of a component or variant, e.g.
    /// `style("buttons", "primary", "color")`.
    pub fn style(&self, bucket: &str, entry: &str, property: &str) -> Option<&StyleValue> {
        self.nested(bucket)?.get(entry)?.get(property)
    }

    /// Append a value to a list bucket, creating it if missing.
    pub fn push(&mut self, bucket: &str, value: RawValue) -> Result<()> {
        match self.bucket_mut(bucket, BucketShape::List) {
            Bucket::List(values) => {
                values.push(value);
                Ok(())
            }
            other => Err(conflict(bucket, BucketShape::List, other)),
        }
    }

    /// Assign a value under `name` in a named bucket, overwriting any prior
    /// entry. A replaced entry keeps its original position.
    pub fn assign(&mut self, bucket: &str, name: &str, value: RawValue) -> Result<()> {
        match self.bucket_mut(bucket, BucketShape::Named) {
            Bucket::Named(values) => {
                values.insert(name.to_string(), value);
                Ok(())
            }
            other => Err(conflict(bucket, BucketShape::Named, other)),
        }
    }

    /// Assign a style property under `entry` in a nested bucket.
    pub fn assign_style(
        &mut self,
        bucket: &str,
        entry: &str,
        property: &str,
        value: StyleValue,
    ) -> Result<()> {
        match self.bucket_mut(bucket, BucketShape::Nested) {
            Bucket::Nested(entries) => {
                entries
                    .entry(entry.to_string())
                    .or_default()
                    .insert(property.to_string(), value);
                Ok(())
            }
            other => Err(conflict(bucket, BucketShape::Nested, other)),
        }
    }

    /// Sort every list bucket ascending.
    ///
    /// A list is left untouched unless every entry has a numeric key and all
    /// entries share one unit.
    pub fn sort_lists(&mut self) {
        for (name, bucket) in self.buckets.iter_mut() {
            let Bucket::List(values) = bucket else {
                continue;
            };
            let keys: Option<Vec<(f64, &str)>> =
                values.iter().map(RawValue::numeric_key).collect();
            let Some(keys) = keys else {
                tracing::debug!("Leaving `{}` unsorted: non-numeric entries", name);
                continue;
            };
            if keys.windows(2).any(|pair| pair[0].1 != pair[1].1) {
                tracing::debug!("Leaving `{}` unsorted: mixed units", name);
                continue;
            }
            let mut order: Vec<(f64, usize)> = keys
                .iter()
                .enumerate()
                .map(|(index, (key, _))| (*key, index))
                .collect();
            order.sort_by(|a, b| a.0.total_cmp(&b.0));
            let sorted = order.iter().map(|(_, index)| values[*index].clone()).collect();
            *values = sorted;
        }
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn bucket_mut(&mut self, bucket: &str, shape: BucketShape) -> &mut Bucket {
        self.buckets
            .entry(bucket.to_string())
            .or_insert_with(|| Bucket::empty(shape))
    }
}

impl Default for CompiledTheme {
    fn default() -> Self {
        Self::empty()
    }
}

fn conflict(bucket: &str, expected: BucketShape, found: &Bucket) -> ThemeError {
    ThemeError::ShapeConflict {
        bucket: bucket.to_string(),
        expected,
        found: found.shape(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theme_has_every_bucket() {
        let theme = CompiledTheme::empty();
        assert_eq!(theme.buckets().count(), 30);
        assert_eq!(theme.list("space"), Some(&[][..]));
        assert!(theme.named("colors").unwrap().is_empty());
        assert!(theme.nested("buttons").unwrap().is_empty());
        assert!(theme.buckets().all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn shape_conflicts_are_rejected() {
        let mut theme = CompiledTheme::empty();
        let err = theme.assign("space", "small", RawValue::from(4)).unwrap_err();
        assert_eq!(
            err,
            ThemeError::ShapeConflict {
                bucket: "space".to_string(),
                expected: BucketShape::Named,
                found: BucketShape::List,
            }
        );

        let err = theme.push("colors", RawValue::from("#fff")).unwrap_err();
        assert!(matches!(err, ThemeError::ShapeConflict { .. }));

        let err = theme
            .assign_style("colors", "button", "color", StyleValue::from("#fff"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::ShapeConflict { .. }));
    }

    #[test]
    fn overwriting_a_name_keeps_its_position() {
        let mut theme = CompiledTheme::empty();
        theme.assign("colors", "Red", "#f00".into()).unwrap();
        theme.assign("colors", "Blue", "#00f".into()).unwrap();
        theme.assign("colors", "Red", "#e00".into()).unwrap();

        let colors = theme.named("colors").unwrap();
        let names: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(names, ["Red", "Blue"]);
        assert_eq!(colors["Red"], RawValue::from("#e00"));
    }

    #[test]
    fn sorts_numeric_lists() {
        let mut theme = CompiledTheme::empty();
        for value in [16i64, 4, 8, 0] {
            theme.push("space", value.into()).unwrap();
        }
        for value in ["64em", "40em", "52em"] {
            theme.push("breakpoints", value.into()).unwrap();
        }
        theme.sort_lists();

        let space: Vec<RawValue> = [0i64, 4, 8, 16].into_iter().map(RawValue::from).collect();
        assert_eq!(theme.list("space").unwrap(), space.as_slice());
        let breakpoints: Vec<RawValue> =
            ["40em", "52em", "64em"].into_iter().map(RawValue::from).collect();
        assert_eq!(theme.list("breakpoints").unwrap(), breakpoints.as_slice());
    }

    #[test]
    fn leaves_unsortable_lists_in_input_order() {
        let mut theme = CompiledTheme::empty();
        for value in ["100%", "auto", "50%"] {
            theme.push("sizes", value.into()).unwrap();
        }
        for value in ["2rem", "8px"] {
            theme.push("radii", value.into()).unwrap();
        }
        theme.sort_lists();

        let sizes: Vec<RawValue> = ["100%", "auto", "50%"]
            .into_iter()
            .map(RawValue::from)
            .collect();
        assert_eq!(theme.list("sizes").unwrap(), sizes.as_slice());
        let radii: Vec<RawValue> = ["2rem", "8px"].into_iter().map(RawValue::from).collect();
        assert_eq!(theme.list("radii").unwrap(), radii.as_slice());
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut theme = CompiledTheme::empty();
        theme.assign("colors", "Red", "#FF0000".into()).unwrap();
        theme
            .assign_style("buttons", "button", "color", "#FF0000".into())
            .unwrap();

        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["colors"], serde_json::json!({ "Red": "#FF0000" }));
        assert_eq!(json["space"], serde_json::json!([]));
        assert_eq!(
            json["buttons"],
            serde_json::json!({ "button": { "color": "#FF0000" } })
        );
    }
}

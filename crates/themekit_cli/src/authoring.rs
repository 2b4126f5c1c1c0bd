//! Authoring commands: append factory-created records to the configured
//! documents.

use anyhow::{Context, Result};
use std::path::Path;
use themekit::{
    create_group, create_token, create_variant, ComponentKind, Group, GroupOverrides, RawValue,
    Token, TokenKind, TokenOverrides, Variant, VariantOverrides,
};

use crate::config::ThemeConfig;
use crate::store;

/// Parse a command-line value: numbers become numbers, anything else text.
pub fn parse_raw_value(input: &str) -> RawValue {
    let trimmed = input.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return RawValue::from(int);
    }
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => RawValue::from(float),
        _ => RawValue::from(input),
    }
}

/// Parse a `property=value` style assignment.
pub fn parse_style_assignment(input: &str) -> Result<(String, RawValue)> {
    let (property, value) = input
        .split_once('=')
        .with_context(|| format!("Expected `property=value`, got `{input}`"))?;
    let property = property.trim();
    if property.is_empty() {
        anyhow::bail!("Missing style property in `{input}`");
    }
    Ok((property.to_string(), parse_raw_value(value)))
}

/// Create a token and append it to the token document.
pub fn add_token(
    config: &ThemeConfig,
    kind: TokenKind,
    overrides: TokenOverrides,
) -> Result<Token> {
    let mut tokens: Vec<Token> = store::read_or_empty(&config.tokens)?;
    let token = create_token(&tokens, kind, overrides);
    tokens.push(token.clone());
    store::write_json(&config.tokens, &tokens)?;
    tracing::info!(
        "Added {} token {}{}",
        kind,
        token.id(),
        token.name().map(|n| format!(" ({n})")).unwrap_or_default()
    );
    Ok(token)
}

/// Create a group and append it to the group document.
pub fn add_group(
    config: &ThemeConfig,
    group_type: TokenKind,
    overrides: GroupOverrides,
) -> Result<Group> {
    let path = configured(config.groups.as_deref(), "groups")?;
    let mut groups: Vec<Group> = store::read_or_empty(path)?;
    let group = create_group(&groups, group_type, overrides);
    groups.push(group.clone());
    store::write_json(path, &groups)?;
    tracing::info!("Added {} group {} ({})", group_type, group.id, group.name);
    Ok(group)
}

/// Create a variant and append it to the variant document.
pub fn add_variant(
    config: &ThemeConfig,
    variant_type: ComponentKind,
    overrides: VariantOverrides,
) -> Result<Variant> {
    let path = configured(config.variants.as_deref(), "variants")?;
    let mut variants: Vec<Variant> = store::read_or_empty(path)?;
    let variant = create_variant(&variants, variant_type, overrides);
    variants.push(variant.clone());
    store::write_json(path, &variants)?;
    tracing::info!(
        "Added {} variant {} ({})",
        variant_type,
        variant.id,
        variant.name
    );
    Ok(variant)
}

fn configured<'a>(path: Option<&'a Path>, field: &str) -> Result<&'a Path> {
    path.with_context(|| format!("No `paths.{field}` configured"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_text() {
        assert_eq!(parse_raw_value("8"), RawValue::from(8));
        assert_eq!(parse_raw_value("1.25"), RawValue::from(1.25));
        assert_eq!(parse_raw_value("#FF0000"), RawValue::from("#FF0000"));
        assert_eq!(parse_raw_value("40em"), RawValue::from("40em"));
        assert_eq!(parse_raw_value("inf"), RawValue::from("inf"));
    }

    #[test]
    fn parses_style_assignments() {
        let (property, value) = parse_style_assignment("textTransform=uppercase").unwrap();
        assert_eq!(property, "textTransform");
        assert_eq!(value, RawValue::from("uppercase"));

        let (property, value) = parse_style_assignment("padding=8").unwrap();
        assert_eq!(property, "padding");
        assert_eq!(value, RawValue::from(8));

        assert!(parse_style_assignment("padding").is_err());
        assert!(parse_style_assignment("=8").is_err());
    }
}

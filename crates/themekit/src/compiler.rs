//! Theme compiler
//!
//! Turns tokens, groups, component overrides and variants into a
//! [`CompiledTheme`]. Passes run in a fixed order:
//!
//! 1. every bucket starts empty
//! 2. group members are merged
//! 3. the flat token list is merged (later writes win on a shared name)
//! 4. list buckets are sorted
//! 5. component overrides are resolved
//! 6. variants are resolved
//!
//! Any error aborts the whole compilation.

use crate::error::{Result, ThemeError};
use crate::factory::looks_like_id;
use crate::schema::{
    bucket_for_component_kind, bucket_for_token_kind, is_known_style, property_for_style,
};
use crate::theme::CompiledTheme;
use crate::tokens::{Group, RawValue, Token};
use crate::variant::{ComponentOverride, StyleValue, Variant};
use std::collections::HashMap;

/// Inputs of a compilation. Only `tokens` is required.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeSources<'a> {
    pub tokens: &'a [Token],
    pub groups: Option<&'a [Group]>,
    pub components: Option<&'a [ComponentOverride]>,
    pub variants: Option<&'a [Variant]>,
}

impl<'a> ThemeSources<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    pub fn groups(mut self, groups: &'a [Group]) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn components(mut self, components: &'a [ComponentOverride]) -> Self {
        self.components = Some(components);
        self
    }

    pub fn variants(mut self, variants: &'a [Variant]) -> Self {
        self.variants = Some(variants);
        self
    }
}

/// Compile a theme.
///
/// # Errors
///
/// - [`ThemeError::MissingInput`] when `tokens` is empty
/// - [`ThemeError::DanglingReference`] when a group member, component style
///   or id-shaped variant value names a missing token
/// - [`ThemeError::UnknownStyleProperty`] when a component or variant uses a
///   property the schema does not know
pub fn compile(sources: ThemeSources<'_>) -> Result<CompiledTheme> {
    if sources.tokens.is_empty() {
        return Err(ThemeError::MissingInput);
    }

    tracing::debug!(
        "Compiling theme from {} tokens, {} groups, {} components, {} variants",
        sources.tokens.len(),
        sources.groups.map_or(0, <[Group]>::len),
        sources.components.map_or(0, <[ComponentOverride]>::len),
        sources.variants.map_or(0, <[Variant]>::len),
    );

    let index = TokenIndex::new(sources.tokens);
    let mut theme = CompiledTheme::empty();

    if let Some(groups) = sources.groups {
        for group in groups {
            merge_group(&mut theme, &index, group)?;
        }
    }

    for token in sources.tokens {
        merge_token(&mut theme, token)?;
    }

    theme.sort_lists();

    if let Some(components) = sources.components {
        for component in components {
            resolve_component(&mut theme, &index, component)?;
        }
    }

    if let Some(variants) = sources.variants {
        for variant in variants {
            resolve_variant(&mut theme, &index, variant)?;
        }
    }

    Ok(theme)
}

/// Id -> token lookup, built once per compilation.
///
/// When ids repeat, the first token wins.
struct TokenIndex<'a> {
    by_id: HashMap<&'a str, &'a Token>,
}

impl<'a> TokenIndex<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        let mut by_id = HashMap::with_capacity(tokens.len());
        for token in tokens {
            by_id.entry(token.id()).or_insert(token);
        }
        Self { by_id }
    }

    fn resolve(&self, id: &str, owner: impl FnOnce() -> String) -> Result<&'a Token> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| ThemeError::DanglingReference {
                owner: owner(),
                id: id.to_string(),
            })
    }
}

fn merge_group(theme: &mut CompiledTheme, index: &TokenIndex<'_>, group: &Group) -> Result<()> {
    for member in &group.members {
        let token = index.resolve(member, || format!("group `{}`", group.name))?;
        if token.kind() != group.group_type {
            tracing::warn!(
                "Group `{}` ({}) contains {} token {}",
                group.name,
                group.group_type,
                token.kind(),
                token.id()
            );
        }
        merge_token(theme, token)?;
    }
    Ok(())
}

fn merge_token(theme: &mut CompiledTheme, token: &Token) -> Result<()> {
    let kind = token.kind();
    let bucket = bucket_for_token_kind(kind);
    if !kind.uses_names() {
        return theme.push(bucket, token.value.clone());
    }
    match token.name() {
        Some(name) => theme.assign(bucket, name, token.value.clone()),
        None => {
            tracing::warn!("Skipping unnamed {} token {}", kind, token.id());
            Ok(())
        }
    }
}

fn resolve_component(
    theme: &mut CompiledTheme,
    index: &TokenIndex<'_>,
    component: &ComponentOverride,
) -> Result<()> {
    let bucket = bucket_for_component_kind(component.name);
    let entry = component.name.id();
    let owner = || format!("component `{entry}`");

    for (property, token_id) in &component.styles {
        if token_id.is_empty() {
            tracing::debug!("Component `{}` leaves `{}` unset", entry, property);
            continue;
        }
        if !is_known_style(property) {
            return Err(ThemeError::UnknownStyleProperty {
                owner: owner(),
                property: property.clone(),
            });
        }
        let token = index.resolve(token_id, owner)?;
        warn_on_kind_mismatch(&owner(), property, token);
        theme.assign_style(bucket, entry, property, StyleValue::Single(token.value.clone()))?;
    }
    Ok(())
}

fn resolve_variant(
    theme: &mut CompiledTheme,
    index: &TokenIndex<'_>,
    variant: &Variant,
) -> Result<()> {
    let bucket = bucket_for_component_kind(variant.variant_type);
    let owner = || format!("{} variant `{}`", variant.variant_type, variant.name);

    for (property, value) in &variant.styles {
        if !is_known_style(property) {
            return Err(ThemeError::UnknownStyleProperty {
                owner: owner(),
                property: property.clone(),
            });
        }
        let resolved = match value.as_single() {
            Some(raw) => StyleValue::Single(resolve_raw(index, raw, property, &owner)?),
            None => StyleValue::Many(
                value
                    .values()
                    .iter()
                    .map(|raw| resolve_raw(index, raw, property, &owner))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };
        theme.assign_style(bucket, &variant.name, property, resolved)?;
    }
    Ok(())
}

/// Resolve one variant value: id-shaped strings must name a token, anything
/// else is a literal.
fn resolve_raw(
    index: &TokenIndex<'_>,
    raw: &RawValue,
    property: &str,
    owner: &dyn Fn() -> String,
) -> Result<RawValue> {
    match raw.as_str() {
        Some(text) if looks_like_id(text) => {
            let token = index.resolve(text, owner)?;
            warn_on_kind_mismatch(&owner(), property, token);
            Ok(token.value.clone())
        }
        _ => Ok(raw.clone()),
    }
}

fn warn_on_kind_mismatch(owner: &str, property: &str, token: &Token) {
    if let Some(expected) = property_for_style(property) {
        if expected != token.kind() {
            tracing::warn!(
                "{} binds `{}` ({}) to {} token {}",
                owner,
                property,
                expected,
                token.kind(),
                token.id()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ComponentKind;
    use crate::tokens::TokenKind;

    #[test]
    fn duplicate_ids_resolve_to_first_token() {
        let tokens = vec![
            Token::named("dup", TokenKind::Color, "First", "#111111"),
            Token::named("dup", TokenKind::Color, "Second", "#222222"),
        ];
        let components =
            vec![ComponentOverride::new(ComponentKind::Text).style("color", "dup")];
        let theme = compile(ThemeSources::new(&tokens).components(&components)).unwrap();
        assert_eq!(
            theme.style("text", "text", "color"),
            Some(&StyleValue::from("#111111"))
        );
    }

    #[test]
    fn unnamed_tokens_of_named_kinds_are_skipped() {
        let tokens = vec![Token::new("c", TokenKind::Color, "#fff")];
        let theme = compile(ThemeSources::new(&tokens)).unwrap();
        assert!(theme.named("colors").unwrap().is_empty());
    }

    #[test]
    fn names_on_list_kinds_are_ignored() {
        let tokens = vec![Token::named("s", TokenKind::Spacing, "Small", 4i64)];
        let theme = compile(ThemeSources::new(&tokens)).unwrap();
        assert_eq!(theme.list("space").unwrap(), [RawValue::from(4)].as_slice());
    }

    #[test]
    fn empty_component_id_skips_unknown_property() {
        let tokens = vec![Token::new("s", TokenKind::Spacing, 4i64)];
        let components = vec![ComponentOverride::new(ComponentKind::Card).style("sparkle", "")];
        let theme = compile(ThemeSources::new(&tokens).components(&components)).unwrap();
        assert!(theme.nested("cards").unwrap().is_empty());
    }
}

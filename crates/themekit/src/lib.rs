//! Themekit Theme Compiler
//!
//! Compiles a flat collection of design tokens into the nested theme object
//! consumed by a style-application runtime.
//!
//! # Overview
//!
//! The crate provides:
//! - **Tokens**: Colors, spacing steps, font sizes, borders, shadows and the
//!   other design values, each tagged with a [`TokenKind`]
//! - **Schema registry**: Static tables mapping token kinds, style properties
//!   and component kinds to output buckets
//! - **Factory**: Creation of tokens, groups and variants with fresh ids and
//!   collision-free names
//! - **Compiler**: Resolution of tokens, groups, component overrides and
//!   variants into a [`CompiledTheme`]
//!
//! # Quick Start
//!
//! ```rust
//! use themekit::{
//!     compile, ComponentKind, ComponentOverride, RawValue, ThemeSources, Token, TokenKind,
//! };
//!
//! let tokens = vec![Token::named("a", TokenKind::Color, "Red", "#FF0000")];
//! let components = vec![ComponentOverride::new(ComponentKind::Button).style("color", "a")];
//!
//! let theme = compile(ThemeSources::new(&tokens).components(&components)).unwrap();
//!
//! assert_eq!(theme.named("colors").unwrap()["Red"], RawValue::from("#FF0000"));
//! assert!(theme.style("buttons", "button", "color").is_some());
//! ```
//!
//! # Buckets
//!
//! Every token kind owns exactly one top-level bucket of the compiled theme.
//! Kinds whose tokens carry names compile into a name -> value mapping
//! (`colors`, `fonts`, `shadows`, ...), the others into an ascending list
//! (`space`, `fontSizes`, `breakpoints`, ...). Each component kind owns a
//! nested bucket (`buttons`, `text`, `cards`, ...) holding per-component and
//! per-variant style records.
//!
//! Compilation is stateless: every call builds a fresh theme from the full
//! input and nothing is cached between calls.

pub mod compiler;
pub mod error;
pub mod factory;
pub mod schema;
pub mod theme;
pub mod tokens;
pub mod variant;

// Re-export commonly used types
pub use compiler::{compile, ThemeSources};
pub use error::{Result, ThemeError};
pub use factory::{
    create_group, create_token, create_variant, generate_id, looks_like_id, unique_name,
    GroupOverrides, TokenOverrides, VariantOverrides,
};
pub use schema::{
    bucket_for_component_kind, bucket_for_token_kind, is_known_style, property_for_style,
    BucketShape, ComponentKind,
};
pub use theme::{Bucket, CompiledTheme, ComponentStyles};
pub use tokens::*;
pub use variant::{ComponentOverride, StyleValue, Variant};

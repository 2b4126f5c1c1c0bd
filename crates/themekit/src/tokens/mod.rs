//! Design tokens
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors and fonts
//! - Typography scales (sizes, weights, line heights, letter spacing)
//! - Spacing, sizes and grid gaps
//! - Borders, radii and shadows
//! - Z-indices and breakpoints
//!
//! Groups collect same-kind tokens under a human name.

mod group;
mod kind;
mod token;
mod value;

pub use group::*;
pub use kind::*;
pub use token::*;
pub use value::*;

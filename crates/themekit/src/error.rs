//! Theme compilation error types

use crate::schema::BucketShape;
use thiserror::Error;

/// Errors that abort a compilation.
///
/// A failed compilation never yields a partial theme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No tokens were supplied
    #[error("cannot compile a theme without tokens")]
    MissingInput,

    /// A group member, component style or variant style names a token id
    /// that does not exist
    #[error("{owner} references unknown token id `{id}`")]
    DanglingReference { owner: String, id: String },

    /// A component or variant style key is not registered in the schema
    #[error("{owner} uses unknown style property `{property}`")]
    UnknownStyleProperty { owner: String, property: String },

    /// A value was assigned into a bucket of a different shape
    #[error("bucket `{bucket}` holds {found} data, cannot assign {expected} data")]
    ShapeConflict {
        bucket: String,
        expected: BucketShape,
        found: BucketShape,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

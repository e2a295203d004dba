//! Defines [`DecodeError`], the reasons a GeoJSON geometry is rejected.

use thiserror::Error;

/// Why a document could not be decoded into a [`Geometry`](crate::Geometry).
///
/// Paths are JSON pointers into the decoded document, e.g. `/coordinates/1/0`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input is not JSON text.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The input bytes are not UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("geometry must be a JSON object")]
    NotAnObject,

    #[error("geometry is missing '{0}'")]
    MissingMember(&'static str),

    #[error("'{member}' must be {expected}")]
    InvalidMember {
        member: &'static str,
        expected: &'static str,
    },

    #[error("unknown geometry type '{0}'")]
    UnknownType(String),

    #[error("expected an array at {path}")]
    ExpectedArray { path: String },

    /// A position holds the wrong number of elements.
    #[error("position at {path} has {len} elements, expected {expected}")]
    PositionArity {
        path: String,
        len: usize,
        expected: &'static str,
    },

    #[error("position element at {path} is not a number")]
    NotANumber { path: String },
}

/// A `geo_types` geometry without a counterpart in this crate.
#[derive(Error, Debug, PartialEq)]
#[error("unsupported geometry: {0}")]
pub struct UnsupportedGeometry(pub &'static str);

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

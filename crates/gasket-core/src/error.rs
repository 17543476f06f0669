//! Error types for geometry generation.

use thiserror::Error;

use crate::emitter::EmitterKind;
use crate::simplex::SimplexMode;

/// Errors that can occur before a subdivision run starts.
///
/// Every variant is raised while validating a request, so a failed call
/// never produces a partial buffer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// The base vertex list does not match the simplex mode.
    #[error("{mode} needs {expected} base vertices, got {found}")]
    VertexCount {
        mode: SimplexMode,
        expected: usize,
        found: usize,
    },

    /// Depth arrived as a signed integer below zero.
    #[error("subdivision depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    /// Depth exceeds the configured ceiling.
    #[error("subdivision depth {depth} exceeds the supported maximum {max}")]
    DepthTooLarge { depth: i64, max: u32 },

    /// The output would hold more vertices than allowed.
    #[error("subdivision would emit {projected} vertices (max {max})")]
    TooLarge { projected: u64, max: u64 },

    /// The emitter cannot consume leaves of this simplex mode.
    #[error("{emitter} emitter does not support {mode} subdivision")]
    UnsupportedCombination {
        mode: SimplexMode,
        emitter: EmitterKind,
    },

    /// A buffer's color stream disagrees with the emitter or buffer feeding it.
    #[error("color stream mismatch (buffer: {buffer_colored}, incoming: {incoming_colored})")]
    ColorStreamMismatch {
        buffer_colored: bool,
        incoming_colored: bool,
    },

    /// A flat coordinate list does not split into xyz triples.
    #[error("base coordinates must come in xyz triples, got {floats} floats")]
    BaseCoordinates { floats: usize },

    /// A base vertex has a NaN or infinite coordinate.
    #[error("base vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    /// No demo preset with this name.
    #[error("unknown demo '{0}'")]
    UnknownDemo(String),

    /// An integer code passed across the JS boundary is out of range.
    #[error("invalid {what} code {value}")]
    InvalidCode { what: &'static str, value: u32 },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

impl GeometryError {
    /// Validate a signed depth coming from an integer boundary.
    pub fn check_depth(depth: i64) -> Result<u32> {
        if depth < 0 {
            return Err(GeometryError::NegativeDepth(depth));
        }
        u32::try_from(depth).map_err(|_| GeometryError::DepthTooLarge {
            depth,
            max: u32::MAX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::VertexCount {
            mode: SimplexMode::Tetrahedron,
            expected: 4,
            found: 3,
        };
        assert_eq!(format!("{err}"), "tetrahedron needs 4 base vertices, got 3");

        let err = GeometryError::TooLarge {
            projected: 4000,
            max: 2000,
        };
        let display = format!("{err}");
        assert!(display.contains("4000"));
        assert!(display.contains("2000"));

        let err = GeometryError::BaseCoordinates { floats: 8 };
        assert_eq!(
            format!("{err}"),
            "base coordinates must come in xyz triples, got 8 floats"
        );
    }

    #[test]
    fn test_check_depth() {
        assert_eq!(GeometryError::check_depth(0), Ok(0));
        assert_eq!(GeometryError::check_depth(7), Ok(7));
        assert_eq!(
            GeometryError::check_depth(-1),
            Err(GeometryError::NegativeDepth(-1))
        );
        assert_eq!(
            GeometryError::check_depth(i64::MAX),
            Err(GeometryError::DepthTooLarge {
                depth: i64::MAX,
                max: u32::MAX,
            })
        );
    }
}

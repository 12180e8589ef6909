//! # Mesh Errors
//!
//! Error types for shell and sampler generation.

use thiserror::Error;

/// Errors that can occur during scene geometry generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A generator parameter is out of its valid range.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// The sensor has no elevation channels.
    #[error("Elevation angle list is empty")]
    EmptyElevations,

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid("radius", "must be positive: -1");
        assert!(err.to_string().contains("radius"));
        assert!(err.to_string().contains("must be positive"));

        let err = MeshError::TooManyVertices { count: 20, max: 10 };
        assert_eq!(err.to_string(), "Too many vertices: 20 (max: 10)");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}

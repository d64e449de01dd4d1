//! Error types for the Galaxy3D scene editor core
//!
//! Spatial queries and camera path edits are total and never fail. Errors only
//! appear at the edges where a caller asks for a hard failure: building an index
//! from an invalid configuration, enforcing camera path validity, or mutating a
//! scene object that does not exist.

use std::fmt;

/// Result type for Galaxy3D scene editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D scene editor errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Spatial index configuration rejected (bad bounds, zero capacity, ...)
    InvalidConfig(String),

    /// Camera path failed validation; holds every violation found
    InvalidCameraPath(Vec<String>),

    /// Scene object key does not refer to a live object
    UnknownObject(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidCameraPath(errors) => {
                write!(f, "Invalid camera path: {}", errors.join("; "))
            }
            Error::UnknownObject(key) => write!(f, "Unknown scene object: {}", key),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error through the engine logger and evaluate to it.
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("galaxy3d::Scene", Error::UnknownObject(format!("{:?}", key)));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::galaxy3d::Error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

/// Log an error through the engine logger and return it from the current function.
///
/// # Example
///
/// ```ignore
/// if config.max_objects_per_node == 0 {
///     engine_bail!("galaxy3d::Octree", Error::InvalidConfig("zero capacity".to_string()));
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::engine_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

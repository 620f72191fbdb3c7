//! Error types for the Vista3D surface crate
//!
//! This module defines the error type used throughout the crate, plus the
//! `vista_err!` / `vista_bail!` macros that construct (and log) errors.

use std::fmt;

/// Result type for Vista3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Vista3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (renderer, lock poisoning, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, target, material, etc.)
    InvalidResource(String),

    /// Initialization failed (plugin lookup, backend setup)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build a `BackendError` and log it with the source module.
///
/// # Example
///
/// ```no_run
/// use vista_3d_surface::vista_err;
///
/// let err = vista_err!("vista3d::Surface", "target allocation failed");
/// ```
#[macro_export]
macro_rules! vista_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::vista_error!($source, "{}", message);
        $crate::vista3d::Error::BackendError(message)
    }};
}

/// Build a `BackendError`, log it, and return it from the enclosing function.
///
/// # Example
///
/// ```no_run
/// use vista_3d_surface::vista3d::Result;
/// use vista_3d_surface::vista_bail;
///
/// fn check(name: &str) -> Result<()> {
///     vista_bail!("vista3d::ShaderMaterial", "Duplicate uniform name '{}'", name);
/// }
/// ```
#[macro_export]
macro_rules! vista_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::vista_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

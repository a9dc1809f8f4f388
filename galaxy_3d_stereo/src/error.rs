//! Error types for the Galaxy3D stereo crate
//!
//! This module defines the error types used throughout the stereo pipeline:
//! rejected parameters, invalid controller state, and failures reported by
//! the host rendering backend.

use std::fmt;

/// Result type for Galaxy3D stereo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D stereo errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input rejected at the call that introduced it
    /// (non-positive focus, zero surface size, unknown strategy name, ...)
    InvalidParameter(String),

    /// Operation not allowed in the current state (e.g. render while inactive)
    InvalidState(String),

    /// Backend-specific error (render pass or render target failure)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (released render target, ...)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log a backend error and build the matching `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_stereo::engine_err;
/// let err = engine_err!("galaxy3d::stereo::Interlaced", "Render pass failed: {}", 42);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::BackendError(message)
    }};
}

/// Log a backend error and return it from the current function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

/// Log a rejected parameter and build the matching `Error::InvalidParameter`
#[macro_export]
macro_rules! engine_param_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::InvalidParameter(message)
    }};
}

/// Log a rejected parameter and return it from the current function
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_stereo::engine_param_bail;
/// # fn check(width: u32) -> galaxy_3d_stereo::galaxy3d::Result<()> {
/// if width == 0 {
///     engine_param_bail!("galaxy3d::stereo::Controller", "Surface width must be > 0");
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_param_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_param_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

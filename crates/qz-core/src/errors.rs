//! Error types for quantization-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace. Only
//! structural misuse (bad constructor arguments, malformed configuration)
//! surfaces as an error; numerical singularities inside the special
//! functions propagate as non-finite values instead.
//!
//! Numeric precondition checks go through [`ensure!`](crate::ensure) and
//! raise [`Error::Precondition`]; identity errors (an unknown component
//! name, mismatched lengths) raise [`Error::InvalidArgument`] directly;
//! failures detected mid-computation go through [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout quantization-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout quantization-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails with `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use qz_core::ensure;
/// fn positive(x: f64) -> qz_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use qz_core::fail;
/// fn always_err() -> qz_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

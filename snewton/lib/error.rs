//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;
use crate::field::Boundary;

/// Returned when an operation requiring a buffer of a certain length
/// encounters one of a different length.
#[derive(Debug, Error)]
#[error("encountered buffer with incompatible length; expected {0}, got {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<A>(expected: usize, buf: &[A]) -> Result<(), Self> {
        let n = buf.len();
        (n == expected).then_some(()).ok_or(Self(expected, n))
    }
}

/// Returned when a [`Field`][crate::field::Field] is constructed with
/// unusable dimensions.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when either extent of the main rectangle is zero.
    #[error("grid extents must be greater than 0; got {width}×{height}")]
    BadSize { width: usize, height: usize },

    /// Returned when the border is wider than the main rectangle under a
    /// boundary condition that copies interior cells into the border.
    #[error(
        "border of {border} cells does not fit a {width}×{height} grid under \
        {boundary:?} boundary conditions"
    )]
    BorderTooWide {
        width: usize,
        height: usize,
        border: usize,
        boundary: Boundary,
    },
}

impl GridError {
    pub(crate) fn check(
        width: usize,
        height: usize,
        border: usize,
        boundary: Boundary,
    ) -> Result<(), Self>
    {
        if width == 0 || height == 0 {
            return Err(Self::BadSize { width, height });
        }
        let fits = boundary == Boundary::Zero
            || (width >= border && height >= border);
        fits.then_some(())
            .ok_or(Self::BorderTooWide { width, height, border, boundary })
    }
}

/// Returned when simulation parameters are invalid or cannot be loaded.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Returned when a physical constant is non-positive or non-finite.
    #[error("parameter `{0}` must be finite and greater than 0; got {1}")]
    NonPositive(&'static str, f64),

    /// Returned when a physical constant is negative or non-finite.
    #[error("parameter `{0}` must be finite and non-negative; got {1}")]
    Negative(&'static str, f64),

    /// Returned when a non-positive relaxation tolerance is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a zero iteration cap is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when a parameter file cannot be read.
    #[error("unable to read parameter file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Returned when a parameter file is not valid TOML for [`Params`].
    ///
    /// [`Params`]: crate::params::Params
    #[error("unable to parse parameters: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ParamError {
    pub(crate) fn check_positive(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val.is_finite() && val > 0.0).then_some(())
            .ok_or(Self::NonPositive(name, val))
    }

    pub(crate) fn check_nonnegative(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val.is_finite() && val >= 0.0).then_some(())
            .ok_or(Self::Negative(name, val))
    }

    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}

/// Returned from [`Wave`][crate::wave::Wave] construction and drawing.
#[derive(Debug, Error)]
pub enum WaveError {
    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`LengthError`]
    #[error("buffer length error: {0}")]
    Length(#[from] LengthError),

    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),
}

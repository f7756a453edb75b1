#![allow(non_upper_case_globals)]

//! Physical constants and the parameters fixing a single simulation run.
//!
//! Concrete physical constants are taken from NIST; all quantities are in
//! meters/kilograms/seconds (MKS) units.
//!
//! [`Params`] can be deserialized from TOML, with every missing field taking
//! its default value:
//! ```
//! use snewton::{ field::Boundary, params::Params };
//!
//! let params = Params::from_toml_str(r#"
//!     dt = 5.0
//!     boundary = "mirror"
//! "#).unwrap();
//! assert_eq!(params.dt, 5.0);
//! assert_eq!(params.boundary, Boundary::Mirror);
//! assert_eq!(params.area, 1.0);
//! ```

use std::{ f64::consts::{ PI, TAU }, path::Path };
use serde::{ Deserialize, Serialize };
use crate::{
    error::ParamError,
    field::Boundary,
    DEF_EPSILON,
    DEF_MAXITERS,
};

pub type ParamResult<T> = Result<T, ParamError>;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;
//             +/- 0.00015e-11

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// Parameters for a single run; fixed once a [`Wave`][crate::wave::Wave] is
/// constructed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Planck constant (kg m^2 s^-1).
    pub h: f64,
    /// Gravitational constant (m^3 kg^-1 s^-2); zero disables self-gravity.
    pub G: f64,
    /// Particle mass (kg).
    pub m: f64,
    /// Total area covered by the grid (m^2).
    pub area: f64,
    /// Time step (s).
    pub dt: f64,
    /// Cap on the wavefunction amplitude applied by
    /// [`Wave::normalize`][crate::wave::Wave::normalize] (m^-1).
    pub max_abs: f64,
    /// Display multiplier for the potential (J^-1).
    pub potential_unit: f64,
    /// Boundary condition for every grid.
    pub boundary: Boundary,
    /// Relative tolerance of the Poisson relaxation.
    pub epsilon: f64,
    /// Maximum number of Poisson relaxation sweeps per solve.
    pub maxiters: usize,
}

impl Default for Params {
    fn default() -> Self {
        let area = 1.0;
        Self {
            h,
            G,
            m: 1000.0 * me,
            area,
            dt: 10.0,
            max_abs: 6.0 / area,
            potential_unit: 1e35,
            boundary: Boundary::Wrap,
            epsilon: DEF_EPSILON,
            maxiters: DEF_MAXITERS,
        }
    }
}

impl Params {
    /// Check that all values are usable.
    pub fn check(&self) -> ParamResult<()> {
        ParamError::check_positive("h", self.h)?;
        ParamError::check_nonnegative("G", self.G)?;
        ParamError::check_positive("m", self.m)?;
        ParamError::check_positive("area", self.area)?;
        ParamError::check_positive("dt", self.dt)?;
        ParamError::check_positive("max_abs", self.max_abs)?;
        ParamError::check_positive("potential_unit", self.potential_unit)?;
        ParamError::check_epsilon(self.epsilon)?;
        ParamError::check_maxiters(self.maxiters)?;
        Ok(())
    }

    /// Parse from a TOML string and [check][Self::check] the result.
    pub fn from_toml_str(s: &str) -> ParamResult<Self> {
        let params: Self = toml::from_str(s)?;
        params.check()?;
        Ok(params)
    }

    /// Read from a TOML file and [check][Self::check] the result.
    pub fn read_toml<P>(path: P) -> ParamResult<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let contents
            = std::fs::read_to_string(path)
            .map_err(|source| {
                ParamError::Read { path: path.display().to_string(), source }
            })?;
        Self::from_toml_str(&contents)
    }

    /// Compute derived constants for a `width`×`height` grid.
    pub fn consts(&self, width: usize, height: usize) -> Consts {
        let dr = (self.area / (width * height) as f64).sqrt();
        Consts {
            dr,
            qdrdr: dr.powi(2).recip(),
            sarea: self.area.sqrt(),
            hm: self.h / (TAU * self.m),
            qh: TAU / self.h,
            source: 4.0 * PI * self.G * self.m,
        }
    }
}

/// Constants derived from [`Params`] and the grid size, computed once per
/// [`Wave`][crate::wave::Wave].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Consts {
    /// Cell size (m).
    pub dr: f64,
    /// 1 / dr².
    pub qdrdr: f64,
    /// √area.
    pub sarea: f64,
    /// Factor on the Laplacian in the time derivative, h / 2π m.
    pub hm: f64,
    /// Factor on the potential in the time derivative, 2π / h.
    pub qh: f64,
    /// Factor relating |ψ| to the Laplacian of the potential, 4π G m.
    pub source: f64,
}

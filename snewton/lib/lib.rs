#![allow(dead_code, non_snake_case)]

//! Provides the numerical engine for the two-dimensional Schrödinger-Newton
//! equation: the time-dependent Schrödinger equation for a single particle
//! moving in a static potential plus the Newtonian gravitational potential
//! sourced by its own wavefunction.
//!
//! Provides implementations for the following numerical routines:
//! - Bordered grids with wrapping, mirroring, or zero boundary conditions
//!   ([`field`])
//! - Nine-point finite-difference Laplacian and fourth-order Runge-Kutta
//!   stepping ([`timedep`])
//! - Poisson equation solution via Jacobi relaxation ([`poisson`])
//! - Amplitude clamping and renormalization ([`utils`])
//!
//! all tied together by [`wave::Wave`]. See [`docs`] for theoretical
//! background.

pub mod error;
pub mod field;
pub mod params;
pub mod poisson;
pub mod timedep;
pub mod utils;
pub mod wave;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-4;
pub(crate) const DEF_MAXITERS: usize = 100_000;

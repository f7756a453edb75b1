//! Provides functions to advance a solution to the 2+1-dimensional
//! (time-dependent) Schrödinger equation (TDSE) by a single fourth-order
//! Runge-Kutta step in a time-independent potential.
//!
//! All spatial derivatives are finite differences read through the borders of
//! [`Field`]s, so every field passed to these functions must have a border of
//! at least 1 that has been [filled][Field::fill_border].

use std::{ f64::consts::FRAC_1_SQRT_2, ops::{ Add, Mul, Sub } };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    field::{ Cell, Field },
    params::Consts,
};

/// Evaluate the discrete Laplacian of `f` at `(x, y)` using a nine-point
/// stencil.
///
/// The axial and diagonal five-point sums are averaged, the latter weighted by
/// 1/√2. `qdrdr` is 1/dr².
#[inline]
pub fn laplacian<T>(f: &Field<T>, x: isize, y: isize, qdrdr: f64) -> T
where T: Cell + Add<T, Output = T> + Sub<T, Output = T> + Mul<f64, Output = T>
{
    let w4 = f.get(x, y) * 4.0;
    let s
        = f.get(x + 1, y) + f.get(x - 1, y)
        + f.get(x, y - 1) + f.get(x, y + 1) - w4;
    let sdiag
        = f.get(x + 1, y + 1) + f.get(x + 1, y - 1)
        + f.get(x - 1, y + 1) + f.get(x - 1, y - 1) - w4;
    (s + sdiag * FRAC_1_SQRT_2) * (0.5 * qdrdr)
}

/// Calculate the time derivative of ψ at a single point from the local value
/// of its Laplacian, the state, and the potential.
///
/// ```text
/// dψ/dt = -i (2π V ψ / h - h ∇²ψ / 2π m)
/// ```
#[inline]
pub fn rhs(consts: &Consts, lap: C64, q: C64, v: f64) -> C64 {
    -C64::i() * (consts.qh * v * q - consts.hm * lap)
}

// evaluate the RHS of the TDSE on the perturbed state `q + factor * k_old`,
// writing the result into `k_new`
//
// the Laplacian is linear, so it's taken on `q` and `k_old` separately
fn rk4_stage(
    consts: &Consts,
    V: &Field<f64>,
    U: &Field<f64>,
    q: &Field<C64>,
    k_old: &Field<C64>,
    factor: f64,
    k_new: &mut Field<C64>,
) {
    let w = q.width() as isize;
    let h = q.height() as isize;
    for y in 0..h {
        for x in 0..w {
            let lap
                = laplacian(q, x, y, consts.qdrdr)
                + factor * laplacian(k_old, x, y, consts.qdrdr);
            let qxy = q.get(x, y) + factor * k_old.get(x, y);
            let vxy = V.get(x, y) + U.get(x, y);
            k_new.set(x, y, rhs(consts, lap, qxy, vxy));
        }
    }
    k_new.fill_border();
}

/// Take a single RK4 step of size `dt` *in place*.
///
/// The potential is the sum of `V` and `U`, held constant over the step. `k`
/// is scratch space for the four stage derivatives, which must all have the
/// same shape as `q`. The border of `q` is refilled afterward.
pub fn rk4_step(
    consts: &Consts,
    V: &Field<f64>,
    U: &Field<f64>,
    q: &mut Field<C64>,
    k: &mut [Field<C64>; 4],
    dt: f64,
) {
    let [k1, k2, k3, k4] = k;
    rk4_stage(consts, V, U, q, q, 0.0, k1);
    rk4_stage(consts, V, U, q, k1, 0.5 * dt, k2);
    rk4_stage(consts, V, U, q, k2, 0.5 * dt, k3);
    rk4_stage(consts, V, U, q, k3, dt, k4);
    nd::Zip::from(q.main_mut())
        .and(k1.main()).and(k2.main()).and(k3.main()).and(k4.main())
        .for_each(|qk, k1k, k2k, k3k, k4k| {
            *qk += dt / 6.0 * (k1k + 2.0 * (k2k + k3k) + k4k);
        });
    q.fill_border();
}

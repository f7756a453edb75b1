//! Solution of the two-dimensional Poisson equation by Jacobi relaxation.
//!
//! Given the Laplacian ρ of a potential, each sweep replaces every cell by
//! ```text
//! V'[x, y] = (V[x - 1, y] + V[x + 1, y] + V[x, y - 1] + V[x, y + 1] - ρ[x, y] δr²) / 4
//! ```
//! until the squared change over a sweep falls below a fraction `epsilon` of
//! the squared magnitude of the new iterate. The potential is only determined
//! up to a constant, which is fixed afterward by shifting it to zero mean.

use log::{ debug, trace, warn };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::field::Field;

/// Outcome of a single call to [`relax`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Relaxation {
    /// Number of sweeps performed.
    pub iters: usize,
    /// `false` if the iteration cap was reached first; the potential then
    /// holds the last (gauge-fixed) iterate.
    pub converged: bool,
    /// Squared change over the final sweep relative to the squared magnitude
    /// of the final iterate.
    pub residual: f64,
}

/// Write the Laplacian of the gravitational potential sourced by `q` into
/// `lap_v` and refresh its border.
///
/// The source is `factor * |q|` (see [`Consts::source`]).
///
/// [`Consts::source`]: crate::params::Consts::source
pub fn source(q: &Field<C64>, factor: f64, lap_v: &mut Field<f64>) {
    nd::Zip::from(lap_v.main_mut()).and(q.main())
        .for_each(|lk, qk| { *lk = factor * qk.norm(); });
    lap_v.fill_border();
}

/// Relax `V` toward a solution of ∇²V = `lap_v` and shift it to zero mean.
///
/// `V` is used as the initial guess; `tmp` is scratch space of the same shape.
/// At most `maxiters` sweeps are performed.
pub fn relax(
    V: &mut Field<f64>,
    tmp: &mut Field<f64>,
    lap_v: &Field<f64>,
    dr: f64,
    epsilon: f64,
    maxiters: usize,
) -> Relaxation
{
    let w = V.width() as isize;
    let h = V.height() as isize;
    let drdr = dr.powi(2);
    let mut sqrerr: f64;
    let mut norm: f64;
    let mut res = Relaxation { iters: 0, converged: false, residual: 0.0 };
    while res.iters < maxiters {
        sqrerr = 0.0;
        norm = 0.0;
        for y in 0..h {
            for x in 0..w {
                let new = 0.25 * (
                    V.get(x - 1, y) + V.get(x + 1, y)
                    + V.get(x, y - 1) + V.get(x, y + 1)
                    - lap_v.get(x, y) * drdr
                );
                let old = V.get(x, y);
                tmp.set(x, y, new);
                norm += new * new;
                sqrerr += (old - new) * (old - new);
            }
        }
        tmp.fill_border();
        V.assign(tmp);
        res.iters += 1;
        res.residual = if norm > 0.0 { sqrerr / norm } else { sqrerr };
        trace!("poisson sweep {}: residual {:.3e}", res.iters, res.residual);
        if sqrerr <= norm * epsilon {
            res.converged = true;
            break;
        }
    }
    if res.converged {
        debug!("poisson: converged after {} sweeps", res.iters);
    } else {
        warn!(
            "poisson: no convergence after {} sweeps (residual {:.3e}); \
            keeping last iterate",
            res.iters, res.residual,
        );
    }
    V.add(-V.sum() / (w * h) as f64);
    res
}

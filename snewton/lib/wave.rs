//! The wavefunction of a single, non-relativistic particle moving in a static
//! potential and the Newtonian gravitational potential of its own density.
//!
//! A [`Wave`] owns every grid needed for a run. A host typically calls
//! [`Wave::normalize`], then [`Wave::evolve`] some number of times, then
//! [`Wave::draw`], forwarding user perturbations to [`Wave::add_bump`] and
//! [`Wave::add_potential_bump`] in between.
//!
//! ```
//! use num_complex::Complex64 as C64;
//! use snewton::wave::Wave;
//!
//! let mut wave = Wave::new(32, 16).unwrap();
//! wave.add_bump(8, 8, C64::new(0.6, 0.0), 6);
//! wave.normalize();
//! let relaxation = wave.evolve();
//! assert!(relaxation.converged);
//! assert!((wave.norm() - 1.0).abs() < 1e-2);
//!
//! let mut pixels = vec![0_u32; 32 * 16];
//! wave.draw(&mut pixels, |q, _| (q.norm() * 100.0) as u32).unwrap();
//! ```

use std::f64::consts::TAU;
use log::{ debug, warn };
use num_complex::Complex64 as C64;
use crate::{
    error::{ LengthError, WaveError },
    field::Field,
    params::{ Consts, Params },
    poisson::{ self, Relaxation },
    timedep,
    utils::{ cone, wf_clamp, wf_norm, wf_renormalize },
};

pub type WaveResult<T> = Result<T, WaveError>;

/// Width of the border on every grid; the radius of the stencils.
const BORDER: usize = 1;

// visit every cell of a cone of radius `size` around `(x, y)`, wrapped
// toroidally onto a `width`×`height` grid regardless of boundary conditions
fn for_cone<F>(width: usize, height: usize, x: isize, y: isize, size: usize, mut f: F)
where F: FnMut(isize, isize, f64)
{
    let w = width as isize;
    let h = height as isize;
    let s = size as isize;
    for dy in -s..=s {
        for dx in -s..=s {
            if let Some(weight) = cone(dx, dy, size) {
                f((x + dx).rem_euclid(w), (y + dy).rem_euclid(h), weight);
            }
        }
    }
}

/// A wavefunction on a `width`×`height` grid together with its potentials.
#[derive(Clone, Debug)]
pub struct Wave {
    width: usize,
    height: usize,
    params: Params,
    consts: Consts,
    psi: Field<C64>,
    // static potential; only ever raised
    potential: Field<f64>,
    // gravitational potential; gauge-fixed to zero mean
    dyn_potential: Field<f64>,
    // scratch
    tmp_potential: Field<f64>,
    lap_v: Field<f64>,
    k: [Field<C64>; 4],
}

impl Wave {
    /// Create a new wave with [default parameters][Params::default].
    ///
    /// See [`Self::with_params`].
    pub fn new(width: usize, height: usize) -> WaveResult<Self> {
        Self::with_params(width, height, Params::default())
    }

    /// Create a new wave, initialized to a plane wave of unit amplitude whose
    /// phase winds once across the width of the grid.
    ///
    /// Fails if either extent is zero or the parameters do not
    /// [check][Params::check].
    pub fn with_params(width: usize, height: usize, params: Params)
        -> WaveResult<Self>
    {
        params.check()?;
        let boundary = params.boundary;
        let complex = || Field::<C64>::new(width, height, BORDER, boundary);
        let real = || Field::<f64>::new(width, height, BORDER, boundary);
        let mut psi = complex()?;
        for y in 0..height {
            for x in 0..width {
                let phase = TAU * x as f64 / width as f64;
                psi.set(x as isize, y as isize, C64::from_polar(1.0, phase));
            }
        }
        psi.fill_border();
        let mut potential = real()?;
        potential.fill_border();
        Ok(Self {
            width,
            height,
            params,
            consts: params.consts(width, height),
            psi,
            potential,
            dyn_potential: real()?,
            tmp_potential: real()?,
            lap_v: real()?,
            k: [complex()?, complex()?, complex()?, complex()?],
        })
    }

    /// Width of the grid.
    pub fn width(&self) -> usize { self.width }

    /// Height of the grid.
    pub fn height(&self) -> usize { self.height }

    pub fn params(&self) -> &Params { &self.params }

    pub fn consts(&self) -> &Consts { &self.consts }

    /// The wavefunction.
    pub fn psi(&self) -> &Field<C64> { &self.psi }

    /// Mutable access to the wavefunction, e.g. to load a prepared state.
    ///
    /// Call [`Field::fill_border`] after writing to it.
    pub fn psi_mut(&mut self) -> &mut Field<C64> { &mut self.psi }

    /// The static potential.
    pub fn potential(&self) -> &Field<f64> { &self.potential }

    /// The gravitational potential as of the last call to
    /// [`Self::relax_potential`] or [`Self::evolve`].
    pub fn dyn_potential(&self) -> &Field<f64> { &self.dyn_potential }

    /// Total probability, Σ |ψ|² δr².
    pub fn norm(&self) -> f64 { wf_norm(&self.psi, self.consts.dr) }

    /// Recompute the gravitational potential from the current wavefunction.
    ///
    /// The previous potential is used as the initial guess.
    pub fn relax_potential(&mut self) -> Relaxation {
        poisson::source(&self.psi, self.consts.source, &mut self.lap_v);
        poisson::relax(
            &mut self.dyn_potential,
            &mut self.tmp_potential,
            &self.lap_v,
            self.consts.dr,
            self.params.epsilon,
            self.params.maxiters,
        )
    }

    /// Advance by a single time step.
    ///
    /// The gravitational potential is relaxed first and then held fixed over
    /// a fourth-order Runge-Kutta step. If the relaxation hits its iteration
    /// cap, the step still proceeds with the last iterate and the returned
    /// [`Relaxation`] is marked as not converged.
    pub fn evolve(&mut self) -> Relaxation {
        let relaxation = self.relax_potential();
        if !relaxation.converged {
            warn!("evolve: stepping with an unconverged potential");
        }
        timedep::rk4_step(
            &self.consts,
            &self.potential,
            &self.dyn_potential,
            &mut self.psi,
            &mut self.k,
            self.params.dt,
        );
        relaxation
    }

    /// Clamp the amplitude of every cell to at most
    /// [`max_abs`][Params::max_abs] and rescale the wavefunction to unit norm.
    ///
    /// Returns the factor the (clamped) wavefunction was divided by, or `None`
    /// if its norm is zero, in which case no rescaling is done.
    pub fn normalize(&mut self) -> Option<f64> {
        let clamped = wf_clamp(&mut self.psi, self.params.max_abs);
        if clamped > 0 {
            debug!("normalize: clamped {} cells", clamped);
        }
        let a = wf_renormalize(&mut self.psi, self.consts.dr);
        match a {
            Some(a) => debug!("normalize: divided by {:.6e}", a),
            None => warn!("normalize: wavefunction has zero norm"),
        }
        a
    }

    /// Add `c` times a cone-shaped bump of radius `size` centered on `(x, y)`
    /// to the wavefunction.
    ///
    /// The amplitude is scaled by 1/√area. Coordinates wrap around the edges
    /// of the grid.
    pub fn add_bump(&mut self, x: isize, y: isize, c: C64, size: usize) {
        let c = c / self.consts.sarea;
        let psi = &mut self.psi;
        for_cone(self.width, self.height, x, y, size, |mx, my, weight| {
            let old = psi.get(mx, my);
            psi.set(mx, my, old + c * weight);
        });
        psi.fill_border();
    }

    /// Raise the static potential to at least `c` times a cone-shaped bump of
    /// radius `size` centered on `(x, y)`.
    ///
    /// `c` is given in display units (see [`Self::draw`]). Bumps combine by
    /// pointwise maximum, so repeated bumps form plateaus rather than
    /// accumulating. Coordinates wrap around the edges of the grid.
    pub fn add_potential_bump(&mut self, x: isize, y: isize, c: f64, size: usize) {
        let Params { potential_unit, area, dt, .. } = self.params;
        let c = c / (potential_unit * area * dt);
        let potential = &mut self.potential;
        for_cone(self.width, self.height, x, y, size, |mx, my, weight| {
            let old = potential.get(mx, my);
            potential.set(mx, my, old.max(c * weight));
        });
        potential.fill_border();
    }

    /// Fill `pixels` with one color per cell in row-major order, i.e. the cell
    /// `(x, y)` goes to `pixels[x + width * y]`.
    ///
    /// `color` receives the wavefunction scaled by √area and the total
    /// potential scaled by `potential_unit * √area * dt`.
    ///
    /// Fails if `pixels` does not have exactly `width * height` elements.
    pub fn draw<F>(&self, pixels: &mut [u32], color: F) -> WaveResult<()>
    where F: Fn(C64, f64) -> u32
    {
        LengthError::check(self.width * self.height, pixels)?;
        let sarea = self.consts.sarea;
        let vscale = self.params.potential_unit * sarea * self.params.dt;
        let psi = self.psi.main();
        let pot = self.potential.main();
        let dyn_pot = self.dyn_potential.main();
        pixels.chunks_exact_mut(self.width)
            .zip(psi.rows()).zip(pot.rows()).zip(dyn_pot.rows())
            .for_each(|(((row, q), v), u)| {
                row.iter_mut().zip(q).zip(v).zip(u)
                    .for_each(|(((px, qk), vk), uk)| {
                        *px = color(qk * sarea, vscale * (vk + uk));
                    });
            });
        Ok(())
    }
}

//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Discretization](#discretization)
//! - [Gravitational potential](#gravitational-potential)
//! - [Time dependence](#time-dependence)
//! - [Normalization](#normalization)
//!
//! # Background
//! The Schrödinger-Newton equation describes a single quantum particle of mass
//! *m* whose wavefunction generates a Newtonian gravitational potential that
//! acts back on the particle itself. Together with an externally prescribed
//! (static) potential *V*<sub>s</sub>, this gives the coupled system
//! ```text
//!   ∂ψ      ħ²
//! i ħ -- = - --- ∇²ψ + (V_s + V_g) ψ
//!   ∂t      2 m
//!
//! ∇²V_g = 4π G m ρ
//! ```
//! where *ρ* is built from the wavefunction. The second equation is a Poisson
//! equation, which fixes *V*<sub>g</sub> only up to an additive constant; this
//! crate chooses the constant so that *V*<sub>g</sub> has zero mean over the
//! grid.
//!
//! Note that [`poisson::source`][crate::poisson::source] uses *ρ* = |*ψ*| rather
//! than the probability density |*ψ*|², which changes the dynamics but not
//! the structure of the scheme.
//!
//! # Units
//! Unlike many solvers, no natural units are introduced: all quantities are in
//! meters/kilograms/seconds, and the equation is written in terms of *h*
//! rather than *ħ*,
//! ```text
//! ∂ψ        ( 2π                 h        )
//! -- = -i   ( -- (V_s + V_g) ψ - ---- ∇²ψ )
//! ∂t        ( h                  2π m     )
//! ```
//! The factors 2π/*h*, *h*/2π *m*, and 4π *G* *m*, along with the cell size,
//! are computed once per run as [`Consts`][crate::params::Consts]. The default
//! [`Params`][crate::params::Params] describe a square meter populated by a
//! particle of 1000 electron masses, evolved in steps of 10 seconds.
//!
//! # Discretization
//! The plane is covered by a *W*×*H* grid of square cells of side
//! ```text
//! δr = √(area / (W H))
//! ```
//! Each field is stored in a [`Field`][crate::field::Field] whose border (of
//! width 1, the radius of the stencils below) holds copies of cells dictated
//! by the boundary condition. For the wavefunction, the Laplacian is
//! approximated by the nine-point stencil
//! ```text
//! s     = f[x + 1, y] + f[x - 1, y] + f[x, y + 1] + f[x, y - 1] - 4 f[x, y]
//! s_d   = f[x + 1, y + 1] + f[x + 1, y - 1] + f[x - 1, y + 1] + f[x - 1, y - 1] - 4 f[x, y]
//! ∇²f ≈ (s + s_d / √2) / 2 δr²
//! ```
//!
//! # Gravitational potential
//! The Poisson equation is solved by Jacobi relaxation using the five-point
//! stencil,
//! ```text
//!            1
//! V'[x, y] = - (V[x - 1, y] + V[x + 1, y] + V[x, y - 1] + V[x, y + 1] - δr² ∇²V[x, y])
//!            4
//! ```
//! which is iterated until the squared change over a sweep is at most
//! `epsilon` (10⁻⁴ by default) times the squared magnitude of the new iterate.
//! Each solve starts from the previous step's potential. With periodic
//! boundaries and a source of non-zero mean, the iterates drift by a constant
//! each sweep; the relative criterion is eventually met regardless and the
//! drift is removed by the zero-mean gauge. The number of sweeps is capped by
//! `maxiters`.
//!
//! # Time dependence
//! With *V*<sub>g</sub> held fixed over a step *dt*, the wavefunction is
//! advanced with the classical fourth-order Runge-Kutta scheme. Writing the
//! right-hand side above as *F*\[*ψ*\],
//! ```text
//! k₁ = F[ψ]
//! k₂ = F[ψ + k₁ dt/2]
//! k₃ = F[ψ + k₂ dt/2]
//! k₄ = F[ψ + k₃ dt]
//!
//! ψ(t + dt) = ψ(t) + (k₁ + 2 k₂ + 2 k₃ + k₄) dt / 6
//! ```
//! *F* is linear, so ∇²(*ψ* + *c* *k*) is evaluated as ∇²*ψ* + *c* ∇²*k*,
//! which requires the border of each *k* to be refilled before it is used.
//! The scheme is not exactly unitary; for a plane wave with wavenumber
//! *κ* the norm changes per step by a factor of roughly
//! 1 - (*ω* *dt*)⁶/72, where *ω* ~ *h* *κ*² / 2π *m*.
//!
//! # Normalization
//! Normalization first clamps the magnitude of every cell to at most
//! `max_abs`, preserving its phase, and then divides the whole wavefunction by
//! ```text
//! a = δr √(Σ |ψ[x, y]|²)
//! ```
//! so that Σ |*ψ*|² *δr*² = 1. A wavefunction that is zero everywhere is left
//! untouched.

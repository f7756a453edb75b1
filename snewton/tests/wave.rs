use std::f64::consts::TAU;
use num_complex::Complex64 as C64;
use snewton::{
    error::{ GridError, LengthError, ParamError, WaveError },
    field::Boundary,
    params::Params,
    wave::Wave,
};

fn cells(wave: &Wave) -> Vec<C64> {
    wave.psi().main().iter().cloned().collect()
}

// plane wave plus a smooth-ish blob, normalized
fn blob(width: usize, height: usize, params: Params) -> Wave {
    let mut wave = Wave::with_params(width, height, params).unwrap();
    wave.add_bump(
        width as isize / 3, height as isize / 2, C64::new(2.0, 1.0), 5);
    wave.normalize();
    wave
}

#[test]
fn bad_construction() {
    assert!(matches!(
        Wave::new(0, 4),
        Err(WaveError::Grid(GridError::BadSize { width: 0, height: 4 })),
    ));
    assert!(matches!(
        Wave::new(4, 0),
        Err(WaveError::Grid(GridError::BadSize { .. })),
    ));
    let params = Params { dt: -1.0, ..Params::default() };
    assert!(matches!(
        Wave::with_params(4, 4, params),
        Err(WaveError::Param(ParamError::NonPositive("dt", _))),
    ));
    assert!(Wave::new(1, 1).is_ok());
}

#[test]
fn initial_plane_wave() {
    let wave = Wave::new(8, 3).unwrap();
    for y in 0..3_isize {
        for x in 0..8_isize {
            let expected = C64::from_polar(1.0, TAU * x as f64 / 8.0);
            assert!((wave.psi().get(x, y) - expected).norm() < 1e-12);
        }
    }
    // border is already filled
    assert!((wave.psi().get(-1, 0) - wave.psi().get(7, 0)).norm() < 1e-12);
    assert!((wave.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn normalize_to_unit_norm() {
    let params = Params { area: 3.0, ..Params::default() };
    let mut wave = Wave::with_params(12, 10, params).unwrap();
    wave.add_bump(4, 4, C64::new(1.5, -0.5), 3);
    assert!((wave.norm() - 1.0).abs() > 1e-3);
    let a = wave.normalize().unwrap();
    assert!(a > 0.0);
    assert!((wave.norm() - 1.0).abs() < 1e-6);
}

#[test]
fn normalize_zero_is_skipped() {
    let mut wave = Wave::new(6, 4).unwrap();
    wave.psi_mut().zero();
    assert!(wave.normalize().is_none());
    assert!(cells(&wave).iter().all(|q| *q == C64::new(0.0, 0.0)));
    assert_eq!(wave.norm(), 0.0);
}

#[test]
fn normalize_clamps_first() {
    let params = Params { max_abs: 6.0, ..Params::default() };
    let mut wave = Wave::with_params(6, 4, params).unwrap();
    wave.psi_mut().set(2, 1, C64::new(0.0, 100.0));
    wave.normalize();
    let big = wave.psi().get(2, 1);
    let small = wave.psi().get(3, 1);
    assert!((big.norm() / small.norm() - 6.0).abs() < 1e-9);
    assert!((big.arg() - TAU / 4.0).abs() < 1e-12);
    assert!((wave.norm() - 1.0).abs() < 1e-9);
}

#[test]
fn evolve_conserves_probability() {
    for boundary in [Boundary::Wrap, Boundary::Mirror, Boundary::Zero] {
        let params = Params { boundary, ..Params::default() };
        let mut wave = blob(32, 16, params);
        let before = wave.norm();
        let relaxation = wave.evolve();
        assert!(relaxation.converged);
        let after = wave.norm();
        assert!(((after - before) / before).abs() < 1e-2);
        assert!(cells(&wave).iter().all(|q| q.is_finite()));
    }
}

#[test]
fn evolve_changes_state() {
    let mut wave = blob(16, 16, Params::default());
    let before = cells(&wave);
    for _ in 0..3 {
        wave.evolve();
    }
    let diff: f64
        = before.iter().zip(cells(&wave))
        .map(|(b, a)| (a - b).norm())
        .sum();
    assert!(diff > 0.0);
}

#[test]
fn dynamic_potential_has_zero_mean() {
    let mut wave = blob(24, 12, Params::default());
    let relaxation = wave.relax_potential();
    assert!(relaxation.converged);
    let scale: f64 = wave.dyn_potential().main().iter().map(|v| v.abs()).sum();
    assert!(scale > 0.0);
    assert!(wave.dyn_potential().sum().abs() <= 1e-9 * scale);
    // the well sits on the bump
    assert!(wave.dyn_potential().get(8, 6) < 0.0);
    assert!(wave.dyn_potential().get(8, 6) < wave.dyn_potential().get(20, 0));
    wave.evolve();
    let scale: f64 = wave.dyn_potential().main().iter().map(|v| v.abs()).sum();
    assert!(wave.dyn_potential().sum().abs() <= 1e-9 * scale);
}

#[test]
fn unconverged_potential_still_steps() {
    let params = Params { maxiters: 1, ..Params::default() };
    let mut wave = blob(16, 8, params);
    let before = cells(&wave);
    let relaxation = wave.evolve();
    assert!(!relaxation.converged);
    assert_eq!(relaxation.iters, 1);
    assert!(cells(&wave).iter().zip(&before).any(|(a, b)| a != b));
    assert!(cells(&wave).iter().all(|q| q.is_finite()));
}

#[test]
fn point_bump() {
    let params = Params { area: 4.0, ..Params::default() };
    let mut wave = Wave::with_params(7, 5, params).unwrap();
    let before = cells(&wave);
    wave.add_bump(2, 3, C64::new(1.0, 1.0), 0);
    let after = cells(&wave);
    for (k, (b, a)) in before.iter().zip(&after).enumerate() {
        if k == 2 + 7 * 3 {
            assert!((a - b - C64::new(0.5, 0.5)).norm() < 1e-12);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn bump_wraps() {
    let mut wave = Wave::new(8, 6).unwrap();
    wave.psi_mut().zero();
    wave.add_bump(0, 0, C64::new(3.0, 0.0), 3);
    let psi = wave.psi();
    assert!((psi.get(0, 0).re - 3.0).abs() < 1e-12);
    assert!((psi.get(7, 0).re - 2.0).abs() < 1e-12);
    assert!((psi.get(0, 5).re - 2.0).abs() < 1e-12);
    assert!((psi.get(0, 3).re).abs() < 1e-12);
    // the border is refreshed
    assert_eq!(psi.get(-1, 0), psi.get(7, 0));
}

#[test]
fn bump_wraps_under_zero_boundary() {
    let params = Params { boundary: Boundary::Zero, ..Params::default() };
    let mut wave = Wave::with_params(8, 6, params).unwrap();
    wave.psi_mut().zero();
    wave.add_bump(7, 5, C64::new(3.0, 0.0), 2);
    let psi = wave.psi();
    assert!((psi.get(0, 5).re - 1.5).abs() < 1e-12);
    assert!((psi.get(7, 0).re - 1.5).abs() < 1e-12);
    assert_eq!(psi.get(8, 5), C64::new(0.0, 0.0));
}

#[test]
fn potential_bumps_take_maximum() {
    let mut wave = Wave::new(10, 10).unwrap();
    let params = *wave.params();
    let unit = params.potential_unit * params.area * params.dt;
    wave.add_potential_bump(5, 5, 0.5, 4);
    wave.add_potential_bump(5, 5, 0.2, 4);
    let pot = wave.potential();
    assert!((pot.get(5, 5) * unit - 0.5).abs() < 1e-12);
    assert!((pot.get(7, 5) * unit - 0.25).abs() < 1e-12);

    wave.add_potential_bump(5, 5, 0.3, 8);
    let pot = wave.potential();
    // 0.5 * (1 - 1/4) wins next to the center, 0.3 * (1 - 1/2) farther out
    assert!((pot.get(5, 5) * unit - 0.5).abs() < 1e-12);
    assert!((pot.get(6, 5) * unit - 0.375).abs() < 1e-12);
    assert!((pot.get(9, 5) * unit - 0.15).abs() < 1e-12);
}

#[test]
fn draw_layout() {
    let (w, h) = (5, 3);
    let mut wave = Wave::new(w, h).unwrap();
    for y in 0..h as isize {
        for x in 0..w as isize {
            wave.psi_mut().set(x, y, C64::new(x as f64, y as f64));
        }
    }
    wave.add_potential_bump(3, 1, 0.7, 0);
    let mut pixels = vec![0_u32; w * h];
    wave.draw(&mut pixels, |q, _| (100.0 * q.re + q.im).round() as u32)
        .unwrap();
    for y in 0..h {
        for x in 0..w {
            assert_eq!(pixels[x + w * y], (100 * x + y) as u32);
        }
    }
    wave.draw(&mut pixels, |_, p| (1000.0 * p).round() as u32).unwrap();
    assert_eq!(pixels[3 + w], 700);
    assert_eq!(pixels.iter().filter(|p| **p != 0).count(), 1);
}

#[test]
fn draw_buffer_length() {
    let wave = Wave::new(4, 4).unwrap();
    let mut pixels = vec![0_u32; 15];
    assert!(matches!(
        wave.draw(&mut pixels, |_, _| 0),
        Err(WaveError::Length(LengthError(16, 15))),
    ));
}

#[test]
fn evolve_without_gravity() {
    let params = Params { G: 0.0, ..Params::default() };
    let mut wave = blob(16, 8, params);
    for _ in 0..2 {
        let relaxation = wave.evolve();
        assert!(relaxation.converged);
        assert_eq!(relaxation.iters, 1);
    }
    assert!(wave.dyn_potential().main().iter().all(|v| *v == 0.0));
    assert!((wave.norm() - 1.0).abs() < 1e-2);
}

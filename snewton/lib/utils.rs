//! Miscellaneous tools.

use num_complex::Complex64 as C64;
use crate::field::Field;

/// Calculate the norm of a wavefunction, i.e. the sum of |ψ|² over the main
/// rectangle times the cell area `dr²`.
pub fn wf_norm(q: &Field<C64>, dr: f64) -> f64 {
    q.main().iter().map(|qk| qk.norm_sqr()).sum::<f64>() * dr.powi(2)
}

/// Scale down every cell whose magnitude exceeds `max_abs` to exactly
/// `max_abs`, preserving its phase.
///
/// Returns the number of cells that were clamped. The border is not updated.
pub fn wf_clamp(q: &mut Field<C64>, max_abs: f64) -> usize {
    let max_sqr = max_abs.powi(2);
    let mut clamped: usize = 0;
    q.main_mut().iter_mut()
        .for_each(|qk| {
            let nk = qk.norm_sqr();
            if nk > max_sqr {
                *qk *= max_abs / nk.sqrt();
                clamped += 1;
            }
        });
    clamped
}

/// Renormalize a wavefunction in place and refresh its border.
///
/// Returns the factor the wavefunction was divided by, or `None` if its norm
/// is zero, in which case it is left unchanged.
pub fn wf_renormalize(q: &mut Field<C64>, dr: f64) -> Option<f64> {
    let a = wf_norm(q, dr).sqrt();
    let res
        = if a > 0.0 {
            let qa = a.recip();
            q.main_mut().map_inplace(|qk| { *qk *= qa; });
            Some(a)
        } else {
            None
        };
    q.fill_border();
    res
}

/// Weight of a cone-shaped bump of radius `size` at the offset `(dx, dy)`
/// from its center, or `None` outside the cone.
///
/// The center always has weight 1, including for `size == 0`.
pub fn cone(dx: isize, dy: isize, size: usize) -> Option<f64> {
    let d2 = dx.pow(2) + dy.pow(2);
    let rr
        = if d2 == 0 { 0.0 } else { d2 as f64 / (size as f64).powi(2) };
    (rr < 1.0).then(|| 1.0 - rr.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Boundary;

    fn field(vals: &[C64]) -> Field<C64> {
        let mut q: Field<C64> = Field::new(2, 2, 1, Boundary::Wrap).unwrap();
        vals.iter().enumerate()
            .for_each(|(k, v)| q.set((k % 2) as isize, (k / 2) as isize, *v));
        q
    }

    #[test]
    fn norm_and_renormalize() {
        let mut q = field(&[C64::new(3.0, 0.0), C64::new(0.0, 4.0),
                            C64::new(0.0, 0.0), C64::new(0.0, 0.0)]);
        assert!((wf_norm(&q, 0.5) - 25.0 * 0.25).abs() < 1e-12);
        let a = wf_renormalize(&mut q, 0.5).unwrap();
        assert!((a - 2.5).abs() < 1e-12);
        assert!((wf_norm(&q, 0.5) - 1.0).abs() < 1e-12);
        assert!((q.get(2, 0) - C64::new(1.2, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn renormalize_zero() {
        let mut q = field(&[C64::new(0.0, 0.0); 4]);
        assert!(wf_renormalize(&mut q, 1.0).is_none());
        assert_eq!(q.sum(), C64::new(0.0, 0.0));
    }

    #[test]
    fn clamp_keeps_phase() {
        let mut q = field(&[C64::new(3.0, 4.0), C64::new(0.5, 0.0),
                            C64::new(0.0, 0.0), C64::new(0.0, -1.0)]);
        assert_eq!(wf_clamp(&mut q, 1.0), 1);
        let c = q.get(0, 0);
        assert!((c.norm() - 1.0).abs() < 1e-12);
        assert!((c.arg() - C64::new(3.0, 4.0).arg()).abs() < 1e-12);
        assert_eq!(q.get(1, 0), C64::new(0.5, 0.0));
        assert_eq!(q.get(1, 1), C64::new(0.0, -1.0));
    }

    #[test]
    fn cone_shape() {
        assert_eq!(cone(0, 0, 0), Some(1.0));
        assert_eq!(cone(1, 0, 0), None);
        assert_eq!(cone(0, 0, 4), Some(1.0));
        assert_eq!(cone(2, 0, 4), Some(0.5));
        assert_eq!(cone(0, -4, 4), None);
        assert_eq!(cone(3, 3, 4), None);
    }
}

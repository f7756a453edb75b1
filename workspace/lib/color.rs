//! Color maps taking a (scaled) wavefunction value and potential to a pixel
//! packed as `0x00RRGGBB`.

use std::f64::consts::PI;
use clap::ValueEnum;
use num_complex::Complex64 as C64;

/// Pack three channels in `[0, 1]` into `0x00RRGGBB`, saturating out-of-range
/// values.
pub fn rgb(r: f64, g: f64, b: f64) -> u32 {
    let channel = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u32;
    (channel(r) << 16) + (channel(g) << 8) + channel(b)
}

/// Pack a color given as hue (an angle in `[-π, π]`), saturation, and value.
///
/// A hue of 0 is cyan; ±π is red.
pub fn hsv(h: f64, s: f64, v: f64) -> u32 {
    if s == 0.0 { return rgb(v, v, v); }
    let h = h * 3.0 / PI + 3.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as i32 {
        0 => rgb(v, t, p),
        1 => rgb(q, v, p),
        2 => rgb(p, v, t),
        3 => rgb(p, q, v),
        4 => rgb(t, p, v),
        _ => rgb(v, p, q),
    }
}

/// Phase as hue; the potential washes out saturation and raises brightness.
pub fn phase_hsv(q: C64, pot: f64) -> u32 {
    hsv(q.arg(), (1.0 - pot).max(0.0), (0.5 * q.norm() + pot).min(1.0))
}

/// Real and imaginary parts as red and green; potential as blue.
pub fn re_im_rgb(q: C64, pot: f64) -> u32 {
    let q = 0.5 * q;
    rgb(q.re + 0.5, q.im + 0.5, pot.min(1.0))
}

/// Selects one of the color maps above from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMap {
    /// [`phase_hsv`]
    Phase,
    /// [`re_im_rgb`]
    ReIm,
}

impl ColorMap {
    pub fn func(self) -> fn(C64, f64) -> u32 {
        match self {
            Self::Phase => phase_hsv,
            Self::ReIm => re_im_rgb,
        }
    }
}

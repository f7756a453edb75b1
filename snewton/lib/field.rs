//! Rectangular grids framed by a border of cells derived from boundary
//! conditions.
//!
//! A [`Field`] stores a main rectangle of `width`×`height` cells inside a
//! frame extended by `border` cells on every side. After writing into the main
//! rectangle, [`Field::fill_border`] repopulates the frame so that
//! [`Field::get`] on any point within `border` cells of the main rectangle
//! returns the value implied by the field's [`Boundary`]. Stencil code can then
//! read neighbors without treating edge cells specially.
//!
//! ```
//! use snewton::field::{ Boundary, Field };
//!
//! let mut f: Field<i32> = Field::new(5, 10, 2, Boundary::Wrap).unwrap();
//! f.set(1, 9, 7);
//! f.fill_border();
//! assert_eq!(f.get(6, -1), 7);
//! assert_eq!(f.get(1, 9), 7);
//! assert_eq!(f.get(6, 9), 7);
//! assert_eq!(f.safe_get(-4, 19), 7);
//! ```

use std::ops::AddAssign;
use ndarray as nd;
use num_traits::Zero;
use serde::{ Deserialize, Serialize };
use crate::error::GridError;

pub type FieldResult<T> = Result<T, GridError>;

/// Element types storable in a [`Field`].
///
/// Automatically implemented for anything `Copy` with an additive identity.
pub trait Cell: Copy + Zero + AddAssign { }

impl<T> Cell for T where T: Copy + Zero + AddAssign { }

/// Policy for the values seen outside of the main rectangle.
///
/// Illustrated for a single row `3 4 5 6 7` and a border of 2:
/// ```text
/// Wrap:   6 7|3 4 5 6 7|3 4
/// Mirror: 4 3|3 4 5 6 7|7 6
/// Zero:   0 0|3 4 5 6 7|0 0
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Wrap toroidally.
    #[default]
    Wrap,
    /// Reflect across the edges.
    Mirror,
    /// Read as zero.
    Zero,
}

impl Boundary {
    /// Map a coordinate onto `0..n`, or `None` if it has no counterpart in the
    /// main rectangle.
    pub fn remap(self, a: isize, n: usize) -> Option<isize> {
        let n = n as isize;
        if (0..n).contains(&a) { return Some(a); }
        match self {
            Self::Wrap => Some(a.rem_euclid(n)),
            Self::Mirror => {
                let a = a.rem_euclid(2 * n);
                if a >= n { Some(2 * n - 1 - a) } else { Some(a) }
            },
            Self::Zero => None,
        }
    }
}

/// A rectangular grid of cells with a border of configurable width.
///
/// Cells of the main rectangle are authoritative; border cells are derived
/// and only consistent with the [`Boundary`] after a call to
/// [`Self::fill_border`]. Under [`Boundary::Zero`], the border is never
/// written after construction.
#[derive(Clone, Debug)]
pub struct Field<T> {
    width: usize,
    height: usize,
    border: usize,
    boundary: Boundary,
    // rows index y, columns index x
    frame: nd::Array2<T>,
}

impl<T> Field<T>
where T: Cell
{
    /// Create a new, zero-filled field.
    ///
    /// Fails if either extent is zero or, for [`Boundary::Wrap`] and
    /// [`Boundary::Mirror`], if the border is wider than either extent.
    pub fn new(width: usize, height: usize, border: usize, boundary: Boundary)
        -> FieldResult<Self>
    {
        GridError::check(width, height, border, boundary)?;
        let frame: nd::Array2<T>
            = nd::Array2::zeros((height + 2 * border, width + 2 * border));
        Ok(Self { width, height, border, boundary, frame })
    }

    /// Width of the main rectangle.
    pub fn width(&self) -> usize { self.width }

    /// Height of the main rectangle.
    pub fn height(&self) -> usize { self.height }

    /// Width of the border.
    pub fn border(&self) -> usize { self.border }

    /// Boundary condition.
    pub fn boundary(&self) -> Boundary { self.boundary }

    /// Position in the frame of the point `(x, y)`, measured relative to the
    /// first cell of the main rectangle.
    ///
    /// Only meaningful for points within `border` cells of the main rectangle.
    #[inline]
    pub fn frame_index(&self, x: isize, y: isize) -> [usize; 2] {
        let b = self.border as isize;
        debug_assert!(
            (-b..self.width as isize + b).contains(&x)
            && (-b..self.height as isize + b).contains(&y),
            "point ({x}, {y}) lies outside the frame",
        );
        [(y + b) as usize, (x + b) as usize]
    }

    /// Get the value at `(x, y)`, which must not be further than `border`
    /// cells from the main rectangle.
    ///
    /// *Panics if `(x, y)` lies outside the frame*.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> T {
        self.frame[self.frame_index(x, y)]
    }

    /// Set the value at `(x, y)` in the main rectangle.
    ///
    /// The border is not updated.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, val: T) {
        let idx = self.frame_index(x, y);
        self.frame[idx] = val;
    }

    fn remap(&self, x: isize, y: isize) -> Option<(isize, isize)> {
        let x = self.boundary.remap(x, self.width)?;
        let y = self.boundary.remap(y, self.height)?;
        Some((x, y))
    }

    /// Get the value at any point, falling back to the boundary condition for
    /// points outside the main rectangle.
    pub fn safe_get(&self, x: isize, y: isize) -> T {
        self.remap(x, y)
            .map(|(x, y)| self.get(x, y))
            .unwrap_or_else(T::zero)
    }

    /// Set the value at any point, folded into the main rectangle according to
    /// the boundary condition.
    ///
    /// Under [`Boundary::Zero`], writes outside the main rectangle are
    /// dropped.
    pub fn safe_set(&mut self, x: isize, y: isize, val: T) {
        if let Some((x, y)) = self.remap(x, y) {
            self.set(x, y, val);
        }
    }

    /// View of the main rectangle, indexed `[[y, x]]`.
    pub fn main(&self) -> nd::ArrayView2<'_, T> {
        let (w, h, b) = (self.width, self.height, self.border);
        self.frame.slice(nd::s![b..b + h, b..b + w])
    }

    /// Mutable view of the main rectangle, indexed `[[y, x]]`.
    ///
    /// The border is not updated.
    pub fn main_mut(&mut self) -> nd::ArrayViewMut2<'_, T> {
        let (w, h, b) = (self.width, self.height, self.border);
        self.frame.slice_mut(nd::s![b..b + h, b..b + w])
    }

    /// Repopulate the border from the main rectangle.
    pub fn fill_border(&mut self) {
        match self.boundary {
            Boundary::Wrap => self.wrap(),
            Boundary::Mirror => self.mirror(),
            Boundary::Zero => { },
        }
    }

    // side strips first (main rows only), then full-width rows so that the
    // corners pick up the already wrapped side strips
    fn wrap(&mut self) {
        let (w, h, b) = (self.width, self.height, self.border);
        if b == 0 { return; }
        let (mut left, src)
            = self.frame.multi_slice_mut((
                nd::s![b..b + h, 0..b],
                nd::s![b..b + h, w..w + b],
            ));
        left.assign(&src);
        let (mut right, src)
            = self.frame.multi_slice_mut((
                nd::s![b..b + h, w + b..w + 2 * b],
                nd::s![b..b + h, b..2 * b],
            ));
        right.assign(&src);
        let (mut top, src)
            = self.frame.multi_slice_mut((
                nd::s![0..b, ..],
                nd::s![h..h + b, ..],
            ));
        top.assign(&src);
        let (mut bottom, src)
            = self.frame.multi_slice_mut((
                nd::s![h + b..h + 2 * b, ..],
                nd::s![b..2 * b, ..],
            ));
        bottom.assign(&src);
    }

    // the cell i + 1 outside an edge takes the value of the cell i inside it
    fn mirror(&mut self) {
        let (w, h, b) = (self.width, self.height, self.border);
        for i in 0..b {
            let (mut left, src)
                = self.frame.multi_slice_mut((
                    nd::s![b..b + h, b - 1 - i],
                    nd::s![b..b + h, b + i],
                ));
            left.assign(&src);
            let (mut right, src)
                = self.frame.multi_slice_mut((
                    nd::s![b..b + h, w + b + i],
                    nd::s![b..b + h, w + b - 1 - i],
                ));
            right.assign(&src);
        }
        for i in 0..b {
            let (mut top, src)
                = self.frame.multi_slice_mut((
                    nd::s![b - 1 - i, ..],
                    nd::s![b + i, ..],
                ));
            top.assign(&src);
            let (mut bottom, src)
                = self.frame.multi_slice_mut((
                    nd::s![h + b + i, ..],
                    nd::s![h + b - 1 - i, ..],
                ));
            bottom.assign(&src);
        }
    }

    /// Set every cell, including the border, to zero.
    pub fn zero(&mut self) { self.frame.fill(T::zero()); }

    /// Sum over all cells of the main rectangle.
    pub fn sum(&self) -> T {
        self.main().iter()
            .fold(T::zero(), |mut acc, v| { acc += *v; acc })
    }

    /// Add `t` to every cell of the main rectangle and refresh the border.
    pub fn add(&mut self, t: T) {
        self.main_mut().map_inplace(|v| { *v += t; });
        self.fill_border();
    }

    /// Copy all values, including the border, from another field.
    ///
    /// *Panics if the fields differ in width, height, or border*.
    pub fn assign(&mut self, other: &Self) {
        assert!(
            self.width == other.width
            && self.height == other.height
            && self.border == other.border,
            "cannot assign a {}×{} (border {}) field to a {}×{} (border {}) \
            field",
            other.width, other.height, other.border,
            self.width, self.height, self.border,
        );
        self.frame.assign(&other.frame);
    }
}

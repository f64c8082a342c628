//! Points, orientation, and the comparison policy.
//!
//! - `Point`: `nalgebra::Point2<f64>`; `==` is exact coordinate equality.
//! - `GeomCfg`: centralizes the tolerances for orientation and point identity.
//! - `Orientation`: sign of the directed triple (p1, p2, p3).

use std::cmp::Ordering;

use nalgebra::{Point2, Vector2};

use crate::error::{Error, Result};

/// A point in the plane.
pub type Point = Point2<f64>;

/// Sign of the signed area of a directed triple, in y-up axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Zero signed area (within `GeomCfg::eps_orient`); no valid interior.
    Collinear,
}

/// Comparison policy (tolerances).
///
/// Both tolerances default to `0.0`, i.e. bit-exact comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Orientation is `Collinear` when `|cross| <= eps_orient`.
    pub eps_orient: f64,
    /// Two points are the same point when both coordinates differ by at most `eps_eq`.
    pub eps_eq: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self::exact()
    }
}

impl GeomCfg {
    /// Bit-exact comparisons: exact zero for collinearity, exact coordinate equality.
    #[inline]
    pub const fn exact() -> Self {
        Self {
            eps_orient: 0.0,
            eps_eq: 0.0,
        }
    }

    /// Same `eps` for orientation and point identity.
    #[inline]
    pub fn tolerant(eps: f64) -> Self {
        let eps = eps.abs();
        Self {
            eps_orient: eps,
            eps_eq: eps,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.eps_orient == 0.0 && self.eps_eq == 0.0
    }

    /// Orientation of (p1, p2, p3) from the cross product of `p2 - p1` and `p3 - p2`.
    #[inline]
    pub fn orientation(&self, p1: &Point, p2: &Point, p3: &Point) -> Orientation {
        let c = cross(p2 - p1, p3 - p2);
        if c > self.eps_orient {
            Orientation::CounterClockwise
        } else if c < -self.eps_orient {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    #[inline]
    pub fn is_collinear(&self, p1: &Point, p2: &Point, p3: &Point) -> bool {
        self.orientation(p1, p2, p3) == Orientation::Collinear
    }

    /// Point identity under this policy.
    #[inline]
    pub fn same_point(&self, a: &Point, b: &Point) -> bool {
        if self.eps_eq == 0.0 {
            a == b
        } else {
            (a - b).amax() <= self.eps_eq
        }
    }
}

#[inline]
fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Exact orientation test (`GeomCfg::exact`).
#[inline]
pub fn orientation(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    GeomCfg::exact().orientation(p1, p2, p3)
}

/// Euclidean distance.
#[inline]
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    nalgebra::distance(p1, p2)
}

/// Ascending by x, then by y (total order on floats).
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// `p` with `-0.0` coordinates replaced by `0.0`, so `lex_cmp` agrees with `==`.
#[inline]
pub(crate) fn unsigned_zeros(p: &Point) -> Point {
    Point::new(p.x + 0.0, p.y + 0.0)
}

/// Sort ascending by (x, y) and drop repeated points.
///
/// Fails on non-finite coordinates (reported by input index).
pub(crate) fn canonicalize(points: &[Point], cfg: &GeomCfg) -> Result<Vec<Point>> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(Error::NonFinite { index });
    }
    let mut pts: Vec<Point> = points.iter().map(unsigned_zeros).collect();
    pts.sort_by(lex_cmp);
    pts.dedup_by(|a, b| cfg.same_point(a, b));
    Ok(pts)
}

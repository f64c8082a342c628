//! Lines in the form `A·x + B·y = C`.
//!
//! - `Line`: anything exposing the three coefficients; bounded variants narrow
//!   `spans` so intersections are clipped to them.
//! - `Segment`: two endpoints, bounded by their axis-aligned box.
//! - `InfiniteLine`: raw coefficients, unbounded; used for bisectors.

use super::triangle::Circle;
use super::types::{distance, Point};

/// A line `A·x + B·y = C`.
pub trait Line {
    /// The coefficients `(A, B, C)`.
    fn coefficients(&self) -> (f64, f64, f64);

    /// Whether `p`, already known to lie on the infinite line, lies within this line's extent.
    #[inline]
    fn spans(&self, _p: &Point) -> bool {
        true
    }

    /// The infinite line through `through` perpendicular to this one: `-B·x + A·y = D`.
    #[inline]
    fn perpendicular_bisector(&self, through: &Point) -> InfiniteLine {
        let (a, b, _) = self.coefficients();
        InfiniteLine::new(-b, a, -b * through.x + a * through.y)
    }
}

/// Crossing point of two lines, clipped to both lines' extents.
///
/// `None` when the determinant `A1·B2 - A2·B1` is zero (parallel or identical
/// lines) or when the crossing falls outside a bounded line.
pub fn intersect<L1, L2>(l1: &L1, l2: &L2) -> Option<Point>
where
    L1: Line + ?Sized,
    L2: Line + ?Sized,
{
    let (a1, b1, c1) = l1.coefficients();
    let (a2, b2, c2) = l2.coefficients();
    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    let p = Point::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);
    (l1.spans(&p) && l2.spans(&p)).then_some(p)
}

/// Circle through the endpoints of two segments sharing a triangle.
///
/// The center is where the perpendicular bisectors through the segments'
/// midpoints cross; the radius is measured to `seg_a.p1()`. `None` when the
/// bisectors are parallel (collinear triangle).
pub fn circumcircle(seg_a: &Segment, seg_b: &Segment) -> Option<Circle> {
    let bis_a = seg_a.perpendicular_bisector(&seg_a.midpoint());
    let bis_b = seg_b.perpendicular_bisector(&seg_b.midpoint());
    let center = intersect(&bis_a, &bis_b)?;
    Some(Circle {
        center,
        radius: distance(&center, &seg_a.p1()),
    })
}

/// Unbounded line given directly by its coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfiniteLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl InfiniteLine {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `y` on the line at `x`; `None` for vertical lines (`B = 0`).
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.b == 0.0 {
            None
        } else {
            Some((self.c - self.a * x) / self.b)
        }
    }
}

impl Line for InfiniteLine {
    #[inline]
    fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

/// Bounded segment between two endpoints.
///
/// `A = y2 - y1`, `B = x1 - x2`, `C = A·x1 + B·y1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// `(min_x, max_x, min_y, max_y)` regardless of endpoint order.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.p1.x.min(self.p2.x),
            self.p1.x.max(self.p2.x),
            self.p1.y.min(self.p2.y),
            self.p1.y.max(self.p2.y),
        )
    }

    /// Bounding-box containment (inclusive). Does not test that `p` is on the line.
    pub fn has_point(&self, p: &Point) -> bool {
        let (min_x, max_x, min_y, max_y) = self.bounds();
        (min_x..=max_x).contains(&p.x) && (min_y..=max_y).contains(&p.y)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p1 + (self.p2 - self.p1) / 2.0
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(&self.p1, &self.p2)
    }
}

impl Line for Segment {
    #[inline]
    fn coefficients(&self) -> (f64, f64, f64) {
        let a = self.p2.y - self.p1.y;
        let b = self.p1.x - self.p2.x;
        (a, b, a * self.p1.x + b * self.p1.y)
    }

    #[inline]
    fn spans(&self, p: &Point) -> bool {
        self.has_point(p)
    }
}

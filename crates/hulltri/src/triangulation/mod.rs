//! Hull-driven incremental triangulation.
//!
//! Purpose
//! - Insert points in ascending (x, y) order. Each new point is fanned against
//!   the hull points it displaced plus its two new hull neighbours, so the
//!   triangles grow with the hull and cover it.
//!
//! Seeding
//! - The first three points form the seed triangle. If they are collinear
//!   the builder enters degenerate mode and keeps accumulating hull points
//!   until one breaks collinearity, then fans that point against the whole
//!   accumulated boundary. If none does, the input has no triangulation.
//!
//! Not Delaunay: no empty-circumcircle guarantee.
//!
//! Code cross-refs: `ConvexHull`, `HullAlgorithm`, `GeomCfg`

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geom::{canonicalize, lex_cmp, GeomCfg, Point, Triangle};
use crate::hull::{ConvexHull, HullAlgorithm, JarvisMarch};

/// Append-only triangle list plus the hull it was built against.
#[derive(Clone, Debug)]
pub struct Triangulation<A: HullAlgorithm = JarvisMarch> {
    triangles: Vec<Triangle>,
    hull: ConvexHull<A>,
    degenerate: bool,
}

impl Triangulation {
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_cfg(points, GeomCfg::default())
    }

    pub fn with_cfg(points: &[Point], cfg: GeomCfg) -> Result<Self> {
        Self::with_algorithm(points, cfg, JarvisMarch)
    }
}

impl<A: HullAlgorithm> Triangulation<A> {
    /// Triangulate `points` with the hull maintained by `algo`.
    ///
    /// Errors
    /// - `InsufficientPoints` below 3 distinct points.
    /// - `DegenerateInput` when every point is collinear.
    /// - `NonFinite` on NaN or infinite coordinates.
    pub fn with_algorithm(points: &[Point], cfg: GeomCfg, algo: A) -> Result<Self> {
        let points = canonicalize(points, &cfg)?;
        let total = points.len();
        if total < 3 {
            return Err(Error::InsufficientPoints { got: total });
        }
        let mut pending: VecDeque<Point> = points.into();
        let seed: Vec<Point> = pending.drain(..3).collect();
        let first = Triangle::new(seed[0], seed[1], seed[2]);

        let mut tri = Self {
            triangles: Vec::with_capacity(2 * total),
            hull: ConvexHull::from_canonical(seed, cfg, algo),
            degenerate: false,
        };
        if first.is_collinear(&cfg) {
            tri.degenerate = true;
            tri.seed_collinear(&mut pending, total)?;
        } else {
            tri.triangles.push(first);
        }
        for p in pending {
            tri.insert(p);
        }
        debug!(
            points = total,
            triangles = tri.triangles.len(),
            hull = tri.hull.len(),
            degenerate = tri.degenerate,
            "triangulation built"
        );
        Ok(tri)
    }

    /// Grow a collinear hull until a point leaves the line, then fan it against the whole boundary.
    fn seed_collinear(&mut self, pending: &mut VecDeque<Point>, total: usize) -> Result<()> {
        debug!("collinear seed, accumulating hull points");
        let cfg = *self.hull.cfg();
        while let Some(p) = pending.pop_front() {
            let still_collinear = match self.hull.boundary() {
                [.., q1, q2] => cfg.is_collinear(&p, q1, q2),
                _ => true,
            };
            if !still_collinear {
                let fan = fan_triangulate(p, self.hull.boundary());
                debug!(
                    hull = self.hull.len(),
                    triangles = fan.len(),
                    "collinearity broken"
                );
                self.triangles.extend(fan);
                self.hull.add_point(p);
                return Ok(());
            }
            self.hull.add_point(p);
        }
        Err(Error::DegenerateInput { count: total })
    }

    /// Insert `p` (lexicographically after every point so far) and fan it.
    fn insert(&mut self, p: Point) {
        let cfg = *self.hull.cfg();
        let before = self.hull.boundary().to_vec();
        if !self.hull.add_point(p) {
            debug!(x = p.x, y = p.y, "point already present, skipped");
            return;
        }

        let mut connect = displaced_points(&before, self.hull.boundary(), &cfg);
        let displaced = connect.len();
        match self.hull.neighbors(&p) {
            Some((prev, next)) => connect.extend([prev, next]),
            None => warn!(
                x = p.x,
                y = p.y,
                "inserted point missing from hull boundary; connecting displaced points only"
            ),
        }
        connect.sort_by(lex_cmp);
        connect.dedup_by(|a, b| cfg.same_point(a, b));

        let fan = fan_triangulate(p, &connect);
        debug!(
            x = p.x,
            y = p.y,
            displaced,
            triangles = fan.len(),
            "point inserted"
        );
        self.triangles.extend(fan);
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn hull(&self) -> &ConvexHull<A> {
        &self.hull
    }

    /// Whether the seed was collinear.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Sum of triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    pub fn into_parts(self) -> (Vec<Triangle>, ConvexHull<A>) {
        (self.triangles, self.hull)
    }
}

/// Boundary points in `before` that are absent from `after`.
pub fn displaced_points(before: &[Point], after: &[Point], cfg: &GeomCfg) -> Vec<Point> {
    before
        .iter()
        .filter(|q| !after.iter().any(|r| cfg.same_point(q, r)))
        .copied()
        .collect()
}

/// One triangle `(pivot, q[i], q[i+1])` per consecutive pair.
pub fn fan_triangulate(pivot: Point, seq: &[Point]) -> Vec<Triangle> {
    seq.windows(2)
        .map(|w| Triangle::new(pivot, w[0], w[1]))
        .collect()
}

/// Triangles covering the hull of `points` (exact comparisons).
pub fn triangulate(points: &[Point]) -> Result<Vec<Triangle>> {
    triangulate_with_cfg(points, GeomCfg::default())
}

pub fn triangulate_with_cfg(points: &[Point], cfg: GeomCfg) -> Result<Vec<Triangle>> {
    Triangulation::with_cfg(points, cfg).map(|t| t.triangles)
}

#[cfg(test)]
mod tests;

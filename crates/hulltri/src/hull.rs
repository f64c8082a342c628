//! Convex hull maintenance via gift wrapping (Jarvis march).
//!
//! Purpose
//! - Build the ordered hull boundary of a point set and keep it current as
//!   points are inserted one at a time.
//!
//! Conventions
//! - The working point set is kept sorted ascending by (x, y) and free of
//!   repeats; the scan starts at its first point, which is always on the hull.
//! - In y-up axes the boundary is walked clockwise: the candidate is replaced
//!   only by points strictly counter-clockwise of A→B, so collinear ties keep
//!   the first candidate found in scan order.
//! - Insertion reruns the full scan (O(n·h)). The scan sits behind
//!   `HullAlgorithm` so a true incremental update can replace it without
//!   touching callers.
//!
//! Code cross-refs: `GeomCfg`, `Triangulation`

use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::geom::{canonicalize, lex_cmp, unsigned_zeros, GeomCfg, Orientation, Point, Segment};

/// Strategy computing the hull boundary of a canonical point set.
pub trait HullAlgorithm {
    /// Ordered boundary of `points`, which are sorted ascending by (x, y) and free of repeats.
    fn boundary(&self, points: &[Point], cfg: &GeomCfg) -> Vec<Point>;
}

/// Gift-wrapping scan; full rescan on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct JarvisMarch;

impl HullAlgorithm for JarvisMarch {
    fn boundary(&self, points: &[Point], cfg: &GeomCfg) -> Vec<Point> {
        let n = points.len();
        let mut hull = Vec::new();
        if n == 0 {
            return hull;
        }
        let start = 0usize;
        let mut a = start;
        loop {
            hull.push(points[a]);
            let mut b = (a + 1) % n;
            for (c, pc) in points.iter().enumerate() {
                if cfg.orientation(&points[a], &points[b], pc) == Orientation::CounterClockwise {
                    b = c;
                }
            }
            a = b;
            if a == start {
                break;
            }
            // Orientation tests that disagree near degeneracy can keep the walk from closing.
            if hull.len() == n {
                warn!(points = n, "hull scan did not return to its start; walk truncated");
                break;
            }
        }
        hull
    }
}

/// Convex hull owning its working point set and boundary.
///
/// Invariants:
/// - `points` sorted ascending by (x, y), no two the same under `cfg`.
/// - `boundary` is the scan result for `points`; every boundary point is in `points`.
#[derive(Clone, Debug)]
pub struct ConvexHull<A: HullAlgorithm = JarvisMarch> {
    points: Vec<Point>,
    boundary: Vec<Point>,
    cfg: GeomCfg,
    algo: A,
}

impl ConvexHull {
    /// Hull of at least 3 distinct points with exact comparisons.
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_cfg(points, GeomCfg::default())
    }

    pub fn with_cfg(points: &[Point], cfg: GeomCfg) -> Result<Self> {
        Self::with_algorithm(points, cfg, JarvisMarch)
    }
}

impl<A: HullAlgorithm> ConvexHull<A> {
    /// Hull built by `algo`. Fails with `InsufficientPoints` below 3 distinct points.
    pub fn with_algorithm(points: &[Point], cfg: GeomCfg, algo: A) -> Result<Self> {
        let points = canonicalize(points, &cfg)?;
        if points.len() < 3 {
            return Err(Error::InsufficientPoints { got: points.len() });
        }
        Ok(Self::from_canonical(points, cfg, algo))
    }

    /// Skips validation; `points` must already be canonical.
    pub(crate) fn from_canonical(points: Vec<Point>, cfg: GeomCfg, algo: A) -> Self {
        let boundary = algo.boundary(&points, &cfg);
        Self {
            points,
            boundary,
            cfg,
            algo,
        }
    }

    /// Every point inserted so far, sorted ascending by (x, y).
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Ordered hull vertices.
    #[inline]
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Boundary segments between consecutive hull points, wrapping last→first.
    pub fn segments(&self) -> Vec<Segment> {
        let h = self.boundary.len();
        (0..h)
            .map(|k| Segment::new(self.boundary[k], self.boundary[(k + 1) % h]))
            .collect()
    }

    /// Index of `p` in the boundary.
    pub fn position(&self, p: &Point) -> Option<usize> {
        self.boundary.iter().position(|q| self.cfg.same_point(q, p))
    }

    #[inline]
    pub fn contains_on_boundary(&self, p: &Point) -> bool {
        self.position(p).is_some()
    }

    /// Hull points before and after `p` in the boundary, wrapping at either end.
    pub fn neighbors(&self, p: &Point) -> Option<(Point, Point)> {
        let h = self.boundary.len();
        let k = self.position(p)?;
        Some((self.boundary[(k + h - 1) % h], self.boundary[(k + 1) % h]))
    }

    /// Whether `p` lies inside or on the hull polygon.
    ///
    /// Meaningful only for a hull with non-zero area.
    pub fn encloses(&self, p: &Point) -> bool {
        let h = self.boundary.len();
        (0..h).all(|k| {
            self.cfg
                .orientation(&self.boundary[k], &self.boundary[(k + 1) % h], p)
                != Orientation::CounterClockwise
        })
    }

    /// Enclosed area (shoelace).
    pub fn area(&self) -> f64 {
        let h = self.boundary.len();
        let twice: f64 = (0..h)
            .map(|k| {
                let p = self.boundary[k];
                let q = self.boundary[(k + 1) % h];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice.abs()
    }

    /// Add `p` to the working set and rescan. Returns `false` if `p` was already present.
    pub fn add_point(&mut self, p: Point) -> bool {
        let p = unsigned_zeros(&p);
        if self.points.iter().any(|q| self.cfg.same_point(q, &p)) {
            return false;
        }
        let at = self
            .points
            .partition_point(|q| lex_cmp(q, &p) == std::cmp::Ordering::Less);
        self.points.insert(at, p);
        self.boundary = self.algo.boundary(&self.points, &self.cfg);
        trace!(
            points = self.points.len(),
            hull = self.boundary.len(),
            "hull rescanned"
        );
        true
    }
}

/// Ordered hull vertices of `points` (exact comparisons).
///
/// Deterministic; input order does not matter beyond repeats being dropped.
pub fn build_convex_hull(points: &[Point]) -> Result<Vec<Point>> {
    build_convex_hull_with_cfg(points, GeomCfg::default())
}

pub fn build_convex_hull_with_cfg(points: &[Point], cfg: GeomCfg) -> Result<Vec<Point>> {
    ConvexHull::with_cfg(points, cfg).map(|h| h.boundary)
}

use super::line::{circumcircle, Segment};
use super::types::{lex_cmp, GeomCfg, Orientation, Point};

/// Circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Three points, compared as an unordered multiset.
///
/// Vertex order is kept as given (it determines `segments` and
/// `orientation`) but plays no part in equality.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            vertices: [p1, p2, p3],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Boundary segments p1→p2, p2→p3, p3→p1.
    pub fn segments(&self) -> [Segment; 3] {
        let [p1, p2, p3] = self.vertices;
        [
            Segment::new(p1, p2),
            Segment::new(p2, p3),
            Segment::new(p3, p1),
        ]
    }

    #[inline]
    pub fn orientation(&self, cfg: &GeomCfg) -> Orientation {
        let [p1, p2, p3] = &self.vertices;
        cfg.orientation(p1, p2, p3)
    }

    #[inline]
    pub fn is_collinear(&self, cfg: &GeomCfg) -> bool {
        self.orientation(cfg) == Orientation::Collinear
    }

    /// Signed area, positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let [p1, p2, p3] = &self.vertices;
        let u = p2 - p1;
        let v = p3 - p1;
        0.5 * (u.x * v.y - u.y * v.x)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn has_vertex(&self, p: &Point, cfg: &GeomCfg) -> bool {
        self.vertices.iter().any(|v| cfg.same_point(v, p))
    }

    /// Circumscribed circle; `None` for collinear triangles.
    pub fn circumcircle(&self) -> Option<Circle> {
        let [s1, s2, _] = self.segments();
        circumcircle(&s1, &s2)
    }

    /// Order-insensitive multiset match under `cfg`: every vertex pairs with a distinct vertex of `other`.
    pub fn matches(&self, other: &Triangle, cfg: &GeomCfg) -> bool {
        let mut used = [false; 3];
        self.vertices.iter().all(|v| {
            match (0..3).find(|&k| !used[k] && cfg.same_point(v, &other.vertices[k])) {
                Some(k) => {
                    used[k] = true;
                    true
                }
                None => false,
            }
        })
    }

    fn sorted_vertices(&self) -> [Point; 3] {
        let mut vs = self.vertices;
        vs.sort_by(lex_cmp);
        vs
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }
}

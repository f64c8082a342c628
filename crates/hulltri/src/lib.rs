//! Convex hulls and hull-driven triangulations of planar point sets.
//!
//! Layers (leaves first)
//! - `geom`: points, lines, segments, triangles, and the comparison policy (`GeomCfg`).
//! - `hull`: gift-wrapping convex hull with incremental insertion.
//! - `triangulation`: inserts points one at a time and fans each new point
//!   against the hull points it displaces or touches.
//!
//! The triangulation is not Delaunay. It covers the hull with a fan per
//! insertion and makes no empty-circumcircle guarantee.

pub mod error;
pub mod geom;
pub mod hull;
pub mod sample;
pub mod triangulation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use hull::{build_convex_hull, build_convex_hull_with_cfg};
pub use triangulation::{triangulate, triangulate_with_cfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::{
        circumcircle, distance, intersect, orientation, Circle, GeomCfg, InfiniteLine, Line,
        Orientation, Point, Segment, Triangle,
    };
    pub use crate::hull::{
        build_convex_hull, build_convex_hull_with_cfg, ConvexHull, HullAlgorithm, JarvisMarch,
    };
    pub use crate::sample::{draw_points, Layout, ReplayToken, SampleCfg};
    pub use crate::triangulation::{triangulate, triangulate_with_cfg, Triangulation};
}

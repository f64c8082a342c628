//! Geometric primitives for the plane.
//!
//! Purpose
//! - Points, infinite lines `A·x + B·y = C`, bounded segments, and triangles,
//!   with the derived operations the hull and triangulation need (orientation,
//!   intersection, perpendicular bisector, circumcircle).
//!
//! Comparison policy
//! - Every float comparison used by algorithm logic goes through `GeomCfg`.
//!   The default policy is bit-exact; `GeomCfg::tolerant` swaps in an
//!   epsilon without touching callers.
//!
//! Code cross-refs: `GeomCfg`, `Line`, `Segment`, `InfiniteLine`, `Triangle`

mod line;
mod triangle;
mod types;

pub use line::{circumcircle, intersect, InfiniteLine, Line, Segment};
pub use triangle::{Circle, Triangle};
pub use types::{distance, lex_cmp, orientation, GeomCfg, Orientation, Point};

pub(crate) use types::{canonicalize, unsigned_zeros};

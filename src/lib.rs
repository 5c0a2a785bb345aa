/*!
polycollide
===========

**polycollide** is a 2-dimensional polygon overlap library written with
the rust programming language.

It answers one question, "do these two polygons overlap?", with three
interchangeable algorithms:

* [`query::AabbDetector`]: overlap of the axis-aligned bounding boxes (fast, conservative).
* [`query::SatDetector`]: the Separating Axis Theorem, exact for convex polygons.
* [`query::GjkDetector`]: the Gilbert-Johnson-Keerthi algorithm, exact for convex polygons.

Polygons are usually built interactively through a [`sketch::Sketch`] and then checked pairwise
with [`query::selector::check_all_pairs`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod debug;
pub mod query;
pub mod shape;
pub mod sketch;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}

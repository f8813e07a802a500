/*!
strokecrop3d
============

**strokecrop3d** crops 3D freehand drawing strokes against a volume.

A stroke is an ordered list of posed, pressured and timestamped control points.
Cropping keeps only the portions of each stroke that lie inside the crop volume.
Boundary points are synthesized by interpolating every per-point attribute, and
a stroke that crosses the boundary several times is split into independent strokes.

The crate is organized bottom-up:

- [`bounding_volume`]: axis-aligned bounding boxes used for cheap rejection tests.
- [`query`]: segment/sphere clipping parameters and AABB/sphere intersection tests.
- [`shape`]: the crop volumes themselves (a [`Ball`](shape::Ball) for now).
- [`stroke`]: control points and strokes.
- [`crop`]: the per-stroke segment clipper and the orchestrator that applies
  crop results to a stroke catalog.
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
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate alloc;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod crop;
pub mod query;
pub mod shape;
pub mod stroke;

mod real {
    /// The scalar type used throughout this crate.
    pub use f32 as Real;
}

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Similarity3, Translation3, UnitQuaternion, Vector3};

    /// Relative slack applied to the squared radius of a crop volume when testing
    /// whether a point lies inside it.
    ///
    /// Boundary points synthesized by a crop land on the surface of the volume up to
    /// rounding errors. This slack makes them count as inside so that cropping the
    /// result again with the same volume leaves it untouched. Points up to about
    /// `radius * BOUNDARY_TOLERANCE / 2` outside of the exact surface count as inside.
    pub const BOUNDARY_TOLERANCE: Real = 1.0e-4;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The orientation of a control point.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The pose of a canvas or of the scene: a translation, a rotation and a uniform scale.
    pub type Pose<N> = Similarity3<N>;
}

#[cfg(feature = "parallel")]
macro_rules! into_iter {
    ($v:expr) => {
        $v.into_par_iter()
    };
}

#[cfg(not(feature = "parallel"))]
macro_rules! into_iter {
    ($v:expr) => {
        $v.into_iter()
    };
}

pub mod command;
pub mod coord;
pub mod density;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod mesh;
pub mod picking;
pub mod snapshot;
pub mod topology;
pub mod triangle;

/// Scalar type.
pub type Scalar = f64;

/// Number of outer boundary corners.
pub const BBOX_POINT_COUNT: usize = 4;

/// Number of obstacle corners.
pub const OBSTACLE_POINT_COUNT: usize = 4;

pub mod prelude {
    pub use crate::{
        command::*, coord::*, density::*, engine::*, geometry::*, layout::*,
        mesh::containment::*, mesh::error::*, mesh::outcome::*, mesh::settings::*, mesh::*,
        picking::*, snapshot::*, topology::obstacle::*, topology::*, triangle::*, Scalar,
        BBOX_POINT_COUNT, OBSTACLE_POINT_COUNT,
    };
}

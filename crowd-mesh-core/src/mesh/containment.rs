use crate::{
    coord::Coord,
    geometry::{point_in_axis_aligned_bounds_of_quad, point_in_convex_polygon},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// How "inside the obstacle" is decided.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObstacleContainment {
    /// Strict point-in-convex-polygon test against the actual (possibly rotated) obstacle.
    #[default]
    Exact,
    /// Strict test against the axis-aligned bounding box of the obstacle corners.
    /// Over-approximates rotated obstacles.
    BoundingBox,
}

impl ObstacleContainment {
    /// Tells if point lies inside the obstacle described by its corners.
    ///
    /// # Examples
    /// ```
    /// use crowd_mesh_core::prelude::*;
    ///
    /// let corners = ObstacleShape::new(Coord::new(0.0, 0.0), 4.0, 4.0).corners(45.0, 1.0);
    /// let p = Coord::new(1.7, 1.7);
    /// assert!(!ObstacleContainment::Exact.contains(&corners, p));
    /// assert!(ObstacleContainment::BoundingBox.contains(&corners, p));
    /// ```
    pub fn contains(&self, corners: &[Coord; 4], point: Coord) -> bool {
        match self {
            Self::Exact => point_in_convex_polygon(point, corners),
            Self::BoundingBox => point_in_axis_aligned_bounds_of_quad(point, corners),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown obstacle containment `{0}`, expected `exact` or `bounding-box`")]
pub struct ParseContainmentError(pub String);

impl FromStr for ObstacleContainment {
    type Err = ParseContainmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "bounding-box" => Ok(Self::BoundingBox),
            _ => Err(ParseContainmentError(s.to_owned())),
        }
    }
}

impl fmt::Display for ObstacleContainment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::BoundingBox => write!(f, "bounding-box"),
        }
    }
}

use crate::{
    coord::Coord, mesh::error::MeshError, mesh::settings::CrowdMeshSettings,
    topology::obstacle::ObstacleShape, Scalar,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Distance between canvas edges and the outer boundary of a generated layout.
pub const CANVAS_PADDING: Scalar = 40.0;
/// Unscaled obstacle width of a generated layout.
pub const CANVAS_OBSTACLE_WIDTH: Scalar = 100.0;
/// Unscaled obstacle height of a generated layout.
pub const CANVAS_OBSTACLE_HEIGHT: Scalar = 70.0;
/// Inset of randomly placed points from the outer boundary.
pub const PLACEMENT_INSET: Scalar = 20.0;
const OBSTACLE_CLEARANCE: Scalar = 10.0;
const MIN_POINT_SPACING: Scalar = 20.0;

/// Initial mesh configuration.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let layout = MeshLayout::rectangle(
///     Coord::new(0.0, 0.0),
///     Coord::new(100.0, 50.0),
///     ObstacleShape::new(Coord::new(50.0, 25.0), 10.0, 10.0),
/// );
/// assert_eq!(layout.boundary[2], Coord::new(100.0, 50.0));
/// assert!(layout.interior.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshLayout {
    /// Outer boundary corners in loop order.
    pub boundary: Vec<Coord>,
    /// Obstacle rectangle.
    pub obstacle: ObstacleShape,
    /// Free interior points.
    #[serde(default)]
    pub interior: Vec<Coord>,
    /// Initial people positions.
    #[serde(default)]
    pub people: Vec<Coord>,
}

impl MeshLayout {
    /// Create layout with rectangular boundary and no interior points.
    ///
    /// # Arguments
    /// * `min` - Top-left boundary corner.
    /// * `max` - Bottom-right boundary corner.
    /// * `obstacle` - Obstacle rectangle.
    pub fn rectangle(min: Coord, max: Coord, obstacle: ObstacleShape) -> Self {
        Self {
            boundary: vec![
                min,
                Coord::new(max.x, min.y),
                max,
                Coord::new(min.x, max.y),
            ],
            obstacle,
            interior: vec![],
            people: vec![],
        }
    }

    /// Generate layout for a canvas described by settings: padded rectangular boundary,
    /// centered obstacle and `inner_point_count` random interior points kept away from the
    /// obstacle at its largest scale and from each other. Every point gets
    /// `placement_attempts` tries.
    ///
    /// People are not generated here, they need edges to keep their distance from.
    ///
    /// # Arguments
    /// * `settings` - Mesh settings.
    /// * `rng` - Random generator.
    ///
    /// # Returns
    /// Layout or error when points could not be placed.
    pub fn canvas<R: Rng>(settings: &CrowdMeshSettings, rng: &mut R) -> Result<Self, MeshError> {
        let min = Coord::new(CANVAS_PADDING, CANVAS_PADDING);
        let max = Coord::new(
            settings.canvas_width - CANVAS_PADDING,
            settings.canvas_height - CANVAS_PADDING,
        );
        if max.x - min.x <= 2.0 * PLACEMENT_INSET || max.y - min.y <= 2.0 * PLACEMENT_INSET {
            return Err(MeshError::InvalidSettings(format!(
                "canvas {}x{} is too small",
                settings.canvas_width, settings.canvas_height
            )));
        }
        let obstacle = ObstacleShape::new(
            (min + max) * 0.5,
            CANVAS_OBSTACLE_WIDTH,
            CANVAS_OBSTACLE_HEIGHT,
        );
        let mut result = Self::rectangle(min, max, obstacle);
        let clearance = obstacle.reach(settings.max_scale_factor) + OBSTACLE_CLEARANCE;
        let inset = Coord::new(PLACEMENT_INSET, PLACEMENT_INSET);
        let requested = settings.inner_point_count;
        let mut attempts = 0;
        while result.interior.len() < requested {
            if attempts >= settings.placement_attempts {
                return Err(MeshError::PlacementExhausted {
                    placed: result.interior.len(),
                    requested,
                });
            }
            attempts += 1;
            let point = sample_in_bounds(rng, min + inset, max - inset);
            if point.distance(obstacle.center) > clearance
                && result
                    .interior
                    .iter()
                    .all(|p| p.distance(point) >= MIN_POINT_SPACING)
            {
                result.interior.push(point);
                attempts = 0;
            }
        }
        Ok(result)
    }
}

/// Uniformly sample point inside bounds. Empty ranges collapse to their lower end.
pub(crate) fn sample_in_bounds<R: Rng>(rng: &mut R, min: Coord, max: Coord) -> Coord {
    let x = if min.x < max.x {
        rng.gen_range(min.x..max.x)
    } else {
        min.x
    };
    let y = if min.y < max.y {
        rng.gen_range(min.y..max.y)
    } else {
        min.y
    };
    Coord::new(x, y)
}

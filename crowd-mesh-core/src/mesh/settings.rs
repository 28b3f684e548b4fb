use crate::{mesh::containment::ObstacleContainment, mesh::error::MeshError, Scalar};
use serde::{Deserialize, Serialize};

/// Settings of crowd mesh editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdMeshSettings {
    /// People count a triangle needs to be classified as optimal.
    #[serde(default = "CrowdMeshSettings::default_target_density")]
    pub target_density: usize,
    /// Number of random interior points of a generated layout.
    #[serde(default = "CrowdMeshSettings::default_inner_point_count")]
    pub inner_point_count: usize,
    /// Number of random people of a generated layout.
    #[serde(default = "CrowdMeshSettings::default_initial_people_count")]
    pub initial_people_count: usize,
    /// Minimal distance between randomly placed person and any edge.
    #[serde(default = "CrowdMeshSettings::default_person_edge_buffer")]
    pub person_edge_buffer: Scalar,
    /// Lowest cumulative obstacle scale.
    #[serde(default = "CrowdMeshSettings::default_min_scale_factor")]
    pub min_scale_factor: Scalar,
    /// Highest cumulative obstacle scale.
    #[serde(default = "CrowdMeshSettings::default_max_scale_factor")]
    pub max_scale_factor: Scalar,
    /// Rotation applied by a rotate command without explicit angle.
    #[serde(default = "CrowdMeshSettings::default_rotation_step_degrees")]
    pub rotation_step_degrees: Scalar,
    /// Scale delta applied by a scale command without explicit delta.
    #[serde(default = "CrowdMeshSettings::default_scale_step")]
    pub scale_step: Scalar,
    /// Limit of generated connections per obstacle corner.
    #[serde(default = "CrowdMeshSettings::default_max_obstacle_connections")]
    pub max_obstacle_connections: usize,
    /// Limit of tries when looking for a free spot for a random point.
    #[serde(default = "CrowdMeshSettings::default_placement_attempts")]
    pub placement_attempts: usize,
    /// Obstacle containment test.
    #[serde(default)]
    pub obstacle_containment: ObstacleContainment,
    /// Vertex picking radius.
    #[serde(default = "CrowdMeshSettings::default_vertex_pick_radius")]
    pub vertex_pick_radius: Scalar,
    /// Edge picking radius.
    #[serde(default = "CrowdMeshSettings::default_edge_pick_radius")]
    pub edge_pick_radius: Scalar,
    /// Person picking radius.
    #[serde(default = "CrowdMeshSettings::default_person_pick_radius")]
    pub person_pick_radius: Scalar,
    /// Width of the canvas a random layout is generated for.
    #[serde(default = "CrowdMeshSettings::default_canvas_width")]
    pub canvas_width: Scalar,
    /// Height of the canvas a random layout is generated for.
    #[serde(default = "CrowdMeshSettings::default_canvas_height")]
    pub canvas_height: Scalar,
    /// Random generator seed, entropy is used when not set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CrowdMeshSettings {
    fn default() -> Self {
        Self {
            target_density: Self::default_target_density(),
            inner_point_count: Self::default_inner_point_count(),
            initial_people_count: Self::default_initial_people_count(),
            person_edge_buffer: Self::default_person_edge_buffer(),
            min_scale_factor: Self::default_min_scale_factor(),
            max_scale_factor: Self::default_max_scale_factor(),
            rotation_step_degrees: Self::default_rotation_step_degrees(),
            scale_step: Self::default_scale_step(),
            max_obstacle_connections: Self::default_max_obstacle_connections(),
            placement_attempts: Self::default_placement_attempts(),
            obstacle_containment: ObstacleContainment::default(),
            vertex_pick_radius: Self::default_vertex_pick_radius(),
            edge_pick_radius: Self::default_edge_pick_radius(),
            person_pick_radius: Self::default_person_pick_radius(),
            canvas_width: Self::default_canvas_width(),
            canvas_height: Self::default_canvas_height(),
            seed: None,
        }
    }
}

impl CrowdMeshSettings {
    /// Check settings consistency.
    ///
    /// # Examples
    /// ```
    /// use crowd_mesh_core::prelude::*;
    ///
    /// assert!(CrowdMeshSettings::default().validate().is_ok());
    /// let settings = CrowdMeshSettings {
    ///     min_scale_factor: 1.2,
    ///     ..Default::default()
    /// };
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.min_scale_factor > 0.0) {
            return Err(MeshError::InvalidSettings(
                "minimal scale factor must be positive".to_owned(),
            ));
        }
        if !(self.min_scale_factor <= 1.0 && 1.0 <= self.max_scale_factor) {
            return Err(MeshError::InvalidSettings(format!(
                "scale range {}..{} must contain 1",
                self.min_scale_factor, self.max_scale_factor
            )));
        }
        if self.person_edge_buffer < 0.0 {
            return Err(MeshError::InvalidSettings(
                "person edge buffer cannot be negative".to_owned(),
            ));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(MeshError::InvalidSettings(
                "canvas size must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    fn default_target_density() -> usize {
        4
    }

    fn default_inner_point_count() -> usize {
        12
    }

    fn default_initial_people_count() -> usize {
        20
    }

    fn default_person_edge_buffer() -> Scalar {
        5.0
    }

    fn default_min_scale_factor() -> Scalar {
        0.5
    }

    fn default_max_scale_factor() -> Scalar {
        1.5
    }

    fn default_rotation_step_degrees() -> Scalar {
        15.0
    }

    fn default_scale_step() -> Scalar {
        0.1
    }

    fn default_max_obstacle_connections() -> usize {
        3
    }

    fn default_placement_attempts() -> usize {
        1000
    }

    fn default_vertex_pick_radius() -> Scalar {
        15.0
    }

    fn default_edge_pick_radius() -> Scalar {
        10.0
    }

    fn default_person_pick_radius() -> Scalar {
        10.0
    }

    fn default_canvas_width() -> Scalar {
        800.0
    }

    fn default_canvas_height() -> Scalar {
        600.0
    }
}

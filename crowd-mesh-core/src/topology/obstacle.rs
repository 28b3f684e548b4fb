use crate::{coord::Coord, topology::Edge, topology::VertexId, Scalar};
use serde::{Deserialize, Serialize};

/// Rectangular obstacle description used when building a mesh.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleShape {
    /// Center point.
    pub center: Coord,
    /// Unscaled width.
    pub width: Scalar,
    /// Unscaled height.
    pub height: Scalar,
}

impl ObstacleShape {
    /// Create new obstacle shape.
    ///
    /// # Arguments
    /// * `center` - Center point.
    /// * `width` - Width.
    /// * `height` - Height.
    pub fn new(center: Coord, width: Scalar, height: Scalar) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Returns corners for given pose.
    ///
    /// Corners are listed as top-left, top-right, bottom-right, bottom-left of the unrotated
    /// rectangle (screen space, y pointing down).
    ///
    /// # Arguments
    /// * `rotation_degrees` - Rotation about the center.
    /// * `scale_factor` - Uniform scale about the center.
    ///
    /// # Examples
    /// ```
    /// use crowd_mesh_core::prelude::*;
    ///
    /// let shape = ObstacleShape::new(Coord::new(10.0, 10.0), 4.0, 2.0);
    /// assert_eq!(
    ///     shape.corners(0.0, 1.0),
    ///     [
    ///         Coord::new(8.0, 9.0),
    ///         Coord::new(12.0, 9.0),
    ///         Coord::new(12.0, 11.0),
    ///         Coord::new(8.0, 11.0),
    ///     ],
    /// );
    /// assert_eq!(shape.corners(0.0, 2.0)[0], Coord::new(6.0, 8.0));
    /// ```
    pub fn corners(&self, rotation_degrees: Scalar, scale_factor: Scalar) -> [Coord; 4] {
        let hw = self.width * scale_factor * 0.5;
        let hh = self.height * scale_factor * 0.5;
        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(x, y)| {
            (self.center + Coord::new(x, y)).rotated_around(self.center, rotation_degrees)
        })
    }

    /// Radius of the circle enclosing the obstacle at any rotation for given scale.
    pub fn reach(&self, scale_factor: Scalar) -> Scalar {
        self.width.hypot(self.height) * scale_factor * 0.5
    }
}

/// Obstacle placed in the mesh.
///
/// Corner positions live in the vertex store, this struct keeps the pose they were derived
/// from, so repeated transforms never accumulate rounding drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub(crate) vertices: [VertexId; 4],
    pub(crate) shape: ObstacleShape,
    pub(crate) rotation_degrees: Scalar,
    pub(crate) scale_factor: Scalar,
}

impl Obstacle {
    pub(crate) fn new(vertices: [VertexId; 4], shape: ObstacleShape) -> Self {
        Self {
            vertices,
            shape,
            rotation_degrees: 0.0,
            scale_factor: 1.0,
        }
    }

    /// Corner vertex ids in loop order.
    pub fn vertices(&self) -> [VertexId; 4] {
        self.vertices
    }

    pub fn shape(&self) -> &ObstacleShape {
        &self.shape
    }

    pub fn center(&self) -> Coord {
        self.shape.center
    }

    /// Cumulative rotation in degrees.
    pub fn rotation_degrees(&self) -> Scalar {
        self.rotation_degrees
    }

    /// Cumulative scale factor.
    pub fn scale_factor(&self) -> Scalar {
        self.scale_factor
    }

    /// Current corner positions.
    pub fn corners(&self) -> [Coord; 4] {
        self.shape.corners(self.rotation_degrees, self.scale_factor)
    }

    /// Obstacle loop edges.
    pub fn edges(&self) -> [Edge; 4] {
        let v = self.vertices;
        [
            Edge::new(v[0], v[1]),
            Edge::new(v[1], v[2]),
            Edge::new(v[2], v[3]),
            Edge::new(v[3], v[0]),
        ]
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges().contains(&edge)
    }

    /// Tells if edge connects two corners through the obstacle interior.
    pub fn is_diagonal(&self, edge: Edge) -> bool {
        self.has_vertex(edge.a) && self.has_vertex(edge.b) && !self.has_edge(edge)
    }
}

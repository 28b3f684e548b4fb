use crate::{
    coord::Coord,
    density::DensityClass,
    topology::{PersonId, TopologyStore, VertexId, VertexRole},
    triangle::Triangle,
    Scalar, OBSTACLE_POINT_COUNT,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSnapshot {
    pub id: VertexId,
    pub x: Scalar,
    pub y: Scalar,
    pub fixed: bool,
    pub role: VertexRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleSnapshot {
    pub vertices: [VertexId; 3],
    pub occupancy: usize,
    pub density: DensityClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSnapshot {
    pub id: PersonId,
    pub x: Scalar,
    pub y: Scalar,
    /// Vertices of containing triangle.
    pub triangle: Option<[VertexId; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSnapshot {
    pub vertices: [VertexId; OBSTACLE_POINT_COUNT],
    pub corners: [Coord; OBSTACLE_POINT_COUNT],
    pub center: Coord,
    pub rotation_degrees: Scalar,
    pub scale_factor: Scalar,
}

/// Triangle count per density class.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let mut triangles = vec![
///     Triangle::from([VertexId(0), VertexId(1), VertexId(2)]),
///     Triangle::from([VertexId(1), VertexId(2), VertexId(3)]),
/// ];
/// triangles[1].density = DensityClass::Over;
/// let stats = DensityStats::from_triangles(&triangles);
/// assert_eq!(stats.under, 1);
/// assert_eq!(stats.over, 1);
/// assert_eq!(stats.total(), 2);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityStats {
    pub under: usize,
    pub optimal: usize,
    pub over: usize,
}

impl DensityStats {
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        triangles
            .iter()
            .fold(Self::default(), |mut stats, t| {
                match t.density {
                    DensityClass::Under => stats.under += 1,
                    DensityClass::Optimal => stats.optimal += 1,
                    DensityClass::Over => stats.over += 1,
                }
                stats
            })
    }

    pub fn total(&self) -> usize {
        self.under + self.optimal + self.over
    }
}

/// Plain data view of a mesh, consumed by renderers and exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    pub vertices: Vec<VertexSnapshot>,
    pub edges: Vec<[VertexId; 2]>,
    pub triangles: Vec<TriangleSnapshot>,
    pub people: Vec<PersonSnapshot>,
    pub obstacle: ObstacleSnapshot,
    pub target_density: usize,
    pub stats: DensityStats,
    /// Outcome of the last edit.
    pub status: String,
}

impl MeshSnapshot {
    /// Capture current store content.
    ///
    /// # Arguments
    /// * `store` - Topology store.
    /// * `target_density` - Target density triangles were classified with.
    /// * `status` - Status line of the last edit.
    pub fn capture(store: &TopologyStore, target_density: usize, status: &str) -> Self {
        let obstacle = store.obstacle();
        Self {
            vertices: store
                .vertices()
                .iter()
                .map(|v| VertexSnapshot {
                    id: v.id,
                    x: v.position.x,
                    y: v.position.y,
                    fixed: v.fixed,
                    role: v.role,
                })
                .collect(),
            edges: store.edges().iter().map(|e| [e.a, e.b]).collect(),
            triangles: store
                .triangles()
                .iter()
                .map(|t| TriangleSnapshot {
                    vertices: t.key().vertices(),
                    occupancy: t.occupancy,
                    density: t.density,
                })
                .collect(),
            people: store
                .people()
                .iter()
                .map(|p| PersonSnapshot {
                    id: p.id,
                    x: p.position.x,
                    y: p.position.y,
                    triangle: p.triangle.map(|key| key.vertices()),
                })
                .collect(),
            obstacle: ObstacleSnapshot {
                vertices: obstacle.vertices(),
                corners: store.obstacle_corners(),
                center: obstacle.center(),
                rotation_degrees: obstacle.rotation_degrees(),
                scale_factor: obstacle.scale_factor(),
            },
            target_density,
            stats: DensityStats::from_triangles(store.triangles()),
            status: status.to_owned(),
        }
    }
}

use crate::{density::DensityClass, topology::Edge, topology::VertexId};
use serde::{Deserialize, Serialize};

/// Identity of a triangle: its three vertex ids in ascending order.
///
/// Triangles are rebuilt on every structural edit, so this key is the only identity that
/// survives a re-triangulation.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let a = TriangleKey::new(VertexId(7), VertexId(2), VertexId(5));
/// let b = TriangleKey::new(VertexId(5), VertexId(7), VertexId(2));
/// assert_eq!(a, b);
/// assert_eq!(a.vertices(), [VertexId(2), VertexId(5), VertexId(7)]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriangleKey([VertexId; 3]);

impl TriangleKey {
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let mut vertices = [a, b, c];
        vertices.sort();
        Self(vertices)
    }

    pub fn vertices(self) -> [VertexId; 3] {
        self.0
    }
}

impl From<[VertexId; 3]> for TriangleKey {
    fn from([a, b, c]: [VertexId; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// Triangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First point.
    pub a: VertexId,
    /// Second point.
    pub b: VertexId,
    /// Third point.
    pub c: VertexId,
    /// Number of people located inside.
    #[serde(default)]
    pub occupancy: usize,
    /// Occupancy classification.
    #[serde(default)]
    pub density: DensityClass,
}

impl Triangle {
    pub fn key(&self) -> TriangleKey {
        TriangleKey::new(self.a, self.b, self.c)
    }

    pub fn vertices(&self) -> [VertexId; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three sides of this triangle.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.a == id || self.b == id || self.c == id
    }
}

impl From<[VertexId; 3]> for Triangle {
    fn from([a, b, c]: [VertexId; 3]) -> Self {
        Self {
            a,
            b,
            c,
            occupancy: 0,
            density: DensityClass::default(),
        }
    }
}

impl From<TriangleKey> for Triangle {
    fn from(key: TriangleKey) -> Self {
        key.vertices().into()
    }
}

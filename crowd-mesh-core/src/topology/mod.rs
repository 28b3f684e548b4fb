pub mod obstacle;

use crate::{
    coord::Coord,
    geometry::{
        orientation, point_in_closed_convex_polygon, point_in_convex_polygon,
        segment_passes_through_convex_polygon, segments_cross,
    },
    layout::MeshLayout,
    mesh::{containment::ObstacleContainment, error::MeshError},
    topology::obstacle::Obstacle,
    triangle::{Triangle, TriangleKey},
    Scalar, BBOX_POINT_COUNT,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Stable vertex identifier. Never reused by the store that issued it.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable person identifier. Never reused by the store that issued it.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PersonId(pub usize);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a vertex belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexRole {
    /// Outer boundary corner.
    Boundary,
    /// Free point inside the boundary.
    Interior,
    /// Obstacle corner.
    Obstacle,
}

/// Mesh vertex.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Coord,
    /// Fixed vertices cannot be relocated by user edits.
    pub fixed: bool,
    pub role: VertexRole,
}

/// Undirected edge, endpoints are kept in ascending order so `(a, b) == (b, a)`.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// assert_eq!(Edge::new(VertexId(3), VertexId(1)), Edge::new(VertexId(1), VertexId(3)));
/// assert!(Edge::new(VertexId(1), VertexId(3)).shares_endpoint(Edge::new(VertexId(3), VertexId(4))));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    pub fn has_vertex(self, id: VertexId) -> bool {
        self.a == id || self.b == id
    }

    pub fn shares_endpoint(self, other: Self) -> bool {
        self.has_vertex(other.a) || self.has_vertex(other.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Person marker.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub position: Coord,
    /// Triangle containing this person, if any.
    pub triangle: Option<TriangleKey>,
}

/// Owner of every vertex, edge, triangle and person of a mesh.
///
/// Read access is public, mutation goes through [`crate::mesh::CrowdMesh`] which keeps the
/// derived data (triangles, person assignment, densities) consistent after each edit.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyStore {
    vertices: Vec<Vertex>,
    slots: HashMap<VertexId, usize>,
    boundary: [VertexId; BBOX_POINT_COUNT],
    obstacle: Obstacle,
    edges: Vec<Edge>,
    triangles: Vec<Triangle>,
    people: Vec<Person>,
    containment: ObstacleContainment,
    next_vertex_id: usize,
    next_person_id: usize,
}

impl TopologyStore {
    /// Create new store from layout. Edges and triangles start empty.
    ///
    /// # Arguments
    /// * `layout` - Initial configuration.
    /// * `containment` - Obstacle containment test.
    ///
    /// # Returns
    /// Store or error describing why layout is invalid.
    pub fn new(layout: &MeshLayout, containment: ObstacleContainment) -> Result<Self, MeshError> {
        Self::build(layout, containment, 0, 0)
    }

    /// Replace whole content with fresh configuration. Ids continue from the current counters.
    /// On error the store is left untouched.
    pub fn reset(&mut self, layout: &MeshLayout) -> Result<(), MeshError> {
        *self = Self::build(
            layout,
            self.containment,
            self.next_vertex_id,
            self.next_person_id,
        )?;
        Ok(())
    }

    fn build(
        layout: &MeshLayout,
        containment: ObstacleContainment,
        first_vertex_id: usize,
        first_person_id: usize,
    ) -> Result<Self, MeshError> {
        if layout.boundary.len() != BBOX_POINT_COUNT {
            return Err(MeshError::BoundaryPointCount(layout.boundary.len()));
        }
        let corners = [
            layout.boundary[0],
            layout.boundary[1],
            layout.boundary[2],
            layout.boundary[3],
        ];
        let turns = (0..BBOX_POINT_COUNT)
            .map(|i| orientation(corners[i], corners[(i + 1) % 4], corners[(i + 2) % 4]))
            .collect::<Vec<_>>();
        let convex = turns.iter().all(|t| *t > 0.0) || turns.iter().all(|t| *t < 0.0);
        if !convex {
            return Err(MeshError::DegenerateBoundary);
        }
        let shape = layout.obstacle;
        if !(shape.width > 0.0 && shape.height > 0.0) {
            return Err(MeshError::InvalidObstacleSize {
                width: shape.width,
                height: shape.height,
            });
        }
        let obstacle_corners = shape.corners(0.0, 1.0);
        if obstacle_corners
            .iter()
            .any(|c| !point_in_convex_polygon(*c, &corners))
        {
            return Err(MeshError::ObstacleOutsideBoundary);
        }
        for (i, p) in layout.interior.iter().enumerate() {
            if !point_in_convex_polygon(*p, &corners) {
                return Err(MeshError::InteriorPointOutsideBoundary(i));
            }
            if containment.contains(&obstacle_corners, *p) {
                return Err(MeshError::InteriorPointInsideObstacle(i));
            }
        }
        for (i, p) in layout.people.iter().enumerate() {
            if !point_in_closed_convex_polygon(*p, &corners) {
                return Err(MeshError::PersonOutsideBoundary(i));
            }
            if containment.contains(&obstacle_corners, *p) {
                return Err(MeshError::PersonInsideObstacle(i));
            }
        }

        let mut next_vertex_id = first_vertex_id;
        let mut vertices = Vec::with_capacity(BBOX_POINT_COUNT + layout.interior.len() + 4);
        let mut push = |position: Coord, role: VertexRole| {
            let id = VertexId(next_vertex_id);
            next_vertex_id += 1;
            vertices.push(Vertex {
                id,
                position,
                fixed: role != VertexRole::Interior,
                role,
            });
            id
        };
        let boundary = corners.map(|c| push(c, VertexRole::Boundary));
        for p in &layout.interior {
            push(*p, VertexRole::Interior);
        }
        let obstacle_ids = obstacle_corners.map(|c| push(c, VertexRole::Obstacle));
        let slots = vertices
            .iter()
            .enumerate()
            .map(|(slot, v)| (v.id, slot))
            .collect::<HashMap<_, _>>();

        let mut next_person_id = first_person_id;
        let people = layout
            .people
            .iter()
            .map(|p| {
                let id = PersonId(next_person_id);
                next_person_id += 1;
                Person {
                    id,
                    position: *p,
                    triangle: None,
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            vertices,
            slots,
            boundary,
            obstacle: Obstacle::new(obstacle_ids, shape),
            edges: vec![],
            triangles: vec![],
            people,
            containment,
            next_vertex_id,
            next_person_id,
        })
    }

    /// Vertices in storage order (ascending id).
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(&id).map(|slot| &self.vertices[*slot])
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Returns ids of vertices with given role, in storage order.
    pub fn vertices_with_role(&self, role: VertexRole) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|v| v.role == role)
            .map(|v| v.id)
            .collect()
    }

    /// Position of a live vertex.
    ///
    /// # Panics
    /// When `id` was not issued by this store.
    pub fn position(&self, id: VertexId) -> Coord {
        self.vertices[self.slots[&id]].position
    }

    /// Boundary corner ids in loop order.
    pub fn boundary(&self) -> [VertexId; BBOX_POINT_COUNT] {
        self.boundary
    }

    pub fn boundary_corners(&self) -> [Coord; BBOX_POINT_COUNT] {
        self.boundary.map(|id| self.position(id))
    }

    pub fn boundary_edges(&self) -> [Edge; BBOX_POINT_COUNT] {
        let v = self.boundary;
        [
            Edge::new(v[0], v[1]),
            Edge::new(v[1], v[2]),
            Edge::new(v[2], v[3]),
            Edge::new(v[3], v[0]),
        ]
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn obstacle_corners(&self) -> [Coord; 4] {
        self.obstacle.vertices().map(|id| self.position(id))
    }

    pub fn containment(&self) -> ObstacleContainment {
        self.containment
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    pub fn is_boundary_edge(&self, edge: Edge) -> bool {
        self.boundary_edges().contains(&edge)
    }

    pub fn is_obstacle_edge(&self, edge: Edge) -> bool {
        self.obstacle.has_edge(edge)
    }

    /// Tells if edge must always exist (boundary or obstacle loop).
    pub fn is_constraint_edge(&self, edge: Edge) -> bool {
        self.is_boundary_edge(edge) || self.is_obstacle_edge(edge)
    }

    /// Boundary loop followed by obstacle loop.
    pub fn constraint_edges(&self) -> Vec<Edge> {
        self.boundary_edges()
            .into_iter()
            .chain(self.obstacle.edges())
            .collect()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle(&self, key: TriangleKey) -> Option<&Triangle> {
        self.triangles.iter().find(|t| t.key() == key)
    }

    pub fn triangle_corners(&self, key: TriangleKey) -> [Coord; 3] {
        key.vertices().map(|id| self.position(id))
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Length of an edge.
    pub fn edge_length(&self, edge: Edge) -> Scalar {
        self.position(edge.a).distance(self.position(edge.b))
    }

    /// Tells if two edges properly cross. Edges sharing an endpoint never cross.
    pub fn edges_cross(&self, first: Edge, second: Edge) -> bool {
        if first.shares_endpoint(second) {
            return false;
        }
        segments_cross(
            self.position(first.a),
            self.position(first.b),
            self.position(second.a),
            self.position(second.b),
        )
    }

    /// Returns first edge from `edges` crossed by `edge`.
    pub fn first_crossing<'a>(
        &self,
        edge: Edge,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Option<Edge> {
        edges
            .into_iter()
            .find(|other| self.edges_cross(edge, **other))
            .copied()
    }

    /// Tells if straight line between two vertices crosses no obstacle edge.
    pub fn line_of_sight(&self, edge: Edge) -> bool {
        self.first_crossing(edge, &self.obstacle.edges()).is_none()
    }

    /// Tells if edge would run through the obstacle: it crosses an obstacle edge, joins two
    /// opposite obstacle corners or enters the obstacle interior through its corners.
    pub fn blocked_by_obstacle(&self, edge: Edge) -> bool {
        if self.obstacle.has_edge(edge) {
            return false;
        }
        self.obstacle.is_diagonal(edge)
            || !self.line_of_sight(edge)
            || segment_passes_through_convex_polygon(
                self.position(edge.a),
                self.position(edge.b),
                &self.obstacle_corners(),
            )
    }

    /// Tells if point lies inside the obstacle, according to the configured containment test.
    pub fn is_inside_obstacle(&self, point: Coord) -> bool {
        self.containment.contains(&self.obstacle_corners(), point)
    }

    /// Tells if point lies inside the outer boundary or on it.
    pub fn is_inside_boundary(&self, point: Coord) -> bool {
        point_in_closed_convex_polygon(point, &self.boundary_corners())
    }

    pub(crate) fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub(crate) fn remove_edge(&mut self, edge: Edge) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| *e != edge);
        before != self.edges.len()
    }

    pub(crate) fn set_triangles(&mut self, triangles: Vec<Triangle>) {
        self.triangles = triangles;
    }

    pub(crate) fn triangles_mut(&mut self) -> &mut [Triangle] {
        &mut self.triangles
    }

    pub(crate) fn set_position(&mut self, id: VertexId, position: Coord) {
        if let Some(slot) = self.slots.get(&id) {
            self.vertices[*slot].position = position;
        }
    }

    /// Apply new obstacle pose and move its corner vertices accordingly.
    pub(crate) fn set_obstacle_pose(&mut self, rotation_degrees: Scalar, scale_factor: Scalar) {
        self.obstacle.rotation_degrees = rotation_degrees;
        self.obstacle.scale_factor = scale_factor;
        let corners = self.obstacle.corners();
        for (id, position) in self.obstacle.vertices().into_iter().zip(corners) {
            self.set_position(id, position);
        }
    }

    pub(crate) fn people_mut(&mut self) -> &mut [Person] {
        &mut self.people
    }

    pub(crate) fn push_person(&mut self, position: Coord) -> PersonId {
        let id = PersonId(self.next_person_id);
        self.next_person_id += 1;
        self.people.push(Person {
            id,
            position,
            triangle: None,
        });
        id
    }

    /// Keep only people matching predicate, returns number of removed people.
    pub(crate) fn retain_people<F>(&mut self, f: F) -> usize
    where
        F: FnMut(&Person) -> bool,
    {
        let before = self.people.len();
        self.people.retain(f);
        before - self.people.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::obstacle::ObstacleShape;

    fn layout() -> MeshLayout {
        MeshLayout {
            boundary: vec![
                Coord::new(0.0, 0.0),
                Coord::new(100.0, 0.0),
                Coord::new(100.0, 100.0),
                Coord::new(0.0, 100.0),
            ],
            obstacle: ObstacleShape::new(Coord::new(50.0, 50.0), 20.0, 10.0),
            interior: vec![Coord::new(20.0, 20.0), Coord::new(80.0, 80.0)],
            people: vec![Coord::new(10.0, 90.0)],
        }
    }

    #[test]
    fn test_build_assigns_roles_and_ids() {
        let store = TopologyStore::new(&layout(), ObstacleContainment::Exact).unwrap();
        assert_eq!(store.vertices().len(), 10);
        assert_eq!(
            store.boundary(),
            [VertexId(0), VertexId(1), VertexId(2), VertexId(3)]
        );
        assert_eq!(
            store.vertices_with_role(VertexRole::Interior),
            vec![VertexId(4), VertexId(5)]
        );
        assert_eq!(
            store.obstacle().vertices(),
            [VertexId(6), VertexId(7), VertexId(8), VertexId(9)]
        );
        assert!(store.vertex(VertexId(0)).unwrap().fixed);
        assert!(!store.vertex(VertexId(4)).unwrap().fixed);
        assert!(store.vertex(VertexId(6)).unwrap().fixed);
        assert_eq!(store.people()[0].id, PersonId(0));
    }

    #[test]
    fn test_reset_never_reuses_ids() {
        let mut store = TopologyStore::new(&layout(), ObstacleContainment::Exact).unwrap();
        store.reset(&layout()).unwrap();
        assert_eq!(store.boundary()[0], VertexId(10));
        assert!(!store.contains_vertex(VertexId(0)));
        assert_eq!(store.people()[0].id, PersonId(1));
    }

    #[test]
    fn test_failed_reset_keeps_state() {
        let mut store = TopologyStore::new(&layout(), ObstacleContainment::Exact).unwrap();
        let before = store.clone();
        let mut broken = layout();
        broken.boundary.pop();
        assert_eq!(store.reset(&broken), Err(MeshError::BoundaryPointCount(3)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_invalid_layouts() {
        let mut l = layout();
        l.boundary[2] = Coord::new(50.0, 0.0);
        assert_eq!(
            TopologyStore::new(&l, ObstacleContainment::Exact),
            Err(MeshError::DegenerateBoundary)
        );
        let mut l = layout();
        l.interior.push(Coord::new(52.0, 51.0));
        assert_eq!(
            TopologyStore::new(&l, ObstacleContainment::Exact),
            Err(MeshError::InteriorPointInsideObstacle(2))
        );
        let mut l = layout();
        l.interior.push(Coord::new(120.0, 51.0));
        assert_eq!(
            TopologyStore::new(&l, ObstacleContainment::Exact),
            Err(MeshError::InteriorPointOutsideBoundary(2))
        );
        let mut l = layout();
        l.obstacle.center = Coord::new(95.0, 50.0);
        assert_eq!(
            TopologyStore::new(&l, ObstacleContainment::Exact),
            Err(MeshError::ObstacleOutsideBoundary)
        );
        let mut l = layout();
        l.obstacle.width = 0.0;
        assert!(matches!(
            TopologyStore::new(&l, ObstacleContainment::Exact),
            Err(MeshError::InvalidObstacleSize { .. })
        ));
        let mut l = layout();
        l.people.push(Coord::new(50.0, 50.0));
        assert_eq!(
            TopologyStore::new(&l, ObstacleContainment::Exact),
            Err(MeshError::PersonInsideObstacle(1))
        );
    }

    #[test]
    fn test_obstacle_blocking() {
        let store = TopologyStore::new(&layout(), ObstacleContainment::Exact).unwrap();
        let [o0, o1, o2, _] = store.obstacle().vertices();
        // through the obstacle from corner to corner
        assert!(store.blocked_by_obstacle(Edge::new(VertexId(0), VertexId(2))));
        assert!(store.blocked_by_obstacle(Edge::new(o0, o2)));
        assert!(!store.blocked_by_obstacle(Edge::new(o0, o1)));
        assert!(!store.blocked_by_obstacle(Edge::new(VertexId(0), VertexId(1))));
        assert!(store.is_inside_obstacle(Coord::new(50.0, 50.0)));
        assert!(!store.is_inside_obstacle(Coord::new(60.0, 50.0)));
        assert!(store.is_inside_boundary(Coord::new(100.0, 50.0)));
        assert!(!store.is_inside_boundary(Coord::new(100.5, 50.0)));
    }

    #[test]
    fn test_edge_through_opposite_obstacle_corners_is_blocked() {
        let mut l = layout();
        // collinear with the obstacle diagonal from (40, 45) to (60, 55)
        l.interior = vec![Coord::new(20.0, 35.0), Coord::new(80.0, 65.0)];
        let store = TopologyStore::new(&l, ObstacleContainment::Exact).unwrap();
        let edge = Edge::new(VertexId(4), VertexId(5));
        assert!(store.line_of_sight(edge));
        assert!(!store.obstacle().is_diagonal(edge));
        assert!(store.blocked_by_obstacle(edge));

        let [o0, _, o2, _] = store.obstacle().vertices();
        // stops at a corner
        assert!(!store.blocked_by_obstacle(Edge::new(VertexId(4), o0)));
        assert!(!store.blocked_by_obstacle(Edge::new(o2, VertexId(5))));
    }
}

use crate::{
    coord::Coord,
    geometry::distance_point_to_segment,
    mesh::settings::CrowdMeshSettings,
    topology::{Edge, PersonId, TopologyStore, VertexId},
    Scalar,
};
use serde::{Deserialize, Serialize};

/// Mesh element under a pointer.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Vertex { id: VertexId },
    Person { id: PersonId },
    Edge { edge: Edge },
    Obstacle,
    Nothing,
}

impl Selection {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

/// Find element under point. Vertices win over people, people over edges and edges over the
/// obstacle interior.
///
/// # Arguments
/// * `store` - Topology store.
/// * `settings` - Settings providing picking radii.
/// * `point` - Pointer position.
pub fn pick(store: &TopologyStore, settings: &CrowdMeshSettings, point: Coord) -> Selection {
    if let Some(id) = closest_vertex(store, point, settings.vertex_pick_radius) {
        Selection::Vertex { id }
    } else if let Some(id) = closest_person(store, point, settings.person_pick_radius) {
        Selection::Person { id }
    } else if let Some(edge) = closest_edge(store, point, settings.edge_pick_radius) {
        Selection::Edge { edge }
    } else if store.is_inside_obstacle(point) {
        Selection::Obstacle
    } else {
        Selection::Nothing
    }
}

/// Closest vertex within radius.
pub fn closest_vertex(store: &TopologyStore, point: Coord, radius: Scalar) -> Option<VertexId> {
    closest(
        store
            .vertices()
            .iter()
            .map(|v| (v.id, v.position.distance(point))),
        radius,
    )
}

/// Closest person within radius.
pub fn closest_person(store: &TopologyStore, point: Coord, radius: Scalar) -> Option<PersonId> {
    closest(
        store
            .people()
            .iter()
            .map(|p| (p.id, p.position.distance(point))),
        radius,
    )
}

/// Closest edge within radius, measured to the segment.
pub fn closest_edge(store: &TopologyStore, point: Coord, radius: Scalar) -> Option<Edge> {
    closest(
        store.edges().iter().map(|e| {
            let distance =
                distance_point_to_segment(point, store.position(e.a), store.position(e.b));
            (*e, distance)
        }),
        radius,
    )
}

fn closest<T>(items: impl Iterator<Item = (T, Scalar)>, radius: Scalar) -> Option<T> {
    items
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}

use crate::{
    geometry::{orientation, point_in_triangle},
    topology::{Edge, TopologyStore},
    triangle::{Triangle, TriangleKey},
};
use std::collections::HashSet;

/// Result of a triangulation pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Triangulation {
    /// Accepted triangles in enumeration order.
    pub triangles: Vec<Triangle>,
    /// Store edges followed by every edge synthesized for accepted triangles.
    pub edges: Vec<Edge>,
}

/// Enumerate every vertex triple and keep the ones forming an empty triangle.
///
/// Triples are visited in ascending storage order. A triple is accepted when it is not
/// collinear, uses no banned edge, contains no other vertex (closed test) and each of its
/// missing sides neither runs through the obstacle nor crosses an edge collected so far.
/// Missing sides of accepted triangles are collected, so later triples see them.
///
/// # Arguments
/// * `store` - Topology store with current vertices and edges.
/// * `banned` - Edges that cannot be synthesized in this pass.
///
/// # Returns
/// Triangles and the edge set they are built from.
pub fn triangulate(store: &TopologyStore, banned: &HashSet<Edge>) -> Triangulation {
    let vertices = store.vertices();
    let mut edges = store.edges().to_vec();
    let mut known = edges.iter().copied().collect::<HashSet<_>>();
    let mut triangles = vec![];
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            for k in (j + 1)..vertices.len() {
                let (a, b, c) = (&vertices[i], &vertices[j], &vertices[k]);
                if orientation(a.position, b.position, c.position) == 0.0 {
                    continue;
                }
                let sides = [
                    Edge::new(a.id, b.id),
                    Edge::new(b.id, c.id),
                    Edge::new(c.id, a.id),
                ];
                if sides.iter().any(|side| banned.contains(side)) {
                    continue;
                }
                let missing = sides
                    .iter()
                    .filter(|side| !known.contains(side))
                    .copied()
                    .collect::<Vec<_>>();
                let synthesizable = missing.iter().all(|side| {
                    !store.blocked_by_obstacle(*side)
                        && store.first_crossing(*side, &edges).is_none()
                });
                if !synthesizable {
                    continue;
                }
                let occupied = vertices.iter().enumerate().any(|(index, v)| {
                    index != i
                        && index != j
                        && index != k
                        && point_in_triangle(v.position, a.position, b.position, c.position)
                });
                if occupied {
                    continue;
                }
                for side in missing {
                    known.insert(side);
                    edges.push(side);
                }
                triangles.push(TriangleKey::new(a.id, b.id, c.id).into());
            }
        }
    }
    Triangulation { triangles, edges }
}

use crate::{
    topology::{Edge, TopologyStore, VertexId, VertexRole},
    Scalar,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Generate edge set from scratch.
///
/// Constraint edges (boundary loop, then obstacle loop) come first. Then candidates between
/// boundary and interior, interior and interior, obstacle and interior vertices are accepted
/// shortest first, as long as they do not run through the obstacle and do not cross anything
/// accepted before them. An obstacle corner takes at most `max_obstacle_connections` candidates.
///
/// # Arguments
/// * `store` - Topology store with current vertex positions.
/// * `max_obstacle_connections` - Limit of generated connections per obstacle corner.
///
/// # Returns
/// Crossing-free list of edges.
pub fn generate_edges(store: &TopologyStore, max_obstacle_connections: usize) -> Vec<Edge> {
    let boundary = store.boundary();
    let interior = store.vertices_with_role(VertexRole::Interior);
    let obstacle = store.obstacle().vertices();

    // (edge, obstacle corner it starts from)
    let mut candidates = boundary
        .iter()
        .flat_map(|b| interior.iter().map(move |i| (Edge::new(*b, *i), None)))
        .collect::<Vec<(Edge, Option<VertexId>)>>();
    for (index, a) in interior.iter().enumerate() {
        for b in &interior[(index + 1)..] {
            candidates.push((Edge::new(*a, *b), None));
        }
    }
    for o in &obstacle {
        for i in &interior {
            candidates.push((Edge::new(*o, *i), Some(*o)));
        }
    }

    let mut candidates = into_iter!(candidates)
        .map(|(edge, corner)| (edge, corner, store.edge_length(edge)))
        .collect::<Vec<(Edge, Option<VertexId>, Scalar)>>();
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut accepted = store.constraint_edges();
    let mut connections = HashMap::<VertexId, usize>::with_capacity(obstacle.len());
    for (edge, corner, _) in candidates {
        if store.blocked_by_obstacle(edge) || store.first_crossing(edge, &accepted).is_some() {
            continue;
        }
        if let Some(corner) = corner {
            let count = connections.entry(corner).or_default();
            if *count >= max_obstacle_connections || !store.line_of_sight(edge) {
                continue;
            }
            *count += 1;
        }
        accepted.push(edge);
    }
    accepted
}

/// Remove edges until no two of them cross.
///
/// Each round finds the first crossing pair and drops the longer edge of it. Constraint edges
/// are never dropped, when one takes part in a crossing the other edge goes instead.
///
/// # Arguments
/// * `store` - Topology store with current vertex positions.
/// * `edges` - Edges to clean up in place.
///
/// # Returns
/// Number of removed edges.
pub fn resolve_crossing_edges(store: &TopologyStore, edges: &mut Vec<Edge>) -> usize {
    let mut removed = 0;
    while let Some(index) = find_crossing_victim(store, edges) {
        let edge = edges.remove(index);
        tracing::debug!(%edge, "removed crossing edge");
        removed += 1;
    }
    removed
}

fn find_crossing_victim(store: &TopologyStore, edges: &[Edge]) -> Option<usize> {
    for (i, first) in edges.iter().enumerate() {
        for (j, second) in edges.iter().enumerate().skip(i + 1) {
            if !store.edges_cross(*first, *second) {
                continue;
            }
            match (
                store.is_constraint_edge(*first),
                store.is_constraint_edge(*second),
            ) {
                (true, true) => continue,
                (true, false) => return Some(j),
                (false, true) => return Some(i),
                (false, false) => {
                    return if store.edge_length(*first) >= store.edge_length(*second) {
                        Some(i)
                    } else {
                        Some(j)
                    };
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        coord::Coord, layout::MeshLayout, mesh::containment::ObstacleContainment,
        topology::obstacle::ObstacleShape,
    };

    fn store(interior: Vec<Coord>) -> TopologyStore {
        let layout = MeshLayout {
            boundary: vec![
                Coord::new(0.0, 0.0),
                Coord::new(200.0, 0.0),
                Coord::new(200.0, 200.0),
                Coord::new(0.0, 200.0),
            ],
            obstacle: ObstacleShape::new(Coord::new(100.0, 100.0), 40.0, 20.0),
            interior,
            people: vec![],
        };
        TopologyStore::new(&layout, ObstacleContainment::Exact).unwrap()
    }

    fn assert_crossing_free(store: &TopologyStore, edges: &[Edge]) {
        for (i, first) in edges.iter().enumerate() {
            for second in &edges[(i + 1)..] {
                assert!(
                    !store.edges_cross(*first, *second),
                    "{} crosses {}",
                    first,
                    second
                );
            }
        }
    }

    #[test]
    fn test_generated_edges_start_with_constraints() {
        let store = store(vec![Coord::new(30.0, 30.0), Coord::new(170.0, 170.0)]);
        let edges = generate_edges(&store, 3);
        assert_eq!(&edges[..8], store.constraint_edges().as_slice());
        assert!(edges.len() > 8);
    }

    #[test]
    fn test_generated_edges_respect_obstacle() {
        let store = store(vec![
            Coord::new(30.0, 100.0),
            Coord::new(170.0, 100.0),
            Coord::new(100.0, 30.0),
            Coord::new(100.0, 170.0),
            Coord::new(40.0, 40.0),
        ]);
        let edges = generate_edges(&store, 3);
        assert_crossing_free(&store, &edges);
        for edge in &edges {
            assert!(!store.blocked_by_obstacle(*edge), "{} is blocked", edge);
            assert_eq!(edges.iter().filter(|e| *e == edge).count(), 1);
        }
        for corner in store.obstacle().vertices() {
            let generated = edges
                .iter()
                .filter(|e| e.has_vertex(corner) && !store.is_obstacle_edge(**e))
                .count();
            assert!(generated <= 3);
        }
        // both points straight across the obstacle cannot see each other
        let across = Edge::new(VertexId(4), VertexId(5));
        assert!(!edges.contains(&across));
    }

    #[test]
    fn test_obstacle_connection_limit() {
        let store = store(vec![
            Coord::new(60.0, 60.0),
            Coord::new(70.0, 50.0),
            Coord::new(50.0, 70.0),
            Coord::new(45.0, 45.0),
        ]);
        let edges = generate_edges(&store, 0);
        for corner in store.obstacle().vertices() {
            assert!(edges
                .iter()
                .filter(|e| e.has_vertex(corner))
                .all(|e| store.is_obstacle_edge(*e)));
        }
    }

    #[test]
    fn test_resolve_crossing_edges_removes_longer_edge() {
        let store = store(vec![
            Coord::new(20.0, 20.0),
            Coord::new(60.0, 60.0),
            Coord::new(20.0, 50.0),
            Coord::new(50.0, 20.0),
        ]);
        let long = Edge::new(VertexId(4), VertexId(5));
        let short = Edge::new(VertexId(6), VertexId(7));
        let mut edges = store.constraint_edges();
        edges.push(long);
        edges.push(short);
        assert_eq!(resolve_crossing_edges(&store, &mut edges), 1);
        assert!(edges.contains(&short));
        assert!(!edges.contains(&long));
    }

    #[test]
    fn test_resolve_crossing_edges_reaches_fixed_point() {
        // three mutually crossing edges plus one crossing an obstacle edge
        let store = store(vec![
            Coord::new(20.0, 40.0),
            Coord::new(60.0, 40.0),
            Coord::new(40.0, 20.0),
            Coord::new(40.0, 60.0),
            Coord::new(25.0, 25.0),
            Coord::new(55.0, 55.0),
            Coord::new(100.0, 80.0),
            Coord::new(100.0, 120.0),
        ]);
        let id = |i: usize| VertexId(i + 4);
        let mut edges = store.constraint_edges();
        edges.push(Edge::new(id(0), id(1)));
        edges.push(Edge::new(id(2), id(3)));
        edges.push(Edge::new(id(4), id(5)));
        edges.push(Edge::new(id(6), id(7)));
        let removed = resolve_crossing_edges(&store, &mut edges);
        assert_eq!(removed, 3);
        assert_crossing_free(&store, &edges);
        assert!(store
            .constraint_edges()
            .iter()
            .all(|constraint| edges.contains(constraint)));
    }
}

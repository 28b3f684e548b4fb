use crowd_mesh_core::prelude::*;

/// Canvas layout used by the scenarios: 800x600 canvas, padding 40, centered 100x70 obstacle.
pub fn canvas_layout(interior: &[(Scalar, Scalar)], people: &[(Scalar, Scalar)]) -> MeshLayout {
    let mut layout = MeshLayout::rectangle(
        Coord::new(40.0, 40.0),
        Coord::new(760.0, 560.0),
        ObstacleShape::new(Coord::new(400.0, 300.0), 100.0, 70.0),
    );
    layout.interior = interior.iter().map(|p| Coord::from(*p)).collect();
    layout.people = people.iter().map(|p| Coord::from(*p)).collect();
    layout
}

pub fn seeded(seed: u64) -> CrowdMeshSettings {
    CrowdMeshSettings {
        seed: Some(seed),
        ..Default::default()
    }
}

/// Checks every property that must hold between edits.
pub fn assert_stable(mesh: &CrowdMesh) {
    let store = mesh.store();
    let edges = store.edges();
    for (i, first) in edges.iter().enumerate() {
        assert_ne!(first.a, first.b, "self loop");
        for second in &edges[(i + 1)..] {
            assert_ne!(first, second, "duplicate edge {}", first);
            assert!(
                !store.edges_cross(*first, *second),
                "{} crosses {}",
                first,
                second
            );
        }
        assert!(
            !store.blocked_by_obstacle(*first),
            "{} runs through obstacle",
            first
        );
        if !store.obstacle().has_edge(*first) {
            let (from, to) = (store.position(first.a), store.position(first.b));
            let corners = store.obstacle_corners();
            for step in 1..64 {
                let point = from.lerp(to, step as Scalar / 64.0);
                assert!(
                    !point_in_convex_polygon(point, &corners),
                    "{} enters obstacle at {:?}",
                    first,
                    point
                );
            }
        }
    }
    for constraint in store.constraint_edges() {
        assert!(store.has_edge(constraint), "missing constraint {}", constraint);
    }

    for vertex in store.vertices() {
        assert!(
            !store.is_inside_obstacle(vertex.position),
            "vertex {} inside obstacle",
            vertex.id
        );
    }
    for person in store.people() {
        assert!(
            !store.is_inside_obstacle(person.position),
            "person {} inside obstacle",
            person.id
        );
    }

    for triangle in store.triangles() {
        for side in triangle.edges() {
            assert!(store.has_edge(side), "triangle side {} missing", side);
        }
        let [a, b, c] = store.triangle_corners(triangle.key());
        for vertex in store.vertices() {
            if !triangle.has_vertex(vertex.id) {
                assert!(
                    !point_in_triangle(vertex.position, a, b, c),
                    "vertex {} inside triangle {:?}",
                    vertex.id,
                    triangle.key()
                );
            }
        }
    }

    for person in store.people() {
        if let Some(key) = person.triangle {
            assert!(store.triangle(key).is_some());
            let [a, b, c] = store.triangle_corners(key);
            assert!(point_in_triangle(person.position, a, b, c));
        }
        assert_eq!(person.triangle, mesh.locate_containing_triangle(person.position));
    }

    let target = mesh.target_density();
    for triangle in store.triangles() {
        let count = store
            .people()
            .iter()
            .filter(|p| p.triangle == Some(triangle.key()))
            .count();
        assert_eq!(triangle.occupancy, count);
        assert_eq!(triangle.density, DensityClass::classify(count, target));
    }
}

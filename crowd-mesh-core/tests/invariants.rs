mod common;

use common::assert_stable;
use crowd_mesh_core::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    AddEdge(usize, usize),
    RemoveEdge(usize),
    MoveVertex(usize, Scalar, Scalar),
    Rotate(Scalar),
    Scale(Scalar),
    AddPerson(Scalar, Scalar),
    MovePerson(usize, Scalar, Scalar),
    RemovePerson(usize),
    AddRandomPerson,
    SetTarget(usize),
}

fn any_edit() -> impl Strategy<Value = Edit> {
    let fraction = || 0.0..1.0f64;
    prop_oneof![
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Edit::AddEdge(a, b)),
        any::<usize>().prop_map(Edit::RemoveEdge),
        (any::<usize>(), fraction(), fraction()).prop_map(|(i, x, y)| Edit::MoveVertex(i, x, y)),
        (-90.0..90.0f64).prop_map(Edit::Rotate),
        (-0.3..0.3f64).prop_map(Edit::Scale),
        (fraction(), fraction()).prop_map(|(x, y)| Edit::AddPerson(x, y)),
        (any::<usize>(), fraction(), fraction()).prop_map(|(i, x, y)| Edit::MovePerson(i, x, y)),
        any::<usize>().prop_map(Edit::RemovePerson),
        Just(Edit::AddRandomPerson),
        (0..8usize).prop_map(Edit::SetTarget),
    ]
}

fn canvas_point(mesh: &CrowdMesh, x: Scalar, y: Scalar) -> Coord {
    let settings = mesh.settings();
    Coord::new(x * settings.canvas_width, y * settings.canvas_height)
}

/// Applies edit, returns whether it was accepted.
fn apply(mesh: &mut CrowdMesh, edit: &Edit) -> bool {
    let vertices = mesh
        .store()
        .vertices()
        .iter()
        .map(|v| v.id)
        .collect::<Vec<_>>();
    let people = mesh
        .store()
        .people()
        .iter()
        .map(|p| p.id)
        .collect::<Vec<_>>();
    match *edit {
        Edit::AddEdge(a, b) => mesh
            .add_edge(vertices[a % vertices.len()], vertices[b % vertices.len()])
            .is_ok(),
        Edit::RemoveEdge(i) => {
            let edge = mesh.store().edges()[i % mesh.store().edges().len()];
            mesh.remove_edge(edge.a, edge.b).is_ok()
        }
        Edit::MoveVertex(i, x, y) => {
            let position = canvas_point(mesh, x, y);
            mesh.move_vertex(vertices[i % vertices.len()], position).is_ok()
        }
        Edit::Rotate(degrees) => mesh.rotate_obstacle(degrees).is_ok(),
        Edit::Scale(delta) => mesh.scale_obstacle(delta).is_ok(),
        Edit::AddPerson(x, y) => {
            let position = canvas_point(mesh, x, y);
            mesh.add_person(position).is_ok()
        }
        Edit::MovePerson(i, x, y) if !people.is_empty() => {
            let position = canvas_point(mesh, x, y);
            mesh.move_person(people[i % people.len()], position).is_ok()
        }
        Edit::RemovePerson(i) if !people.is_empty() => {
            mesh.remove_person(people[i % people.len()]).is_ok()
        }
        Edit::MovePerson(..) | Edit::RemovePerson(..) => false,
        Edit::AddRandomPerson => mesh.add_random_person().is_ok(),
        Edit::SetTarget(target) => {
            mesh.set_target_density(target);
            true
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn edits_keep_mesh_consistent(
        seed in 0..1000u64,
        edits in prop::collection::vec(any_edit(), 1..12),
    ) {
        let settings = CrowdMeshSettings {
            inner_point_count: 6,
            initial_people_count: 8,
            seed: Some(seed),
            ..Default::default()
        };
        let mut mesh = CrowdMesh::random(settings).unwrap();
        assert_stable(&mesh);
        for edit in &edits {
            let before = mesh.store().clone();
            let accepted = apply(&mut mesh, edit);
            if !accepted {
                prop_assert_eq!(mesh.store(), &before, "rejected {:?} changed the mesh", edit);
            }
            assert_stable(&mesh);

            let mut refreshed = mesh.clone();
            refreshed.refresh_densities();
            prop_assert_eq!(refreshed.store(), mesh.store());
        }
    }

    #[test]
    fn rejected_scale_keeps_pose(seed in 0..1000u64, delta in 0.6..2.0f64) {
        let mut mesh = CrowdMesh::random(common::seeded(seed)).unwrap();
        let before = mesh.store().clone();
        let result = mesh.scale_obstacle(delta);
        let is_out_of_range = matches!(result, Err(TransformRejected::ScaleOutOfRange { .. }));
        prop_assert!(is_out_of_range);
        prop_assert_eq!(mesh.store(), &before);
        prop_assert_eq!(mesh.store().obstacle().scale_factor(), 1.0);
    }
}

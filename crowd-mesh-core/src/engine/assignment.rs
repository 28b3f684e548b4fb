use crate::{
    coord::Coord,
    density::DensityClass,
    geometry::point_in_triangle,
    topology::TopologyStore,
    triangle::{Triangle, TriangleKey},
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Find first triangle (in list order) containing point, boundary included.
pub fn locate_containing_triangle(store: &TopologyStore, point: Coord) -> Option<TriangleKey> {
    store
        .triangles()
        .iter()
        .find(|t| {
            point_in_triangle(
                point,
                store.position(t.a),
                store.position(t.b),
                store.position(t.c),
            )
        })
        .map(Triangle::key)
}

/// Recompute containing triangle of every person.
///
/// Lookups run in parallel with the `parallel` feature, results are written back at once.
pub fn assign_people(store: &mut TopologyStore) {
    let shared: &TopologyStore = store;
    let located = into_iter!(shared.people())
        .map(|person| locate_containing_triangle(shared, person.position))
        .collect::<Vec<_>>();
    for (person, triangle) in store.people_mut().iter_mut().zip(located) {
        person.triangle = triangle;
    }
}

/// Recompute occupancy and density class of every triangle from current person assignment.
///
/// # Arguments
/// * `store` - Topology store.
/// * `target` - Target density.
pub fn refresh_densities(store: &mut TopologyStore, target: usize) {
    let mut counts = HashMap::<TriangleKey, usize>::with_capacity(store.triangles().len());
    for key in store.people().iter().filter_map(|p| p.triangle) {
        *counts.entry(key).or_default() += 1;
    }
    for triangle in store.triangles_mut() {
        triangle.occupancy = counts.get(&triangle.key()).copied().unwrap_or(0);
        triangle.density = DensityClass::classify(triangle.occupancy, target);
    }
}

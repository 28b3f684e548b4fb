//! Derivation of edges, triangles and person assignment from the topology store.
//!
//! Every function here reads the store and either returns the derived data or commits it in a
//! single assignment, so no caller can observe a partially rebuilt mesh.

mod assignment;
mod edges;
mod triangulate;

pub use assignment::{assign_people, locate_containing_triangle, refresh_densities};
pub use edges::{generate_edges, resolve_crossing_edges};
pub use triangulate::{triangulate, Triangulation};

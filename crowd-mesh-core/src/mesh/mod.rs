pub mod containment;
pub mod error;
pub mod outcome;
pub mod settings;

use crate::{
    command::MeshCommand,
    coord::Coord,
    engine::{self, Triangulation},
    geometry::{bounds, distance_point_to_segment, point_in_convex_polygon},
    layout::{sample_in_bounds, MeshLayout, PLACEMENT_INSET},
    mesh::{
        error::{
            AddEdgeRejected, EditError, MeshError, MoveVertexRejected, PersonRejected,
            RemoveEdgeRejected, TransformRejected,
        },
        outcome::EditOutcome,
        settings::CrowdMeshSettings,
    },
    picking::{pick, Selection},
    snapshot::{DensityStats, MeshSnapshot},
    topology::{Edge, PersonId, TopologyStore, VertexId, VertexRole},
    triangle::TriangleKey,
    Scalar,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{collections::HashSet, fmt::Display};

/// Tolerance of obstacle scale range checks.
pub const SCALE_EPSILON: Scalar = 1e-9;

/// Editable crowd density mesh.
///
/// Every edit either fully applies and leaves the mesh re-derived (edges, triangles, person
/// assignment and densities), or gets rejected and leaves it untouched. Both cases update
/// the status line.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let settings = CrowdMeshSettings {
///     seed: Some(42),
///     ..Default::default()
/// };
/// let mut mesh = CrowdMesh::random(settings).unwrap();
/// assert_eq!(mesh.store().people().len(), 20);
/// let [b0, b1, _, _] = mesh.store().boundary();
/// assert_eq!(
///     mesh.remove_edge(b0, b1),
///     Err(RemoveEdgeRejected::BoundaryEdge),
/// );
/// assert_eq!(mesh.status(), "Cannot remove a boundary edge.");
/// ```
#[derive(Debug, Clone)]
pub struct CrowdMesh {
    store: TopologyStore,
    settings: CrowdMeshSettings,
    rng: StdRng,
    status: String,
}

impl CrowdMesh {
    /// Build mesh from explicit layout.
    ///
    /// # Arguments
    /// * `layout` - Initial configuration.
    /// * `settings` - Mesh settings.
    ///
    /// # Returns
    /// Triangulated mesh or error describing invalid layout or settings.
    pub fn new(layout: &MeshLayout, settings: CrowdMeshSettings) -> Result<Self, MeshError> {
        settings.validate()?;
        let store = TopologyStore::new(layout, settings.obstacle_containment)?;
        let rng = Self::make_rng(settings.seed);
        let mut result = Self {
            store,
            settings,
            rng,
            status: String::new(),
        };
        result.regenerate();
        result.status = "Simulation initialized.".to_owned();
        result.log_initialized();
        Ok(result)
    }

    /// Build mesh from random canvas layout and populate it with random people.
    ///
    /// # Arguments
    /// * `settings` - Mesh settings, canvas size, point counts and seed included.
    pub fn random(settings: CrowdMeshSettings) -> Result<Self, MeshError> {
        settings.validate()?;
        let mut rng = Self::make_rng(settings.seed);
        let layout = MeshLayout::canvas(&settings, &mut rng)?;
        let store = TopologyStore::new(&layout, settings.obstacle_containment)?;
        let mut result = Self {
            store,
            settings,
            rng,
            status: String::new(),
        };
        result.regenerate();
        result.populate()?;
        result.status = "Simulation initialized.".to_owned();
        result.log_initialized();
        Ok(result)
    }

    /// Replace mesh content with given layout. Ids continue where the previous mesh stopped.
    pub fn reset(&mut self, layout: &MeshLayout) -> Result<EditOutcome, MeshError> {
        self.store.reset(layout)?;
        self.regenerate();
        tracing::info!(vertices = self.store.vertices().len(), "mesh reset");
        Ok(self.settle_outcome(EditOutcome::Reset))
    }

    /// Replace mesh content with a new random canvas layout and random people.
    pub fn reset_random(&mut self) -> Result<EditOutcome, MeshError> {
        let mut next = self.clone();
        let layout = MeshLayout::canvas(&next.settings, &mut next.rng)?;
        next.store.reset(&layout)?;
        next.regenerate();
        next.populate()?;
        *self = next;
        tracing::info!(vertices = self.store.vertices().len(), "mesh reset");
        Ok(self.settle_outcome(EditOutcome::Reset))
    }

    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    pub fn settings(&self) -> &CrowdMeshSettings {
        &self.settings
    }

    /// Status line of the last edit.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn target_density(&self) -> usize {
        self.settings.target_density
    }

    /// Connect two vertices.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EditOutcome, AddEdgeRejected> {
        let result = self.try_add_edge(a, b);
        self.settle(result)
    }

    fn try_add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EditOutcome, AddEdgeRejected> {
        for id in [a, b] {
            if !self.store.contains_vertex(id) {
                return Err(AddEdgeRejected::UnknownVertex(id));
            }
        }
        if a == b {
            return Err(AddEdgeRejected::SameVertex);
        }
        let edge = Edge::new(a, b);
        if self.store.has_edge(edge) {
            return Err(AddEdgeRejected::AlreadyExists(edge));
        }
        if self.store.blocked_by_obstacle(edge) {
            return Err(AddEdgeRejected::CrossesObstacle);
        }
        if let Some(other) = self.store.first_crossing(edge, self.store.edges()) {
            return Err(AddEdgeRejected::CrossesEdge(other));
        }
        self.store.push_edge(edge);
        self.retriangulate(&HashSet::new());
        Ok(EditOutcome::EdgeAdded { edge })
    }

    /// Remove edge. The triangulation pass that follows may not bring it back.
    pub fn remove_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
    ) -> Result<EditOutcome, RemoveEdgeRejected> {
        let result = self.try_remove_edge(a, b);
        self.settle(result)
    }

    fn try_remove_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
    ) -> Result<EditOutcome, RemoveEdgeRejected> {
        for id in [a, b] {
            if !self.store.contains_vertex(id) {
                return Err(RemoveEdgeRejected::UnknownVertex(id));
            }
        }
        let edge = Edge::new(a, b);
        if self.store.is_boundary_edge(edge) {
            return Err(RemoveEdgeRejected::BoundaryEdge);
        }
        if self.store.is_obstacle_edge(edge) {
            return Err(RemoveEdgeRejected::ObstacleEdge);
        }
        if !self.store.remove_edge(edge) {
            return Err(RemoveEdgeRejected::NotFound(edge));
        }
        let banned = [edge].into_iter().collect::<HashSet<_>>();
        self.retriangulate(&banned);
        Ok(EditOutcome::EdgeRemoved { edge })
    }

    /// Move free vertex and rebuild all edges from scratch.
    pub fn move_vertex(
        &mut self,
        id: VertexId,
        position: Coord,
    ) -> Result<EditOutcome, MoveVertexRejected> {
        let result = self.try_move_vertex(id, position);
        self.settle(result)
    }

    fn try_move_vertex(
        &mut self,
        id: VertexId,
        position: Coord,
    ) -> Result<EditOutcome, MoveVertexRejected> {
        let vertex = self
            .store
            .vertex(id)
            .ok_or(MoveVertexRejected::UnknownVertex(id))?;
        if vertex.fixed {
            return Err(MoveVertexRejected::Fixed);
        }
        if self.store.is_inside_obstacle(position) {
            return Err(MoveVertexRejected::InsideObstacle);
        }
        if !self.store.is_inside_boundary(position) {
            return Err(MoveVertexRejected::OutsideBoundary);
        }
        self.store.set_position(id, position);
        self.regenerate();
        Ok(EditOutcome::VertexMoved { id })
    }

    /// Rotate obstacle about its center.
    ///
    /// # Arguments
    /// * `delta_degrees` - Rotation added to the current one.
    pub fn rotate_obstacle(
        &mut self,
        delta_degrees: Scalar,
    ) -> Result<EditOutcome, TransformRejected> {
        let obstacle = self.store.obstacle();
        let rotation_degrees = (obstacle.rotation_degrees() + delta_degrees).rem_euclid(360.0);
        let scale_factor = obstacle.scale_factor();
        let result = self
            .transform(rotation_degrees, scale_factor)
            .map(|removed_people| EditOutcome::ObstacleRotated {
                rotation_degrees,
                removed_people,
            });
        self.settle(result)
    }

    /// Scale obstacle about its center.
    ///
    /// # Arguments
    /// * `delta` - Scale factor added to the current one.
    pub fn scale_obstacle(&mut self, delta: Scalar) -> Result<EditOutcome, TransformRejected> {
        let obstacle = self.store.obstacle();
        let rotation_degrees = obstacle.rotation_degrees();
        let requested = obstacle.scale_factor() + delta;
        let min = self.settings.min_scale_factor;
        let max = self.settings.max_scale_factor;
        let result = if requested >= min - SCALE_EPSILON && requested <= max + SCALE_EPSILON {
            let scale_factor = requested.max(min).min(max);
            self.transform(rotation_degrees, scale_factor)
                .map(|removed_people| EditOutcome::ObstacleScaled {
                    scale_factor,
                    removed_people,
                })
        } else {
            Err(TransformRejected::ScaleOutOfRange {
                requested,
                min,
                max,
            })
        };
        self.settle(result)
    }

    fn transform(
        &mut self,
        rotation_degrees: Scalar,
        scale_factor: Scalar,
    ) -> Result<usize, TransformRejected> {
        let corners = self
            .store
            .obstacle()
            .shape()
            .corners(rotation_degrees, scale_factor);
        let boundary = self.store.boundary_corners();
        if corners
            .iter()
            .any(|c| !point_in_convex_polygon(*c, &boundary))
        {
            return Err(TransformRejected::OutsideBoundary);
        }
        let containment = self.store.containment();
        let covered = self.store.vertices().iter().find(|v| {
            v.role != VertexRole::Obstacle && containment.contains(&corners, v.position)
        });
        if let Some(vertex) = covered {
            return Err(TransformRejected::CoversVertex(vertex.id));
        }

        self.store.set_obstacle_pose(rotation_degrees, scale_factor);
        let mut edges = engine::generate_edges(&self.store, self.settings.max_obstacle_connections);
        let resolved = engine::resolve_crossing_edges(&self.store, &mut edges);
        self.store.set_edges(edges);
        let removed = self
            .store
            .retain_people(|p| !containment.contains(&corners, p.position));
        self.retriangulate(&HashSet::new());
        tracing::info!(
            rotation_degrees,
            scale_factor,
            removed_people = removed,
            resolved_crossings = resolved,
            "obstacle transformed"
        );
        Ok(removed)
    }

    /// Place person at given position.
    pub fn add_person(&mut self, position: Coord) -> Result<EditOutcome, PersonRejected> {
        let result = self.try_add_person(position);
        self.settle(result)
    }

    fn try_add_person(&mut self, position: Coord) -> Result<EditOutcome, PersonRejected> {
        self.validate_person_position(position)?;
        Ok(self.push_person(position))
    }

    /// Place person at random free spot: outside the obstacle and away from every edge.
    pub fn add_random_person(&mut self) -> Result<EditOutcome, PersonRejected> {
        let result = match self.random_free_spot() {
            Some(position) => Ok(self.push_person(position)),
            None => Err(PersonRejected::NoFreeSpot(self.settings.placement_attempts)),
        };
        self.settle(result)
    }

    pub fn remove_person(&mut self, id: PersonId) -> Result<EditOutcome, PersonRejected> {
        let result = if self.store.retain_people(|p| p.id != id) > 0 {
            self.refresh_people();
            Ok(EditOutcome::PersonRemoved { id })
        } else {
            Err(PersonRejected::UnknownPerson(id))
        };
        self.settle(result)
    }

    pub fn move_person(
        &mut self,
        id: PersonId,
        position: Coord,
    ) -> Result<EditOutcome, PersonRejected> {
        let result = self.try_move_person(id, position);
        self.settle(result)
    }

    fn try_move_person(
        &mut self,
        id: PersonId,
        position: Coord,
    ) -> Result<EditOutcome, PersonRejected> {
        if self.store.person(id).is_none() {
            return Err(PersonRejected::UnknownPerson(id));
        }
        self.validate_person_position(position)?;
        if let Some(person) = self.store.people_mut().iter_mut().find(|p| p.id == id) {
            person.position = position;
        }
        self.refresh_people();
        Ok(EditOutcome::PersonMoved { id })
    }

    /// Remove every person.
    pub fn clear_people(&mut self) -> EditOutcome {
        let removed_people = self.store.retain_people(|_| false);
        self.refresh_people();
        self.settle_outcome(EditOutcome::PeopleCleared { removed_people })
    }

    /// Change target density and reclassify triangles.
    pub fn set_target_density(&mut self, target: usize) -> EditOutcome {
        self.settings.target_density = target;
        self.refresh_densities();
        self.settle_outcome(EditOutcome::TargetDensityChanged { target })
    }

    /// Recompute triangle occupancy and density class from current person assignment.
    pub fn refresh_densities(&mut self) {
        engine::refresh_densities(&mut self.store, self.settings.target_density);
    }

    pub fn locate_containing_triangle(&self, point: Coord) -> Option<TriangleKey> {
        engine::locate_containing_triangle(&self.store, point)
    }

    /// Find mesh element under point.
    pub fn pick(&self, point: Coord) -> Selection {
        pick(&self.store, &self.settings, point)
    }

    pub fn snapshot(&self) -> MeshSnapshot {
        MeshSnapshot::capture(&self.store, self.settings.target_density, &self.status)
    }

    pub fn stats(&self) -> DensityStats {
        DensityStats::from_triangles(self.store.triangles())
    }

    /// Apply edit command.
    ///
    /// # Examples
    /// ```
    /// use crowd_mesh_core::prelude::*;
    ///
    /// let settings = CrowdMeshSettings {
    ///     seed: Some(3),
    ///     initial_people_count: 0,
    ///     ..Default::default()
    /// };
    /// let mut mesh = CrowdMesh::random(settings).unwrap();
    /// let outcome = mesh.apply(MeshCommand::ScaleObstacle { delta: None }).unwrap();
    /// assert_eq!(outcome.to_string(), "Obstacle scaled to 110%");
    /// let error = mesh
    ///     .apply(MeshCommand::ScaleObstacle { delta: Some(1.0) })
    ///     .unwrap_err();
    /// assert!(matches!(
    ///     error,
    ///     EditError::Transform(TransformRejected::ScaleOutOfRange { .. })
    /// ));
    /// ```
    pub fn apply(&mut self, command: MeshCommand) -> Result<EditOutcome, EditError> {
        let outcome = match command {
            MeshCommand::AddEdge { a, b } => self.add_edge(a, b)?,
            MeshCommand::RemoveEdge { a, b } => self.remove_edge(a, b)?,
            MeshCommand::MoveVertex { id, x, y } => self.move_vertex(id, Coord::new(x, y))?,
            MeshCommand::AddPerson { x, y } => self.add_person(Coord::new(x, y))?,
            MeshCommand::AddRandomPerson => self.add_random_person()?,
            MeshCommand::RemovePerson { id } => self.remove_person(id)?,
            MeshCommand::MovePerson { id, x, y } => self.move_person(id, Coord::new(x, y))?,
            MeshCommand::ClearPeople => self.clear_people(),
            MeshCommand::RotateObstacle { degrees } => {
                let degrees = degrees.unwrap_or(self.settings.rotation_step_degrees);
                self.rotate_obstacle(degrees)?
            }
            MeshCommand::ScaleObstacle { delta } => {
                let delta = delta.unwrap_or(self.settings.scale_step);
                self.scale_obstacle(delta)?
            }
            MeshCommand::SetTargetDensity { target } => self.set_target_density(target),
        };
        Ok(outcome)
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn log_initialized(&self) {
        tracing::info!(
            vertices = self.store.vertices().len(),
            edges = self.store.edges().len(),
            triangles = self.store.triangles().len(),
            people = self.store.people().len(),
            "mesh initialized"
        );
    }

    fn settle<E: Display>(&mut self, result: Result<EditOutcome, E>) -> Result<EditOutcome, E> {
        match &result {
            Ok(outcome) => self.status = outcome.to_string(),
            Err(error) => {
                tracing::debug!(reason = %error, "edit rejected");
                self.status = error.to_string();
            }
        }
        result
    }

    fn settle_outcome(&mut self, outcome: EditOutcome) -> EditOutcome {
        self.status = outcome.to_string();
        outcome
    }

    fn regenerate(&mut self) {
        let edges = engine::generate_edges(&self.store, self.settings.max_obstacle_connections);
        self.store.set_edges(edges);
        self.retriangulate(&HashSet::new());
    }

    fn retriangulate(&mut self, banned: &HashSet<Edge>) {
        let Triangulation { triangles, edges } = engine::triangulate(&self.store, banned);
        self.store.set_edges(edges);
        self.store.set_triangles(triangles);
        self.refresh_people();
        tracing::debug!(
            edges = self.store.edges().len(),
            triangles = self.store.triangles().len(),
            banned = banned.len(),
            "mesh triangulated"
        );
    }

    fn refresh_people(&mut self) {
        engine::assign_people(&mut self.store);
        self.refresh_densities();
    }

    fn populate(&mut self) -> Result<(), MeshError> {
        let requested = self.settings.initial_people_count;
        for placed in 0..requested {
            let position = self
                .random_free_spot()
                .ok_or(MeshError::PlacementExhausted { placed, requested })?;
            self.store.push_person(position);
        }
        self.refresh_people();
        Ok(())
    }

    fn push_person(&mut self, position: Coord) -> EditOutcome {
        let id = self.store.push_person(position);
        self.refresh_people();
        EditOutcome::PersonAdded {
            id,
            total: self.store.people().len(),
        }
    }

    fn validate_person_position(&self, position: Coord) -> Result<(), PersonRejected> {
        if !self.store.is_inside_boundary(position) {
            Err(PersonRejected::OutsideBoundary)
        } else if self.store.is_inside_obstacle(position) {
            Err(PersonRejected::InsideObstacle)
        } else {
            Ok(())
        }
    }

    fn random_free_spot(&mut self) -> Option<Coord> {
        let (min, max) = bounds(&self.store.boundary_corners());
        let inset = Coord::new(PLACEMENT_INSET, PLACEMENT_INSET);
        for _ in 0..self.settings.placement_attempts {
            let position = sample_in_bounds(&mut self.rng, min + inset, max - inset);
            if self.is_free_spot(position) {
                return Some(position);
            }
        }
        None
    }

    fn is_free_spot(&self, position: Coord) -> bool {
        let buffer = self.settings.person_edge_buffer;
        self.store.is_inside_boundary(position)
            && !self.store.is_inside_obstacle(position)
            && self.store.edges().iter().all(|e| {
                let (a, b) = (self.store.position(e.a), self.store.position(e.b));
                distance_point_to_segment(position, a, b) >= buffer
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::obstacle::ObstacleShape;

    fn layout(obstacle_center: Coord) -> MeshLayout {
        let mut layout = MeshLayout::rectangle(
            Coord::new(0.0, 0.0),
            Coord::new(200.0, 200.0),
            ObstacleShape::new(obstacle_center, 40.0, 20.0),
        );
        layout.interior = vec![
            Coord::new(40.0, 40.0),
            Coord::new(160.0, 40.0),
            Coord::new(160.0, 160.0),
            Coord::new(40.0, 160.0),
            Coord::new(100.0, 40.0),
        ];
        layout
    }

    fn mesh() -> CrowdMesh {
        CrowdMesh::new(&layout(Coord::new(100.0, 100.0)), CrowdMeshSettings::default()).unwrap()
    }

    #[test]
    fn test_add_edge_rejections() {
        let mut mesh = mesh();
        let before = mesh.store().clone();
        assert_eq!(
            mesh.add_edge(VertexId(4), VertexId(4)),
            Err(AddEdgeRejected::SameVertex)
        );
        assert_eq!(
            mesh.add_edge(VertexId(99), VertexId(4)),
            Err(AddEdgeRejected::UnknownVertex(VertexId(99)))
        );
        assert_eq!(mesh.status(), "Vertex 99 does not exist.");
        assert_eq!(
            mesh.add_edge(VertexId(1), VertexId(0)),
            Err(AddEdgeRejected::AlreadyExists(Edge::new(VertexId(0), VertexId(1))))
        );
        assert_eq!(
            mesh.add_edge(VertexId(4), VertexId(6)),
            Err(AddEdgeRejected::CrossesObstacle)
        );
        assert_eq!(mesh.store(), &before);
    }

    #[test]
    fn test_remove_edge_rejections() {
        let mut mesh = mesh();
        let before = mesh.store().clone();
        assert_eq!(
            mesh.remove_edge(VertexId(9), VertexId(10)),
            Err(RemoveEdgeRejected::ObstacleEdge)
        );
        assert_eq!(mesh.status(), "Cannot remove an obstacle edge.");
        assert_eq!(
            mesh.remove_edge(VertexId(4), VertexId(6)),
            Err(RemoveEdgeRejected::NotFound(Edge::new(VertexId(4), VertexId(6))))
        );
        assert_eq!(mesh.store(), &before);
    }

    #[test]
    fn test_move_vertex_rejections() {
        let mut mesh = mesh();
        assert_eq!(
            mesh.move_vertex(VertexId(0), Coord::new(10.0, 10.0)),
            Err(MoveVertexRejected::Fixed)
        );
        assert_eq!(
            mesh.move_vertex(VertexId(9), Coord::new(10.0, 10.0)),
            Err(MoveVertexRejected::Fixed)
        );
        assert_eq!(
            mesh.move_vertex(VertexId(4), Coord::new(100.0, 100.0)),
            Err(MoveVertexRejected::InsideObstacle)
        );
        assert_eq!(
            mesh.move_vertex(VertexId(4), Coord::new(250.0, 50.0)),
            Err(MoveVertexRejected::OutsideBoundary)
        );
        assert_eq!(
            mesh.move_vertex(VertexId(4), Coord::new(30.0, 60.0)),
            Ok(EditOutcome::VertexMoved { id: VertexId(4) })
        );
        assert_eq!(mesh.store().position(VertexId(4)), Coord::new(30.0, 60.0));
    }

    #[test]
    fn test_transform() {
        let mut mesh = mesh();
        assert_eq!(
            mesh.rotate_obstacle(90.0),
            Ok(EditOutcome::ObstacleRotated {
                rotation_degrees: 90.0,
                removed_people: 0,
            })
        );
        assert_eq!(mesh.status(), "Obstacle rotated to 90°");
        assert!(mesh.rotate_obstacle(-90.0).is_ok());
        assert_eq!(mesh.store().obstacle().rotation_degrees(), 0.0);

        mesh.move_vertex(VertexId(8), Coord::new(125.0, 100.0)).unwrap();
        let before = mesh.store().clone();
        assert_eq!(
            mesh.scale_obstacle(0.3),
            Err(TransformRejected::CoversVertex(VertexId(8)))
        );
        assert_eq!(mesh.store(), &before);

        let mut mesh =
            CrowdMesh::new(&layout(Coord::new(100.0, 185.0)), CrowdMeshSettings::default())
                .unwrap();
        let before = mesh.store().clone();
        assert_eq!(
            mesh.scale_obstacle(0.5),
            Err(TransformRejected::OutsideBoundary)
        );
        assert_eq!(mesh.store(), &before);
    }

    #[test]
    fn test_people() {
        let mut mesh = mesh();
        assert_eq!(
            mesh.add_person(Coord::new(20.0, 100.0)),
            Ok(EditOutcome::PersonAdded {
                id: PersonId(0),
                total: 1,
            })
        );
        assert!(mesh.store().people()[0].triangle.is_some());
        assert_eq!(
            mesh.move_person(PersonId(5), Coord::new(20.0, 120.0)),
            Err(PersonRejected::UnknownPerson(PersonId(5)))
        );
        assert_eq!(
            mesh.set_target_density(1),
            EditOutcome::TargetDensityChanged { target: 1 }
        );
        assert_eq!(mesh.stats().optimal, 1);
        assert_eq!(
            mesh.clear_people(),
            EditOutcome::PeopleCleared { removed_people: 1 }
        );
        assert_eq!(mesh.stats().optimal, 0);
        assert_eq!(
            mesh.apply(MeshCommand::AddEdge {
                a: VertexId(5),
                b: VertexId(5),
            }),
            Err(EditError::AddEdge(AddEdgeRejected::SameVertex))
        );
    }
}

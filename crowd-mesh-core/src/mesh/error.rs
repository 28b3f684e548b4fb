use crate::{
    topology::{Edge, PersonId, VertexId},
    Scalar,
};
use thiserror::Error;

/// Error thrown when mesh cannot be built from given layout or settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("Boundary needs exactly 4 points, got {0}")]
    BoundaryPointCount(usize),
    #[error("Boundary must be a convex polygon with non-zero area")]
    DegenerateBoundary,
    #[error("Obstacle size must be positive, got {width}x{height}")]
    InvalidObstacleSize { width: Scalar, height: Scalar },
    #[error("Obstacle must lie strictly inside the boundary")]
    ObstacleOutsideBoundary,
    #[error("Interior point #{0} lies outside the boundary")]
    InteriorPointOutsideBoundary(usize),
    #[error("Interior point #{0} lies inside the obstacle")]
    InteriorPointInsideObstacle(usize),
    #[error("Person #{0} lies outside the boundary")]
    PersonOutsideBoundary(usize),
    #[error("Person #{0} lies inside the obstacle")]
    PersonInsideObstacle(usize),
    #[error("Could not place {requested} points, only {placed} fit")]
    PlacementExhausted { placed: usize, requested: usize },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Reason why an edge could not be added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddEdgeRejected {
    #[error("Vertex {0} does not exist.")]
    UnknownVertex(VertexId),
    #[error("Cannot add edge to same vertex.")]
    SameVertex,
    #[error("Edge already exists.")]
    AlreadyExists(Edge),
    #[error("Edge crosses obstacle, cannot add.")]
    CrossesObstacle,
    #[error("New edge would intersect existing edge {0}.")]
    CrossesEdge(Edge),
}

/// Reason why an edge could not be removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveEdgeRejected {
    #[error("Vertex {0} does not exist.")]
    UnknownVertex(VertexId),
    #[error("Edge {0} does not exist.")]
    NotFound(Edge),
    #[error("Cannot remove a boundary edge.")]
    BoundaryEdge,
    #[error("Cannot remove an obstacle edge.")]
    ObstacleEdge,
}

/// Reason why a vertex could not be moved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveVertexRejected {
    #[error("Vertex {0} does not exist.")]
    UnknownVertex(VertexId),
    #[error("This vertex is fixed and cannot be moved.")]
    Fixed,
    #[error("Vertex cannot be placed inside the obstacle.")]
    InsideObstacle,
    #[error("Vertex cannot be placed outside the boundary.")]
    OutsideBoundary,
}

/// Reason why the obstacle could not be rotated or scaled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformRejected {
    #[error("Obstacle scale {requested:.2} is outside of allowed range {min}..{max}.")]
    ScaleOutOfRange {
        requested: Scalar,
        min: Scalar,
        max: Scalar,
    },
    #[error("Obstacle would leave the boundary.")]
    OutsideBoundary,
    #[error("Obstacle would cover vertex {0}.")]
    CoversVertex(VertexId),
}

/// Reason why a person edit failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonRejected {
    #[error("Person {0} does not exist.")]
    UnknownPerson(PersonId),
    #[error("Person cannot be placed inside the obstacle.")]
    InsideObstacle,
    #[error("Person cannot be placed outside the boundary.")]
    OutsideBoundary,
    #[error("Could not find a free spot for a person after {0} attempts.")]
    NoFreeSpot(usize),
}

/// Any rejected edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error(transparent)]
    AddEdge(#[from] AddEdgeRejected),
    #[error(transparent)]
    RemoveEdge(#[from] RemoveEdgeRejected),
    #[error(transparent)]
    MoveVertex(#[from] MoveVertexRejected),
    #[error(transparent)]
    Transform(#[from] TransformRejected),
    #[error(transparent)]
    Person(#[from] PersonRejected),
}

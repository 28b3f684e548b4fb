use crate::{
    topology::{PersonId, VertexId},
    Scalar,
};
use serde::{Deserialize, Serialize};

/// Edit request, as replayed from scripts.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let command: MeshCommand = serde_json::from_str(r#"{"op": "add_edge", "a": 4, "b": 9}"#).unwrap();
/// assert_eq!(command, MeshCommand::AddEdge { a: VertexId(4), b: VertexId(9) });
/// let command: MeshCommand = serde_json::from_str(r#"{"op": "scale_obstacle"}"#).unwrap();
/// assert_eq!(command, MeshCommand::ScaleObstacle { delta: None });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MeshCommand {
    AddEdge {
        a: VertexId,
        b: VertexId,
    },
    RemoveEdge {
        a: VertexId,
        b: VertexId,
    },
    MoveVertex {
        id: VertexId,
        x: Scalar,
        y: Scalar,
    },
    AddPerson {
        x: Scalar,
        y: Scalar,
    },
    AddRandomPerson,
    RemovePerson {
        id: PersonId,
    },
    MovePerson {
        id: PersonId,
        x: Scalar,
        y: Scalar,
    },
    ClearPeople,
    /// Rotate by given degrees, or by the configured step.
    RotateObstacle {
        #[serde(default)]
        degrees: Option<Scalar>,
    },
    /// Scale by given delta, or by the configured step.
    ScaleObstacle {
        #[serde(default)]
        delta: Option<Scalar>,
    },
    SetTargetDensity {
        target: usize,
    },
}

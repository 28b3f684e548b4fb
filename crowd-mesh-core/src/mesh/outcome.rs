use crate::{
    topology::{Edge, PersonId, VertexId},
    Scalar,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Successful edit report. `Display` gives the status line shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    EdgeAdded {
        edge: Edge,
    },
    EdgeRemoved {
        edge: Edge,
    },
    VertexMoved {
        id: VertexId,
    },
    ObstacleRotated {
        rotation_degrees: Scalar,
        removed_people: usize,
    },
    ObstacleScaled {
        scale_factor: Scalar,
        removed_people: usize,
    },
    PersonAdded {
        id: PersonId,
        total: usize,
    },
    PersonRemoved {
        id: PersonId,
    },
    PersonMoved {
        id: PersonId,
    },
    PeopleCleared {
        removed_people: usize,
    },
    TargetDensityChanged {
        target: usize,
    },
    Reset,
}

impl EditOutcome {
    /// Number of people dropped by this edit.
    ///
    /// # Examples
    /// ```
    /// use crowd_mesh_core::prelude::*;
    ///
    /// let outcome = EditOutcome::ObstacleScaled {
    ///     scale_factor: 1.2,
    ///     removed_people: 2,
    /// };
    /// assert_eq!(outcome.removed_people(), 2);
    /// assert_eq!(
    ///     outcome.to_string(),
    ///     "Obstacle scaled to 120% | Removed 2 person(s) that entered obstacle.",
    /// );
    /// assert_eq!(EditOutcome::Reset.removed_people(), 0);
    /// ```
    pub fn removed_people(&self) -> usize {
        match self {
            Self::ObstacleRotated { removed_people, .. }
            | Self::ObstacleScaled { removed_people, .. }
            | Self::PeopleCleared { removed_people } => *removed_people,
            Self::PersonRemoved { .. } => 1,
            _ => 0,
        }
    }
}

fn removed_suffix(f: &mut fmt::Formatter<'_>, removed_people: usize) -> fmt::Result {
    if removed_people > 0 {
        write!(
            f,
            " | Removed {} person(s) that entered obstacle.",
            removed_people
        )
    } else {
        Ok(())
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeAdded { edge } => write!(f, "Edge {} added.", edge),
            Self::EdgeRemoved { .. } => write!(f, "Edge removed."),
            Self::VertexMoved { id } => write!(f, "Vertex {} moved.", id),
            Self::ObstacleRotated {
                rotation_degrees,
                removed_people,
            } => {
                write!(f, "Obstacle rotated to {:.0}°", rotation_degrees)?;
                removed_suffix(f, *removed_people)
            }
            Self::ObstacleScaled {
                scale_factor,
                removed_people,
            } => {
                write!(f, "Obstacle scaled to {:.0}%", scale_factor * 100.0)?;
                removed_suffix(f, *removed_people)
            }
            Self::PersonAdded { total, .. } => write!(f, "Person added. Total: {}", total),
            Self::PersonRemoved { .. } => write!(f, "Person removed."),
            Self::PersonMoved { .. } => write!(f, "Person moved."),
            Self::PeopleCleared { .. } => write!(f, "All people cleared."),
            Self::TargetDensityChanged { target } => {
                write!(f, "Target density set to {}.", target)
            }
            Self::Reset => write!(f, "Simulation reset."),
        }
    }
}

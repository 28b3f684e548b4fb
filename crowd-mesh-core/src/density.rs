use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Occupancy classification of a triangle against the target density.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// assert_eq!(DensityClass::classify(3, 4), DensityClass::Under);
/// assert_eq!(DensityClass::classify(4, 4), DensityClass::Optimal);
/// assert_eq!(DensityClass::classify(5, 4), DensityClass::Over);
/// assert_eq!(DensityClass::classify(0, 0), DensityClass::Optimal);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityClass {
    /// Less people than the target.
    #[default]
    Under,
    /// Exactly the target amount of people.
    Optimal,
    /// More people than the target.
    Over,
}

impl DensityClass {
    /// Classify occupancy.
    ///
    /// # Arguments
    /// * `occupancy` - Number of people inside a triangle.
    /// * `target` - Target density.
    pub fn classify(occupancy: usize, target: usize) -> Self {
        match occupancy.cmp(&target) {
            Ordering::Less => Self::Under,
            Ordering::Equal => Self::Optimal,
            Ordering::Greater => Self::Over,
        }
    }
}

impl fmt::Display for DensityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "under"),
            Self::Optimal => write!(f, "optimal"),
            Self::Over => write!(f, "over"),
        }
    }
}

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque key naming a node of the toll network. Used as both row and
/// column label of the distance matrix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct CheckpointId(i64);

impl CheckpointId {
    pub const fn new(id: i64) -> Self {
        CheckpointId(id)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CheckpointId {
    fn from(id: i64) -> Self {
        CheckpointId(id)
    }
}

impl FromStr for CheckpointId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(CheckpointId)
    }
}

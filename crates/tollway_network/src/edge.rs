use serde::{Deserialize, Serialize};

use crate::checkpoint::CheckpointId;

pub type Distance = f64;

/// One raw directional distance measurement between two checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub origin: CheckpointId,
    pub destination: CheckpointId,
    pub distance: Distance,
}

impl Edge {
    pub fn new(origin: CheckpointId, destination: CheckpointId, distance: Distance) -> Self {
        Edge {
            origin,
            destination,
            distance,
        }
    }
}

/// One ordered (start, end) row of an unrolled distance matrix.
/// `id_start` and `id_end` always differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatEdge {
    pub id_start: CheckpointId,
    pub id_end: CheckpointId,
    pub distance: Distance,
}

impl FlatEdge {
    pub fn new(id_start: CheckpointId, id_end: CheckpointId, distance: Distance) -> Self {
        FlatEdge {
            id_start,
            id_end,
            distance,
        }
    }
}

use thiserror::Error;

use crate::checkpoint::CheckpointId;

#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("negative distance {distance} on edge {origin} -> {destination}")]
    NegativeDistance {
        origin: CheckpointId,
        destination: CheckpointId,
        distance: f64,
    },

    #[error("non-finite distance on edge {origin} -> {destination}")]
    NonFiniteDistance {
        origin: CheckpointId,
        destination: CheckpointId,
    },

    #[error("checkpoint {0} has no outgoing edges")]
    UnknownCheckpoint(CheckpointId),
}

use fixedbitset::FixedBitSet;
use fxhash::FxHashMap;
use tracing::debug;

use crate::checkpoint::CheckpointId;
use crate::edge::{Distance, Edge, FlatEdge};
use crate::error::NetworkError;

/// Cumulative travel distances between every pair of checkpoints, stored
/// as a flat row-major vector. To find the cell for a pair of row/column
/// indexes, use `index = row * len + col`, where `len` is the number of
/// checkpoints.
///
/// The `direct` bitset marks cells that were supplied by an input edge,
/// which keeps a genuine zero-distance measurement distinguishable from
/// a pair that was never measured.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<CheckpointId>,
    positions: FxHashMap<CheckpointId, usize>,
    distances: Vec<Distance>,
    direct: FixedBitSet,
}

impl DistanceMatrix {
    /// Pivots raw edges into a square matrix over the sorted universe of
    /// checkpoint ids, without combining directions. Duplicate
    /// (origin, destination) pairs follow last-write-wins, so the result
    /// depends on input order when duplicates conflict. Self-edges are
    /// skipped; the diagonal is always zero.
    pub fn from_direct_edges(edges: &[Edge]) -> Result<Self, NetworkError> {
        for edge in edges {
            if !edge.distance.is_finite() {
                return Err(NetworkError::NonFiniteDistance {
                    origin: edge.origin,
                    destination: edge.destination,
                });
            }
            if edge.distance < 0.0 {
                return Err(NetworkError::NegativeDistance {
                    origin: edge.origin,
                    destination: edge.destination,
                    distance: edge.distance,
                });
            }
        }

        let mut ids: Vec<CheckpointId> = edges
            .iter()
            .flat_map(|edge| [edge.origin, edge.destination])
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let positions: FxHashMap<CheckpointId, usize> = ids
            .iter()
            .enumerate()
            .map(|(position, id)| (*id, position))
            .collect();

        let len = ids.len();
        let mut distances = vec![0.0; len * len];
        let mut direct = FixedBitSet::with_capacity(len * len);

        for edge in edges {
            let row = positions[&edge.origin];
            let col = positions[&edge.destination];
            if row == col {
                continue;
            }
            distances[row * len + col] = edge.distance;
            direct.insert(row * len + col);
        }

        debug!(checkpoints = len, edges = edges.len(), "pivoted edges");

        Ok(DistanceMatrix {
            ids,
            positions,
            distances,
            direct,
        })
    }

    /// Builds the symmetric cumulative matrix: for every unordered pair
    /// with direct entries in both directions, both cells become their
    /// sum; a pair measured in one direction only keeps that single
    /// value in both cells.
    pub fn from_edges(edges: &[Edge]) -> Result<Self, NetworkError> {
        let mut matrix = Self::from_direct_edges(edges)?;
        let len = matrix.ids.len();

        for row in 0..len {
            for col in (row + 1)..len {
                let forward = row * len + col;
                let reverse = col * len + row;
                let combined = match (matrix.direct.contains(forward), matrix.direct.contains(reverse))
                {
                    (true, true) => matrix.distances[forward] + matrix.distances[reverse],
                    (true, false) => matrix.distances[forward],
                    (false, true) => matrix.distances[reverse],
                    (false, false) => 0.0,
                };
                matrix.distances[forward] = combined;
                matrix.distances[reverse] = combined;
            }
        }

        Ok(matrix)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.ids.len() + col
    }

    /// Cumulative distance between two checkpoints, or `None` when
    /// either id is not part of the matrix.
    pub fn distance(&self, from: CheckpointId, to: CheckpointId) -> Option<Distance> {
        let row = *self.positions.get(&from)?;
        let col = *self.positions.get(&to)?;
        Some(self.distances[self.index(row, col)])
    }

    /// Checkpoint ids in matrix order, ascending.
    pub fn checkpoint_ids(&self) -> &[CheckpointId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Inverts the matrix into one directional row per ordered pair of
    /// distinct checkpoints, in row-major order. Zero-distance pairs are
    /// kept; only the diagonal is dropped, so an N-checkpoint matrix
    /// unrolls into exactly N * (N - 1) rows.
    pub fn unroll(&self) -> Vec<FlatEdge> {
        let len = self.ids.len();
        let mut rows = Vec::with_capacity(len * len.saturating_sub(1));

        for row in 0..len {
            for col in 0..len {
                if row == col {
                    continue;
                }
                rows.push(FlatEdge::new(
                    self.ids[row],
                    self.ids[col],
                    self.distances[self.index(row, col)],
                ));
            }
        }

        rows
    }

    /// Returns a copy with every off-diagonal value scaled by
    /// `above_factor` when it exceeds `cutoff` and by `below_factor`
    /// otherwise, rounded to one decimal.
    pub fn rescaled(&self, cutoff: Distance, above_factor: f64, below_factor: f64) -> Self {
        let len = self.ids.len();
        let mut rescaled = self.clone();

        for row in 0..len {
            for col in 0..len {
                if row == col {
                    continue;
                }
                let cell = self.index(row, col);
                let value = rescaled.distances[cell];
                let factor = if value > cutoff {
                    above_factor
                } else {
                    below_factor
                };
                rescaled.distances[cell] = round_to_tenth(value * factor);
            }
        }

        rescaled
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

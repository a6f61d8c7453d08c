use fxhash::FxHashMap;

use crate::checkpoint::CheckpointId;
use crate::edge::FlatEdge;
use crate::error::NetworkError;

const TOLERANCE: f64 = 0.10;

/// Mean outgoing distance for every distinct `id_start` in the rows.
fn mean_outgoing_distances(edges: &[FlatEdge]) -> FxHashMap<CheckpointId, f64> {
    let mut totals: FxHashMap<CheckpointId, (f64, usize)> = FxHashMap::default();

    for edge in edges {
        let entry = totals.entry(edge.id_start).or_insert((0.0, 0));
        entry.0 += edge.distance;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(id, (sum, count))| (id, sum / count as f64))
        .collect()
}

/// Finds every checkpoint whose mean outgoing distance lies within ten
/// percent of the reference checkpoint's mean, bounds inclusive. The
/// reference itself always qualifies. Results are ascending by id.
///
/// A reference mean of zero collapses the band, leaving only
/// checkpoints whose mean is exactly zero.
pub fn checkpoints_within_tolerance(
    edges: &[FlatEdge],
    reference: CheckpointId,
) -> Result<Vec<CheckpointId>, NetworkError> {
    let means = mean_outgoing_distances(edges);
    let reference_mean = *means
        .get(&reference)
        .ok_or(NetworkError::UnknownCheckpoint(reference))?;

    let threshold = TOLERANCE * reference_mean;
    let low = reference_mean - threshold;
    let high = reference_mean + threshold;

    let mut matched: Vec<CheckpointId> = means
        .into_iter()
        .filter(|(_, mean)| low <= *mean && *mean <= high)
        .map(|(id, _)| id)
        .collect();
    matched.sort_unstable();

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: i64) -> CheckpointId {
        CheckpointId::new(value)
    }

    #[test]
    fn test_identical_means_match() {
        let edges = [
            FlatEdge::new(id(1), id(2), 10.0),
            FlatEdge::new(id(2), id(1), 10.0),
        ];

        let matched = checkpoints_within_tolerance(&edges, id(1)).unwrap();
        assert_eq!(matched, vec![id(1), id(2)]);
    }

    #[test]
    fn test_reference_is_always_included() {
        let edges = [
            FlatEdge::new(id(1), id(2), 10.0),
            FlatEdge::new(id(2), id(1), 500.0),
        ];

        let matched = checkpoints_within_tolerance(&edges, id(1)).unwrap();
        assert_eq!(matched, vec![id(1)]);
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        // Reference mean 100, band [90, 110].
        let edges = [
            FlatEdge::new(id(1), id(9), 100.0),
            FlatEdge::new(id(2), id(9), 90.0),
            FlatEdge::new(id(3), id(9), 110.0),
            FlatEdge::new(id(4), id(9), 89.9),
            FlatEdge::new(id(5), id(9), 110.1),
        ];

        let matched = checkpoints_within_tolerance(&edges, id(1)).unwrap();
        assert_eq!(matched, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn test_means_average_over_all_outgoing_rows() {
        // Checkpoint 2's mean is (8 + 12) / 2 = 10, inside the band.
        let edges = [
            FlatEdge::new(id(1), id(9), 10.0),
            FlatEdge::new(id(2), id(9), 8.0),
            FlatEdge::new(id(2), id(8), 12.0),
        ];

        let matched = checkpoints_within_tolerance(&edges, id(1)).unwrap();
        assert_eq!(matched, vec![id(1), id(2)]);
    }

    #[test]
    fn test_unknown_reference() {
        let edges = [FlatEdge::new(id(1), id(2), 10.0)];

        let result = checkpoints_within_tolerance(&edges, id(42));
        assert_eq!(result.unwrap_err(), NetworkError::UnknownCheckpoint(id(42)));
    }

    #[test]
    fn test_zero_reference_mean_collapses_the_band() {
        let edges = [
            FlatEdge::new(id(1), id(2), 0.0),
            FlatEdge::new(id(2), id(1), 0.0),
            FlatEdge::new(id(3), id(1), 0.1),
        ];

        let matched = checkpoints_within_tolerance(&edges, id(1)).unwrap();
        assert_eq!(matched, vec![id(1), id(2)]);
    }

    #[test]
    fn test_result_is_sorted_ascending() {
        let edges = [
            FlatEdge::new(id(30), id(1), 10.0),
            FlatEdge::new(id(2), id(1), 10.0),
            FlatEdge::new(id(17), id(1), 10.0),
        ];

        let matched = checkpoints_within_tolerance(&edges, id(17)).unwrap();
        assert_eq!(matched, vec![id(2), id(17), id(30)]);
    }
}

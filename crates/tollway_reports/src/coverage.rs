use fxhash::FxHashMap;
use jiff::civil::DateTime;

use tollway_network::checkpoint::CheckpointId;

/// One timestamped sighting of a checkpoint pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub id: CheckpointId,
    pub id_2: CheckpointId,
    pub at: DateTime,
}

impl Observation {
    pub fn new(id: CheckpointId, id_2: CheckpointId, at: DateTime) -> Self {
        Observation { id, id_2, at }
    }
}

/// Whether a checkpoint pair's observations span every hour of the day
/// and every day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCoverage {
    pub id: CheckpointId,
    pub id_2: CheckpointId,
    pub complete: bool,
}

const ALL_HOURS: u32 = (1 << 24) - 1;
const ALL_WEEKDAYS: u8 = (1 << 7) - 1;

/// Checks each (id, id_2) pair for full 24-hour by 7-weekday coverage.
/// Only the hour and weekday of each observation are read; results are
/// sorted by pair.
pub fn weekly_coverage(observations: &[Observation]) -> Vec<PairCoverage> {
    let mut seen: FxHashMap<(CheckpointId, CheckpointId), (u32, u8)> = FxHashMap::default();

    for observation in observations {
        let entry = seen
            .entry((observation.id, observation.id_2))
            .or_insert((0, 0));
        entry.0 |= 1u32 << observation.at.hour();
        entry.1 |= 1u8 << observation.at.weekday().to_monday_zero_offset();
    }

    let mut coverage: Vec<PairCoverage> = seen
        .into_iter()
        .map(|((id, id_2), (hours, days))| PairCoverage {
            id,
            id_2,
            complete: hours == ALL_HOURS && days == ALL_WEEKDAYS,
        })
        .collect();
    coverage.sort_unstable_by_key(|pair| (pair.id, pair.id_2));

    coverage
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn id(value: i64) -> CheckpointId {
        CheckpointId::new(value)
    }

    // 2023-01-02 is a Monday.
    fn full_week_for(pair_id: i64, pair_id_2: i64) -> Vec<Observation> {
        let mut observations = Vec::new();
        for day in 0..7 {
            for hour in 0..24 {
                observations.push(Observation::new(
                    id(pair_id),
                    id(pair_id_2),
                    date(2023, 1, 2 + day).at(hour, 0, 0, 0),
                ));
            }
        }
        observations
    }

    #[test]
    fn test_full_week_is_complete() {
        let observations = full_week_for(1, 2);

        let coverage = weekly_coverage(&observations);
        assert_eq!(
            coverage,
            vec![PairCoverage {
                id: id(1),
                id_2: id(2),
                complete: true,
            }]
        );
    }

    #[test]
    fn test_missing_hour_is_incomplete() {
        let mut observations = full_week_for(1, 2);
        // Drop every 03:00 sighting.
        observations.retain(|observation| observation.at.hour() != 3);

        let coverage = weekly_coverage(&observations);
        assert!(!coverage[0].complete);
    }

    #[test]
    fn test_missing_weekday_is_incomplete() {
        let mut observations = full_week_for(1, 2);
        // Drop Sunday (2023-01-08) entirely.
        observations.retain(|observation| observation.at.day() != 8);

        let coverage = weekly_coverage(&observations);
        assert!(!coverage[0].complete);
    }

    #[test]
    fn test_pairs_are_tracked_separately_and_sorted() {
        let mut observations = full_week_for(7, 8);
        observations.push(Observation::new(
            id(1),
            id(9),
            date(2023, 1, 2).at(8, 0, 0, 0),
        ));

        let coverage = weekly_coverage(&observations);
        assert_eq!(coverage.len(), 2);
        assert_eq!((coverage[0].id, coverage[0].id_2), (id(1), id(9)));
        assert!(!coverage[0].complete);
        assert!(coverage[1].complete);
    }
}

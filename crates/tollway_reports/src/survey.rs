use fxhash::FxHashMap;
use serde::Deserialize;

use tollway_network::checkpoint::CheckpointId;
use tollway_network::edge::Edge;
use tollway_network::error::NetworkError;
use tollway_network::matrix::DistanceMatrix;
use tollway_tariff::vehicle_class::VehicleClass;

/// One row of a traffic survey: per-class flow readings between two
/// checkpoints on a named route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowRecord {
    pub id_1: CheckpointId,
    pub id_2: CheckpointId,
    pub route: String,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl FlowRecord {
    pub fn flow(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }
}

/// Congestion bands for car flow readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowBand {
    Low,
    Medium,
    High,
}

impl FlowBand {
    /// Low up to 15, medium up to 25, high above that.
    pub fn of(value: f64) -> FlowBand {
        if value <= 15.0 {
            FlowBand::Low
        } else if value <= 25.0 {
            FlowBand::Medium
        } else {
            FlowBand::High
        }
    }
}

/// Car-flow band counts over a survey.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlowBandCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

pub fn flow_band_counts(records: &[FlowRecord]) -> FlowBandCounts {
    let mut counts = FlowBandCounts::default();

    for record in records {
        match FlowBand::of(record.car) {
            FlowBand::Low => counts.low += 1,
            FlowBand::Medium => counts.medium += 1,
            FlowBand::High => counts.high += 1,
        }
    }

    counts
}

/// Indexes of records whose `class` flow exceeds twice the survey mean,
/// ascending.
pub fn indexes_above_twice_mean(records: &[FlowRecord], class: VehicleClass) -> Vec<usize> {
    if records.is_empty() {
        return Vec::new();
    }

    let mean = records.iter().map(|record| record.flow(class)).sum::<f64>() / records.len() as f64;

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.flow(class) > 2.0 * mean)
        .map(|(index, _)| index)
        .collect()
}

/// Route names whose mean `class` flow exceeds `threshold`, ascending.
pub fn routes_above_mean_flow(
    records: &[FlowRecord],
    class: VehicleClass,
    threshold: f64,
) -> Vec<String> {
    let mut totals: FxHashMap<&str, (f64, usize)> = FxHashMap::default();

    for record in records {
        let entry = totals.entry(record.route.as_str()).or_insert((0.0, 0));
        entry.0 += record.flow(class);
        entry.1 += 1;
    }

    let mut routes: Vec<String> = totals
        .into_iter()
        .filter(|(_, (sum, count))| sum / *count as f64 > threshold)
        .map(|(route, _)| route.to_owned())
        .collect();
    routes.sort_unstable();

    routes
}

/// Pivots the survey's car flows into a matrix keyed like the distance
/// matrix, diagonal zeroed, without symmetric combination.
pub fn car_flow_matrix(records: &[FlowRecord]) -> Result<DistanceMatrix, NetworkError> {
    let readings: Vec<Edge> = records
        .iter()
        .map(|record| Edge::new(record.id_1, record.id_2, record.car))
        .collect();

    DistanceMatrix::from_direct_edges(&readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id_1: i64, id_2: i64, route: &str, car: f64, bus: f64, truck: f64) -> FlowRecord {
        FlowRecord {
            id_1: CheckpointId::new(id_1),
            id_2: CheckpointId::new(id_2),
            route: route.to_owned(),
            moto: 0.0,
            car,
            rv: 0.0,
            bus,
            truck,
        }
    }

    #[test]
    fn test_flow_band_boundaries() {
        assert_eq!(FlowBand::of(15.0), FlowBand::Low);
        assert_eq!(FlowBand::of(15.1), FlowBand::Medium);
        assert_eq!(FlowBand::of(25.0), FlowBand::Medium);
        assert_eq!(FlowBand::of(25.1), FlowBand::High);
    }

    #[test]
    fn test_flow_band_counts() {
        let records = [
            record(1, 2, "a", 10.0, 0.0, 0.0),
            record(2, 3, "a", 20.0, 0.0, 0.0),
            record(3, 4, "b", 30.0, 0.0, 0.0),
            record(4, 5, "b", 5.0, 0.0, 0.0),
        ];

        let counts = flow_band_counts(&records);
        assert_eq!(
            counts,
            FlowBandCounts {
                low: 2,
                medium: 1,
                high: 1,
            }
        );
    }

    #[test]
    fn test_indexes_above_twice_mean() {
        // Mean bus flow is 5; only readings above 10 qualify.
        let records = [
            record(1, 2, "a", 0.0, 2.0, 0.0),
            record(2, 3, "a", 0.0, 12.0, 0.0),
            record(3, 4, "b", 0.0, 4.0, 0.0),
            record(4, 5, "b", 0.0, 2.0, 0.0),
        ];

        let spikes = indexes_above_twice_mean(&records, VehicleClass::Bus);
        assert_eq!(spikes, vec![1]);
    }

    #[test]
    fn test_indexes_above_twice_mean_empty_survey() {
        assert!(indexes_above_twice_mean(&[], VehicleClass::Bus).is_empty());
    }

    #[test]
    fn test_routes_above_mean_flow() {
        let records = [
            record(1, 2, "coastal", 0.0, 0.0, 9.0),
            record(2, 3, "coastal", 0.0, 0.0, 9.0),
            record(3, 4, "inland", 0.0, 0.0, 3.0),
            record(4, 5, "bypass", 0.0, 0.0, 8.0),
        ];

        let routes = routes_above_mean_flow(&records, VehicleClass::Truck, 7.0);
        assert_eq!(routes, vec!["bypass".to_owned(), "coastal".to_owned()]);
    }

    #[test]
    fn test_car_flow_matrix_is_not_symmetrized() {
        let records = [record(1, 2, "a", 10.0, 0.0, 0.0)];

        let matrix = car_flow_matrix(&records).unwrap();
        assert_eq!(matrix.distance(CheckpointId::new(1), CheckpointId::new(2)), Some(10.0));
        assert_eq!(matrix.distance(CheckpointId::new(2), CheckpointId::new(1)), Some(0.0));
        assert_eq!(matrix.distance(CheckpointId::new(1), CheckpointId::new(1)), Some(0.0));
    }
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jiff::civil::DateTime;
use serde::Deserialize;
use tracing::debug;

use tollway_network::checkpoint::CheckpointId;
use tollway_network::edge::Edge;
use tollway_reports::coverage::Observation;
use tollway_reports::survey::FlowRecord;
use tollway_tariff::json::JsonTariff;
use tollway_tariff::rate_table::RateTable;
use tollway_tariff::schedule::DiscountSchedule;
use tollway_tariff::span::{TimedEdge, TravelSpan};

#[derive(Deserialize)]
struct EdgeRecord {
    id_start: i64,
    id_end: i64,
    distance: f64,
}

/// Reads `id_start,id_end,distance` rows.
pub fn read_edges(path: &Path) -> Result<Vec<Edge>, anyhow::Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut edges = Vec::new();
    for record in reader.deserialize() {
        let record: EdgeRecord = record?;
        edges.push(Edge::new(
            CheckpointId::new(record.id_start),
            CheckpointId::new(record.id_end),
            record.distance,
        ));
    }

    debug!(edges = edges.len(), "loaded edge file");
    Ok(edges)
}

#[derive(Deserialize)]
struct TimedRecord {
    id_start: String,
    id_end: String,
    distance: f64,
}

/// Reads rows whose endpoint columns carry `HH:MM:SS_Weekday` keys.
pub fn read_timed_edges(path: &Path) -> Result<Vec<TimedEdge>, anyhow::Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut edges = Vec::new();
    for record in reader.deserialize() {
        let record: TimedRecord = record?;
        let span = TravelSpan::parse(&record.id_start, &record.id_end)?;
        edges.push(TimedEdge::new(span, record.distance));
    }

    Ok(edges)
}

/// Reads `id_1,id_2,route,moto,car,rv,bus,truck` survey rows.
pub fn read_flow_records(path: &Path) -> Result<Vec<FlowRecord>, anyhow::Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }

    Ok(records)
}

#[derive(Deserialize)]
struct ObservationRecord {
    id: i64,
    id_2: i64,
    timestamp: String,
}

/// Reads `id,id_2,timestamp` rows with civil datetime timestamps.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>, anyhow::Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut observations = Vec::new();
    for record in reader.deserialize() {
        let record: ObservationRecord = record?;
        let at: DateTime = record.timestamp.parse()?;
        observations.push(Observation::new(
            CheckpointId::new(record.id),
            CheckpointId::new(record.id_2),
            at,
        ));
    }

    Ok(observations)
}

/// Loads a tariff configuration file, falling back to the reference
/// tariff when no file is given.
pub fn read_tariff(path: Option<&Path>) -> Result<(RateTable, DiscountSchedule), anyhow::Error> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let tariff: JsonTariff = serde_json::from_reader(reader)?;
            Ok(tariff.into_tariff()?)
        }
        None => Ok((RateTable::default(), DiscountSchedule::default())),
    }
}

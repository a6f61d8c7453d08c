use serde::Serialize;

use tollway_network::checkpoint::CheckpointId;
use tollway_network::edge::{Distance, FlatEdge};

use crate::rate_table::RateTable;
use crate::schedule::DiscountSchedule;
use crate::span::{TimedEdge, TravelSpan};
use crate::vehicle_class::VehicleClass;

/// A toll amount for one vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassToll {
    pub class: VehicleClass,
    pub amount: f64,
}

/// A flat edge priced for every class in a rate table, in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TollRow {
    pub id_start: CheckpointId,
    pub id_end: CheckpointId,
    pub distance: Distance,
    pub tolls: Vec<ClassToll>,
}

/// A timed row priced for every class, with the discount factor that was
/// applied to the schedule's target class.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedTollRow {
    pub span: TravelSpan,
    pub distance: Distance,
    pub tolls: Vec<ClassToll>,
    pub applied_factor: f64,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn price(distance: Distance, rates: &RateTable) -> Vec<ClassToll> {
    rates
        .entries()
        .iter()
        .map(|entry| ClassToll {
            class: entry.class,
            amount: round_to_tenth(distance * entry.multiplier),
        })
        .collect()
}

/// Prices every edge for every class in the table: distance times the
/// class multiplier, rounded to one decimal.
pub fn apply_flat_rates(edges: &[FlatEdge], rates: &RateTable) -> Vec<TollRow> {
    edges
        .iter()
        .map(|edge| TollRow {
            id_start: edge.id_start,
            id_end: edge.id_end,
            distance: edge.distance,
            tolls: price(edge.distance, rates),
        })
        .collect()
}

/// Prices timed rows, then multiplies the target class's flat value once
/// by the factor the schedule resolves for the span start. Weekend spans
/// take the weekend factor; all other classes keep their flat value.
pub fn apply_time_based_rates(
    edges: &[TimedEdge],
    rates: &RateTable,
    schedule: &DiscountSchedule,
) -> Vec<TimedTollRow> {
    edges
        .iter()
        .map(|edge| {
            let factor = schedule.factor_for(edge.span.start_day, edge.span.start_time);
            let mut tolls = price(edge.distance, rates);
            for toll in &mut tolls {
                if toll.class == schedule.target_class() {
                    toll.amount = round_to_tenth(toll.amount * factor);
                }
            }

            TimedTollRow {
                span: edge.span,
                distance: edge.distance,
                tolls,
                applied_factor: factor,
            }
        })
        .collect()
}

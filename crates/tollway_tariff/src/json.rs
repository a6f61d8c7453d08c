use jiff::civil::Time;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::error::TariffError;
use crate::rate_table::{RateEntry, RateTable};
use crate::schedule::{DiscountSchedule, DiscountWindow};
use crate::vehicle_class::VehicleClass;

/// Tariff configuration as supplied by callers: the flat rate table plus
/// the time-based discount scheme for one target class.
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Tariff")]
pub struct JsonTariff {
    pub rates: Vec<RateEntry>,
    pub windows: Vec<JsonDiscountWindow>,
    pub weekend_factor: f64,
    pub target_class: VehicleClass,
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "DiscountWindow")]
pub struct JsonDiscountWindow {
    pub start: Time,
    pub end: Time,
    pub factor: f64,
}

impl JsonTariff {
    /// Validates the raw configuration into a rate table and discount
    /// schedule. All config errors surface here, before any pricing.
    pub fn into_tariff(self) -> Result<(RateTable, DiscountSchedule), TariffError> {
        let rates = RateTable::new(self.rates)?;

        let windows = self
            .windows
            .into_iter()
            .map(|window| DiscountWindow::new(window.start, window.end, window.factor))
            .collect();
        let schedule = DiscountSchedule::new(windows, self.weekend_factor, self.target_class)?;

        debug!(
            rates = rates.entries().len(),
            windows = schedule.windows().len(),
            "validated tariff configuration"
        );

        Ok((rates, schedule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_and_validate() {
        let raw = r#"{
            "rates": [
                { "class": "car", "multiplier": 1.2 },
                { "class": "truck", "multiplier": 3.6 }
            ],
            "windows": [
                { "start": "00:00:00", "end": "10:00:00", "factor": 0.8 },
                { "start": "10:00:00", "end": "18:00:00", "factor": 1.2 },
                { "start": "18:00:00", "end": "23:59:59", "factor": 0.8 }
            ],
            "weekend_factor": 0.7,
            "target_class": "car"
        }"#;

        let tariff: JsonTariff = serde_json::from_str(raw).unwrap();
        let (rates, schedule) = tariff.into_tariff().unwrap();

        assert_eq!(rates.multiplier(VehicleClass::Car), Some(1.2));
        assert_eq!(schedule.windows().len(), 3);
        assert_eq!(schedule.target_class(), VehicleClass::Car);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let raw = r#"{
            "rates": [],
            "windows": [],
            "weekend_factor": 0.7,
            "target_class": "car",
            "surprise": true
        }"#;

        assert!(serde_json::from_str::<JsonTariff>(raw).is_err());
    }

    #[test]
    fn test_invalid_schedule_fails_validation() {
        let raw = r#"{
            "rates": [{ "class": "car", "multiplier": 1.2 }],
            "windows": [
                { "start": "00:00:00", "end": "10:00:00", "factor": 0.8 }
            ],
            "weekend_factor": 0.7,
            "target_class": "car"
        }"#;

        let tariff: JsonTariff = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            tariff.into_tariff(),
            Err(TariffError::ScheduleEndsEarly { .. })
        ));
    }
}

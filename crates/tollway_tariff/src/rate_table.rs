use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TariffError;
use crate::vehicle_class::VehicleClass;

/// One flat distance multiplier for a vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Rate")]
pub struct RateEntry {
    pub class: VehicleClass,
    pub multiplier: f64,
}

impl RateEntry {
    pub fn new(class: VehicleClass, multiplier: f64) -> Self {
        RateEntry { class, multiplier }
    }
}

/// Ordered flat-rate multipliers, at most one entry per vehicle class.
/// Validated at construction so that rate application stays total.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Result<Self, TariffError> {
        let mut seen: Vec<VehicleClass> = Vec::with_capacity(entries.len());

        for entry in &entries {
            if !entry.multiplier.is_finite() {
                return Err(TariffError::NonFiniteRate { class: entry.class });
            }
            if entry.multiplier < 0.0 {
                return Err(TariffError::NegativeRate {
                    class: entry.class,
                    multiplier: entry.multiplier,
                });
            }
            if seen.contains(&entry.class) {
                return Err(TariffError::DuplicateClass { class: entry.class });
            }
            seen.push(entry.class);
        }

        Ok(RateTable { entries })
    }

    /// Entries in table order, which is also the column order of
    /// priced rows.
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn multiplier(&self, class: VehicleClass) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.class == class)
            .map(|entry| entry.multiplier)
    }
}

impl Default for RateTable {
    /// Reference rates: moto 0.8, car 1.2, rv 1.5, bus 2.2, truck 3.6.
    fn default() -> Self {
        RateTable {
            entries: vec![
                RateEntry::new(VehicleClass::Moto, 0.8),
                RateEntry::new(VehicleClass::Car, 1.2),
                RateEntry::new(VehicleClass::Rv, 1.5),
                RateEntry::new(VehicleClass::Bus, 2.2),
                RateEntry::new(VehicleClass::Truck, 3.6),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_every_class() {
        let table = RateTable::default();

        for class in VehicleClass::ALL {
            assert!(table.multiplier(class).is_some());
        }
        assert_eq!(table.multiplier(VehicleClass::Car), Some(1.2));
    }

    #[test]
    fn test_negative_multiplier_is_rejected() {
        let result = RateTable::new(vec![RateEntry::new(VehicleClass::Bus, -1.0)]);

        assert!(matches!(
            result,
            Err(TariffError::NegativeRate {
                class: VehicleClass::Bus,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_class_is_rejected() {
        let result = RateTable::new(vec![
            RateEntry::new(VehicleClass::Car, 1.2),
            RateEntry::new(VehicleClass::Car, 2.0),
        ]);

        assert!(matches!(
            result,
            Err(TariffError::DuplicateClass {
                class: VehicleClass::Car
            })
        ));
    }

    #[test]
    fn test_zero_multiplier_is_allowed() {
        let table = RateTable::new(vec![RateEntry::new(VehicleClass::Moto, 0.0)]).unwrap();

        assert_eq!(table.multiplier(VehicleClass::Moto), Some(0.0));
    }
}

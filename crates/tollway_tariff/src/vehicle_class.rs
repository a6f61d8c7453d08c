use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The vehicle classes tolled by the network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Moto,
    Car,
    Rv,
    Bus,
    Truck,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 5] = [
        VehicleClass::Moto,
        VehicleClass::Car,
        VehicleClass::Rv,
        VehicleClass::Bus,
        VehicleClass::Truck,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleClass::Moto => "moto",
            VehicleClass::Car => "car",
            VehicleClass::Rv => "rv",
            VehicleClass::Bus => "bus",
            VehicleClass::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

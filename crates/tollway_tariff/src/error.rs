use jiff::civil::Time;
use thiserror::Error;

use crate::vehicle_class::VehicleClass;

#[derive(Debug, Error)]
pub enum TariffError {
    #[error("negative multiplier {multiplier} for vehicle class {class}")]
    NegativeRate {
        class: VehicleClass,
        multiplier: f64,
    },

    #[error("multiplier for vehicle class {class} is not finite")]
    NonFiniteRate { class: VehicleClass },

    #[error("vehicle class {class} appears more than once in the rate table")]
    DuplicateClass { class: VehicleClass },

    #[error("a discount schedule needs at least one window")]
    EmptySchedule,

    #[error("discount factor {factor} is not a finite non-negative number")]
    InvalidFactor { factor: f64 },

    #[error("discount window from {start} to {end} is empty")]
    EmptyWindow { start: Time, end: Time },

    #[error("discount windows must cover the day without gaps or overlaps: expected a window starting at {expected}, found {found}")]
    CoverageBreak { expected: Time, found: Time },

    #[error("the first discount window must start at 00:00:00, not {start}")]
    ScheduleStartsLate { start: Time },

    #[error("the last discount window must end at 23:59:59, not {end}")]
    ScheduleEndsEarly { end: Time },

    #[error("span key {key:?} is not of the form HH:MM:SS_Weekday")]
    MalformedSpanKey { key: String },

    #[error("unknown weekday {name:?} in span key")]
    UnknownWeekday { name: String },

    #[error("invalid time of day in span key")]
    InvalidTime(#[from] jiff::Error),
}

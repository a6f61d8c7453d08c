use jiff::civil::{Time, Weekday, time};

use crate::error::TariffError;
use crate::vehicle_class::VehicleClass;

const DAY_START: Time = time(0, 0, 0, 0);
const DAY_END: Time = time(23, 59, 59, 0);

/// A time-of-day interval carrying a toll discount factor.
///
/// Windows are start-inclusive and end-exclusive; the last window of a
/// schedule additionally includes everything up to the end of the day,
/// so its nominal end instant matches too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountWindow {
    start: Time,
    end: Time,
    factor: f64,
}

impl DiscountWindow {
    pub fn new(start: Time, end: Time, factor: f64) -> Self {
        DiscountWindow { start, end, factor }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

/// Weekday discount windows plus a flat weekend factor, applied to a
/// single target vehicle class.
///
/// Construction validates that the windows cover the whole day
/// contiguously, which makes classification independent of window
/// iteration order: every time of day belongs to exactly one window.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountSchedule {
    windows: Vec<DiscountWindow>,
    weekend_factor: f64,
    target_class: VehicleClass,
}

impl DiscountSchedule {
    pub fn new(
        windows: Vec<DiscountWindow>,
        weekend_factor: f64,
        target_class: VehicleClass,
    ) -> Result<Self, TariffError> {
        if !weekend_factor.is_finite() || weekend_factor < 0.0 {
            return Err(TariffError::InvalidFactor {
                factor: weekend_factor,
            });
        }

        let first = windows.first().ok_or(TariffError::EmptySchedule)?;
        if first.start() != DAY_START {
            return Err(TariffError::ScheduleStartsLate {
                start: first.start(),
            });
        }

        for (index, window) in windows.iter().enumerate() {
            if !window.factor().is_finite() || window.factor() < 0.0 {
                return Err(TariffError::InvalidFactor {
                    factor: window.factor(),
                });
            }
            if window.start() >= window.end() {
                return Err(TariffError::EmptyWindow {
                    start: window.start(),
                    end: window.end(),
                });
            }
            if index > 0 && window.start() != windows[index - 1].end() {
                return Err(TariffError::CoverageBreak {
                    expected: windows[index - 1].end(),
                    found: window.start(),
                });
            }
        }

        let last_end = windows[windows.len() - 1].end();
        if last_end != DAY_END {
            return Err(TariffError::ScheduleEndsEarly { end: last_end });
        }

        Ok(DiscountSchedule {
            windows,
            weekend_factor,
            target_class,
        })
    }

    pub fn windows(&self) -> &[DiscountWindow] {
        &self.windows
    }

    pub fn weekend_factor(&self) -> f64 {
        self.weekend_factor
    }

    pub fn target_class(&self) -> VehicleClass {
        self.target_class
    }

    pub fn is_weekend(day: Weekday) -> bool {
        matches!(day, Weekday::Saturday | Weekday::Sunday)
    }

    /// Discount factor for a travel span starting on `day` at `at`.
    /// Weekends take the flat weekend factor without any window lookup.
    pub fn factor_for(&self, day: Weekday, at: Time) -> f64 {
        if Self::is_weekend(day) {
            return self.weekend_factor;
        }

        for (index, window) in self.windows.iter().enumerate() {
            let is_last = index + 1 == self.windows.len();
            if at >= window.start() && (at < window.end() || is_last) {
                return window.factor();
            }
        }

        // Construction guarantees contiguous coverage from 00:00:00, so
        // the last window always catches the remainder of the day.
        unreachable!("discount windows cover the full day")
    }
}

impl Default for DiscountSchedule {
    /// Reference schedule: weekdays x0.8 until 10:00, x1.2 until 18:00,
    /// x0.8 for the rest of the day; weekends a flat x0.7. Applies to
    /// cars.
    fn default() -> Self {
        DiscountSchedule {
            windows: vec![
                DiscountWindow::new(DAY_START, time(10, 0, 0, 0), 0.8),
                DiscountWindow::new(time(10, 0, 0, 0), time(18, 0, 0, 0), 1.2),
                DiscountWindow::new(time(18, 0, 0, 0), DAY_END, 0.8),
            ],
            weekend_factor: 0.7,
            target_class: VehicleClass::Car,
        }
    }
}

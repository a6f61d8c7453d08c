use jiff::civil::{Time, Weekday};

use tollway_network::edge::Distance;

use crate::error::TariffError;
use crate::schedule::DiscountSchedule;

/// The day-and-time span carried by a compound `"HH:MM:SS_Weekday"` key
/// pair. Classification only reads the start fields; the end fields ride
/// along for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelSpan {
    pub start_day: Weekday,
    pub end_day: Weekday,
    pub start_time: Time,
    pub end_time: Time,
}

impl TravelSpan {
    /// Splits a compound key pair into discrete weekday and time-of-day
    /// fields.
    pub fn parse(id_start: &str, id_end: &str) -> Result<Self, TariffError> {
        let (start_time, start_day) = parse_span_key(id_start)?;
        let (end_time, end_day) = parse_span_key(id_end)?;

        Ok(TravelSpan {
            start_day,
            end_day,
            start_time,
            end_time,
        })
    }

    pub fn is_weekend(&self) -> bool {
        DiscountSchedule::is_weekend(self.start_day)
    }
}

/// One unrolled row whose endpoints carry travel-span keys instead of
/// checkpoint ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEdge {
    pub span: TravelSpan,
    pub distance: Distance,
}

impl TimedEdge {
    pub fn new(span: TravelSpan, distance: Distance) -> Self {
        TimedEdge { span, distance }
    }
}

fn parse_span_key(key: &str) -> Result<(Time, Weekday), TariffError> {
    let malformed = || TariffError::MalformedSpanKey {
        key: key.to_owned(),
    };

    let (clock, day) = key.split_once('_').ok_or_else(malformed)?;

    let mut fields = clock.split(':');
    let (Some(hour), Some(minute), Some(second), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let hour: i8 = hour.parse().map_err(|_| malformed())?;
    let minute: i8 = minute.parse().map_err(|_| malformed())?;
    let second: i8 = second.parse().map_err(|_| malformed())?;
    let time = Time::new(hour, minute, second, 0)?;

    let day = parse_weekday(day).ok_or_else(|| TariffError::UnknownWeekday {
        name: day.to_owned(),
    })?;

    Ok((time, day))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "Monday" => Some(Weekday::Monday),
        "Tuesday" => Some(Weekday::Tuesday),
        "Wednesday" => Some(Weekday::Wednesday),
        "Thursday" => Some(Weekday::Thursday),
        "Friday" => Some(Weekday::Friday),
        "Saturday" => Some(Weekday::Saturday),
        "Sunday" => Some(Weekday::Sunday),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_parse_compound_keys() {
        let span = TravelSpan::parse("08:30:00_Monday", "10:00:00_Tuesday").unwrap();

        assert_eq!(span.start_day, Weekday::Monday);
        assert_eq!(span.end_day, Weekday::Tuesday);
        assert_eq!(span.start_time, time(8, 30, 0, 0));
        assert_eq!(span.end_time, time(10, 0, 0, 0));
        assert!(!span.is_weekend());
    }

    #[test]
    fn test_saturday_span_is_weekend() {
        let span = TravelSpan::parse("23:59:59_Saturday", "01:00:00_Sunday").unwrap();

        assert!(span.is_weekend());
    }

    #[test]
    fn test_missing_day_separator() {
        let result = TravelSpan::parse("08:30:00", "10:00:00_Tuesday");

        assert!(matches!(
            result,
            Err(TariffError::MalformedSpanKey { key }) if key == "08:30:00"
        ));
    }

    #[test]
    fn test_too_few_clock_fields() {
        let result = TravelSpan::parse("08:30_Monday", "10:00:00_Tuesday");

        assert!(matches!(result, Err(TariffError::MalformedSpanKey { .. })));
    }

    #[test]
    fn test_out_of_range_hour() {
        let result = TravelSpan::parse("25:00:00_Monday", "10:00:00_Tuesday");

        assert!(matches!(result, Err(TariffError::InvalidTime(_))));
    }

    #[test]
    fn test_unknown_weekday() {
        let result = TravelSpan::parse("08:30:00_Mondayy", "10:00:00_Tuesday");

        assert!(matches!(
            result,
            Err(TariffError::UnknownWeekday { name }) if name == "Mondayy"
        ));
    }
}

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Calendar week in the form `2024-W07`.
///
/// The week number is not ISO 8601. It is `ceil((d + w + 1) / 7)`, where `d`
/// is the fractional number of days elapsed since January 1st 00:00 and `w`
/// is the weekday of January 1st counted from Sunday. Labels of stored data
/// depend on this exact arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekLabel {
    pub year: i32,
    pub week: u32,
}

impl WeekLabel {
    #[must_use]
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        let year = datetime.year();
        let jan_first = NaiveDate::from_yo_opt(year, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(datetime);

        #[allow(clippy::cast_precision_loss)]
        let elapsed_days =
            (datetime - jan_first).num_milliseconds() as f64 / MILLISECONDS_PER_DAY;
        let weekday = f64::from(jan_first.weekday().num_days_from_sunday());

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let week = ((elapsed_days + weekday + 1.0) / 7.0).ceil() as u32;

        Self { year, week }
    }
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[rstest]
    #[case::monday_new_year(datetime(2024, 1, 1, 12, 0, 0), "2024-W01")]
    #[case::mid_march(datetime(2024, 3, 15, 12, 0, 0), "2024-W11")]
    #[case::leap_year_end(datetime(2024, 12, 31, 12, 0, 0), "2024-W53")]
    #[case::sunday_new_year(datetime(2023, 1, 1, 8, 0, 0), "2023-W01")]
    #[case::first_saturday_midnight(datetime(2023, 1, 7, 0, 0, 0), "2023-W01")]
    #[case::first_saturday_after_midnight(datetime(2023, 1, 7, 0, 0, 1), "2023-W02")]
    #[case::new_year_midnight(datetime(2023, 1, 1, 0, 0, 0), "2023-W01")]
    #[case::saturday_new_year_midnight(datetime(2022, 1, 1, 0, 0, 0), "2022-W01")]
    #[case::saturday_new_year_morning(datetime(2022, 1, 1, 9, 30, 0), "2022-W02")]
    #[case::first_sunday(datetime(2022, 1, 2, 9, 30, 0), "2022-W02")]
    fn test_week_label(#[case] input: NaiveDateTime, #[case] expected: &str) {
        assert_eq!(WeekLabel::from_datetime(input).to_string(), expected);
    }

    #[test]
    fn test_week_label_order_matches_text_order() {
        let labels = [
            datetime(2023, 12, 30, 10, 0, 0),
            datetime(2024, 1, 3, 10, 0, 0),
            datetime(2024, 2, 20, 10, 0, 0),
            datetime(2024, 11, 20, 10, 0, 0),
        ]
        .map(WeekLabel::from_datetime);

        assert!(labels.windows(2).all(|w| w[0] < w[1]));
        assert!(
            labels
                .windows(2)
                .all(|w| w[0].to_string() < w[1].to_string())
        );
    }
}

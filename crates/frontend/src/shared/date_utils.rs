/// Utilities for date and time formatting
///
/// Table cells show dates as `DD.MM.YYYY`; inputs keep ISO `YYYY-MM-DD`.
use chrono::{DateTime, NaiveDate, Utc};

pub fn format_date_value(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Timestamps are shown in UTC, as the backend stores them.
pub fn format_datetime_value(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Today's date as `YYYY-MM-DD`, the value format of date inputs.
pub fn today_iso() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date_value() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date_value(date), "05.01.2024");
    }

    #[test]
    fn test_format_datetime_value() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime_value(dt), "15.03.2024 14:02:26");
        let end_of_year = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime_value(end_of_year), "31.12.2024 23:59:59");
    }
}

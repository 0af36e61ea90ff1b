// src/process/date_parser.rs

use chrono::{Datelike, NaiveDate};

/// Grouping key used when a booking date cannot be parsed.
pub const UNPARSEABLE_MONTH_YEAR: &str = "NaN-NaN";

/// The date part of a `Fecha` cell: everything before the first space.
pub fn date_part(fecha: &str) -> &str {
    fecha.split(' ').next().unwrap_or("")
}

/// Parse `YYYY-MM-DD`, `YYYY/MM/DD` or the sheet export's `M/D/YYYY`
/// into a calendar date. Slashed dates with the year last are month first.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// `"{month}-{year}"` with a 1-based, unpadded month, e.g. `"1-2024"`.
pub fn month_year(date: &str) -> Option<String> {
    parse_date(date).map(|d| format!("{}-{}", d.month(), d.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_part_strips_time() {
        assert_eq!(date_part("2024-01-05 10:00"), "2024-01-05");
        assert_eq!(date_part("2024-01-05"), "2024-01-05");
        assert_eq!(date_part(""), "");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(month_year("2024-01-05").as_deref(), Some("1-2024"));
        assert_eq!(month_year("2023-12-31").as_deref(), Some("12-2023"));
        assert_eq!(month_year("2023/11/02").as_deref(), Some("11-2023"));
        assert_eq!(month_year("1/5/2024").as_deref(), Some("1-2024"));
        assert_eq!(month_year("12/31/2023").as_deref(), Some("12-2023"));
        assert_eq!(month_year("2024-1-5").as_deref(), Some("1-2024"));
    }

    #[test]
    fn test_month_year_rejects_garbage() {
        assert_eq!(month_year(""), None);
        assert_eq!(month_year("mañana"), None);
        assert_eq!(month_year("2024-13-01"), None);
        assert_eq!(month_year("31/12/2023"), None);
    }
}

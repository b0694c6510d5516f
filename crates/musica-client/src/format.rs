//! Display helpers shared by every view.

use chrono::NaiveDateTime;

/// `M:SS`, minutes unbounded. Non-positive input renders as `0:00`.
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `DD/MM/YYYY`.
pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timestamp;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(-5), "0:00");
        assert_eq!(format_duration(9), "0:09");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(183), "3:03");
        assert_eq!(format_duration(354), "5:54");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_format_date() {
        let ts = timestamp::parse("2024-11-13T10:30:00").unwrap();
        assert_eq!(format_date(&ts), "13/11/2024");
    }
}

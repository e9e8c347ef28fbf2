//! Print-date handling for voucher reports
//!
//! Vouchers are stamped in Manila time (UTC+8, no daylight saving)
//! regardless of where the report host runs.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

const MANILA_UTC_OFFSET_HOURS: i32 = 8;

/// The Manila/Cebu fixed offset
pub fn manila_offset() -> FixedOffset {
    // Statically within FixedOffset's valid range
    FixedOffset::east_opt(MANILA_UTC_OFFSET_HOURS * 3600).expect("UTC+8 is a valid offset")
}

/// Current time in Manila
pub fn manila_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&manila_offset())
}

/// Format a timestamp as `"Mon D, YYYY H:MM am/pm"`, the date-printed
/// stamp at the foot of every voucher
pub fn format_print_date(date: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {}, {} {}",
        date.format("%b"),
        date.day(),
        date.year(),
        format_ampm(date)
    )
}

/// Format the time-of-day portion as `"H:MM am/pm"`
pub fn format_ampm(date: &DateTime<FixedOffset>) -> String {
    let (is_pm, hour) = date.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        date.minute(),
        if is_pm { "pm" } else { "am" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn manila(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
        manila_offset().with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_format_print_date() {
        assert_eq!(format_print_date(&manila(2026, 8, 29, 15, 7)), "Aug 29, 2026 3:07 pm");
        assert_eq!(format_print_date(&manila(2026, 1, 5, 9, 30)), "Jan 5, 2026 9:30 am");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_ampm(&manila(2026, 3, 1, 0, 0)), "12:00 am");
        assert_eq!(format_ampm(&manila(2026, 3, 1, 12, 0)), "12:00 pm");
    }

    #[test]
    fn test_manila_now_carries_utc8() {
        assert_eq!(manila_now().offset().local_minus_utc(), 8 * 3600);
    }
}

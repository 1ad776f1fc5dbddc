//! Expiry checks.
//!
//! A batch is "expiring soon" when it expires within [`EXPIRING_SOON_WINDOW_DAYS`]
//! of the reference instant. There is no separate expired category: a batch
//! that has already expired has a negative day count and is reported as
//! expiring soon too.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use pharmadesk_core::{DomainError, DomainResult};

/// Inclusive look-ahead window, in days.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 90;

/// Midnight at the start of `date`, for date-only references.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Whole days from `reference` until the start of the expiry date.
///
/// A partial day counts as a full one (ceiling), so a reference taken at
/// 10:00 still sees a batch expiring 90 calendar days later as 90 days out.
/// Negative once the expiry date has passed. Sub-second remainders count.
pub fn days_until_expiry(expiry: NaiveDate, reference: NaiveDateTime) -> i64 {
    let delta = start_of_day(expiry) - reference;
    let days = delta.num_days();
    if delta - Duration::days(days) > Duration::zero() {
        days + 1
    } else {
        days
    }
}

pub fn is_expiring_soon(expiry: NaiveDate, reference: NaiveDateTime) -> bool {
    days_until_expiry(expiry, reference) <= EXPIRING_SOON_WINDOW_DAYS
}

/// Textual variant for values coming straight from a form or file.
pub fn is_expiring_soon_str(expiry: &str, reference: &str) -> DomainResult<bool> {
    Ok(is_expiring_soon(parse_date(expiry)?, parse_reference(reference)?))
}

/// Parse an expiry date: `YYYY-MM-DD`, or the date part of an RFC 3339
/// timestamp (in the timestamp's own offset).
pub fn parse_date(input: &str) -> DomainResult<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }

    Err(DomainError::invalid_date(format!(
        "'{input}' is not a YYYY-MM-DD date or RFC 3339 timestamp"
    )))
}

/// Parse a reference instant: a bare date means midnight; an RFC 3339
/// timestamp keeps its time of day, converted to UTC.
pub fn parse_reference(input: &str) -> DomainResult<NaiveDateTime> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.naive_utc());
    }

    Err(DomainError::invalid_date(format!(
        "'{input}' is not a YYYY-MM-DD date or RFC 3339 timestamp"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn window_edge_is_inclusive() {
        let reference = start_of_day(reference_date());
        let day_90 = reference_date() + Duration::days(90);
        let day_91 = reference_date() + Duration::days(91);

        assert_eq!(days_until_expiry(day_90, reference), 90);
        assert!(is_expiring_soon(day_90, reference));
        assert!(!is_expiring_soon(day_91, reference));
    }

    #[test]
    fn time_of_day_rounds_up_to_whole_days() {
        let reference = reference_date().and_hms_opt(10, 30, 0).unwrap();
        let day_90 = reference_date() + Duration::days(90);
        let day_91 = reference_date() + Duration::days(91);

        // 89 days 13.5 hours rounds up to 90.
        assert_eq!(days_until_expiry(day_90, reference), 90);
        assert!(is_expiring_soon(day_90, reference));
        assert_eq!(days_until_expiry(day_91, reference), 91);
        assert!(!is_expiring_soon(day_91, reference));
    }

    #[test]
    fn fractional_seconds_round_up_past_the_window() {
        // 90 days and half a second before the expiry date.
        let reference = parse_reference("2026-10-17T23:59:59.5Z").unwrap();
        let expiry = parse_date("2027-01-16").unwrap();

        assert_eq!(days_until_expiry(expiry, reference), 91);
        assert!(!is_expiring_soon(expiry, reference));

        let reference = parse_reference("2026-10-18T00:00:00.001Z").unwrap();
        assert_eq!(days_until_expiry(expiry, reference), 90);
        assert!(is_expiring_soon(expiry, reference));
    }

    #[test]
    fn expired_batches_count_as_expiring_soon() {
        let reference = start_of_day(reference_date());
        let last_month = reference_date() - Duration::days(30);

        assert_eq!(days_until_expiry(last_month, reference), -30);
        assert!(is_expiring_soon(last_month, reference));
    }

    #[test]
    fn partial_days_in_the_past_round_toward_zero() {
        // Expired yesterday at midnight; reference is 06:00 today: -1.25 days.
        let reference = reference_date().and_hms_opt(6, 0, 0).unwrap();
        let yesterday = reference_date() - Duration::days(1);
        assert_eq!(days_until_expiry(yesterday, reference), -1);
        assert_eq!(days_until_expiry(reference_date(), reference), 0);
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_date("2027-01-15").unwrap(), NaiveDate::from_ymd_opt(2027, 1, 15).unwrap());
        assert_eq!(
            parse_date("2027-01-15T23:30:00+05:30").unwrap(),
            NaiveDate::from_ymd_opt(2027, 1, 15).unwrap()
        );
        assert_eq!(
            parse_reference("2026-10-18T10:00:00Z").unwrap(),
            reference_date().and_hms_opt(10, 0, 0).unwrap()
        );
        assert_eq!(parse_reference(" 2026-10-18 ").unwrap(), start_of_day(reference_date()));
    }

    #[test]
    fn unparseable_dates_fail_with_invalid_date() {
        for input in ["", "31/12/2026", "2026-02-30", "next tuesday"] {
            match parse_date(input) {
                Err(DomainError::InvalidDate(msg)) => assert!(msg.contains("YYYY-MM-DD")),
                other => panic!("Expected InvalidDate for {input:?}, got {other:?}"),
            }
        }
        assert!(matches!(
            is_expiring_soon_str("2027-01-01", "yesterday"),
            Err(DomainError::InvalidDate(_))
        ));
    }

    #[test]
    fn textual_check_matches_typed_check() {
        assert!(is_expiring_soon_str("2027-01-16", "2026-10-18").unwrap());
        assert!(!is_expiring_soon_str("2027-01-17", "2026-10-18").unwrap());
    }
}

//! Cookie lifetime handling.
//!
//! [`Expiry`] models the values the `expires` option accepts: a relative
//! lifetime in seconds, an absolute date, the removal sentinel, a
//! preformatted attribute string, or nothing at all (a session cookie).
//! Dates are rendered in the fixed GMT shape browsers produce, e.g.
//! `Thu, 01 Jan 1970 00:00:01 GMT`.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// The fixed past date used to delete a cookie immediately.
pub const REMOVAL_DATE: &str = "Thu, 01 Jan 1970 00:00:01 GMT";

/// The only date format this crate emits for `expires`.
const COOKIE_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Lifetime of a cookie, as accepted by the `expires` option.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Expiry {
    /// No `expires` attribute: the cookie lives for the browsing session.
    #[default]
    Session,
    /// Relative lifetime, serialized as "now plus N seconds". Negative
    /// values land in the past and delete the cookie. A lifetime that
    /// leaves the representable date range emits no attribute.
    Seconds(i64),
    /// Absolute expiration instant, normalized to UTC on serialization.
    At(OffsetDateTime),
    /// Delete immediately; serializes to [`REMOVAL_DATE`].
    Remove,
    /// Preformatted attribute value, passed through as supplied.
    Raw(String),
}

impl Expiry {
    /// Renders the `expires` attribute value, or `None` when no attribute
    /// should be emitted.
    pub fn attribute_value(&self) -> Option<String> {
        self.attribute_value_at(OffsetDateTime::now_utc())
    }

    fn attribute_value_at(&self, now: OffsetDateTime) -> Option<String> {
        match self {
            Expiry::Session => None,
            Expiry::Seconds(secs) => now
                .checked_add(Duration::seconds(*secs))
                .and_then(format_cookie_date),
            Expiry::At(date) => format_cookie_date(*date),
            Expiry::Remove => Some(REMOVAL_DATE.to_string()),
            Expiry::Raw(value) => Some(value.clone()),
        }
    }
}

impl From<i64> for Expiry {
    /// `0` means a session cookie and `-1` the removal sentinel; anything
    /// else is a relative lifetime in seconds.
    fn from(seconds: i64) -> Self {
        match seconds {
            0 => Expiry::Session,
            -1 => Expiry::Remove,
            n => Expiry::Seconds(n),
        }
    }
}

impl From<OffsetDateTime> for Expiry {
    fn from(date: OffsetDateTime) -> Self {
        Expiry::At(date)
    }
}

impl From<std::time::Duration> for Expiry {
    fn from(lifetime: std::time::Duration) -> Self {
        Expiry::Seconds(i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Expiry {
    /// Numeric strings follow the numeric rules; anything else is kept as a
    /// preformatted attribute value.
    fn from(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(seconds) => Expiry::from(seconds),
            Err(_) => Expiry::Raw(value.to_string()),
        }
    }
}

impl From<String> for Expiry {
    fn from(value: String) -> Self {
        Expiry::from(value.as_str())
    }
}

fn format_cookie_date(date: OffsetDateTime) -> Option<String> {
    date.to_offset(UtcOffset::UTC).format(&COOKIE_DATE).ok()
}

/// Parses a date in [`COOKIE_DATE`] shape back into a UTC instant. Used by
/// hosts that evaluate `expires` on assignment.
pub(crate) fn parse_cookie_date(value: &str) -> Option<OffsetDateTime> {
    PrimitiveDateTime::parse(value.trim(), &COOKIE_DATE)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn session_emits_no_attribute() {
        assert!(Expiry::Session.attribute_value().is_none());
    }

    #[test]
    fn removal_serializes_to_the_fixed_epoch_date() {
        assert_eq!(
            Expiry::Remove.attribute_value().as_deref(),
            Some("Thu, 01 Jan 1970 00:00:01 GMT")
        );
    }

    #[test]
    fn seconds_are_relative_to_now() {
        let now = datetime!(2024-05-04 10:00:00 UTC);
        let value = Expiry::Seconds(60).attribute_value_at(now);
        assert_eq!(value.as_deref(), Some("Sat, 04 May 2024 10:01:00 GMT"));
    }

    #[test]
    fn negative_seconds_land_in_the_past() {
        let now = datetime!(2024-05-04 10:00:00 UTC);
        let value = Expiry::Seconds(-3600).attribute_value_at(now);
        assert_eq!(value.as_deref(), Some("Sat, 04 May 2024 09:00:00 GMT"));
    }

    #[test]
    fn out_of_range_lifetimes_emit_no_attribute() {
        let now = datetime!(2024-05-04 10:00:00 UTC);
        assert!(Expiry::Seconds(i64::MAX).attribute_value_at(now).is_none());
        assert!(Expiry::Seconds(i64::MIN).attribute_value_at(now).is_none());
        // Roughly 12,000 years out: past the formattable year range.
        assert!(Expiry::Seconds(400_000_000_000)
            .attribute_value_at(now)
            .is_none());
    }

    #[test]
    fn absolute_dates_are_normalized_to_utc() {
        let date = datetime!(2030-01-15 10:30:00 UTC).to_offset(offset!(+2));
        let value = Expiry::At(date).attribute_value();
        assert_eq!(value.as_deref(), Some("Tue, 15 Jan 2030 10:30:00 GMT"));
    }

    #[test]
    fn raw_values_pass_through_unchanged() {
        let expiry = Expiry::Raw("Fri, 31 Dec 2100 23:59:59 GMT".to_string());
        assert_eq!(
            expiry.attribute_value().as_deref(),
            Some("Fri, 31 Dec 2100 23:59:59 GMT")
        );
    }

    #[test]
    fn numeric_conversions_follow_the_sentinel_rules() {
        assert_eq!(Expiry::from(0), Expiry::Session);
        assert_eq!(Expiry::from(-1), Expiry::Remove);
        assert_eq!(Expiry::from(90), Expiry::Seconds(90));
    }

    #[test]
    fn string_conversions_detect_numbers() {
        assert_eq!(Expiry::from("3600"), Expiry::Seconds(3600));
        assert_eq!(Expiry::from("-1"), Expiry::Remove);
        assert_eq!(Expiry::from("0"), Expiry::Session);
        assert_eq!(
            Expiry::from("Fri, 31 Dec 2100 23:59:59 GMT"),
            Expiry::Raw("Fri, 31 Dec 2100 23:59:59 GMT".to_string())
        );
    }

    #[test]
    fn duration_conversion_counts_whole_seconds() {
        assert_eq!(
            Expiry::from(std::time::Duration::from_secs(120)),
            Expiry::Seconds(120)
        );
    }

    #[test]
    fn parse_inverts_format() {
        let date = datetime!(2027-03-01 08:00:00 UTC);
        let formatted = Expiry::At(date).attribute_value().unwrap();
        assert_eq!(formatted, "Mon, 01 Mar 2027 08:00:00 GMT");
        assert_eq!(parse_cookie_date(&formatted), Some(date));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_cookie_date("tomorrow-ish").is_none());
        assert!(parse_cookie_date("").is_none());
    }
}

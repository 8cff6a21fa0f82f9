//! Expiration policy
//!
//! A bottle expires 30 days after it arrives. Its remaining doses are flagged
//! as expiring soon during the last 10 days of that window, so from 20 days
//! after arrival onwards.
//!
//! Some checks compare full instants and some compare calendar dates. Each
//! helper says which one it uses.
//!
//! Offsets past the largest representable date yield `None`; such a bottle
//! never reaches the corresponding threshold.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Days from arrival until a bottle expires
pub const EXPIRATION_DAYS: i64 = 30;

/// Days before expiration at which the expiring-soon warning starts
pub const WARNING_LEAD_DAYS: i64 = 10;

/// Days from arrival until the expiring-soon warning starts
pub const WARNING_OPENS_AFTER_DAYS: i64 = EXPIRATION_DAYS - WARNING_LEAD_DAYS;

/// Instant at which a bottle arriving at `arrived` expires
pub fn expires_at(arrived: NaiveDateTime) -> Option<NaiveDateTime> {
    arrived.checked_add_signed(TimeDelta::days(EXPIRATION_DAYS))
}

/// Instant from which a bottle arriving at `arrived` is expiring soon
pub fn warning_opens_at(arrived: NaiveDateTime) -> Option<NaiveDateTime> {
    arrived.checked_add_signed(TimeDelta::days(WARNING_OPENS_AFTER_DAYS))
}

/// Calendar day on which a bottle arriving at `arrived` expires
pub fn expiry_day(arrived: NaiveDateTime) -> Option<NaiveDate> {
    arrived.date().checked_add_signed(TimeDelta::days(EXPIRATION_DAYS))
}

/// Instant comparison, strict: the expiry instant itself is not yet expired
pub fn is_past_expiry(arrived: NaiveDateTime, t: NaiveDateTime) -> bool {
    expires_at(arrived).is_some_and(|expiry| expiry < t)
}

/// Instant comparison: true once `t` reaches the warning threshold
pub fn is_in_warning_period(arrived: NaiveDateTime, t: NaiveDateTime) -> bool {
    warning_opens_at(arrived).is_some_and(|opens| opens <= t)
}

/// Calendar comparison: true when `arrived` falls on a later date than `t`
pub fn arrives_after_day_of(arrived: NaiveDateTime, t: NaiveDateTime) -> bool {
    arrived.date() > t.date()
}

/// Calendar comparison ignoring time of day
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

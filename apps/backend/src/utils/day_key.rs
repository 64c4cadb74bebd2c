//! Day keys: the calendar-day string that identifies one game cycle.
//!
//! Every player worldwide rolls over at the same instant, so the key is
//! derived in one fixed timezone rather than the client's local clock.

use time::{OffsetDateTime, UtcOffset};

/// Display name of the game's timezone.
pub const DAY_TZ: &str = "America/Argentina/Buenos_Aires";

/// Fixed offset of [`DAY_TZ`]; Argentina observes no DST, so a constant
/// offset is exact year-round.
const DAY_TZ_OFFSET_HOURS: i8 = -3;

/// Current day key, `YYYY-MM-DD` in the game timezone.
pub fn current_day_key() -> String {
    day_key_at(OffsetDateTime::now_utc())
}

/// Day key for an arbitrary instant (testable without a clock).
pub fn day_key_at(instant: OffsetDateTime) -> String {
    let offset = UtcOffset::from_hms(DAY_TZ_OFFSET_HOURS, 0, 0)
        .unwrap_or(UtcOffset::UTC);
    let date = instant.to_offset(offset).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Shape check for client-supplied day keys, applied before any lookup.
pub fn is_valid_day_key(s: &str) -> bool {
    lazy_regex::regex_is_match!(r"^\d{4}-\d{2}-\d{2}$", s)
}

use chrono::{DateTime, Datelike, Utc};

/// Short label for when a history entry was last saved
///
/// Same-year entries read like `Nov 2, 09:41`; older ones include the year.
pub fn format_saved_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d, %H:%M").to_string()
    } else {
        timestamp.format("%b %-d %Y, %H:%M").to_string()
    }
}

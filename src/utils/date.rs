use chrono::Utc;

// Issue timestamps are stored as plain strings at second precision so the
// catalog file stays all-string-valued and human readable.
pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn timestamp() -> String {
    Utc::now().format(DATE_FMT).to_string()
}

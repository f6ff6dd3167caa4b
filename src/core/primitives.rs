use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{QuakeError, QuakeResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> QuakeResult<f64> {
    value.to_f64().ok_or_else(|| {
        QuakeError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Extracts the leading 4-digit year token of a timestamp string.
///
/// This is a prefix read, not date parsing: `"1999/04/02 10:00"`,
/// `"1999-04-02T10:00:00Z"` and `"1999"` all yield `1999`.
#[must_use]
pub fn year_token(timestamp: &str) -> Option<i32> {
    let token = timestamp.trim_start().get(..4)?;
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Formats a datetime in the `YYYY/MM/DD HH:MM:SS` shape of the source catalog.
#[must_use]
pub fn datetime_to_timestamp_token(time: DateTime<Utc>) -> String {
    time.format("%Y/%m/%d %H:%M:%S").to_string()
}

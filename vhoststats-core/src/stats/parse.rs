use crate::conf::FieldLayout;
use crate::error::MalformedLineError;
use crate::stats::tokenize::tokenize;
use crate::stats::types::AccessEvent;
use chrono::NaiveDateTime;

/// Apache/nginx `%t` layout, without the trailing zone offset.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Turn one raw line into an event, or explain why it cannot be used.
///
/// Pure: counters and widest-label tracking belong to the caller.
pub fn load_event(line: &str, layout: &FieldLayout) -> Result<AccessEvent, MalformedLineError> {
    let fields = tokenize(line);

    let field = |name: &'static str, index: usize| {
        fields
            .get(index)
            .copied()
            .ok_or(MalformedLineError::MissingField {
                name,
                index,
                found: fields.len(),
            })
    };

    let host = field("vhost", layout.vhost)?;
    let time = field("time", layout.time)?;
    let size = field("size", layout.size)?;

    let bytes = parse_size(size)?;
    let timestamp = parse_timestamp(time)?;

    Ok(AccessEvent {
        timestamp,
        host: host.to_string(),
        bytes,
    })
}

fn parse_size(value: &str) -> Result<u64, MalformedLineError> {
    let invalid = || MalformedLineError::InvalidSize {
        value: value.to_string(),
    };

    // `u64::from_str` would accept a leading '+'.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    value.parse().map_err(|_| invalid())
}

/// Seconds since the epoch for the log's wall-clock time. Anything after the
/// first whitespace (the `+0000` zone token) is ignored.
pub fn parse_timestamp(value: &str) -> Result<i64, MalformedLineError> {
    let clock = value.split_whitespace().next().unwrap_or("");

    NaiveDateTime::parse_from_str(clock, TIMESTAMP_FORMAT)
        .map(|t| t.and_utc().timestamp())
        .map_err(|_| MalformedLineError::InvalidTimestamp {
            value: value.to_string(),
        })
}

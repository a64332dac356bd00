use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub fn parse_rfc3339(s: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(s, &Rfc3339).ok()
}

/// Format a UTC instant as RFC 3339 with whole-second precision.
pub fn to_rfc3339(dt: OffsetDateTime) -> String {
    let dt = dt.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

/// Short human form of a stored RFC 3339 timestamp for list rows; falls
/// back to the raw string when it does not parse.
pub fn display_date(s: &str) -> String {
    match parse_rfc3339(s) {
        Some(dt) => format!(
            "{:04}-{:02}-{:02} {:02}:{:02} UTC",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute()
        ),
        None => s.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn rfc3339_round_trip() {
        let dt = datetime!(2025-04-01 08:12:00 UTC);
        let s = to_rfc3339(dt);
        assert_eq!(s, "2025-04-01T08:12:00Z");
        assert_eq!(parse_rfc3339(&s), Some(dt));
    }

    #[test]
    fn display_date_shortens_valid_timestamps() {
        assert_eq!(display_date("2025-03-20T14:45:00Z"), "2025-03-20 14:45 UTC");
        assert_eq!(display_date("garbage"), "garbage");
    }
}

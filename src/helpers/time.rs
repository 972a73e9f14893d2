use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ISO_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, no zone designator
pub fn format_iso_local(ts: &NaiveDateTime) -> String {
    ts.format(ISO_LOCAL_FORMAT).to_string()
}

pub fn format_display(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Reformat an ISO-8601-like timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// A `Z` marker and any `+offset` suffix are dropped first, so the wall-clock
/// time of the source is kept. Anything unparsable is returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    parse_wall_clock(raw)
        .map(|ts| format_display(&ts))
        .unwrap_or_else(|| raw.to_string())
}

fn parse_wall_clock(raw: &str) -> Option<NaiveDateTime> {
    let stripped = raw.replace('Z', "");
    let ts = stripped.split('+').next().unwrap_or_default().trim();

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(ts, fmt).ok())
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(ts, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zulu_timestamp() {
        assert_eq!(format_timestamp("2024-01-01T10:00:00Z"), "2024-01-01 10:00:00");
    }

    #[test]
    fn positive_offset_is_dropped() {
        assert_eq!(
            format_timestamp("2024-03-05T23:59:01+02:00"),
            "2024-03-05 23:59:01"
        );
    }

    #[test]
    fn negative_offset_keeps_wall_clock() {
        assert_eq!(
            format_timestamp("2024-03-05T07:08:09-05:00"),
            "2024-03-05 07:08:09"
        );
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(
            format_timestamp("2024-06-30T12:34:56.789123Z"),
            "2024-06-30 12:34:56"
        );
    }

    #[test]
    fn space_separator_and_minutes_only() {
        assert_eq!(format_timestamp("2024-01-01 10:00:00"), "2024-01-01 10:00:00");
        assert_eq!(format_timestamp("2024-01-01T10:00"), "2024-01-01 10:00:00");
    }

    #[test]
    fn date_only() {
        assert_eq!(format_timestamp("2024-01-01"), "2024-01-01 00:00:00");
    }

    #[test]
    fn unparsable_is_verbatim() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("2024-13-45T99:00:00Z"), "2024-13-45T99:00:00Z");
    }

    #[test]
    fn iso_local_has_microseconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(format_iso_local(&ts), "2024-01-01T10:00:00.000000");
    }
}

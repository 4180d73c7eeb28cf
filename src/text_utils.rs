use std::ops::Index;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses the date formats accepted in front-matter:
/// `2024-03-01`, `2024-03-01 10:42:32[.123]`, `2024-03-01T10:42:32[.123]`
/// and RFC 3339 with a `Z` or `+hh:mm` offset, which is normalized to UTC.
/// An offset needs a time part.
pub fn parse_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2})(?::(\d{1,2}))?(?:\.(\d{1,9}))?\s*(Z|z|[+-]\d{2}:?\d{2})?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);
    let opt_u32 = |caps: &Captures, i: usize| match caps.get(i) {
        Some(m) => to_u32(m.as_str()),
        None => Ok(0),
    };

    // We are using the regex approach to make it more flexible
    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = opt_u32(&caps, 4)?;
    let mn: u32 = opt_u32(&caps, 5)?;
    let s: u32 = opt_u32(&caps, 6)?;
    let nanos: u32 = match caps.get(7) {
        Some(frac) => to_u32(&format!("{:0<9}", frac.as_str()))?,
        None => 0,
    };

    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return Err(format!("Invalid calendar date {}", buf));
    };
    let Some(time) = NaiveTime::from_hms_nano_opt(h, mn, s, nanos) else {
        return Err(format!("Invalid time of day {}", buf));
    };
    let date_time = NaiveDateTime::new(date, time);

    match caps.get(8) {
        None => Ok(date_time),
        Some(offset) => {
            let offset = parse_offset(offset.as_str())
                .ok_or_else(|| format!("Invalid offset in date time {}", buf))?;
            offset.from_local_datetime(&date_time)
                .single()
                .map(|dt| dt.naive_utc())
                .ok_or_else(|| format!("Ambiguous date time {}", buf))
        }
    }
}

fn parse_offset(offset: &str) -> Option<FixedOffset> {
    if offset.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let digits: String = offset[1..].chars().filter(|c| c.is_ascii_digit()).collect();
    let hours: i32 = digits.get(0..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// `20240229_post_title_of_mine_abaco_dir2`
pub fn slug_from_title(title: &str, date: &NaiveDate) -> String {
    let alpha_chars: String = title.chars()
        .filter(|&c| c.is_alphanumeric() || c == ' ')
        .map(|c| if c == ' ' { '_' } else { c })
        .flat_map(|c| c.to_lowercase())
        .collect();

    let mut slug = String::new();
    let mut prev_char = None;

    for c in alpha_chars.chars() {
        if c != '_' || prev_char != Some('_') {
            slug.push(c);
        }
        prev_char = Some(c);
    }

    let slug = unidecode::unidecode(&slug);
    let date = date.format("%Y%m%d");

    format!("{}_{}", date, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_date_time(date_time: &NaiveDateTime) -> (String, String) {
        let date = date_time.format("%Y-%m-%d").to_string();
        let time = date_time.format("%H:%M:%S").to_string();
        (date, time)
    }

    #[test]
    fn test_parse_date_time() {
        let date_time = parse_date_time("2017-09-10 10:42:32.123").unwrap();
        let (date, time) = format_date_time(&date_time);
        assert_eq!(date, "2017-09-10");
        assert_eq!(time, "10:42:32");

        let date_time = parse_date_time("2017-09-10T10:42:32").unwrap();
        let (date, time) = format_date_time(&date_time);
        assert_eq!(date, "2017-09-10");
        assert_eq!(time, "10:42:32");

        let date_time = parse_date_time("2017-09-10").unwrap();
        let (date, time) = format_date_time(&date_time);
        assert_eq!(date, "2017-09-10");
        assert_eq!(time, "00:00:00");
    }

    #[test]
    fn test_parse_date_time_with_offset() {
        let date_time = parse_date_time("2024-03-01T10:00:00+02:00").unwrap();
        assert_eq!(format_date_time(&date_time), ("2024-03-01".to_string(), "08:00:00".to_string()));

        let date_time = parse_date_time("2024-03-01T10:00:00Z").unwrap();
        assert_eq!(format_date_time(&date_time), ("2024-03-01".to_string(), "10:00:00".to_string()));
    }

    #[test]
    fn test_parse_date_time_rejects_garbage() {
        assert!(parse_date_time("last tuesday").is_err());
        assert!(parse_date_time("5 min").is_err());
        assert!(parse_date_time("2024-02-30").is_err());
        assert!(parse_date_time("2024-01-01 25:00:00").is_err());
        assert!(parse_date_time("").is_err());
    }

    #[test]
    fn test_parse_date_time_offset_needs_time() {
        assert!(parse_date_time("2024-03-01+02:00").is_err());
        assert!(parse_date_time("2024-03-01 Z").is_err());
        assert!(parse_date_time("2024-03-01Z").is_err());
        assert!(parse_date_time("2024-03-01 10:00 +02:00").is_ok());
    }

    #[test]
    fn test_slug_from_title() {
        let date = NaiveDate::from_ymd_opt(2024, 02, 29).unwrap();
        let title = "Post title of mine ábaco - dir2";
        let slug = slug_from_title(title, &date);
        assert_eq!(slug, "20240229_post_title_of_mine_abaco_dir2");
    }
}

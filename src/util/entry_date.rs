use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};

use crate::text_utils::parse_date_time;

/// Publication date of a content entry. Date-only values resolve to midnight.
/// The text it was parsed from is kept and written back unchanged; comparisons
/// use the parsed UTC value.
#[derive(Clone, Debug)]
pub struct EntryDate {
    value: NaiveDateTime,
    text: String,
}

impl EntryDate {
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.value.date()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for EntryDate {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EntryDate {}

impl PartialOrd for EntryDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntryDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<'de> Deserialize<'de> for EntryDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        let date = EntryDate::from_str(&value).map_err(Error::custom)?;
        Ok(date)
    }
}

impl Serialize for EntryDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl FromStr for EntryDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_date_time(s)?;
        Ok(EntryDate { value, text: s.to_string() })
    }
}

impl Display for EntryDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        EntryDate {
            value: NaiveDateTime::new(date, NaiveTime::MIN),
            text: date.format("%Y-%m-%d").to_string(),
        }
    }
}

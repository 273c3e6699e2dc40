use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document an applicant has to produce. Owned by its posting or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

impl RequiredDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            description: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Timestamped note attached to a posting or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,
    pub note: String,
}

impl Update {
    pub fn new(date: DateTime<Utc>, note: impl Into<String>) -> Self {
        Self {
            date,
            note: note.into(),
        }
    }
}

/// Lenient ISO-8601 timestamp parsing. Seconds are optional, the date and
/// time may be separated by `T` or a space, and the offset may be `Z`,
/// `+HH:MM`, `+HHMM` or absent (read as UTC). Output is always RFC 3339.
pub mod timestamp {
    use super::*;
    use chrono::ParseResult;
    use serde::{de, Deserializer};

    const OFFSET_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M%z",
        "%Y-%m-%d %H:%M%z",
    ];

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn parse(raw: &str) -> ParseResult<DateTime<Utc>> {
        let mut result = DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc));
        for format in OFFSET_FORMATS {
            if result.is_ok() {
                return result;
            }
            result = DateTime::parse_from_str(raw, format).map(|dt| dt.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if result.is_ok() {
                return result;
            }
            result = NaiveDateTime::parse_from_str(raw, format).map(|naive| naive.and_utc());
        }
        result
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }

    /// For patch fields: present values are parsed, absent ones stay `None`.
    pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}"))),
            None => Ok(None),
        }
    }
}

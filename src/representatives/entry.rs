use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier stored when a profile carries no usable public URL.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Store file header, in column order.
pub const STORE_COLUMNS: [&str; 4] = ["Profile URL", "Domaine", "Lycée", "Timestamp"];

/// A profile confirmed as representative of a domain for one source group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeEntry {
    #[serde(rename = "Profile URL")]
    pub identifier: String,
    #[serde(rename = "Domaine")]
    pub domain: String,
    #[serde(rename = "Lycée")]
    pub source_group: String,
    #[serde(rename = "Timestamp", with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl RepresentativeEntry {
    pub(crate) fn to_row(&self) -> [String; 4] {
        [
            self.identifier.clone(),
            self.domain.clone(),
            self.source_group.clone(),
            iso_timestamp::format(&self.timestamp),
        ]
    }
}

/// ISO-8601 timestamps. Writes RFC 3339 in UTC; also reads the naive
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` form older store files contain, taken as UTC.
pub(crate) mod iso_timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

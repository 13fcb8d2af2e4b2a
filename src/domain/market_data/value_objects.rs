use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - hourly average price in USD
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - hour bucket start, epoch milliseconds UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Serialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }
}

/// Wire form of an hour bucket: the backend may send epoch milliseconds or an
/// ISO-8601 string, and both must land in the same `Timestamp`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Millis(u64),
    FloatMillis(f64),
    Iso(String),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match TimestampRepr::deserialize(deserializer)? {
            TimestampRepr::Millis(ms) => Ok(Self(ms)),
            TimestampRepr::FloatMillis(ms) => Ok(Self(ms as u64)),
            TimestampRepr::Iso(text) => chrono::DateTime::parse_from_rfc3339(&text)
                .map(|dt| Self(dt.timestamp_millis() as u64))
                .map_err(|e| serde::de::Error::custom(format!("invalid hour timestamp {text:?}: {e}"))),
        }
    }
}

/// Value Object - tracked blockchain network, used both as the API query
/// parameter and as the chart styling key
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Chain {
    #[strum(serialize = "Ethereum")]
    Ethereum,
    #[strum(serialize = "Polygon")]
    Polygon,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Ethereum, Chain::Polygon];

    /// Value of the `chain` query parameter on the prices endpoint.
    pub fn query_value(&self) -> &str {
        self.as_ref()
    }

    /// Heading name used in chart titles.
    pub fn title(&self) -> &str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polygon => "Polygon (MATIC)",
        }
    }
}

//! Bucket - the today / storage partition
//!
//! On the wire the bucket is the boolean `today` field; inside the client it
//! is an enum so call sites read as `Bucket::Storage` rather than `false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which of the two disjoint views an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bucket {
    /// Items planned for today.
    #[default]
    Today,
    /// Backlog items.
    Storage,
}

impl Bucket {
    pub const ALL: [Bucket; 2] = [Bucket::Today, Bucket::Storage];

    pub fn from_today(today: bool) -> Self {
        if today {
            Self::Today
        } else {
            Self::Storage
        }
    }

    /// Wire value of the `today` flag.
    pub fn is_today(self) -> bool {
        matches!(self, Self::Today)
    }

    pub fn other(self) -> Self {
        match self {
            Self::Today => Self::Storage,
            Self::Storage => Self::Today,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" | "true" => Ok(Self::Today),
            "storage" | "backlog" | "false" => Ok(Self::Storage),
            other => Err(format!("unknown bucket: {other}")),
        }
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_today())
    }
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::from_today)
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the two filing categories served by the backend. Serialized in
/// lowercase, matching the URL path segment it maps to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// Odd-lot tender offers.
    Oddlots,
    /// Corporate spinoffs.
    Spinoffs,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Oddlots => "oddlots",
            Dataset::Spinoffs => "spinoffs",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oddlots" => Ok(Dataset::Oddlots),
            "spinoffs" => Ok(Dataset::Spinoffs),
            other => Err(Error::UnknownDataset(other.to_string())),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Class of number requested from the upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberCategory {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl NumberCategory {
    pub const ALL: [NumberCategory; 4] = [Self::Prime, Self::Fibonacci, Self::Even, Self::Random];

    /// Single-character code used in both the public path and the upstream URL
    pub fn code(&self) -> &'static str {
        match self {
            Self::Prime => "p",
            Self::Fibonacci => "f",
            Self::Even => "e",
            Self::Random => "r",
        }
    }
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a path id is not one of the recognized codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized number category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for NumberCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Self::Prime),
            "f" => Ok(Self::Fibonacci),
            "e" => Ok(Self::Even),
            "r" => Ok(Self::Random),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

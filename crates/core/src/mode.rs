//! Research policy selector: controls filter admission and Critic audit
//! emphasis.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Strict,
    Discovery,
    Monitor,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Discovery
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Strict => "strict",
            Mode::Discovery => "discovery",
            Mode::Monitor => "monitor",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Mode::Strict),
            "discovery" => Ok(Mode::Discovery),
            "monitor" => Ok(Mode::Monitor),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

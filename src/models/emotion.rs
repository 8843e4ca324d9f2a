use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Emotional state a trader attaches to a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Confident,
    Nervous,
    Greedy,
    Patient,
    Reckless,
    Disciplined,
    /// Tag returned by the API that is not part of the known vocabulary.
    #[serde(other)]
    Other,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Confident,
        Emotion::Nervous,
        Emotion::Greedy,
        Emotion::Patient,
        Emotion::Reckless,
        Emotion::Disciplined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Confident => "confident",
            Emotion::Nervous => "nervous",
            Emotion::Greedy => "greedy",
            Emotion::Patient => "patient",
            Emotion::Reckless => "reckless",
            Emotion::Disciplined => "disciplined",
            Emotion::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Confident => "Confident",
            Emotion::Nervous => "Nervous",
            Emotion::Greedy => "Greedy",
            Emotion::Patient => "Patient",
            Emotion::Reckless => "Reckless",
            Emotion::Disciplined => "Disciplined",
            Emotion::Other => "Other",
        }
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Emotion {
    type Err = anyhow::Error;

    /// Only the known vocabulary parses; `Other` is reserved for API data.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();

        Self::ALL
            .iter()
            .find(|e| e.as_str() == needle)
            .copied()
            .ok_or(anyhow!("Unknown emotion '{}'.", s))
    }
}

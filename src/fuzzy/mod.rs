pub mod bounds;

pub use bounds::Bounds;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Durability;

/// Policy deciding which durability values count as "the same item" in a
/// fuzzy lookup.
///
/// Percentage modes split the wear range at a breakpoint: records on the same
/// side of the breakpoint as the query match.
///
/// ```text
///   PERCENT_50, max 100, breakpoint 50
///   0 ────────────── 49 │ 50 ─────────────── 100
///   query 30 matches ◄──┘ └──► query 70 matches
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FuzzyMode {
    /// Every durability of the type matches.
    #[default]
    IgnoreAll,
    /// Undamaged matches only undamaged; damaged matches any damage.
    Percent99,
    /// Split at `percent`% of max durability. Values above 100 act as 100.
    Percentage(u8),
}

impl FuzzyMode {
    /// At least 75% durability left (split at 25% wear).
    pub const PERCENT_75: FuzzyMode = FuzzyMode::Percentage(25);
    /// At least 50% durability left.
    pub const PERCENT_50: FuzzyMode = FuzzyMode::Percentage(50);
    /// At least 25% durability left (split at 75% wear).
    pub const PERCENT_25: FuzzyMode = FuzzyMode::Percentage(75);

    /// Percentage mode from a fraction in `[0, 1]`, rounded to whole percent.
    pub fn from_fraction(fraction: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::InvalidFuzzyMode(format!(
                "fraction {fraction} outside [0, 1]"
            )));
        }
        Ok(FuzzyMode::Percentage((fraction * 100.0).round() as u8))
    }

    /// Percentage mode from a whole percent in `[0, 100]`.
    pub fn from_percent(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(Error::InvalidFuzzyMode(format!(
                "percent {percent} outside [0, 100]"
            )));
        }
        Ok(FuzzyMode::Percentage(percent))
    }

    /// Wear threshold for percentage modes: `floor(percent * max / 100)`.
    pub fn breakpoint(&self, max_durability: Durability) -> Option<Durability> {
        match self {
            FuzzyMode::Percentage(percent) => {
                let percent = Durability::from((*percent).min(100));
                Some(percent * max_durability / 100)
            }
            FuzzyMode::IgnoreAll | FuzzyMode::Percent99 => None,
        }
    }
}

impl fmt::Display for FuzzyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FuzzyMode::IgnoreAll => write!(f, "IGNORE_ALL"),
            FuzzyMode::Percent99 => write!(f, "PERCENT_99"),
            FuzzyMode::PERCENT_75 => write!(f, "PERCENT_75"),
            FuzzyMode::PERCENT_50 => write!(f, "PERCENT_50"),
            FuzzyMode::PERCENT_25 => write!(f, "PERCENT_25"),
            FuzzyMode::Percentage(p) => write!(f, "PERCENTAGE_{}", p.min(100)),
        }
    }
}

impl FromStr for FuzzyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_uppercase();
        match name.as_str() {
            "IGNORE_ALL" => Ok(FuzzyMode::IgnoreAll),
            "PERCENT_99" => Ok(FuzzyMode::Percent99),
            "PERCENT_75" => Ok(FuzzyMode::PERCENT_75),
            "PERCENT_50" => Ok(FuzzyMode::PERCENT_50),
            "PERCENT_25" => Ok(FuzzyMode::PERCENT_25),
            other => {
                let percent = other
                    .strip_prefix("PERCENTAGE_")
                    .and_then(|n| n.parse::<u8>().ok())
                    .ok_or_else(|| Error::InvalidFuzzyMode(s.to_string()))?;
                FuzzyMode::from_percent(percent)
            }
        }
    }
}

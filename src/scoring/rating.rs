use serde::Serialize;
use std::fmt;

use super::rules::RangeOp;

/// Qualitative tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rating {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Tier thresholds, highest first. Anything below the last one is Bronze.
const RATING_TIERS: [(RangeOp, Rating); 3] = [
    (RangeOp::GreaterEqual(80.0), Rating::Platinum),
    (RangeOp::GreaterEqual(60.0), Rating::Gold),
    (RangeOp::GreaterEqual(40.0), Rating::Silver),
];

impl Rating {
    pub fn from_total(total: f64) -> Self {
        RATING_TIERS
            .iter()
            .find(|(range, _)| range.matches(total))
            .map(|(_, rating)| *rating)
            .unwrap_or(Rating::Bronze)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Bronze => "Bronze",
            Rating::Silver => "Silver",
            Rating::Gold => "Gold",
            Rating::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

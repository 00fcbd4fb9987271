use serde::Serialize;
use std::fmt;

use crate::profile::{Insulation, Ventilation};

/// Comparison against a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeOp {
    LessThan(f64),
    LessEqual(f64),
    GreaterThan(f64),
    GreaterEqual(f64),
}

impl RangeOp {
    pub fn matches(&self, value: f64) -> bool {
        match self {
            RangeOp::LessThan(n) => value < *n,
            RangeOp::LessEqual(n) => value <= *n,
            RangeOp::GreaterThan(n) => value > *n,
            RangeOp::GreaterEqual(n) => value >= *n,
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOp::LessThan(n) => write!(f, "<{}", n),
            RangeOp::LessEqual(n) => write!(f, "<={}", n),
            RangeOp::GreaterThan(n) => write!(f, ">{}", n),
            RangeOp::GreaterEqual(n) => write!(f, ">={}", n),
        }
    }
}

/// The three scoring categories and their caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Efficiency,
    HealthComfort,
    Liveability,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Efficiency,
        Category::HealthComfort,
        Category::Liveability,
    ];

    /// Maximum points the category can contribute to the total.
    pub fn cap(&self) -> f64 {
        match self {
            Category::Efficiency => 40.0,
            Category::HealthComfort => 30.0,
            Category::Liveability => 20.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Efficiency => "Efficiency",
            Category::HealthComfort => "Health & Comfort",
            Category::Liveability => "Liveability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Efficiency
pub const SOLAR_PV_POINTS: f64 = 8.0;
pub const RAINWATER_POINTS: f64 = 4.0;
pub const DUAL_FLUSH_POINTS: f64 = 4.0;

// Health & comfort
pub const DOUBLE_GLAZING_POINTS: f64 = 6.0;
pub const MAX_DAYLIGHT_POINTS: f64 = 6.0;

// Liveability
pub const WHEELCHAIR_ACCESS_POINTS: f64 = 5.0;
pub const WASTE_SORTING_POINTS: f64 = 5.0;

/// Transport distance bands in meters, first match wins.
pub const TRANSPORT_BANDS: [(RangeOp, f64); 2] = [
    (RangeOp::LessEqual(400.0), 10.0),
    (RangeOp::LessEqual(800.0), 6.0),
];
/// Any distance no band claims (further than 800m) still earns these.
pub const DISTANT_TRANSPORT_POINTS: f64 = 2.0;

pub fn insulation_points(insulation: Insulation) -> f64 {
    match insulation {
        Insulation::HighPerformance => 8.0,
        Insulation::Standard => 4.0,
        Insulation::None => 0.0,
    }
}

pub fn ventilation_points(ventilation: Ventilation) -> f64 {
    match ventilation {
        Ventilation::Hrv => 6.0,
        Ventilation::Mechanical => 3.0,
        Ventilation::Natural => 0.0,
    }
}

/// Linear in the daylight percentage: 0% gives nothing, 100% gives the full 6.
pub fn daylight_points(natural_light_pct: f64) -> f64 {
    natural_light_pct / 100.0 * MAX_DAYLIGHT_POINTS
}

/// Points for the first transport band the distance falls into, with that band.
/// `None` means no band matched and the distant-stop points apply.
pub fn transport_points(distance_m: f64) -> (f64, Option<RangeOp>) {
    TRANSPORT_BANDS
        .iter()
        .find(|(range, _)| range.matches(distance_m))
        .map(|(range, points)| (*points, Some(*range)))
        .unwrap_or((DISTANT_TRANSPORT_POINTS, None))
}

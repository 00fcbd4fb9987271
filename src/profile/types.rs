use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall/roof insulation type.
///
/// Ordered from worst to best so that `Insulation::None < Insulation::HighPerformance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Insulation {
    #[serde(alias = "None")]
    None,
    #[serde(alias = "Standard")]
    Standard,
    #[serde(alias = "High-performance", alias = "HighPerformance")]
    HighPerformance,
}

impl Insulation {
    pub const ALL: [Insulation; 3] = [
        Insulation::None,
        Insulation::Standard,
        Insulation::HighPerformance,
    ];

    /// Parse either the kebab-case name ("high-performance") or the form label
    /// ("High-performance"), case-insensitively.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        for insulation in Self::ALL {
            if s.eq_ignore_ascii_case(insulation.key()) || s.eq_ignore_ascii_case(insulation.label()) {
                return Ok(insulation);
            }
        }
        bail!(
            "Unknown insulation type '{}' (expected none, standard or high-performance)",
            s
        )
    }

    pub fn key(&self) -> &'static str {
        match self {
            Insulation::None => "none",
            Insulation::Standard => "standard",
            Insulation::HighPerformance => "high-performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Insulation::None => "None",
            Insulation::Standard => "Standard",
            Insulation::HighPerformance => "High-performance",
        }
    }
}

impl fmt::Display for Insulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ventilation type. Exactly one applies to a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Ventilation {
    #[serde(alias = "Natural")]
    Natural,
    #[serde(alias = "Mechanical")]
    Mechanical,
    /// Heat recovery ventilation
    #[serde(alias = "HRV", alias = "Heat Recovery Ventilation (HRV)")]
    Hrv,
}

impl Ventilation {
    pub const ALL: [Ventilation; 3] = [
        Ventilation::Natural,
        Ventilation::Mechanical,
        Ventilation::Hrv,
    ];

    /// Parse either the kebab-case name ("hrv") or the form label
    /// ("Heat Recovery Ventilation (HRV)"), case-insensitively.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        for ventilation in Self::ALL {
            if s.eq_ignore_ascii_case(ventilation.key())
                || s.eq_ignore_ascii_case(ventilation.label())
            {
                return Ok(ventilation);
            }
        }
        bail!(
            "Unknown ventilation type '{}' (expected natural, mechanical or hrv)",
            s
        )
    }

    pub fn key(&self) -> &'static str {
        match self {
            Ventilation::Natural => "natural",
            Ventilation::Mechanical => "mechanical",
            Ventilation::Hrv => "hrv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ventilation::Natural => "Natural",
            Ventilation::Mechanical => "Mechanical",
            Ventilation::Hrv => "Heat Recovery Ventilation (HRV)",
        }
    }
}

impl fmt::Display for Ventilation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the calculator asks about a house.
///
/// Built once from flags, a profile file or the questionnaire, then handed to
/// [`crate::scoring::calculate_score`]. `floor_area` is recorded for the report
/// but no scoring rule reads it.
///
/// Example YAML:
/// ```yaml
/// floor_area: 120
/// insulation: high-performance
/// has_solar_pv: true
/// has_rainwater_harvesting: false
/// has_dual_flush_toilet: true
/// has_double_glazing: true
/// ventilation: hrv
/// natural_light_pct: 65
/// wheelchair_access: false
/// waste_sorting: true
/// transport_distance_m: 350
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildingProfile {
    /// Building floor area in m²
    #[serde(default)]
    pub floor_area: f64,
    pub insulation: Insulation,
    pub has_solar_pv: bool,
    pub has_rainwater_harvesting: bool,
    pub has_dual_flush_toilet: bool,
    pub has_double_glazing: bool,
    pub ventilation: Ventilation,
    /// Percentage of floor area with natural daylight, 0-100
    pub natural_light_pct: f64,
    pub wheelchair_access: bool,
    pub waste_sorting: bool,
    /// Distance to the nearest public transport stop in meters
    pub transport_distance_m: f64,
}

impl BuildingProfile {
    /// The answers a fresh questionnaire starts from: every yes/no question
    /// pre-selects "Yes", daylight sits at 50%.
    pub fn form_defaults() -> Self {
        Self {
            floor_area: 0.0,
            insulation: Insulation::None,
            has_solar_pv: true,
            has_rainwater_harvesting: true,
            has_dual_flush_toilet: true,
            has_double_glazing: true,
            ventilation: Ventilation::Natural,
            natural_light_pct: 50.0,
            wheelchair_access: true,
            waste_sorting: true,
            transport_distance_m: 0.0,
        }
    }
}

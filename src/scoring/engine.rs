use serde::Serialize;

use super::rating::Rating;
use super::rules::{self, Category};
use super::suggestions::{suggestions_for, Suggestion};
use crate::profile::BuildingProfile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleContribution {
    pub category: Category,
    pub label: String,  // e.g. "Insulation", "Solar PV"
    pub detail: String, // e.g. "High-performance", "350m, matched '<=400'"
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub efficiency: f64,
    pub health_comfort: f64,
    pub liveability: f64,
    pub total: f64,
    pub rating: Rating,
    pub suggestions: Vec<Suggestion>,
    pub breakdown: Vec<RuleContribution>,
}

impl ScoreResult {
    pub fn subscore(&self, category: Category) -> f64 {
        match category {
            Category::Efficiency => self.efficiency,
            Category::HealthComfort => self.health_comfort,
            Category::Liveability => self.liveability,
        }
    }

    /// Contributions recorded for one category, in evaluation order.
    pub fn contributions(&self, category: Category) -> impl Iterator<Item = &RuleContribution> {
        self.breakdown.iter().filter(move |c| c.category == category)
    }
}

/// Running sum for one category. Every rule that is added is also recorded
/// in the breakdown.
struct Tally<'a> {
    category: Category,
    points: f64,
    breakdown: &'a mut Vec<RuleContribution>,
}

impl<'a> Tally<'a> {
    fn new(category: Category, breakdown: &'a mut Vec<RuleContribution>) -> Self {
        Self {
            category,
            points: 0.0,
            breakdown,
        }
    }

    fn add(&mut self, label: &str, detail: String, points: f64) {
        self.points += points;
        self.breakdown.push(RuleContribution {
            category: self.category,
            label: label.to_string(),
            detail,
            points,
        });
    }

    fn add_if(&mut self, fires: bool, label: &str, points: f64) {
        if fires {
            self.add(label, "yes".to_string(), points);
        }
    }

    /// Sum clamped to the category cap
    fn finish(self) -> f64 {
        self.points.min(self.category.cap())
    }
}

/// Score a building profile.
///
/// Pure and infallible: the profile is taken as-is, no bounds checking happens
/// here. Run [`crate::profile::validate_profile`] first.
pub fn calculate_score(profile: &BuildingProfile) -> ScoreResult {
    let mut breakdown = Vec::new();

    let efficiency = efficiency_score(profile, &mut breakdown);
    let health_comfort = health_comfort_score(profile, &mut breakdown);
    let liveability = liveability_score(profile, &mut breakdown);
    let total = efficiency + health_comfort + liveability;

    ScoreResult {
        efficiency,
        health_comfort,
        liveability,
        total,
        rating: Rating::from_total(total),
        suggestions: suggestions_for(profile),
        breakdown,
    }
}

fn efficiency_score(profile: &BuildingProfile, breakdown: &mut Vec<RuleContribution>) -> f64 {
    let mut tally = Tally::new(Category::Efficiency, breakdown);
    tally.add(
        "Insulation",
        profile.insulation.label().to_string(),
        rules::insulation_points(profile.insulation),
    );
    tally.add_if(profile.has_solar_pv, "Solar PV", rules::SOLAR_PV_POINTS);
    tally.add_if(
        profile.has_rainwater_harvesting,
        "Rainwater harvesting",
        rules::RAINWATER_POINTS,
    );
    tally.add_if(
        profile.has_dual_flush_toilet,
        "Dual flush toilet",
        rules::DUAL_FLUSH_POINTS,
    );
    tally.finish()
}

fn health_comfort_score(profile: &BuildingProfile, breakdown: &mut Vec<RuleContribution>) -> f64 {
    let mut tally = Tally::new(Category::HealthComfort, breakdown);
    tally.add_if(
        profile.has_double_glazing,
        "Double glazing",
        rules::DOUBLE_GLAZING_POINTS,
    );
    tally.add(
        "Ventilation",
        profile.ventilation.label().to_string(),
        rules::ventilation_points(profile.ventilation),
    );
    tally.add(
        "Natural daylight",
        format!("{}% of floor area", profile.natural_light_pct),
        rules::daylight_points(profile.natural_light_pct),
    );
    tally.finish()
}

fn liveability_score(profile: &BuildingProfile, breakdown: &mut Vec<RuleContribution>) -> f64 {
    let mut tally = Tally::new(Category::Liveability, breakdown);
    tally.add_if(
        profile.wheelchair_access,
        "Wheelchair access",
        rules::WHEELCHAIR_ACCESS_POINTS,
    );
    tally.add_if(
        profile.waste_sorting,
        "Waste sorting",
        rules::WASTE_SORTING_POINTS,
    );

    let (points, band) = rules::transport_points(profile.transport_distance_m);
    let detail = match band {
        Some(range) => format!("{}m, matched '{}'", profile.transport_distance_m, range),
        None => format!("{}m, further than 800m", profile.transport_distance_m),
    };
    tally.add("Public transport", detail, points);
    tally.finish()
}

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::profile::BuildingProfile;
use crate::scoring::{Category, Rating, ScoreResult, PERFORMS_WELL_MESSAGE};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a subscore against its cap, one decimal place: "24.0/40"
pub fn format_score(score: f64, max: f64) -> String {
    format!("{:.1}/{}", score, max)
}

fn colored_rating(rating: Rating, use_colors: bool) -> String {
    if !use_colors {
        return rating.to_string();
    }
    match rating {
        Rating::Bronze => rating.red().bold().to_string(),
        Rating::Silver => rating.white().bold().to_string(),
        Rating::Gold => rating.yellow().bold().to_string(),
        Rating::Platinum => rating.cyan().bold().to_string(),
    }
}

/// Format the suggestion list as "- message" lines, or the fallback line
/// when there is nothing to improve.
pub fn format_suggestions(result: &ScoreResult, use_colors: bool) -> String {
    if result.suggestions.is_empty() {
        return if use_colors {
            PERFORMS_WELL_MESSAGE.green().to_string()
        } else {
            PERFORMS_WELL_MESSAGE.to_string()
        };
    }

    result
        .suggestions
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format every rule that contributed, grouped by category
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for category in Category::ALL {
        let heading = format!(
            "{} ({})",
            category,
            format_score(result.subscore(category), category.cap())
        );
        lines.push(if use_colors {
            heading.bold().to_string()
        } else {
            heading
        });
        for contribution in result.contributions(category) {
            lines.push(format!(
                "  {:<22}{:>+6.1}  {}",
                contribution.label, contribution.points, contribution.detail
            ));
        }
    }
    lines.join("\n")
}

/// Format the full text report.
///
/// `verbose` adds the per-rule breakdown after the summary.
pub fn format_report(
    profile: &BuildingProfile,
    result: &ScoreResult,
    use_colors: bool,
    verbose: bool,
) -> String {
    let mut out = Vec::new();

    let title = "House Sustainability Score";
    if use_colors {
        out.push(title.bold().to_string());
    } else {
        out.push(title.to_string());
    }
    out.push(format!("Floor area: {} m² (not scored)", profile.floor_area));
    out.push(String::new());

    out.push("Summary:".to_string());
    for category in Category::ALL {
        out.push(format!(
            "  {}: {}",
            category,
            format_score(result.subscore(category), category.cap())
        ));
    }
    let total = format_score(result.total, 100.0);
    let total = if use_colors {
        total.bold().to_string()
    } else {
        total
    };
    out.push(format!(
        "Total Score: {} ({} Rating)",
        total,
        colored_rating(result.rating, use_colors)
    ));

    if verbose {
        out.push(String::new());
        out.push("Breakdown:".to_string());
        out.push(format_breakdown(result, use_colors));
    }

    out.push(String::new());
    out.push("Suggestions for Improvement".to_string());
    out.push(format_suggestions(result, use_colors));

    out.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    profile: &'a BuildingProfile,
    #[serde(flatten)]
    result: &'a ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Format profile and result as a pretty JSON document.
///
/// Suggestions are emitted as their messages; when there are none the
/// fallback text is carried in `message`.
pub fn format_json(profile: &BuildingProfile, result: &ScoreResult) -> Result<String> {
    let report = JsonReport {
        profile,
        result,
        message: result
            .suggestions
            .is_empty()
            .then_some(PERFORMS_WELL_MESSAGE),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize score report")
}

/// Format the result as one tab-separated line for scripting
/// Columns: efficiency, health_comfort, liveability, total, rating, suggestion_count
pub fn format_tsv(result: &ScoreResult) -> String {
    format!(
        "{:.1}\t{:.1}\t{:.1}\t{:.1}\t{}\t{}",
        result.efficiency,
        result.health_comfort,
        result.liveability,
        result.total,
        result.rating,
        result.suggestions.len()
    )
}

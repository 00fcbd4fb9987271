use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::types::{BuildingProfile, Insulation, Ventilation};

/// Interactive questionnaire that collects a [`BuildingProfile`] one question
/// at a time.
///
/// Generic over its input and output so it can run against stdin/stdout or an
/// in-memory script.
pub struct Questionnaire<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Questionnaire<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt user with a message and return their trimmed input, or `None`
    /// once the input has ended.
    fn read_answer(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an answer the questionnaire cannot do without.
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.read_answer(message)?
            .context("Input ended before the questionnaire was finished")
    }

    /// Prompt with a default value. Returns default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Ask a yes/no question, repeating until the answer is recognised.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        loop {
            let input = self.prompt(&format!("{} [{}]: ", message, hint))?;
            match parse_yes_no(&input, default_yes) {
                Some(answer) => return Ok(answer),
                None => self.say("  Invalid: answer yes or no. Try again.")?,
            }
        }
    }

    /// Ask for a number in `[min, max]`, repeating until one is given.
    fn prompt_number(&mut self, message: &str, default: f64, min: f64, max: Option<f64>) -> Result<f64> {
        loop {
            let input = self.prompt_with_default(message, &default.to_string())?;
            match input.parse::<f64>() {
                Ok(v) if !v.is_finite() => self.say("  Invalid: must be a number. Try again.")?,
                Ok(v) if v < min => {
                    self.say(&format!("  Invalid: must be at least {}. Try again.", min))?
                }
                Ok(v) => match max {
                    Some(max) if v > max => {
                        self.say(&format!("  Invalid: must be at most {}. Try again.", max))?
                    }
                    _ => return Ok(v),
                },
                Err(_) => self.say("  Invalid: must be a number. Try again.")?,
            }
        }
    }

    fn prompt_insulation(&mut self, default: Insulation) -> Result<Insulation> {
        let options = Insulation::ALL
            .iter()
            .map(|i| i.label())
            .collect::<Vec<_>>()
            .join(" / ");
        loop {
            let input = self.prompt_with_default(
                &format!("Wall/Roof insulation type ({})", options),
                default.label(),
            )?;
            match Insulation::parse(&input) {
                Ok(insulation) => return Ok(insulation),
                Err(e) => self.say(&format!("  Invalid: {}. Try again.", e))?,
            }
        }
    }

    fn prompt_ventilation(&mut self, default: Ventilation) -> Result<Ventilation> {
        loop {
            let input = self.prompt_with_default(
                "Ventilation type (Natural / Mechanical / HRV)",
                default.key(),
            )?;
            match Ventilation::parse(&input) {
                Ok(ventilation) => return Ok(ventilation),
                Err(e) => self.say(&format!("  Invalid: {}. Try again.", e))?,
            }
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.say("")?;
        self.say(text)?;
        self.say(&"-".repeat(text.chars().count()))
    }

    /// Walk through every question, starting from the form defaults.
    pub fn run(&mut self) -> Result<BuildingProfile> {
        let defaults = BuildingProfile::form_defaults();

        self.say("House Sustainability Calculator")?;
        self.say("Fill in a few details about your house to get an overview of its sustainability performance.")?;

        self.heading("1. Efficient Use of Resources")?;
        let floor_area =
            self.prompt_number("Building floor area (m²)", defaults.floor_area, 0.0, None)?;
        let insulation = self.prompt_insulation(defaults.insulation)?;
        let has_solar_pv =
            self.prompt_yes_no("Is there a solar PV system installed?", defaults.has_solar_pv)?;
        let has_rainwater_harvesting = self.prompt_yes_no(
            "Does the house have a rainwater harvesting system?",
            defaults.has_rainwater_harvesting,
        )?;
        let has_dual_flush_toilet = self.prompt_yes_no(
            "Does the toilet use a dual flush system?",
            defaults.has_dual_flush_toilet,
        )?;

        self.heading("2. Health & Comfort")?;
        let has_double_glazing =
            self.prompt_yes_no("Are windows double-glazed?", defaults.has_double_glazing)?;
        let ventilation = self.prompt_ventilation(defaults.ventilation)?;
        let natural_light_pct = self.prompt_number(
            "Percentage of floor area with natural daylight (%)",
            defaults.natural_light_pct,
            0.0,
            Some(100.0),
        )?;

        self.heading("3. Liveability")?;
        let wheelchair_access = self.prompt_yes_no(
            "Does the house provide wheelchair access (ramp/wide doors)?",
            defaults.wheelchair_access,
        )?;
        let waste_sorting = self.prompt_yes_no(
            "Are there recycling or composting facilities available?",
            defaults.waste_sorting,
        )?;
        let transport_distance_m = self.prompt_number(
            "Distance to the nearest public transport stop (meters)",
            defaults.transport_distance_m,
            0.0,
            None,
        )?;
        self.say("")?;

        Ok(BuildingProfile {
            floor_area,
            insulation,
            has_solar_pv,
            has_rainwater_harvesting,
            has_dual_flush_toilet,
            has_double_glazing,
            ventilation,
            natural_light_pct,
            wheelchair_access,
            waste_sorting,
            transport_distance_m,
        })
    }

    /// Offer to keep the answers. Returns the chosen path, or `None` to skip.
    ///
    /// Optional: input ending here counts as "no", and ending at the path
    /// question keeps the default path.
    pub fn ask_save_path(&mut self, default_path: &Path) -> Result<Option<PathBuf>> {
        loop {
            let Some(input) = self.read_answer("Save these answers as a profile? [y/N]: ")? else {
                return Ok(None);
            };
            match parse_yes_no(&input, false) {
                Some(true) => break,
                Some(false) => return Ok(None),
                None => self.say("  Invalid: answer yes or no. Try again.")?,
            }
        }

        let default = default_path.display().to_string();
        let path = match self.read_answer(&format!("Profile path [{}]: ", default))? {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_path.to_path_buf(),
        };
        Ok(Some(path))
    }
}

/// `None` when the answer is neither yes nor no.
fn parse_yes_no(input: &str, default_yes: bool) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "" => Some(default_yes),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<BuildingProfile>, String) {
        let mut output = Vec::new();
        let result = Questionnaire::new(Cursor::new(script.as_bytes()), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_all_defaults() {
        let script = "\n".repeat(11);
        let (result, output) = run_script(&script);
        let profile = result.unwrap();
        assert_eq!(profile, BuildingProfile::form_defaults());
        assert!(output.contains("1. Efficient Use of Resources"));
        assert!(output.contains("2. Health & Comfort"));
        assert!(output.contains("3. Liveability"));
    }

    #[test]
    fn test_explicit_answers() {
        let script = [
            "120",              // floor area
            "High-performance", // insulation
            "n",                // solar
            "yes",              // rainwater
            "no",               // dual flush
            "y",                // double glazing
            "hrv",              // ventilation
            "35",               // daylight
            "n",                // wheelchair
            "Y",                // waste sorting
            "950",              // transport
        ]
        .join("\n");
        let (result, _) = run_script(&script);
        let profile = result.unwrap();
        assert_eq!(profile.floor_area, 120.0);
        assert_eq!(profile.insulation, Insulation::HighPerformance);
        assert!(!profile.has_solar_pv);
        assert!(profile.has_rainwater_harvesting);
        assert!(!profile.has_dual_flush_toilet);
        assert!(profile.has_double_glazing);
        assert_eq!(profile.ventilation, Ventilation::Hrv);
        assert_eq!(profile.natural_light_pct, 35.0);
        assert!(!profile.wheelchair_access);
        assert!(profile.waste_sorting);
        assert_eq!(profile.transport_distance_m, 950.0);
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let script = [
            "-5",    // floor area: rejected
            "80",    // floor area
            "foam",  // insulation: rejected
            "standard",
            "maybe", // solar: rejected
            "y",
            "", "", "",
            "open windows", // ventilation: rejected
            "mechanical",
            "150", // daylight: rejected
            "abc", // daylight: rejected
            "60",
            "", "",
            "300",
        ]
        .join("\n");
        let (result, output) = run_script(&script);
        let profile = result.unwrap();
        assert_eq!(profile.floor_area, 80.0);
        assert_eq!(profile.insulation, Insulation::Standard);
        assert!(profile.has_solar_pv);
        assert_eq!(profile.ventilation, Ventilation::Mechanical);
        assert_eq!(profile.natural_light_pct, 60.0);
        assert_eq!(profile.transport_distance_m, 300.0);
        assert!(output.contains("must be at least 0"));
        assert!(output.contains("must be at most 100"));
        assert!(output.contains("answer yes or no"));
        assert!(output.contains("Unknown insulation type"));
        assert!(output.contains("Unknown ventilation type"));
    }

    #[test]
    fn test_input_ending_early_is_an_error() {
        let (result, _) = run_script("100\nstandard\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Input ended"));
    }

    #[test]
    fn test_ask_save_path_declined() {
        let mut output = Vec::new();
        let mut questionnaire = Questionnaire::new(Cursor::new(&b"\n"[..]), &mut output);
        let path = questionnaire
            .ask_save_path(Path::new("/tmp/profile.yaml"))
            .unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn test_ask_save_path_default_and_custom() {
        let mut output = Vec::new();
        let mut questionnaire = Questionnaire::new(Cursor::new(&b"y\n\n"[..]), &mut output);
        let path = questionnaire
            .ask_save_path(Path::new("/tmp/profile.yaml"))
            .unwrap();
        assert_eq!(path, Some(PathBuf::from("/tmp/profile.yaml")));

        let mut output = Vec::new();
        let mut questionnaire =
            Questionnaire::new(Cursor::new(&b"yes\nhome.yaml\n"[..]), &mut output);
        let path = questionnaire
            .ask_save_path(Path::new("/tmp/profile.yaml"))
            .unwrap();
        assert_eq!(path, Some(PathBuf::from("home.yaml")));
    }

    #[test]
    fn test_input_ending_after_last_answer_skips_saving() {
        let mut output = Vec::new();
        let script = "\n".repeat(11);
        let mut questionnaire = Questionnaire::new(Cursor::new(script.as_bytes()), &mut output);
        let profile = questionnaire.run().unwrap();
        assert_eq!(profile, BuildingProfile::form_defaults());

        let path = questionnaire
            .ask_save_path(Path::new("/tmp/profile.yaml"))
            .unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn test_input_ending_at_path_keeps_default() {
        let mut output = Vec::new();
        let mut questionnaire = Questionnaire::new(Cursor::new(&b"y\n"[..]), &mut output);
        let path = questionnaire
            .ask_save_path(Path::new("/tmp/profile.yaml"))
            .unwrap();
        assert_eq!(path, Some(PathBuf::from("/tmp/profile.yaml")));
    }

    #[test]
    fn test_ask_save_path_reasks_on_unclear_answer() {
        let mut output = Vec::new();
        let mut questionnaire =
            Questionnaire::new(Cursor::new(&b"sure\nno\n"[..]), &mut output);
        let path = questionnaire
            .ask_save_path(Path::new("/tmp/profile.yaml"))
            .unwrap();
        assert!(path.is_none());
        drop(questionnaire);
        assert!(String::from_utf8(output).unwrap().contains("answer yes or no"));
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("", true), Some(true));
        assert_eq!(parse_yes_no("", false), Some(false));
        assert_eq!(parse_yes_no("YES", false), Some(true));
        assert_eq!(parse_yes_no("n", true), Some(false));
        assert_eq!(parse_yes_no("perhaps", true), None);
    }
}

use clap::{Args, Parser, Subcommand};
use house_score::output::{self, OutputFormat};
use house_score::profile::{self, BuildingProfile, Insulation, ProfileDraft, Ventilation};
use std::path::PathBuf;
use tracing::{debug, info};

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_PROFILE: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a building from flags and/or a profile file (default if no subcommand)
    Calculate(CalculateArgs),
    /// Answer the questions one by one, then score the answers
    Interactive,
    /// Print an example profile file to start from
    Template {
        /// Write the template to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
struct CalculateArgs {
    /// Load the building profile from a YAML file; flags override its values
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Building floor area in m² (recorded, not scored)
    #[arg(long, value_name = "M2", allow_negative_numbers = true)]
    floor_area: Option<f64>,

    /// Wall/roof insulation type
    #[arg(long, value_enum)]
    insulation: Option<Insulation>,

    /// Is there a solar PV system installed?
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    solar: Option<bool>,

    /// Does the house have a rainwater harvesting system?
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    rainwater: Option<bool>,

    /// Does the toilet use a dual flush system?
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    dual_flush: Option<bool>,

    /// Are windows double-glazed?
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    double_glazing: Option<bool>,

    /// Ventilation type
    #[arg(long, value_enum)]
    ventilation: Option<Ventilation>,

    /// Percentage of floor area with natural daylight (0-100)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    natural_light: Option<f64>,

    /// Does the house provide wheelchair access (ramp/wide doors)?
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    wheelchair_access: Option<bool>,

    /// Are there recycling or composting facilities available?
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    waste_sorting: Option<bool>,

    /// Distance to the nearest public transport stop in meters
    #[arg(long, value_name = "M", allow_negative_numbers = true)]
    transport_distance: Option<f64>,
}

impl CalculateArgs {
    fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            floor_area: self.floor_area,
            insulation: self.insulation,
            has_solar_pv: self.solar,
            has_rainwater_harvesting: self.rainwater,
            has_dual_flush_toilet: self.dual_flush,
            has_double_glazing: self.double_glazing,
            ventilation: self.ventilation,
            natural_light_pct: self.natural_light,
            wheelchair_access: self.wheelchair_access,
            waste_sorting: self.waste_sorting,
            transport_distance_m: self.transport_distance,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "house-score")]
#[command(about = "House sustainability score calculator", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging and show the per-rule breakdown
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(flatten)]
    calculate: CalculateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn print_errors(heading: &str, errors: &[String]) {
    eprintln!("{}", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
}

/// Build the profile for `calculate`: profile file first, flags on top.
/// Errors are reported on stderr; the `Err` carries the exit code.
fn collect_from_args(args: &CalculateArgs) -> Result<BuildingProfile, i32> {
    let draft = args.draft();
    match &args.profile {
        Some(path) => {
            debug!(path = %path.display(), "Loading building profile");
            match profile::load_profile(path) {
                Ok(base) => Ok(draft.apply_to(base)),
                Err(e) => {
                    eprintln!("Profile error: {:#}", e);
                    Err(EXIT_PROFILE)
                }
            }
        }
        None => draft.complete().map_err(|missing| {
            print_errors("Missing building details:", &missing);
            eprintln!("Pass the flags above or load a profile with --profile <PATH>.");
            EXIT_VALIDATION
        }),
    }
}

/// Reject out-of-range input instead of scoring it
fn check_profile(building: &BuildingProfile) -> Result<(), i32> {
    profile::validate_profile(building).map_err(|errors| {
        print_errors("Invalid building profile:", &errors);
        EXIT_VALIDATION
    })
}

/// Run the questionnaire on stdin/stdout, optionally saving the answers.
fn collect_interactively() -> Result<BuildingProfile, i32> {
    let stdin = std::io::stdin();
    let mut questionnaire = profile::Questionnaire::new(stdin.lock(), std::io::stdout());

    let answers = match questionnaire.run() {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("Questionnaire aborted: {:#}", e);
            return Err(EXIT_VALIDATION);
        }
    };

    let saved = profile::default_profile_path()
        .and_then(|default_path| questionnaire.ask_save_path(&default_path))
        .and_then(|path| match path {
            Some(path) => {
                profile::save_profile(&path, &answers)?;
                info!(path = %path.display(), "Saved building profile");
                Ok(())
            }
            None => Ok(()),
        });
    if let Err(e) = saved {
        eprintln!("Profile error: {:#}", e);
        return Err(EXIT_PROFILE);
    }

    Ok(answers)
}

fn write_template(output: Option<PathBuf>) {
    let template = BuildingProfile::form_defaults();
    let result = match output {
        Some(path) => profile::save_profile(&path, &template).map(|_| {
            info!(path = %path.display(), "Wrote profile template");
        }),
        None => profile::profile_to_yaml(&template).map(|yaml| print!("{}", yaml)),
    };
    if let Err(e) = result {
        eprintln!("Profile error: {:#}", e);
        std::process::exit(EXIT_PROFILE);
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = house_score::telemetry::init(cli.verbose) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Calculate(cli.calculate.clone()));

    let collected = match command {
        Commands::Calculate(args) => collect_from_args(&args),
        Commands::Interactive => collect_interactively(),
        Commands::Template { output } => {
            write_template(output);
            std::process::exit(EXIT_SUCCESS);
        }
    };
    let building = match collected.and_then(|b| check_profile(&b).map(|_| b)) {
        Ok(building) => building,
        Err(code) => std::process::exit(code),
    };
    debug!(?building, "Building profile validated");

    let result = house_score::scoring::calculate_score(&building);
    debug!(
        total = result.total,
        rating = %result.rating,
        suggestions = result.suggestions.len(),
        "Scored building"
    );

    match cli.format {
        OutputFormat::Text => {
            let use_colors = !cli.no_color && output::should_use_colors();
            println!(
                "{}",
                output::format_report(&building, &result, use_colors, cli.verbose)
            );
        }
        OutputFormat::Json => match output::format_json(&building, &result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_OUTPUT);
            }
        },
        OutputFormat::Tsv => println!("{}", output::format_tsv(&result)),
    }

    std::process::exit(EXIT_SUCCESS);
}

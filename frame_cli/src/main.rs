//! # Timberframe CLI
//!
//! Command-line front end for `frame_core`.
//!
//! ```text
//! timberframe design --length 40 --width 24 --wall-height 10 --pitch 6 --snow 50
//! timberframe compare --snow 30,50,70
//! timberframe --config site.toml config
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use frame_core::calculations::MemberClass;
use frame_core::config::{self, DesignConfig};
use frame_core::report::render_text;
use frame_core::{design, design_scenarios, CalcError, CalcResult, DesignResult, GeometryInput, LoadInput};

/// Size a timber frame and lay out its bents.
#[derive(Parser, Debug)]
#[command(name = "timberframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file overriding engineering constants
    #[arg(long = "config", global = true, value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Design one building
    Design {
        #[command(flatten)]
        building: BuildingArgs,

        /// Design snow load (psf)
        #[arg(long, default_value_t = 50.0)]
        snow: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Design one building under several snow loads
    Compare {
        #[command(flatten)]
        building: BuildingArgs,

        /// Comma-separated design snow loads (psf)
        #[arg(long, value_delimiter = ',', default_values_t = [30.0, 50.0, 70.0])]
        snow: Vec<f64>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone, Copy)]
struct BuildingArgs {
    /// Building length along the ridge (ft)
    #[arg(long, default_value_t = 40.0)]
    length: f64,

    /// Building width, the beam span (ft)
    #[arg(long, default_value_t = 24.0)]
    width: f64,

    /// Wall height, sill to plate (ft)
    #[arg(long, default_value_t = 10.0)]
    wall_height: f64,

    /// Roof rise per 12 of run
    #[arg(long, default_value_t = 6.0)]
    pitch: f64,
}

impl From<BuildingArgs> for GeometryInput {
    fn from(args: BuildingArgs) -> Self {
        GeometryInput {
            length_ft: args.length,
            width_ft: args.width,
            wall_height_ft: args.wall_height,
            pitch: args.pitch,
        }
    }
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> CalcResult<&'static DesignConfig> {
    let cfg = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            DesignConfig::load(path)?
        }
        None => DesignConfig::default(),
    };
    config::init(cfg)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(get_log_level(cli.verbose, cli.quiet));

    let cfg = match load_config(cli.config_file.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Design { building, snow, json } => {
            let geometry: GeometryInput = building.into();
            let loads = LoadInput { snow_load_psf: snow };
            match design(&geometry, &loads, cfg) {
                Ok(result) => print_result(&result, json),
                Err(e) => {
                    report_error(&e, json);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Compare { building, snow, json } => {
            let geometry: GeometryInput = building.into();
            let results = design_scenarios(&geometry, &snow, cfg);
            let failed = results.iter().any(Result::is_err);
            if json {
                match serde_json::to_string_pretty(&results) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_comparison(&snow, &results);
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Command::Config => match cfg.to_toml_string() {
            Ok(text) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn print_result(result: &DesignResult, json: bool) -> ExitCode {
    if !json {
        print!("{}", render_text(result));
        return ExitCode::SUCCESS;
    }
    match result.to_json() {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Suggestion printed after a capacity failure, naming the member that ran out
fn capacity_hint(error: &CalcError) -> Option<String> {
    let member = error.failing_member()?;
    let relax = match member {
        MemberClass::Beam => "a narrower building or closer bents",
        MemberClass::Rafter => "a narrower building or a lower pitch",
        MemberClass::Post => "a lower wall height",
    };
    Some(format!(
        "The {} is the limiting member. Try a lighter snow load, {}, or a stronger grade in the configuration.",
        member.label(),
        relax
    ))
}

fn report_error(error: &CalcError, json: bool) {
    eprintln!("Error: {error}");
    if let Some(hint) = capacity_hint(error) {
        eprintln!("{hint}");
    }
    if json {
        if let Ok(text) = serde_json::to_string_pretty(error) {
            println!("{text}");
        }
    }
}

fn print_comparison(snow_loads: &[f64], results: &[CalcResult<DesignResult>]) {
    println!(
        "{:>8}  {:>5}  {:>8}  {:<6} {:<6} {:<6}  {:>9}",
        "Snow", "Bents", "Spacing", "Post", "Beam", "Rafter", "Board ft"
    );
    println!("{}", "─".repeat(62));
    for (snow, result) in snow_loads.iter().zip(results) {
        match result {
            Ok(r) => {
                let size = |class| r.member(class).map_or("-", |m| m.entry.size.display_name());
                println!(
                    "{:>4} psf  {:>5}  {:>5.1} ft  {:<6} {:<6} {:<6}  {:>9.0}",
                    snow,
                    r.layout.bent_count,
                    r.layout.spacing_ft,
                    size(MemberClass::Post),
                    size(MemberClass::Beam),
                    size(MemberClass::Rafter),
                    r.total_board_feet
                );
            }
            Err(e) => println!("{:>4} psf  {} ({})", snow, e.error_code(), e),
        }
    }
}

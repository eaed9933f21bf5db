use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use landrun_engine::{cli_api::*, constants, load_profile_from_path};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landrun")]
#[command(version = "0.1.0")]
#[command(about = "Altitude strategy search for balloon land run tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank altitude pairs and time splits by triangle area
    Optimize {
        /// Wind table CSV (Altitude_ft, Direction_deg, Speed_kmh)
        profile: PathBuf,

        /// Total flight time (minutes, 5-90)
        #[arg(short = 't', long, default_value_t = constants::DEFAULT_FLIGHT_TIME_MIN)]
        flight_time: u32,

        /// Climb/descent rate (m/s, 0.1-10.0)
        #[arg(short = 'c', long, default_value_t = constants::DEFAULT_CLIMB_RATE_MPS)]
        climb_rate: f64,

        /// Number of ranked combinations to show
        #[arg(short = 'k', long, default_value_t = constants::DEFAULT_TOP_K)]
        top_k: usize,

        /// Number of time splits tried per altitude pair
        #[arg(long, default_value_t = constants::DEFAULT_SPLIT_COUNT)]
        splits: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputOpt,

        /// Score candidates on all cores
        #[arg(long)]
        parallel: bool,

        /// Log search progress to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputOpt {
    Table,
    Json,
    Csv,
}

impl From<OutputOpt> for OutputFormat {
    fn from(opt: OutputOpt) -> Self {
        match opt {
            OutputOpt::Table => OutputFormat::Table,
            OutputOpt::Json => OutputFormat::Json,
            OutputOpt::Csv => OutputFormat::Csv,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            profile,
            flight_time,
            climb_rate,
            top_k,
            splits,
            output,
            parallel,
            verbose,
        } => {
            init_tracing(verbose);

            let wind = load_profile_from_path(&profile)
                .with_context(|| format!("loading wind profile {}", profile.display()))?;

            let inputs = LandRunInputs {
                flight_time_min: flight_time,
                climb_rate_mps: climb_rate,
                top_k,
                split_count: splits,
                parallel,
                ..Default::default()
            };

            let result = optimize_land_run(wind, inputs)?;
            display_results(&result, output.into())?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      LAND RUN ENGINE v0.1.0            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Searches altitude pairs and time       ║");
            println!("║ splits for the largest triangle.       ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Defaults:                              ║");
            println!("║ • Flight time:     {:>4} min            ║", constants::DEFAULT_FLIGHT_TIME_MIN);
            println!("║ • Climb rate:      {:>4.1} m/s            ║", constants::DEFAULT_CLIMB_RATE_MPS);
            println!("║ • Time splits:     {:>4}                ║", constants::DEFAULT_SPLIT_COUNT);
            println!("║ • Ranked results:  {:>4}                ║", constants::DEFAULT_TOP_K);
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_results(result: &LandRunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }

        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout().lock());
            writer.write_record(["h1", "Speed_h1", "h2", "Speed_h2", "T1", "T2", "Climb", "Area_km2"])?;
            for r in &result.records {
                writer.write_record([
                    r.h1.to_string(),
                    format!("{:.1}", r.speed_h1),
                    r.h2.to_string(),
                    format!("{:.1}", r.speed_h2),
                    r.t1.clone(),
                    r.t2.clone(),
                    r.climb.clone(),
                    format!("{:.2}", r.area_km2),
                ])?;
            }
            writer.flush()?;
        }

        OutputFormat::Table => {
            if result.is_empty() {
                println!("No feasible altitude combination: every climb exceeds the flight time.");
                return Ok(());
            }

            println!("Top {} altitude combinations ({} evaluated)", result.records.len(), result.candidates_evaluated);
            println!("┌────┬─────────┬─────────┬─────────┬─────────┬───────┬───────┬───────┬──────────┐");
            println!("│  # │ h1 (ft) │ V1 km/h │ h2 (ft) │ V2 km/h │  T1   │  T2   │ Climb │ Area km² │");
            println!("├────┼─────────┼─────────┼─────────┼─────────┼───────┼───────┼───────┼──────────┤");
            for (i, r) in result.records.iter().enumerate() {
                println!("│ {:>2} │ {:>7.0} │ {:>7.1} │ {:>7.0} │ {:>7.1} │ {:>5} │ {:>5} │ {:>5} │ {:>8.2} │",
                    i + 1, r.h1, r.speed_h1, r.h2, r.speed_h2, r.t1, r.t2, r.climb, r.area_km2);
            }
            println!("└────┴─────────┴─────────┴─────────┴─────────┴───────┴───────┴───────┴──────────┘");

            if let Some(path) = &result.best_path {
                println!("\nBest trajectory (east, north in m):");
                for (name, p) in ["p0", "p1", "p2"].iter().zip(path.iter()) {
                    println!("  {}: {:>10.1} {:>10.1}", name, p.x, p.y);
                }
            }
        }
    }

    Ok(())
}

//! CLI driver for the Gust wind simulation.

mod commands;
mod schedule;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gust",
    about = "Gust: weather-driven ambient wind simulation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the wind simulation and print sampled wind vectors
    Simulate {
        /// Number of ticks to simulate (default: 1200 = one minute)
        #[arg(short, long, default_value = "1200")]
        ticks: u64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Weather for the whole run: clear, rain, thunder
        #[arg(short, long, default_value = "clear")]
        weather: String,

        /// Weather changes as `TICK:WEATHER` pairs, e.g. "0:clear,600:rain"
        #[arg(long, conflicts_with = "weather")]
        schedule: Option<String>,

        /// Dimension preset: overworld, nether, end
        #[arg(short, long, default_value = "overworld")]
        dimension: String,

        /// Print a sample row every this many ticks
        #[arg(short, long, default_value = "100")]
        every: u64,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List wind states and their speed distributions
    States {
        /// Number of samples used to estimate each empirical mean
        #[arg(long, default_value = "10000")]
        samples: usize,

        /// RNG seed for the sampled means
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            seed,
            weather,
            schedule,
            dimension,
            every,
            json,
        } => commands::simulate::run(&commands::simulate::SimulateArgs {
            ticks,
            seed,
            weather: &weather,
            schedule: schedule.as_deref(),
            dimension: &dimension,
            every,
            json,
        }),
        Commands::States { samples, seed } => commands::states::run(samples, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

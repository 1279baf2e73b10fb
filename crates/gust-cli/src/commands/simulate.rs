use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use gust_wind::{Dimension, Environment, StateTransition, Weather, Wind, WindConfig, WindState};

use crate::schedule::WeatherSchedule;

/// Parsed arguments of `gust simulate`.
pub struct SimulateArgs<'a> {
    pub ticks: u64,
    pub seed: u64,
    pub weather: &'a str,
    pub schedule: Option<&'a str>,
    pub dimension: &'a str,
    pub every: u64,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Sample {
    tick: u64,
    weather: Weather,
    state: WindState,
    speed: f32,
    direction: f32,
    x: f32,
    z: f32,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    ticks: u64,
    dimension: Dimension,
    samples: Vec<Sample>,
    transitions: Vec<StateTransition>,
}

pub fn run(args: &SimulateArgs<'_>) -> Result<(), String> {
    if args.every == 0 {
        return Err("--every must be at least 1".into());
    }
    let dimension = args
        .dimension
        .parse::<Dimension>()
        .map_err(|e| e.to_string())?;
    let schedule = match args.schedule {
        Some(entries) => WeatherSchedule::parse(entries)?,
        None => {
            let weather = args.weather.parse::<Weather>().map_err(|e| e.to_string())?;
            WeatherSchedule::constant(weather)
        }
    };

    let config = WindConfig::default()
        .with_seed(args.seed)
        .with_max_transitions(0);
    let mut wind = Wind::new(config).map_err(|e| format!("wind setup failed: {e}"))?;

    let mut samples = Vec::new();
    for tick in 1..=args.ticks {
        let weather = schedule.weather_at(tick);
        let env = Environment::new(dimension).with_weather(weather);
        wind.tick(&env);

        if tick % args.every == 0 || tick == args.ticks {
            samples.push(Sample {
                tick,
                weather,
                state: wind.state(),
                speed: wind.speed(),
                direction: wind.direction().rem_euclid(std::f32::consts::TAU),
                x: wind.wind_x(),
                z: wind.wind_z(),
            });
        }
    }

    tracing::info!(
        ticks = args.ticks,
        transitions = wind.transitions().len(),
        final_state = %wind.state(),
        "simulation finished"
    );

    let report = Report {
        seed: args.seed,
        ticks: args.ticks,
        dimension,
        samples,
        transitions: wind.transitions().iter().copied().collect(),
    };

    if args.json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "  {} {}",
        "Wind".bold(),
        format!(
            "({} ticks, seed={}, dimension={})",
            report.ticks, report.seed, report.dimension
        )
        .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Tick", "Weather", "State", "Speed", "Heading", "X", "Z",
    ]);
    for sample in &report.samples {
        table.add_row(vec![
            sample.tick.to_string(),
            sample.weather.to_string(),
            sample.state.to_string(),
            format!("{:.3}", sample.speed),
            format!("{:.1}°", sample.direction.to_degrees()),
            format!("{:+.3}", sample.x),
            format!("{:+.3}", sample.z),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Transitions".bold().underline());
    if report.transitions.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for transition in &report.transitions {
        let to = colorize_state(transition.to);
        println!(
            "  {} {} -> {} {}",
            format!("[tick {:>5}]", transition.tick).dimmed(),
            transition.from,
            to,
            format!("({})", transition.cause).dimmed()
        );
    }
}

fn colorize_state(state: WindState) -> colored::ColoredString {
    match state {
        WindState::Calm => state.as_str().green(),
        WindState::Windy => state.as_str().yellow(),
        WindState::Stormy => state.as_str().red().bold(),
    }
}

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::StdRng;

use gust_math::TriangularDistribution;
use gust_wind::WindState;

pub fn run(samples: usize, seed: u64) -> Result<(), String> {
    if samples == 0 {
        return Err("--samples must be at least 1".into());
    }
    let mut rng = StdRng::seed_from_u64(seed);

    println!("  {}", "Wind States".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["State", "Min", "Likely", "Max", "Mean", "Sampled"]);

    for state in WindState::ALL {
        let dist = state
            .velocity_distribution()
            .map_err(|e| format!("{state}: {e}"))?;
        let sampled = sampled_mean(&dist, samples, &mut rng);
        table.add_row(vec![
            state.to_string(),
            format!("{:.2}", dist.min()),
            format!("{:.2}", dist.mode()),
            format!("{:.2}", dist.max()),
            format!("{:.3}", dist.mean()),
            format!("{sampled:.3}"),
        ]);
    }

    println!("{table}");
    println!(
        "  {}",
        format!("max speed {:.2}, {samples} samples per state", WindState::MAX_SPEED).dimmed()
    );
    Ok(())
}

fn sampled_mean(dist: &TriangularDistribution, samples: usize, rng: &mut StdRng) -> f32 {
    let sum: f64 = (0..samples).map(|_| f64::from(dist.sample(&mut *rng))).sum();
    (sum / samples as f64) as f32
}

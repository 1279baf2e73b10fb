//! End-to-end tests for the gust binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn gust() -> Command {
    Command::cargo_bin("gust").unwrap()
}

fn simulate_json(args: &[&str]) -> serde_json::Value {
    let output = gust()
        .arg("simulate")
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("valid JSON output")
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_table() {
    gust()
        .args(["simulate", "--ticks", "400", "--every", "100"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tick")
                .and(predicate::str::contains("Transitions"))
                .and(predicate::str::contains("seed=42")),
        );
}

#[test]
fn simulate_json_samples() {
    let json = simulate_json(&["--ticks", "1000", "--every", "250"]);
    assert_eq!(json["seed"], 42);
    assert_eq!(json["dimension"], "overworld");
    let samples = json["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[3]["tick"], 1000);
    for sample in samples {
        let state = sample["state"].as_str().unwrap();
        assert!(state == "calm" || state == "windy", "unexpected {state}");
    }
}

#[test]
fn simulate_thunder_is_stormy() {
    let json = simulate_json(&["--ticks", "200", "--every", "50", "--weather", "thunder"]);
    for sample in json["samples"].as_array().unwrap() {
        assert_eq!(sample["state"], "stormy");
        let speed = sample["speed"].as_f64().unwrap();
        assert!(speed <= 1.1 + 1e-6);
    }
}

#[test]
fn simulate_nether_is_windy() {
    let json = simulate_json(&["--ticks", "100", "--every", "10", "--dimension", "nether"]);
    for sample in json["samples"].as_array().unwrap() {
        assert_eq!(sample["state"], "windy");
    }
}

#[test]
fn simulate_schedule_switches_weather() {
    let json = simulate_json(&[
        "--ticks",
        "600",
        "--every",
        "100",
        "--schedule",
        "0:clear,300:thunder",
    ]);
    let samples = json["samples"].as_array().unwrap();
    assert_eq!(samples[0]["weather"], "clear");
    assert_eq!(samples[5]["weather"], "thunder");
    assert_eq!(samples[5]["state"], "stormy");
    let transitions = json["transitions"].as_array().unwrap();
    assert!(
        transitions
            .iter()
            .any(|t| t["to"] == "stormy" && t["cause"] == "weather")
    );
}

#[test]
fn simulate_schedule_conflicts_with_weather() {
    gust()
        .args(["simulate", "--weather", "thunder", "--schedule", "0:clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn simulate_is_deterministic() {
    let a = simulate_json(&["--ticks", "500", "--seed", "7"]);
    let b = simulate_json(&["--ticks", "500", "--seed", "7"]);
    assert_eq!(a, b);
}

#[test]
fn simulate_unknown_weather() {
    gust()
        .args(["simulate", "--weather", "snow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown weather"));
}

#[test]
fn simulate_unknown_dimension() {
    gust()
        .args(["simulate", "--dimension", "moon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dimension"));
}

#[test]
fn simulate_zero_every() {
    gust()
        .args(["simulate", "--every", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--every"));
}

// ---------------------------------------------------------------------------
// states
// ---------------------------------------------------------------------------

#[test]
fn states_lists_all_three() {
    gust()
        .args(["states", "--samples", "1000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("calm")
                .and(predicate::str::contains("windy"))
                .and(predicate::str::contains("stormy"))
                .and(predicate::str::contains("1.10")),
        );
}

#[test]
fn states_zero_samples() {
    gust()
        .args(["states", "--samples", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--samples"));
}

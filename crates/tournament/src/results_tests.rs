use super::*;

fn report(max_distance: usize, threshold: usize) -> FairnessReport {
    FairnessReport {
        distances: vec![max_distance],
        max_distance,
        threshold,
        accepted: max_distance <= threshold,
    }
}

fn sample() -> BatchResults {
    let mut results = BatchResults::new(SimulationConfig::default(), 42);
    for d in [2, 4, 5, 4] {
        results.record(&report(d, 4));
    }
    results
}

#[test]
fn test_record_and_pass_rate() {
    let results = sample();
    assert_eq!(results.simulations, 4);
    assert_eq!(results.accepted, 3);
    assert_eq!(results.max_distances, vec![2, 4, 5, 4]);
    assert!((results.pass_rate() - 0.75).abs() < 1e-12);
}

#[test]
fn test_empty_batch_pass_rate() {
    let results = BatchResults::new(SimulationConfig::default(), 0);
    assert_eq!(results.pass_rate(), 0.0);
}

#[test]
fn test_summary_line() {
    assert_eq!(sample().summary_line(), "win probability = 3/4 (0.75)");

    let mut all = BatchResults::new(SimulationConfig::default(), 0);
    all.record(&report(0, 4));
    assert_eq!(all.summary_line(), "win probability = 1/1 (1)");
}

#[test]
fn test_distance_histogram() {
    let histogram = sample().distance_histogram();
    assert_eq!(histogram.into_iter().collect::<Vec<_>>(), vec![(2, 1), (4, 2), (5, 1)]);
}

#[test]
fn test_report_marks_rejections() {
    let text = sample().generate_report();
    assert!(text.contains("16 players, 40 rounds, model strength_difference"));
    assert!(text.contains("           5        1 *"));
    assert!(text.ends_with("win probability = 3/4 (0.75)\n"));
}

#[test]
fn test_json_output() {
    let json = sample().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["accepted"], 3);
    assert_eq!(value["config"]["tournament"]["win_model"], "strength_difference");
}

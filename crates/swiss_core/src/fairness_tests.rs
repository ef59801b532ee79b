use super::*;

#[test]
fn test_rank_distances() {
    let cases: &[(&[u32], &[f64], &[usize])] = &[
        (&[], &[], &[]),
        (&[0], &[0.0], &[0]),
        (&[0, 1], &[0.0, 1.0], &[0, 0]),
        (&[1, 0], &[1.0, 0.0], &[0, 0]),
        (&[0, 1], &[1.0, 0.0], &[1, 1]),
        (&[0, 1, 2], &[2.0, 1.0, 0.0], &[2, 0, 2]),
    ];

    for &(scores, strengths, want) in cases {
        assert_eq!(
            rank_distances(scores, strengths),
            want,
            "rank_distances({:?}, {:?})",
            scores,
            strengths
        );
    }
}

#[test]
fn test_score_rank_order_is_stable() {
    assert_eq!(score_rank_order(&[1, 2, 1, 2]), vec![1, 3, 0, 2]);
}

#[test]
fn test_report_accepts_within_threshold() {
    let report = FairnessReport::evaluate(&[0, 1, 2], &[2.0, 1.0, 0.0], 2);
    assert_eq!(report.max_distance, 2);
    assert!(report.accepted);

    let report = FairnessReport::evaluate(&[0, 1, 2], &[2.0, 1.0, 0.0], 1);
    assert!(!report.accepted);
}

#[test]
fn test_report_empty_field_is_accepted() {
    let report = FairnessReport::evaluate(&[], &[], DEFAULT_FAIRNESS_THRESHOLD);
    assert!(report.distances.is_empty());
    assert_eq!(report.max_distance, 0);
    assert!(report.accepted);
}

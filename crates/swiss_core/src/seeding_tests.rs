use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_assign_seeds_simple() {
    assert_eq!(assign_seeds(&[]), Vec::<usize>::new());
    assert_eq!(assign_seeds(&[3.0]), vec![0]);
    assert_eq!(assign_seeds(&[1.0, 3.0, 2.0]), vec![2, 0, 1]);
}

#[test]
fn test_assign_seeds_ties_follow_index() {
    assert_eq!(assign_seeds(&[1.0, 1.0, 2.0, 1.0]), vec![1, 2, 0, 3]);
}

#[test]
fn test_assign_seeds_is_ordered_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(0..40);
        let strengths: Vec<f64> = (0..n).map(|_| rng.gen_range(-3.0..3.0)).collect();
        let seeds = assign_seeds(&strengths);

        let mut sorted = seeds.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>(), "seeds must be a permutation");

        for i in 0..n {
            for j in 0..n {
                if strengths[i] > strengths[j] {
                    assert!(
                        seeds[i] < seeds[j],
                        "stronger player {} must have a better seed than {}",
                        i,
                        j
                    );
                }
            }
        }
    }
}

#[test]
fn test_rank_positions() {
    assert_eq!(rank_positions(&[]), Vec::<usize>::new());
    assert_eq!(rank_positions(&[0]), vec![0]);
    assert_eq!(rank_positions(&[0, 1]), vec![0, 1]);
    assert_eq!(rank_positions(&[1, 0]), vec![1, 0]);
    assert_eq!(rank_positions(&[1, 2, 0]), vec![2, 0, 1]);
}

#[test]
fn test_strength_order() {
    assert_eq!(strength_order(&[0.0, 2.0, 1.0]), vec![1, 2, 0]);
}

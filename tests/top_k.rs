mod common;

use rustalgo::{top_k, top_k_iter, AlgoError};

use common::{is_ascending, random_values, sorted_top_k};

#[test]
fn top_k_returns_largest_values_ascending() {
    let out = top_k(&[4, 1, 7, 3, 9, 2, 6], 3).expect("valid k");
    assert_eq!(out, vec![6, 7, 9]);
}

#[test]
fn top_k_zero_is_empty() {
    assert!(top_k(&[5, 3, 8], 0).expect("valid k").is_empty());
}

#[test]
fn top_k_empty_input_is_empty() {
    let empty: [i64; 0] = [];
    for k in [0, 1, 10] {
        assert!(top_k(&empty, k).expect("valid k").is_empty());
    }
}

#[test]
fn top_k_larger_than_input_sorts_everything() {
    let input = [3, -1, 8, 3, 0];
    let expected = vec![-1, 0, 3, 3, 8];
    assert_eq!(top_k(&input, 5).expect("valid k"), expected);
    assert_eq!(top_k(&input, 6).expect("valid k"), expected);
    assert_eq!(top_k(&input, i64::MAX).expect("valid k"), expected);
}

#[test]
fn top_k_negative_k_is_invalid_argument() {
    let err = top_k(&[1, 2, 3], -1).expect_err("negative k must fail");
    match err {
        AlgoError::InvalidArgument { op, msg } => {
            assert_eq!(op, "top_k");
            assert!(msg.contains("-1"), "unexpected message: {msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn top_k_keeps_duplicates_across_boundary() {
    let out = top_k(&[5, 1, 5, 5, 2], 2).expect("valid k");
    assert_eq!(out, vec![5, 5]);

    let out = top_k(&[7, 7, 7], 2).expect("valid k");
    assert_eq!(out, vec![7, 7]);
}

#[test]
fn top_k_does_not_mutate_input() {
    let input = vec![9, 4, 6, 1];
    let snapshot = input.clone();
    let _ = top_k(&input, 2).expect("valid k");
    assert_eq!(input, snapshot);
}

#[test]
fn top_k_matches_full_sort_on_random_inputs() {
    for seed in 0..20u64 {
        let len = (seed as usize * 7) % 60;
        let values = random_values(seed, len, -25..25);
        for k in [0usize, 1, 3, len / 2, len, len + 4] {
            let out = top_k(&values, k as i64).expect("valid k");
            assert_eq!(out.len(), k.min(len));
            assert!(is_ascending(&out));
            assert_eq!(out, sorted_top_k(&values, k), "seed={seed} k={k}");

            let mut resorted = out.clone();
            resorted.sort();
            assert_eq!(resorted, out);
        }
    }
}

#[test]
fn top_k_iter_consumes_iterators() {
    let out = top_k_iter((1..=100).rev(), 4);
    assert_eq!(out, vec![97, 98, 99, 100]);

    let words = top_k_iter(vec!["pear", "apple", "fig", "quince"], 2);
    assert_eq!(words, vec!["pear", "quince"]);
}

#[test]
fn top_k_iter_agrees_with_slice_entry_point() {
    let values = random_values(42, 200, -1000..1000);
    let from_iter = top_k_iter(values.iter().copied(), 17);
    let from_slice = top_k(&values, 17).expect("valid k");
    assert_eq!(from_iter, from_slice);
}

//! Emission order and completeness of the enumerators.

use combinat_kernel::{BigUint, SortedArrays, advance, enumerate_selections, injections};
use std::collections::BTreeSet;

fn render<T: std::fmt::Debug>(rows: impl IntoIterator<Item = T>) -> String {
    rows.into_iter()
        .map(|row| format!("{row:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Partitions of `sum` into at most `parts` parts.
fn partition_count(sum: u64, parts: u64) -> u64 {
    fn bounded(sum: u64, parts: u64, largest: u64) -> u64 {
        if sum == 0 {
            return 1;
        }
        if parts == 0 {
            return 0;
        }
        (1..=largest.min(sum))
            .map(|part| bounded(sum - part, parts - 1, part))
            .sum()
    }
    bounded(sum, parts, sum)
}

#[test]
fn selections_of_two_from_three() {
    let selections = enumerate_selections(3, 2).unwrap();
    insta::assert_snapshot!(render(selections.iter()), @r"
    [0, 1]
    [1, 0]
    [0, 2]
    [2, 0]
    [1, 2]
    [2, 1]
    ");

    let as_set: BTreeSet<Vec<usize>> = selections.iter().collect();
    let expected: BTreeSet<Vec<usize>> = [[0, 1], [1, 0], [0, 2], [2, 0], [1, 2], [2, 1]]
        .into_iter()
        .map(Vec::from)
        .collect();
    assert_eq!(as_set, expected);
}

#[test]
fn selection_counts_match_injections() {
    for n in 0..=6i64 {
        for k in 0..=(n + 1) {
            let selections = enumerate_selections(n, k).unwrap();
            let tuples: Vec<Vec<usize>> = selections.iter().collect();
            let distinct: BTreeSet<&Vec<usize>> = tuples.iter().collect();

            assert_eq!(distinct.len(), tuples.len(), "duplicates for ({n}, {k})");
            assert_eq!(
                injections(n, k).unwrap(),
                BigUint::from(tuples.len()),
                "count for ({n}, {k})"
            );
            for tuple in &tuples {
                let values: BTreeSet<usize> = tuple.iter().copied().collect();
                assert_eq!(values.len(), tuple.len());
                assert!(tuple.iter().all(|&value| (value as i64) < n));
            }
        }
    }
}

#[test]
fn sorted_arrays_of_four_summing_to_five() {
    insta::assert_snapshot!(render(SortedArrays::new(4, 5).unwrap()), @r"
    [0, 0, 0, 5]
    [0, 0, 1, 4]
    [0, 0, 2, 3]
    [0, 1, 1, 3]
    [0, 1, 2, 2]
    [1, 1, 1, 2]
    ");
}

#[test]
fn sorted_arrays_are_complete_and_increasing() {
    for len in 1..=6i64 {
        for sum in 0..=10i64 {
            let arrays: Vec<Vec<i64>> = SortedArrays::new(len, sum).unwrap().collect();

            assert_eq!(
                arrays.len() as u64,
                partition_count(sum as u64, len as u64),
                "len {len}, sum {sum}"
            );
            for array in &arrays {
                assert_eq!(array.len() as i64, len);
                assert_eq!(array.iter().sum::<i64>(), sum);
                assert!(array.windows(2).all(|pair| pair[0] <= pair[1]));
            }
            assert!(arrays.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn advance_reports_exhaustion_without_mutation() {
    let mut values = vec![0, 0, 8];
    let mut steps = 0;
    while advance(&mut values, 8) {
        steps += 1;
    }
    // Partitions of 8 into at most 3 parts, minus the starting array.
    assert_eq!(steps, partition_count(8, 3) - 1);
    assert_eq!(values, vec![2, 3, 3]);
}

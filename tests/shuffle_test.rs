use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng};
use spotmax::cli::shuffle_tracks;
use spotmax::shuffle::*;

// Helper to turn a group string like "AABC" into (item, group) pairs where
// every item is unique ("A0", "A1", "B0", "C0").
fn pairs_from(groups: &str) -> Vec<(String, char)> {
    let mut seen: HashMap<char, usize> = HashMap::new();
    groups
        .chars()
        .map(|g| {
            let n = seen.entry(g).or_insert(0);
            let item = format!("{}{}", g, n);
            *n += 1;
            (item, g)
        })
        .collect()
}

fn groups_of(groups: &str) -> Vec<char> {
    groups.chars().collect()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn test_split_even_balances_bins() {
    let seq = [1, 2, 3, 4, 5];
    let bins = split_even(&seq, 2);
    assert_eq!(bins, vec![&[1, 2, 3][..], &[4, 5][..]]);

    let bins = split_even(&seq, 5);
    assert!(bins.iter().all(|b| b.len() == 1));

    // More bins than elements leaves trailing bins empty
    let bins = split_even(&[1, 2, 3], 5);
    assert_eq!(bins.iter().map(|b| b.len()).collect::<Vec<_>>(), vec![1, 1, 1, 0, 0]);

    assert!(split_even(&seq, 0).is_empty());
}

#[test]
fn test_split_even_sizes_differ_by_at_most_one() {
    let seq: Vec<usize> = (1..=23).collect();
    for count in 1..=23 {
        let bins = split_even(&seq, count);
        assert_eq!(bins.len(), count);

        let max = bins.iter().map(|b| b.len()).max().unwrap();
        let min = bins.iter().map(|b| b.len()).min().unwrap();
        assert!(max - min <= 1);

        // Bins are contiguous and cover the sequence in order
        let joined: Vec<usize> = bins.iter().flat_map(|b| b.iter().copied()).collect();
        assert_eq!(joined, seq);
    }
}

#[test]
fn test_multiplicities_descending_with_first_seen_ties() {
    let counts = multiplicities(&groups_of("CABACDD"));
    assert_eq!(counts, vec![('C', 2), ('A', 2), ('D', 2), ('B', 1)]);

    let counts = multiplicities(&groups_of("BAAAB"));
    assert_eq!(counts, vec![('A', 3), ('B', 2)]);

    assert!(multiplicities::<char>(&[]).is_empty());
}

#[test]
fn test_assign_two_pairs_alternate() {
    let assignment = assign(&groups_of("XXYY"), BinStrategy::FullRange);

    assert!(assignment.is_complete());
    assert_eq!(assignment.positions_of(&'X'), vec![1, 3]);
    assert_eq!(assignment.positions_of(&'Y'), vec![2, 4]);
    assert_eq!(assignment.get(1), Some(&'X'));
    assert_eq!(assignment.get(0), None);
    assert_eq!(assignment.get(5), None);
}

#[test]
fn test_assign_spreads_majority_group() {
    let groups = groups_of("AAABCDEFGHI");
    for strategy in BinStrategy::ALL {
        let assignment = assign(&groups, strategy);
        let positions = assignment.positions_of(&'A');
        assert_eq!(positions, vec![1, 5, 9]);
        assert!(positions.windows(2).all(|w| w[1] - w[0] > 1));
    }
}

#[test]
fn test_assign_covers_every_position_once() {
    let groups = groups_of("AAAABBBCCD");
    let assignment = assign(&groups, BinStrategy::FullRange);

    assert_eq!(assignment.len(), groups.len());
    assert!(assignment.unassigned().is_empty());

    let expected: String = "ACBADBACAB".to_string();
    let actual: String = assignment
        .iter()
        .map(|(_, g)| *g.unwrap())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_assign_empty_input() {
    let assignment = assign::<char>(&[], BinStrategy::FullRange);
    assert!(assignment.is_empty());
    assert!(assignment.is_complete());
}

#[test]
fn test_full_range_can_starve_a_group() {
    let groups = groups_of("ABBBBBBA");

    // B takes 1,3,5,6,7,8; both bins of A's reversed range then hold only
    // position 4 as a free slot
    let assignment = assign(&groups, BinStrategy::FullRange);
    assert!(!assignment.is_complete());
    assert_eq!(assignment.unassigned(), vec![2]);
    assert_eq!(assignment.positions_of(&'A'), vec![4]);
    assert_eq!(assignment.positions_of(&'B'), vec![1, 3, 5, 6, 7, 8]);

    let result = distance_shuffle(&pairs_from("ABBBBBBA"), BinStrategy::FullRange);
    assert_eq!(result, Err(ShuffleError::UnassignedPosition { position: 2 }));
}

#[test]
fn test_unassigned_strategy_conserves_multiplicity() {
    let groups = groups_of("ABBBBBBA");
    let assignment = assign(&groups, BinStrategy::Unassigned);

    assert!(assignment.is_complete());
    assert_eq!(assignment.positions_of(&'A'), vec![2, 4]);
    assert_eq!(assignment.positions_of(&'B'), vec![1, 3, 5, 6, 7, 8]);
}

#[test]
fn test_materialize_pops_from_the_end() {
    let pairs = pairs_from("XXYY");
    let assignment = assign(&groups_of("XXYY"), BinStrategy::FullRange);

    let output = materialize(group_items(&pairs), &assignment).unwrap();
    assert_eq!(output, vec!["X1", "Y1", "X0", "Y0"]);
}

#[test]
fn test_materialize_reports_inconsistent_input() {
    let assignment = assign(&groups_of("XXY"), BinStrategy::FullRange);

    // X lost an item
    let short = group_items(&pairs_from("XY"));
    assert!(matches!(
        materialize(short, &assignment),
        Err(ShuffleError::GroupExhausted { .. })
    ));

    // Y is unknown
    let unknown = group_items(&pairs_from("XXZ"));
    assert!(matches!(
        materialize(unknown, &assignment),
        Err(ShuffleError::UnknownGroup { .. })
    ));

    // one X too many
    let extra = group_items(&pairs_from("XXXY"));
    assert_eq!(
        materialize(extra, &assignment),
        Err(ShuffleError::LeftoverItems { count: 1 })
    );
}

#[test]
fn test_validate() {
    let input: Vec<String> = vec!["a".into(), "b".into(), "b".into()];

    assert_eq!(validate(&input, &input), Ok(()));

    let permuted: Vec<String> = vec!["b".into(), "a".into(), "b".into()];
    assert_eq!(validate(&input, &permuted), Ok(()));

    let shorter: Vec<String> = vec!["a".into(), "b".into()];
    assert_eq!(
        validate(&input, &shorter),
        Err(ShuffleError::LengthMismatch {
            expected: 3,
            actual: 2
        })
    );

    // same length and same set, different multiplicities
    let swapped: Vec<String> = vec!["a".into(), "a".into(), "b".into()];
    assert_eq!(validate(&input, &swapped), Err(ShuffleError::ItemMismatch));
}

#[test]
fn test_distance_shuffle_no_adjacent_majority() {
    let pairs = pairs_from("AAABCDEFGHI");
    let output = distance_shuffle(&pairs, BinStrategy::FullRange).unwrap();

    let a_positions: Vec<usize> = output
        .iter()
        .enumerate()
        .filter(|(_, item)| item.starts_with('A'))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(a_positions.len(), 3);
    assert!(a_positions.windows(2).all(|w| w[1] - w[0] > 1));
}

#[test]
fn test_distance_shuffle_single_group() {
    let pairs = pairs_from("AAAA");
    let output = distance_shuffle(&pairs, BinStrategy::FullRange).unwrap();

    let input: Vec<String> = pairs.iter().map(|(item, _)| item.clone()).collect();
    assert_eq!(sorted(output), sorted(input));
}

#[test]
fn test_distance_shuffle_empty() {
    let pairs: Vec<(String, char)> = Vec::new();
    assert_eq!(distance_shuffle(&pairs, BinStrategy::FullRange), Ok(Vec::new()));
    assert_eq!(distance_shuffle(&pairs, BinStrategy::Unassigned), Ok(Vec::new()));
}

#[test]
fn test_distance_shuffle_keeps_duplicate_items() {
    // the same track twice on one album
    let pairs = vec![
        ("t1".to_string(), "a1"),
        ("t1".to_string(), "a1"),
        ("t2".to_string(), "a2"),
    ];
    let output = distance_shuffle(&pairs, BinStrategy::FullRange).unwrap();
    assert_eq!(output, vec!["t1", "t2", "t1"]);
}

#[test]
fn test_distance_shuffle_is_deterministic() {
    let pairs = pairs_from("ABACBDDAEBCA");
    for strategy in BinStrategy::ALL {
        let first = distance_shuffle(&pairs, strategy);
        let second = distance_shuffle(&pairs, strategy);
        assert_eq!(first, second);
    }
}

#[test]
fn test_random_inputs_are_permutations() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet: Vec<char> = "ABCDEFG".chars().collect();

    for _ in 0..500 {
        let len = rng.random_range(0..40);
        let distinct = rng.random_range(1..=alphabet.len());
        let groups: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..distinct)])
            .collect();
        let pairs = pairs_from(&groups);
        let input: Vec<String> = pairs.iter().map(|(item, _)| item.clone()).collect();

        // Unassigned never fails and conserves every group's count
        let assignment = assign(&groups_of(&groups), BinStrategy::Unassigned);
        assert!(assignment.is_complete(), "incomplete for {}", groups);
        for (group, count) in multiplicities(&groups_of(&groups)) {
            assert_eq!(assignment.positions_of(&group).len(), count);
        }
        let output = distance_shuffle(&pairs, BinStrategy::Unassigned).unwrap();
        assert_eq!(sorted(output), sorted(input.clone()));

        // FullRange either succeeds with a permutation or reports a gap
        match distance_shuffle(&pairs, BinStrategy::FullRange) {
            Ok(output) => assert_eq!(sorted(output), sorted(input)),
            Err(e) => assert!(matches!(e, ShuffleError::UnassignedPosition { .. })),
        }
    }
}

#[test]
fn test_shuffle_tracks_falls_back_when_full_range_starves() {
    let pairs: Vec<(String, String)> = pairs_from("ABBBBBBA")
        .into_iter()
        .map(|(item, group)| (item, group.to_string()))
        .collect();

    let (order, used) = shuffle_tracks(&pairs, None).unwrap();
    assert_eq!(used, BinStrategy::Unassigned);
    assert_eq!(order.len(), 8);

    // an explicit strategy is never replaced
    assert!(shuffle_tracks(&pairs, Some(BinStrategy::FullRange)).is_err());

    let balanced: Vec<(String, String)> = pairs_from("XXYY")
        .into_iter()
        .map(|(item, group)| (item, group.to_string()))
        .collect();
    let (_, used) = shuffle_tracks(&balanced, None).unwrap();
    assert_eq!(used, BinStrategy::FullRange);
}

#[test]
fn test_bin_strategy_parse_and_display() {
    assert_eq!("full-range".parse::<BinStrategy>(), Ok(BinStrategy::FullRange));
    assert_eq!("FULL_RANGE".parse::<BinStrategy>(), Ok(BinStrategy::FullRange));
    assert_eq!("unassigned".parse::<BinStrategy>(), Ok(BinStrategy::Unassigned));
    assert_eq!(BinStrategy::FullRange.to_string(), "full-range");
    assert_eq!(BinStrategy::Unassigned.to_string(), "unassigned");
    assert_eq!(BinStrategy::default(), BinStrategy::FullRange);

    let err = "sideways".parse::<BinStrategy>().unwrap_err();
    assert!(err.contains("invalid value 'sideways'"));
}

use proptest::prelude::*;

use super::compare::*;
use super::core::*;

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ========== Comparator protocol ==========

#[test]
fn test_exhausted_side_never_wins() {
    assert!(!le_natural::<i64>(None, Some(&1)));
    assert!(!le_natural::<i64>(None, None));
    assert!(le_natural(Some(&1i64), None));
}

#[test]
fn test_natural_order_is_less_or_equal() {
    assert!(le_natural(Some(&1i64), Some(&2)));
    assert!(le_natural(Some(&2i64), Some(&2)));
    assert!(!le_natural(Some(&3i64), Some(&2)));
}

#[test]
fn test_by_count_orders_by_count_then_value() {
    let a = ("a".to_string(), 2usize);
    let b = ("b".to_string(), 2usize);
    let c = ("c".to_string(), 1usize);
    // Lower count first, even though "c" > "a"
    assert!(le_by_count(Some(&c), Some(&a)));
    assert!(!le_by_count(Some(&a), Some(&c)));
    // Equal counts fall back to ascending value
    assert!(le_by_count(Some(&a), Some(&b)));
    assert!(!le_by_count(Some(&b), Some(&a)));
}

#[test]
fn test_by_count_exhaustion_protocol() {
    let entry = ("x".to_string(), 1usize);
    assert!(!le_by_count::<String>(None, Some(&entry)));
    assert!(le_by_count(Some(&entry), None));
}

// ========== Merge sort ==========

#[test]
fn test_sort_numbers() {
    assert_eq!(merge_sort(vec![3i64, 1, 2], &le_natural), vec![1, 2, 3]);
}

#[test]
fn test_sort_negative_numbers() {
    assert_eq!(
        merge_sort(vec![10i64, -5, 0, -5], &le_natural),
        vec![-5, -5, 0, 10]
    );
}

#[test]
fn test_sort_words_ordinal() {
    let sorted = merge_sort(strings(&["the", "quick", "brown", "fox"]), &le_natural);
    assert_eq!(sorted, strings(&["brown", "fox", "quick", "the"]));
}

#[test]
fn test_ordinal_means_case_sensitive() {
    // Uppercase sorts before lowercase in codepoint order
    let sorted = merge_sort(strings(&["apple", "Banana"]), &le_natural);
    assert_eq!(sorted, strings(&["Banana", "apple"]));
}

#[test]
fn test_empty_sequence() {
    assert!(merge_sort(Vec::<i64>::new(), &le_natural).is_empty());
}

#[test]
fn test_single_element() {
    assert_eq!(merge_sort(vec![42i64], &le_natural), vec![42]);
}

#[test]
fn test_duplicates_are_all_kept() {
    assert_eq!(
        merge_sort(vec![2i64, 1, 2, 1, 2], &le_natural),
        vec![1, 1, 2, 2, 2]
    );
}

#[test]
fn test_stability_on_equal_keys() {
    // Tag each element with its input position, compare on the key only
    let items = vec![(2u8, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    let le_key = |a: Option<&(u8, char)>, b: Option<&(u8, char)>| match (a, b) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(x), Some(y)) => x.0 <= y.0,
    };
    assert_eq!(
        merge_sort(items, &le_key),
        vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
    );
}

// ========== Properties ==========

proptest! {
    #[test]
    fn matches_std_sort(input in proptest::collection::vec(any::<i64>(), 0..300)) {
        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(merge_sort(input, &le_natural), expected);
    }

    #[test]
    fn sorting_is_idempotent(input in proptest::collection::vec(any::<i64>(), 0..300)) {
        let once = merge_sort(input, &le_natural);
        let twice = merge_sort(once.clone(), &le_natural);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn equal_keys_keep_input_order(keys in proptest::collection::vec(0u8..4, 0..200)) {
        let items: Vec<(u8, usize)> =
            keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let le_key = |a: Option<&(u8, usize)>, b: Option<&(u8, usize)>| match (a, b) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(x), Some(y)) => x.0 <= y.0,
        };
        let mut expected = items.clone();
        expected.sort_by_key(|&(k, _)| k); // std sort is stable
        prop_assert_eq!(merge_sort(items, &le_key), expected);
    }
}

/// Stable top-down merge sort, parameterized by a less-or-equal
/// comparator over optional candidates (see `compare`).
///
/// Classic divide-and-conquer: split at the midpoint, sort each half,
/// then merge with a single forward scan keeping one cursor per half. At
/// every merge step the comparator sees the next candidate from each side
/// (`None` once a side is exhausted) and the left candidate is taken
/// whenever the comparator approves, so equal elements keep their input
/// order.
///
/// The output is a permutation of the input. Sequences shorter than two
/// elements come back unchanged, including the empty one. O(n log n)
/// comparisons, O(n) auxiliary space per merge, O(log n) recursion depth.
pub fn merge_sort<T, F>(items: Vec<T>, less_eq: &F) -> Vec<T>
where
    F: Fn(Option<&T>, Option<&T>) -> bool,
{
    if items.len() < 2 {
        return items;
    }

    let mut left_half = items;
    let right_half = left_half.split_off(left_half.len() / 2);

    let sorted_left = merge_sort(left_half, less_eq);
    let sorted_right = merge_sort(right_half, less_eq);

    let total = sorted_left.len() + sorted_right.len();
    let mut merged = Vec::with_capacity(total);
    let mut left = sorted_left.into_iter().peekable();
    let mut right = sorted_right.into_iter().peekable();

    for _ in 0..total {
        // The comparator never approves an exhausted left side and never
        // rejects a present left against an exhausted right, so the
        // chosen cursor always yields.
        if less_eq(left.peek(), right.peek()) {
            merged.push(left.next().unwrap());
        } else {
            merged.push(right.next().unwrap());
        }
    }

    merged
}

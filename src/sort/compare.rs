/// Comparator functions for the merge sort.
/// All comparators are less-or-equal predicates over the *next candidate
/// from each merge half*, where an exhausted half supplies `None`.
///
/// Exhaustion protocol: an absent left candidate never wins (`false`), a
/// present left candidate always wins over an absent right one (`true`).
/// This lets the merge loop run to completion without a remainder-copy
/// phase.

/// Natural order: the element type's total order, `a <= b`.
///
/// Instantiated at `i64` (signed integer order) and `String`
/// (ordinal/codepoint order). Taking the left candidate on equality is
/// what keeps the merge stable.
#[inline]
pub fn le_natural<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(a), Some(b)) => a <= b,
    }
}

/// Frequency order for (value, count) entries: ascending count first,
/// ties broken by ascending value.
#[inline]
pub fn le_by_count<T: Ord>(a: Option<&(T, usize)>, b: Option<&(T, usize)>) -> bool {
    match (a, b) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some((va, ca)), Some((vb, cb))) => {
            if ca == cb {
                va <= vb
            } else {
                ca < cb
            }
        }
    }
}

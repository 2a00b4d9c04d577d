/// Collapse a sorted sequence into (distinct value, occurrence count)
/// entries, in the order the distinct values appear.
///
/// A single forward scan: a new entry opens whenever the element differs
/// from the one being accumulated. Equal elements must be adjacent for
/// the counts to be totals, so this is only meaningful on sorted input.
/// The sum of all counts equals the input length and no count is zero.
pub fn count_runs<T: PartialEq>(sorted: Vec<T>) -> Vec<(T, usize)> {
    let mut entries: Vec<(T, usize)> = Vec::new();
    for item in sorted {
        match entries.last_mut() {
            Some((value, count)) if *value == item => *count += 1,
            _ => entries.push((item, 1)),
        }
    }
    entries
}

/// Counts occurrences of each distinct value, ordered by descending
/// count. Grouping is by exact string equality; ties keep first-appearance
/// order so downstream output is deterministic.
pub fn count_values<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match counts.iter_mut().find(|(seen, _)| seen.as_str() == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// One category and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Count occurrences of each value, most frequent first.
///
/// Ties are ordered by value so the output is deterministic.
///
/// # Examples
///
/// ```
/// use inc_stats::value_counts;
///
/// let counts = value_counts(["b", "a", "b", "c", "a", "b"]);
/// assert_eq!(counts[0].value, "b");
/// assert_eq!(counts[0].count, 3);
/// assert_eq!(counts[1].value, "a");
/// ```
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut ordered: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    ordered
}

/// Mean of `value` per `key`, keys ascending. Non-finite values are skipped.
pub fn group_mean<K, I>(pairs: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in pairs {
        if !value.is_finite() {
            continue;
        }
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_are_ordered_by_value() {
        let counts = value_counts(["z", "y", "x"]);
        let names: Vec<&str> = counts.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn groups_by_key_in_order() {
        let means = group_mean([(2001, 10.0), (1999, 4.0), (2001, 20.0), (1999, f64::NAN)]);
        let flat: Vec<(i32, f64)> = means.into_iter().collect();
        assert_eq!(flat, vec![(1999, 4.0), (2001, 15.0)]);
    }
}

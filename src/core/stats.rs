use std::collections::HashMap;

/// Returns the first item with the largest key.
///
/// A later item replaces the current best only when its key is strictly
/// greater, so ties resolve to the earliest item.
pub fn first_max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut best: Option<(K, I::Item)> = None;

    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }

    best.map(|(_, item)| item)
}

/// Most frequent value and its count. Ties go to the value seen first.
pub fn most_common<'a, I>(values: I) -> Option<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    // 先記錄出現順序，再計數，平手時才不受 HashMap 迭代順序影響
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for value in values {
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    first_max_by_key(counts, |(_, count)| *count)
}

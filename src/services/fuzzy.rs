// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typo-tolerant substring matching.
//!
//! A name matches a query when some substring of the name is within a few
//! edits of the query. The score is that edit distance divided by the query
//! length, so 0.0 is an exact substring and 1.0 accepts anything.

/// Best edit distance between `pattern` and any substring of `text`.
///
/// Sellers' variant of Levenshtein: the first row is all zeros so a match may
/// start anywhere, and the answer is the minimum of the last row.
fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let mut prev = vec![0usize; text.len() + 1];
    let mut curr = vec![0usize; text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &t) in text.iter().enumerate() {
            let substitution = prev[j] + usize::from(p != t);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev.into_iter().min().unwrap_or(pattern.len())
}

fn fold(s: &str) -> Vec<char> {
    s.trim().chars().flat_map(char::to_lowercase).collect()
}

/// Match score in `[0, 1]`; lower is better. `None` for an empty query.
pub fn score(query: &str, name: &str) -> Option<f64> {
    let pattern = fold(query);
    if pattern.is_empty() {
        return None;
    }
    let text = fold(name);

    let distance = substring_distance(&pattern, &text);
    Some((distance as f64 / pattern.len() as f64).min(1.0))
}

/// Rank `items` by how well `key(item)` matches `query`, keeping those whose
/// score is at most `threshold`. Best match first; ties keep input order.
pub fn search<'a, T, F>(items: &'a [T], query: &str, threshold: f64, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut scored: Vec<(f64, &T)> = items
        .iter()
        .filter_map(|item| {
            score(query, key(item))
                .filter(|&s| s <= threshold)
                .map(|s| (s, item))
        })
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_substring_scores_zero() {
        assert_eq!(score("rice", "Steamed Rice / Sada Bhat"), Some(0.0));
        assert_eq!(score("DAL", "Red Lentil Soup / Moshur Dal"), Some(0.0));
    }

    #[test]
    fn test_typos_are_tolerated() {
        // One substitution in five characters
        let s = score("lentl", "Red Lentil Soup").unwrap();
        assert!(s > 0.0 && s <= 0.4, "score was {}", s);

        let s = score("banan", "Banana / Kala").unwrap();
        assert_eq!(s, 0.0);

        let s = score("bananna", "Banana / Kala").unwrap();
        assert!(s <= 0.2, "score was {}", s);
    }

    #[test]
    fn test_unrelated_names_score_high() {
        let s = score("chicken", "Banana / Kala").unwrap();
        assert!(s > 0.4, "score was {}", s);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(score("", "anything"), None);
        assert_eq!(score("   ", "anything"), None);
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(score("ভাত", "Steamed Rice / Sada Bhat / সাদা ভাত"), Some(0.0));
    }

    #[test]
    fn test_search_orders_by_score() {
        let names = vec!["Fish Curry", "Rice Pudding", "Steamed Rice", "Chicken"];

        let hits = search(&names, "rice", 0.4, |s| s);
        assert_eq!(hits, vec![&"Rice Pudding", &"Steamed Rice"]);

        let hits = search(&names, "rce", 0.4, |s| s);
        assert!(hits.contains(&&"Steamed Rice"));
        assert!(!hits.contains(&&"Chicken"));
    }

    #[test]
    fn test_threshold_bounds() {
        let names = vec!["Banana", "Mango"];
        assert!(search(&names, "xyz", 0.0, |s| s).is_empty());
        assert_eq!(search(&names, "xyz", 1.0, |s| s).len(), 2);
    }
}

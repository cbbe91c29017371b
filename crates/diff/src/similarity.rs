use crate::line_diff::normalize_whitespace;

/// Levenshtein distance between two strings, counted in characters.
///
/// Insertions, deletions and substitutions each cost 1. The common prefix
/// and suffix are stripped before the two-row table is filled; this does
/// not change the distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    // Keep the row as short as possible
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Similarity ratio in `[0.0, 1.0]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Similarity as a rounded percentage in `0..=100`
pub fn similarity(a: &str, b: &str) -> u8 {
    to_percentage(similarity_ratio(a, b))
}

/// Similarity percentage, optionally comparing whitespace-normalized text
pub fn similarity_with(a: &str, b: &str, ignore_whitespace: bool) -> u8 {
    if ignore_whitespace {
        similarity(&normalize_whitespace(a), &normalize_whitespace(b))
    } else {
        similarity(a, b)
    }
}

fn to_percentage(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

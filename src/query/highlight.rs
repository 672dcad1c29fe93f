//! Match highlighting for search results.

/// Character ranges of every case-insensitive occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` char indices with exclusive end, left to right,
/// non-overlapping. An empty query yields no ranges.
///
/// # Examples
///
/// ```
/// use food_deals::query::match_ranges;
///
/// assert_eq!(match_ranges("Sushi Master", "SU"), vec![(0, 2)]);
/// assert_eq!(match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= haystack.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().zip(&needle).all(|(h, n)| chars_match(*h, *n)) {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_ranges() {
        assert!(match_ranges("anything", "").is_empty());
    }

    #[test]
    fn no_match_has_no_ranges() {
        assert!(match_ranges("Burger Palace", "sushi").is_empty());
    }

    #[test]
    fn indices_are_chars_not_bytes() {
        assert_eq!(match_ranges("Crème brûlée", "brû"), vec![(6, 9)]);
    }
}

// src/utils/pagination.rs

use std::collections::HashMap;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Reads the requested page number from the query string.
/// Missing or unparseable values fall back to page 1 rather than erroring.
pub fn page_from_query(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1)
}

/// Returns the page-sized slice of `items` at offset `(page - 1) * 10`,
/// in the natural order of the input. Page 0 clamps to the first page's
/// offset; an out-of-range page yields an empty slice, which callers treat
/// as a not-found condition.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    // The page number is client-controlled and unbounded; the offset must
    // saturate rather than overflow.
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(page_from_query(&query(&[])), 1);
        assert_eq!(page_from_query(&query(&[("page", "3")])), 3);
        assert_eq!(page_from_query(&query(&[("page", "abc")])), 1);
    }

    #[test]
    fn paginate_slices_ten_per_page() {
        let items: Vec<i64> = (1..=25).collect();

        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<i64>>());
        assert_eq!(paginate(&items, 2), (11..=20).collect::<Vec<i64>>());
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<i64>>());
        assert!(paginate(&items, 4).is_empty());
    }

    #[test]
    fn paginate_clamps_page_zero() {
        let items: Vec<i64> = (1..=5).collect();
        assert_eq!(paginate(&items, 0), items);
    }

    #[test]
    fn paginate_saturates_on_huge_page_numbers() {
        let items: Vec<i64> = (1..=5).collect();

        let page = page_from_query(&query(&[("page", "18446744073709551615")]));
        assert_eq!(page, usize::MAX);
        assert!(paginate(&items, page).is_empty());
        assert!(paginate(&items, usize::MAX / QUESTIONS_PER_PAGE + 2).is_empty());
    }

    #[test]
    fn paginate_empty_input() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }
}

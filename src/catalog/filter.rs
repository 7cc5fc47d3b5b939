//! Search and category filtering.
//!
//! Case-insensitive substring matching over title, description, content and
//! tags, combined with an exact category match. Pure and order-preserving.

use crate::domain::{CategoryFilter, Prompt};

/// Returns the records admitted by both the search text and the category.
///
/// Output keeps the relative order of `records`. Leading and trailing spaces
/// in `search` are significant.
///
/// # Examples
///
/// ```
/// use promptfolio::catalog::filter;
/// use promptfolio::domain::{CategoryFilter, Prompt};
///
/// let records = vec![
///     Prompt::new("a", "Write API docs", "Backend", "..."),
///     Prompt::new("b", "Landing page", "Frontend", "..."),
/// ];
/// let hits = filter(&records, "api", &CategoryFilter::All);
/// assert_eq!(hits.len(), 1);
/// ```
#[must_use]
pub fn filter<'a>(records: &'a [Prompt], search: &str, category: &CategoryFilter) -> Vec<&'a Prompt> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| category.admits(&record.category) && record.contains_lowercase(&needle))
        .collect()
}

/// Character ranges `(start, end)` of every case-insensitive occurrence of
/// `search` in `text`, used to highlight card titles.
///
/// Ranges are in char indices and never overlap. Returns nothing when lowercasing
/// changes the character count of either side, since positions would not line up.
#[must_use]
pub fn match_ranges(text: &str, search: &str) -> Vec<(usize, usize)> {
    if search.is_empty() {
        return Vec::new();
    }

    let hay: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = search.to_lowercase().chars().collect();
    if hay.len() != text.chars().count() || needle.len() != search.chars().count() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= hay.len() {
        if hay[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> Vec<Prompt> {
        vec![
            Prompt::new("A", "Write API docs", "Backend", "Document the REST API")
                .with_tags(["api"]),
            Prompt::new("B", "Landing page", "Frontend", "Hero section copy"),
            Prompt::new("C", "Tweet thread", "Social", "Thread about launching")
                .with_description("Announce the api"),
        ]
    }

    fn ids(hits: &[&Prompt]) -> Vec<String> {
        hits.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn search_spans_fields_and_category_narrows() {
        let records = abc();
        assert_eq!(ids(&filter(&records, "API", &CategoryFilter::All)), ["A", "C"]);
        assert_eq!(
            ids(&filter(&records, "api", &CategoryFilter::from_label("Social"))),
            ["C"]
        );
        assert!(filter(&records, "api", &CategoryFilter::from_label("Frontend")).is_empty());
    }

    #[test]
    fn empty_search_with_all_returns_everything() {
        let records = abc();
        assert_eq!(ids(&filter(&records, "", &CategoryFilter::All)), ["A", "B", "C"]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let records = abc();
        assert!(filter(&records, "", &CategoryFilter::from_label("Nope")).is_empty());
    }

    #[test]
    fn surrounding_spaces_are_significant() {
        let records = abc();
        assert!(filter(&records, " landing ", &CategoryFilter::All).is_empty());
        assert_eq!(ids(&filter(&records, "landing ", &CategoryFilter::All)), ["B"]);
    }

    #[test]
    fn match_ranges_finds_non_overlapping_hits() {
        assert_eq!(match_ranges("Write API docs", "api"), vec![(6, 9)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Hello", "").is_empty());
        assert!(match_ranges("Hello", "xyz").is_empty());
    }

    #[test]
    fn match_ranges_counts_chars_not_bytes() {
        assert_eq!(match_ranges("Café menu", "menu"), vec![(5, 9)]);
    }

    fn arb_prompt() -> impl Strategy<Value = Prompt> {
        (
            "[a-z]{1,6}",
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,12}",
            prop::sample::select(vec!["Frontend", "Backend", "Social"]),
            "[a-zA-Z ]{0,12}",
            prop::collection::vec("[a-zA-Z]{1,6}", 0..3),
        )
            .prop_map(|(id, title, description, category, content, tags)| {
                Prompt::new(id, title, category, content)
                    .with_description(description)
                    .with_tags(tags)
            })
    }

    proptest! {
        #[test]
        fn filtered_is_ordered_subsequence_satisfying_predicate(
            records in prop::collection::vec(arb_prompt(), 0..20),
            search in "[a-zA-Z ]{0,3}",
            category in prop::sample::select(vec!["All", "Frontend", "Backend", "Social", "Other"]),
        ) {
            let hits = filter(&records, &search, &CategoryFilter::from_label(category));

            let needle = search.to_lowercase();
            let expected: Vec<&Prompt> = records
                .iter()
                .filter(|r| category == "All" || r.category == category)
                .filter(|r| {
                    r.title.to_lowercase().contains(&needle)
                        || r.description.to_lowercase().contains(&needle)
                        || r.content.to_lowercase().contains(&needle)
                        || r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                })
                .collect();
            prop_assert_eq!(hits, expected);
        }

        #[test]
        fn search_is_case_insensitive(
            records in prop::collection::vec(arb_prompt(), 0..20),
            search in "[a-z]{0,3}",
        ) {
            let lower = filter(&records, &search, &CategoryFilter::All);
            let upper = filter(&records, &search.to_uppercase(), &CategoryFilter::All);
            prop_assert_eq!(lower, upper);
        }
    }
}

use super::domain::{ScheduleItem, SeminarItem, TeacherItem, ALL_FILTER};

/// Catalog entry that can sit behind a category filter and a keyword search box.
pub trait Filterable {
    fn category(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn keywords(&self) -> &[&'static str] {
        &[]
    }
}

impl Filterable for ScheduleItem {
    fn category(&self) -> &'static str {
        self.category
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

impl Filterable for SeminarItem {
    fn category(&self) -> &'static str {
        self.category
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

impl Filterable for TeacherItem {
    fn category(&self) -> &'static str {
        self.category
    }

    fn title(&self) -> &'static str {
        self.name
    }
}

/// Category selector plus a case-insensitive keyword query.
///
/// The query is lowercased once on construction and otherwise kept verbatim.
/// Only the empty query places no restriction on the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    category: String,
    query: String,
}

impl ItemFilter {
    pub fn new(category: impl Into<String>, query: &str) -> Self {
        Self {
            category: category.into(),
            query: query.to_lowercase(),
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self::new(category, "")
    }

    pub fn active_category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if self.category != ALL_FILTER && item.category() != self.category {
            return false;
        }

        if self.query.is_empty() {
            return true;
        }

        item.title().to_lowercase().contains(&self.query)
            || item
                .keywords()
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&self.query))
    }

    /// Lazily yields matching items in declaration order.
    pub fn apply<'a, T: Filterable>(
        &self,
        items: &'a [T],
    ) -> impl Iterator<Item = &'a T> + Clone + 'a {
        let filter = self.clone();
        items.iter().filter(move |item| filter.matches(*item))
    }
}

/// Items in `category` (or every item for `"all"`) whose title or keywords
/// contain `query`.
pub fn filter_items<'a, T: Filterable>(
    items: &'a [T],
    category: &str,
    query: &str,
) -> impl Iterator<Item = &'a T> + Clone + 'a {
    ItemFilter::new(category, query).apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ScheduleItem> {
        vec![
            ScheduleItem {
                category: "bridge",
                title: "Bridge Intensive",
                image: "bridge.png",
                grade: &["g1"],
                keywords: &["summer", "short"],
            },
            ScheduleItem {
                category: "sparta",
                title: "Sparta Math",
                image: "sparta.png",
                grade: &["g1"],
                keywords: &["math"],
            },
            ScheduleItem {
                category: "bridge",
                title: "Bridge Review",
                image: "review.png",
                grade: &["g1"],
                keywords: &["Math", "review"],
            },
        ]
    }

    fn titles<'a>(items: impl Iterator<Item = &'a ScheduleItem>) -> Vec<&'static str> {
        items.map(|item| item.title).collect()
    }

    #[test]
    fn all_with_blank_query_keeps_everything_in_order() {
        let items = sample();
        assert_eq!(
            titles(filter_items(&items, "all", "")),
            vec!["Bridge Intensive", "Sparta Math", "Bridge Review"]
        );
    }

    #[test]
    fn category_restricts_to_exact_matches() {
        let items = sample();
        assert_eq!(
            titles(filter_items(&items, "bridge", "")),
            vec!["Bridge Intensive", "Bridge Review"]
        );
    }

    #[test]
    fn query_matches_title_or_keyword_ignoring_case() {
        let items = sample();
        assert_eq!(
            titles(filter_items(&items, "all", "MATH")),
            vec!["Sparta Math", "Bridge Review"]
        );
        assert_eq!(
            titles(filter_items(&items, "bridge", "math")),
            vec!["Bridge Review"]
        );
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_query() {
        let items = sample();
        assert_eq!(filter_items(&items, "all", "math ").count(), 0);
        assert_eq!(filter_items(&items, "all", " ").count(), 0);
        assert_eq!(
            titles(filter_items(&items, "all", "bridge ")),
            vec!["Bridge Intensive", "Bridge Review"]
        );
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let items = sample();
        assert_eq!(filter_items(&items, "essay", "").count(), 0);
    }

    #[test]
    fn iterator_can_be_restarted() {
        let items = sample();
        let matches = filter_items(&items, "bridge", "");
        assert_eq!(matches.clone().count(), 2);
        assert_eq!(titles(matches), vec!["Bridge Intensive", "Bridge Review"]);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let items = sample();
        let once: Vec<ScheduleItem> = filter_items(&items, "bridge", "review").cloned().collect();
        let twice: Vec<ScheduleItem> = filter_items(&once, "bridge", "review").cloned().collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }
}

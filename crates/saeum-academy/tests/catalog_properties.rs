//! Structural guarantees of the shipped catalog, checked through the public API.

use std::collections::HashSet;

use saeum_academy::catalog::{filter_items, Catalog, Filterable, GradeGroup, ItemFilter, ALL_FILTER};

fn every_filter_of<T: Filterable + 'static>(group: &GradeGroup<T>) -> Vec<ItemFilter> {
    let mut filters = Vec::new();
    for category in group.categories {
        for query in ["", "고", "수학", "없는검색어"] {
            filters.push(ItemFilter::new(category.filter, query));
        }
    }
    filters
}

#[test]
fn every_board_has_unique_post_indexes() {
    let catalog = Catalog::builtin();
    let keys: Vec<_> = catalog.boards().iter().map(|board| board.key).collect();
    assert_eq!(keys, vec!["notice", "recruit"]);

    for key in keys {
        let board = catalog.board(key).expect("board resolves");
        let indexes: HashSet<_> = board.posts.iter().map(|post| post.idx).collect();
        assert_eq!(indexes.len(), board.posts.len());
        for post in board.posts {
            assert_eq!(catalog.post(key, post.idx).expect("post resolves"), post);
        }
    }
}

#[test]
fn every_item_category_is_declared() {
    let catalog = Catalog::builtin();
    for grade in catalog.schedule_grades() {
        let group = catalog.grade_schedule(grade).expect("schedule resolves");
        assert!(group.items.iter().all(|item| group.declares(item.category)));
    }
    for grade in catalog.seminar_grades() {
        let group = catalog.grade_seminar(grade).expect("seminar resolves");
        assert!(group.items.iter().all(|item| group.declares(item.category)));
    }
    let teacher_filters = catalog.teacher_categories();
    assert!(catalog
        .all_teachers()
        .iter()
        .all(|teacher| teacher_filters.iter().any(|f| f.filter == teacher.category)));
}

#[test]
fn all_filter_is_identity_for_every_grade() {
    let catalog = Catalog::builtin();
    for grade in catalog.seminar_grades() {
        let group = catalog.grade_seminar(grade).expect("seminar resolves");
        let titles: Vec<_> = filter_items(group.items, ALL_FILTER, "")
            .map(|item| item.title)
            .collect();
        let expected: Vec<_> = group.items.iter().map(|item| item.title).collect();
        assert_eq!(titles, expected);
    }
}

#[test]
fn filtering_is_idempotent_for_every_declared_filter() {
    let catalog = Catalog::builtin();
    for grade in catalog.schedule_grades() {
        let group = catalog.grade_schedule(grade).expect("schedule resolves");
        for filter in every_filter_of(group) {
            let once: Vec<_> = filter.apply(group.items).cloned().collect();
            let twice: Vec<_> = filter.apply(&once).cloned().collect();
            assert_eq!(once, twice, "grade {grade} filter {filter:?}");
        }
    }
}

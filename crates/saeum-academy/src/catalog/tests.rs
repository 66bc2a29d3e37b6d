use std::collections::HashSet;

use super::*;

fn catalog() -> &'static Catalog {
    Catalog::builtin()
}

#[test]
fn builtin_catalog_passes_integrity_checks() {
    catalog().validate().expect("shipped tables are consistent");
}

#[test]
fn boards_expose_titles_and_unique_post_indexes() {
    for board in catalog().boards() {
        let fetched = catalog().board(board.key).expect("listed board resolves");
        assert_eq!(
            (fetched.page_title, fetched.board_title),
            (board.page_title, board.board_title)
        );

        let unique: HashSet<u32> = fetched.posts.iter().map(|post| post.idx).collect();
        assert_eq!(unique.len(), fetched.posts.len(), "board {}", board.key);
    }

    let notice = catalog().board("notice").expect("notice board");
    assert_eq!(notice.page_title, "공지사항");
    assert_eq!(notice.board_title, "새움학원 공지사항");
}

#[test]
fn unknown_board_is_not_found() {
    let err = catalog().board("events").expect_err("no events board");
    assert_eq!(
        err,
        CatalogError::BoardNotFound {
            board: "events".to_string()
        }
    );
}

#[test]
fn post_lookup_by_index() {
    let post = catalog().post("recruit", 102).expect("recruit post 102");
    assert_eq!(post.title, "[직원채용] 상담 데스크 및 행정 직원 모집");
    assert_eq!(post.date, "2025-07-04");

    let err = catalog().post("notice", 101).expect_err("101 lives on recruit");
    assert!(matches!(err, CatalogError::PostNotFound { ref idx, .. } if idx == "101"));

    let err = catalog().post("events", 1).expect_err("board missing");
    assert!(matches!(err, CatalogError::BoardNotFound { .. }));
}

#[test]
fn post_lookup_by_path_segment() {
    let post = catalog().post_by_key("recruit", "102").expect("recruit post 102");
    assert_eq!(post.idx, 102);

    let err = catalog().post_by_key("notice", "abc").expect_err("not an index");
    assert_eq!(
        err,
        CatalogError::PostNotFound {
            board: "notice".to_string(),
            idx: "abc".to_string(),
        }
    );

    let err = catalog().post_by_key("events", "abc").expect_err("board missing");
    assert!(matches!(err, CatalogError::BoardNotFound { .. }));
}

#[test]
fn grade_items_use_declared_categories() {
    for grade in catalog().schedule_grades() {
        let group = catalog().grade_schedule(grade).expect("schedule grade");
        assert_eq!(group.categories[0].filter, ALL_FILTER);
        for item in group.items {
            assert!(group.declares(item.category), "{}", item.title);
        }
    }

    for grade in catalog().seminar_grades() {
        let group = catalog().grade_seminar(grade).expect("seminar grade");
        assert_eq!(group.categories[0].filter, ALL_FILTER);
        for item in group.items {
            assert!(group.declares(item.category), "{}", item.title);
        }
    }
}

#[test]
fn schedules_and_seminars_cover_the_same_grades() {
    let schedules: Vec<_> = catalog().schedule_grades().collect();
    let seminars: Vec<_> = catalog().seminar_grades().collect();
    assert_eq!(schedules, vec!["g1", "g2", "g3", "m3"]);
    assert_eq!(schedules, seminars);

    let err = catalog().grade_seminar("m1").expect_err("no m1 seminars");
    assert_eq!(
        err.to_string(),
        "no content published for grade 'm1'".to_string()
    );
}

#[test]
fn all_filter_returns_every_item_in_order() {
    for grade in catalog().schedule_grades() {
        let group = catalog().grade_schedule(grade).expect("schedule grade");
        let filtered: Vec<&ScheduleItem> = filter_items(group.items, ALL_FILTER, "").collect();
        let original: Vec<&ScheduleItem> = group.items.iter().collect();
        assert_eq!(filtered, original);
    }
}

#[test]
fn keyword_search_spans_titles_and_keywords() {
    let group = catalog().grade_schedule("g1").expect("g1 schedule");
    let titles: Vec<_> = filter_items(group.items, ALL_FILTER, "여름방학")
        .map(|item| item.title)
        .collect();
    assert_eq!(
        titles,
        vec!["(여름방학전) 고1 브릿지 단기특강", "여름방학 고1 수학"]
    );

    let titles: Vec<_> = filter_items(group.items, "sparta", "수학")
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, vec!["스파르타 수학"]);
}

#[test]
fn trailing_space_restricts_the_search() {
    let group = catalog().grade_schedule("g1").expect("g1 schedule");
    assert_eq!(filter_items(group.items, ALL_FILTER, "수학 ").count(), 0);
    assert_eq!(filter_items(group.items, ALL_FILTER, "   ").count(), 0);
    assert_eq!(filter_items(group.items, ALL_FILTER, "").count(), group.items.len());
}

#[test]
fn seminar_filter_is_idempotent() {
    let group = catalog().grade_seminar("g1").expect("g1 seminars");
    let once: Vec<SeminarItem> = filter_items(group.items, "summer", "고1")
        .cloned()
        .collect();
    let twice: Vec<SeminarItem> = filter_items(&once, "summer", "고1").cloned().collect();
    assert_eq!(once.len(), 2);
    assert_eq!(once, twice);
    assert_eq!(once[0].status.label(), "예정");
}

#[test]
fn teachers_filter_by_subject_code() {
    let korean: Vec<_> = catalog().teachers("kor").map(|teacher| teacher.id).collect();
    assert_eq!(korean, vec!["kang-jeong-hwa", "kim-min-jeong"]);
    assert_eq!(catalog().teachers(ALL_FILTER).count(), 4);
    assert_eq!(catalog().teachers("sci").count(), 0);
}

#[test]
fn teacher_categories_are_derived_from_subjects() {
    let filters: Vec<_> = catalog()
        .teacher_categories()
        .into_iter()
        .map(|category| (category.filter, category.name))
        .collect();
    assert_eq!(
        filters,
        vec![
            ("all", "전체"),
            ("kor", "국어"),
            ("eng", "영어"),
            ("math", "수학"),
        ]
    );
}

#[test]
fn teacher_and_location_lookups() {
    let teacher = catalog().teacher("yoo-joo-oh").expect("teacher exists");
    assert_eq!(teacher.subject, "수학");
    assert!(catalog().teacher("nobody").is_err());

    let branch = catalog().location("3gwan").expect("branch exists");
    assert_eq!(branch.address, "서울특별시 강남구 대치동 988-18");
    assert_eq!(catalog().locations().len(), 3);
    assert!(matches!(
        catalog().location("9gwan"),
        Err(CatalogError::LocationNotFound { .. })
    ));
}

static DUPLICATE_BOARDS: &[Board] = &[Board {
    key: "notice",
    page_title: "공지사항",
    board_title: "공지",
    posts: &[
        Post {
            idx: 1,
            title: "first",
            date: "2025-01-01",
            content_image: None,
        },
        Post {
            idx: 1,
            title: "second",
            date: "2025-01-02",
            content_image: None,
        },
    ],
}];

static STRAY_SCHEDULES: &[GradeSchedule] = &[GradeSchedule {
    key: "g1",
    page_title: "고1",
    categories: &[CategoryFilter::all()],
    items: &[ScheduleItem {
        category: "bridge",
        title: "stray",
        image: "stray.png",
        grade: &["g1"],
        keywords: &[],
    }],
}];

static HEADLESS_SEMINARS: &[GradeSeminar] = &[GradeSeminar {
    key: "g2",
    page_title: "고2",
    categories: &[CategoryFilter {
        filter: "midterm",
        name: "중간",
    }],
    items: &[],
}];

#[test]
fn validate_reports_duplicate_posts() {
    let catalog = Catalog::new(DUPLICATE_BOARDS, &[], &[], &[], &[]);
    assert_eq!(
        catalog.validate(),
        Err(CatalogIntegrityError::DuplicatePost {
            board: "notice",
            idx: 1
        })
    );
}

#[test]
fn validate_reports_undeclared_category() {
    let catalog = Catalog::new(&[], STRAY_SCHEDULES, &[], &[], &[]);
    let err = catalog.validate().expect_err("bridge is not declared");
    assert_eq!(
        err,
        CatalogIntegrityError::UndeclaredCategory {
            table: "schedule",
            group: "g1",
            title: "stray",
            category: "bridge",
        }
    );
}

#[test]
fn validate_requires_leading_all_filter() {
    let catalog = Catalog::new(&[], &[], HEADLESS_SEMINARS, &[], &[]);
    assert!(matches!(
        catalog.validate(),
        Err(CatalogIntegrityError::MissingAllFilter {
            table: "seminar",
            group: "g2"
        })
    ));
}

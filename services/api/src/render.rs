use crate::cli::GradeListingArgs;
use saeum_academy::catalog::{
    Board, Catalog, CatalogError, CategoryFilter, ItemFilter, Post, ALL_FILTER,
};

pub(crate) fn boards(catalog: &Catalog) {
    println!("Boards");
    for board in catalog.boards() {
        let summary = board.summary();
        println!(
            "- {} | {} ({} posts)",
            summary.key, summary.board_title, summary.post_count
        );
    }
}

pub(crate) fn board(board: &Board) {
    println!("{} / {}", board.page_title, board.board_title);
    if board.posts.is_empty() {
        println!("No posts");
        return;
    }
    for post in board.posts {
        println!("- [{}] {} ({})", post.idx, post.title, post.date);
    }
}

pub(crate) fn post(post: &Post) {
    println!("[{}] {}", post.idx, post.title);
    println!("Date: {}", post.date);
    if let Some(image) = post.content_image {
        println!("Image: {image}");
    }
}

fn filters(categories: &[CategoryFilter], active: &str) {
    let labels: Vec<String> = categories
        .iter()
        .map(|category| {
            if category.filter == active {
                format!("*{}*", category.name)
            } else {
                category.name.to_string()
            }
        })
        .collect();
    println!("Filters: {}", labels.join(" | "));
}

fn search_note(filter: &ItemFilter) {
    if !filter.query().is_empty() {
        println!("Search: \"{}\"", filter.query());
    }
}

pub(crate) fn schedule(catalog: &Catalog, args: &GradeListingArgs) -> Result<(), CatalogError> {
    let group = catalog.grade_schedule(&args.grade)?;
    let filter = ItemFilter::new(args.category.as_str(), &args.query);

    println!("{}", group.page_title);
    filters(group.categories, filter.active_category());
    search_note(&filter);

    let mut shown = 0;
    for item in filter.apply(group.items) {
        println!("- {} [{}]", item.title, item.category);
        shown += 1;
    }
    if shown == 0 {
        println!("No matching programs");
    }
    Ok(())
}

pub(crate) fn seminar(catalog: &Catalog, args: &GradeListingArgs) -> Result<(), CatalogError> {
    let group = catalog.grade_seminar(&args.grade)?;
    let filter = ItemFilter::new(args.category.as_str(), &args.query);

    println!("{}", group.page_title);
    filters(group.categories, filter.active_category());
    search_note(&filter);

    let mut shown = 0;
    for item in filter.apply(group.items) {
        let place = item
            .location
            .map(|location| format!(" @ {location}"))
            .unwrap_or_default();
        println!(
            "- {} | {} {}{} | {}",
            item.title,
            item.date,
            item.time,
            place,
            item.status.label()
        );
        shown += 1;
    }
    if shown == 0 {
        println!("No matching seminars");
    }
    Ok(())
}

pub(crate) fn teachers(catalog: &Catalog, category: &str) {
    let categories = catalog.teacher_categories();
    filters(&categories, category);

    let mut shown = 0;
    for teacher in catalog.teachers(category) {
        println!("- {} ({}) [{}]", teacher.name, teacher.subject, teacher.id);
        for line in teacher.career {
            println!("    {line}");
        }
        if !teacher.lectures.is_empty() {
            println!("    Lectures: {}", teacher.lectures.join(", "));
        }
        shown += 1;
    }
    if shown == 0 && category != ALL_FILTER {
        println!("No teachers for '{category}'");
    }
}

pub(crate) fn locations(catalog: &Catalog) {
    println!("Locations");
    for location in catalog.locations() {
        println!("- {} ({}): {}", location.name, location.key, location.address);
    }
}

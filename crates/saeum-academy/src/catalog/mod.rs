//! Read-only content catalog backing the informational pages.
//!
//! Every table is a `static` compiled into the binary, so lookups hand out
//! `&'static` references and never fail for any reason besides an unknown key.

mod data;
pub mod domain;
pub mod filter;
pub mod router;

use std::collections::HashSet;

pub use domain::{
    Board, BoardSummary, CategoryFilter, GradeGroup, GradeSchedule, GradeSeminar, Location, Post,
    ScheduleItem, SeminarItem, SeminarStatus, TeacherItem, ALL_FILTER,
};
pub use filter::{filter_items, Filterable, ItemFilter};
pub use router::catalog_router;

/// Unknown key or index. Callers present this as a not-found view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("board '{board}' does not exist")]
    BoardNotFound { board: String },
    #[error("board '{board}' has no post {idx}")]
    PostNotFound { board: String, idx: String },
    #[error("no content published for grade '{grade}'")]
    GradeNotFound { grade: String },
    #[error("teacher '{id}' does not exist")]
    TeacherNotFound { id: String },
    #[error("branch '{branch}' does not exist")]
    LocationNotFound { branch: String },
}

/// A table violates one of the catalog's structural rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIntegrityError {
    #[error("board '{board}' lists post {idx} more than once")]
    DuplicatePost { board: &'static str, idx: u32 },
    #[error("teacher id '{id}' is declared more than once")]
    DuplicateTeacher { id: &'static str },
    #[error("branch '{branch}' is declared more than once")]
    DuplicateLocation { branch: &'static str },
    #[error("{table} group '{group}' must offer the 'all' filter first")]
    MissingAllFilter {
        table: &'static str,
        group: &'static str,
    },
    #[error("{table} group '{group}' has item '{title}' in undeclared category '{category}'")]
    UndeclaredCategory {
        table: &'static str,
        group: &'static str,
        title: &'static str,
        category: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    boards: &'static [Board],
    schedules: &'static [GradeSchedule],
    seminars: &'static [GradeSeminar],
    teachers: &'static [TeacherItem],
    locations: &'static [Location],
}

static BUILTIN: Catalog = Catalog {
    boards: data::BOARDS,
    schedules: data::SCHEDULES,
    seminars: data::SEMINARS,
    teachers: data::TEACHERS,
    locations: data::LOCATIONS,
};

impl Catalog {
    /// The site content shipped with this build.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub const fn new(
        boards: &'static [Board],
        schedules: &'static [GradeSchedule],
        seminars: &'static [GradeSeminar],
        teachers: &'static [TeacherItem],
        locations: &'static [Location],
    ) -> Self {
        Self {
            boards,
            schedules,
            seminars,
            teachers,
            locations,
        }
    }

    pub fn boards(&self) -> &'static [Board] {
        self.boards
    }

    pub fn board(&self, board_key: &str) -> Result<&'static Board, CatalogError> {
        self.boards
            .iter()
            .find(|board| board.key == board_key)
            .ok_or_else(|| CatalogError::BoardNotFound {
                board: board_key.to_string(),
            })
    }

    pub fn post(&self, board_key: &str, idx: u32) -> Result<&'static Post, CatalogError> {
        self.board(board_key)?
            .posts
            .iter()
            .find(|post| post.idx == idx)
            .ok_or_else(|| CatalogError::PostNotFound {
                board: board_key.to_string(),
                idx: idx.to_string(),
            })
    }

    /// Resolves a post from an unparsed index, as taken from a URL segment.
    /// An index that is not a number is a miss on an existing board.
    pub fn post_by_key(&self, board_key: &str, idx: &str) -> Result<&'static Post, CatalogError> {
        match idx.parse::<u32>() {
            Ok(idx) => self.post(board_key, idx),
            Err(_) => {
                self.board(board_key)?;
                Err(CatalogError::PostNotFound {
                    board: board_key.to_string(),
                    idx: idx.to_string(),
                })
            }
        }
    }

    pub fn schedule_grades(&self) -> impl Iterator<Item = &'static str> {
        self.schedules.iter().map(|group| group.key)
    }

    pub fn grade_schedule(&self, grade_key: &str) -> Result<&'static GradeSchedule, CatalogError> {
        find_grade(self.schedules, grade_key)
    }

    pub fn seminar_grades(&self) -> impl Iterator<Item = &'static str> {
        self.seminars.iter().map(|group| group.key)
    }

    pub fn grade_seminar(&self, grade_key: &str) -> Result<&'static GradeSeminar, CatalogError> {
        find_grade(self.seminars, grade_key)
    }

    pub fn all_teachers(&self) -> &'static [TeacherItem] {
        self.teachers
    }

    /// Teachers in `category` (or everyone for `"all"`), in listing order.
    pub fn teachers(&self, category: &str) -> impl Iterator<Item = &'static TeacherItem> + Clone {
        ItemFilter::category(category).apply(self.teachers)
    }

    pub fn teacher(&self, id: &str) -> Result<&'static TeacherItem, CatalogError> {
        self.teachers
            .iter()
            .find(|teacher| teacher.id == id)
            .ok_or_else(|| CatalogError::TeacherNotFound { id: id.to_string() })
    }

    /// `"all"` followed by one filter per distinct subject, in first-seen order.
    pub fn teacher_categories(&self) -> Vec<CategoryFilter> {
        let mut categories = vec![CategoryFilter::all()];
        for teacher in self.teachers {
            if categories
                .iter()
                .all(|category| category.filter != teacher.category)
            {
                categories.push(CategoryFilter {
                    filter: teacher.category,
                    name: teacher.subject,
                });
            }
        }
        categories
    }

    pub fn locations(&self) -> &'static [Location] {
        self.locations
    }

    pub fn location(&self, branch: &str) -> Result<&'static Location, CatalogError> {
        self.locations
            .iter()
            .find(|location| location.key == branch)
            .ok_or_else(|| CatalogError::LocationNotFound {
                branch: branch.to_string(),
            })
    }

    /// Checks key uniqueness and that every item's category is declared.
    pub fn validate(&self) -> Result<(), CatalogIntegrityError> {
        for board in self.boards {
            let mut seen = HashSet::new();
            if let Some(post) = board.posts.iter().find(|post| !seen.insert(post.idx)) {
                return Err(CatalogIntegrityError::DuplicatePost {
                    board: board.key,
                    idx: post.idx,
                });
            }
        }

        let mut seen = HashSet::new();
        if let Some(teacher) = self.teachers.iter().find(|teacher| !seen.insert(teacher.id)) {
            return Err(CatalogIntegrityError::DuplicateTeacher { id: teacher.id });
        }

        let mut seen = HashSet::new();
        if let Some(location) = self
            .locations
            .iter()
            .find(|location| !seen.insert(location.key))
        {
            return Err(CatalogIntegrityError::DuplicateLocation {
                branch: location.key,
            });
        }

        validate_groups("schedule", self.schedules)?;
        validate_groups("seminar", self.seminars)
    }
}

fn find_grade<T: 'static>(
    groups: &'static [GradeGroup<T>],
    grade_key: &str,
) -> Result<&'static GradeGroup<T>, CatalogError> {
    groups
        .iter()
        .find(|group| group.key == grade_key)
        .ok_or_else(|| CatalogError::GradeNotFound {
            grade: grade_key.to_string(),
        })
}

fn validate_groups<T: Filterable + 'static>(
    table: &'static str,
    groups: &'static [GradeGroup<T>],
) -> Result<(), CatalogIntegrityError> {
    for group in groups {
        if group.categories.first().map(|category| category.filter) != Some(ALL_FILTER) {
            return Err(CatalogIntegrityError::MissingAllFilter {
                table,
                group: group.key,
            });
        }

        if let Some(item) = group
            .items
            .iter()
            .find(|item| !group.declares(item.category()))
        {
            return Err(CatalogIntegrityError::UndeclaredCategory {
                table,
                group: group.key,
                title: item.title(),
                category: item.category(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;

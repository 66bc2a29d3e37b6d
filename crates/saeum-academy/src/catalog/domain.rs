use serde::Serialize;

/// Filter key that matches every item regardless of category.
pub const ALL_FILTER: &str = "all";

/// A single entry on a notice or recruitment board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub idx: u32,
    pub title: &'static str,
    /// Display text, never parsed.
    pub date: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_image: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub key: &'static str,
    pub page_title: &'static str,
    pub board_title: &'static str,
    pub posts: &'static [Post],
}

impl Board {
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            key: self.key,
            page_title: self.page_title,
            board_title: self.board_title,
            post_count: self.posts.len(),
        }
    }
}

/// Board listing entry without the posts themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub key: &'static str,
    pub page_title: &'static str,
    pub board_title: &'static str,
    pub post_count: usize,
}

/// Selector shown above a list; `filter` is matched against item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryFilter {
    pub filter: &'static str,
    pub name: &'static str,
}

impl CategoryFilter {
    pub const fn all() -> Self {
        Self {
            filter: ALL_FILTER,
            name: "전체",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleItem {
    pub category: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub grade: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeminarStatus {
    Scheduled,
    Closed,
    Completed,
}

impl SeminarStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "예정",
            Self::Closed => "마감",
            Self::Completed => "종료",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeminarItem {
    pub category: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub date: &'static str,
    pub time: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    pub grade: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub status: SeminarStatus,
}

/// Items for one grade key together with the filters offered for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeGroup<T: 'static> {
    pub key: &'static str,
    pub page_title: &'static str,
    pub categories: &'static [CategoryFilter],
    pub items: &'static [T],
}

impl<T: 'static> GradeGroup<T> {
    pub fn declares(&self, filter: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.filter == filter)
    }
}

pub type GradeSchedule = GradeGroup<ScheduleItem>;
pub type GradeSeminar = GradeGroup<SeminarItem>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherItem {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub image: &'static str,
    /// Subject code such as `kor`, `eng` or `math`.
    pub category: &'static str,
    pub career: &'static [&'static str],
    pub lectures: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timetable_image: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub key: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub map_url: &'static str,
}

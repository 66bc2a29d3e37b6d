use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::domain::{
    BoardSummary, CategoryFilter, GradeGroup, Location, ScheduleItem, SeminarItem, TeacherItem,
    ALL_FILTER,
};
use super::filter::{Filterable, ItemFilter};
use super::{Catalog, CatalogError};
use crate::media::FALLBACK_IMAGE;

/// Read-only JSON routes over the content catalog.
pub fn catalog_router(catalog: &'static Catalog) -> Router {
    Router::new()
        .route("/api/v1/boards", get(boards_handler))
        .route("/api/v1/boards/:board", get(board_handler))
        .route("/api/v1/boards/:board/posts/:idx", get(post_handler))
        .route("/api/v1/schedules/:grade", get(schedule_handler))
        .route("/api/v1/seminars/:grade", get(seminar_handler))
        .route("/api/v1/teachers", get(teachers_handler))
        .route("/api/v1/teachers/:id", get(teacher_handler))
        .route("/api/v1/locations", get(locations_handler))
        .route("/api/v1/locations/:branch", get(location_handler))
        .with_state(catalog)
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        debug!(error = %self, "catalog lookup missed");
        let payload = json!({ "error": self.to_string() });
        (StatusCode::NOT_FOUND, Json(payload)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    q: String,
}

fn default_category() -> String {
    ALL_FILTER.to_string()
}

impl ListQuery {
    fn filter(&self) -> ItemFilter {
        ItemFilter::new(self.category.as_str(), &self.q)
    }
}

/// Filtered view of one grade's schedule or seminar listing.
#[derive(Debug, Serialize)]
pub struct GradeListingView<T: 'static> {
    pub grade: &'static str,
    pub page_title: &'static str,
    pub categories: &'static [CategoryFilter],
    pub active_category: String,
    pub query: String,
    pub items: Vec<&'static T>,
    pub image_fallback: &'static str,
}

impl<T: Filterable + 'static> GradeListingView<T> {
    pub fn new(group: &'static GradeGroup<T>, filter: &ItemFilter) -> Self {
        Self {
            grade: group.key,
            page_title: group.page_title,
            categories: group.categories,
            active_category: filter.active_category().to_string(),
            query: filter.query().to_string(),
            items: filter.apply(group.items).collect(),
            image_fallback: FALLBACK_IMAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeacherListingView {
    pub categories: Vec<CategoryFilter>,
    pub active_category: String,
    pub teachers: Vec<&'static TeacherItem>,
    pub image_fallback: &'static str,
}

async fn boards_handler(State(catalog): State<&'static Catalog>) -> Json<Vec<BoardSummary>> {
    Json(catalog.boards().iter().map(|board| board.summary()).collect())
}

async fn board_handler(
    State(catalog): State<&'static Catalog>,
    Path(board): Path<String>,
) -> Result<Response, CatalogError> {
    let board = catalog.board(&board)?;
    Ok(Json(board).into_response())
}

async fn post_handler(
    State(catalog): State<&'static Catalog>,
    Path((board, idx)): Path<(String, String)>,
) -> Result<Response, CatalogError> {
    let post = catalog.post_by_key(&board, &idx)?;
    Ok(Json(json!({
        "board": board,
        "post": post,
        "image_fallback": FALLBACK_IMAGE,
    }))
    .into_response())
}

async fn schedule_handler(
    State(catalog): State<&'static Catalog>,
    Path(grade): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<GradeListingView<ScheduleItem>>, CatalogError> {
    let group = catalog.grade_schedule(&grade)?;
    Ok(Json(GradeListingView::new(group, &query.filter())))
}

async fn seminar_handler(
    State(catalog): State<&'static Catalog>,
    Path(grade): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<GradeListingView<SeminarItem>>, CatalogError> {
    let group = catalog.grade_seminar(&grade)?;
    Ok(Json(GradeListingView::new(group, &query.filter())))
}

async fn teachers_handler(
    State(catalog): State<&'static Catalog>,
    Query(query): Query<ListQuery>,
) -> Json<TeacherListingView> {
    Json(TeacherListingView {
        categories: catalog.teacher_categories(),
        teachers: catalog.teachers(&query.category).collect(),
        active_category: query.category,
        image_fallback: FALLBACK_IMAGE,
    })
}

async fn teacher_handler(
    State(catalog): State<&'static Catalog>,
    Path(id): Path<String>,
) -> Result<Json<&'static TeacherItem>, CatalogError> {
    catalog.teacher(&id).map(Json)
}

async fn locations_handler(State(catalog): State<&'static Catalog>) -> Json<&'static [Location]> {
    Json(catalog.locations())
}

async fn location_handler(
    State(catalog): State<&'static Catalog>,
    Path(branch): Path<String>,
) -> Result<Json<&'static Location>, CatalogError> {
    catalog.location(&branch).map(Json)
}

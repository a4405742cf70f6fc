use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{
    ChartDefinition, HeatmapDefinition, MetricDefinition, CHARTS, HEATMAPS, METRICS,
};
use super::heatmap::{geographic_bubbles, GeoBubble, DEFAULT_STATE_DATA};
use super::skills::{CategorySpokes, RankedSkill, SkillAssessment, SkillCategory, TOP_SKILL_COUNT};
use super::store::{PreferenceError, PreferenceKind, PreferenceStore, ProgramPreferences};

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub metrics: &'static [MetricDefinition],
    pub charts: &'static [ChartDefinition],
    pub heatmaps: &'static [HeatmapDefinition],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub program_id: String,
    pub kind: PreferenceKind,
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub candidate_id: String,
    pub categories: &'static [SkillCategory],
    pub top_skills: Vec<RankedSkill>,
    pub spokes: Vec<CategorySpokes>,
}

impl From<SkillAssessment> for AssessmentView {
    fn from(assessment: SkillAssessment) -> Self {
        Self {
            top_skills: assessment.top_skills(TOP_SKILL_COUNT),
            spokes: assessment.spokes(),
            categories: assessment.categories,
            candidate_id: assessment.candidate_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionUpdate {
    pub selected: Vec<String>,
}

/// Router builder exposing the panel catalogs and per-program selections.
pub fn analytics_router<S>(preferences: Arc<ProgramPreferences<S>>) -> Router
where
    S: PreferenceStore + 'static,
{
    Router::new()
        .route("/api/v1/analytics/catalog", get(catalog_handler))
        .route("/api/v1/analytics/geographic", get(geographic_handler))
        .route(
            "/api/v1/analytics/assessments/:candidate_id",
            get(assessment_handler),
        )
        .route("/api/v1/programs/:program_id", get(program_handler::<S>))
        .route(
            "/api/v1/programs/:program_id/:kind",
            get(selection_handler::<S>).put(update_handler::<S>),
        )
        .with_state(preferences)
}

pub(crate) async fn catalog_handler() -> Response {
    let catalog = CatalogView {
        metrics: METRICS,
        charts: CHARTS,
        heatmaps: HEATMAPS,
    };
    (StatusCode::OK, axum::Json(catalog)).into_response()
}

pub(crate) async fn geographic_handler() -> Response {
    let bubbles: Vec<GeoBubble> = geographic_bubbles(&DEFAULT_STATE_DATA);
    (StatusCode::OK, axum::Json(bubbles)).into_response()
}

pub(crate) async fn assessment_handler(Path(candidate_id): Path<String>) -> Response {
    let view = AssessmentView::from(SkillAssessment::sample(candidate_id));
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn program_handler<S>(
    State(preferences): State<Arc<ProgramPreferences<S>>>,
    Path(program_id): Path<String>,
) -> Response
where
    S: PreferenceStore + 'static,
{
    let selections = preferences.load_all(&program_id);
    (StatusCode::OK, axum::Json(selections)).into_response()
}

pub(crate) async fn selection_handler<S>(
    State(preferences): State<Arc<ProgramPreferences<S>>>,
    Path((program_id, raw_kind)): Path<(String, String)>,
) -> Response
where
    S: PreferenceStore + 'static,
{
    let Some(kind) = PreferenceKind::parse(&raw_kind) else {
        return unknown_kind(&raw_kind);
    };
    let selected = preferences.load(kind, &program_id);
    let view = SelectionView {
        program_id,
        kind,
        selected,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn update_handler<S>(
    State(preferences): State<Arc<ProgramPreferences<S>>>,
    Path((program_id, raw_kind)): Path<(String, String)>,
    axum::Json(update): axum::Json<SelectionUpdate>,
) -> Response
where
    S: PreferenceStore + 'static,
{
    let Some(kind) = PreferenceKind::parse(&raw_kind) else {
        return unknown_kind(&raw_kind);
    };

    match preferences.save(kind, &program_id, &update.selected) {
        Ok(()) => {
            let view = SelectionView {
                program_id,
                kind,
                selected: update.selected,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error @ PreferenceError::UnknownKey { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn unknown_kind(raw: &str) -> Response {
    let payload = json!({
        "error": format!("unknown preference kind '{raw}'"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

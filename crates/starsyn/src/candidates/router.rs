use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::actions::CandidateActions;
use super::domain::{CandidateId, CandidateStatus, ContactMethod};
use super::export::csv_string;
use super::filter::ActiveFilters;
use super::selection::SelectionState;
use super::service::{CandidateDashboardService, DashboardServiceError};
use super::sort::SortState;
use super::source::CandidateSource;
use super::view::ViewParams;

/// Body shared by the view and export endpoints. The client owns the view state
/// and resends it with every request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: ActiveFilters,
    #[serde(default)]
    pub sort: SortState,
    #[serde(default)]
    pub selection: SelectionState,
}

impl ViewRequest {
    fn into_parts(self) -> (ViewParams, SelectionState) {
        let params = ViewParams {
            search: self.search,
            filters: self.filters,
            sort: self.sort,
        };
        (params, self.selection)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub method: ContactMethod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRequest {
    pub status: CandidateStatus,
}

/// Router builder exposing the candidate dashboard endpoints.
pub fn candidate_router<S, A>(service: Arc<CandidateDashboardService<S, A>>) -> Router
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    Router::new()
        .route("/api/v1/candidates/view", post(view_handler::<S, A>))
        .route("/api/v1/candidates/export", post(export_handler::<S, A>))
        .route(
            "/api/v1/candidates/:candidate_id/favorite",
            post(favorite_handler::<S, A>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/contact",
            post(contact_handler::<S, A>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/reveal",
            post(reveal_handler::<S, A>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/status",
            post(status_handler::<S, A>),
        )
        .with_state(service)
}

pub(crate) async fn view_handler<S, A>(
    State(service): State<Arc<CandidateDashboardService<S, A>>>,
    axum::Json(request): axum::Json<ViewRequest>,
) -> Response
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    let (params, selection) = request.into_parts();
    match service.view(&params, &selection) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<S, A>(
    State(service): State<Arc<CandidateDashboardService<S, A>>>,
    axum::Json(request): axum::Json<ViewRequest>,
) -> Response
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    let (params, selection) = request.into_parts();
    let rendered = service
        .export_cards(&params, &selection)
        .and_then(|cards| csv_string(&cards).map_err(DashboardServiceError::from));

    match rendered {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn favorite_handler<S, A>(
    State(service): State<Arc<CandidateDashboardService<S, A>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    acknowledged(service.toggle_favorite(&CandidateId(candidate_id)))
}

pub(crate) async fn contact_handler<S, A>(
    State(service): State<Arc<CandidateDashboardService<S, A>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<ContactRequest>,
) -> Response
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    acknowledged(service.contact(&CandidateId(candidate_id), request.method))
}

pub(crate) async fn reveal_handler<S, A>(
    State(service): State<Arc<CandidateDashboardService<S, A>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    acknowledged(service.request_reveal(&CandidateId(candidate_id)))
}

pub(crate) async fn status_handler<S, A>(
    State(service): State<Arc<CandidateDashboardService<S, A>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<StatusRequest>,
) -> Response
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    acknowledged(service.change_status(&CandidateId(candidate_id), request.status))
}

fn acknowledged<T: serde::Serialize>(result: Result<T, DashboardServiceError>) -> Response {
    match result {
        Ok(acknowledgement) => (StatusCode::ACCEPTED, axum::Json(acknowledgement)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DashboardServiceError) -> Response {
    let status = match &error {
        DashboardServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        DashboardServiceError::ContactUnavailable { .. } | DashboardServiceError::InvalidStatus => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DashboardServiceError::Action(_) => StatusCode::BAD_GATEWAY,
        DashboardServiceError::Source(_) | DashboardServiceError::Export(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

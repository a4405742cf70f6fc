//! End-to-end scenarios for the dashboard HTTP surface.
//!
//! Candidates come from a JSON file on disk so the scenarios also cover the file
//! source; preferences use the in-memory store. Requests go through the merged
//! routers exactly as the service binary mounts them.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use starsyn::analytics::{analytics_router, InMemoryPreferenceStore, ProgramPreferences};
use starsyn::candidates::{
    candidate_router, ActionError, CandidateActions, CandidateDashboardService, CandidateId,
    CandidateStatus, ContactMethod, JsonFileCandidateSource,
};

#[derive(Default)]
struct CountingActions {
    calls: Mutex<Vec<String>>,
}

impl CountingActions {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn push(&self, call: String) -> Result<(), ActionError> {
        self.calls.lock().expect("calls mutex poisoned").push(call);
        Ok(())
    }
}

impl CandidateActions for CountingActions {
    fn request_favorite_toggle(&self, id: &CandidateId, favorite: bool) -> Result<(), ActionError> {
        self.push(format!("favorite:{id}:{favorite}"))
    }

    fn request_contact(&self, id: &CandidateId, method: ContactMethod) -> Result<(), ActionError> {
        self.push(format!("contact:{id}:{}", method.label()))
    }

    fn request_reveal(&self, id: &CandidateId) -> Result<(), ActionError> {
        self.push(format!("reveal:{id}"))
    }

    fn request_status_change(
        &self,
        id: &CandidateId,
        status: &CandidateStatus,
    ) -> Result<(), ActionError> {
        self.push(format!("status:{id}:{}", status.as_str()))
    }
}

fn candidates_json() -> Value {
    json!({
        "candidates": [
            {
                "id": "c-1",
                "blindId": "CAND-0001",
                "matchScore": 91,
                "program": "Data Science",
                "intent": "very-high",
                "status": "interviewed",
                "activity": "Viewed program page",
                "activityDate": "2025-06-12T15:30:00Z",
                "isRevealed": true,
                "name": "Maya Chen",
                "email": "maya@example.com",
                "phone": "+1 555 0101",
                "skills": ["Python", "SQL"],
                "favorite": true
            },
            {
                "id": "c-2",
                "blindId": "CAND-0002",
                "matchScore": 84,
                "program": "Cybersecurity",
                "intent": "high",
                "activity": "Started application",
                "activityDate": "2025-06-14T09:00:00Z",
                "name": "Hidden Name",
                "email": "hidden@example.com",
                "skills": ["Linux"]
            },
            {
                "id": "c-3",
                "blindId": "CAND-0003",
                "matchScore": 67,
                "program": "Data Science",
                "intent": "low",
                "status": "new"
            }
        ]
    })
}

struct Harness {
    router: Router,
    actions: Arc<CountingActions>,
    _dir: tempfile::TempDir,
    path: std::path::PathBuf,
}

fn harness() -> Harness {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("candidates.json");
    std::fs::write(&path, candidates_json().to_string()).expect("candidates written");

    let actions = Arc::new(CountingActions::default());
    let service = Arc::new(CandidateDashboardService::new(
        Arc::new(JsonFileCandidateSource::new(&path)),
        actions.clone(),
    ));
    let preferences = Arc::new(ProgramPreferences::new(Arc::new(
        InMemoryPreferenceStore::new(),
    )));
    let router = candidate_router(service).merge(analytics_router(preferences));

    Harness {
        router,
        actions,
        _dir: dir,
        path,
    }
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes")
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json payload")
}

#[tokio::test]
async fn view_applies_request_state_and_gates_identity() {
    let harness = harness();

    let response = send(
        &harness.router,
        post(
            "/api/v1/candidates/view",
            json!({
                "filters": { "program": ["Data Science", "Cybersecurity"] },
                "sort": { "key": "activity", "direction": "desc" },
                "selection": ["c-2", "gone"]
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;

    let order: Vec<&str> = payload["cards"]
        .as_array()
        .expect("cards array")
        .iter()
        .filter_map(|card| card["id"].as_str())
        .collect();
    assert_eq!(order, vec!["c-2", "c-1", "c-3"]);

    let blind = &payload["cards"][0];
    assert_eq!(blind["display_name"], "CAND-0002");
    assert!(blind.get("name").is_none());
    assert!(blind.get("email").is_none());
    assert_eq!(blind["selected"], true);
    assert_eq!(blind["contact_methods"], json!(["message"]));

    assert_eq!(payload["total_count"], 3);
    assert_eq!(payload["visible_count"], 3);
    assert_eq!(payload["filtered"], false);
    assert_eq!(payload["selection"]["selected_count"], 2);
    assert_eq!(payload["selection"]["visible_selected"], 1);
    assert_eq!(payload["selection"]["indeterminate"], true);
    assert_eq!(payload["filter_options"]["status"], json!(["interviewed", "new"]));
}

#[tokio::test]
async fn export_returns_selected_visible_rows_as_csv() {
    let harness = harness();

    let response = send(
        &harness.router,
        post(
            "/api/v1/candidates/export",
            json!({ "selection": ["c-1", "c-3"], "search": "python" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/csv; charset=utf-8")
    );

    let csv = String::from_utf8(body_bytes(response).await).expect("utf-8 csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("id,display_name,match_score"));
    assert!(lines[1].starts_with("c-1,Maya Chen,91,Data Science,very-high,interviewed"));
}

#[tokio::test]
async fn actions_reach_the_callback_once_and_acknowledge() {
    let harness = harness();

    let response = send(
        &harness.router,
        post("/api/v1/candidates/c-1/favorite", json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let ack = json_body(response).await;
    assert_eq!(ack["title"], "Removed from favorites");
    assert_eq!(ack["tone"], "success");

    let response = send(
        &harness.router,
        post("/api/v1/candidates/c-2/reveal", json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = send(
        &harness.router,
        post(
            "/api/v1/candidates/c-3/status",
            json!({ "status": "contacted" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        json_body(response).await["description"],
        "Candidate status changed to contacted"
    );

    assert_eq!(
        harness.actions.calls(),
        vec![
            "favorite:c-1:false".to_string(),
            "reveal:c-2".to_string(),
            "status:c-3:contacted".to_string(),
        ]
    );
}

#[tokio::test]
async fn blind_contact_channels_and_unknown_ids_are_rejected() {
    let harness = harness();

    let response = send(
        &harness.router,
        post("/api/v1/candidates/c-2/contact", json!({ "method": "email" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(
        &harness.router,
        post("/api/v1/candidates/c-2/contact", json!({ "method": "message" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(json_body(response).await["title"], "Contacting CAND-0002");

    let response = send(
        &harness.router,
        post("/api/v1/candidates/missing/reveal", json!({})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(harness.actions.calls(), vec!["contact:c-2:message".to_string()]);
}

#[tokio::test]
async fn source_edits_show_up_on_the_next_request() {
    let harness = harness();

    let mut data = candidates_json();
    data["candidates"][1]["isRevealed"] = json!(true);
    std::fs::write(&harness.path, data.to_string()).expect("candidates rewritten");

    let response = send(&harness.router, post("/api/v1/candidates/view", json!({}))).await;
    let payload = json_body(response).await;
    let card = payload["cards"]
        .as_array()
        .expect("cards array")
        .iter()
        .find(|card| card["id"] == "c-2")
        .cloned()
        .expect("c-2 present");
    assert_eq!(card["display_name"], "Hidden Name");
    assert_eq!(card["email"], "hidden@example.com");
}

#[tokio::test]
async fn unreadable_source_surfaces_as_server_error() {
    let harness = harness();
    std::fs::write(&harness.path, "[{\"id\": \"broken\"").expect("truncated file");

    let response = send(&harness.router, post("/api/v1/candidates/view", json!({}))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(response).await["error"]
        .as_str()
        .is_some_and(|message| message.contains("invalid candidate data")));
}

#[tokio::test]
async fn program_preferences_share_the_router() {
    let harness = harness();

    let response = send(
        &harness.router,
        Request::put("/api/v1/programs/ds-300/metrics")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "selected": ["bounce_rate"] }).to_string()))
            .expect("request builds"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &harness.router,
        Request::get("/api/v1/programs/ds-300")
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    let payload = json_body(response).await;
    assert_eq!(payload["metrics"], json!(["bounce_rate"]));
    assert_eq!(payload["heatmaps"][0], "geographic_distribution");
}

use std::collections::BTreeMap;

use anyhow::anyhow;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::assembler::analyze;
use crate::analysis::export::{render, report_filename, ExportSection};
use crate::analysis::readiness::{jd_length, SkillConfidence};
use crate::errors::AppError;
use crate::models::analysis::Analysis;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Deserialize)]
pub struct ConfidenceRequest {
    pub skills: BTreeMap<String, SkillConfidence>,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub section: ExportSection,
}

fn validate_jd(jd_text: &str, min_len: usize) -> Result<(), AppError> {
    let trimmed = jd_text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Please paste the job description to analyze".to_string(),
        ));
    }
    if jd_length(trimmed) < min_len {
        return Err(AppError::Validation(
            "Job description seems too short. Please provide more details.".to_string(),
        ));
    }
    Ok(())
}

async fn find_analysis(state: &AppState, id: Uuid) -> Result<Analysis, AppError> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// POST /api/v1/analyses
/// Runs the engine, records the result in history and makes it current.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<Analysis>), AppError> {
    validate_jd(&req.jd_text, state.config.min_jd_length)?;

    let analysis = analyze(&req.company, &req.role, &req.jd_text);
    state.store.save(analysis.clone()).await?;
    state.store.set_current(analysis.clone()).await?;

    info!(
        id = %analysis.id,
        company = %analysis.company,
        score = analysis.readiness_score,
        "Created analysis"
    );
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Analysis>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// DELETE /api/v1/analyses
pub async fn handle_clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Analysis>, AppError> {
    Ok(Json(find_analysis(&state, id).await?))
}

/// DELETE /api/v1/analyses/:id
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("Analysis {id} not found")));
    }
    info!(%id, "Deleted analysis");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/analyses/:id/confidence
pub async fn handle_update_confidence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ConfidenceRequest>,
) -> Result<Json<Analysis>, AppError> {
    // detected skills are fixed at creation
    let snapshot = find_analysis(&state, id).await?;
    if let Some(unknown) = req.skills.keys().find(|s| !snapshot.is_detected_skill(s)) {
        return Err(AppError::Validation(format!(
            "'{unknown}' is not a detected skill for this analysis"
        )));
    }

    let analysis = state
        .store
        .apply_confidence(id, &req.skills)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;

    info!(%id, adjusted = analysis.effective_score(), "Updated skill confidence");
    Ok(Json(analysis))
}

/// GET /api/v1/analyses/:id/export?section=...
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let analysis = find_analysis(&state, id).await?;
    let body = render(&analysis, params.section);

    let filename = report_filename(&analysis, Utc::now().date_naive());
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| AppError::Internal(anyhow!("invalid export filename {filename}: {e}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// GET /api/v1/current
pub async fn handle_get_current(
    State(state): State<AppState>,
) -> Result<Json<Analysis>, AppError> {
    state
        .store
        .current()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No current analysis".to_string()))
}

/// PUT /api/v1/current/:id
pub async fn handle_set_current(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Analysis>, AppError> {
    let analysis = find_analysis(&state, id).await?;
    state.store.set_current(analysis.clone()).await?;
    Ok(Json(analysis))
}

/// DELETE /api/v1/current
pub async fn handle_clear_current(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear_current().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::Request,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::routes::build_router;
    use crate::store::InMemoryAnalysisStore;

    const JD: &str = "Looking for a backend engineer with Java, Python and SQL. \
        You will build REST services and deploy them with Docker.";

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            store: Arc::new(InMemoryAnalysisStore::default()),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn create(app: &Router, company: &str) -> Value {
        let (status, body) = send(
            app,
            "POST",
            "/api/v1/analyses",
            Some(json!({ "company": company, "role": "SDE", "jd_text": JD })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_jd() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/v1/analyses", Some(json!({ "jd_text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["error"]["message"], "Please paste the job description to analyze");
    }

    #[tokio::test]
    async fn test_analyze_rejects_short_jd() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/v1/analyses", Some(json!({ "jd_text": "React dev" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(err["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            err["error"]["message"],
            "Job description seems too short. Please provide more details."
        );
    }

    #[tokio::test]
    async fn test_analyze_saves_and_sets_current() {
        let app = app();
        let created = create(&app, "Acme").await;
        assert_eq!(created["company"], "Acme");

        let (status, body) = send(&app, "GET", "/api/v1/current", None).await;
        assert_eq!(status, StatusCode::OK);
        let current: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(current["id"], created["id"]);

        let (_, body) = send(&app, "GET", "/api/v1/analyses", None).await;
        let history: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_get_and_delete_by_id() {
        let app = app();
        let created = create(&app, "Acme").await;
        let uri = format!("/api/v1/analyses/{}", created["id"].as_str().unwrap());

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_confidence_update_adjusts_score_and_current() {
        let app = app();
        let created = create(&app, "Acme").await;
        let base = created["readiness_score"].as_u64().unwrap();
        let uri = format!(
            "/api/v1/analyses/{}/confidence",
            created["id"].as_str().unwrap()
        );

        let (status, body) = send(
            &app,
            "PATCH",
            &uri,
            Some(json!({ "skills": { "Java": "know" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let updated: Value = serde_json::from_slice(&body).unwrap();
        let skill_count = updated["skill_confidence_map"].as_object().unwrap().len() as u64;
        // one known (+2), the rest practice (-2 each)
        let expected = (base + 2).saturating_sub(2 * (skill_count - 1)).min(100);
        assert_eq!(updated["adjusted_readiness_score"].as_u64().unwrap(), expected);

        let (_, body) = send(&app, "GET", "/api/v1/current", None).await;
        let current: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(current["adjusted_readiness_score"], updated["adjusted_readiness_score"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_confidence_updates_keep_every_mark() {
        let app = app();
        let created = create(&app, "Acme").await;
        let id = created["id"].as_str().unwrap().to_string();
        let labels: Vec<String> = created["extracted_skills"]["skills"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|group| group["skills"].as_array().unwrap().clone())
            .map(|s| s.as_str().unwrap().to_string())
            .collect();

        let tasks: Vec<_> = labels
            .iter()
            .cloned()
            .map(|label| {
                let app = app.clone();
                let uri = format!("/api/v1/analyses/{id}/confidence");
                tokio::spawn(async move {
                    let (status, _) =
                        send(&app, "PATCH", &uri, Some(json!({ "skills": { label: "know" } }))).await;
                    status
                })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), StatusCode::OK);
        }

        let (_, body) = send(&app, "GET", &format!("/api/v1/analyses/{id}"), None).await;
        let stored: Value = serde_json::from_slice(&body).unwrap();
        let map = stored["skill_confidence_map"].as_object().unwrap();
        assert_eq!(map.len(), labels.len());
        assert!(map.values().all(|v| v == "know"));
    }

    #[tokio::test]
    async fn test_analyze_counts_jd_length_in_utf16_units() {
        let app = app();
        // 25 chars, 50 UTF-16 units
        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/analyses",
            Some(json!({ "jd_text": "🚀".repeat(25) })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_confidence_update_rejects_unknown_skill() {
        let app = app();
        let created = create(&app, "Acme").await;
        let uri = format!(
            "/api/v1/analyses/{}/confidence",
            created["id"].as_str().unwrap()
        );
        let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "skills": { "Cobol": "know" } }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_returns_plaintext_attachment() {
        let app = app();
        let created = create(&app, "Acme Corp").await;
        let uri = format!(
            "/api/v1/analyses/{}/export?section=checklist",
            created["id"].as_str().unwrap()
        );
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("placement-prep-acme-corp-"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Round-wise Preparation Checklist"));
    }

    #[tokio::test]
    async fn test_current_can_be_repointed_and_cleared() {
        let app = app();
        let first = create(&app, "First").await;
        let _second = create(&app, "Second").await;

        let uri = format!("/api/v1/current/{}", first["id"].as_str().unwrap());
        let (status, _) = send(&app, "PUT", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, "GET", "/api/v1/current", None).await;
        let current: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(current["company"], "First");

        let (status, _) = send(&app, "DELETE", "/api/v1/current", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", "/api/v1/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_clear_history() {
        let app = app();
        create(&app, "Acme").await;
        let (status, _) = send(&app, "DELETE", "/api/v1/analyses", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, "GET", "/api/v1/analyses", None).await;
        let history: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert!(history.is_empty());
    }
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::service::{AdvisorError, CareerAdvisor};

/// Router builder exposing both suggestion endpoints.
pub fn advisor_router(advisor: Arc<CareerAdvisor>) -> Router {
    Router::new()
        .route("/api/mbti-suggest", post(mbti_suggest_handler))
        .route("/api/suggest-career", post(suggest_career_handler))
        .with_state(advisor)
}

pub(crate) async fn mbti_suggest_handler(
    State(advisor): State<Arc<CareerAdvisor>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(answers) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    match advisor.suggest_by_mbti(&answers) {
        Ok(result) => {
            info!(
                mbti_type = %result.mbti_type,
                suggestions = result.suggestions.len(),
                "mbti suggestions served"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn suggest_career_handler(
    State(advisor): State<Arc<CareerAdvisor>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(answers) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };

    match advisor.suggest_by_attributes(&answers) {
        Ok(suggestions) => {
            info!(suggestions = suggestions.len(), "career suggestions served");
            (StatusCode::OK, Json(suggestions)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn rejected_body(rejection: JsonRejection) -> Response {
    warn!(reason = %rejection.body_text(), "rejected malformed request body");
    let payload = json!({
        "error": "request body must be a JSON object",
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn error_response(err: AdvisorError) -> Response {
    match err {
        AdvisorError::InvalidInput(reason) => {
            warn!(%reason, "rejected questionnaire answers");
            let payload = json!({
                "error": reason.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        AdvisorError::Configuration(reason) => {
            error!(%reason, "criteria table could not score request");
            let payload = json!({
                "error": "career criteria are misconfigured",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

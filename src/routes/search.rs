use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{join_matches, Matcher, MatcherError};
use crate::models::{ErrorResponse, HealthResponse, VibeSearchRequest, VibeSearchResponse, INVALID_MESSAGE};
use crate::services::PropertyCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PropertyCatalog>,
    pub matcher: Matcher,
}

/// Configure vibe search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/chat", web::post().to(vibe_search))
        .route("/chat", web::get().to(health_check))
        .route("/health", web::get().to(health_check));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        message: "Vibe search API is running".to_string(),
        status: "OK".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Vibe search endpoint
///
/// POST /api/chat
///
/// Request body:
/// ```json
/// { "message": "beachfront party house" }
/// ```
async fn vibe_search(
    state: web::Data<AppState>,
    req: web::Json<VibeSearchRequest>,
) -> impl Responder {
    let query = match (req.validate(), req.text()) {
        (Ok(()), Some(text)) => text.to_string(),
        (result, _) => {
            tracing::info!("Validation failed for vibe search request: {:?}", result.err());
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: INVALID_MESSAGE.to_string(),
                status_code: 400,
            });
        }
    };

    tracing::info!("Received vibe search: {}", query);

    let matches = match state
        .matcher
        .find_matches(&query, state.catalog.properties())
        .await
    {
        Ok(matches) => matches,
        Err(e) => return search_failed(&e),
    };

    let results = join_matches(&state.catalog, &matches);

    tracing::info!(
        "Found {} matches ({} resolved to properties)",
        matches.len(),
        results.len()
    );

    HttpResponse::Ok().json(VibeSearchResponse::found(query, results, matches))
}

/// Generic 500 body; the error itself only goes to the log.
///
/// Only a prompt serialization failure reaches this from a request, which
/// the `Property` model cannot produce today.
fn search_failed(err: &MatcherError) -> HttpResponse {
    tracing::error!("Vibe search error: {}", err);
    HttpResponse::InternalServerError().json(VibeSearchResponse::failed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};
    use crate::models::SEARCH_FAILED_MESSAGE;

    #[actix_web::test]
    async fn test_matcher_error_hides_detail() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = search_failed(&MatcherError::Prompt(cause));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": SEARCH_FAILED_MESSAGE,
                "results": [],
                "matchData": []
            })
        );
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            message: "Vibe search API is running".to_string(),
            status: "OK".to_string(),
            timestamp: chrono::Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "OK");
        assert!(json["timestamp"].is_string());
    }
}

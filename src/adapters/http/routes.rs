//! Router for the reference server.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    generate_objective, get_profile, list_master_kras, list_profiles, save_profile, PrismHandlers,
};

/// Creates the API router. An empty origin list allows any origin.
pub fn prism_router(handlers: PrismHandlers, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/profiles", get(list_profiles).post(save_profile))
        .route("/api/profiles/:id", get(get_profile))
        .route("/api/kras_master", get(list_master_kras))
        .route("/api/generate-objective", post(generate_objective))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(handlers)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::InMemoryProfileApi;
    use crate::adapters::objective::TemplateSuggester;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        let handlers = PrismHandlers::new(
            Arc::new(InMemoryProfileApi::seeded()),
            Arc::new(TemplateSuggester::new()),
        );
        prism_router(handlers, &[])
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let response = router()
            .oneshot(Request::get("/api/profiles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_profile_is_404() {
        let response = router()
            .oneshot(Request::get("/api/profiles/77").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn save_accepts_json_profile() {
        let response = router()
            .oneshot(
                Request::post("/api/profiles")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":null,"roleData":{"profession":"Law"}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

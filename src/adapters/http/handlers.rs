//! HTTP handlers for the profile API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    ListMasterKrasHandler, ListMasterKrasQuery, ListProfilesHandler, ListProfilesQuery,
    LoadProfileHandler, LoadProfileQuery, SaveProfileCommand, SaveProfileHandler,
    SuggestObjectiveCommand, SuggestObjectiveHandler,
};
use crate::domain::foundation::ProfileId;
use crate::domain::profile::Profile;
use crate::ports::{ApiError, ObjectiveSuggester, ProfileApi, SaveReceipt, SuggestionError};

use super::dto::{ErrorResponse, GenerateObjectiveRequest, GenerateObjectiveResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PrismHandlers {
    list_profiles: Arc<ListProfilesHandler>,
    load_profile: Arc<LoadProfileHandler>,
    save_profile: Arc<SaveProfileHandler>,
    list_master_kras: Arc<ListMasterKrasHandler>,
    suggest_objective: Arc<SuggestObjectiveHandler>,
}

impl PrismHandlers {
    /// Wires every handler onto the given ports.
    pub fn new(api: Arc<dyn ProfileApi>, suggester: Arc<dyn ObjectiveSuggester>) -> Self {
        Self {
            list_profiles: Arc::new(ListProfilesHandler::new(api.clone())),
            load_profile: Arc::new(LoadProfileHandler::new(api.clone())),
            save_profile: Arc::new(SaveProfileHandler::new(api.clone())),
            list_master_kras: Arc::new(ListMasterKrasHandler::new(api)),
            suggest_objective: Arc::new(SuggestObjectiveHandler::new(suggester)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/profiles
pub async fn list_profiles(State(handlers): State<PrismHandlers>) -> Response {
    match handlers.list_profiles.handle(ListProfilesQuery).await {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(e) => handle_api_error(e),
    }
}

/// GET /api/profiles/:id
pub async fn get_profile(
    State(handlers): State<PrismHandlers>,
    Path(id): Path<i64>,
) -> Response {
    let query = LoadProfileQuery {
        id: ProfileId::new(id),
    };
    match handlers.load_profile.handle(query).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => handle_api_error(e),
    }
}

/// POST /api/profiles - insert when `id` is null, update otherwise
pub async fn save_profile(
    State(handlers): State<PrismHandlers>,
    Json(profile): Json<Profile>,
) -> Response {
    match handlers.save_profile.handle(SaveProfileCommand { profile }).await {
        Ok(result) => {
            let receipt = SaveReceipt {
                id: result.id,
                message: result.message,
            };
            (StatusCode::OK, Json(receipt)).into_response()
        }
        Err(e) => handle_api_error(e),
    }
}

/// GET /api/kras_master
pub async fn list_master_kras(State(handlers): State<PrismHandlers>) -> Response {
    match handlers
        .list_master_kras
        .handle(ListMasterKrasQuery::default())
        .await
    {
        Ok(kras) => (StatusCode::OK, Json(kras)).into_response(),
        Err(e) => handle_api_error(e),
    }
}

/// POST /api/generate-objective
pub async fn generate_objective(
    State(handlers): State<PrismHandlers>,
    Json(req): Json<GenerateObjectiveRequest>,
) -> Response {
    let cmd = SuggestObjectiveCommand::raw(req.prompt);
    match handlers.suggest_objective.handle(cmd).await {
        Ok(text) => (StatusCode::OK, Json(GenerateObjectiveResponse { text })).into_response(),
        Err(e) => handle_suggestion_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_api_error(error: ApiError) -> Response {
    match &error {
        ApiError::Status { status, message } => {
            let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = if code == StatusCode::NOT_FOUND {
                ErrorResponse::not_found(message.clone())
            } else {
                ErrorResponse::new(code.as_str(), message.clone())
            };
            (code, Json(body)).into_response()
        }
        _ => {
            tracing::error!(error = %error, "profile API failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(error.to_string())),
            )
                .into_response()
        }
    }
}

fn handle_suggestion_error(error: SuggestionError) -> Response {
    match error {
        SuggestionError::Malformed(_) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::bad_gateway(error.to_string())),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(error.to_string())),
        )
            .into_response(),
    }
}

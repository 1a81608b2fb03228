//! Request/response bodies of the reference server.

use serde::{Deserialize, Serialize};

/// POST /api/generate-objective body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateObjectiveRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateObjectiveResponse {
    pub text: String,
}

/// Error body. `detail` matches what the client reads back.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", detail)
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self::new("BAD_GATEWAY", detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_detail() {
        let json = serde_json::to_value(ErrorResponse::not_found("Profile 3 not found")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["detail"], "Profile 3 not found");
    }
}

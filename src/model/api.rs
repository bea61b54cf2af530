use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload for not-found responses, e.g. `{"error": "Hero not found"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error payload for validation and persistence failures.
///
/// All non-404 failures are flattened into this shape with human-readable
/// messages; the error taxonomy is not distinguished to the caller beyond
/// the status code.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorsDto {
    pub errors: Vec<String>,
}

/// Welcome payload served at the API root.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeDto {
    pub message: String,
    pub available_endpoints: Vec<String>,
}

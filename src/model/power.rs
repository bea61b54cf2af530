use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Power projection for list and single-power responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PowerDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Request body for `PATCH /powers/{id}`.
///
/// `description` is the only mutable field the API exposes. When the key is
/// absent the update is a no-op and the current projection is returned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePowerDto {
    pub description: Option<String>,
}

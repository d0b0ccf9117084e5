// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Success face of the shared envelope, for the OpenAPI document.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true on this face
    #[schema(example = true)]
    pub success: bool,
    /// The payload of the operation
    pub data: T,
}

/// Error face of the shared envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false on this face
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "ACCESS_DENIED")]
    pub code: String,

    /// Human-readable description
    #[schema(example = "Admin session required")]
    pub message: String,
}

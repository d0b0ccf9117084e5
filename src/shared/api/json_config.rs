// src/shared/api/json_config.rs
use actix_web::error::InternalError;
use actix_web::web::JsonConfig;
use tracing::debug;

use crate::shared::api::ApiResponse;

/// Malformed JSON bodies answer with the standard envelope instead of
/// actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejecting malformed JSON body: {}", err);
        let response = ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string());
        InternalError::from_response(err, response).into()
    })
}

use actix_web::{
    dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};

use crate::session::application::domain::entities::AuthenticatedFlag;
use crate::shared::api::ApiResponse;

/// Guard for admin-only routes. Reads the gate's committed flag; there is no
/// token or per-request identity behind it. One operator, one process-wide
/// session, demo semantics.
#[derive(Debug, Clone, Copy)]
pub struct AdminOperator;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminOperator {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let flag = match req.app_data::<web::Data<AuthenticatedFlag>>() {
            Some(flag) => flag,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        if flag.is_set() {
            ready(Ok(AdminOperator))
        } else {
            ready(Err(create_api_error(ApiResponse::unauthorized(
                "ACCESS_DENIED",
                "Admin session required",
            ))))
        }
    }
}

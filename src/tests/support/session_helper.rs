use actix_web::web;

use crate::session::application::domain::entities::AuthenticatedFlag;

/// App data for the `AdminOperator` guard, pre-set to the given state.
pub fn authenticated_flag(authenticated: bool) -> web::Data<AuthenticatedFlag> {
    let flag = AuthenticatedFlag::default();
    flag.set(authenticated);
    web::Data::new(flag)
}

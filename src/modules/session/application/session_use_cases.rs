use std::sync::Arc;

use crate::session::application::use_cases::{
    apply_view_command::IApplyViewCommandUseCase, get_session::IGetSessionUseCase,
    logout::ILogoutUseCase, submit_access_key::ISubmitAccessKeyUseCase,
};

#[derive(Clone)]
pub struct SessionUseCases {
    pub submit_access_key: Arc<dyn ISubmitAccessKeyUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub get_session: Arc<dyn IGetSessionUseCase + Send + Sync>,
    pub apply_view: Arc<dyn IApplyViewCommandUseCase + Send + Sync>,
}

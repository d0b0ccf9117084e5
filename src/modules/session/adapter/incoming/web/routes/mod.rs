mod apply_view_command;
mod get_session;
mod logout;
mod submit_access_key;

pub use apply_view_command::apply_view_command_handler;
pub use get_session::get_session_handler;
pub use logout::logout_handler;
pub use submit_access_key::submit_access_key_handler;
pub use submit_access_key::__path_submit_access_key_handler;
pub use submit_access_key::{GateStatusResponse, SubmitAccessKeyRequest};

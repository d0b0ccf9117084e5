pub mod apply_view_command;
pub mod get_session;
pub mod logout;
pub mod submit_access_key;

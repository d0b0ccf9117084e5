mod session_state_repository;

pub use session_state_repository::{SessionStateRepository, SessionStateRepositoryError};

pub mod domain;
pub mod ports;
pub mod session_use_cases;
pub mod use_cases;

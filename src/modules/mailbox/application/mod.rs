pub mod domain;
pub mod mailbox_use_cases;
pub mod ports;
pub mod use_cases;

pub mod domain;
pub mod ports;
pub mod site_use_cases;
pub mod use_cases;

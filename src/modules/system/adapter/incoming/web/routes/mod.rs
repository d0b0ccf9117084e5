mod get_system_metrics;

pub use get_system_metrics::get_system_metrics_handler;

mod metrics_sampler;

pub use metrics_sampler::{MetricsSampler, SystemMetrics};

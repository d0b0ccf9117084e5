use rand::Rng;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::project::application::ports::outgoing::ProjectQuery;

/// The dashboard's HUD tiles. Uptime and sync status are set dressing; the
/// core load is a simulated gauge and deployments is the live project count.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub uptime_pct: f64,
    pub core_load_pct: u8,
    pub deployments: usize,
    pub sync_status: &'static str,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self {
            uptime_pct: 99.98,
            core_load_pct: 14,
            deployments: 0,
            sync_status: "active",
        }
    }
}

/// One step of the simulated load: a bounded random walk, so consecutive
/// samples look related instead of jumping around the dial.
fn next_load<R: Rng>(previous: u8, rng: &mut R) -> u8 {
    let step: i16 = rng.gen_range(-7..=7);
    (previous as i16 + step).clamp(5, 95) as u8
}

/// Periodic refresher for the dashboard gauge, the one lifecycle-scoped
/// resource in the system. The sampling task starts with the service and is
/// aborted when the sampler drops, so no timer outlives its owner.
pub struct MetricsSampler {
    latest: Arc<RwLock<SystemMetrics>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl MetricsSampler {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(RwLock::new(SystemMetrics::default())),
            task: Mutex::new(None),
        }
    }

    pub fn start(&self, refresh: Duration, projects: Arc<dyn ProjectQuery + Send + Sync>) {
        let latest = Arc::clone(&self.latest);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(refresh);
            loop {
                ticker.tick().await;

                let deployments = match projects.all_projects().await {
                    Ok(projects) => projects.len(),
                    Err(_) => continue,
                };

                let mut metrics = latest.write().await;
                metrics.core_load_pct = next_load(metrics.core_load_pct, &mut rand::thread_rng());
                metrics.deployments = deployments;
                debug!(
                    "Metrics refresh: load {}%, {} deployments",
                    metrics.core_load_pct, metrics.deployments
                );
            }
        });

        if let Ok(mut slot) = self.task.lock() {
            if let Some(previous) = slot.replace(handle) {
                previous.abort();
            }
        }
    }

    pub async fn snapshot(&self) -> SystemMetrics {
        self.latest.read().await.clone()
    }
}

impl Default for MetricsSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MetricsSampler {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.task.lock() {
            if let Some(task) = slot.take() {
                task.abort();
            }
        }
    }
}

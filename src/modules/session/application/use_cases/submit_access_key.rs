use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::session::application::domain::entities::{GateStatus, GateTiming};
use crate::session::application::ports::outgoing::{
    SessionStateRepository, SessionStateRepositoryError,
};

/// User-facing denial line, verbatim from the original login terminal.
pub const ACCESS_DENIED_MESSAGE: &str = "ACCESS_DENIED: INVALID_CREDENTIALS";

#[derive(Debug, Clone)]
pub enum SubmitAccessKeyError {
    /// Wrong key. The gate shows its error state and resets itself.
    Denied,
    /// A scan sequence is already running; the original form disables
    /// itself for the duration.
    GateBusy,
    RepositoryError(String),
}

/// Drives the gate's theatrical scan sequence:
/// Idle → Scanning → Success (flag committed after a staging delay), or
/// Idle → Scanning → Error → Idle (after the reset delay).
#[async_trait]
pub trait ISubmitAccessKeyUseCase: Send + Sync {
    async fn execute(&self, access_key: &str) -> Result<GateStatus, SubmitAccessKeyError>;
}

/// Holds the gate's one deferred transition (success commit or error reset).
/// Scheduling a new one aborts the previous, and dropping the slot aborts
/// whatever is pending, so no timer outlives the gate.
#[derive(Clone, Default)]
pub struct GateTimers {
    pending: Arc<PendingTransition>,
}

#[derive(Default)]
struct PendingTransition(Mutex<Option<JoinHandle<()>>>);

impl GateTimers {
    pub fn schedule(&self, handle: JoinHandle<()>) {
        if let Ok(mut slot) = self.pending.0.lock() {
            if let Some(previous) = slot.replace(handle) {
                previous.abort();
            }
        }
    }

    pub fn cancel(&self) {
        if let Ok(mut slot) = self.pending.0.lock() {
            if let Some(pending) = slot.take() {
                pending.abort();
            }
        }
    }
}

impl Drop for PendingTransition {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.0.lock() {
            if let Some(pending) = slot.take() {
                pending.abort();
            }
        }
    }
}

pub struct AccessGateService {
    session_state: Arc<dyn SessionStateRepository>,
    access_key: String,
    timing: GateTiming,
    timers: GateTimers,
}

impl AccessGateService {
    pub fn new(
        session_state: Arc<dyn SessionStateRepository>,
        access_key: String,
        timing: GateTiming,
        timers: GateTimers,
    ) -> Self {
        Self {
            session_state,
            access_key,
            timing,
            timers,
        }
    }
}

#[async_trait]
impl ISubmitAccessKeyUseCase for AccessGateService {
    async fn execute(&self, access_key: &str) -> Result<GateStatus, SubmitAccessKeyError> {
        let map_err = |SessionStateRepositoryError::StorageError(msg)| {
            SubmitAccessKeyError::RepositoryError(msg)
        };

        if self.session_state.gate_status().await.map_err(map_err)? == GateStatus::Scanning {
            return Err(SubmitAccessKeyError::GateBusy);
        }

        // A fresh submission supersedes any pending reset or commit.
        self.timers.cancel();

        self.session_state
            .set_gate_status(GateStatus::Scanning)
            .await
            .map_err(map_err)?;

        // The scan is pure theater; the comparison below is the whole check.
        tokio::time::sleep(self.timing.scan).await;

        if access_key == self.access_key {
            self.session_state
                .set_gate_status(GateStatus::Success)
                .await
                .map_err(map_err)?;

            let session_state = Arc::clone(&self.session_state);
            let commit_delay = self.timing.commit;
            self.timers.schedule(tokio::spawn(async move {
                tokio::time::sleep(commit_delay).await;
                if let Err(e) = session_state.commit_authentication().await {
                    error!("Failed to commit authentication: {}", e);
                }
            }));

            Ok(GateStatus::Success)
        } else {
            warn!("Access gate denied a submission");

            self.session_state
                .set_gate_status(GateStatus::Error)
                .await
                .map_err(map_err)?;

            let session_state = Arc::clone(&self.session_state);
            let reset_delay = self.timing.error_reset;
            self.timers.schedule(tokio::spawn(async move {
                tokio::time::sleep(reset_delay).await;
                if let Err(e) = session_state.set_gate_status(GateStatus::Idle).await {
                    error!("Failed to reset the gate: {}", e);
                }
            }));

            Err(SubmitAccessKeyError::Denied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::session::adapter::outgoing::SessionStoreMemory;
    use crate::shared::store::MemoryStore;

    fn gate(store: Arc<MemoryStore>) -> AccessGateService {
        AccessGateService::new(
            Arc::new(SessionStoreMemory::new(store)),
            "usman_root".to_string(),
            GateTiming::immediate(),
            GateTimers::default(),
        )
    }

    async fn wait_until(check: impl Fn() -> bool) {
        for _ in 0..200 {
            if check() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("condition never became true");
    }

    #[tokio::test]
    async fn test_wrong_key_walks_scanning_error_idle_without_authenticating() {
        let store = Arc::new(MemoryStore::new());
        let gate = gate(Arc::clone(&store));

        let res = gate.execute("swordfish").await;

        assert!(matches!(res, Err(SubmitAccessKeyError::Denied)));
        assert!(!store.is_authenticated());

        // The reset timer returns the gate to idle on its own.
        for _ in 0..200 {
            if store.gate_status().await == GateStatus::Idle {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert_eq!(store.gate_status().await, GateStatus::Idle);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_right_key_commits_the_flag_and_stamps_last_login() {
        let store = Arc::new(MemoryStore::new());
        let before = store.profile().await.last_login;
        let gate = gate(Arc::clone(&store));

        let status = gate.execute("usman_root").await.unwrap();

        assert_eq!(status, GateStatus::Success);
        let flag = store.authenticated_flag();
        wait_until(move || flag.is_set()).await;
        assert!(store.profile().await.last_login >= before);
    }

    #[tokio::test]
    async fn test_a_running_scan_rejects_further_submissions() {
        let store = Arc::new(MemoryStore::new());
        store.set_gate_status(GateStatus::Scanning).await;
        let gate = gate(Arc::clone(&store));

        let res = gate.execute("usman_root").await;

        assert!(matches!(res, Err(SubmitAccessKeyError::GateBusy)));
    }
}

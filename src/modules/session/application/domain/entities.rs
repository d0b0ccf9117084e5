use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::mailbox::application::domain::entities::MessageView;

/// States of the access gate's theatrical scan sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Idle,
    Scanning,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

/// UI-mode flags the original client kept next to its content collections.
/// The backend stores them verbatim; it never interprets `theme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub admin_view: bool,
    pub chat_open: bool,
    pub theme: Theme,
    pub selected_project: Option<String>,
    pub message_filter: MessageView,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            // The source ships with the admin login view open.
            admin_view: true,
            chat_open: false,
            theme: Theme::Dark,
            selected_project: None,
            message_filter: MessageView::Active,
        }
    }
}

/// Closed command set for view-flag mutations. Exhaustive matching keeps
/// newly added views from being silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ViewCommand {
    ToggleAdmin,
    ToggleChat,
    ToggleTheme,
    SelectProject { id: Option<String> },
    SetMessageFilter { view: MessageView },
}

/// Shared, lock-free view of the committed authentication flag. Cloned into
/// the web layer so route guards can read it without touching the store's
/// async locks.
#[derive(Debug, Clone, Default)]
pub struct AuthenticatedFlag(Arc<AtomicBool>);

impl AuthenticatedFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }
}

/// Delays of the scan sequence. Production values mirror the source's
/// animation timings; tests run with zero delays.
#[derive(Debug, Clone, Copy)]
pub struct GateTiming {
    pub scan: Duration,
    pub commit: Duration,
    pub error_reset: Duration,
}

impl Default for GateTiming {
    fn default() -> Self {
        Self {
            scan: Duration::from_millis(1500),
            commit: Duration::from_millis(800),
            error_reset: Duration::from_millis(2000),
        }
    }
}

impl GateTiming {
    pub fn immediate() -> Self {
        Self {
            scan: Duration::ZERO,
            commit: Duration::ZERO,
            error_reset: Duration::ZERO,
        }
    }
}

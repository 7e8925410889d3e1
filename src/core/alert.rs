//! Single-slot alert relay
//!
//! Every completed asynchronous action (sign-in, registration, logout)
//! overwrites one alert. Nothing is queued and no history is kept: readers
//! always render the latest value.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Default delay before a visible alert hides itself
pub const DEFAULT_ALERT_HIDE_MS: u32 = 6000;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// The alert currently surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertState {
    pub visible: bool,
    pub severity: Severity,
    pub message: String,
}

impl AlertState {
    /// Visible alert for the outcome of an async action
    pub fn from_outcome(message: impl Into<String>, is_success: bool) -> Self {
        Self {
            visible: true,
            severity: if is_success {
                Severity::Info
            } else {
                Severity::Error
            },
            message: message.into(),
        }
    }
}

/// Anything that can receive alert emissions
pub trait AlertSink {
    /// Overwrite the current alert
    fn emit(&self, message: &str, is_success: bool);
}

/// Alert slot plus an emission counter
///
/// The generation lets a delayed auto-hide tell whether the alert it was
/// armed for has since been replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertRelay {
    state: AlertState,
    generation: u64,
}

impl AlertRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &AlertState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Overwrite the alert and return the generation it was stored under
    pub fn emit(&mut self, message: impl Into<String>, is_success: bool) -> u64 {
        self.generation += 1;
        self.state = AlertState::from_outcome(message, is_success);
        self.generation
    }

    /// Hide the current alert
    pub fn dismiss(&mut self) {
        self.state.visible = false;
    }

    /// Hide the alert only if nothing was emitted since `generation`
    ///
    /// Returns whether the alert was hidden.
    pub fn dismiss_if_current(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.dismiss();
        true
    }
}

impl AlertSink for RefCell<AlertRelay> {
    fn emit(&self, message: &str, is_success: bool) {
        self.borrow_mut().emit(message, is_success);
    }
}

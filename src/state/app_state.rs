//! Application state definitions

use super::forms::RegisterForm;
use super::SubmitPhase;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Login,
    Home,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Register => "Candidate Registration",
            View::Login => "Login",
            View::Home => "HireWave",
        }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown over the current view
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Views visited before the current one
    pub view_history: Vec<View>,
    /// Registration form, alive while the Register view is mounted
    pub register_form: RegisterForm,
    pub submit_phase: SubmitPhase,
    /// Oldest toast first
    pub notifications: VecDeque<Notification>,
}

impl AppState {
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push_back(Notification::new(kind, message));
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    /// Drop toasts that have been on screen longer than `ttl`
    pub fn expire_notifications(&mut self, ttl: Duration) {
        self.notifications.retain(|n| !n.is_expired(ttl));
    }

    /// Discard the registration form and start over with empty fields
    pub fn reset_register_form(&mut self) {
        self.register_form = RegisterForm::new();
        self.submit_phase = SubmitPhase::Idle;
    }
}

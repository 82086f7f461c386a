//! Submit lifecycle for the registration form
//!
//! `Idle → Validating → Rejected | Submitting → Succeeded | Failed`.
//! Rejected and Failed both leave the form editable and accept another submit.

/// Where the current (or most recent) submit attempt is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    /// Local validation failed; errors are shown inline
    Rejected,
    /// Request to the registration API is in flight
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// Whether a submit attempt is still running
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    /// Start a submit attempt. Returns false, and leaves the phase alone,
    /// while a previous attempt is still running.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Validating;
        true
    }

    pub fn validated(&mut self, all_valid: bool) {
        if *self == Self::Validating {
            *self = if all_valid {
                Self::Submitting
            } else {
                Self::Rejected
            };
        }
    }

    pub fn completed(&mut self, succeeded: bool) {
        if *self == Self::Submitting {
            *self = if succeeded {
                Self::Succeeded
            } else {
                Self::Failed
            };
        }
    }

    /// Label for the submit button
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Submitting | Self::Validating => "Registering...",
            _ => "Register",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submit_path() {
        let mut phase = SubmitPhase::default();
        assert!(phase.begin());
        assert_eq!(phase, SubmitPhase::Validating);
        phase.validated(true);
        assert_eq!(phase, SubmitPhase::Submitting);
        phase.completed(true);
        assert_eq!(phase, SubmitPhase::Succeeded);
    }

    #[test]
    fn test_invalid_submit_is_rejected() {
        let mut phase = SubmitPhase::default();
        phase.begin();
        phase.validated(false);
        assert_eq!(phase, SubmitPhase::Rejected);
        // Completion without a request in flight is ignored
        phase.completed(true);
        assert_eq!(phase, SubmitPhase::Rejected);
    }

    #[test]
    fn test_begin_refused_while_submitting() {
        let mut phase = SubmitPhase::Submitting;
        assert!(!phase.begin());
        assert_eq!(phase, SubmitPhase::Submitting);
    }

    #[test]
    fn test_can_resubmit_after_failure_or_rejection() {
        for start in [SubmitPhase::Failed, SubmitPhase::Rejected] {
            let mut phase = start;
            assert!(phase.begin());
            assert_eq!(phase, SubmitPhase::Validating);
        }
    }

    #[test]
    fn test_button_label_while_busy() {
        assert_eq!(SubmitPhase::Idle.button_label(), "Register");
        assert_eq!(SubmitPhase::Submitting.button_label(), "Registering...");
    }
}

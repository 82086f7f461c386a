//! Application state and core logic

use crate::api::{ApiClient, RegistrationApi};
use crate::config::RegisterConfig;
use crate::state::{AppState, FormAction, NotificationKind, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Toast shown after the backend accepts a registration
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration backend
    api: Box<dyn RegistrationApi>,
    /// How long toasts stay on screen
    toast_duration: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured backend
    pub fn new(config: &RegisterConfig) -> Result<Self> {
        let base_url = config.api_base_url();
        tracing::info!(%base_url, "using registration API");
        let api = ApiClient::new(base_url)?;
        Ok(Self::with_api(Box::new(api), config.toast_duration()))
    }

    /// Create an App around any registration backend
    pub fn with_api(api: Box<dyn RegistrationApi>, toast_duration: Duration) -> Self {
        Self {
            state: AppState::default(),
            api,
            toast_duration,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        self.state.expire_notifications(self.toast_duration);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Esc dismisses a visible toast before doing anything else
        if key.code == KeyCode::Esc && self.state.current_notification().is_some() {
            self.state.dismiss_notification();
            return Ok(());
        }

        match self.state.current_view {
            View::Register => self.handle_register_key(key).await?,
            View::Login => self.handle_login_key(key),
            View::Home => self.handle_home_key(key),
        }
        Ok(())
    }

    /// Navigate to a new view. The registration form only lives while its
    /// view is shown: leaving or entering it starts from empty fields.
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        tracing::info!(from = ?self.state.current_view, to = ?view, "navigate");
        if self.state.current_view == View::Register || view == View::Register {
            self.state.reset_register_form();
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            if self.state.current_view == View::Register || view == View::Register {
                self.state.reset_register_form();
            }
            self.state.current_view = view;
        }
    }

    /// Handle keys in the Register view
    async fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_action_row = self.state.register_form.is_action_row_active();

        // Shortcuts that leave the form or talk to the backend
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
                return Ok(());
            }
            KeyCode::Enter if on_action_row => {
                let action = self.state.register_form.selected_action;
                self.run_form_action(action).await;
                return Ok(());
            }
            KeyCode::Esc => {
                self.navigate(View::Home);
                return Ok(());
            }
            _ => {}
        }

        let form = &mut self.state.register_form;
        let on_select = form.active_field().is_some_and(|f| f.is_select());

        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if on_action_row => form.selected_action = form.selected_action.prev(),
            KeyCode::Right if on_action_row => form.selected_action = form.selected_action.next(),
            KeyCode::Left if on_select => form.cycle_option(false),
            KeyCode::Right | KeyCode::Char(' ') if on_select => form.cycle_option(true),
            KeyCode::Char(c)
                if !on_action_row
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c)
            }
            KeyCode::Backspace if !on_action_row => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    async fn run_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Register => self.submit().await,
            FormAction::Login => self.navigate(View::Login),
            FormAction::Home => self.navigate(View::Home),
        }
    }

    /// Validate the whole form and, if every field passes, send it to the
    /// backend. One request per call; nothing is retried.
    pub async fn submit(&mut self) {
        if !self.state.submit_phase.begin() {
            tracing::warn!("submit ignored: a registration is already in progress");
            return;
        }

        let valid = self.state.register_form.validate_all();
        self.state.submit_phase.validated(valid);
        if !valid {
            tracing::info!(
                errors = self.state.register_form.errors.error_count(),
                "registration blocked by validation errors"
            );
            return;
        }

        let result = self.api.register(&self.state.register_form.data).await;
        self.state.submit_phase.completed(result.is_ok());

        match result {
            Ok(_) => {
                tracing::info!("registration accepted");
                self.state
                    .notify(NotificationKind::Success, REGISTER_SUCCESS_MESSAGE);
                self.navigate(View::Login);
            }
            Err(err) => {
                tracing::warn!("registration failed: {err}");
                self.state
                    .notify(NotificationKind::Error, err.user_message());
            }
        }
    }

    /// Handle keys in the Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.navigate(View::Register),
            KeyCode::Char('h') => self.navigate(View::Home),
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.navigate(View::Register),
            KeyCode::Char('l') => self.navigate(View::Login),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockRegistrationApi, RegisterResponse, SubmitError};
    use crate::state::{FormData, RegisterField, SubmitPhase};

    fn valid_data() -> FormData {
        FormData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            mobile: "9876543210".to_string(),
            age: "29".to_string(),
            place: "Pune".to_string(),
            qualification: "UG".to_string(),
            experience: "Experienced".to_string(),
            ..FormData::default()
        }
    }

    fn app_with(mock: MockRegistrationApi) -> App {
        App::with_api(Box::new(mock), Duration::from_secs(3))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submit_sends_full_payload_once() {
            let expected = valid_data();
            let mut mock = MockRegistrationApi::new();
            mock.expect_register()
                .withf(move |form| *form == expected && form.role == "candidate")
                .times(1)
                .returning(|_| Ok(RegisterResponse::default()));

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.submit().await;

            assert_eq!(app.state.current_view, View::Login);
            let toast = app.state.current_notification().unwrap();
            assert_eq!(toast.kind, NotificationKind::Success);
            assert_eq!(toast.message, REGISTER_SUCCESS_MESSAGE);
        }

        #[tokio::test]
        async fn test_success_discards_form() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register()
                .returning(|_| Ok(RegisterResponse::default()));

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.submit().await;

            assert_eq!(app.state.register_form.data, FormData::default());
        }

        #[tokio::test]
        async fn test_server_message_is_shown_on_failure() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(1).returning(|_| {
                Err(SubmitError::Rejected {
                    status: 409,
                    message: Some("Email exists".to_string()),
                })
            });

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.submit().await;

            assert_eq!(app.state.current_view, View::Register);
            assert_eq!(app.state.submit_phase, SubmitPhase::Failed);
            let toast = app.state.current_notification().unwrap();
            assert_eq!(toast.kind, NotificationKind::Error);
            assert_eq!(toast.message, "Email exists");
            // The form stays filled in for another attempt
            assert_eq!(app.state.register_form.data, valid_data());
        }

        #[tokio::test]
        async fn test_fallback_message_without_body() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(1).returning(|_| {
                Err(SubmitError::Rejected {
                    status: 500,
                    message: None,
                })
            });

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.submit().await;

            assert_eq!(
                app.state.current_notification().unwrap().message,
                "Registration failed."
            );
        }

        #[tokio::test]
        async fn test_invalid_form_makes_no_request() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().never();

            let mut app = app_with(mock);
            app.state.register_form.data = FormData {
                mobile: "12345".to_string(),
                age: "17".to_string(),
                ..valid_data()
            };
            app.submit().await;

            let errors = &app.state.register_form.errors;
            assert_eq!(errors.get(RegisterField::Mobile), Some("Mobile must be 10 digits."));
            assert_eq!(
                errors.get(RegisterField::Age),
                Some("Age must be between 18 and 65.")
            );
            assert_eq!(errors.error_count(), 2);
            assert_eq!(app.state.submit_phase, SubmitPhase::Rejected);
            assert_eq!(app.state.current_view, View::Register);
            assert!(app.state.current_notification().is_none());
        }

        #[tokio::test]
        async fn test_submit_ignored_while_in_flight() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().never();

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.state.submit_phase = SubmitPhase::Submitting;
            app.submit().await;

            assert_eq!(app.state.submit_phase, SubmitPhase::Submitting);
        }

        #[tokio::test]
        async fn test_retry_after_failure_sends_again() {
            let mut mock = MockRegistrationApi::new();
            let mut seq = mockall::Sequence::new();
            mock.expect_register()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| {
                    Err(SubmitError::Rejected {
                        status: 503,
                        message: None,
                    })
                });
            mock.expect_register()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(RegisterResponse::default()));

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.submit().await;
            assert_eq!(app.state.current_view, View::Register);
            app.submit().await;
            assert_eq!(app.state.current_view, View::Login);
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_fills_active_field() {
            let mut app = app_with(MockRegistrationApi::new());
            for c in "Ann".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();

            assert_eq!(app.state.register_form.data.name, "Ann");
            assert_eq!(app.state.register_form.data.email, "a");
        }

        #[tokio::test]
        async fn test_ctrl_s_submits() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().never();

            let mut app = app_with(mock);
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.submit_phase, SubmitPhase::Rejected);
            assert!(app.state.register_form.errors.has_error(RegisterField::Name));
            // Control chords are not typed into the field
            assert_eq!(app.state.register_form.data.name, "");
        }

        #[tokio::test]
        async fn test_ctrl_w_does_nothing() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().never();

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.handle_key(ctrl('w')).await.unwrap();

            assert_eq!(app.state.submit_phase, SubmitPhase::Idle);
            assert_eq!(app.state.current_view, View::Register);
            assert_eq!(app.state.register_form.data.name, "Jane Doe");
        }

        #[tokio::test]
        async fn test_enter_on_register_button_submits() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register()
                .times(1)
                .returning(|_| Ok(RegisterResponse::default()));

            let mut app = app_with(mock);
            app.state.register_form.data = valid_data();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_login_link_navigates() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.register_form.selected_action, FormAction::Login);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_select_field_cycles_with_arrows() {
            let mut app = app_with(MockRegistrationApi::new());
            app.state
                .register_form
                .set_active_field(RegisterField::Qualification.index());
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.register_form.data.qualification, "PG");
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(app.state.register_form.data.qualification, "UG");
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.register_form.data.qualification, "PG");
        }

        #[tokio::test]
        async fn test_esc_dismisses_toast_before_leaving_form() {
            let mut app = app_with(MockRegistrationApi::new());
            app.state.notify(NotificationKind::Error, "Registration failed.");

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.current_notification().is_none());
            assert_eq!(app.state.current_view, View::Register);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_home_and_login_keys() {
            let mut app = app_with(MockRegistrationApi::new());
            app.navigate(View::Home);
            app.handle_key(key(KeyCode::Char('l'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Register);
            app.navigate(View::Home);
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_leaving_register_discards_form() {
            let mut app = app_with(MockRegistrationApi::new());
            app.state.register_form.input_char('x');
            app.navigate(View::Home);
            app.navigate(View::Register);
            assert!(app.state.register_form.data.name.is_empty());
        }

        #[test]
        fn test_navigate_to_same_view_is_noop() {
            let mut app = app_with(MockRegistrationApi::new());
            app.state.register_form.input_char('x');
            app.navigate(View::Register);
            assert_eq!(app.state.register_form.data.name, "x");
            assert!(app.state.view_history.is_empty());
        }

        #[test]
        fn test_go_back_restores_previous_view() {
            let mut app = app_with(MockRegistrationApi::new());
            app.navigate(View::Login);
            app.go_back();
            assert_eq!(app.state.current_view, View::Register);
        }

        #[test]
        fn test_go_back_empty_history_does_nothing() {
            let mut app = app_with(MockRegistrationApi::new());
            app.go_back();
            assert_eq!(app.state.current_view, View::Register);
        }

        #[test]
        fn test_tick_expires_toasts() {
            let mut app = App::with_api(Box::new(MockRegistrationApi::new()), Duration::ZERO);
            app.state.notify(NotificationKind::Success, "done");
            app.tick();
            assert!(app.state.current_notification().is_none());
        }
    }
}

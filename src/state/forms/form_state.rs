//! Registration form state: field values, recorded errors and focus

use super::field::{cycle_option, FieldKind, RegisterField};
use super::validator::validate_field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role sent with every candidate registration
pub const CANDIDATE_ROLE: &str = "candidate";

/// Field values as sent to `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub mobile: String,
    pub age: String,
    pub place: String,
    pub qualification: String,
    pub experience: String,
    pub role: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            mobile: String::new(),
            age: String::new(),
            place: String::new(),
            qualification: String::new(),
            experience: String::new(),
            role: CANDIDATE_ROLE.to_string(),
        }
    }
}

impl FormData {
    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
            RegisterField::Mobile => &self.mobile,
            RegisterField::Age => &self.age,
            RegisterField::Place => &self.place,
            RegisterField::Qualification => &self.qualification,
            RegisterField::Experience => &self.experience,
        }
    }

    fn slot_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
            RegisterField::Mobile => &mut self.mobile,
            RegisterField::Age => &mut self.age,
            RegisterField::Place => &mut self.place,
            RegisterField::Qualification => &mut self.qualification,
            RegisterField::Experience => &mut self.experience,
        }
    }

    /// Return a copy with one field replaced; every other field is unchanged
    pub fn with_value(mut self, field: RegisterField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = value.into();
        self
    }
}

/// Recorded validation messages. A field only gets an entry once it has
/// been validated; an empty message means it passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<RegisterField, String>,
}

impl ErrorMap {
    /// The recorded message for `field`, if it is currently failing
    pub fn get(&self, field: RegisterField) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn has_error(&self, field: RegisterField) -> bool {
        self.get(field).is_some()
    }

    pub fn set(&mut self, field: RegisterField, message: String) {
        self.entries.insert(field, message);
    }

    /// Whether `field` has been validated at least once
    #[allow(dead_code)] // Only read by tests so far
    pub fn contains(&self, field: RegisterField) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn error_count(&self) -> usize {
        self.entries.values().filter(|m| !m.is_empty()).count()
    }
}

/// Buttons on the action row below the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormAction {
    #[default]
    Register,
    Login,
    Home,
}

impl FormAction {
    pub const ALL: [FormAction; 3] = [FormAction::Register, FormAction::Login, FormAction::Home];

    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Already have an account? Login",
            Self::Home => "Back to Home",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Register => Self::Login,
            Self::Login => Self::Home,
            Self::Home => Self::Register,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Register => Self::Home,
            Self::Login => Self::Register,
            Self::Home => Self::Login,
        }
    }
}

/// The candidate registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub data: FormData,
    pub errors: ErrorMap,
    /// Index into [`RegisterField::ALL`]; one past the end is the action row
    pub active_field_index: usize,
    pub selected_action: FormAction,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of focus stops: every field plus the action row
    pub fn focus_count(&self) -> usize {
        RegisterField::ALL.len() + 1
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_field_index == RegisterField::ALL.len()
    }

    pub fn active_field(&self) -> Option<RegisterField> {
        RegisterField::from_index(self.active_field_index)
    }

    #[allow(dead_code)] // Focus is moved by key navigation; tests jump directly
    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.focus_count() - 1);
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.focus_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.focus_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Run the rule for `field`, record the outcome and return whether it passed
    pub fn validate(&mut self, field: RegisterField) -> bool {
        let message = validate_field(field, &self.data);
        let valid = message.is_empty();
        if !valid {
            tracing::debug!(field = field.key(), %message, "field failed validation");
        }
        self.errors.set(field, message);
        valid
    }

    /// Validate every field. All rules run so each failing field gets its
    /// message, even after the first failure.
    pub fn validate_all(&mut self) -> bool {
        RegisterField::ALL
            .iter()
            .fold(true, |all_valid, field| self.validate(*field) && all_valid)
    }

    /// Store a new value for `field`. A field that is currently showing an
    /// error is re-checked straight away so the message clears as soon as
    /// the input becomes valid; other fields wait for submit.
    pub fn apply_change(&mut self, field: RegisterField, value: impl Into<String>) {
        self.data = std::mem::take(&mut self.data).with_value(field, value);
        if self.errors.has_error(field) {
            self.validate(field);
        }
    }

    /// Append a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.is_select() {
            return;
        }
        let mut value = self.data.get(field).to_string();
        value.push(c);
        self.apply_change(field, value);
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.is_select() {
            return;
        }
        let mut value = self.data.get(field).to_string();
        if value.pop().is_some() {
            self.apply_change(field, value);
        }
    }

    /// Move the focused select field to its next or previous option
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        if let FieldKind::Select(options) = field.kind() {
            let value = cycle_option(options, self.data.get(field), forward);
            self.apply_change(field, value);
        }
    }
}

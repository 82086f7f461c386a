//! Form domain layer
//!
//! Field descriptors, validation rules and the registration form state.

mod field;
mod form_state;
mod validator;

pub use field::{option_label, FieldKind, RegisterField};
pub use form_state::{FormAction, FormData, RegisterForm};

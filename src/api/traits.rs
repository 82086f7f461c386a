//! Trait abstraction for the registration API to enable mocking in tests

use crate::state::FormData;
use async_trait::async_trait;

use super::client::RegisterResponse;
use super::error::SubmitError;

/// Backend operations used by the registration form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit a candidate registration (`POST /auth/register`)
    async fn register(&self, form: &FormData) -> Result<RegisterResponse, SubmitError>;
}

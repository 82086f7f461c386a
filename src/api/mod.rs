//! Registration API client module

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use traits::RegistrationApi;

#[cfg(test)]
pub use client::RegisterResponse;
#[cfg(test)]
pub use error::SubmitError;
#[cfg(test)]
pub use traits::MockRegistrationApi;

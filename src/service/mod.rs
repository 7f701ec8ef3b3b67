//! Registration backend module

mod client;
mod traits;

pub use client::{MockBackend, RegistrationReceipt, ServiceError};
pub use traits::RegistrationService;

#[cfg(test)]
pub use traits::MockRegistrationService;

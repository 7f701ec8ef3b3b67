//! Trait abstraction for the registration backend to enable mocking in tests

use super::client::{RegistrationReceipt, ServiceError};
use crate::state::AdvocateApplication;
use async_trait::async_trait;

/// Operations offered by the registration backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Submit a complete advocate application.
    ///
    /// Fails with a descriptive reason for business-rule conflicts
    /// (duplicate email, mobile number, or Bar Council number) or with a
    /// transport error.
    async fn register(
        &self,
        application: &AdvocateApplication,
    ) -> Result<RegistrationReceipt, ServiceError>;

    /// Check a one-time passcode against a mobile number.
    ///
    /// Offered by the backend but not currently part of the submission
    /// gate; whether mobile verification should block registration is an
    /// open business question.
    async fn verify_mobile_otp(&self, mobile: &str, otp: &str) -> Result<bool, ServiceError>;
}

//! Mock registration backend
//!
//! Stands in for the platform's HTTP API behind the same trait seam a
//! real client would implement. Simulates latency and the duplicate
//! checks the backend performs; file contents are never uploaded.

use super::traits::RegistrationService;
use crate::state::AdvocateApplication;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Simulated round-trip latency for a registration submit.
const REGISTER_LATENCY: Duration = Duration::from_millis(2000);
/// Simulated round-trip latency for an OTP check.
const OTP_LATENCY: Duration = Duration::from_millis(1000);

/// The OTP the mock backend accepts.
const MOCK_OTP: &str = "123456";

/// Failure reported by the registration backend.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A unique field collided with an existing registration
    #[error("{0}")]
    Duplicate(String),
    /// The backend was unreachable or answered garbage
    #[error("transport error: {0}")]
    Transport(String),
}

/// Successful registration acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    /// Reference id for the application under review
    pub reference_id: Uuid,
    /// Human-readable confirmation for the banner
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// In-process mock of the registration backend.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    /// Skip the simulated latency (used by tests)
    instant: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that answers without the artificial delay.
    #[cfg(test)]
    pub fn instant() -> Self {
        Self { instant: true }
    }

    async fn simulate_latency(&self, latency: Duration) {
        if !self.instant {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl RegistrationService for MockBackend {
    async fn register(
        &self,
        application: &AdvocateApplication,
    ) -> Result<RegistrationReceipt, ServiceError> {
        self.simulate_latency(REGISTER_LATENCY).await;

        if application.email == "test@example.com" {
            return Err(ServiceError::Duplicate(
                "This email is already registered".to_string(),
            ));
        }
        if application.mobile_number == "9999999999" {
            return Err(ServiceError::Duplicate(
                "This mobile number is already registered".to_string(),
            ));
        }
        if application.bar_council_number == "BAR12345" {
            return Err(ServiceError::Duplicate(
                "This Bar Council Number is already registered".to_string(),
            ));
        }

        let receipt = RegistrationReceipt {
            reference_id: Uuid::new_v4(),
            message: "Registration submitted successfully. Your application is under review."
                .to_string(),
            submitted_at: Utc::now(),
        };
        tracing::info!(
            reference_id = %receipt.reference_id,
            email = %application.email,
            "registration accepted"
        );
        Ok(receipt)
    }

    async fn verify_mobile_otp(&self, mobile: &str, otp: &str) -> Result<bool, ServiceError> {
        self.simulate_latency(OTP_LATENCY).await;
        tracing::debug!(%mobile, "otp verification attempt");
        Ok(otp == MOCK_OTP)
    }
}

use async_trait::async_trait;

use crate::{
    domain::entities::{environment::Environment, receipt_info::ReceiptInfo},
    errors::ReceiptValidationError,
};

#[async_trait]
pub trait ReceiptValidationRepository: Send + Sync {
    /// Validate a signed receipt against a verification backend.
    ///
    /// receipt_data:
    ///   The raw receipt bytes, as issued by the platform purchase subsystem.
    ///   Forwarded as-is; well-formedness checking is the backend's job.
    /// environment:
    ///   The backend to validate against. If the production backend reports
    ///   the receipt as sandbox-issued, the receipt is re-validated against
    ///   the sandbox backend, at most once per call.
    /// shared_secret:
    ///   The app's shared secret. Only required for receipts that contain
    ///   auto-renewable subscriptions.
    async fn validate(
        &self,
        receipt_data: &[u8],
        environment: Environment,
        shared_secret: Option<&str>,
    ) -> Result<ReceiptInfo, ReceiptValidationError>;
}

use async_trait::async_trait;
use tracing::debug;

use crate::{
    data::models::verify_receipt_api::verify_receipt_request_model::VerifyReceiptRequestModel,
    domain::entities::environment::Environment, errors::ReceiptValidationError,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub(crate) trait VerifyReceiptDatasource: Send + Sync {
    /// verifyReceipt:
    /// https://developer.apple.com/documentation/appstorereceipts/verifyreceipt
    ///
    /// request:
    ///   The request body, carrying the base64-encoded receipt and the
    ///   optional shared secret.
    /// environment:
    ///   The verification backend to submit the receipt to.
    ///
    /// Returns the raw response payload, or None if the response carried no
    /// body. Transport-level failures (send error, non-2xx status, unreadable
    /// body) surface as `ReceiptValidationError::Transport`.
    async fn verify_receipt(
        &self,
        request: &VerifyReceiptRequestModel,
        environment: Environment,
    ) -> Result<Option<Vec<u8>>, ReceiptValidationError>;
}

pub(crate) struct VerifyReceiptDatasourceImpl {
    client: reqwest::Client,
}

#[async_trait]
impl VerifyReceiptDatasource for VerifyReceiptDatasourceImpl {
    async fn verify_receipt(
        &self,
        request: &VerifyReceiptRequestModel,
        environment: Environment,
    ) -> Result<Option<Vec<u8>>, ReceiptValidationError> {
        debug!(?environment, "submitting receipt for verification");
        let response = self
            .client
            .post(environment.verify_receipt_url())
            .json(request)
            .send()
            .await
            .map_err(|e| ReceiptValidationError::Transport {
                reason: format!("callout failed to send: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(ReceiptValidationError::Transport {
                reason: format!("callout returned with {} status code", response.status()),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ReceiptValidationError::Transport {
                reason: format!("failed to read callout response: {e}"),
            })?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(body.to_vec()))
    }
}

impl VerifyReceiptDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

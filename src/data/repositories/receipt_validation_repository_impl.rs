use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    data::{
        datasources::verify_receipt_datasource::{
            VerifyReceiptDatasource, VerifyReceiptDatasourceImpl,
        },
        models::verify_receipt_api::verify_receipt_request_model::VerifyReceiptRequestModel,
    },
    domain::{
        entities::{
            environment::Environment, receipt_info::ReceiptInfo, receipt_status::ReceiptStatus,
        },
        repositories::receipt_validation_repository::ReceiptValidationRepository,
    },
    errors::ReceiptValidationError,
};

pub(crate) struct ReceiptValidationRepositoryImpl<D: VerifyReceiptDatasource> {
    verify_receipt_datasource: D,
}

#[async_trait]
impl<D: VerifyReceiptDatasource> ReceiptValidationRepository
    for ReceiptValidationRepositoryImpl<D>
{
    async fn validate(
        &self,
        receipt_data: &[u8],
        environment: Environment,
        shared_secret: Option<&str>,
    ) -> Result<ReceiptInfo, ReceiptValidationError> {
        let request = VerifyReceiptRequestModel::new(receipt_data, shared_secret);
        let mut environment = environment;
        let mut redirected_to_sandbox = false;
        loop {
            let payload = self
                .verify_receipt_datasource
                .verify_receipt(&request, environment)
                .await?
                .ok_or(ReceiptValidationError::NoRemoteData)?;

            let receipt_info: ReceiptInfo = match serde_json::from_slice(&payload) {
                Ok(receipt_info) => receipt_info,
                Err(_) => {
                    return Err(ReceiptValidationError::JsonDecode {
                        raw: String::from_utf8(payload).ok(),
                    })
                }
            };

            let status = ReceiptStatus::from_response(&receipt_info);
            if status == ReceiptStatus::SandboxReceiptOnProduction
                && environment == Environment::Production
                && !redirected_to_sandbox
            {
                // The receipt was issued in the sandbox; the same request is
                // re-submitted there, at most once per validation. A sandbox
                // backend answering with this same code again is a backend
                // defect and falls through to ReceiptInvalid below.
                warn!("receipt is sandbox-issued, re-validating against sandbox backend");
                environment = Environment::Sandbox;
                redirected_to_sandbox = true;
                continue;
            }

            return if status.is_valid() {
                debug!(?environment, "receipt validated");
                Ok(receipt_info)
            } else {
                Err(ReceiptValidationError::ReceiptInvalid {
                    receipt_info,
                    status,
                })
            };
        }
    }
}

impl ReceiptValidationRepositoryImpl<VerifyReceiptDatasourceImpl> {
    pub(crate) fn new() -> Self {
        Self {
            verify_receipt_datasource: VerifyReceiptDatasourceImpl::new(),
        }
    }
}

use crate::{
    data::{
        datasources::verify_receipt_datasource::VerifyReceiptDatasourceImpl,
        repositories::receipt_validation_repository_impl::ReceiptValidationRepositoryImpl,
    },
    domain::{
        entities::{environment::Environment, receipt_info::ReceiptInfo},
        repositories::receipt_validation_repository::ReceiptValidationRepository,
    },
    errors::ReceiptValidationError,
};

pub struct ReceiptValidationUtil<R: ReceiptValidationRepository> {
    receipt_validation_repository: R,
}

impl<R: ReceiptValidationRepository> ReceiptValidationUtil<R> {
    pub async fn validate(
        &self,
        receipt_data: &[u8],
        environment: Environment,
        shared_secret: Option<&str>,
    ) -> Result<ReceiptInfo, ReceiptValidationError> {
        self.receipt_validation_repository
            .validate(receipt_data, environment, shared_secret)
            .await
    }
}

impl ReceiptValidationUtil<ReceiptValidationRepositoryImpl<VerifyReceiptDatasourceImpl>> {
    pub fn new() -> Self {
        Self {
            receipt_validation_repository: ReceiptValidationRepositoryImpl::new(),
        }
    }
}

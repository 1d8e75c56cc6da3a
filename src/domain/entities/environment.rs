use crate::constants::{PRODUCTION_VERIFY_RECEIPT_URL, SANDBOX_VERIFY_RECEIPT_URL};

/// Verification backend a receipt is submitted to.
///
/// Receipts are environment-bound: a receipt issued in the sandbox can only
/// be verified by the sandbox backend, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    pub(crate) fn verify_receipt_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_VERIFY_RECEIPT_URL,
            Environment::Sandbox => SANDBOX_VERIFY_RECEIPT_URL,
        }
    }
}

use base64::{prelude::BASE64_STANDARD, Engine as _};
use serde::Serialize;

/// Request body for the verifyReceipt endpoint:
/// https://developer.apple.com/documentation/appstorereceipts/requestbody
#[derive(Debug, Serialize)]
pub(crate) struct VerifyReceiptRequestModel {
    /// The base64-encoded receipt data.
    #[serde(rename = "receipt-data")]
    pub(crate) receipt_data: String,
    /// The app's shared secret. Only included for receipts that contain
    /// auto-renewable subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<String>,
}

impl VerifyReceiptRequestModel {
    pub(crate) fn new(receipt_data: &[u8], shared_secret: Option<&str>) -> Self {
        Self {
            receipt_data: BASE64_STANDARD.encode(receipt_data),
            password: shared_secret.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_receipt_data_under_kebab_case_key() {
        let model = VerifyReceiptRequestModel::new(b"ABC", None);
        let body = serde_json::to_value(&model).unwrap();
        assert_eq!(body, serde_json::json!({"receipt-data": "QUJD"}));
    }

    #[test]
    fn includes_password_only_when_secret_is_set() {
        let model = VerifyReceiptRequestModel::new(b"ABC", Some("shhh"));
        let body = serde_json::to_value(&model).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"receipt-data": "QUJD", "password": "shhh"})
        );
    }

    #[test]
    fn forwards_empty_receipt_data() {
        let model = VerifyReceiptRequestModel::new(b"", None);
        assert_eq!(model.receipt_data, "");
    }
}

use serde_json::Value;

use crate::domain::entities::receipt_info::ReceiptInfo;

/// Status code returned by the verifyReceipt endpoint:
/// https://developer.apple.com/documentation/appstorereceipts/status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    /// The receipt is valid.
    Valid,
    /// The App Store could not read the JSON object in the request.
    JsonNotReadable,
    /// The data in the `receipt-data` field was malformed or missing.
    MalformedReceiptData,
    /// The receipt could not be authenticated.
    AuthenticationFailed,
    /// The shared secret does not match the shared secret on file for the
    /// account.
    SharedSecretMismatch,
    /// The receipt server is temporarily unavailable.
    ServerUnavailable,
    /// The receipt is valid, but the subscription has expired.
    SubscriptionExpired,
    /// The receipt is from the sandbox environment, but was sent to the
    /// production environment for verification.
    SandboxReceiptOnProduction,
    /// The receipt is from the production environment, but was sent to the
    /// sandbox environment for verification.
    ProductionReceiptOnSandbox,
    /// The response did not carry an integer status field.
    Missing,
    /// A status code outside the documented set.
    Unknown(i64),
}

impl ReceiptStatus {
    /// Reads the `status` field of a decoded verifyReceipt response.
    pub(crate) fn from_response(receipt_info: &ReceiptInfo) -> Self {
        match receipt_info.get("status").and_then(Value::as_i64) {
            Some(code) => Self::from_code(code),
            None => ReceiptStatus::Missing,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            0 => ReceiptStatus::Valid,
            21000 => ReceiptStatus::JsonNotReadable,
            21002 => ReceiptStatus::MalformedReceiptData,
            21003 => ReceiptStatus::AuthenticationFailed,
            21004 => ReceiptStatus::SharedSecretMismatch,
            21005 => ReceiptStatus::ServerUnavailable,
            21006 => ReceiptStatus::SubscriptionExpired,
            21007 => ReceiptStatus::SandboxReceiptOnProduction,
            21008 => ReceiptStatus::ProductionReceiptOnSandbox,
            other => ReceiptStatus::Unknown(other),
        }
    }

    /// Whether this status marks the validation as successful. Everything
    /// except `Valid` is treated as a rejection, including an expired
    /// subscription (the receipt itself may still decode fine).
    pub fn is_valid(&self) -> bool {
        matches!(self, ReceiptStatus::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_documented_status_codes() {
        assert_eq!(ReceiptStatus::from_code(0), ReceiptStatus::Valid);
        assert_eq!(ReceiptStatus::from_code(21000), ReceiptStatus::JsonNotReadable);
        assert_eq!(
            ReceiptStatus::from_code(21002),
            ReceiptStatus::MalformedReceiptData
        );
        assert_eq!(
            ReceiptStatus::from_code(21003),
            ReceiptStatus::AuthenticationFailed
        );
        assert_eq!(
            ReceiptStatus::from_code(21004),
            ReceiptStatus::SharedSecretMismatch
        );
        assert_eq!(
            ReceiptStatus::from_code(21005),
            ReceiptStatus::ServerUnavailable
        );
        assert_eq!(
            ReceiptStatus::from_code(21006),
            ReceiptStatus::SubscriptionExpired
        );
        assert_eq!(
            ReceiptStatus::from_code(21007),
            ReceiptStatus::SandboxReceiptOnProduction
        );
        assert_eq!(
            ReceiptStatus::from_code(21008),
            ReceiptStatus::ProductionReceiptOnSandbox
        );
    }

    #[test]
    fn maps_undocumented_codes_to_unknown() {
        assert_eq!(ReceiptStatus::from_code(21001), ReceiptStatus::Unknown(21001));
        assert_eq!(ReceiptStatus::from_code(-42), ReceiptStatus::Unknown(-42));
    }

    #[test]
    fn only_valid_counts_as_successful() {
        assert!(ReceiptStatus::Valid.is_valid());
        assert!(!ReceiptStatus::SubscriptionExpired.is_valid());
        assert!(!ReceiptStatus::SandboxReceiptOnProduction.is_valid());
        assert!(!ReceiptStatus::Missing.is_valid());
        assert!(!ReceiptStatus::Unknown(1).is_valid());
    }

    #[test]
    fn reads_status_from_response() {
        let receipt_info: ReceiptInfo =
            serde_json::from_str(r#"{"status": 21004, "receipt": {}}"#).unwrap();
        assert_eq!(
            ReceiptStatus::from_response(&receipt_info),
            ReceiptStatus::SharedSecretMismatch
        );
    }

    #[test]
    fn missing_or_non_integer_status_maps_to_missing() {
        let absent: ReceiptInfo = serde_json::from_str(r#"{"receipt": {}}"#).unwrap();
        assert_eq!(ReceiptStatus::from_response(&absent), ReceiptStatus::Missing);

        let non_integer: ReceiptInfo = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(
            ReceiptStatus::from_response(&non_integer),
            ReceiptStatus::Missing
        );
    }
}

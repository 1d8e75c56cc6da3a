use thiserror::Error;

use crate::domain::entities::{receipt_info::ReceiptInfo, receipt_status::ReceiptStatus};

/// Terminal failure of a receipt validation call.
///
/// Exactly one of these (or a success) is produced per `validate` call. The
/// only internal re-attempt is the sandbox redirect, which is part of the
/// verification protocol, not error recovery.
#[derive(Debug, Error)]
pub enum ReceiptValidationError {
    /// The verifyReceipt callout itself failed (connection error, non-2xx
    /// response, or unreadable response body).
    #[error("verifyReceipt callout failed: {reason}")]
    Transport { reason: String },

    /// The callout completed but the response carried no payload.
    #[error("verifyReceipt returned no data")]
    NoRemoteData,

    /// The response payload was not a JSON object. The raw payload is kept
    /// for diagnostics where it is valid UTF-8.
    #[error("verifyReceipt response could not be decoded")]
    JsonDecode { raw: Option<String> },

    /// The response decoded, but its status code marks the receipt as
    /// rejected (or the status field was missing).
    #[error("receipt rejected by verification backend ({status:?})")]
    ReceiptInvalid {
        receipt_info: ReceiptInfo,
        status: ReceiptStatus,
    },
}

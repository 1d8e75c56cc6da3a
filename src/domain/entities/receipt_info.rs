/// Decoded verifyReceipt response, passed through to the caller verbatim.
///
/// Contains at minimum an integer `status` field; on success the backend
/// includes the decoded receipt fields alongside it.
pub type ReceiptInfo = serde_json::Map<String, serde_json::Value>;

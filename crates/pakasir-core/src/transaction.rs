//! # Transaction Types
//!
//! Typed mirrors of the gateway's JSON wire shapes, plus the caller-facing
//! result of a create call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a transaction as reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Canceled,
    Completed,
}

/// Request body shared by create, cancel, and simulate calls
#[derive(Clone, Serialize)]
pub struct RequestBody {
    pub project: String,
    pub order_id: String,
    pub amount: u64,
    pub api_key: String,
}

// api_key stays out of Debug output so request bodies can be logged freely.
impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBody")
            .field("project", &self.project)
            .field("order_id", &self.order_id)
            .field("amount", &self.amount)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// The `payment` object of a successful create response
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentReceipt {
    pub order_id: String,
    pub amount: u64,
    pub payment_method: String,
    pub fee: u64,
    pub received: u64,
    pub total_payment: u64,
    pub payment_number: String,
    pub expired_at: DateTime<Utc>,
    /// Hosted page URL as the gateway reports it. The merge derives its own
    /// URL from the draft, so this field is decoded but never projected.
    #[serde(default)]
    pub payment_url: Option<String>,
}

/// Envelope of `POST /api/transactioncreate/{method}`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    pub payment: PaymentReceipt,
}

/// Response body of cancel and simulate calls
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GatewayAck {
    pub success: bool,
}

/// The `transaction` object of a detail response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub order_id: String,
    pub amount: u64,
    pub payment_method: String,
    pub status: TransactionStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Envelope of `GET /api/transactiondetail`, returned to callers as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub transaction: TransactionDetail,
}

/// Payment breakdown of a freshly created transaction.
///
/// `payment_url` is derived client-side: the gateway base URL joined with
/// the draft's relative payment path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub payment_url: String,
    pub fee: u64,
    pub payment_number: String,
    pub received: u64,
    pub total_payment: u64,
    pub expired_at: DateTime<Utc>,
}

/// Transaction state attached to a result once the gateway reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionState {
    pub status: TransactionStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Caller-facing result of a create call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTransaction {
    /// Slug of the project the transaction was created under
    pub project: String,
    pub order_id: String,
    pub amount: u64,
    /// Wire token of the channel the gateway settled on
    pub payment_method: String,
    pub payment: PaymentDetails,
    /// `None` at creation; the gateway only reports status via detail calls
    pub transaction: Option<TransactionState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_create_response() {
        let raw = r#"{
            "payment": {
                "order_id": "order-123",
                "amount": 100000,
                "payment_method": "qris",
                "fee": 820,
                "received": 99180,
                "total_payment": 100000,
                "payment_number": "00020101021226680016ID",
                "expired_at": "2025-09-19T01:18:49.678622564Z"
            }
        }"#;

        let decoded: CreateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.payment.order_id, "order-123");
        assert_eq!(decoded.payment.amount, 100_000);
        assert_eq!(decoded.payment.fee, 820);
        assert!(decoded.payment.payment_url.is_none());
    }

    #[test]
    fn test_decode_detail_response() {
        let raw = r#"{
            "transaction": {
                "order_id": "order-123",
                "amount": 100000,
                "payment_method": "bni_va",
                "status": "canceled",
                "completed_at": null
            }
        }"#;

        let decoded: DetailResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.transaction.status, TransactionStatus::Canceled);
        assert!(decoded.transaction.completed_at.is_none());
    }

    #[test]
    fn test_decode_completed_detail() {
        let raw = r#"{
            "transaction": {
                "order_id": "order-123",
                "amount": 100000,
                "payment_method": "qris",
                "status": "completed",
                "completed_at": "2025-09-19T01:18:49.678622564Z"
            }
        }"#;

        let decoded: DetailResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.transaction.status, TransactionStatus::Completed);
        assert!(decoded.transaction.completed_at.is_some());
    }

    #[test]
    fn test_decode_ack() {
        let ack: GatewayAck = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.success);
    }

    #[test]
    fn test_request_body_debug_redacts_api_key() {
        let body = RequestBody {
            project: "demo-store".into(),
            order_id: "order-123".into(),
            amount: 100_000,
            api_key: "super-secret".into(),
        };

        let rendered = format!("{body:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

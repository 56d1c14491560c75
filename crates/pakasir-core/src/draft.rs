//! # Transaction Draft
//!
//! Two-phase construction of a create result: [`build_draft`] validates the
//! caller's intent and derives the relative payment-page URL before any
//! network I/O, and [`merge_receipt`] folds the gateway's receipt into the
//! draft afterwards. Both halves are pure and independently testable.

use crate::error::{PakasirError, PakasirResult};
use crate::method::PaymentMethod;
use crate::transaction::{CreatedTransaction, PaymentDetails, PaymentReceipt};

/// Options of a create-transaction call
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Restrict the hosted page to a pure QR code (QRIS/ALL only)
    pub qris_only: bool,
    /// Browser redirect target appended to the payment URL
    pub redirect_url: Option<String>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: show only the QR code on the hosted page
    pub fn qris_only(mut self) -> Self {
        self.qris_only = true;
        self
    }

    /// Builder: redirect the browser after payment
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }
}

/// A validated create request, built before the network call.
///
/// Holds the trimmed order id, the resolved wire method, and the relative
/// payment-page path. Discarded if the call fails.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub project: String,
    pub order_id: String,
    pub amount: u64,
    pub payment_method: &'static str,
    /// Payment page path relative to the gateway base URL
    pub payment_path: String,
}

/// Validate a create request and derive its relative payment URL.
///
/// Fails fast: every validation error surfaces here, before the transport
/// is ever involved. The path template is
/// `<prefix>/<project>/<amount>?order_id=<trimmed>`, with prefix `paypal`
/// for PayPal and `pay` otherwise; `redirect` (percent-encoded) and
/// `qris_only=1` are appended when the options call for them.
pub fn build_draft(
    project: &str,
    order_id: &str,
    method: PaymentMethod,
    amount: u64,
    options: &CreateOptions,
) -> PakasirResult<TransactionDraft> {
    if project.is_empty() {
        return Err(PakasirError::Configuration(
            "project slug must be provided".to_string(),
        ));
    }

    let trimmed = crate::validate::validate_create(order_id, method, amount, options.qris_only)?;

    let prefix = match method {
        PaymentMethod::Paypal => "paypal",
        _ => "pay",
    };

    let mut payment_path = format!("{prefix}/{project}/{amount}?order_id={trimmed}");
    if let Some(redirect) = options.redirect_url.as_deref() {
        payment_path.push_str("&redirect=");
        payment_path.push_str(&urlencoding::encode(redirect));
    }
    if options.qris_only {
        payment_path.push_str("&qris_only=1");
    }

    Ok(TransactionDraft {
        project: project.to_string(),
        order_id: trimmed.to_string(),
        amount,
        payment_method: method.wire_name(),
        payment_path,
    })
}

/// Merge the gateway's receipt into a draft, producing the caller-facing
/// result.
///
/// Every payment field comes from the receipt except `payment_url`, which
/// is the draft's relative path made absolute against `base_url`. The
/// receipt's own `payment_url`, when the gateway sends one, is ignored.
pub fn merge_receipt(
    draft: TransactionDraft,
    receipt: PaymentReceipt,
    base_url: &str,
) -> CreatedTransaction {
    let payment_url = format!("{}/{}", base_url.trim_end_matches('/'), draft.payment_path);

    CreatedTransaction {
        project: draft.project,
        order_id: receipt.order_id,
        amount: receipt.amount,
        payment_method: receipt.payment_method,
        payment: PaymentDetails {
            payment_url,
            fee: receipt.fee,
            payment_number: receipt.payment_number,
            received: receipt.received,
            total_payment: receipt.total_payment,
            expired_at: receipt.expired_at,
        },
        transaction: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn receipt() -> PaymentReceipt {
        PaymentReceipt {
            order_id: "order-123".into(),
            amount: 100_000,
            payment_method: "qris".into(),
            fee: 820,
            received: 99_180,
            total_payment: 100_000,
            payment_number: "00020101021226680016ID".into(),
            expired_at: Utc::now(),
            payment_url: Some("https://app.pakasir.com/hosted/ignored".into()),
        }
    }

    #[test]
    fn test_payment_path_with_redirect_and_qris_only() {
        let options = CreateOptions::new()
            .qris_only()
            .redirect_url("https://r.example/x");
        let draft =
            build_draft("demo-store", "order-123", PaymentMethod::Qris, 100_000, &options).unwrap();

        assert_eq!(
            draft.payment_path,
            "pay/demo-store/100000?order_id=order-123&redirect=https%3A%2F%2Fr.example%2Fx&qris_only=1"
        );
        assert_eq!(draft.payment_method, "qris");
    }

    #[test]
    fn test_payment_path_minimal() {
        let draft = build_draft(
            "demo-store",
            "  order-123  ",
            PaymentMethod::BniVa,
            75_000,
            &CreateOptions::default(),
        )
        .unwrap();

        assert_eq!(draft.order_id, "order-123");
        assert_eq!(draft.payment_path, "pay/demo-store/75000?order_id=order-123");
        assert_eq!(draft.payment_method, "bni_va");
    }

    #[test]
    fn test_paypal_prefix() {
        let draft = build_draft(
            "demo-store",
            "order-123",
            PaymentMethod::Paypal,
            50_000,
            &CreateOptions::default(),
        )
        .unwrap();

        assert!(draft.payment_path.starts_with("paypal/demo-store/50000"));
        assert_eq!(draft.payment_method, "paypal");
    }

    #[test]
    fn test_build_draft_requires_project() {
        let err = build_draft(
            "",
            "order-123",
            PaymentMethod::Qris,
            100_000,
            &CreateOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PakasirError::Configuration(_)));
    }

    #[test]
    fn test_build_draft_fails_fast_on_validation() {
        let err = build_draft(
            "demo-store",
            "ab",
            PaymentMethod::Qris,
            100_000,
            &CreateOptions::default(),
        )
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_merge_derives_absolute_payment_url() {
        let draft = build_draft(
            "demo-store",
            "order-123",
            PaymentMethod::Qris,
            100_000,
            &CreateOptions::default(),
        )
        .unwrap();
        let merged = merge_receipt(draft, receipt(), "https://app.pakasir.com/");

        // Single-slash join, and the receipt's own payment_url is ignored
        assert_eq!(
            merged.payment.payment_url,
            "https://app.pakasir.com/pay/demo-store/100000?order_id=order-123"
        );
        assert_eq!(merged.project, "demo-store");
        assert_eq!(merged.amount, 100_000);
        assert_eq!(merged.payment.fee, 820);
        assert_eq!(merged.payment.received, 99_180);
        assert!(merged.transaction.is_none());
    }

    #[test]
    fn test_merge_prefers_receipt_fields() {
        let draft = build_draft(
            "demo-store",
            "order-123",
            PaymentMethod::All,
            100_000,
            &CreateOptions::default(),
        )
        .unwrap();

        let mut wire = receipt();
        wire.payment_method = "bni_va".into();
        let merged = merge_receipt(draft, wire, "https://app.pakasir.com");

        assert_eq!(merged.payment_method, "bni_va");
    }
}

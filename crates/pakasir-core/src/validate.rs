//! # Input Validation
//!
//! Pure guards run before any network call. The transport must never
//! observe an order id or amount the gateway would reject outright.

use crate::error::{PakasirError, PakasirResult};
use crate::method::PaymentMethod;

/// Minimum order id length after trimming surrounding whitespace
pub const MIN_ORDER_ID_LEN: usize = 5;

/// Minimum transactable amount
pub const MIN_AMOUNT: u64 = 500;

/// Minimum amount the gateway accepts for PayPal transactions
pub const MIN_PAYPAL_AMOUNT: u64 = 10_000;

/// Largest amount that survives the gateway's JSON doubles (2^53 - 1)
pub const MAX_AMOUNT: u64 = 9_007_199_254_740_991;

/// Validate the order id and amount shared by every operation.
///
/// Amounts are unsigned integers of the smallest currency unit, so the
/// fractional and non-finite cases cannot arise; what remains is zero and
/// the JSON-safe ceiling.
///
/// Returns the trimmed order id on success.
pub fn validate_core(order_id: &str, amount: u64) -> PakasirResult<&str> {
    let trimmed = order_id.trim();

    if trimmed.is_empty() {
        return Err(PakasirError::InvalidOrderId(
            "order ID must not be empty".to_string(),
        ));
    }
    if amount == 0 {
        return Err(PakasirError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(PakasirError::InvalidAmount(format!(
            "amount must not exceed {MAX_AMOUNT}"
        )));
    }

    Ok(trimmed)
}

/// Validate the arguments of a create-transaction call.
///
/// Runs [`validate_core`] first, then the creation-specific floors and the
/// `qris_only` compatibility rule. Returns the trimmed order id on success.
pub fn validate_create(
    order_id: &str,
    method: PaymentMethod,
    amount: u64,
    qris_only: bool,
) -> PakasirResult<&str> {
    let trimmed = validate_core(order_id, amount)?;

    if trimmed.len() < MIN_ORDER_ID_LEN {
        return Err(PakasirError::InvalidOrderId(format!(
            "order ID must be at least {MIN_ORDER_ID_LEN} characters long"
        )));
    }
    if amount < MIN_AMOUNT {
        return Err(PakasirError::InvalidAmount(format!(
            "amount must be at least {MIN_AMOUNT}"
        )));
    }
    if method == PaymentMethod::Paypal && amount < MIN_PAYPAL_AMOUNT {
        return Err(PakasirError::InvalidAmount(format!(
            "amount must be at least {MIN_PAYPAL_AMOUNT} for PayPal payments"
        )));
    }
    if qris_only && !method.supports_qris_only() {
        return Err(PakasirError::InvalidMethod(format!(
            "qris_only is only available for the QRIS and ALL methods, not {method}"
        )));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_rejects_empty_order_id() {
        let err = validate_core("   ", 1000).unwrap_err();
        assert!(matches!(err, PakasirError::InvalidOrderId(_)));
    }

    #[test]
    fn test_core_rejects_zero_and_overflow_amounts() {
        assert!(matches!(
            validate_core("order-123", 0).unwrap_err(),
            PakasirError::InvalidAmount(_)
        ));
        assert!(validate_core("order-123", MAX_AMOUNT).is_ok());
        assert!(validate_core("order-123", MAX_AMOUNT + 1).is_err());
    }

    #[test]
    fn test_core_trims_order_id() {
        let trimmed = validate_core("  order-123  ", 1000).unwrap();
        assert_eq!(trimmed, "order-123");
    }

    #[test]
    fn test_create_order_id_minimum_length() {
        let err = validate_create("ab1", PaymentMethod::Qris, 1000, false).unwrap_err();
        assert!(err.to_string().contains("at least 5 characters"));

        // Trimming happens before the length check
        let err = validate_create("  abc  ", PaymentMethod::Qris, 1000, false).unwrap_err();
        assert!(matches!(err, PakasirError::InvalidOrderId(_)));

        assert!(validate_create("abcde", PaymentMethod::Qris, 1000, false).is_ok());
    }

    #[test]
    fn test_create_amount_floor() {
        let err = validate_create("order-123", PaymentMethod::Qris, 499, false).unwrap_err();
        assert!(err.to_string().contains("at least 500"));

        assert!(validate_create("order-123", PaymentMethod::Qris, 500, false).is_ok());
    }

    #[test]
    fn test_create_paypal_floor() {
        let err = validate_create("order-123", PaymentMethod::Paypal, 9_999, false).unwrap_err();
        assert!(err.to_string().contains("at least 10000 for PayPal"));

        assert!(validate_create("order-123", PaymentMethod::Paypal, 10_000, false).is_ok());
        // The PayPal floor does not apply to other methods
        assert!(validate_create("order-123", PaymentMethod::BriVa, 9_999, false).is_ok());
    }

    #[test]
    fn test_create_qris_only_restriction() {
        let err = validate_create("order-123", PaymentMethod::BniVa, 1000, true).unwrap_err();
        assert!(err.to_string().contains("QRIS and ALL"));

        assert!(validate_create("order-123", PaymentMethod::Qris, 1000, true).is_ok());
        assert!(validate_create("order-123", PaymentMethod::All, 1000, true).is_ok());
    }
}

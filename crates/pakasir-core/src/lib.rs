//! # pakasir-core
//!
//! Core types and validation for the Pakasir payment gateway SDK.
//!
//! This crate provides:
//! - `PaymentMethod` and its wire-token mapping
//! - Input validation guards shared by every gateway operation
//! - `TransactionDraft` two-phase construction of create results
//! - Typed mirrors of the gateway's JSON wire shapes
//! - `PakasirError` for typed error handling
//!
//! Everything here is pure: no I/O, no async, no shared state. The
//! `pakasir` crate layers the HTTP client on top.
//!
//! ## Example
//!
//! ```rust
//! use pakasir_core::{build_draft, CreateOptions, PaymentMethod};
//!
//! let options = CreateOptions::new().qris_only();
//! let draft = build_draft("demo-store", "order-123", PaymentMethod::Qris, 100_000, &options)?;
//!
//! assert_eq!(draft.payment_path, "pay/demo-store/100000?order_id=order-123&qris_only=1");
//! # Ok::<(), pakasir_core::PakasirError>(())
//! ```

pub mod draft;
pub mod error;
pub mod method;
pub mod transaction;
pub mod validate;

// Re-exports for convenience
pub use draft::{build_draft, merge_receipt, CreateOptions, TransactionDraft};
pub use error::{PakasirError, PakasirResult};
pub use method::PaymentMethod;
pub use transaction::{
    CreateResponse, CreatedTransaction, DetailResponse, GatewayAck, PaymentDetails,
    PaymentReceipt, RequestBody, TransactionDetail, TransactionState, TransactionStatus,
};
pub use validate::{
    validate_core, validate_create, MAX_AMOUNT, MIN_AMOUNT, MIN_ORDER_ID_LEN, MIN_PAYPAL_AMOUNT,
};

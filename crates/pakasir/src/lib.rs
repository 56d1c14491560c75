//! # pakasir
//!
//! Rust client SDK for the [Pakasir](https://pakasir.com) payment gateway.
//!
//! The client covers the four gateway operations:
//!
//! 1. **create_transaction** - open a transaction and derive the hosted
//!    payment-page URL for the browser
//! 2. **cancel_transaction** - cancel a pending transaction
//! 3. **simulate_payment** - mark a pending transaction as paid (sandbox)
//! 4. **transaction_detail** - fetch the current state of a transaction
//!
//! All validation (order-id length, amount floors, `qris_only`
//! compatibility) happens locally, before any network access.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pakasir::{Client, Config, CreateOptions, PaymentMethod};
//!
//! // Credentials from PAKASIR_PROJECT_SLUG / PAKASIR_API_KEY
//! let client = Client::from_env()?;
//!
//! let created = client
//!     .create_transaction(
//!         "order-123",
//!         PaymentMethod::Qris,
//!         100_000,
//!         CreateOptions::new().qris_only(),
//!     )
//!     .await?;
//!
//! // Send the customer here to pay
//! println!("{}", created.payment.payment_url);
//! ```
//!
//! ## Custom transport
//!
//! The gateway is reached through the [`Transport`] trait; swap it for a
//! pooled or instrumented HTTP stack, or a mock in tests:
//!
//! ```rust,ignore
//! use pakasir::{Client, Config, HttpTransport};
//! use std::sync::Arc;
//!
//! let client = Client::new(Config::new("demo-store", "api-key"))
//!     .with_transport(Arc::new(HttpTransport::with_client(my_reqwest_client)));
//! ```

pub mod client;
pub mod config;
pub mod transport;

// Re-exports
pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL};
pub use transport::{HttpTransport, Transport};

// Core types surface through the SDK crate
pub use pakasir_core::{
    CreateOptions, CreatedTransaction, DetailResponse, GatewayAck, PakasirError, PakasirResult,
    PaymentDetails, PaymentMethod, TransactionDetail, TransactionState, TransactionStatus,
};

/// Gateway-named alias for [`Client`]
pub type Pakasir = Client;

//! # Payment Methods
//!
//! The closed set of payment channels the gateway accepts, plus the two
//! meta-channels `All` and `Qris`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment channel accepted by the gateway.
///
/// `All` lets the gateway choose among every enabled channel. `Qris` is the
/// QR-code channel; its hosted page also presents every enabled channel
/// unless the transaction is created with `qris_only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    All,
    Qris,
    ClimbNiagaVa,
    BniVa,
    SampoernaVa,
    BncVa,
    MaybankVa,
    PermataVa,
    AtmBersamaVa,
    ArthaGrahaVa,
    BriVa,
    Paypal,
}

impl PaymentMethod {
    /// Every supported method, in wire order.
    pub const ALL: [PaymentMethod; 12] = [
        PaymentMethod::All,
        PaymentMethod::Qris,
        PaymentMethod::ClimbNiagaVa,
        PaymentMethod::BniVa,
        PaymentMethod::SampoernaVa,
        PaymentMethod::BncVa,
        PaymentMethod::MaybankVa,
        PaymentMethod::PermataVa,
        PaymentMethod::AtmBersamaVa,
        PaymentMethod::ArthaGrahaVa,
        PaymentMethod::BriVa,
        PaymentMethod::Paypal,
    ];

    /// The lowercase snake_case token used in request paths and bodies.
    ///
    /// `All` resolves to `"qris"`: the gateway's QRIS page doubles as the
    /// all-channels page, and there is no dedicated wire token for it.
    pub fn wire_name(self) -> &'static str {
        match self {
            PaymentMethod::All => "qris",
            PaymentMethod::Qris => "qris",
            PaymentMethod::ClimbNiagaVa => "climb_niaga_va",
            PaymentMethod::BniVa => "bni_va",
            PaymentMethod::SampoernaVa => "sampoerna_va",
            PaymentMethod::BncVa => "bnc_va",
            PaymentMethod::MaybankVa => "maybank_va",
            PaymentMethod::PermataVa => "permata_va",
            PaymentMethod::AtmBersamaVa => "atm_bersama_va",
            PaymentMethod::ArthaGrahaVa => "artha_graha_va",
            PaymentMethod::BriVa => "bri_va",
            PaymentMethod::Paypal => "paypal",
        }
    }

    /// Whether the hosted payment page can be restricted to a pure QR code.
    ///
    /// Only `Qris` and `All` present a QR code to restrict.
    pub fn supports_qris_only(self) -> bool {
        matches!(self, PaymentMethod::Qris | PaymentMethod::All)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

pub mod admin;
pub mod webhooks;

pub use self::{admin::*, webhooks::*};
use crate::connector;

/// Connector integrations with a registered webhook verification capability.
///
/// Names are matched case-insensitively, so `connector=Stripe` and
/// `connector=stripe` resolve to the same integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Connector {
    Adyen,
    Checkout,
    Dwolla,
    Stripe,
}

impl Connector {
    /// Returns the webhook verification capability registered for this
    /// connector. The registry is closed: adding a connector means one new
    /// module and one new match arm.
    pub fn verifier(&self) -> &'static dyn IncomingWebhook {
        match self {
            Self::Adyen => &connector::Adyen,
            Self::Checkout => &connector::Checkout,
            Self::Dwolla => &connector::Dwolla,
            Self::Stripe => &connector::Stripe,
        }
    }
}

pub mod utils;

pub mod adyen;
pub mod checkout;
pub mod dwolla;
pub mod stripe;

pub use self::{adyen::Adyen, checkout::Checkout, dwolla::Dwolla, stripe::Stripe};

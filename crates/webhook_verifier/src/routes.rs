pub mod admin;
pub mod app;
pub mod health;
pub mod webhooks;

pub use self::app::{AppState, Health, MerchantConnectorAccount, Webhooks};

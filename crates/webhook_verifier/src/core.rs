pub mod admin;
pub mod errors;
pub mod webhooks;

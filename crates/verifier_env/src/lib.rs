#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Environment of the webhook verification service: logger, basic config,
//! environment awareness.
//!

pub mod config;
pub mod env;
pub mod logger;

#[doc(inline)]
pub use logger::*;
pub use tracing;
pub use tracing_actix_web;
pub use tracing_appender;

#[doc(inline)]
pub use self::env::*;

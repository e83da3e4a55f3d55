#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types and traits for secret management which help ensure secrets
//! (webhook signing keys, connector credentials) are not accidentally logged,
//! serialized, or otherwise exposed.
//!

mod abs;
mod secret;
mod strategy;

pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};
pub use secret::Secret;
pub use strategy::{Strategy, WithType, WithoutType};

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::{Deserialize, SerializableSecret, Serialize};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}

//!
//! Serde-related.
//!
//! Deserialization is available for any inner type; serialization only for
//! inner types that opt in via [`SerializableSecret`], so a plain
//! `Secret<String>` can never leak into a response body.
//!

pub use serde::{de, Deserialize, Serialize, Serializer};

use crate::{PeekInterface, Secret, Strategy};

/// Marker trait for inner types that may be serialized while wrapped.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for serde_json::Value {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: Deserialize<'de>,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}

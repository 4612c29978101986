//!
//! Serde-related.
//!

pub use serde::{de, Deserialize, Serialize};

use crate::{Secret, Strategy};

/// Marker trait for secret types which can be [`Serialize`]-d by [`serde`].
///
/// When the `serde` feature of this crate is enabled and a type is marked
/// with this trait, `Secret<T>` receives a [`Serialize`] impl which exposes
/// the inner value. Serialization is the point where a secret deliberately
/// crosses a boundary (an outgoing connector request, a wire response), so
/// the impl is opt-in per inner type rather than blanket.
///
/// (NOTE: all types which impl `DeserializeOwned` receive a [`Deserialize`]
/// impl.)
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for serde_json::Value {}
impl SerializableSecret for String {}
impl SerializableSecret for u8 {}
impl SerializableSecret for u16 {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: Clone + de::DeserializeOwned + Sized,
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
    T: SerializableSecret + Sized,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use crate::PeekInterface;

        self.peek().serialize(serializer)
    }
}

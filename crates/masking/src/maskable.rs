//!
//! Optionally masked data, used where a collection mixes sensitive and
//! non-sensitive values of the same type (e.g. outgoing request headers).
//!

use crate::{ExposeInterface, Secret};

/// A value which is either masked behind a [`Secret`] or carried in the open.
#[derive(Clone, Eq, PartialEq)]
pub enum Maskable<T: Eq + PartialEq + Clone> {
    /// Variant which masks the data by wrapping in a Secret
    Masked(Secret<T>),
    /// Variant which doesn't mask the data
    Normal(T),
}

impl<T: std::fmt::Debug + Clone + Eq + PartialEq> std::fmt::Debug for Maskable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Masked(secret_value) => std::fmt::Debug::fmt(secret_value, f),
            Self::Normal(value) => std::fmt::Debug::fmt(value, f),
        }
    }
}

impl<T: Eq + PartialEq + Clone + std::hash::Hash> std::hash::Hash for Maskable<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Masked(value) => crate::PeekInterface::peek(value).hash(state),
            Self::Normal(value) => value.hash(state),
        }
    }
}

impl<T: Eq + PartialEq + Clone> Maskable<T> {
    /// Get the inner data while consuming self
    pub fn into_inner(self) -> T {
        match self {
            Self::Masked(inner_secret) => inner_secret.expose(),
            Self::Normal(inner) => inner,
        }
    }
}

/// Conversion into a [`Maskable`] marked as sensitive.
pub trait Mask {
    /// The inner type carried by the resulting `Maskable`.
    type Output: Eq + Clone + PartialEq;

    /// Wrap self as a masked value.
    fn into_masked(self) -> Maskable<Self::Output>;
}

impl Mask for String {
    type Output = Self;

    fn into_masked(self) -> Maskable<Self::Output> {
        Maskable::Masked(self.into())
    }
}

impl Mask for Secret<String> {
    type Output = String;

    fn into_masked(self) -> Maskable<Self::Output> {
        Maskable::Masked(self)
    }
}

impl<T: Eq + PartialEq + Clone> From<T> for Maskable<T> {
    fn from(value: T) -> Self {
        Self::Normal(value)
    }
}

impl From<&str> for Maskable<String> {
    fn from(value: &str) -> Self {
        Self::Normal(value.to_string())
    }
}

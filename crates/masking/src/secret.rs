//!
//! Structure describing secret.
//!

use std::{fmt, marker::PhantomData};

use crate::{strategy::Strategy, PeekInterface};

///
/// A wrapper around a secret value.
///
/// The inner value never takes part in `Debug` or `Display` output; the
/// masking [`Strategy`] chosen as the second type parameter decides what is
/// rendered instead. Read access goes through
/// [`peek()`][PeekInterface::peek], ownership transfer through
/// [`expose()`][crate::ExposeInterface::expose].
///
/// ## Masking
///
/// ```
/// use masking::{Secret, Strategy};
/// use std::fmt;
///
/// struct Last4;
///
/// impl Strategy<String> for Last4 {
///     fn fmt(val: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "****{}", &val[val.len().saturating_sub(4)..])
///     }
/// }
///
/// let phone: Secret<String, Last4> = Secret::new("600123456".to_string());
/// assert_eq!("****3456", format!("{:?}", phone));
/// ```
///
pub struct Secret<S, I = crate::WithType>
where
    I: Strategy<S>,
{
    pub(crate) inner_secret: S,
    pub(crate) marker: PhantomData<I>,
}

impl<S, I> Secret<S, I>
where
    I: Strategy<S>,
{
    /// Take ownership of a secret value
    pub fn new(secret: S) -> Self {
        Self {
            inner_secret: secret,
            marker: PhantomData,
        }
    }
}

impl<S, I> PeekInterface<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn peek(&self) -> &S {
        &self.inner_secret
    }
}

impl<S, I> From<S> for Secret<S, I>
where
    I: Strategy<S>,
{
    fn from(secret: S) -> Self {
        Self::new(secret)
    }
}

impl<S, I> Clone for Secret<S, I>
where
    S: Clone,
    I: Strategy<S>,
{
    fn clone(&self) -> Self {
        Self {
            inner_secret: self.inner_secret.clone(),
            marker: PhantomData,
        }
    }
}

impl<S, I> PartialEq for Secret<S, I>
where
    S: PartialEq,
    I: Strategy<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.peek().eq(other.peek())
    }
}

impl<S, I> Eq for Secret<S, I>
where
    S: Eq,
    I: Strategy<S>,
{
}

impl<S, I> fmt::Debug for Secret<S, I>
where
    I: Strategy<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        I::fmt(&self.inner_secret, f)
    }
}

impl<S, I> Default for Secret<S, I>
where
    S: Default,
    I: Strategy<S>,
{
    fn default() -> Self {
        S::default().into()
    }
}

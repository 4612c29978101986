#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Personal Identifiable Information protection. Values wrapped in [`Secret`]
//! render masked through `Debug`/`Display`, so accidental logging does not
//! leak customer data or credentials. Access to the inner value is explicit,
//! through [`PeekInterface`] or [`ExposeInterface`].
//!

mod strategy;

pub use strategy::{Strategy, WithType, WithoutType};

mod abs;
pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};

mod secret;
pub use secret::Secret;

#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "serde")]
pub use crate::serde::{Deserialize, SerializableSecret, Serialize};

pub mod maskable;
pub use maskable::{Mask, Maskable};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}

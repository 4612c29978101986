#![forbid(unsafe_code)]

pub mod configs;
pub mod connector;
pub(crate) mod consts;
pub mod core;
pub mod cors;
pub mod db;
pub mod events;
pub mod logger;
pub mod routes;
pub mod services;
pub mod types;

/// Header Constants
pub mod headers {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
    pub const X_GOOG_API_KEY: &str = "x-goog-api-key";
}

pub mod pii {
    //! Personal Identifiable Information protection.

    pub use common_utils::pii::{Email, PhoneNumber};
    #[doc(inline)]
    pub use masking::*;
}

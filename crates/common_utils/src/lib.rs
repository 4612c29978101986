#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::panic,
    clippy::unwrap_used
)]

//! Utilities shared across the storefront workspace: identifier generation,
//! date-time helpers, parsing/encoding extension traits and PII wrappers.

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod pii;
pub mod validation;

/// Date-time utilities.
pub mod date_time {
    use time::{OffsetDateTime, PrimitiveDateTime};

    /// Create a new [`PrimitiveDateTime`] with the current date and time in UTC.
    pub fn now() -> PrimitiveDateTime {
        let utc_date_time = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }

    /// Milliseconds elapsed since the Unix epoch.
    pub fn now_unix_millis() -> i128 {
        OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
    }
}

/// Generate a nanoid with the given prefix and length
#[inline]
pub fn generate_id(length: usize, prefix: &str) -> String {
    format!("{}_{}", prefix, nanoid::nanoid!(length, &consts::ALPHABETS))
}

/// Generate a nanoid with the given prefix and a default length
#[inline]
pub fn generate_id_with_default_len(prefix: &str) -> String {
    let len = consts::ID_LENGTH;
    format!("{}_{}", prefix, nanoid::nanoid!(len, &consts::ALPHABETS))
}

/// Generate a human-readable order reference: the given prefix, the current
/// Unix time in milliseconds and an uppercase alphanumeric suffix, joined by
/// hyphens (e.g. `COD-1700000000000-8M1KT0Q2Z`).
pub fn generate_order_id(prefix: &str) -> String {
    let suffix_len = consts::ORDER_ID_SUFFIX_LENGTH;
    format!(
        "{}-{}-{}",
        prefix,
        date_time::now_unix_millis(),
        nanoid::nanoid!(suffix_len, &consts::ORDER_ID_ALPHABETS)
    )
}

#[cfg(test)]
mod id_tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_id_carries_prefix_and_length() {
        let id = generate_id(10, "pay");
        let (prefix, rest) = id.split_once('_').unwrap();

        assert_eq!(prefix, "pay");
        assert_eq!(rest.len(), 10);
        assert!(rest.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn order_id_has_expected_shape() {
        let id = generate_order_id("COD");
        let mut parts = id.split('-');

        assert_eq!(parts.next(), Some("COD"));

        let millis = parts.next().unwrap();
        assert!(!millis.is_empty());
        assert!(millis.chars().all(|c| c.is_ascii_digit()));

        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), consts::ORDER_ID_SUFFIX_LENGTH);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

        assert_eq!(parts.next(), None);
    }

    #[test]
    fn order_ids_are_distinct_across_rapid_generation() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_order_id("COD")).collect();
        assert_eq!(ids.len(), 10_000);
    }
}

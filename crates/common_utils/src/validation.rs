//! Custom validations for some shared types.

use std::sync::LazyLock;

use error_stack::report;
use regex::Regex;

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
};

/// Performs a simple validation against a provided email address.
pub fn validate_email(email: &str) -> CustomResult<(), ValidationError> {
    static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
        Regex::new(
            r"^(?i)[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
        )
        .ok()
    });
    let email_regex = match EMAIL_REGEX.as_ref() {
        Some(regex) => Ok(regex),
        None => Err(report!(ValidationError::InvalidValue {
            message: "Invalid regex expression".into()
        })),
    }?;

    if email.is_empty() || email.chars().count() > consts::EMAIL_MAX_LENGTH {
        return Err(report!(ValidationError::InvalidValue {
            message: "Email address is either empty or exceeds maximum allowed length".into()
        }));
    }

    if !email_regex.is_match(email) {
        return Err(report!(ValidationError::InvalidValue {
            message: "Invalid email address format".into()
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        let result = validate_email("abc@example.com");
        assert!(result.is_ok());

        let result = validate_email("abc+1@example.com");
        assert!(result.is_ok());

        let result = validate_email("");
        assert!(result.is_err());

        let result = validate_email("abc@example");
        assert!(result.is_err());

        let result = validate_email("plainly-not-an-email");
        assert!(result.is_err());
    }
}

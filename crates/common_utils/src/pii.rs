//! Personal Identifiable Information protection.

use std::{fmt, str::FromStr};

use error_stack::ResultExt;
use masking::{PeekInterface, Secret, Strategy, WithType};

use crate::{
    errors::{self, ValidationError},
    validation::validate_email,
};

/// Type alias for serde_json value which has Secret Information
pub type SecretSerdeValue = Secret<serde_json::Value>;

/// Strategy for masking a PhoneNumber
#[derive(Debug)]
pub enum PhoneNumberStrategy {}

impl<T> Strategy<T> for PhoneNumberStrategy
where
    T: AsRef<str> + std::fmt::Debug,
{
    /// Masks everything but the last 4 digits
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        if let Some(last4) = val_str.len().checked_sub(4).and_then(|i| val_str.get(i..)) {
            write!(f, "{}{}", "*".repeat(val_str.len() - last4.len()), last4)
        } else {
            WithType::fmt(val, f)
        }
    }
}

/// Phone number
pub type PhoneNumber = Secret<String, PhoneNumberStrategy>;

/// Strategy for masking Email
#[derive(Debug)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str> + std::fmt::Debug,
{
    /// Masks the local part, keeps the domain readable
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

/// Email address, validated on construction.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub struct Email(Secret<String, EmailStrategy>);

impl Email {
    /// Read-only access to the address.
    pub fn peek(&self) -> &str {
        self.0.peek()
    }
}

impl masking::ExposeInterface<Secret<String, EmailStrategy>> for Email {
    fn expose(self) -> Secret<String, EmailStrategy> {
        self.0
    }
}

impl FromStr for Email {
    type Err = error_stack::Report<ValidationError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_email(value)?;
        Ok(Self(Secret::new(value.to_owned())))
    }
}

impl TryFrom<String> for Email {
    type Error = error_stack::Report<errors::ParsingError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).change_context(errors::ParsingError::EmailParsingError)
    }
}

#[cfg(test)]
mod pii_masking_strategy_tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_valid_email_masking() {
        let secret: Secret<String, EmailStrategy> = Secret::new("myemail@gmail.com".to_string());
        assert_eq!("*******@gmail.com", format!("{secret:?}"));
    }

    #[test]
    fn test_invalid_email_masking() {
        let secret: Secret<String, EmailStrategy> = Secret::new("myemailgmail.com".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
    }

    #[test]
    fn test_phone_number_masking() {
        let secret: PhoneNumber = Secret::new("600123456".to_string());
        assert_eq!("*****3456", format!("{secret:?}"));
    }

    #[test]
    fn test_email_parsing() {
        assert!(Email::from_str("ana@example.com").is_ok());
        assert!(Email::from_str("not-an-email").is_err());

        let email: Email = serde_json::from_str(r#""ana@example.com""#).unwrap();
        assert_eq!(email.peek(), "ana@example.com");

        assert!(serde_json::from_str::<Email>(r#""nope""#).is_err());
    }
}

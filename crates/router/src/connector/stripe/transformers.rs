use api_models::{enums, payments};
use common_utils::pii;
use masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

use crate::{consts, core::errors, types};

pub struct StripeAuthType {
    pub(super) api_key: Secret<String>,
}

impl TryFrom<&types::ConnectorAuthType> for StripeAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(item: &types::ConnectorAuthType) -> Result<Self, Self::Error> {
        let types::ConnectorAuthType::HeaderKey { api_key } = item;
        Ok(Self {
            api_key: api_key.clone(),
        })
    }
}

// Stripe Types Definition
// PAYMENT
// PaymentIntentRequest

/// Form-urlencoded body of a PaymentIntent create call. Stripe expects
/// nested metadata as bracketed keys, so the denormalized order fields are
/// renamed accordingly.
#[derive(Debug, Eq, PartialEq, Serialize)]
pub struct PaymentIntentRequest {
    pub amount: i64, //amount in cents, hence passed as integer
    pub currency: String,
    #[serde(rename = "metadata[customer_name]")]
    pub metadata_customer_name: Secret<String>,
    #[serde(rename = "metadata[customer_email]")]
    pub metadata_customer_email: pii::Email,
    #[serde(rename = "metadata[customer_phone]")]
    pub metadata_customer_phone: pii::PhoneNumber,
    #[serde(rename = "metadata[shipping_address]")]
    pub metadata_shipping_address: Secret<String>,
    #[serde(rename = "metadata[personalization]")]
    pub metadata_personalization: String,
    #[serde(rename = "metadata[product]")]
    pub metadata_product: String,
    pub receipt_email: pii::Email,
}

impl TryFrom<&payments::PaymentsCreateRequest> for PaymentIntentRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(item: &payments::PaymentsCreateRequest) -> Result<Self, Self::Error> {
        let shipping_address = format!(
            "{}, {} {}",
            item.address.peek(),
            item.postal.peek(),
            item.city
        );
        Ok(Self {
            amount: item.amount,
            currency: enums::Currency::Eur.to_string(),
            metadata_customer_name: item.name.clone(),
            metadata_customer_email: item.email.clone(),
            metadata_customer_phone: item.phone.clone(),
            metadata_shipping_address: Secret::new(shipping_address),
            metadata_personalization: item
                .personalization
                .clone()
                .filter(|personalization| !personalization.trim().is_empty())
                .unwrap_or_else(|| consts::DEFAULT_PERSONALIZATION.to_string()),
            metadata_product: consts::PRODUCT_NAME.to_string(),
            receipt_email: item.email.clone(),
        })
    }
}

// PaymentIntentResponse

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StripePaymentStatus {
    #[default]
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct PaymentIntentResponse {
    pub id: String,
    pub object: String,
    pub amount: i64,
    pub currency: String,
    pub status: StripePaymentStatus,
    pub client_secret: Secret<String>,
}

impl From<PaymentIntentResponse> for types::PaymentsResponseData {
    fn from(item: PaymentIntentResponse) -> Self {
        Self {
            payment_id: item.id,
            client_secret: item.client_secret,
            amount: item.amount,
        }
    }
}

#[derive(Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct ErrorDetails {
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
    pub decline_code: Option<String>,
}

#[derive(Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use common_utils::ext_traits::{BytesExt, Encode};

    use super::*;

    fn checkout_request() -> payments::PaymentsCreateRequest {
        payments::PaymentsCreateRequest {
            amount: 2999,
            name: Secret::new("Ana".to_string()),
            email: pii::Email::from_str("a@x.com").unwrap(),
            phone: Secret::new("600000000".to_string()),
            address: Secret::new("Calle 1".to_string()),
            postal: Secret::new("28001".to_string()),
            city: "Madrid".to_string(),
            personalization: None,
            idempotency_key: None,
        }
    }

    #[test]
    fn intent_request_carries_amount_unmodified() {
        let intent = PaymentIntentRequest::try_from(&checkout_request()).unwrap();

        assert_eq!(intent.amount, 2999);
        assert_eq!(intent.currency, "eur");
    }

    #[test]
    fn intent_request_denormalizes_order_metadata() {
        let intent = PaymentIntentRequest::try_from(&checkout_request()).unwrap();

        assert_eq!(
            intent.metadata_shipping_address.peek(),
            "Calle 1, 28001 Madrid"
        );
        assert_eq!(intent.metadata_personalization, "Sin personalización");
        assert_eq!(intent.metadata_product, "Porta-Dardos Diana");
        assert_eq!(intent.receipt_email.peek(), "a@x.com");
    }

    #[test]
    fn blank_personalization_falls_back_to_placeholder() {
        let mut request = checkout_request();
        request.personalization = Some("   ".to_string());

        let intent = PaymentIntentRequest::try_from(&request).unwrap();
        assert_eq!(intent.metadata_personalization, "Sin personalización");
    }

    #[test]
    fn intent_request_url_encodes_with_bracketed_metadata_keys() {
        let intent = PaymentIntentRequest::try_from(&checkout_request()).unwrap();
        let encoded = intent.url_encode().unwrap();

        assert!(encoded.contains("amount=2999"));
        assert!(encoded.contains("metadata%5Bcustomer_name%5D=Ana"));
        assert!(encoded.contains("receipt_email=a%40x.com"));
    }

    #[test]
    fn error_response_parses_stripe_shape() {
        let body = bytes::Bytes::from_static(
            br#"{"error":{"code":"amount_too_small","type":"invalid_request_error","message":"Amount must be at least 50 cents"}}"#,
        );
        let response: ErrorResponse = body.parse_struct("ErrorResponse").unwrap();

        assert_eq!(response.error.code.as_deref(), Some("amount_too_small"));
        assert_eq!(
            response.error.message.as_deref(),
            Some("Amount must be at least 50 cents")
        );
    }
}

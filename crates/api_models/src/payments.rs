use common_utils::pii;
use masking::Secret;
use serde::{Deserialize, Serialize};

/// Checkout submission for a card payment.
///
/// `amount` is in minor currency units (cents) and is forwarded to the
/// processor unmodified. `idempotency_key` is a client-generated token; when
/// present it is forwarded to the processor so a retried submission does not
/// create a second intent.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PaymentsCreateRequest {
    pub amount: i64,
    pub name: Secret<String>,
    pub email: pii::Email,
    pub phone: pii::PhoneNumber,
    pub address: Secret<String>,
    pub postal: Secret<String>,
    pub city: String,
    pub personalization: Option<String>,
    pub idempotency_key: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PaymentsCreateResponse {
    /// Opaque token the frontend hands to the processor's JS SDK to complete
    /// the payment.
    #[serde(rename = "clientSecret")]
    pub client_secret: Secret<String>,
}

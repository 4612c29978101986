use common_utils::pii;
use masking::Secret;
use serde::{Deserialize, Serialize};

/// Checkout submission for a cash-on-delivery order. Same shape as a card
/// checkout, minus any payment credential.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrdersCreateRequest {
    pub name: Secret<String>,
    pub email: pii::Email,
    pub phone: pii::PhoneNumber,
    pub address: Secret<String>,
    pub postal: Secret<String>,
    pub city: String,
    pub personalization: Option<String>,
    pub amount: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrdersCreateResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

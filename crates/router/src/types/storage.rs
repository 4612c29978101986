use api_models::enums;
use common_utils::pii;
use masking::Secret;
use time::PrimitiveDateTime;

/// A recorded customer order.
///
/// The identifier is generated before insertion; storage enforces its
/// uniqueness only within this process (see `db::MockDb`).
#[derive(Clone, Debug)]
pub struct Order {
    pub order_id: String,
    pub customer_name: Secret<String>,
    pub email: pii::Email,
    pub phone: pii::PhoneNumber,
    pub address: Secret<String>,
    pub postal: Secret<String>,
    pub city: String,
    pub personalization: String,
    /// Minor currency units, end to end.
    pub amount: i64,
    pub currency: enums::Currency,
    pub payment_method: enums::PaymentMethod,
    pub created_at: PrimitiveDateTime,
}

use api_models::{enums, orders as orders_api};
use time::format_description::well_known::Rfc3339;
use tracing::instrument;

use crate::{
    consts,
    core::errors::{ApiErrorResponse, RouterResponse},
    events,
    routes::AppState,
    services::ApplicationResponse,
    types::storage,
};

/// Record a cash-on-delivery order for manual fulfillment.
///
/// The identifier is acknowledged to the customer only after the storage
/// write is confirmed; a failed write surfaces as a server error with no
/// order id, so the client never holds a reference to an unrecorded order.
#[instrument(skip_all)]
pub async fn create_order(
    state: AppState,
    req: orders_api::OrdersCreateRequest,
) -> RouterResponse<orders_api::OrdersCreateResponse> {
    let order_id = common_utils::generate_order_id(consts::ORDER_ID_PREFIX);

    let order = storage::Order {
        order_id,
        customer_name: req.name,
        email: req.email,
        phone: req.phone,
        address: req.address,
        postal: req.postal,
        city: req.city,
        personalization: req
            .personalization
            .filter(|personalization| !personalization.trim().is_empty())
            .unwrap_or_else(|| consts::DEFAULT_PERSONALIZATION.to_string()),
        amount: req.amount,
        currency: enums::Currency::Eur,
        payment_method: enums::PaymentMethod::CashOnDelivery,
        created_at: common_utils::date_time::now(),
    };

    let order = state
        .store
        .insert_order(order)
        .await
        .map_err(|err| err.change_context(ApiErrorResponse::InternalServerError))?;

    state.event_handler.log_event(
        events::OrderCreated {
            order_id: order.order_id.clone(),
            payment_method: order.payment_method,
            amount: format_minor_units(order.amount),
            product: consts::PRODUCT_NAME.to_string(),
            created_at: order
                .created_at
                .assume_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
        .into_event(),
    );

    Ok(ApplicationResponse::Json(orders_api::OrdersCreateResponse {
        order_id: order.order_id,
    }))
}

/// `2999` -> `"29.99€"`, staying in integer arithmetic throughout.
fn format_minor_units(amount: i64) -> String {
    format!("{}.{:02}€", amount / 100, (amount % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::format_minor_units;

    #[test]
    fn minor_units_format_without_float_arithmetic() {
        assert_eq!(format_minor_units(2999), "29.99€");
        assert_eq!(format_minor_units(100), "1.00€");
        assert_eq!(format_minor_units(5), "0.05€");
        assert_eq!(format_minor_units(1090), "10.90€");
    }
}

use api_models::{enums, payments as payments_api};
use error_stack::report;
use tracing::instrument;

use crate::{
    connector,
    core::errors::{self, ApiErrorResponse, RouterResponse},
    events,
    routes::AppState,
    services::{self, ApplicationResponse},
    types,
};

/// Create a charge intent at the payment processor and relay its client
/// secret. The amount is forwarded unmodified, in minor units.
#[instrument(skip_all)]
pub async fn create_intent(
    state: AppState,
    req: payments_api::PaymentsCreateRequest,
) -> RouterResponse<payments_api::PaymentsCreateResponse> {
    let api_key = state
        .conf
        .stripe
        .api_key
        .clone()
        .ok_or_else(|| report!(ApiErrorResponse::ConfigurationError { service: "Stripe" }))?;

    let router_data = types::RouterData {
        connector_auth_type: types::ConnectorAuthType::HeaderKey { api_key },
        request: req,
    };

    let connector = connector::Stripe;
    let response: types::PaymentsResponseData = services::execute_connector_processing_step(
        &*state.api_client,
        &connector,
        &router_data,
        &state.conf.connectors,
    )
    .await
    .map_err(|err| {
        let api_error = match err.current_context() {
            errors::ConnectorError::ProcessingStepFailed(Some(error_response)) => {
                ApiErrorResponse::ExternalConnectorError {
                    message: error_response.message.clone(),
                    details: error_response.reason.clone(),
                }
            }
            _ => ApiErrorResponse::InternalServerError,
        };
        err.change_context(api_error)
    })?;

    state.event_handler.log_event(
        events::PaymentIntentCreated {
            payment_id: response.payment_id.clone(),
            amount: response.amount,
            currency: enums::Currency::Eur,
        }
        .into_event(),
    );

    Ok(ApplicationResponse::Json(
        payments_api::PaymentsCreateResponse {
            client_secret: response.client_secret,
        },
    ))
}

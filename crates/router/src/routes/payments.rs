use actix_web::web;
use tracing::instrument;

use super::app::AppState;
use crate::{
    core::payments,
    services::api,
    types::Flow,
};

#[instrument(skip_all, fields(flow = ?Flow::PaymentsCreate))]
pub async fn payments_create(
    state: web::Data<AppState>,
    json_payload: web::Json<api_models::payments::PaymentsCreateRequest>,
) -> impl actix_web::Responder {
    let flow = Flow::PaymentsCreate;
    Box::pin(api::server_wrap(
        flow,
        state,
        json_payload.into_inner(),
        |state, req| payments::create_intent(state, req),
    ))
    .await
}

use actix_web::web;
use tracing::instrument;

use super::app::AppState;
use crate::{
    core::orders,
    services::api,
    types::Flow,
};

#[instrument(skip_all, fields(flow = ?Flow::OrdersCreate))]
pub async fn orders_create(
    state: web::Data<AppState>,
    json_payload: web::Json<api_models::orders::OrdersCreateRequest>,
) -> impl actix_web::Responder {
    let flow = Flow::OrdersCreate;
    Box::pin(api::server_wrap(
        flow,
        state,
        json_payload.into_inner(),
        |state, req| orders::create_order(state, req),
    ))
    .await
}

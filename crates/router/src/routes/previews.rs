use actix_web::web;
use tracing::instrument;

use super::app::AppState;
use crate::{
    core::previews,
    services::api,
    types::Flow,
};

#[instrument(skip_all, fields(flow = ?Flow::PreviewsGenerate))]
pub async fn previews_generate(
    state: web::Data<AppState>,
    json_payload: web::Json<api_models::previews::PreviewsGenerateRequest>,
) -> impl actix_web::Responder {
    let flow = Flow::PreviewsGenerate;
    Box::pin(api::server_wrap(
        flow,
        state,
        json_payload.into_inner(),
        |state, req| previews::generate(state, req),
    ))
    .await
}

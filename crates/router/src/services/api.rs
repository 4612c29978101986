pub mod client;
pub mod request;

use std::{fmt::Debug, future::Future, time::Instant};

use actix_web::{body, web, HttpResponse, ResponseError};
pub use client::{ApiClient, MockApiClient, ProxyClient};
use error_stack::{report, ResultExt};
use masking::Maskable;
pub use request::{ContentType, Method, Request, RequestBody, RequestBuilder};
use serde::Serialize;

use crate::{
    configs::settings::Connectors,
    core::errors::{self, CustomResult, RouterResponse},
    logger,
    routes::AppState,
    types,
};

/// Behavior common to every connector: identity, base URL and credential
/// header construction.
pub trait ConnectorCommon {
    fn id(&self) -> &'static str;

    fn common_get_content_type(&self) -> &'static str {
        mime::APPLICATION_JSON.essence_str()
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    fn get_auth_header(
        &self,
        auth_type: &types::ConnectorAuthType,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError>;
}

/// One outbound flow against one connector: how to assemble the request and
/// how to read both the success and the failure response.
pub trait ConnectorIntegration<Req, Resp>: Send + Sync {
    fn get_headers(
        &self,
        _req: &types::RouterData<Req>,
        _connectors: &Connectors,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        Ok(vec![])
    }

    fn get_content_type(&self) -> &'static str {
        mime::APPLICATION_JSON.essence_str()
    }

    fn get_url(
        &self,
        _req: &types::RouterData<Req>,
        _connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(String::new())
    }

    fn get_request_body(
        &self,
        _req: &types::RouterData<Req>,
    ) -> CustomResult<Option<RequestBody>, errors::ConnectorError> {
        Ok(None)
    }

    fn build_request(
        &self,
        req: &types::RouterData<Req>,
        connectors: &Connectors,
    ) -> CustomResult<Option<Request>, errors::ConnectorError>;

    fn handle_response(
        &self,
        data: &types::RouterData<Req>,
        res: types::Response,
    ) -> CustomResult<Resp, errors::ConnectorError>;

    fn get_error_response(
        &self,
        res: types::Response,
    ) -> CustomResult<types::ErrorResponse, errors::ConnectorError> {
        Ok(types::ErrorResponse {
            status_code: res.status_code,
            code: res.status_code.to_string(),
            message: String::from_utf8(res.response.to_vec())
                .unwrap_or_else(|_| "Unrepresentable connector error response".to_string()),
            reason: None,
        })
    }
}

/// Handle one flow by interacting with the connector module: build the
/// request, send it, and dispatch the response to the success or error path.
pub async fn execute_connector_processing_step<Req, Resp>(
    api_client: &dyn ApiClient,
    connector_integration: &dyn ConnectorIntegration<Req, Resp>,
    req: &types::RouterData<Req>,
    connectors: &Connectors,
) -> CustomResult<Resp, errors::ConnectorError>
where
    Req: Debug,
    Resp: Debug,
{
    let request = connector_integration
        .build_request(req, connectors)?
        .ok_or_else(|| report!(errors::ConnectorError::RequestEncodingFailed))
        .attach_printable("Connector did not produce a request for this flow")?;

    let response = api_client
        .send_request(request, None)
        .await
        .change_context(errors::ConnectorError::ProcessingStepFailed(None))?;

    logger::debug!(connector_response_status=?response.status_code);

    match response.status_code {
        200..=299 => connector_integration.handle_response(req, response),
        _ => {
            let error_response = connector_integration.get_error_response(response)?;
            Err(report!(errors::ConnectorError::ProcessingStepFailed(Some(
                error_response
            ))))
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum ApplicationResponse<R> {
    Json(R),
    StatusOk,
    TextPlain(String),
}

/// Wraps a core flow: logs entry and exit with latency, runs the flow, and
/// converts its outcome into an HTTP response.
pub async fn server_wrap<T, Q, F, Fut>(
    flow: types::Flow,
    state: web::Data<AppState>,
    payload: T,
    func: F,
) -> HttpResponse
where
    F: Fn(AppState, T) -> Fut,
    Fut: Future<Output = RouterResponse<Q>>,
    Q: Serialize + Debug,
    T: Debug,
{
    let start_instant = Instant::now();
    logger::info!(flow = %flow, "Begin request");

    let response = match func(state.get_ref().clone(), payload).await {
        Ok(ApplicationResponse::Json(res)) => match serde_json::to_string(&res) {
            Ok(res) => http_response_json(res),
            Err(_) => http_response_err(
                r#"{"error":"Error serializing response from connector"}"#.to_string(),
            ),
        },
        Ok(ApplicationResponse::StatusOk) => http_response_ok(),
        Ok(ApplicationResponse::TextPlain(text)) => http_response_plaintext(text),
        Err(error) => {
            logger::error!(api_response_error=?error);
            error.current_context().error_response()
        }
    };

    let request_duration = start_instant.elapsed();
    logger::info!(
        flow = %flow,
        status_code = response.status().as_u16(),
        latency = ?request_duration,
        "End request"
    );

    response
}

pub fn http_response_json<T: body::MessageBody + 'static>(response: T) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(mime::APPLICATION_JSON)
        .body(response)
}

pub fn http_response_plaintext<T: body::MessageBody + 'static>(res: T) -> HttpResponse {
    HttpResponse::Ok().content_type(mime::TEXT_PLAIN).body(res)
}

pub fn http_response_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn http_response_err<T: body::MessageBody + 'static>(response: T) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(mime::APPLICATION_JSON)
        .body(response)
}

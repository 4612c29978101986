use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use error_stack::{report, ResultExt};

use super::request::{ContentType, Method, Request};
use crate::{
    core::errors::{ApiClientError, CustomResult},
    headers, logger, types,
};

#[async_trait::async_trait]
pub trait ApiClient: dyn_clone::DynClone + Send + Sync {
    async fn send_request(
        &self,
        request: Request,
        option_timeout_secs: Option<u64>,
    ) -> CustomResult<types::Response, ApiClientError>;
}

dyn_clone::clone_trait_object!(ApiClient);

/// Outbound HTTP client used in production.
///
/// No request timeout is set unless asked for; effective timeout behavior is
/// inherited from the connection pool and the hosting platform.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    client: reqwest::Client,
}

impl ProxyClient {
    pub fn new() -> CustomResult<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ApiClient for ProxyClient {
    async fn send_request(
        &self,
        request: Request,
        option_timeout_secs: Option<u64>,
    ) -> CustomResult<types::Response, ApiClientError> {
        logger::info!(method=?request.method, url=%request.url, headers=?request.headers);

        let url = url::Url::parse(&request.url).change_context(ApiClientError::UrlParsingFailed)?;

        let mut request_builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        for (name, value) in request.headers {
            request_builder = request_builder.header(name.as_str(), value.into_inner());
        }

        if let Some(body) = request.body {
            use masking::ExposeInterface;

            let content_type = match request.content_type {
                Some(ContentType::FormUrlEncoded) => mime::APPLICATION_WWW_FORM_URLENCODED,
                Some(ContentType::Json) | None => mime::APPLICATION_JSON,
            };
            request_builder = request_builder
                .header(headers::CONTENT_TYPE, content_type.essence_str())
                .body(body.get_inner_value().expose());
        }

        if let Some(timeout_secs) = option_timeout_secs {
            request_builder = request_builder.timeout(Duration::from_secs(timeout_secs));
        }

        let response = request_builder
            .send()
            .await
            .change_context(ApiClientError::RequestNotSent)
            .attach_printable("Unable to send request to connector")?;

        let status_code = response.status().as_u16();
        let response = response
            .bytes()
            .await
            .change_context(ApiClientError::ResponseDecodingFailed)?;

        Ok(types::Response {
            status_code,
            response,
        })
    }
}

/// Test double which records every outgoing request and replays canned
/// responses; sending with no canned response queued fails the call.
#[derive(Clone, Debug, Default)]
pub struct MockApiClient {
    requests: Arc<Mutex<Vec<Request>>>,
    responses: Arc<Mutex<VecDeque<types::Response>>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: types::Response) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    pub fn recorded_requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ApiClient for MockApiClient {
    async fn send_request(
        &self,
        request: Request,
        _option_timeout_secs: Option<u64>,
    ) -> CustomResult<types::Response, ApiClientError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .ok_or_else(|| report!(ApiClientError::RequestNotSent))
    }
}

use std::fmt::Debug;

use common_utils::errors::CustomResult;
use masking::{Maskable, Secret};
use serde::{Deserialize, Serialize};

use crate::{core::errors, logger};

pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentType {
    Json,
    FormUrlEncoded,
}

/// An outgoing request to an external service, built by a connector.
#[derive(Clone, Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub content_type: Option<ContentType>,
    pub body: Option<RequestBody>,
}

/// Serialized request body. Wrapped in a [`Secret`] because connector
/// payloads carry customer PII and must not land in logs once encoded.
#[derive(Clone, Debug)]
pub struct RequestBody(Secret<String>);

impl RequestBody {
    /// Log the typed body (masked through its `Debug` impl) and encode it.
    pub fn log_and_get_request_body<T, F>(
        body: &T,
        encoder: F,
    ) -> CustomResult<Self, errors::ConnectorError>
    where
        T: Debug,
        F: FnOnce(&T) -> CustomResult<String, common_utils::errors::ParsingError>,
    {
        logger::info!(connector_request_body=?body);
        let encoded = encoder(body)
            .map_err(|err| err.change_context(errors::ConnectorError::RequestEncodingFailed))?;
        Ok(Self(Secret::new(encoded)))
    }

    pub fn get_inner_value(self) -> Secret<String> {
        self.0
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub content_type: Option<ContentType>,
    pub body: Option<RequestBody>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            headers: std::collections::HashSet::new(),
            method: Method::Get,
            content_type: None,
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub mod storage;

use api_models::enums;
use masking::Secret;

/// Wrapper carrying the resolved connector credentials together with the
/// flow-specific request data, handed to a `ConnectorIntegration`.
#[derive(Clone, Debug)]
pub struct RouterData<Req> {
    pub connector_auth_type: ConnectorAuthType,
    pub request: Req,
}

#[derive(Clone, Debug)]
pub enum ConnectorAuthType {
    HeaderKey { api_key: Secret<String> },
}

/// Raw response from a connector call.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub response: bytes::Bytes,
}

/// Error surface a connector distills out of an upstream failure response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    pub reason: Option<String>,
}

/// Outcome of a successful payment-intent creation.
#[derive(Clone, Debug)]
pub struct PaymentsResponseData {
    pub payment_id: String,
    pub client_secret: Secret<String>,
    pub amount: i64,
}

/// Connector-side input for a preview generation.
#[derive(Clone, Debug)]
pub struct PreviewsGenerateData {
    pub name: String,
    pub variant: enums::PreviewVariant,
    pub model: String,
    /// Raw PNG bytes of the reference product photo, present for the `edit`
    /// variant only.
    pub reference_image: Option<Vec<u8>>,
}

/// Outcome of a successful preview generation: the base64 payload and its
/// MIME type, ready to be assembled into a data URI.
#[derive(Clone, Debug)]
pub struct PreviewsResponseData {
    pub image_data: String,
    pub mime_type: String,
}

/// Flows this service handles, recorded on request spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Flow {
    HealthCheck,
    PaymentsCreate,
    OrdersCreate,
    PreviewsGenerate,
}

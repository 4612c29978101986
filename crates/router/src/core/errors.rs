use actix_web::{http::StatusCode, HttpResponse};
pub use common_utils::errors::CustomResult;

use crate::{services::ApplicationResponse, types};

pub type RouterResult<T> = CustomResult<T, ApiErrorResponse>;
pub type RouterResponse<T> = CustomResult<ApplicationResponse<T>, ApiErrorResponse>;

/// Error taxonomy surfaced to the client.
///
/// Configuration errors are raised before any external call and are distinct
/// from external-service errors; a semantically empty result from a
/// succeeded external call is distinct from both.
#[derive(Debug, thiserror::Error)]
pub enum ApiErrorResponse {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("{message}")]
    InvalidRequestData { message: String },
    #[error("{service} API key not configured")]
    ConfigurationError { service: &'static str },
    #[error("{message}")]
    ExternalConnectorError {
        message: String,
        details: Option<String>,
    },
    #[error("No image generated")]
    EmptyGenerationResult,
    #[error("Something went wrong")]
    InternalServerError,
}

impl actix_web::ResponseError for ApiErrorResponse {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingRequiredField { .. } | Self::InvalidRequestData { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::ConfigurationError { .. }
            | Self::ExternalConnectorError { .. }
            | Self::EmptyGenerationResult
            | Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::ExternalConnectorError {
                message,
                details: Some(details),
            } => api_models::errors::ErrorResponse::with_details(message.clone(), details.clone()),
            other => api_models::errors::ErrorResponse::new(other.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Failures inside a connector module.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Failed at the connector's processing step")]
    ProcessingStepFailed(Option<types::ErrorResponse>),
    #[error("No inline image data in connector response")]
    MissingImageData,
}

/// Failures of the outbound HTTP client itself, before any upstream status
/// is known.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Client construction failed")]
    ClientConstructionFailed,
    #[error("URL parsing failed")]
    UrlParsingFailed,
    #[error("Failed to send the request to the connector")]
    RequestNotSent,
    #[error("Failed to read the response body")]
    ResponseDecodingFailed,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("ValueNotFound: {0}")]
    ValueNotFound(String),
    #[error("DuplicateValue: {entity} already exists {key:?}")]
    DuplicateValue {
        entity: &'static str,
        key: Option<String>,
    },
    #[error("MockDb error")]
    MockDbError,
}

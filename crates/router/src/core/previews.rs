use api_models::{enums, previews as previews_api};
use error_stack::{report, ResultExt};
use tracing::instrument;

use crate::{
    connector,
    core::errors::{self, ApiErrorResponse, RouterResponse},
    events,
    routes::AppState,
    services::{self, ApplicationResponse},
    types,
};

/// Produce a personalized product preview as a data URI.
///
/// The name is validated and the API key resolved before anything leaves the
/// process; the model is only reached with a well-formed request.
#[instrument(skip_all)]
pub async fn generate(
    state: AppState,
    req: previews_api::PreviewsGenerateRequest,
) -> RouterResponse<previews_api::PreviewsGenerateResponse> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(report!(ApiErrorResponse::InvalidRequestData {
            message: "Name is required".to_string(),
        }));
    }

    let api_key = state
        .conf
        .gemini
        .api_key
        .clone()
        .ok_or_else(|| report!(ApiErrorResponse::ConfigurationError { service: "Gemini" }))?;

    let reference_image = match req.variant {
        enums::PreviewVariant::Edit => Some(
            tokio::fs::read(&state.conf.gemini.reference_image_path)
                .await
                .change_context(ApiErrorResponse::InternalServerError)
                .attach_printable("Failed to read the reference product image")?,
        ),
        enums::PreviewVariant::Generate => None,
    };

    let router_data = types::RouterData {
        connector_auth_type: types::ConnectorAuthType::HeaderKey { api_key },
        request: types::PreviewsGenerateData {
            name: name.to_string(),
            variant: req.variant,
            model: state.conf.gemini.model.clone(),
            reference_image,
        },
    };

    let connector = connector::Gemini;
    let result: Result<types::PreviewsResponseData, _> =
        services::execute_connector_processing_step(
            &*state.api_client,
            &connector,
            &router_data,
            &state.conf.connectors,
        )
        .await;

    let response = match result {
        Ok(response) => response,
        Err(err) => {
            state.event_handler.log_event(
                events::PreviewGenerationFailed {
                    variant: req.variant,
                    reason: err.current_context().to_string(),
                }
                .into_event(),
            );
            let api_error = match err.current_context() {
                // The call itself succeeded; the model just returned no image.
                errors::ConnectorError::MissingImageData => {
                    ApiErrorResponse::EmptyGenerationResult
                }
                errors::ConnectorError::ProcessingStepFailed(Some(error_response)) => {
                    ApiErrorResponse::ExternalConnectorError {
                        message: "Failed to generate image".to_string(),
                        details: Some(error_response.message.clone()),
                    }
                }
                _ => ApiErrorResponse::ExternalConnectorError {
                    message: "Failed to generate image".to_string(),
                    details: None,
                },
            };
            return Err(err.change_context(api_error));
        }
    };

    Ok(ApplicationResponse::Json(
        previews_api::PreviewsGenerateResponse {
            success: true,
            image: format!(
                "data:{};base64,{}",
                response.mime_type, response.image_data
            ),
        },
    ))
}

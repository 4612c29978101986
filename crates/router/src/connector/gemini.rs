pub mod transformers;

use common_utils::ext_traits::{BytesExt, Encode};
use error_stack::{report, ResultExt};
use masking::Mask;
use transformers as gemini;

use crate::{
    configs::settings,
    consts,
    core::errors::{self, CustomResult},
    headers, logger,
    services::{
        self,
        api::{ConnectorCommon, ConnectorIntegration},
    },
    types,
};

#[derive(Debug, Clone)]
pub struct Gemini;

impl ConnectorCommon for Gemini {
    fn id(&self) -> &'static str {
        "gemini"
    }

    fn base_url<'a>(&self, connectors: &'a settings::Connectors) -> &'a str {
        connectors.gemini.base_url.as_ref()
    }

    fn get_auth_header(
        &self,
        auth_type: &types::ConnectorAuthType,
    ) -> CustomResult<Vec<(String, masking::Maskable<String>)>, errors::ConnectorError> {
        let types::ConnectorAuthType::HeaderKey { api_key } = auth_type;
        Ok(vec![(
            headers::X_GOOG_API_KEY.to_string(),
            api_key.clone().into_masked(),
        )])
    }
}

impl ConnectorIntegration<types::PreviewsGenerateData, types::PreviewsResponseData> for Gemini {
    fn get_headers(
        &self,
        req: &types::RouterData<types::PreviewsGenerateData>,
        _connectors: &settings::Connectors,
    ) -> CustomResult<Vec<(String, masking::Maskable<String>)>, errors::ConnectorError> {
        let mut header = self.get_auth_header(&req.connector_auth_type)?;
        header.push((
            headers::CONTENT_TYPE.to_string(),
            self.get_content_type().to_string().into(),
        ));
        Ok(header)
    }

    fn get_url(
        &self,
        req: &types::RouterData<types::PreviewsGenerateData>,
        connectors: &settings::Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!(
            "{}v1beta/models/{}:generateContent",
            self.base_url(connectors),
            req.request.model
        ))
    }

    fn get_request_body(
        &self,
        req: &types::RouterData<types::PreviewsGenerateData>,
    ) -> CustomResult<Option<services::RequestBody>, errors::ConnectorError> {
        let connector_req = gemini::GenerateContentRequest::try_from(&req.request)?;
        let gemini_req = services::RequestBody::log_and_get_request_body(&connector_req, |req| {
            req.encode_to_string_of_json()
        })?;
        Ok(Some(gemini_req))
    }

    fn build_request(
        &self,
        req: &types::RouterData<types::PreviewsGenerateData>,
        connectors: &settings::Connectors,
    ) -> CustomResult<Option<services::Request>, errors::ConnectorError> {
        Ok(Some(
            services::RequestBuilder::new()
                .method(services::Method::Post)
                .url(&self.get_url(req, connectors)?)
                .content_type(services::ContentType::Json)
                .headers(self.get_headers(req, connectors)?)
                .body(self.get_request_body(req)?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        _data: &types::RouterData<types::PreviewsGenerateData>,
        res: types::Response,
    ) -> CustomResult<types::PreviewsResponseData, errors::ConnectorError> {
        let response: gemini::GenerateContentResponse = res
            .response
            .parse_struct("GenerateContentResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        // The model interleaves text and image parts; only the first part
        // carrying inline data is of interest. A response without one is a
        // failure even though the call itself succeeded.
        response
            .first_inline_data()
            .map(|inline_data| types::PreviewsResponseData {
                image_data: inline_data.data.clone(),
                mime_type: inline_data.mime_type.clone(),
            })
            .ok_or_else(|| report!(errors::ConnectorError::MissingImageData))
    }

    fn get_error_response(
        &self,
        res: types::Response,
    ) -> CustomResult<types::ErrorResponse, errors::ConnectorError> {
        let response: gemini::GeminiErrorResponse = res
            .response
            .parse_struct("GeminiErrorResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
        logger::info!(gemini_error_response=?response);

        Ok(types::ErrorResponse {
            status_code: res.status_code,
            code: response
                .error
                .code
                .map(|code| code.to_string())
                .unwrap_or_else(|| consts::NO_ERROR_CODE.to_string()),
            message: response.error.message,
            reason: response.error.status,
        })
    }
}

pub mod transformers;

use common_utils::ext_traits::{BytesExt, Encode};
use error_stack::ResultExt;
use masking::{Mask, PeekInterface};
use transformers as stripe;

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
pub struct Stripe;

impl ConnectorCommon for Stripe {
    fn id(&self) -> &'static str {
        "stripe"
    }

    fn common_get_content_type(&self) -> &'static str {
        mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()
    }

    fn base_url<'a>(&self, connectors: &'a settings::Connectors) -> &'a str {
        connectors.stripe.base_url.as_ref()
    }

    fn get_auth_header(
        &self,
        auth_type: &types::ConnectorAuthType,
    ) -> CustomResult<Vec<(String, masking::Maskable<String>)>, errors::ConnectorError> {
        let auth = stripe::StripeAuthType::try_from(auth_type)
            .change_context(errors::ConnectorError::FailedToObtainAuthType)?;
        Ok(vec![(
            headers::AUTHORIZATION.to_string(),
            format!("Bearer {}", auth.api_key.peek()).into_masked(),
        )])
    }
}

impl ConnectorIntegration<api_models::payments::PaymentsCreateRequest, types::PaymentsResponseData>
    for Stripe
{
    fn get_headers(
        &self,
        req: &types::RouterData<api_models::payments::PaymentsCreateRequest>,
        _connectors: &settings::Connectors,
    ) -> CustomResult<Vec<(String, masking::Maskable<String>)>, errors::ConnectorError> {
        let mut header = self.get_auth_header(&req.connector_auth_type)?;
        header.push((
            headers::CONTENT_TYPE.to_string(),
            self.common_get_content_type().to_string().into(),
        ));
        // Client-generated token; a retried submission with the same token
        // must not create a second intent.
        if let Some(idempotency_key) = &req.request.idempotency_key {
            header.push((
                headers::IDEMPOTENCY_KEY.to_string(),
                idempotency_key.clone().into(),
            ));
        }
        Ok(header)
    }

    fn get_content_type(&self) -> &'static str {
        self.common_get_content_type()
    }

    fn get_url(
        &self,
        _req: &types::RouterData<api_models::payments::PaymentsCreateRequest>,
        connectors: &settings::Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!("{}v1/payment_intents", self.base_url(connectors)))
    }

    fn get_request_body(
        &self,
        req: &types::RouterData<api_models::payments::PaymentsCreateRequest>,
    ) -> CustomResult<Option<services::RequestBody>, errors::ConnectorError> {
        let connector_req = stripe::PaymentIntentRequest::try_from(&req.request)?;
        let stripe_req =
            services::RequestBody::log_and_get_request_body(&connector_req, |req| req.url_encode())?;
        Ok(Some(stripe_req))
    }

    fn build_request(
        &self,
        req: &types::RouterData<api_models::payments::PaymentsCreateRequest>,
        connectors: &settings::Connectors,
    ) -> CustomResult<Option<services::Request>, errors::ConnectorError> {
        Ok(Some(
            services::RequestBuilder::new()
                .method(services::Method::Post)
                .url(&self.get_url(req, connectors)?)
                .content_type(services::ContentType::FormUrlEncoded)
                .headers(self.get_headers(req, connectors)?)
                .body(self.get_request_body(req)?)
                .build(),
        ))
    }

    fn handle_response(
        &self,
        _data: &types::RouterData<api_models::payments::PaymentsCreateRequest>,
        res: types::Response,
    ) -> CustomResult<types::PaymentsResponseData, errors::ConnectorError> {
        let response: stripe::PaymentIntentResponse = res
            .response
            .parse_struct("PaymentIntentResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
        logger::debug!(payment_intent_response=?response);
        Ok(types::PaymentsResponseData::from(response))
    }

    fn get_error_response(
        &self,
        res: types::Response,
    ) -> CustomResult<types::ErrorResponse, errors::ConnectorError> {
        let response: stripe::ErrorResponse = res
            .response
            .parse_struct("ErrorResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
        logger::info!(stripe_error_response=?response);

        Ok(types::ErrorResponse {
            status_code: res.status_code,
            code: response
                .error
                .code
                .unwrap_or_else(|| consts::NO_ERROR_CODE.to_string()),
            message: response
                .error
                .message
                .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string()),
            reason: response.error.decline_code,
        })
    }
}

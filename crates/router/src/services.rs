pub mod api;

pub use api::{
    execute_connector_processing_step, ApiClient, ApplicationResponse, ConnectorCommon,
    ConnectorIntegration, ContentType, Method, MockApiClient, ProxyClient, Request, RequestBody,
    RequestBuilder,
};

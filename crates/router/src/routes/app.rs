use actix_web::{error, web, HttpRequest, HttpResponse, Scope};

use super::{health::*, orders::*, payments::*, previews::*};
use crate::{
    configs::settings::Settings,
    core::errors::{ApiClientError, CustomResult},
    db::{MockDb, StorageInterface},
    events::EventsHandler,
    services::{ApiClient, ProxyClient},
};

#[derive(Clone)]
pub struct AppState {
    pub conf: Settings,
    pub store: Box<dyn StorageInterface>,
    pub api_client: Box<dyn ApiClient>,
    pub event_handler: EventsHandler,
}

impl AppState {
    pub async fn new(conf: Settings) -> CustomResult<Self, ApiClientError> {
        let api_client = ProxyClient::new()?;
        Ok(Self::with_parts(
            conf,
            Box::new(MockDb::new()),
            Box::new(api_client),
        ))
    }

    /// Assemble state from explicit parts; tests inject their own storage
    /// and API client here.
    pub fn with_parts(
        conf: Settings,
        store: Box<dyn StorageInterface>,
        api_client: Box<dyn ApiClient>,
    ) -> Self {
        Self {
            conf,
            store,
            api_client,
            event_handler: EventsHandler::default(),
        }
    }
}

/// Malformed or incomplete JSON bodies answer with the same `{ "error" }`
/// shape as every other failure.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let message = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(api_models::errors::ErrorResponse::new(message)),
    )
    .into()
}

pub struct Health;

impl Health {
    pub fn server(state: AppState) -> Scope {
        web::scope("/health")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::get().to(health)))
    }
}

pub struct Payments;

impl Payments {
    pub fn server(state: AppState) -> Scope {
        web::scope("/api/create-payment")
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(web::resource("").route(web::post().to(payments_create)))
    }
}

pub struct Orders;

impl Orders {
    pub fn server(state: AppState) -> Scope {
        web::scope("/api/create-order")
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(web::resource("").route(web::post().to(orders_create)))
    }
}

pub struct Previews;

impl Previews {
    pub fn server(state: AppState) -> Scope {
        web::scope("/api/generate-preview")
            .app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(web::resource("").route(web::post().to(previews_generate)))
    }
}

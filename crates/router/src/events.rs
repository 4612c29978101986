pub mod event_logger;

use serde::Serialize;

/// Sink for structured domain events.
pub trait EventHandler: Sync + Send + dyn_clone::DynClone {
    fn log_event(&self, event: RawEvent);
}

dyn_clone::clone_trait_object!(EventHandler);

#[derive(Debug, Serialize)]
pub struct RawEvent {
    pub event_type: EventType,
    pub key: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Serialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Order,
    PaymentIntent,
    Preview,
}

#[derive(Clone, Debug)]
pub enum EventsHandler {
    Logs(event_logger::EventLogger),
}

impl Default for EventsHandler {
    fn default() -> Self {
        Self::Logs(event_logger::EventLogger::default())
    }
}

impl EventsHandler {
    pub fn log_event(&self, event: RawEvent) {
        match self {
            Self::Logs(logger) => EventHandler::log_event(logger, event),
        }
    }
}

/// An order was durably recorded and acknowledged to the customer.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub order_id: String,
    pub payment_method: api_models::enums::PaymentMethod,
    /// Human-readable amount, derived from minor units without floating
    /// point (`2999` -> `"29.99€"`).
    pub amount: String,
    pub product: String,
    pub created_at: String,
}

/// An intent was created at the payment processor.
#[derive(Debug, Serialize)]
pub struct PaymentIntentCreated {
    pub payment_id: String,
    pub amount: i64,
    pub currency: api_models::enums::Currency,
}

/// A preview request reached the model but produced no usable image, or the
/// call itself failed.
#[derive(Debug, Serialize)]
pub struct PreviewGenerationFailed {
    pub variant: api_models::enums::PreviewVariant,
    pub reason: String,
}

impl OrderCreated {
    pub fn into_event(self) -> RawEvent {
        into_raw_event(EventType::Order, self.order_id.clone(), &self)
    }
}

impl PaymentIntentCreated {
    pub fn into_event(self) -> RawEvent {
        into_raw_event(EventType::PaymentIntent, self.payment_id.clone(), &self)
    }
}

impl PreviewGenerationFailed {
    pub fn into_event(self) -> RawEvent {
        into_raw_event(EventType::Preview, self.variant.to_string(), &self)
    }
}

fn into_raw_event<T: Serialize>(event_type: EventType, key: String, payload: &T) -> RawEvent {
    RawEvent {
        event_type,
        key,
        payload: serde_json::to_value(payload)
            .unwrap_or_else(|_| serde_json::json!({ "error": "Serialization failed" })),
    }
}

#![allow(clippy::unwrap_used)]

use actix_web::{
    http::{header, Method, StatusCode},
    test,
};
use masking::{ExposeInterface, Secret};
use router::{
    configs::settings::Settings,
    db::{orders::OrderInterface, MockDb},
    routes::AppState,
    services::MockApiClient,
    types,
};
use serde_json::json;

fn test_settings(stripe_key: Option<&str>, gemini_key: Option<&str>) -> Settings {
    let mut conf = Settings::default();
    conf.stripe.api_key = stripe_key.map(|key| Secret::new(key.to_string()));
    conf.gemini.api_key = gemini_key.map(|key| Secret::new(key.to_string()));
    conf
}

fn test_state(conf: Settings) -> (AppState, MockDb, MockApiClient) {
    let mock_db = MockDb::new();
    let mock_client = MockApiClient::new();
    let state = AppState::with_parts(
        conf,
        Box::new(mock_db.clone()),
        Box::new(mock_client.clone()),
    );
    (state, mock_db, mock_client)
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            actix_web::App::new()
                .wrap(router::cors::cors($state.conf.cors.clone()))
                .service(router::routes::Payments::server($state.clone()))
                .service(router::routes::Orders::server($state.clone()))
                .service(router::routes::Previews::server($state.clone()))
                .service(router::routes::Health::server($state.clone())),
        )
        .await
    };
}

fn checkout_body() -> serde_json::Value {
    json!({
        "name": "Ana",
        "email": "a@x.com",
        "phone": "600000000",
        "address": "Calle 1",
        "postal": "28001",
        "city": "Madrid",
        "amount": 2999
    })
}

#[actix_web::test]
async fn health_check() {
    let (state, _, _) = test_state(test_settings(None, None));
    let app = init_app!(state);

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn cod_order_is_recorded_before_acknowledgement() {
    let (state, mock_db, mock_client) = test_state(test_settings(None, None));
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/create-order")
        .set_json(checkout_body())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    let order_id = body["orderId"].as_str().unwrap();
    let mut parts = order_id.split('-');
    assert_eq!(parts.next(), Some("COD"));
    assert!(parts
        .next()
        .unwrap()
        .chars()
        .all(|c| c.is_ascii_digit()));
    let suffix = parts.next().unwrap();
    assert_eq!(suffix.len(), 9);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

    // Acknowledged means recorded: the order must be retrievable.
    let stored = mock_db.find_order_by_order_id(order_id).await.unwrap();
    assert_eq!(stored.amount, 2999);
    assert_eq!(stored.personalization, "Sin personalización");

    // Cash-on-delivery never touches an external service.
    assert_eq!(mock_client.call_count(), 0);
}

#[actix_web::test]
async fn payment_intent_creation_forwards_amount_unmodified() {
    let (state, _, mock_client) = test_state(test_settings(Some("sk_test_123"), None));
    mock_client.push_response(types::Response {
        status_code: 200,
        response: bytes::Bytes::from_static(
            br#"{"id":"pi_123","object":"payment_intent","amount":2999,"currency":"eur","status":"requires_payment_method","client_secret":"pi_123_secret_abc"}"#,
        ),
    });
    let app = init_app!(state);

    let mut body = checkout_body();
    body["idempotency_key"] = json!("order-attempt-1");
    let request = test::TestRequest::post()
        .uri("/api/create-payment")
        .set_json(body)
        .to_request();
    let response_body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(response_body["clientSecret"], "pi_123_secret_abc");

    let recorded = mock_client.recorded_requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        recorded[0].url,
        "https://api.stripe.com/v1/payment_intents"
    );
    assert!(recorded[0]
        .headers
        .iter()
        .any(|(name, _)| name == "Authorization"));
    assert!(recorded[0]
        .headers
        .iter()
        .any(|(name, _)| name == "Idempotency-Key"));

    let sent_body = recorded[0]
        .body
        .clone()
        .unwrap()
        .get_inner_value()
        .expose();
    assert!(sent_body.contains("amount=2999"));
    assert!(sent_body.contains("currency=eur"));
    assert!(sent_body.contains("receipt_email=a%40x.com"));
}

#[actix_web::test]
async fn payment_without_configured_key_fails_before_any_external_call() {
    let (state, _, mock_client) = test_state(test_settings(None, None));
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/create-payment")
        .set_json(checkout_body())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Stripe API key not configured");
    assert_eq!(mock_client.call_count(), 0);
}

#[actix_web::test]
async fn upstream_processor_error_is_relayed() {
    let (state, _, mock_client) = test_state(test_settings(Some("sk_test_123"), None));
    mock_client.push_response(types::Response {
        status_code: 400,
        response: bytes::Bytes::from_static(
            br#"{"error":{"code":"amount_too_small","type":"invalid_request_error","message":"Amount must be at least 50 cents"}}"#,
        ),
    });
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/create-payment")
        .set_json(checkout_body())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Amount must be at least 50 cents");
}

#[actix_web::test]
async fn blank_preview_name_is_rejected_without_external_call() {
    let (state, _, mock_client) = test_state(test_settings(None, Some("gm_key")));
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/generate-preview")
        .set_json(json!({ "name": "   " }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Name is required");
    assert_eq!(mock_client.call_count(), 0);
}

#[actix_web::test]
async fn preview_without_configured_key_is_a_configuration_error() {
    let (state, _, mock_client) = test_state(test_settings(None, None));
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/generate-preview")
        .set_json(json!({ "name": "Ana" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Gemini API key not configured");
    assert_eq!(mock_client.call_count(), 0);
}

#[actix_web::test]
async fn preview_returns_data_uri() {
    let (state, _, mock_client) = test_state(test_settings(None, Some("gm_key")));
    mock_client.push_response(types::Response {
        status_code: 200,
        response: bytes::Bytes::from_static(
            br#"{"candidates":[{"content":{"parts":[{"text":"Here you go"},{"inlineData":{"mimeType":"image/png","data":"aW1hZ2U="}}]}}]}"#,
        ),
    });
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/generate-preview")
        .set_json(json!({ "name": "Ana" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["image"], "data:image/png;base64,aW1hZ2U=");

    let recorded = mock_client.recorded_requests();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].url.ends_with(
        "v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent"
    ));
    assert!(recorded[0]
        .headers
        .iter()
        .any(|(name, _)| name == "x-goog-api-key"));
}

#[actix_web::test]
async fn image_free_model_response_is_a_distinct_failure() {
    let (state, _, mock_client) = test_state(test_settings(None, Some("gm_key")));
    mock_client.push_response(types::Response {
        status_code: 200,
        response: bytes::Bytes::from_static(
            br#"{"candidates":[{"content":{"parts":[{"text":"No image today"}]}}]}"#,
        ),
    });
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/generate-preview")
        .set_json(json!({ "name": "Ana" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "No image generated");
}

#[actix_web::test]
async fn options_preflight_succeeds_with_cors_headers_and_empty_body() {
    let (state, _, _) = test_state(test_settings(None, None));
    let app = init_app!(state);

    let request = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/create-order")
        .insert_header((header::ORIGIN, "https://example.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let body = test::read_body(response).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn non_post_method_is_not_allowed() {
    let (state, _, _) = test_state(test_settings(None, None));
    let app = init_app!(state);

    let request = test::TestRequest::get().uri("/api/create-order").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#![allow(clippy::unwrap_used)]

use masking::{ExposeInterface, Mask, Maskable, PeekInterface, Secret};

#[test]
fn debug_output_is_masked() {
    let secret: Secret<String> = Secret::new("super-sensitive".to_string());

    let rendered = format!("{secret:?}");
    assert!(!rendered.contains("super-sensitive"));
    assert!(rendered.contains("alloc::string::String"));
}

#[test]
fn peek_and_expose() {
    let secret: Secret<String> = Secret::new("tok_123".to_string());

    assert_eq!(secret.peek(), "tok_123");
    assert_eq!(secret.expose(), "tok_123");
}

#[test]
fn serialize_exposes_inner_value() {
    #[derive(serde::Serialize)]
    struct Payload {
        email: Secret<String>,
    }

    let payload = Payload {
        email: Secret::new("ana@example.com".to_string()),
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert_eq!(json, r#"{"email":"ana@example.com"}"#);
}

#[test]
fn deserialize_wraps_value() {
    let secret: Secret<String> = serde_json::from_str(r#""hidden""#).unwrap();
    assert_eq!(secret.peek(), "hidden");
}

#[test]
fn maskable_debug_masks_only_secret_variant() {
    let masked: Maskable<String> = "sk_live_abc".to_string().into_masked();
    let normal: Maskable<String> = "application/json".into();

    assert!(!format!("{masked:?}").contains("sk_live_abc"));
    assert!(format!("{normal:?}").contains("application/json"));
}

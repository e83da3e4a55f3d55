use actix_web::{http::StatusCode, test};
use common_utils::{crypto::SignMessage, ext_traits::ByteSliceExt};
use masking::Secret;
use webhook_verifier::{
    configs::settings::{FallbackWebhookSecrets, Settings},
    db::{MerchantConnectorAccountInterface, MockDb},
    mk_app,
    routes::AppState,
    types::{api, storage},
};

fn test_state(fallback_secrets: FallbackWebhookSecrets) -> AppState {
    AppState::with_storage(Settings::default(), Box::new(MockDb::new()), fallback_secrets)
}

fn env_secrets(pairs: &[(&str, &str)]) -> FallbackWebhookSecrets {
    FallbackWebhookSecrets::from_pairs(
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string())),
    )
}

async fn seed_account(
    state: &AppState,
    merchant_id: &str,
    connector_name: &str,
    connector_webhook_details: Option<serde_json::Value>,
) {
    state
        .store
        .insert_merchant_connector_account(storage::MerchantConnectorAccountNew {
            merchant_id: Some(merchant_id.to_string()),
            connector_name: Some(connector_name.to_string()),
            connector_webhook_details: connector_webhook_details.map(Secret::new),
            ..Default::default()
        })
        .await
        .expect("seed connector account");
}

fn stripe_signature_header(secret: &str, timestamp: &str, body: &str) -> String {
    let message = format!("{timestamp}.{body}");
    let signature = common_utils::crypto::HmacSha256
        .sign_message(secret.as_bytes(), message.as_bytes())
        .expect("sign message");
    format!("t={timestamp},v1={}", hex::encode(signature))
}

#[actix_web::test]
async fn verifies_stripe_webhook_with_merchant_scoped_secret() {
    let state = test_state(FallbackWebhookSecrets::default());
    seed_account(
        &state,
        "merchant_123",
        "stripe",
        Some(serde_json::json!({"webhook_secret": "whsec_abc"})),
    )
    .await;
    let app = test::init_service(mk_app(state)).await;

    let body = r#"{"id":"evt_1"}"#;
    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=stripe&merchant_id=merchant_123")
        .insert_header((
            "X-Webhook-Signature",
            stripe_signature_header("whsec_abc", "1700000000", body),
        ))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(outcome.verified);
    assert_eq!(outcome.connector, "stripe");
    assert_eq!(outcome.error, None);
}

#[actix_web::test]
async fn tampered_payload_fails_verification() {
    let state = test_state(FallbackWebhookSecrets::default());
    seed_account(
        &state,
        "merchant_123",
        "stripe",
        Some(serde_json::json!({"webhook_secret": "whsec_abc"})),
    )
    .await;
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=stripe&merchant_id=merchant_123")
        .insert_header((
            "X-Webhook-Signature",
            stripe_signature_header("whsec_abc", "1700000000", r#"{"id":"evt_1"}"#),
        ))
        .set_payload(r#"{"id":"evt_2"}"#)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(!outcome.verified);
    assert_eq!(
        outcome.error,
        Some("Signature verification failed".to_string())
    );
}

#[actix_web::test]
async fn garbage_signature_reports_verification_failure_with_ok_status() {
    let state = test_state(FallbackWebhookSecrets::default());
    seed_account(
        &state,
        "merchant_123",
        "checkout",
        Some(serde_json::json!({"webhook_secret": "cko_secret"})),
    )
    .await;
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=checkout&merchant_id=merchant_123")
        .insert_header(("X-Webhook-Signature", "not even hex"))
        .set_payload(r#"{"type":"payment_approved"}"#)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(!outcome.verified);
    assert_eq!(
        outcome.error,
        Some("Signature verification failed".to_string())
    );
}

#[actix_web::test]
async fn missing_secret_everywhere_yields_bad_request() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=adyen")
        .insert_header(("X-Webhook-Signature", "c29tZXRoaW5n"))
        .set_payload("{}")
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(!outcome.verified);
    assert_eq!(outcome.connector, "adyen");
    assert_eq!(outcome.error, Some("Webhook secret not found".to_string()));
}

#[actix_web::test]
async fn environment_fallback_verifies_without_merchant_account() {
    let state = test_state(env_secrets(&[(
        "CONNECTOR_CHECKOUT_WEBHOOK_SECRET",
        "cko_env_secret",
    )]));
    let app = test::init_service(mk_app(state)).await;

    let body = r#"{"type":"payment_approved"}"#;
    let signature = common_utils::crypto::HmacSha256
        .sign_message(b"cko_env_secret", body.as_bytes())
        .expect("sign message");

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=checkout")
        .insert_header(("X-Webhook-Signature", hex::encode(signature)))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(outcome.verified);
}

#[actix_web::test]
async fn merchant_scoped_secret_wins_over_environment_fallback() {
    let state = test_state(env_secrets(&[(
        "CONNECTOR_CHECKOUT_WEBHOOK_SECRET",
        "cko_env_secret",
    )]));
    seed_account(
        &state,
        "merchant_123",
        "checkout",
        Some(serde_json::json!({"webhook_secret": "cko_merchant_secret"})),
    )
    .await;
    let app = test::init_service(mk_app(state)).await;

    let body = r#"{"type":"payment_approved"}"#;
    let signature = common_utils::crypto::HmacSha256
        .sign_message(b"cko_merchant_secret", body.as_bytes())
        .expect("sign message");

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=checkout&merchant_id=merchant_123")
        .insert_header(("X-Webhook-Signature", hex::encode(signature)))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(outcome.verified);
}

#[actix_web::test]
async fn missing_signature_header_is_a_bad_request() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=stripe")
        .set_payload("{}")
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_connector_query_param_is_a_bad_request() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify")
        .insert_header(("X-Webhook-Signature", "abcdef"))
        .set_payload("{}")
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unsupported_connector_reports_structured_failure() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=notaconnector")
        .insert_header(("X-Webhook-Signature", "abcdef"))
        .set_payload("{}")
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(!outcome.verified);
    assert_eq!(outcome.connector, "notaconnector");
}

#[actix_web::test]
async fn health_endpoint_responds() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn connector_account_admin_round_trip() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let create = test::TestRequest::post()
        .uri("/account/merchant_42/connectors")
        .set_json(api::MerchantConnectorCreate {
            connector_name: "dwolla".to_string(),
            connector_webhook_details: Some(Secret::new(
                serde_json::json!({"webhook_secret": "dwolla_secret"}),
            )),
            metadata: None,
            disabled: None,
        })
        .to_request();
    let response = test::call_service(&app, create).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let created: api::MerchantConnectorResponse = body
        .parse_struct("MerchantConnectorResponse")
        .expect("parse create response");
    assert_eq!(created.merchant_id, "merchant_42");
    assert_eq!(created.connector_name, "dwolla");

    let list = test::TestRequest::get()
        .uri("/account/merchant_42/connectors")
        .to_request();
    let response = test::call_service(&app, list).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = test::read_body(response).await;
    let accounts: Vec<api::MerchantConnectorResponse> = body
        .parse_struct("Vec<MerchantConnectorResponse>")
        .expect("parse list response");
    assert_eq!(accounts.len(), 1);

    let retrieve = test::TestRequest::get()
        .uri(&format!(
            "/account/merchant_42/connectors/{}",
            created.merchant_connector_id
        ))
        .to_request();
    let response = test::call_service(&app, retrieve).await;
    assert_eq!(response.status(), StatusCode::OK);

    let delete = test::TestRequest::delete()
        .uri(&format!(
            "/account/merchant_42/connectors/{}",
            created.merchant_connector_id
        ))
        .to_request();
    let response = test::call_service(&app, delete).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = test::read_body(response).await;
    let deleted: api::MerchantConnectorDeleteResponse = body
        .parse_struct("MerchantConnectorDeleteResponse")
        .expect("parse delete response");
    assert!(deleted.deleted);

    let retrieve_again = test::TestRequest::get()
        .uri(&format!(
            "/account/merchant_42/connectors/{}",
            created.merchant_connector_id
        ))
        .to_request();
    let response = test::call_service(&app, retrieve_again).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_connector_account_is_rejected() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let payload = api::MerchantConnectorCreate {
        connector_name: "stripe".to_string(),
        connector_webhook_details: None,
        metadata: None,
        disabled: None,
    };

    let first = test::TestRequest::post()
        .uri("/account/merchant_42/connectors")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::OK
    );

    let second = test::TestRequest::post()
        .uri("/account/merchant_42/connectors")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, second).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn verification_uses_account_created_through_admin_api() {
    let state = test_state(FallbackWebhookSecrets::default());
    let app = test::init_service(mk_app(state)).await;

    let create = test::TestRequest::post()
        .uri("/account/merchant_9/connectors")
        .set_json(api::MerchantConnectorCreate {
            connector_name: "adyen".to_string(),
            connector_webhook_details: Some(Secret::new(
                serde_json::json!({"webhook_secret": "adyen_hmac_key"}),
            )),
            metadata: None,
            disabled: None,
        })
        .to_request();
    assert_eq!(
        test::call_service(&app, create).await.status(),
        StatusCode::OK
    );

    let body = r#"{"eventCode":"AUTHORISATION"}"#;
    let signature = common_utils::crypto::HmacSha256
        .sign_message(b"adyen_hmac_key", body.as_bytes())
        .expect("sign message");

    let request = test::TestRequest::post()
        .uri("/api/webhooks/verify?connector=adyen&merchant_id=merchant_9")
        .insert_header((
            "X-Webhook-Signature",
            base64::Engine::encode(&common_utils::consts::BASE64_ENGINE, signature),
        ))
        .set_payload(body)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let outcome: api::WebhookVerificationResponse = body
        .parse_struct("WebhookVerificationResponse")
        .expect("parse response");
    assert!(outcome.verified);
    assert_eq!(outcome.connector, "adyen");
}

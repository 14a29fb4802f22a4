use std::time::Duration;

use notifier_engine::{
    DeliveryReceipt, FailureKind, GatewaySettings, HttpPushGateway, PushBatch, PushGateway,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpPushGateway {
    HttpPushGateway::new(GatewaySettings {
        endpoint: format!("{}/api/send-push", server.uri()),
        ..GatewaySettings::default()
    })
}

fn batch() -> PushBatch {
    PushBatch {
        user_ids: vec!["u1".to_string(), "u2".to_string()],
        message: "Hello".to_string(),
    }
}

#[tokio::test]
async fn gateway_posts_json_and_counts_successes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "userIds": ["u1", "u2"],
            "message": "Hello",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"success": true}, {"success": false}, {"success": true}],
        })))
        .mount(&server)
        .await;

    let receipt = gateway_for(&server).send(&batch()).await.expect("send ok");

    assert_eq!(
        receipt,
        DeliveryReceipt {
            success_count: 2,
            total: 3
        }
    );
}

#[tokio::test]
async fn result_entries_with_extra_fields_still_parse() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"success": true, "userId": "u1", "ticket": "t-1"},
                {"success": false, "userId": "u2", "reason": "no token"},
            ],
        })))
        .mount(&server)
        .await;

    let receipt = gateway_for(&server).send(&batch()).await.expect("send ok");

    assert_eq!(receipt.success_count, 1);
    assert_eq!(receipt.total, 2);
}

#[tokio::test]
async fn collaborator_error_is_surfaced_as_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "provider down"})),
        )
        .mount(&server)
        .await;

    let err = gateway_for(&server).send(&batch()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Rejected);
    assert_eq!(err.message, "provider down");
}

#[tokio::test]
async fn error_field_wins_even_with_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "queue full"})),
        )
        .mount(&server)
        .await;

    let err = gateway_for(&server).send(&batch()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Rejected);
    assert_eq!(err.message, "queue full");
}

#[tokio::test]
async fn plain_http_failure_maps_to_status_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = gateway_for(&server).send(&batch()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn ok_status_with_invalid_json_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = gateway_for(&server).send(&batch()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn missing_results_counts_zero_recipients() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let receipt = gateway_for(&server).send(&batch()).await.expect("send ok");

    assert_eq!(
        receipt,
        DeliveryReceipt {
            success_count: 0,
            total: 0
        }
    );
}

#[tokio::test]
async fn gateway_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send-push"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({"results": []})),
        )
        .mount(&server)
        .await;

    let gateway = HttpPushGateway::new(GatewaySettings {
        endpoint: format!("{}/api/send-push", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..GatewaySettings::default()
    });

    let err = gateway.send(&batch()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unparseable_endpoint_fails_before_any_request() {
    let gateway = HttpPushGateway::new(GatewaySettings {
        endpoint: "not an endpoint".to_string(),
        ..GatewaySettings::default()
    });

    let err = gateway.send(&batch()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

mod helpers;

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    App,
};
use contract_bench_server::configure_router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn run_request(uri: &str, input: &str) -> TestRequest {
    TestRequest::post()
        .uri(uri)
        .set_json(json!({ "input": input }))
}

#[actix_web::test]
async fn run_updates_only_its_row() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let request = run_request("/api/v1/contracts/1/benchmarks/solidity/swap", "1000").to_request();
    let row: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(row["name"], json!("swap"));
    assert_eq!(row["gas_used"], json!("45,000"));
    assert!(row["runtime"].as_str().unwrap().ends_with("ms"));
    assert_ne!(row["last_tested"], json!("2024-01-15"));

    let request = TestRequest::get().uri("/api/v1/contracts/1").to_request();
    let detail: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(detail["solidity"]["functions"][0], row);
    assert_eq!(
        detail["solidity"]["functions"][1],
        json!({ "name": "addLiquidity", "gas_used": "65,000", "runtime": "18ms", "last_tested": "2024-01-15" })
    );
    assert_eq!(
        detail["ink"]["functions"][0],
        json!({ "name": "swap", "gas_used": "32,000", "runtime": "8ms", "last_tested": "2024-01-15" })
    );
}

#[actix_web::test]
async fn run_without_body_uses_empty_input() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let request = TestRequest::post()
        .uri("/api/v1/contracts/1/benchmarks/ink/add_liquidity")
        .set_json(json!({}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn invalid_targets_are_rejected() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let cases = [
        ("/api/v1/contracts/42/benchmarks/solidity/swap", StatusCode::NOT_FOUND),
        ("/api/v1/contracts/2/benchmarks/ink/swap", StatusCode::NOT_FOUND),
        ("/api/v1/contracts/1/benchmarks/solidity/withdraw", StatusCode::NOT_FOUND),
        ("/api/v1/contracts/1/benchmarks/evm/swap", StatusCode::BAD_REQUEST),
    ];
    for (uri, expected) in cases {
        let response = test::call_service(&app, run_request(uri, "").to_request()).await;
        assert_eq!(response.status(), expected, "{uri}");
        let body: Value = test::read_body_json(response).await;
        assert!(body["message"].is_string(), "{uri}: {body}");
    }
}

#[actix_web::test]
async fn timed_out_run_raises_dismissible_notice() {
    let mut settings = helpers::test_settings();
    settings.benchmark.simulated_delay = Duration::from_secs(10);
    settings.benchmark.run_timeout = Duration::from_millis(20);
    let router = helpers::app_router(&settings);
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let response = test::call_service(
        &app,
        run_request("/api/v1/contracts/1/benchmarks/ink/swap", "5").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let request = TestRequest::get().uri("/api/v1/contracts/1").to_request();
    let detail: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(detail["ink"]["functions"][0]["gas_used"], json!("32,000"));

    let request = TestRequest::get().uri("/api/v1/notices").to_request();
    let notices: Value = test::call_and_read_body_json(&app, request).await;
    let notices = notices.as_array().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["contract_id"], json!("1"));
    assert_eq!(notices[0]["key"], json!({ "variant": "ink", "function": "swap" }));
    let id = notices[0]["id"].as_u64().unwrap();

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/notices/{id}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = TestRequest::delete()
        .uri(&format!("/api/v1/notices/{id}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = TestRequest::get().uri("/api/v1/notices").to_request();
    let notices: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(notices, json!([]));
}

#[actix_web::test]
async fn shutdown_discards_pending_runs() {
    let shutdown = CancellationToken::new();
    shutdown.cancel();
    let router = helpers::app_router_with_shutdown(&helpers::test_settings(), shutdown);
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let response = test::call_service(
        &app,
        run_request("/api/v1/contracts/1/benchmarks/solidity/swap", "1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let request = TestRequest::get().uri("/api/v1/contracts/1").to_request();
    let detail: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(detail["solidity"]["functions"][0]["last_tested"], json!("2024-01-15"));

    let request = TestRequest::get().uri("/api/v1/notices").to_request();
    let notices: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(notices, json!([]));
}

#[actix_web::test]
async fn cancelling_idle_key_is_a_no_op() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let request = TestRequest::delete()
        .uri("/api/v1/contracts/1/benchmarks/solidity/swap")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

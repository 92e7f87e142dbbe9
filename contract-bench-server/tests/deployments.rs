mod helpers;

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    App,
};
use contract_bench_server::configure_router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const SOLIDITY_ABI: &str = r#"[{"inputs":[{"name":"amount","type":"uint256"}],"name":"stake","outputs":[],"type":"function"}]"#;
const INK_ABI: &str = r#"{"spec":{"constructors":[],"messages":[{"args":[],"name":"vote"}]}}"#;

#[actix_web::test]
async fn ink_only_deployment_is_registered() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let request = TestRequest::post()
        .uri("/api/v1/deployments")
        .set_json(json!({
            "contract_name": "Voting",
            "chain": "passethub",
            "ink_address": "5Voting",
            "ink_abi": INK_ABI,
            "description": "simple voting",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt: Value = test::read_body_json(response).await;
    assert_eq!(
        receipt,
        json!({
            "contract_id": "5",
            "contract_type": "ink",
            "abi_compatibility": { "status": "not_applicable" },
            "abi_mismatch_warning": null,
        })
    );

    let request = TestRequest::get()
        .uri("/api/v1/contracts?contract_type=ink&sort_field=name")
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(view["total"], json!(5));
    let names: Vec<_> = view["contracts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|contract| contract["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Governance Token", "Voting"]);

    let request = TestRequest::get().uri("/api/v1/contracts/5").to_request();
    let detail: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(detail["description"], json!("simple voting"));
    assert_eq!(detail["network"], json!("Passethub"));
    assert_eq!(detail["deployed_time"], detail["ink_deployed_time"]);
    assert_eq!(detail["ink"]["abi"]["spec"]["messages"][0]["name"], json!("vote"));
}

#[actix_web::test]
async fn disjoint_abis_warn_but_register() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let request = TestRequest::post()
        .uri("/api/v1/deployments")
        .set_json(json!({
            "contract_name": "Mixed",
            "chain": "Astar",
            "solidity_address": "0xfeed",
            "solidity_abi": SOLIDITY_ABI,
            "ink_address": "5Mixed",
            "ink_abi": INK_ABI,
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt: Value = test::read_body_json(response).await;
    assert_eq!(receipt["contract_type"], json!("both"));
    assert_eq!(receipt["abi_compatibility"], json!({ "status": "mismatch" }));
    assert!(receipt["abi_mismatch_warning"].is_string());
}

#[actix_web::test]
async fn malformed_abi_skips_check() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let request = TestRequest::post()
        .uri("/api/v1/deployments")
        .set_json(json!({
            "contract_name": "Broken",
            "chain": "Acala",
            "solidity_address": "0xbad",
            "solidity_abi": "[{",
            "ink_abi": INK_ABI,
        }))
        .to_request();
    let receipt: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(receipt["contract_type"], json!("solidity"));
    assert_eq!(receipt["abi_compatibility"]["status"], json!("skipped"));
    assert_eq!(receipt["abi_mismatch_warning"], Value::Null);
}

#[actix_web::test]
async fn invalid_submissions_are_rejected() {
    let router = helpers::app_router(&helpers::test_settings());
    let app = test::init_service(App::new().configure(configure_router(&router))).await;

    let cases = [
        (
            json!({ "contract_name": "NoAddress", "chain": "Passethub" }),
            "at least one of solidity or ink! address must be provided",
        ),
        (
            json!({ "contract_name": "NoChain", "ink_address": "5NoChain" }),
            "deployment chain must be selected",
        ),
        (
            json!({ "contract_name": "", "chain": "Passethub", "ink_address": "5X" }),
            "contract name must not be empty",
        ),
        (
            json!({ "contract_name": "Far", "chain": "Kusama", "ink_address": "5X" }),
            "unknown chain: Kusama",
        ),
    ];
    for (body, message) in cases {
        let request = TestRequest::post()
            .uri("/api/v1/deployments")
            .set_json(&body)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let error: Value = test::read_body_json(response).await;
        assert_eq!(error, json!({ "message": message }));
    }

    let request = TestRequest::post()
        .uri("/api/v1/deployments")
        .set_json(json!({ "contract_name": "X", "chain": "Passethub", "ink_address": "5X", "owner": "me" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = TestRequest::get().uri("/api/v1/contracts").to_request();
    let view: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(view["total"], json!(4));
}

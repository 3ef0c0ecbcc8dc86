//! Integration tests driving the full route table.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use pz_logger::pagination::PaginationDefaults;
use pz_logger::routes::configure_routes;
use pz_logger::services::MessageService;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(MessageService::new()))
                .app_data(web::Data::new(PaginationDefaults::default()))
                .configure(configure_routes),
        )
        .await
    };
}

fn log_message(address: &str, time: &str, severity: &str) -> Value {
    json!({
        "service": "log-tester",
        "address": address,
        "time": time,
        "severity": severity,
        "message": "The quick brown fox"
    })
}

#[actix_web::test]
async fn test_root_and_version() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Hi. I'm pz-logger.");

    let req = test::TestRequest::get().uri("/version").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"version": "1.0.0"}));
}

#[actix_web::test]
async fn test_post_then_list_messages() {
    let app = test_app!();

    let first = log_message("128.1.2.3", "2007-04-05T14:30Z", "Info");
    let req = test::TestRequest::post()
        .uri("/message")
        .set_json(&first)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let second = log_message("128.0.0.0", "2006-04-05T14:30Z", "Fatal");
    let req = test::TestRequest::post()
        .uri("/message")
        .set_json(&second)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/message?sortBy=time&order=asc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["address"], "128.0.0.0");
    assert_eq!(data[1]["address"], "128.1.2.3");
    assert!(data[0]["createdOn"].is_string());
    assert_eq!(
        body["pagination"],
        json!({"count": 2, "page": 0, "perPage": 10, "sortBy": "time", "order": "asc"})
    );

    let req = test::TestRequest::get().uri("/admin/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["numMessages"], 2);
    assert!(body["data"]["startTime"].is_string());
}

#[actix_web::test]
async fn test_list_messages_pages() {
    let app = test_app!();

    for i in 0..5 {
        let message = log_message(&format!("10.0.0.{}", i), "2016-01-01T00:00Z", "Debug");
        let req = test::TestRequest::post()
            .uri("/message")
            .set_json(&message)
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/message?perPage=2&page=2&sortBy=address&order=asc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["address"], "10.0.0.4");
    assert_eq!(body["pagination"]["count"], 5);
}

#[actix_web::test]
async fn test_invalid_pagination_rejected() {
    let app = test_app!();

    for uri in [
        "/message?perPage=0",
        "/message?perPage=ten",
        "/message?page=-1",
        "/message?order=upward",
        "/message?sortBy=colour",
        "/message?page=6148914691236517205",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }
}

#[actix_web::test]
async fn test_malformed_message_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/message")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"service\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_JSON");
}

#[actix_web::test]
async fn test_query_fills_defaults() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/message/query")
        .set_payload("{}")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["query"],
        json!({"size": 10, "from": 0, "sort": [{"createdOn": "desc"}]})
    );
    assert_eq!(body["pagination"]["count"], 0);
}

#[actix_web::test]
async fn test_query_realigns_pagination() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/message/query?perPage=5&sortBy=service&order=asc")
        .set_json(json!({
            "size": 25,
            "from": 23,
            "query": {"match": {"severity": "Error"}}
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["query"]["size"], 25);
    assert_eq!(body["query"]["from"], 0);
    assert_eq!(body["query"]["sort"], json!([{"service": "asc"}]));
    assert_eq!(body["query"]["query"], json!({"match": {"severity": "Error"}}));
    assert_eq!(body["pagination"]["perPage"], 25);
    assert_eq!(body["pagination"]["page"], 0);
}

#[actix_web::test]
async fn test_query_errors() {
    let app = test_app!();

    let cases = [
        ("[1, 2, 3]", "INVALID_JSON"),
        ("not json", "INVALID_JSON"),
        ("{\"size\": 0}", "VALIDATION_FAILED"),
        ("{\"from\": -10}", "VALIDATION_FAILED"),
    ];
    for (payload, code) in cases {
        let req = test::TestRequest::post()
            .uri("/message/query")
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], code, "{}", payload);
        assert!(body.get("query").is_none());
    }
}

#[actix_web::test]
async fn test_openapi_document_served() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["paths"]["/message/query"].is_object());
    assert!(body["components"]["schemas"]["LogMessage"].is_object());
}

#[actix_web::test]
async fn test_unknown_route_uses_error_envelope() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/log/admin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

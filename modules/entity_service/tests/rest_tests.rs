//! REST surface exercised in-process with tower

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{print_test_header, Harness};
use entity_service::api::rest::routes::register_routes;
use entity_service::domain::repository::DocumentStore;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn seeded() -> (Harness, Router) {
    let h = Harness::new().ready();
    h.store
        .put("Users", "u1", json!({"Id": "u1", "First": "Ada", "Last": "Lovelace", "DefaultAccountId": "X"}))
        .await
        .unwrap();
    h.store
        .put("Accounts", "X", json!({"Id": "X", "AccountName": "Acme"}))
        .await
        .unwrap();
    let router = register_routes(Router::new(), h.service.clone());
    (h, router)
}

#[tokio::test]
async fn test_get_with_joins() {
    print_test_header("test_get_with_joins", &["GET hydrates ?joins= paths"]);
    let (_h, router) = seeded().await;

    let (status, body) = send(router, empty_request("GET", "/collections/Users/u1?joins=Account")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Id"], "u1");
    assert_eq!(body["Joins"]["Account"]["AccountName"], "Acme");
    assert_eq!(body["Views"]["FullName"], "Lovelace, Ada");
    println!("✅ {}", body);
}

#[tokio::test]
async fn test_get_missing_and_unknown() {
    let (_h, router) = seeded().await;

    let (status, body) = send(router.clone(), empty_request("GET", "/collections/Users/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Record Not Found");

    let (status, body) = send(router, empty_request("GET", "/collections/Widgets/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Collection Not Found");
}

#[tokio::test]
async fn test_put_validation_error() {
    let (_h, router) = seeded().await;

    let (status, body) = send(
        router,
        json_request("PUT", "/collections/Users", json!({"First": "Bob", "Last": "B", "Email": "nope"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "ValidationError");
    assert_eq!(body["errors"]["Email"], "ValidationFieldSpecificEmailRequired");
}

#[tokio::test]
async fn test_put_query_and_delete() {
    print_test_header(
        "test_put_query_and_delete",
        &["PUT stores a record, POST query finds it, DELETE removes it"],
    );
    let (h, router) = seeded().await;

    let (status, saved) = send(
        router.clone(),
        json_request("PUT", "/collections/Roles", json!({"Name": "Ops", "AccountType": "Partner"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = saved["Id"].as_str().unwrap().to_string();
    assert!(saved["CreateDate"].is_string());

    let (status, found) = send(
        router.clone(),
        json_request(
            "POST",
            "/collections/Roles/query",
            json!({"filter": {"Name": "Ops"}, "joins": ["RoleFeatures.Count"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["total"], 1);
    assert_eq!(found["items"][0]["Joins"]["RoleFeatures"]["Count"], 0);

    let (status, count) = send(router.clone(), empty_request("GET", "/collections/Roles/count")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count["count"], 1);

    let (status, _) = send(router.clone(), empty_request("DELETE", &format!("/collections/Roles/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(h.store.get("Roles", &id).await.unwrap().is_none());

    let (status, _) = send(router, empty_request("DELETE", &format!("/collections/Roles/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

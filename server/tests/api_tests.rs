// tests/api_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use chrono::DateTime;
use common::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_pages_render_html() {
  let app = test_app!(test_state().await);

  for path in ["/", "/add", "/stats"] {
    let resp = test::call_service(&app, TestRequest::get().uri(path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "page {}", path);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "page {} served {}", path, content_type);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("/static/script.js"));
  }

  let resp = test::call_service(&app, TestRequest::get().uri("/static/script.js").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_reports_ok() {
  let app = test_app!(test_state().await);
  let body: Value = test::call_and_read_body_json(&app, TestRequest::get().uri("/api/health").to_request()).await;
  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_create_then_fetch_by_id() {
  let app = test_app!(test_state().await);

  let req = TestRequest::post()
    .uri("/api/products")
    .set_json(json!({"name": "Desk Fan", "price": 1499.5, "category": "electronics"}))
    .to_request();
  let created: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(created["success"], true);
  assert_eq!(created["product"]["name"], "Desk Fan");
  assert_eq!(created["product"]["quantity"], 0);
  assert!(created["product"]["description"].is_null());

  let id = created["product"]["id"].as_i64().expect("id should be assigned");
  let created_at = created["product"]["created_at"].as_str().expect("created_at should be assigned");
  assert!(DateTime::parse_from_rfc3339(created_at).is_ok());

  let fetched: Value =
    test::call_and_read_body_json(&app, TestRequest::get().uri(&format!("/api/products/{}", id)).to_request()).await;
  assert_eq!(fetched, created["product"]);

  let listed: Value = test::call_and_read_body_json(&app, TestRequest::get().uri("/api/products").to_request()).await;
  assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_rejects_malformed_bodies() {
  let app = test_app!(test_state().await);

  let bodies = [
    json!({"name": "No price", "category": "books"}),
    json!({"name": "Bad price", "price": "cheap", "category": "books"}),
    json!({"price": 10.0, "category": "books"}),
    json!({"name": "Bad quantity", "price": 10.0, "category": "books", "quantity": 1.5}),
  ];
  for body in bodies {
    let req = TestRequest::post().uri("/api/products").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {} should be rejected", body);
  }

  let listed: Value = test::call_and_read_body_json(&app, TestRequest::get().uri("/api/products").to_request()).await;
  assert!(listed.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_invalid_query_parameters_are_rejected() {
  let app = test_app!(test_state().await);

  for uri in [
    "/api/products?sort_by=cheapest",
    "/api/products?sort_by=",
    "/api/products?min_price=-1",
    "/api/products?max_price=-0.5",
    "/api/products?min_price=abc",
    "/api/products?skip=-1",
    "/api/products?limit=ten",
  ] {
    let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{} should be rejected", uri);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid request");
  }

  let resp = test::call_service(&app, TestRequest::get().uri("/api/products/not-a-number").to_request()).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let resp = test::call_service(&app, TestRequest::get().uri("/api/products/4242").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_seed_then_filter_sort_and_paginate() {
  let app = test_app!(test_state().await);

  let seeded: Value = test::call_and_read_body_json(&app, TestRequest::post().uri("/api/test-data").to_request()).await;
  assert_eq!(seeded["success"], true);
  assert_eq!(seeded["message"], "Created 8 sample products");

  let categories: Value =
    test::call_and_read_body_json(&app, TestRequest::get().uri("/api/categories").to_request()).await;
  assert_eq!(categories, json!(["books", "clothing", "electronics", "food"]));

  let electronics: Value = test::call_and_read_body_json(
    &app,
    TestRequest::get().uri("/api/products?category=electronics&sort_by=price_desc").to_request(),
  )
  .await;
  let prices: Vec<f64> = electronics
    .as_array()
    .unwrap()
    .iter()
    .map(|p| p["price"].as_f64().unwrap())
    .collect();
  assert_eq!(prices, vec![85999.0, 79999.0]);

  let mid_range: Value = test::call_and_read_body_json(
    &app,
    TestRequest::get().uri("/api/products?min_price=1499&max_price=2999&sort_by=price_asc").to_request(),
  )
  .await;
  let prices: Vec<f64> = mid_range
    .as_array()
    .unwrap()
    .iter()
    .map(|p| p["price"].as_f64().unwrap())
    .collect();
  assert_eq!(prices, vec![1499.0, 1899.0, 2499.0, 2999.0]);

  // An empty category parameter does not filter.
  let all: Value =
    test::call_and_read_body_json(&app, TestRequest::get().uri("/api/products?category=").to_request()).await;
  assert_eq!(all.as_array().unwrap().len(), 8);

  let page: Value = test::call_and_read_body_json(
    &app,
    TestRequest::get().uri("/api/products?skip=3&limit=2&sort_by=name").to_request(),
  )
  .await;
  let all_by_name: Value =
    test::call_and_read_body_json(&app, TestRequest::get().uri("/api/products?sort_by=name").to_request()).await;
  assert_eq!(page.as_array().unwrap()[..], all_by_name.as_array().unwrap()[3..5]);
}

#[actix_web::test]
async fn test_stats_after_seed_and_after_delete_all() {
  let app = test_app!(test_state().await);
  test::call_service(&app, TestRequest::post().uri("/api/test-data").to_request()).await;

  let stats: Value = test::call_and_read_body_json(&app, TestRequest::get().uri("/api/stats").to_request()).await;
  assert_eq!(stats["total_products"], 8);
  assert_eq!(stats["total_categories"], 4);
  assert_eq!(stats["categories_count"]["food"], 2);
  assert_eq!(stats["category_stats"]["books"]["total_quantity"], 25);
  assert_eq!(stats["price_ranges"]["0-1000"], 1);
  assert_eq!(stats["price_ranges"]["10000+"], 2);
  let bucket_total: i64 = stats["price_ranges"].as_object().unwrap().values().map(|v| v.as_i64().unwrap()).sum();
  assert_eq!(bucket_total, 8);

  let deleted: Value =
    test::call_and_read_body_json(&app, TestRequest::delete().uri("/api/products").to_request()).await;
  assert_eq!(deleted["success"], true);
  assert_eq!(deleted["message"], "Deleted 8 products");

  let stats: Value = test::call_and_read_body_json(&app, TestRequest::get().uri("/api/stats").to_request()).await;
  assert_eq!(stats["total_products"], 0);
  assert_eq!(stats["total_value"], 0.0);
  assert_eq!(stats["average_price"], 0.0);
  assert_eq!(stats["total_categories"], 0);
  assert!(stats["category_stats"].as_object().unwrap().is_empty());
  assert!(stats["categories"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_stats_report_quantity_overflow_as_server_error() {
  let app = test_app!(test_state().await);

  for name in ["Bulk bolts", "More bolts"] {
    let req = TestRequest::post()
      .uri("/api/products")
      .set_json(json!({"name": name, "price": 1.0, "category": "hardware", "quantity": i64::MAX}))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  let resp = test::call_service(&app, TestRequest::get().uri("/api/stats").to_request()).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Statistics unavailable");
}

// canteen-client/tests/http_client.rs
// Exercises the reqwest path against a local axum server

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use canteen_client::{CanteenApi, ClientConfig, ClientError, HttpCanteenClient};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::models::{OrderCreate, OrderItemInput};
use std::collections::{BTreeMap, HashMap};

async fn spawn_server() -> String {
    let app = Router::new()
        .route(
            "/canteens",
            get(|| async { Json(json!([{"id": 1, "name": "Main Canteen", "location": "A1"}])) }),
        )
        .route(
            "/canteens/{id}/dishes",
            get(|Path(id): Path<i64>| async move {
                if id == 9 {
                    (StatusCode::OK, "not json".to_string())
                } else {
                    (StatusCode::OK, json!([{"id": 1, "name": "Egg Fried Rice", "price": 10}]).to_string())
                }
            }),
        )
        .route(
            "/dishes/{id}",
            get(|Path(id): Path<i64>| async move {
                if id == 1 {
                    (StatusCode::OK, Json(json!({"id": 1, "name": "Egg Fried Rice", "price": 10.0})))
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({"detail": "Dish not found"})))
                }
            }),
        )
        .route(
            "/options/dish/{id}",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "database is locked"})),
                )
            }),
        )
        .route(
            "/ratings/dish/{id}",
            get(|Path(id): Path<i64>| async move {
                if id == 3 {
                    (StatusCode::BAD_GATEWAY, "upstream unavailable".to_string())
                } else {
                    (StatusCode::SERVICE_UNAVAILABLE, String::new())
                }
            }),
        )
        .route(
            "/orders/",
            post(|Json(body): Json<Value>| async move {
                if body["items"].as_array().map(|a| a.len()).unwrap_or(0) > 1 {
                    (StatusCode::BAD_REQUEST, Json(json!({"detail": "insufficient stock"})))
                } else {
                    (
                        StatusCode::CREATED,
                        Json(json!({
                            "id": 77, "user_id": body["user_id"], "total_price": body["total_price"],
                            "status": "pending", "created_at": "2024-05-01T12:00:00"
                        })),
                    )
                }
            }),
        )
        .route(
            "/orders/{id}/pay",
            post(|Path(id): Path<i64>| async move {
                Json(json!({"message": "Payment successful", "order_id": id, "status": "paid"}))
            }),
        )
        .route(
            "/orders",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let user_id: i64 = q.get("user_id").and_then(|v| v.parse().ok()).unwrap_or(0);
                Json(json!([{
                    "id": 5, "user_id": user_id, "total_price": 24.0, "status": "paid",
                    "created_at": "2024-05-01T12:00:00", "items": []
                }]))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> HttpCanteenClient {
    ClientConfig::new(base_url).with_timeout(5).build_http_client().unwrap()
}

fn order_body(lines: usize) -> OrderCreate {
    let items = (0..lines)
        .map(|i| OrderItemInput {
            dish_id: i as i64 + 1,
            quantity: 2,
            price: Decimal::new(12, 0),
            options: BTreeMap::from([("add_egg".to_string(), "yes".to_string())]),
        })
        .collect::<Vec<_>>();
    OrderCreate {
        user_id: 3,
        total_price: Decimal::new(24, 0) * Decimal::from(lines as i64),
        items,
    }
}

#[tokio::test]
async fn test_successful_get_is_parsed() {
    let base = spawn_server().await;
    let api = client(&base);

    let canteens = api.list_canteens().await.unwrap();
    assert_eq!(canteens.len(), 1);
    assert_eq!(canteens[0].location.as_deref(), Some("A1"));

    let dish = api.get_dish(1).await.unwrap();
    assert_eq!(dish.base_price(), Decimal::new(10, 0));
}

#[tokio::test]
async fn test_detail_shape_is_surfaced_verbatim() {
    let base = spawn_server().await;
    let err = client(&base).create_order(&order_body(2)).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "insufficient stock");
}

#[tokio::test]
async fn test_not_found_detail() {
    let base = spawn_server().await;
    let err = client(&base).get_dish(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message(), "Dish not found");
}

#[tokio::test]
async fn test_message_shape() {
    let base = spawn_server().await;
    let err = client(&base).list_dish_options(1).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "database is locked");
}

#[tokio::test]
async fn test_plain_text_shape() {
    let base = spawn_server().await;
    let err = client(&base).list_dish_ratings(3).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.message(), "upstream unavailable");
}

#[tokio::test]
async fn test_empty_body_synthesizes_status_line() {
    let base = spawn_server().await;
    let err = client(&base).list_dish_ratings(4).await.unwrap_err();
    assert_eq!(err.message(), "HTTP 503 Service Unavailable");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let base = spawn_server().await;
    let err = client(&base).list_canteen_dishes(9).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_order_roundtrip_and_payment() {
    let base = spawn_server().await;
    let api = client(&base);

    let created = api.create_order(&order_body(1)).await.unwrap();
    assert_eq!(created.id, 77);
    assert_eq!(created.total_price, Decimal::new(24, 0));

    let paid = api.pay_order(created.id).await.unwrap();
    assert_eq!(paid.order_id, 77);
    assert_eq!(paid.status.as_str(), "paid");

    let orders = api.list_orders(3).await.unwrap();
    assert_eq!(orders[0].user_id, 3);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr)).list_canteens().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.status(), None);
}

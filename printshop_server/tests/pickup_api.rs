// =====================================================
// Pickup API 통합 테스트
// =====================================================

mod common;
use common::*;
use axum::http::StatusCode;
use serde_json::json;

/// 테스트: 픽업 발급 → 201 + 표시용 금액
#[tokio::test]
async fn test_create_pickup_returns_created() {
    let app = setup_app(&["PU-250307-K3Z9Q"]);

    let (status, body) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-10293", "total_amount": "1499.50" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["order_id"], "ORD-10293");
    assert_eq!(body["pickup_code"], "PU-250307-K3Z9Q");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["formatted_total"], "₹1,499.50");
    assert!(body["collected_at"].is_null());
}

/// 테스트: 코드 충돌은 클라이언트에 드러나지 않음
#[tokio::test]
async fn test_code_collision_is_transparent_to_client() {
    let app = setup_app(&["PU-250307-AAAAA", "PU-250307-AAAAA", "PU-250307-BBBBB"]);

    let (status, _) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-1", "total_amount": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-2", "total_amount": "250" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["pickup_code"], "PU-250307-BBBBB");
}

/// 테스트: 같은 주문에 두 번 발급 → 409
#[tokio::test]
async fn test_duplicate_order_conflicts() {
    let app = setup_app(&[]);
    let request = || post_json("/api/pickups", json!({ "order_id": "ORD-1", "total_amount": "10" }));

    let (status, _) = send(&app, request()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, request()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("ORD-1"));
}

/// 테스트: 잘못된 요청 → 400
#[tokio::test]
async fn test_invalid_create_requests() {
    let app = setup_app(&[]);

    let (status, _) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": " ", "total_amount": "10" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-1", "total_amount": "-10" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 테스트: 코드/주문 ID 조회
#[tokio::test]
async fn test_lookup_by_code_and_order() {
    let app = setup_app(&["PU-250307-AB12Z"]);
    send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-5", "total_amount": "1234567.89" })),
    )
    .await;

    let (status, body) = send(&app, get("/api/pickups/pu-250307-ab12z")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order_id"], "ORD-5");
    assert_eq!(body["formatted_total"], "₹12,34,567.89");

    let (status, body) = send(&app, get("/api/pickups/order/ORD-5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pickup_code"], "PU-250307-AB12Z");

    let (status, _) = send(&app, get("/api/pickups/PU-250307-ZZZZZ")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/pickups/order/ORD-404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/pickups/garbage")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 테스트: 수령 처리는 한 번만 가능
#[tokio::test]
async fn test_collect_pickup_once() {
    let app = setup_app(&["PU-250307-CCCCC"]);
    send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-3", "total_amount": "75" })),
    )
    .await;

    let (status, body) = send(&app, post_empty("/api/pickups/PU-250307-CCCCC/collect")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "collected");
    assert!(!body["collected_at"].is_null());

    let (status, _) = send(&app, post_empty("/api/pickups/PU-250307-CCCCC/collect")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, post_empty("/api/pickups/PU-250307-DDDDD/collect")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 테스트: 금액 포맷 엔드포인트
#[tokio::test]
async fn test_currency_format_endpoint() {
    let app = setup_app(&[]);

    let (status, body) = send(&app, get("/api/currency/format?amount=1234567.891")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formatted"], "₹12,34,567.89");
    assert_eq!(body["amount"], 1234567.891);

    let (_, body) = send(&app, get("/api/currency/format?amount=-50")).await;
    assert_eq!(body["formatted"], "-₹50.00");

    let (_, body) = send(&app, get("/api/currency/format?amount=NaN")).await;
    assert_eq!(body["formatted"], "₹0.00");
    assert!(body["amount"].is_null());

    let (_, body) = send(&app, get("/api/currency/format?amount=inf")).await;
    assert_eq!(body["formatted"], "₹∞");

    let (status, body) = send(&app, get("/api/currency/format?amount=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("query string"), "{body}");

    let (status, body) = send(&app, get("/api/currency/format")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}

/// 테스트: 본문 파싱 실패도 400 + JSON 에러
#[tokio::test]
async fn test_malformed_create_body_is_json_bad_request() {
    let app = setup_app(&[]);

    // 타입 불일치 (order_id 숫자, total_amount 누락)
    let (status, body) = send(&app, post_json("/api/pickups", json!({ "order_id": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    // 깨진 JSON
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/pickups")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"order_id\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    // content-type 누락
    let (status, body) = send(&app, post_empty("/api/pickups")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}

/// 테스트: 컬럼 범위를 넘는 값 → 400
#[tokio::test]
async fn test_out_of_range_create_requests() {
    let app = setup_app(&[]);

    let (status, body) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "ORD-1", "total_amount": "1000000000000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("too large"), "{body}");

    let (status, body) = send(
        &app,
        post_json("/api/pickups", json!({ "order_id": "O".repeat(65), "total_amount": "10" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("64"), "{body}");
}

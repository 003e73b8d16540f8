use axum::http::StatusCode;
use axum_test::{
    multipart::{MultipartForm, Part},
    TestServer,
};
use merchify::{
    adapters::inbound::http::router::{create_router, AppState},
    create_mock_app,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn setup_test_server() -> TestServer {
    let services = create_mock_app().unwrap();

    let state = AppState {
        video_service: Arc::new(services.video_service),
        image_service: Arc::new(services.image_service),
        commerce_service: Arc::new(services.commerce_service),
    };

    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = setup_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_products() {
    let server = setup_test_server();

    let response = server.get("/api/products").await;
    response.assert_status_ok();

    let products: Value = response.json();
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 4);

    let ids: Vec<&str> = products
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"merch-tshirt"));
    assert!(ids.contains(&"merch-hoodie"));
    assert!(ids.contains(&"merch-mug"));
    assert!(ids.contains(&"merch-poster"));

    for product in products {
        assert!(product["name"].as_str().is_some_and(|n| !n.is_empty()));
        assert!(product["price"].as_str().is_some());
        assert!(product["icon"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_create_order() {
    let server = setup_test_server();

    let response = server
        .post("/api/create-order")
        .json(&json!({
            "captured_frame": "data:image/png;base64,iVBORw0KGgo=",
            "product_id": "merch-tshirt",
            "color": "black",
            "size": "L",
            "quantity": 2
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let order: Value = response.json();
    assert_eq!(order["status"], "completed");
    assert_eq!(order["product_id"], "merch-tshirt");
    assert_eq!(order["quantity"], 2);
    assert!(order["checkout_url"]
        .as_str()
        .is_some_and(|url| url.starts_with("https://")));
    assert!(order["id"].as_str().unwrap().starts_with("order_"));
}

#[tokio::test]
async fn test_create_order_unknown_product() {
    let server = setup_test_server();

    let response = server
        .post("/api/create-order")
        .json(&json!({
            "captured_frame": "data:image/png;base64,iVBORw0KGgo=",
            "product_id": "merch-socks",
            "color": "black",
            "size": "M",
            "quantity": 1
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "BadRequest");
    assert!(body["message"].as_str().unwrap().contains("merch-socks"));
}

#[tokio::test]
async fn test_create_order_invalid_quantity() {
    let server = setup_test_server();

    let response = server
        .post("/api/create-order")
        .json(&json!({
            "captured_frame": "data:image/png;base64,iVBORw0KGgo=",
            "product_id": "merch-mug",
            "color": "white",
            "size": "One Size",
            "quantity": 0
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_generate_image() {
    let server = setup_test_server();

    let response = server
        .post("/api/generate-image")
        .json(&json!({
            "prompt": "a cat wearing sunglasses",
            "product_type": "tshirt",
            "color": "black"
        }))
        .await;

    response.assert_status_ok();

    let image: Value = response.json();
    assert_eq!(image["status"], "complete");
    assert!(image["url"].as_str().is_some());
    assert!(image["prompt"]
        .as_str()
        .unwrap()
        .contains("black t-shirt"));
}

#[tokio::test]
async fn test_generate_image_accepts_tshirt_alias() {
    let server = setup_test_server();

    let response = server
        .post("/api/generate-image")
        .json(&json!({
            "prompt": "a cat wearing sunglasses",
            "product_type": "t-shirt"
        }))
        .await;

    response.assert_status_ok();

    let image: Value = response.json();
    assert!(image["prompt"].as_str().unwrap().contains("t-shirt"));
}

#[tokio::test]
async fn test_generate_image_requires_input() {
    let server = setup_test_server();

    let response = server
        .post("/api/generate-image")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_shopify_query() {
    let server = setup_test_server();

    let response = server
        .post("/api/shopify-query")
        .json(&json!({
            "query": "{ shop { name } }"
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body.get("data").is_some());
}

#[tokio::test]
async fn test_shopify_query_rejects_empty() {
    let server = setup_test_server();

    let response = server
        .post("/api/shopify-query")
        .json(&json!({ "query": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_video() {
    let server = setup_test_server();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"fake video bytes".as_slice())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );

    let response = server.post("/api/upload-mux").multipart(form).await;

    response.assert_status(StatusCode::CREATED);

    let asset: Value = response.json();
    assert_eq!(asset["ready"], true);
    assert!(asset["asset_id"]
        .as_str()
        .unwrap()
        .starts_with("mock_asset_"));
    assert!(asset["playback_id"].as_str().is_some());
}

#[tokio::test]
async fn test_upload_video_missing_file_field() {
    let server = setup_test_server();

    let form = MultipartForm::new().add_text("note", "no file here");

    let response = server.post("/api/upload-mux").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn test_get_video() {
    let server = setup_test_server();

    let response = server.get("/api/videos/mock_asset_abcdef12").await;
    response.assert_status_ok();

    let asset: Value = response.json();
    assert_eq!(asset["asset_id"], "mock_asset_abcdef12");
    assert_eq!(asset["status"], "ready");
}

//! Fixed-overlay endpoint tests
//!
//! The annotator is fully local, so this endpoint is exercised end to end:
//! a generated PNG goes in, an annotated PNG and the two constant regions
//! come out.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eyeguide_node::api::http_server::{create_app, AppState};
use tower::util::ServiceExt;

fn test_png_base64(width: u32, height: u32) -> String {
    let image = image::DynamicImage::new_rgb8(width, height);
    let mut buffer = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    STANDARD.encode(buffer.into_inner())
}

async fn post_annotate(body: serde_json::Value) -> axum::response::Response {
    let app = create_app(AppState::new_for_test());
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/v1/annotate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_overlay_round_trip() {
    let response = post_annotate(serde_json::json!({ "image": test_png_base64(640, 400) })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let reply: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(reply["placeholder"], true);
    assert_eq!(reply["width"], 640);
    assert_eq!(reply["height"], 400);

    // Returned image is a decodable PNG of the same dimensions
    let png = STANDARD.decode(reply["image"].as_str().unwrap()).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), 640);
    assert_eq!(decoded.height(), 400);
}

#[tokio::test]
async fn test_exactly_two_constant_regions() {
    let response = post_annotate(serde_json::json!({ "image": test_png_base64(800, 600) })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let reply: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let regions = reply["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 2);

    assert_eq!(regions[0]["label"], "Obstacle");
    assert_eq!(regions[0]["boundingBox"]["x"], 50);
    assert_eq!(regions[0]["boundingBox"]["y"], 50);
    assert_eq!(regions[0]["boundingBox"]["width"], 150);
    assert_eq!(regions[0]["boundingBox"]["height"], 150);

    assert_eq!(regions[1]["label"], "Object");
    assert_eq!(regions[1]["boundingBox"]["x"], 300);
    assert_eq!(regions[1]["boundingBox"]["y"], 100);
    assert_eq!(regions[1]["boundingBox"]["width"], 200);
    assert_eq!(regions[1]["boundingBox"]["height"], 200);
}

#[tokio::test]
async fn test_regions_identical_for_different_images() {
    // The placeholder ignores content: any two images yield the same list
    let first = post_annotate(serde_json::json!({ "image": test_png_base64(512, 384) })).await;
    let second = post_annotate(serde_json::json!({ "image": test_png_base64(1024, 768) })).await;

    let a = axum::body::to_bytes(first.into_body(), usize::MAX)
        .await
        .unwrap();
    let b = axum::body::to_bytes(second.into_body(), usize::MAX)
        .await
        .unwrap();
    let a: serde_json::Value = serde_json::from_slice(&a).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&b).unwrap();
    assert_eq!(a["regions"], b["regions"]);
}

#[tokio::test]
async fn test_missing_image_returns_400() {
    let response = post_annotate(serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corrupt_image_returns_400() {
    // Valid PNG magic bytes followed by garbage: decode fails before any
    // annotation happens
    let corrupt = STANDARD.encode([0x89, 0x50, 0x4E, 0x47, 0x00, 0x01, 0x02, 0x03]);
    let response = post_annotate(serde_json::json!({ "image": corrupt })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let message = String::from_utf8(body.to_vec()).unwrap();
    assert!(message.contains("Invalid image"));
}

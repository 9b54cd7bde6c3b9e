//! tests/api/home.rs

use crate::helpers::setup;

#[tokio::test]
async fn home_page_serves_the_capture_form() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.get("/").await;

    // Assert
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let html = response.text().await.expect("Failed to read body.");
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"action="/waitlist""#));
}

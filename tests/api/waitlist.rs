//! tests/api/waitlist.rs

use crate::helpers::{post_body, setup, spawn, BrokenStore};
use std::sync::Arc;

#[tokio::test]
async fn join_returns_a_200_for_a_valid_email() {
    // Arrange
    let test = setup().await;

    // Act
    let body = "email=ursula_le_guin%40gmail.com";
    let response = test.post_body("/waitlist", body.into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let notification: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(notification["status"], "success");
}

#[tokio::test]
async fn join_persists_the_email() {
    // Arrange
    let test = setup().await;

    // Act
    let body = "email=ursula_le_guin%40gmail.com";
    let _ = test.post_body("/waitlist", body.into()).await;

    // Assert
    assert!(test.store.contains("ursula_le_guin@gmail.com"));
    assert_eq!(test.store.len(), 1);
}

#[tokio::test]
async fn join_normalizes_the_email_before_persisting() {
    // Arrange
    let test = setup().await;

    // Act
    let body = "email=%20Ursula_le_guin%40GMAIL.com%20";
    let response = test.post_body("/waitlist", body.into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert!(test.store.contains("ursula_le_guin@gmail.com"));
}

#[tokio::test]
async fn joining_twice_is_reported_as_already_on_the_waitlist() {
    // Arrange
    let test = setup().await;
    let body = "email=ursula_le_guin%40gmail.com";

    // Act
    let _ = test.post_body("/waitlist", body.into()).await;
    let response = test.post_body("/waitlist", body.into()).await;

    // Assert
    // The duplicate is a success for the user, not an error.
    assert_eq!(200, response.status().as_u16());
    assert_eq!(test.store.len(), 1);

    let notification: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(notification["status"], "info");
}

#[tokio::test]
async fn case_variants_of_the_same_email_deduplicate() {
    // Arrange
    let test = setup().await;

    // Act
    let _ = test
        .post_body("/waitlist", "email=ursula%40gmail.com".into())
        .await;
    let response = test
        .post_body("/waitlist", "email=URSULA%40gmail.com".into())
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(test.store.len(), 1);

    let notification: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(notification["status"], "info");
}

#[tokio::test]
async fn join_returns_a_400_when_the_email_is_missing() {
    // Arrange
    let test = setup().await;
    let test_cases = vec![
        ("", "missing the email field"),
        ("email=", "empty email"),
        ("email=%20%20", "whitespace-only email"),
    ];

    for (body, error_message) in test_cases {
        // Act
        let response = test.post_body("/waitlist", body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }

    assert!(test.store.is_empty());
}

#[tokio::test]
async fn join_returns_a_400_when_the_email_is_invalid() {
    // Arrange
    let test = setup().await;
    let test_cases = vec![
        ("email=notanemail", "missing the at symbol"),
        ("email=ursula%40domain", "missing a dot in the domain"),
        ("email=ursula%20le%20guin%40domain.com", "internal whitespace"),
    ];

    for (body, error_message) in test_cases {
        // Act
        let response = test.post_body("/waitlist", body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );

        let notification: serde_json::Value =
            response.json().await.expect("Failed to parse body.");
        assert_eq!(notification["status"], "warning");
    }

    assert!(test.store.is_empty());
}

#[tokio::test]
async fn join_returns_a_500_when_the_store_fails() {
    // Arrange
    let address = spawn(Arc::new(BrokenStore));

    // Act
    let body = "email=ursula_le_guin%40gmail.com";
    let response = post_body(&address, "/waitlist", body.into()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());

    let notification: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(notification["status"], "error");
}

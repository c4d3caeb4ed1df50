//! API integration tests against a running server

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

/// Client that reports redirects instead of following them
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("No Location header")
        .to_string()
}

/// First catalog entry offered by the create form
async fn first_book_id(client: &Client) -> String {
    let body: Value = client
        .get(format!("{}/catalog/bookinstance/create", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    body["book_list"][0]["id"]
        .as_i64()
        .expect("Catalog has no books; seed the books table first")
        .to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_copies() {
    let response = client()
        .get(format!("{}/catalog/bookinstances", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["bookinstance_list"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_copy() {
    let client = client();
    let book = first_book_id(&client).await;

    // Create
    let response = client
        .post(format!("{}/catalog/bookinstance/create", BASE_URL))
        .form(&[
            ("book", book.as_str()),
            ("imprint", "Integration Press"),
            ("status", "Available"),
            ("due_back", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let copy_url = location(&response);

    // Update keeps the location
    let response = client
        .post(format!("{}{}/update", BASE_URL, copy_url))
        .form(&[
            ("book", book.as_str()),
            ("imprint", "Integration Press, 2nd ed."),
            ("status", "Loaned"),
            ("due_back", "2030-01-01"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), copy_url);

    let body: Value = client
        .get(format!("{}{}", BASE_URL, copy_url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["bookinstance"]["status"], "Loaned");
    assert_eq!(body["bookinstance"]["due_back"], "2030-01-01");

    // Delete twice: both redirect to the list
    for _ in 0..2 {
        let response = client
            .post(format!("{}{}/delete", BASE_URL, copy_url))
            .form(&[("copyid", "")])
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/catalog/bookinstances");
    }

    let response = client
        .get(format!("{}{}", BASE_URL, copy_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_invalid_create_redisplays_form() {
    let response = client()
        .post(format!("{}/catalog/bookinstance/create", BASE_URL))
        .form(&[
            ("book", ""),
            ("imprint", ""),
            ("status", "Available"),
            ("due_back", "someday"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("No errors in response")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["book", "imprint", "due_back"]);
}

#[tokio::test]
#[ignore]
async fn test_missing_copy_not_found() {
    let response = client()
        .get(format!("{}/catalog/bookinstance/2147483647", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

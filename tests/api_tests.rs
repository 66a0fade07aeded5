//! API integration tests
//!
//! These run against a live server with a fresh database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const ADMIN_USER: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

/// Unique-ish suffix so repeated runs do not collide on the compound key
fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

async fn create_author(client: &Client, first_name: &str, last_name: &str) -> i64 {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "firstName": first_name, "lastName": last_name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No author ID")
}

async fn create_book(client: &Client, title: &str, author_id: i64) -> reqwest::Response {
    client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "description": "A story",
            "price": "12.99",
            "unitsSold": 10,
            "genre": "Fantasy",
            "authorId": author_id
        }))
        .send()
        .await
        .expect("Failed to send request")
}

async fn delete_resource(client: &Client, path: &str) -> reqwest::Response {
    client
        .delete(format!("{}{}", BASE_URL, path))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASSWORD))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
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
async fn test_get_unknown_author_returns_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/authors/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "AuthorNotFound");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_author() {
    let client = Client::new();
    let author_id = create_author(&client, "John", "Tolkien").await;

    let response = client
        .get(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Tolkien");
    assert_eq!(body["books"], json!([]));

    let response = delete_resource(&client, &format!("/authors/{}", author_id)).await;
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_blank_author_name_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "firstName": "  ", "lastName": "Tolkien" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ValidationFailure");
}

#[tokio::test]
#[ignore]
async fn test_create_book_and_duplicate_is_rejected() {
    let client = Client::new();
    let author_id = create_author(&client, "Mary", "Shelley").await;
    let title = format!("Frankenstein {}", unique_suffix());

    let response = create_book(&client, &title, author_id).await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");
    assert_eq!(body["authorId"], author_id);

    // Same (title, authorId) pair again
    let response = create_book(&client, &title, author_id).await;
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BookAlreadyExists");

    let response = delete_resource(&client, &format!("/books/{}", book_id)).await;
    assert_eq!(response.status(), 204);
    let response = delete_resource(&client, &format!("/authors/{}", author_id)).await;
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_create_book_for_unknown_author_is_rejected() {
    let client = Client::new();

    let title = format!("Orphan {}", unique_suffix());
    let response = create_book(&client, &title, 999999999).await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "AuthorNotFound");
}

#[tokio::test]
#[ignore]
async fn test_invalid_genre_is_rejected() {
    let client = Client::new();
    let author_id = create_author(&client, "Jane", "Austen").await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": format!("Emma {}", unique_suffix()),
            "price": "5.00",
            "unitsSold": 1,
            "genre": "invalid type",
            "authorId": author_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ValidationFailure");

    let response = delete_resource(&client, &format!("/authors/{}", author_id)).await;
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_author_with_books_cannot_be_deleted() {
    let client = Client::new();
    let author_id = create_author(&client, "Stephen", "King").await;
    let title = format!("It {}", unique_suffix());

    let response = create_book(&client, &title, author_id).await;
    assert_eq!(response.status(), 201);
    let book_id: i64 = response.json::<Value>().await.unwrap()["id"].as_i64().unwrap();

    let response = delete_resource(&client, &format!("/authors/{}", author_id)).await;
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "AuthorHasBooks");

    // The author must still be retrievable
    let response = client
        .get(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // After removing the book the deletion goes through
    let response = delete_resource(&client, &format!("/books/{}", book_id)).await;
    assert_eq!(response.status(), 204);
    let response = delete_resource(&client, &format!("/authors/{}", author_id)).await;
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_authors_reports_full_total() {
    let client = Client::new();
    let a = create_author(&client, "Ursula", "Le Guin").await;
    let b = create_author(&client, "Frank", "Herbert").await;

    let response = client
        .get(format!("{}/authors?page=0&pageSize=1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["recordCount"], 1);
    // totalRecordCount reflects the whole dataset, not the fetched page
    assert!(body["totalRecordCount"].as_i64().unwrap() >= 2);
    assert!(body["response"][0]["totalBookWorth"].is_string());
    assert!(body["response"][0]["books"].is_array());

    for id in [a, b] {
        let response = delete_resource(&client, &format!("/authors/{}", id)).await;
        assert_eq!(response.status(), 204);
    }
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books?page=0&pageSize=10", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["response"].is_array());
    assert!(body["totalRecordCount"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_delete_requires_credentials() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/authors/1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let response = client
        .delete(format!("{}/authors/1", BASE_URL))
        .basic_auth(ADMIN_USER, Some("wrong"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}

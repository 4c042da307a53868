mod common;

use axum::http::{Method, StatusCode};
use bank_account_server::storage::Storage;
use serde_json::{Value, json};

#[tokio::test]
async fn create_then_list_round_trip() {
    let (server, _storage) = common::make_server();

    let response = server
        .post("/account")
        .json(&json!({"firstName": "A", "lastName": "B"}))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({"firstName": "A", "lastName": "B"}));

    let response = server.get("/account").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let accounts = body.as_array().unwrap();
    assert_eq!(accounts.len(), 1);

    let account = &accounts[0];
    assert_eq!(account["firstName"], "A");
    assert_eq!(account["lastName"], "B");
    assert_eq!(account["balance"], 0);
    assert!(account["id"].as_i64().unwrap() >= 0);
    assert!((0..10_000_000).contains(&account["number"].as_i64().unwrap()));
}

#[tokio::test]
async fn list_is_empty_before_any_account_exists() {
    let (server, _storage) = common::make_server();

    let response = server.get("/account").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn delete_removes_the_account() {
    let (server, storage) = common::make_server();
    let account = common::seed_account(&storage, "Ada", "Lovelace").await;

    let response = server.delete(&format!("/account/{}", account.id)).await;
    response.assert_status_ok();
    response.assert_json(&json!({"deleted": account.id}));

    // The account is gone: a second delete surfaces the storage error
    let response = server.delete(&format!("/account/{}", account.id)).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "error": format!("account {} not found", account.id)
    }));
}

#[tokio::test]
async fn delete_missing_account_is_never_a_silent_success() {
    let (server, _storage) = common::make_server();

    let response = server.delete("/account/999").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "account 999 not found"}));
}

#[tokio::test]
async fn non_integer_id_is_rejected_by_name() {
    let (server, _storage) = common::make_server();

    let response = server.delete("/account/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "invalid id abc"}));
}

#[tokio::test]
async fn unsupported_methods_are_rejected_without_side_effects() {
    let (server, storage) = common::make_server();
    let account = common::seed_account(&storage, "Ada", "Lovelace").await;

    let response = server.method(Method::PUT, "/account").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "unsupported method PUT"}));

    // The unscoped DELETE variant has no id to act on
    let response = server.method(Method::DELETE, "/account").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "unsupported method DELETE"}));

    let response = server
        .method(Method::PATCH, &format!("/account/{}", account.id))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "unsupported method PATCH"}));

    assert_eq!(storage.get_accounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_create_body_is_a_400() {
    let (server, storage) = common::make_server();

    // lastName missing: body fails to decode
    let response = server
        .post("/account")
        .json(&json!({"firstName": "A"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(storage.get_accounts().await.unwrap().is_empty());
}

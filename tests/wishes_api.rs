mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_then_get_returns_identical_record() {
    let srv = TestServer::spawn().await;

    let created = srv.create_wish("Ana", "Congrats!", "ATTENDING").await;
    assert!(created["id"].is_i64());
    assert!(created["timestamp"].is_string());
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["message"], "Congrats!");
    assert_eq!(created["attending"], "ATTENDING");

    let (status, body) = srv.get(&format!("/wishes/{}", created["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn short_name_rejected_before_storage() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .post(srv.url("/wishes"))
        .json(&json!({ "name": "A", "message": "Congrats!", "attending": "ATTENDING" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(srv.wishes.is_empty().await);
}

#[tokio::test]
async fn message_bounds_and_unknown_attendance_rejected() {
    let srv = TestServer::spawn().await;

    for payload in [
        json!({ "name": "Ana", "message": "", "attending": "ATTENDING" }),
        json!({ "name": "Ana", "message": "x".repeat(501), "attending": "ATTENDING" }),
        json!({ "name": "Ana", "message": "Congrats!", "attending": "SOMETIMES" }),
        json!({ "name": "Ana", "message": "Congrats!" }),
    ] {
        let res = srv
            .client
            .post(srv.url("/wishes"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "payload {payload}");
    }
    assert!(srv.wishes.is_empty().await);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .post(srv.url("/wishes"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let srv = TestServer::spawn().await;

    let first = srv.create_wish("Ana", "one", "ATTENDING").await;
    let second = srv.create_wish("Bob", "two", "MAYBE").await;
    let third = srv.create_wish("Cid", "three", "NOT_ATTENDING").await;

    let (status, body) = srv.get("/wishes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let ids: Vec<&Value> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| &w["id"])
        .collect();
    assert_eq!(ids, vec![&third["id"], &second["id"], &first["id"]]);
}

#[tokio::test]
async fn update_replaces_fields() {
    let srv = TestServer::spawn().await;
    let created = srv.create_wish("Ana", "Congrats!", "MAYBE").await;
    let id = &created["id"];

    let res = srv
        .client
        .put(srv.url(&format!("/wishes/{id}")))
        .json(&json!({ "name": "Ana", "message": "See you there", "attending": "NOT_ATTENDING" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["attending"], "NOT_ATTENDING");
    assert_eq!(body["data"]["timestamp"], created["timestamp"]);

    let (_, fetched) = srv.get(&format!("/wishes/{id}")).await;
    assert_eq!(fetched["data"]["attending"], "NOT_ATTENDING");
    assert_eq!(fetched["data"]["message"], "See you there");
}

#[tokio::test]
async fn update_with_unknown_attendance_rejected() {
    let srv = TestServer::spawn().await;
    let created = srv.create_wish("Ana", "Congrats!", "MAYBE").await;

    let res = srv
        .client
        .put(srv.url(&format!("/wishes/{}", created["id"])))
        .json(&json!({ "name": "Ana", "message": "Congrats!", "attending": "PERHAPS" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = srv.get(&format!("/wishes/{}", created["id"])).await;
    assert_eq!(fetched["data"]["attending"], "MAYBE");
}

#[tokio::test]
async fn update_missing_wish_fails_in_envelope() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .put(srv.url("/wishes/999"))
        .json(&json!({ "name": "Ana", "message": "Congrats!", "attending": "MAYBE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": "Failed to update wish" }));
}

#[tokio::test]
async fn delete_then_get_fails() {
    let srv = TestServer::spawn().await;
    let created = srv.create_wish("Ana", "Congrats!", "ATTENDING").await;
    let path = format!("/wishes/{}", created["id"]);

    let res = srv.client.delete(srv.url(&path)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "message": "Wish deleted successfully" }));

    let (status, body) = srv.get(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "error": "Wish not found" }));

    let res = srv.client.delete(srv.url(&path)).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": "Failed to delete wish" }));
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get("/wishes/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn stats_counts_each_status() {
    let srv = TestServer::spawn().await;
    srv.create_wish("Ana", "one", "ATTENDING").await;
    srv.create_wish("Bob", "two", "ATTENDING").await;
    srv.create_wish("Cid", "three", "MAYBE").await;
    srv.create_wish("Dan", "four", "NOT_ATTENDING").await;

    let (status, body) = srv.get("/wishes/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": { "total": 4, "attending": 2, "notAttending": 1, "maybe": 1 }
        })
    );
}

#[tokio::test]
async fn storage_failures_collapse_to_static_messages() {
    let srv = TestServer::spawn().await;
    srv.wishes.set_available(false);

    for (path, message) in [
        ("/wishes", "Failed to fetch wishes"),
        ("/wishes/1", "Failed to fetch wish"),
        ("/wishes/stats", "Failed to fetch statistics"),
    ] {
        let (status, body) = srv.get(path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": false, "error": message }));
    }

    let res = srv
        .client
        .post(srv.url("/wishes"))
        .json(&json!({ "name": "Ana", "message": "Congrats!", "attending": "MAYBE" }))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "error": "Failed to create wish" }));
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .post(srv.url("/wishes"))
        .json(&json!({ "name": "Ana", "message": "x".repeat(20_000), "attending": "ATTENDING" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    assert!(srv.wishes.is_empty().await);
}

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use axum::Router;
use wedding_wishes_api::{build_app_with, repository::InMemoryWishRepository, AppState, Config};

pub struct TestServer {
    pub base_url: String,
    pub wishes: Arc<InMemoryWishRepository>,
    pub client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        Self::spawn_with(Router::new()).await
    }

    /// Spawns the app with additional routes behind the full middleware stack.
    pub async fn spawn_with(extra: Router<AppState>) -> Self {
        let config = Config::from_vars(|key| match key {
            "DATABASE_URL" => Some("postgres://unused".to_string()),
            "LOG_COLORS" => Some("false".to_string()),
            _ => None,
        })
        .expect("test config");

        let wishes = Arc::new(InMemoryWishRepository::new());
        let app = build_app_with(AppState::new(wishes.clone(), config), extra);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            wishes,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    pub async fn create_wish(&self, name: &str, message: &str, attending: &str) -> Value {
        let res = self
            .client
            .post(self.url("/wishes"))
            .json(&json!({ "name": name, "message": message, "attending": attending }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), reqwest::StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["success"], true, "create failed: {body}");
        body["data"].clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

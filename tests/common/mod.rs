use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

use contact_relay::config::Config;
use contact_relay::notify::Notifier;

/// A running test server instance with a dedicated throwaway database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub db_path: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn contact_url(&self) -> String {
        self.url("/api/contact")
    }

    /// Submit a JSON payload to the contact route, return (body, status).
    pub async fn submit_json(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.contact_url())
            .json(payload)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data to the contact route, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let encoded: String = form_urlencoded_pairs(data);
        let resp = self
            .client
            .post(self.contact_url())
            .header("content-type", "application/x-www-form-urlencoded")
            .body(encoded)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Fetch the admin listing, assert 200, return the body.
    pub async fn list_submissions(&self) -> Value {
        let resp = self
            .client
            .get(self.url("/api/admin/submissions"))
            .send()
            .await
            .expect("list submissions failed");
        assert_eq!(resp.status(), StatusCode::OK, "list submissions non-200");
        resp.json().await.unwrap()
    }

    pub async fn count_submissions(&self) -> i64 {
        contact_relay::db::submissions::count(&self.pool)
            .await
            .expect("count query failed")
    }
}

fn form_urlencoded_pairs(data: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in data {
        serializer.append_pair(k, v);
    }
    serializer.finish()
}

/// Spawn a test app with a fresh temporary database and no notifier.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_notifier(None).await
}

/// Spawn a test app with an injected notifier (tests use this to observe
/// notification outcomes without a real SMTP server).
pub async fn spawn_app_with_notifier(notifier: Option<Arc<dyn Notifier>>) -> TestApp {
    let db_path = std::env::temp_dir().join(format!(
        "contact_relay_test_{}.db",
        Uuid::new_v4().simple()
    ));
    let database_url = format!("sqlite://{}", db_path.display());

    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("Invalid test database URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to open test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        max_body_size: 65_536,
        log_level: "warn".to_string(),
        recipient: "staff@test.com".to_string(),
        smtp: None,
    };

    let app = contact_relay::build_app(pool.clone(), config, notifier);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder().build().unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_path,
    }
}

/// Close the pool and remove the temporary database file.
pub async fn cleanup(app: TestApp) {
    let db_path = app.db_path.clone();
    app.pool.close().await;
    let _ = std::fs::remove_file(&db_path);
}

use medicare_portal::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::{factory::build_state, seed::{seed_demo_data, SeedReport}},
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const DEMO_EMAIL: &str = "demo@medicare.app";
pub const DEMO_PASSWORD: &str = "Demo@123";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub seed_report: SeedReport,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            session_ttl_hours: 1,
            cookie_secure: false,
        };

        let state = Arc::new(build_state(&config, pool.clone()));
        let seed_report = seed_demo_data(&state).await.expect("Failed to seed test db");

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            seed_report,
        }
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.router.clone().oneshot(builder.body(Body::from(form_encode(fields))).unwrap()).await.unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    /// Logs in through the form endpoint and returns a `Cookie` header value.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.post_form("/", &[("email", email), ("password", password)], None).await;

        if response.status() != StatusCode::SEE_OTHER {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let token = set_cookie_value(&response, "session_id").expect("No session_id cookie returned");
        format!("session_id={}", token)
    }

    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> Response {
        self.post_form("/register", &[
            ("full_name", full_name),
            ("email", email),
            ("password", password),
            ("confirm", password),
        ], None).await
    }

    /// Follows a redirect's flash cookie to the login page and returns the notice shown there.
    #[allow(dead_code)]
    pub async fn follow_flash(&self, response: &Response) -> Value {
        let flash = set_cookie_value(response, "flash").expect("No flash cookie returned");
        let page = self.get("/", Some(&format!("flash={}", flash))).await;
        parse_body(page).await["flash"].clone()
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn location(response: &Response) -> String {
    response.headers()
        .get(header::LOCATION)
        .map(|h| h.to_str().unwrap().to_string())
        .unwrap_or_default()
}

/// Value of a cookie set by the response, ignoring removals (empty values).
#[allow(dead_code)]
pub fn set_cookie_value(response: &Response, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .filter(|c| c.starts_with(&prefix))
        .map(|c| c[prefix.len()..].split(';').next().unwrap_or_default().to_string())
        .find(|v| !v.is_empty())
}

fn form_encode(fields: &[(&str, &str)]) -> String {
    fields.iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn percent_encode(input: &str) -> String {
    let mut out = String::new();
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

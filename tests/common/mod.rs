//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use ride_registry::infrastructure::driven_adapters::config::{
    AdminConfig, AppConfig, DatabaseConfig, JwtConfig, LogConfig, RateLimitConfig, ServerConfig,
};
use ride_registry::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use ride_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test JWT secret (minimum 32 characters)
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-e2e-testing-only-min-32-chars";

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-e2e-password";

/// Claims used to forge tokens the service did not issue
#[derive(Debug, Serialize)]
pub struct TestClaims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    pub admin_token: String,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let config = create_test_config(format!("postgres://postgres:postgres@{host}:{port}/postgres"));

        let pool = create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        // Build router (without rate limiting for tests)
        let state = AppState::from_pool(config, pool.clone()).expect("Failed to build application state");
        let router = api_rest::router(state);

        let mut app = Self {
            router,
            pool,
            admin_token: String::new(),
            _container: container,
        };
        app.admin_token = app
            .login(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .expect("Bootstrap admin failed to log in");
        app
    }

    /// Get the authorization header value for the admin token
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.admin_token)
    }

    /// Send an authenticated request as the bootstrap admin
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let authorization = self.auth_header();
        self.send_with(method, uri, body, Some(&authorization)).await
    }

    /// Send a request with an explicit (or no) Authorization header
    pub async fn send_with(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, headers, body }
    }

    /// Exchange credentials for an access token; `None` when rejected
    pub async fn login(&self, username: &str, password: &str) -> Option<String> {
        let response = self
            .send_with(
                Method::POST,
                "/auth",
                Some(json!({"username": username, "password": password})),
                None,
            )
            .await;

        (response.status == StatusCode::OK)
            .then(|| response.body["access_token"].as_str().map(str::to_string))
            .flatten()
    }

    /// Count the rows of a table directly
    pub async fn count_rows(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

/// Create a test configuration pointing at the container database
pub fn create_test_config(database_url: String) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: Vec::new(),
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expires_in_secs: 3600,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 100,
            burst_size: 100,
        },
        log: LogConfig::default(),
        admin: Some(AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
    }
}

/// Sign a token with the test secret and an arbitrary lifetime
pub fn sign_token(sub: &str, role: &str, lifetime_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = TestClaims {
        sub: sub.to_string(),
        email: format!("{sub}@example.com"),
        role: role.to_string(),
        iat: now,
        exp: now + lifetime_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Token that expired well past the validation leeway
pub fn expired_token() -> String {
    sign_token("admin", "admin", -3600)
}

pub fn customer_body(email: &str) -> Value {
    json!({
        "name": "John Doe",
        "email": email,
        "rating": 5,
        "balance": 100,
        "location": "New York",
        "destination": "Los Angeles"
    })
}

pub fn driver_body(email: &str) -> Value {
    json!({
        "image_url": "https://img.example.com/jane.png",
        "name": "Jane Smith",
        "email": email,
        "rating": 4,
        "status": "available",
        "location": "Chicago",
        "destination": "Houston"
    })
}

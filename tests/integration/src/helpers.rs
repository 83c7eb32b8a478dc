//! Test helpers for integration tests
//!
//! Provides a spawned test server, token minting and response assertions.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tgo_api::{create_app, create_app_state, API_PREFIX};
use tgo_common::{AppConfig, DatabaseConfig, JwtService, RateLimitConfig};
use tgo_core::UserId;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret shared by the test server and the tokens minted here
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on the in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a server on PostgreSQL, `None` when `DATABASE_URL` is unset
    pub async fn start_postgres() -> Result<Option<Self>> {
        dotenvy::dotenv().ok();
        let Ok(url) = std::env::var("DATABASE_URL") else {
            return Ok(None);
        };

        let mut config = test_config();
        config.database = Some(DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        });
        Self::start_with_config(config).await.map(Some)
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry);

        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url(), API_PREFIX, path)
    }

    /// Mint a bearer token for a user holding the given site roles
    pub fn token(&self, user_id: u64, roles: &[&str]) -> String {
        self.jwt
            .issue(UserId::new(user_id), roles)
            .expect("token minting failed")
    }

    /// Token for a plain player
    pub fn player_token(&self, user_id: u64) -> String {
        self.token(user_id, &["tgo_player"])
    }

    /// Token for an organizer
    pub fn organizer_token(&self, user_id: u64) -> String {
        self.token(user_id, &["organizer"])
    }

    /// GET outside the API namespace (health probes)
    pub async fn get_raw(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// GET an API path
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.api_url(path)).send().await?)
    }

    /// GET an API path with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.api_url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// POST a JSON body without credentials
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.api_url(path)).json(body).send().await?)
    }

    /// POST a JSON body with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.api_url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// PATCH with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.api_url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// PUT with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.api_url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// DELETE with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.api_url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// DELETE without credentials
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.api_url(path)).send().await?)
    }

    /// Client library pointed at this server
    pub fn api_client(&self, token: Option<&str>) -> tgo_client::ApiClient {
        let client = tgo_client::ApiClient::new(self.base_url()).expect("client build failed");
        match token {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}

/// Configuration for in-process test servers
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::for_tests(TEST_JWT_SECRET);
    config.rate_limit = RateLimitConfig {
        requests_per_second: 1000,
        burst: 1000,
    };
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("missing error.code in {body}"))
}

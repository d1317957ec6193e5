//! esa API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::EsaApi;
use super::models::{
    Categories, Category, CreatePostRequest, NewPost, Post, Posts, Team, TeamMembers, TeamStats,
};
use crate::error::{ApiError, ConfigError, Result};

/// Production API base URL
pub const API_BASE_URL: &str = "https://api.esa.io/v1";

/// Connection settings for [`EsaClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Team slug interpolated into every endpoint
    pub team: String,
    /// Access token, without the `Bearer ` scheme
    pub access_token: String,
}

impl ClientConfig {
    /// Settings for the production API.
    pub fn new(access_token: impl Into<String>, team: impl Into<String>) -> Self {
        let token = access_token.into();
        let access_token = match token.strip_prefix("Bearer ") {
            Some(raw) => raw.trim().to_string(),
            None => token.trim().to_string(),
        };

        Self {
            base_url: API_BASE_URL.to_string(),
            team: team.into(),
            access_token,
        }
    }

    /// Point the client at a different API host (staging, local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// esa API client
///
/// Immutable after construction; one reqwest client is reused for every call.
pub struct EsaClient {
    http: HttpClient,
    base_url: Url,
    team: String,
    access_token: String,
}

impl EsaClient {
    /// Create a new client from connection settings
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ConfigError::Invalid(format!("API URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "API URL '{}' cannot be used as a base",
                config.base_url
            ))
            .into());
        }

        let http = HttpClient::builder()
            .user_agent(concat!("esaop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            team: config.team,
            access_token: config.access_token,
        })
    }

    /// Team this client talks to
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Resolve a relative endpoint path and query onto the base URL.
    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&join_path(self.base_url.path(), path));
        url.set_query(None);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Build an authenticated request for a relative endpoint
    fn request(&self, method: Method, path: &str, query: &[(&str, String)]) -> RequestBuilder {
        let url = self.endpoint(path, query);
        debug!("{} {}", method, url);
        self.http.request(method, url).bearer_auth(&self.access_token)
    }

    /// Send a request, mapping transport failures
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// GET a resource and decode it, failing on any non-success status
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send(self.request(Method::GET, path, query)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(service_error(status, response).await);
        }
        decode_body(response).await
    }

    fn team_path(&self, suffix: &str) -> String {
        format!("/teams/{}{}", self.team, suffix)
    }
}

#[async_trait]
impl EsaApi for EsaClient {
    async fn get_team(&self) -> Result<Team> {
        self.get_json(&self.team_path(""), &[]).await
    }

    async fn get_team_stats(&self) -> Result<TeamStats> {
        self.get_json(&self.team_path("/stats"), &[]).await
    }

    async fn get_team_members(&self, page: u32) -> Result<TeamMembers> {
        self.get_json(&self.team_path("/members"), &[("page", page.to_string())])
            .await
    }

    async fn get_posts(&self, page: u32, query: &[String]) -> Result<Posts> {
        let mut params = Vec::with_capacity(2);
        if !query.is_empty() {
            params.push(("q", query.join(" ")));
        }
        params.push(("page", page.to_string()));

        self.get_json(&self.team_path("/posts"), &params).await
    }

    async fn get_post(&self, number: u64) -> Result<Post> {
        self.get_json(&self.team_path(&format!("/posts/{}", number)), &[])
            .await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        if post.name.is_empty() {
            return Err(ApiError::Validation("post name is required".to_string()).into());
        }

        let request = self
            .request(Method::POST, &self.team_path("/posts"), &[])
            .json(&CreatePostRequest { post });
        let response = self.send(request).await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(service_error(status, response).await);
        }
        decode_body(response).await
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        let response: Categories = self.get_json(&self.team_path("/categories"), &[]).await?;
        Ok(response.categories)
    }
}

/// Join a relative path onto a base path, collapsing duplicate separators
fn join_path(base: &str, relative: &str) -> String {
    let segments: Vec<&str> = base
        .split('/')
        .chain(relative.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    format!("/{}", segments.join("/"))
}

/// Read the whole body and decode it as `T`
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

    serde_json::from_str(&body).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}

/// Turn an unexpected status into a service error carrying the raw body
async fn service_error(status: StatusCode, response: Response) -> crate::error::Error {
    match response.text().await {
        Ok(body) => ApiError::Service { status, body }.into(),
        Err(e) => {
            ApiError::Network(format!("Failed to read {} response body: {}", status, e)).into()
        }
    }
}

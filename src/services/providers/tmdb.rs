/// TMDB (The Movie Database) provider
///
/// Authenticates with a v4 read access token sent as a bearer credential.
/// The token is checked before every call; when it is missing no request is
/// made and a configuration error is returned instead.
use std::time::Duration;

use reqwest::{header::ACCEPT, Client as HttpClient};
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::{MovieProvider, MISSING_CREDENTIAL},
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    access_token: Option<String>,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    /// Creates a provider from application configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            access_token: config.access_token().map(str::to_string),
            api_url: config.tmdb_api_url.trim_end_matches('/').to_string(),
            language: config.tmdb_language.clone(),
        })
    }

    fn access_token(&self) -> AppResult<&str> {
        self.access_token.as_deref().ok_or_else(|| {
            tracing::error!("TMDB access token not configured");
            AppError::Configuration(MISSING_CREDENTIAL.to_string())
        })
    }

    /// Issues a single authenticated GET and returns the JSON body
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> AppResult<Value> {
        let token = self.access_token()?;
        let url = format!("{}{}", self.api_url, endpoint);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                endpoint = %endpoint,
                body = %body,
                provider = "tmdb",
                "TMDB API returned an error"
            );
            return Err(AppError::from_upstream_status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    fn has_credential(&self) -> bool {
        self.access_token.is_some()
    }

    async fn popular_movies(&self, page: u32) -> AppResult<Value> {
        let params = [
            ("page", page.to_string()),
            ("language", self.language.clone()),
        ];
        self.get("/movie/popular", &params).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Value> {
        let params = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("language", self.language.clone()),
            ("include_adult", "false".to_string()),
        ];
        self.get("/search/movie", &params).await
    }

    async fn movie_details(&self, movie_id: u64) -> AppResult<Value> {
        let params = [("language", self.language.clone())];
        self.get(&format!("/movie/{}", movie_id), &params).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

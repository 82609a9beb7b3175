/// Movie metadata provider abstraction
///
/// A provider performs exactly one upstream call per method and hands back the
/// raw JSON body. Normalization happens in the service layer so that every
/// payload goes through the same defensive mapping regardless of source.
use serde_json::Value;

use crate::error::AppResult;

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Message reported when the upstream credential is not configured
pub const MISSING_CREDENTIAL: &str = "TMDB API token not configured";

/// Trait for movie metadata providers
///
/// Implementations must not retry: upstream failures are classified and
/// surfaced to the caller as-is.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Whether the credential required for upstream calls is configured
    fn has_credential(&self) -> bool;

    /// Fetch one page of the popular movies listing
    async fn popular_movies(&self, page: u32) -> AppResult<Value>;

    /// Search movies by title
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Value>;

    /// Fetch the full record for a single movie
    async fn movie_details(&self, movie_id: u64) -> AppResult<Value>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

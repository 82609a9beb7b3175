use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderName},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MovieDetailResponse, SearchResponse},
    routes::AppState,
    services::{
        movies,
        providers::MISSING_CREDENTIAL,
        validation::{parse_movie_id, validate_page, validate_search},
    },
};

/// Successful response carrying a freshness hint for downstream caches
type Cached<T> = ([(HeaderName, String); 1], Json<T>);

fn cached<T>(state: &AppState, body: T) -> Cached<T> {
    (
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.revalidate_secs),
        )],
        Json(body),
    )
}

/// Fails before any input is inspected when upstream calls cannot be made
fn require_credential(state: &AppState) -> AppResult<()> {
    if state.provider.has_credential() {
        Ok(())
    } else {
        tracing::error!("TMDB access token not configured");
        Err(AppError::Configuration(MISSING_CREDENTIAL.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
    page: Option<String>,
}

/// Handler for the popular movies listing
pub async fn popular(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<Cached<Value>> {
    require_credential(&state)?;
    let Query(params) = query?;
    let page = validate_page(params.page.as_deref())?;

    tracing::debug!(request_id = %request_id, page = page, "Listing popular movies");

    let body = movies::popular_movies(state.provider.as_ref(), page).await?;
    Ok(cached(&state, body))
}

/// Handler for movie search
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Cached<SearchResponse>> {
    require_credential(&state)?;
    let Query(params) = query?;
    let params = validate_search(params.q.as_deref(), params.page.as_deref())?;

    tracing::debug!(
        request_id = %request_id,
        query = %params.query,
        page = params.page,
        "Searching movies"
    );

    let response =
        movies::search_movies(state.provider.as_ref(), &params, &state.image_base_url).await?;
    Ok(cached(&state, response))
}

/// Handler for a single movie's details
pub async fn details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Cached<MovieDetailResponse>> {
    require_credential(&state)?;
    let Path(id) = id?;
    let movie_id = parse_movie_id(&id)?;

    tracing::debug!(request_id = %request_id, movie_id = movie_id, "Fetching movie details");

    let response =
        movies::movie_details(state.provider.as_ref(), movie_id, &state.image_base_url).await?;
    Ok(cached(&state, response))
}

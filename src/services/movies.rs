use serde_json::Value;

use crate::{
    error::AppResult,
    models::{
        image_url, map_movie_detail, map_search_page, ImageSize, MovieDetailResponse,
        SearchResponse,
    },
    services::{providers::MovieProvider, validation::SearchParams},
};

/// Fetches a page of popular movies
///
/// The upstream body is passed through untouched.
pub async fn popular_movies(provider: &dyn MovieProvider, page: u32) -> AppResult<Value> {
    let body = provider.popular_movies(page).await?;

    tracing::info!(page = page, provider = provider.name(), "Popular movies fetched");

    Ok(body)
}

/// Searches movies and normalizes the results
pub async fn search_movies(
    provider: &dyn MovieProvider,
    params: &SearchParams,
    image_base: &str,
) -> AppResult<SearchResponse> {
    let raw = provider.search_movies(&params.query, params.page).await?;
    let response = map_search_page(&raw, params.page, image_base)?;

    tracing::info!(
        query = %params.query,
        page = params.page,
        results = response.results.len(),
        provider = provider.name(),
        "Movie search completed"
    );

    Ok(response)
}

/// Fetches and normalizes the detail record for one movie
pub async fn movie_details(
    provider: &dyn MovieProvider,
    movie_id: u64,
    image_base: &str,
) -> AppResult<MovieDetailResponse> {
    let raw = provider.movie_details(movie_id).await?;
    let detail = map_movie_detail(&raw)?;

    tracing::info!(movie_id = movie_id, provider = provider.name(), "Movie details fetched");

    Ok(MovieDetailResponse {
        poster_url: image_url(image_base, detail.movie.poster_path.as_deref(), ImageSize::W500),
        backdrop_url: image_url(
            image_base,
            detail.movie.backdrop_path.as_deref(),
            ImageSize::W1280,
        ),
        detail,
    })
}

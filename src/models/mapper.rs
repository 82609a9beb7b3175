/// Normalization of untrusted TMDB payloads
///
/// TMDB responses are treated as loosely-typed JSON. Only `id` and `title` are
/// required; every other field is type-checked on its own and falls back to a
/// default when missing or of the wrong type.
use serde_json::{Map, Value};

use super::{
    image::{image_url, ImageSize},
    Genre, Movie, MovieDetail, ProductionCompany, ProductionCountry, SearchResponse,
    SearchResult, SpokenLanguage,
};

/// Rejection produced when a payload cannot be normalized
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Invalid movie data")]
    InvalidData,

    #[error("Missing required fields: id, title")]
    MissingRequiredFields,
}

type Object = Map<String, Value>;

const DEFAULT_STATUS: &str = "Released";

/// Maps a raw TMDB movie object into a [`Movie`]
pub fn map_movie(raw: &Value) -> Result<Movie, MapError> {
    let obj = raw.as_object().ok_or(MapError::InvalidData)?;
    movie_from_object(obj)
}

/// Maps a raw TMDB movie detail object into a [`MovieDetail`]
///
/// Accepts everything [`map_movie`] accepts. List fields that are missing or
/// not arrays become empty lists.
pub fn map_movie_detail(raw: &Value) -> Result<MovieDetail, MapError> {
    let obj = raw.as_object().ok_or(MapError::InvalidData)?;
    let movie = movie_from_object(obj)?;

    Ok(MovieDetail {
        movie,
        tagline: string_or_default(obj, "tagline", ""),
        runtime: f64_or_zero(obj, "runtime"),
        budget: f64_or_zero(obj, "budget"),
        revenue: f64_or_zero(obj, "revenue"),
        status: string_or_default(obj, "status", DEFAULT_STATUS),
        genres: records(obj, "genres", |entry| Genre {
            id: i64_or_zero(entry, "id"),
            name: string_or_default(entry, "name", ""),
        }),
        production_companies: records(obj, "production_companies", |entry| ProductionCompany {
            id: i64_or_zero(entry, "id"),
            name: string_or_default(entry, "name", ""),
        }),
        production_countries: records(obj, "production_countries", |entry| ProductionCountry {
            code: string_or_default(entry, "iso_3166_1", ""),
            name: string_or_default(entry, "name", ""),
        }),
        spoken_languages: records(obj, "spoken_languages", |entry| SpokenLanguage {
            code: string_or_default(entry, "iso_639_1", ""),
            name: string_or_default(entry, "name", ""),
        }),
    })
}

/// Maps a raw TMDB search page, resolving poster URLs for each hit
///
/// Entries rejected by [`map_movie`] are dropped rather than failing the page.
pub fn map_search_page(
    raw: &Value,
    requested_page: u32,
    image_base: &str,
) -> Result<SearchResponse, MapError> {
    let obj = raw.as_object().ok_or(MapError::InvalidData)?;

    let page = obj
        .get("page")
        .and_then(Value::as_u64)
        .and_then(|page| u32::try_from(page).ok())
        .unwrap_or(requested_page);

    let results: Vec<SearchResult> = obj
        .get("results")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| match map_movie(entry) {
                    Ok(movie) => Some(movie),
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping malformed search result");
                        None
                    }
                })
                .map(|movie| SearchResult {
                    poster_url: image_url(image_base, movie.poster_path.as_deref(), ImageSize::W342),
                    movie,
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(SearchResponse {
        page,
        total_pages: u64_or_zero(obj, "total_pages"),
        total_results: u64_or_zero(obj, "total_results"),
        results,
    })
}

fn movie_from_object(obj: &Object) -> Result<Movie, MapError> {
    let id = obj.get("id").and_then(Value::as_i64);
    let title = obj.get("title").and_then(Value::as_str);

    let (Some(id), Some(title)) = (id, title) else {
        return Err(MapError::MissingRequiredFields);
    };

    Ok(Movie {
        id,
        title: title.to_string(),
        overview: string_or_default(obj, "overview", ""),
        poster_path: optional_string(obj, "poster_path"),
        backdrop_path: optional_string(obj, "backdrop_path"),
        vote_average: f64_or_zero(obj, "vote_average"),
        vote_count: u64_or_zero(obj, "vote_count"),
        release_date: string_or_default(obj, "release_date", ""),
        genre_ids: obj
            .get("genre_ids")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default(),
        popularity: f64_or_zero(obj, "popularity"),
    })
}

fn string_or_default(obj: &Object, key: &str, default: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn optional_string(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn f64_or_zero(obj: &Object, key: &str) -> f64 {
    obj.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn u64_or_zero(obj: &Object, key: &str) -> u64 {
    obj.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn i64_or_zero(obj: &Object, key: &str) -> i64 {
    obj.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn records<T>(obj: &Object, key: &str, map: impl Fn(&Object) -> T) -> Vec<T> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_object).map(map).collect())
        .unwrap_or_default()
}

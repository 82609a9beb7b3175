use serde::{Deserialize, Serialize};

/// Summary record for a movie, as listed in search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f64,
    pub vote_count: u64,
    pub release_date: String,
    pub genre_ids: Vec<i64>,
    pub popularity: f64,
}

/// Full record for a single movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub tagline: String,
    /// Runtime in minutes
    pub runtime: f64,
    pub budget: f64,
    pub revenue: f64,
    pub status: String,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
}

/// Country keyed by its ISO 3166-1 code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionCountry {
    #[serde(rename = "iso_3166_1")]
    pub code: String,
    pub name: String,
}

/// Language keyed by its ISO 639-1 code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpokenLanguage {
    #[serde(rename = "iso_639_1")]
    pub code: String,
    pub name: String,
}

// ============================================================================
// Response envelopes
// ============================================================================

/// A search hit with its poster URL resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(flatten)]
    pub movie: Movie,
    pub poster_url: Option<String>,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub page: u32,
    pub total_pages: u64,
    pub total_results: u64,
    pub results: Vec<SearchResult>,
}

/// Movie detail with poster and backdrop URLs resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetailResponse {
    #[serde(flatten)]
    pub detail: MovieDetail,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
}

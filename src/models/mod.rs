pub mod image;
pub mod mapper;
pub mod movie;

pub use image::{image_url, ImageSize};
pub use mapper::{map_movie, map_movie_detail, map_search_page, MapError};
pub use movie::{
    Genre, Movie, MovieDetail, MovieDetailResponse, ProductionCompany, ProductionCountry,
    SearchResponse, SearchResult, SpokenLanguage,
};

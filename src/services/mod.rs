pub mod movies;
pub mod providers;
pub mod validation;

pub use providers::{MovieProvider, TmdbProvider};

//! Endpoint groups of the news API

pub mod stories;

pub use stories::StoriesApi;

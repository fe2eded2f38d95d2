//! Pexels tools module.
//!
//! Everything specific to the Pexels photo search API:
//! - `client`: the HTTP client (one GET per call, auth header, error mapping)
//! - `models`: request, upstream response, and reduced result types
//! - `search_photos`: the `search_photos` MCP tool

pub mod client;
pub mod models;
pub mod search_photos;

pub use client::PexelsClient;
pub use models::{
    Orientation, Photo, PhotoColor, PhotoSize, PhotoSrc, SearchRequest, SearchResult,
};
pub use search_photos::{SearchPhotosParams, SearchPhotosTool};

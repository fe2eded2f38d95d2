//! Data models for the Pexels photo search API.
//!
//! Three groups of types live here:
//! - `SearchRequest` and its enums: the outgoing query, serialized directly
//!   into the upstream query string (absent optional fields are omitted).
//! - `Pexels*` structs: the upstream response exactly as the API returns it.
//! - `Photo` / `PhotoSrc` / `SearchResult`: the reduced projection handed
//!   back to MCP clients.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Search Request
// ============================================================================

/// Photo orientation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

/// Minimum photo size filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSize {
    Large,
    Medium,
    Small,
}

/// Dominant color filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhotoColor {
    Red,
    Orange,
    Yellow,
    Green,
    Turquoise,
    Blue,
    Violet,
    Pink,
    Brown,
    Black,
    Gray,
    White,
}

/// A validated search request, ready to be sent upstream.
///
/// `query`, `page` and `per_page` are always present; the remaining fields
/// are only serialized when they were supplied by the caller. Constructed
/// fresh for every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<PhotoColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

// ============================================================================
// Upstream Response
// ============================================================================

/// Image URLs as returned by the Pexels API, one per rendition.
#[derive(Debug, Clone, Deserialize)]
pub struct PexelsPhotoSrc {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

/// A single photo record as returned by the Pexels API.
#[derive(Debug, Clone, Deserialize)]
pub struct PexelsPhoto {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    pub photographer_id: u64,
    pub avg_color: String,
    pub src: PexelsPhotoSrc,
    pub liked: bool,
    pub alt: String,
}

/// The full search response body from the Pexels API.
#[derive(Debug, Clone, Deserialize)]
pub struct PexelsSearchResponse {
    pub total_results: u64,
    pub page: u32,
    pub per_page: u32,
    pub photos: Vec<PexelsPhoto>,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
}

// ============================================================================
// Reduced Projection
// ============================================================================

/// Reduced rendition set: only the five sizes clients need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSrc {
    pub original: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub tiny: String,
}

/// Reduced photo record returned to MCP clients.
///
/// Drops `photographer_id` and `liked` from the upstream record, and the
/// `large2x` / `portrait` / `landscape` renditions from `src`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub photographer: String,
    pub photographer_url: String,
    pub avg_color: String,
    pub alt: String,
    pub src: PhotoSrc,
}

/// The result payload of one search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_results: u64,
    pub page: u32,
    pub per_page: u32,
    pub photos: Vec<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
}

impl From<PexelsPhotoSrc> for PhotoSrc {
    fn from(src: PexelsPhotoSrc) -> Self {
        Self {
            original: src.original,
            large: src.large,
            medium: src.medium,
            small: src.small,
            tiny: src.tiny,
        }
    }
}

impl From<PexelsPhoto> for Photo {
    fn from(photo: PexelsPhoto) -> Self {
        Self {
            id: photo.id,
            width: photo.width,
            height: photo.height,
            url: photo.url,
            photographer: photo.photographer,
            photographer_url: photo.photographer_url,
            avg_color: photo.avg_color,
            alt: photo.alt,
            src: photo.src.into(),
        }
    }
}

impl From<PexelsSearchResponse> for SearchResult {
    fn from(response: PexelsSearchResponse) -> Self {
        Self {
            total_results: response.total_results,
            page: response.page,
            per_page: response.per_page,
            photos: response.photos.into_iter().map(Photo::from).collect(),
            next_page: response.next_page,
            prev_page: response.prev_page,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A representative upstream photo, all fields populated.
    pub(crate) fn sample_upstream_photo(id: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "width": 4000,
            "height": 6000,
            "url": format!("https://www.pexels.com/photo/{id}/"),
            "photographer": "Jane Doe",
            "photographer_url": "https://www.pexels.com/@jane-doe",
            "photographer_id": 117,
            "avg_color": "#978E82",
            "src": {
                "original": format!("https://images.pexels.com/photos/{id}/original.jpg"),
                "large2x": format!("https://images.pexels.com/photos/{id}/large2x.jpg"),
                "large": format!("https://images.pexels.com/photos/{id}/large.jpg"),
                "medium": format!("https://images.pexels.com/photos/{id}/medium.jpg"),
                "small": format!("https://images.pexels.com/photos/{id}/small.jpg"),
                "portrait": format!("https://images.pexels.com/photos/{id}/portrait.jpg"),
                "landscape": format!("https://images.pexels.com/photos/{id}/landscape.jpg"),
                "tiny": format!("https://images.pexels.com/photos/{id}/tiny.jpg")
            },
            "liked": false,
            "alt": "A photo"
        })
    }

    /// A canned two-photo search response.
    pub(crate) fn sample_upstream_response() -> serde_json::Value {
        serde_json::json!({
            "total_results": 2,
            "page": 1,
            "per_page": 15,
            "photos": [sample_upstream_photo(101), sample_upstream_photo(102)],
            "next_page": "https://api.pexels.com/v1/search?page=2&per_page=15&query=nature"
        })
    }

    #[test]
    fn filter_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(Orientation::Landscape).unwrap(),
            serde_json::json!("landscape")
        );
        assert_eq!(
            serde_json::to_value(PhotoSize::Medium).unwrap(),
            serde_json::json!("medium")
        );
        assert_eq!(
            serde_json::to_value(PhotoColor::Turquoise).unwrap(),
            serde_json::json!("turquoise")
        );
    }

    #[test]
    fn request_omits_absent_filters() {
        let request = SearchRequest {
            query: "nature".to_string(),
            page: 1,
            per_page: 15,
            orientation: None,
            size: None,
            color: None,
            locale: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        for key in ["query", "page", "per_page"] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn request_serializes_provided_filters() {
        let request = SearchRequest {
            query: "ocean".to_string(),
            page: 2,
            per_page: 30,
            orientation: Some(Orientation::Portrait),
            size: Some(PhotoSize::Large),
            color: Some(PhotoColor::Blue),
            locale: Some("pt-BR".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["orientation"], "portrait");
        assert_eq!(value["size"], "large");
        assert_eq!(value["color"], "blue");
        assert_eq!(value["locale"], "pt-BR");
    }

    #[test]
    fn reduction_drops_photographer_id_and_liked() {
        let upstream: PexelsPhoto =
            serde_json::from_value(sample_upstream_photo(101)).unwrap();
        let reduced = Photo::from(upstream);

        let value = serde_json::to_value(&reduced).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("photographer_id"));
        assert!(!object.contains_key("liked"));
        assert_eq!(value["photographer"], "Jane Doe");
    }

    #[test]
    fn reduction_keeps_five_renditions() {
        let upstream: PexelsPhoto =
            serde_json::from_value(sample_upstream_photo(101)).unwrap();
        let reduced = Photo::from(upstream);

        let value = serde_json::to_value(&reduced.src).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for key in ["original", "large", "medium", "small", "tiny"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        for key in ["large2x", "portrait", "landscape"] {
            assert!(!object.contains_key(key), "unexpected {key}");
        }
    }

    #[test]
    fn result_passes_pagination_through() {
        let upstream: PexelsSearchResponse =
            serde_json::from_value(sample_upstream_response()).unwrap();
        let result = SearchResult::from(upstream);

        assert_eq!(result.total_results, 2);
        assert_eq!(result.page, 1);
        assert_eq!(result.per_page, 15);
        assert_eq!(result.photos.len(), 2);
        assert!(result.next_page.is_some());
        assert!(result.prev_page.is_none());

        // Absent pagination links must not appear in the serialized payload.
        let value = serde_json::to_value(&result).unwrap();
        assert!(!value.as_object().unwrap().contains_key("prev_page"));
    }
}

// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A single Instagram post as it travels over the wire: synthesized by the
/// feed endpoint, read-only on the client, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub permalink: String,
    pub caption: String,
    pub media_type: MediaType,
    pub media_url: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "IMAGE")]
    Image,
}

/// Feed payload envelope. `data` defaults to empty so a response without
/// the field reads as an empty list on the client side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEnvelope {
    #[serde(default)]
    pub data: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_serializes_uppercase() {
        let json = serde_json::to_string(&MediaType::Image).unwrap();
        assert_eq!(json, "\"IMAGE\"");
    }

    #[test]
    fn test_envelope_tolerates_missing_data_field() {
        let envelope: FeedEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_post_round_trips_wire_field_names() {
        let json = r#"{
            "id": "DCr_gNaIlnf",
            "permalink": "https://www.instagram.com/p/DCr_gNaIlnf",
            "caption": "Fresh naan from the tandoor",
            "media_type": "IMAGE",
            "media_url": "",
            "timestamp": "2025-01-10T12:00:00+00:00"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "DCr_gNaIlnf");
        assert_eq!(post.media_type, MediaType::Image);
        assert!(post.media_url.is_empty());

        let back = serde_json::to_value(&post).unwrap();
        assert!(back.get("media_type").is_some());
        assert!(back.get("media_url").is_some());
    }
}

//! Image asset type as served by the remote asset service.

use serde::Deserialize;

/// A stored image asset.
///
/// The remote asset service is the owner of record: the client never patches
/// an `Asset` locally. After every mutation the current page is re-fetched
/// and the displayed set is replaced wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    /// Server-assigned opaque identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title (the only mutable field).
    pub title: String,
    /// Locator of the stored image. Immutable.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Server-assigned creation timestamp, when present.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Asset {
    /// Short reference label derived from the identifier tail,
    /// e.g. `Reference_AB12CD`.
    ///
    /// The identifier is opaque, so the tail is taken in characters, not
    /// bytes.
    pub fn reference_label(&self) -> String {
        let skip = self.id.chars().count().saturating_sub(6);
        let tail: String = self.id.chars().skip(skip).collect();
        format!("Reference_{}", tail.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_payload() {
        let json = r#"{
            "_id": "65f1c2d3e4a5b6c7d8e9f0a1",
            "title": "Harbor at dusk",
            "imageUrl": "https://cdn.example.com/harbor.jpg",
            "createdAt": "2026-02-10T09:30:00Z"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "65f1c2d3e4a5b6c7d8e9f0a1");
        assert_eq!(asset.title, "Harbor at dusk");
        assert_eq!(asset.image_url, "https://cdn.example.com/harbor.jpg");
        assert_eq!(asset.created_at.as_deref(), Some("2026-02-10T09:30:00Z"));
    }

    #[test]
    fn created_at_is_optional() {
        let json = r#"{"_id": "a1", "title": "t", "imageUrl": "u"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert!(asset.created_at.is_none());
    }

    #[test]
    fn reference_label_uses_id_tail() {
        let json = r#"{"_id": "65f1c2d3e4a5b6c7d8e9f0a1", "title": "t", "imageUrl": "u"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.reference_label(), "Reference_E9F0A1");
    }

    #[test]
    fn reference_label_respects_char_boundaries() {
        // A multi-byte character sitting across the six-character tail must
        // not panic the byte-offset math.
        let json = r#"{"_id": "abécdefg", "title": "t", "imageUrl": "u"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.reference_label(), "Reference_\u{c9}CDEFG");
    }

    #[test]
    fn reference_label_handles_short_ids() {
        let json = r#"{"_id": "ab", "title": "t", "imageUrl": "u"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.reference_label(), "Reference_AB");
    }
}

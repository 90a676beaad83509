use serde::{Deserialize, Serialize};

/// Platform the submitted URL was classified as by the API.
///
/// Unknown platforms are kept verbatim in `Other` so the UI can still
/// display whatever the server reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Youtube,
    Instagram,
    Facebook,
    Tiktok,
    Other(String),
}

impl From<String> for SourceType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "youtube" => SourceType::Youtube,
            "instagram" => SourceType::Instagram,
            "facebook" => SourceType::Facebook,
            "tiktok" => SourceType::Tiktok,
            _ => SourceType::Other(s),
        }
    }
}

impl From<SourceType> for String {
    fn from(source: SourceType) -> Self {
        match source {
            SourceType::Youtube => "youtube".to_string(),
            SourceType::Instagram => "instagram".to_string(),
            SourceType::Facebook => "facebook".to_string(),
            SourceType::Tiktok => "tiktok".to_string(),
            SourceType::Other(s) => s,
        }
    }
}

impl SourceType {
    /// Badge shown next to a processed video. Unknown platforms fall back
    /// to the generic clapperboard.
    pub fn badge(&self) -> &'static str {
        match self {
            SourceType::Youtube => "🎥",
            SourceType::Instagram => "📸",
            SourceType::Facebook => "👥",
            SourceType::Tiktok => "🎵",
            SourceType::Other(_) => "🎬",
        }
    }

    /// Display label: the wire name with its first letter uppercased.
    pub fn label(&self) -> String {
        let raw = String::from(self.clone());
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => raw,
        }
    }
}

/// Successful `/api/process` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedVideo {
    pub source_type: SourceType,
    pub transcript: String,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub brief: String,
    #[serde(rename = "keyPoints")]
    pub key_points: Vec<String>,
}

/// A previously processed video as returned by `/api/video/{url}` and
/// `/api/search`. Search hits carry `transcript_preview` instead of the
/// full transcript; stored summaries use snake-case `key_points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub url: String,
    pub source_type: SourceType,
    pub processed_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<StoredSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VideoMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSummary {
    pub brief: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// Optional platform metadata stored alongside a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<serde_json::Value>,
}

/// Filter for `/api/search`; absent fields are omitted from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<chrono::NaiveDate>,
}

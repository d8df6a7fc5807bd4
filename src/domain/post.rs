use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::comment::Comment;

/// A pulse: one entry in the social feed.
///
/// Invariants maintained by the app services:
/// - `comment_count` equals `comments.len()` after every mutation.
/// - `rating` is the mean of all submitted ratings, rounded to one decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub channel_id: Uuid,
    pub content_type: ContentType,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<PostEmbed>,
    pub rating: f64,
    pub rating_votes: u32,
    /// The current viewer's rating, if they have rated this pulse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_rating: Option<u8>,
    pub likes: u32,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub is_active: bool,
    pub comment_count: usize,
    pub comments: Vec<Comment>,
}

impl Post {
    /// A fresh pulse with zeroed engagement, as produced by the composer.
    pub fn new(
        author_id: Uuid,
        channel_id: Uuid,
        content_type: ContentType,
        text: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            channel_id,
            content_type,
            text,
            created_at: OffsetDateTime::now_utc(),
            image_url: None,
            media_url: None,
            embed: None,
            rating: 0.0,
            rating_votes: 0,
            viewer_rating: None,
            likes: 0,
            is_liked: false,
            is_bookmarked: false,
            is_active: true,
            comment_count: 0,
            comments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Image,
    Video,
    Podcast,
    Pdf,
    Text,
    Spreadsheet,
    Presentation,
    Quiz,
    H5p,
    Genially,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Podcast => "PODCAST",
            Self::Pdf => "PDF",
            Self::Text => "TEXT",
            Self::Spreadsheet => "SPREADSHEET",
            Self::Presentation => "PRESENTATION",
            Self::Quiz => "QUIZ",
            Self::H5p => "H5P",
            Self::Genially => "GENIALLY",
        }
    }

    /// Human label used by the management tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Podcast => "Audio",
            Self::Pdf => "PDF",
            Self::Text => "Text",
            Self::Spreadsheet => "Spreadsheet",
            Self::Presentation => "Presentation",
            Self::Quiz => "Quiz",
            Self::H5p => "H5P",
            Self::Genially => "Genially",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEmbed {
    pub provider: EmbedProvider,
    pub embed_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedProvider {
    Youtube,
    Vimeo,
    Soundcloud,
    GoogleDocs,
    GoogleSheets,
    GoogleSlides,
    GoogleDrive,
    Genially,
    H5p,
    Link,
}

impl EmbedProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Soundcloud => "soundcloud",
            Self::GoogleDocs => "google_docs",
            Self::GoogleSheets => "google_sheets",
            Self::GoogleSlides => "google_slides",
            Self::GoogleDrive => "google_drive",
            Self::Genially => "genially",
            Self::H5p => "h5p",
            Self::Link => "link",
        }
    }
}

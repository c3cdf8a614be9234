use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a track
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a TrackId from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A track record from the backend listing.
///
/// Read-only to the session: the backend owns these rows, the session only
/// selects among them. Field names follow the listing payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    #[serde(default)]
    pub artist: Option<String>,

    /// Track description
    #[serde(default)]
    pub description: Option<String>,

    /// URL of the uploaded audio file on the media host
    #[serde(default)]
    pub file_url: Option<String>,

    /// Companion video URL; not a playable audio source
    #[serde(default)]
    pub youtube_url: Option<String>,

    /// Duration in seconds, when the uploader provided one
    #[serde(default)]
    pub duration: Option<f64>,

    /// Artwork URL
    #[serde(default)]
    pub album_art: Option<String>,

    /// Music genre
    #[serde(default)]
    pub genre: Option<String>,

    /// Track mood
    #[serde(default)]
    pub mood: Option<String>,

    /// Associated tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Number of times the track has been played
    #[serde(default)]
    pub play_count: u64,

    /// Uploader identity
    #[serde(default)]
    pub created_by: Option<String>,

    /// Record creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Record update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Track {
    /// Resolve the playable media source for this track.
    ///
    /// Only the uploaded file URL can be bound to an output device; a track
    /// without one cannot be loaded.
    pub fn media_url(&self) -> Option<&str> {
        self.file_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Track length from the record's duration, when it is usable.
    pub fn length(&self) -> Option<Duration> {
        self.duration
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
    }
}

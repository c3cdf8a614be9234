use super::TrackId;

/// Errors that can occur during playback operations
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    /// Media source could not be loaded for a track
    #[error("failed to load media for track {track}: {reason}")]
    MediaLoad {
        /// Track whose source failed to load
        track: TrackId,
        /// Device-reported reason
        reason: String,
    },

    /// Runtime failure after the media source loaded successfully
    #[error("playback failed: {reason}")]
    MediaPlayback {
        /// Device-reported reason
        reason: String,
    },

    /// Caller passed an index outside the catalog
    #[error("track index {index} out of bounds (catalog length {len})")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Catalog length at the time of the call
        len: usize,
    },

    /// Advancement requested with zero tracks available
    #[error("cannot advance through an empty catalog")]
    EmptyCatalog,
}

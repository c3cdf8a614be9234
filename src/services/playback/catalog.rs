use std::sync::Arc;

use super::track::Track;

/// An immutable ordered snapshot of the tracks available for playback.
///
/// Insertion order defines next/previous adjacency. The snapshot is replaced
/// wholesale when the backing listing changes; it is never diffed or mutated
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCatalog {
    tracks: Vec<Arc<Track>>,
}

impl TrackCatalog {
    /// Build a catalog from track records, preserving their order.
    pub fn from_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
        }
    }

    /// Decode a catalog from a backend listing response body.
    ///
    /// The payload is the JSON array of track rows the listing endpoint
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is not a valid track array.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        let tracks: Vec<Track> = serde_json::from_str(payload)?;
        Ok(Self::from_tracks(tracks))
    }

    /// Number of tracks in the snapshot.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the snapshot holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`, if within bounds.
    pub fn get(&self, index: usize) -> Option<Arc<Track>> {
        self.tracks.get(index).cloned()
    }

    /// Iterate over the tracks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Track>> {
        self.tracks.iter()
    }

    /// Index following `current`, wrapping past the last track.
    ///
    /// With nothing selected the sequence starts at the first track.
    /// Returns `None` only for an empty catalog.
    pub fn next_index(&self, current: Option<usize>) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        Some(match current {
            Some(index) => (index + 1) % self.tracks.len(),
            None => 0,
        })
    }

    /// Index preceding `current`, wrapping past the first track.
    ///
    /// With nothing selected the sequence starts at the last track.
    /// Returns `None` only for an empty catalog.
    pub fn previous_index(&self, current: Option<usize>) -> Option<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        Some(match current {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        })
    }
}

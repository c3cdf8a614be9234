/// Common utilities shared by services
pub mod common;
/// Playback session service
pub mod playback;

pub use playback::{
    Direction, MediaBindError, MediaHandle, MediaNotification, PlayState, PlaybackError,
    PlaybackSession, SessionState, Track, TrackCatalog, TrackId, Volume,
};

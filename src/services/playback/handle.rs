use std::time::Duration;

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::types::Volume;

/// Asynchronous notification from the output device.
///
/// Delivery order is not guaranteed relative to rebinds; the session
/// discards notifications that belong to a superseded bind.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaNotification {
    /// The bound source is ready for output
    Ready {
        /// Decoded stream length, when the device knows it
        duration: Option<Duration>,
    },

    /// Playback progressed to a new offset
    TimeUpdate {
        /// Current offset into the stream
        position: Duration,
    },

    /// The bound source played to completion
    Ended,

    /// Loading or output failed
    Error {
        /// Device-reported reason
        reason: String,
    },
}

/// Immediate rejection of a bind request.
#[derive(thiserror::Error, Debug)]
#[error("{reason}")]
pub struct MediaBindError {
    /// Why the device refused the source
    pub reason: String,
}

impl MediaBindError {
    /// Create a bind error from a device-reported reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Abstraction over a device capable of decoding and outputting an audio
/// stream from a URL.
///
/// Control calls return once the request is handed to the device; loading
/// completes asynchronously and is reported through [`MediaNotification`]s.
/// Runtime failures after a successful bind are reported the same way, not
/// as return values.
#[async_trait]
pub trait MediaHandle: Send + Sync {
    /// Bind a media source, releasing any previously bound one.
    ///
    /// Returns once loading has been initiated; readiness arrives later as
    /// [`MediaNotification::Ready`].
    ///
    /// # Errors
    ///
    /// Returns an error only when the device rejects the source outright.
    async fn bind(&self, url: &str) -> Result<(), MediaBindError>;

    /// Start or resume output of the bound source.
    async fn play(&self);

    /// Suspend output, retaining the current position.
    async fn pause(&self);

    /// Jump to an offset within the bound source.
    async fn seek_to(&self, position: Duration);

    /// Set the output volume.
    async fn set_volume(&self, volume: Volume);

    /// Mute or unmute output without touching the volume level.
    async fn set_muted(&self, muted: bool);

    /// Subscribe to device notifications.
    ///
    /// Every call returns a fresh subscription covering notifications
    /// emitted after this point.
    fn notifications(&self) -> BoxStream<'static, MediaNotification>;
}

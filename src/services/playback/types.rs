use std::fmt;
use std::ops::Deref;

/// Current state of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// No track selected
    Idle,

    /// A track is bound and waiting for media readiness
    Loading,

    /// Output is running
    Playing,

    /// Output is suspended, position retained
    Paused,

    /// The current track finished and nothing has replaced it yet
    Ended,

    /// The last media operation failed; cleared by the next selection
    Errored,
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Ended => "ended",
            Self::Errored => "errored",
        };
        write!(f, "{label}")
    }
}

/// Direction of catalog traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the following track, wrapping at the end
    Next,

    /// Towards the preceding track, wrapping at the start
    Previous,
}

/// Volume of the player
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    /// Create a new instance of a volume with safeguarded values
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the volume as a percentage
    pub fn as_percentage(&self) -> f64 {
        let clamped_volume = self.0.clamp(0.0, 1.0);
        clamped_volume * 100.0
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Which phase of media handling a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Source unreachable or format unsupported before readiness
    Load,

    /// Runtime failure after the source loaded successfully
    Playback,
}

/// A media failure surfaced on the session's observable error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackFailure {
    /// Phase the failure occurred in
    pub kind: FailureKind,

    /// Device-reported reason
    pub reason: String,
}

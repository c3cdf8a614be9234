use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use futures::Stream;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::config::PlayerConfig;
use crate::services::common::Property;
use crate::watch_all;

use super::catalog::TrackCatalog;
use super::error::PlaybackError;
use super::handle::{MediaHandle, MediaNotification};
use super::monitoring::SessionMonitor;
use super::shuffle::ShuffleOrder;
use super::track::Track;
use super::types::{Direction, FailureKind, PlayState, PlaybackFailure, Volume};

/// Observable state of a playback session.
///
/// Every field is a reactive property: UI layers read snapshots with
/// `get()` or subscribe with `watch()`. Mutation happens only through
/// session operations.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current playback state
    pub play_state: Property<PlayState>,

    /// Index of the selected track within the catalog
    pub current_index: Property<Option<usize>>,

    /// The selected track record
    pub current_track: Property<Option<Arc<Track>>>,

    /// Last known playback offset
    pub position: Property<Duration>,

    /// Length of the selected track, from the record or the device
    pub duration: Property<Option<Duration>>,

    /// Whether the current track replays when it ends
    pub repeat_enabled: Property<bool>,

    /// Whether advancement follows the shuffled order
    pub shuffle_enabled: Property<bool>,

    /// Last requested output volume, kept for UI display
    pub volume: Property<Volume>,

    /// Whether output is muted
    pub muted: Property<bool>,

    /// Most recent media failure; cleared by the next selection
    pub last_error: Property<Option<PlaybackFailure>>,
}

impl SessionState {
    fn new(config: &PlayerConfig) -> Self {
        Self {
            play_state: Property::new(PlayState::Idle),
            current_index: Property::new(None),
            current_track: Property::new(None),
            position: Property::new(Duration::ZERO),
            duration: Property::new(None),
            repeat_enabled: Property::new(config.repeat),
            shuffle_enabled: Property::new(config.shuffle),
            volume: Property::new(Volume::new(config.default_volume)),
            muted: Property::new(config.default_muted),
            last_error: Property::new(None),
        }
    }

    /// Watch for any state change.
    ///
    /// Emits whenever any field changes.
    pub fn watch(&self) -> impl Stream<Item = SessionState> + Send {
        watch_all!(
            self,
            play_state,
            current_index,
            current_track,
            position,
            duration,
            repeat_enabled,
            shuffle_enabled,
            volume,
            muted,
            last_error
        )
    }
}

/// Playback session for one listening surface.
///
/// Owns the selected track, play/pause/seek state, and the advancement
/// policies over a catalog snapshot. All mutating operations must be driven
/// from the surface's single event-processing context; the only asynchronous
/// input is the device notification stream, which is pumped back in by a
/// monitor task guarded with a bind generation counter.
pub struct PlaybackSession {
    /// Observable session state
    pub state: SessionState,

    catalog: Property<Arc<TrackCatalog>>,
    handle: Arc<dyn MediaHandle>,
    self_ref: Weak<PlaybackSession>,
    generation: AtomicU64,
    monitor_handle: Mutex<Option<JoinHandle<()>>>,
    shuffle_order: Mutex<ShuffleOrder>,
}

impl PlaybackSession {
    /// Create a session bound to an output device.
    ///
    /// Pushes the configured volume and mute state to the device. The
    /// session starts with an empty catalog and nothing selected.
    pub async fn new(handle: Arc<dyn MediaHandle>, config: PlayerConfig) -> Arc<Self> {
        let state = SessionState::new(&config);

        handle.set_volume(state.volume.get()).await;
        handle.set_muted(state.muted.get()).await;

        Arc::new_cyclic(|self_ref| Self {
            state,
            catalog: Property::new(Arc::new(TrackCatalog::default())),
            handle,
            self_ref: self_ref.clone(),
            generation: AtomicU64::new(0),
            monitor_handle: Mutex::new(None),
            shuffle_order: Mutex::new(ShuffleOrder::default()),
        })
    }

    /// The current catalog snapshot.
    pub fn catalog(&self) -> Arc<TrackCatalog> {
        self.catalog.get()
    }

    /// Replace the catalog snapshot wholesale.
    ///
    /// Any current playback stops and the session returns to the unloaded
    /// initial state; notifications from the previous binding are discarded
    /// from here on.
    #[instrument(skip(self, catalog), fields(tracks = catalog.len()))]
    pub async fn set_catalog(&self, catalog: TrackCatalog) {
        self.next_generation();
        self.replace_monitor(None);

        if self.state.current_track.get().is_some() {
            self.handle.pause().await;
        }

        let catalog = Arc::new(catalog);
        self.catalog.set(Arc::clone(&catalog));

        self.state.current_index.set(None);
        self.state.current_track.set(None);
        self.state.position.set(Duration::ZERO);
        self.state.duration.set(None);
        self.state.last_error.set(None);
        self.state.play_state.set(PlayState::Idle);

        if self.state.shuffle_enabled.get() {
            self.regenerate_shuffle_order(catalog.len());
        }
    }

    /// Select a catalog track and start loading it.
    ///
    /// Clears any previous error, rebinds the device to the track's media
    /// source, and enters `Loading`; output starts automatically once the
    /// device reports readiness.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when `index` is outside the catalog, leaving all
    /// session state untouched. `MediaLoad` when the track has no playable
    /// source or the device rejects it; the session is then `Errored` until
    /// the next selection.
    #[instrument(skip(self))]
    pub async fn select_track(&self, index: usize) -> Result<(), PlaybackError> {
        let catalog = self.catalog.get();
        let Some(track) = catalog.get(index) else {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: catalog.len(),
            });
        };

        let generation = self.next_generation();

        self.state.current_index.set(Some(index));
        self.state.current_track.set(Some(Arc::clone(&track)));
        self.state.position.set(Duration::ZERO);
        self.state.duration.set(track.length());
        self.state.last_error.set(None);
        self.state.play_state.set(PlayState::Loading);

        // The previous monitor is replaced only at terminal points below: an
        // auto-advance select runs on the monitor task itself, and aborting
        // it before the bind await would cancel this selection mid-flight.
        // Until then the bumped generation keeps its notifications out.
        let Some(url) = track.media_url() else {
            let reason = "track has no playable media source".to_string();
            self.replace_monitor(None);
            self.enter_errored(FailureKind::Load, reason.clone());
            return Err(PlaybackError::MediaLoad {
                track: track.id.clone(),
                reason,
            });
        };

        // Subscribe before binding so an immediate readiness is not missed.
        let notifications = self.handle.notifications();

        if let Err(error) = self.handle.bind(url).await {
            self.replace_monitor(None);
            self.enter_errored(FailureKind::Load, error.reason.clone());
            return Err(PlaybackError::MediaLoad {
                track: track.id.clone(),
                reason: error.reason,
            });
        }

        let monitor = SessionMonitor::start(generation, self.self_ref.clone(), notifications);
        self.replace_monitor(Some(monitor));

        Ok(())
    }

    /// Toggle between `Playing` and `Paused`.
    ///
    /// Outside those two states the toggle is ignored; there is nothing
    /// running to suspend or resume.
    pub async fn toggle_play_pause(&self) {
        match self.state.play_state.get() {
            PlayState::Playing => {
                self.handle.pause().await;
                self.state.play_state.set(PlayState::Paused);
            }
            PlayState::Paused => {
                self.handle.play().await;
                self.state.play_state.set(PlayState::Playing);
            }
            state => {
                debug!(%state, "play/pause toggle ignored outside active playback");
            }
        }
    }

    /// Jump to an offset within the current track.
    ///
    /// Offsets past the known duration are clamped, matching slider input.
    /// Ignored while no track is selected.
    pub async fn seek(&self, offset: Duration) {
        if self.state.current_track.get().is_none() {
            debug!("seek ignored with no track selected");
            return;
        }

        let clamped = match self.state.duration.get() {
            Some(duration) => offset.min(duration),
            None => offset,
        };

        self.state.position.set(clamped);
        self.handle.seek_to(clamped).await;
    }

    /// Move to the neighbouring track, wrapping at both catalog ends.
    ///
    /// With shuffle enabled the neighbour comes from the shuffled order.
    /// With nothing selected, `Next` starts at the first track and
    /// `Previous` at the last. The selection autoplays once ready,
    /// regardless of the state the session was in — including `Errored`,
    /// which the new selection clears.
    ///
    /// # Errors
    ///
    /// `EmptyCatalog` when there are no tracks; session state is untouched.
    /// Propagates `MediaLoad` from the underlying selection.
    #[instrument(skip(self))]
    pub async fn advance(&self, direction: Direction) -> Result<(), PlaybackError> {
        let catalog = self.catalog.get();
        if catalog.is_empty() {
            return Err(PlaybackError::EmptyCatalog);
        }

        let current = self.state.current_index.get();
        let target = if self.state.shuffle_enabled.get() {
            let order = lock_unpoisoned(&self.shuffle_order);
            match direction {
                Direction::Next => order.next_after(current),
                Direction::Previous => order.previous_before(current),
            }
        } else {
            match direction {
                Direction::Next => catalog.next_index(current),
                Direction::Previous => catalog.previous_index(current),
            }
        };

        let Some(target) = target else {
            return Err(PlaybackError::EmptyCatalog);
        };

        self.select_track(target).await
    }

    /// Enable or disable repeat-on-end.
    pub fn set_repeat_enabled(&self, enabled: bool) {
        self.state.repeat_enabled.set(enabled);
    }

    /// Enable or disable shuffled advancement.
    ///
    /// Enabling generates a fresh shuffled order over the current catalog.
    pub fn set_shuffle_enabled(&self, enabled: bool) {
        if enabled {
            self.regenerate_shuffle_order(self.catalog.get().len());
        }
        self.state.shuffle_enabled.set(enabled);
    }

    /// Set the output volume.
    pub async fn set_volume(&self, volume: Volume) {
        self.state.volume.set(volume);
        self.handle.set_volume(volume).await;
    }

    /// Mute or unmute output, keeping the volume level for display.
    pub async fn set_muted(&self, muted: bool) {
        self.state.muted.set(muted);
        self.handle.set_muted(muted).await;
    }

    /// Stop monitoring device notifications and release the session.
    pub fn shutdown(&self) {
        self.next_generation();
        self.replace_monitor(None);
    }

    /// Route a device notification into the session.
    ///
    /// Notifications carry the generation of the bind they were observed
    /// under; anything from a superseded bind is discarded here, which keeps
    /// the handlers idempotent against late or out-of-order delivery.
    pub(crate) async fn dispatch_notification(
        &self,
        generation: u64,
        notification: MediaNotification,
    ) {
        if generation != self.generation.load(Ordering::SeqCst) {
            debug!(generation, ?notification, "discarding stale notification");
            return;
        }

        match notification {
            MediaNotification::Ready { duration } => self.on_media_ready(duration).await,
            MediaNotification::TimeUpdate { position } => self.on_time_update(position),
            MediaNotification::Ended => self.on_media_ended().await,
            MediaNotification::Error { reason } => self.on_media_error(reason),
        }
    }

    async fn on_media_ready(&self, duration: Option<Duration>) {
        if duration.is_some() {
            self.state.duration.set(duration);
        }

        match self.state.play_state.get() {
            PlayState::Loading => {
                self.handle.play().await;
                self.state.play_state.set(PlayState::Playing);
            }
            // A repeated readiness report only refreshes the duration.
            PlayState::Playing => {}
            state => {
                debug!(%state, "readiness ignored");
            }
        }
    }

    fn on_time_update(&self, position: Duration) {
        if self.state.current_track.get().is_none() {
            return;
        }

        let clamped = match self.state.duration.get() {
            Some(duration) => position.min(duration),
            None => position,
        };
        self.state.position.set(clamped);
    }

    async fn on_media_ended(&self) {
        if self.state.repeat_enabled.get() {
            self.state.position.set(Duration::ZERO);
            self.handle.seek_to(Duration::ZERO).await;
            self.handle.play().await;
            return;
        }

        self.state.play_state.set(PlayState::Ended);

        if let Err(error) = self.advance(Direction::Next).await {
            warn!(%error, "auto-advance after track end failed");
        }
    }

    fn on_media_error(&self, reason: String) {
        let kind = if self.state.play_state.get() == PlayState::Loading {
            FailureKind::Load
        } else {
            FailureKind::Playback
        };

        warn!(?kind, %reason, "media failure");
        self.enter_errored(kind, reason);
    }

    fn enter_errored(&self, kind: FailureKind, reason: String) {
        self.state.play_state.set(PlayState::Errored);
        self.state.last_error.set(Some(PlaybackFailure { kind, reason }));
    }

    fn regenerate_shuffle_order(&self, len: usize) {
        let mut order = lock_unpoisoned(&self.shuffle_order);
        *order = ShuffleOrder::generate(len, &mut rand::rng());
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn replace_monitor(&self, monitor: Option<JoinHandle<()>>) {
        let mut guard = lock_unpoisoned(&self.monitor_handle);
        if let Some(previous) = guard.take() {
            previous.abort();
        }
        *guard = monitor;
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        let mut guard = lock_unpoisoned(&self.monitor_handle);
        if let Some(monitor) = guard.take() {
            monitor.abort();
        }
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::services::playback::handle::{MediaBindError, MediaHandle, MediaNotification};
use crate::services::playback::types::Volume;

/// A control request observed by the fake device.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Command {
    Bind(String),
    Play,
    Pause,
    SeekTo(Duration),
    SetVolume(Volume),
    SetMuted(bool),
}

/// Scripted output device: records control requests and lets tests emit
/// notifications at chosen points.
pub(super) struct FakeMediaHandle {
    commands: Mutex<Vec<Command>>,
    notifications: broadcast::Sender<MediaNotification>,
    next_bind_rejection: Mutex<Option<String>>,
}

impl FakeMediaHandle {
    pub(super) fn new() -> Arc<Self> {
        let (notifications, _) = broadcast::channel(64);
        Arc::new(Self {
            commands: Mutex::new(Vec::new()),
            notifications,
            next_bind_rejection: Mutex::new(None),
        })
    }

    pub(super) fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    pub(super) fn bound_urls(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|command| match command {
                Command::Bind(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    pub(super) fn reject_next_bind(&self, reason: &str) {
        *self.next_bind_rejection.lock().unwrap() = Some(reason.to_string());
    }

    pub(super) fn emit(&self, notification: MediaNotification) {
        let _ = self.notifications.send(notification);
    }

    fn record(&self, command: Command) {
        self.commands.lock().unwrap().push(command);
    }
}

#[async_trait]
impl MediaHandle for FakeMediaHandle {
    async fn bind(&self, url: &str) -> Result<(), MediaBindError> {
        if let Some(reason) = self.next_bind_rejection.lock().unwrap().take() {
            return Err(MediaBindError::new(reason));
        }
        self.record(Command::Bind(url.to_string()));
        Ok(())
    }

    async fn play(&self) {
        self.record(Command::Play);
    }

    async fn pause(&self) {
        self.record(Command::Pause);
    }

    async fn seek_to(&self, position: Duration) {
        self.record(Command::SeekTo(position));
    }

    async fn set_volume(&self, volume: Volume) {
        self.record(Command::SetVolume(volume));
    }

    async fn set_muted(&self, muted: bool) {
        self.record(Command::SetMuted(muted));
    }

    fn notifications(&self) -> BoxStream<'static, MediaNotification> {
        BroadcastStream::new(self.notifications.subscribe())
            .filter_map(|delivery| async move { delivery.ok() })
            .boxed()
    }
}

use std::sync::Weak;

use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use super::handle::MediaNotification;
use super::session::PlaybackSession;

/// Pumps device notifications into the session.
///
/// One monitor exists per bind; a rebind aborts the previous monitor and
/// starts a fresh one tagged with the new generation. The session discards
/// anything whose generation no longer matches, so a monitor that outlives
/// its bind by a few deliveries is harmless.
pub(crate) struct SessionMonitor;

impl SessionMonitor {
    /// Start forwarding a notification subscription to the session.
    ///
    /// Forwarding stops when the subscription ends, the session is dropped,
    /// or the monitor is aborted by a rebind.
    #[instrument(skip(session, notifications))]
    pub(crate) fn start(
        generation: u64,
        session: Weak<PlaybackSession>,
        notifications: BoxStream<'static, MediaNotification>,
    ) -> JoinHandle<()> {
        debug!(generation, "starting notification monitor");

        tokio::spawn(async move {
            let mut notifications = notifications;
            while let Some(notification) = notifications.next().await {
                let Some(session) = session.upgrade() else {
                    debug!("session dropped, stopping monitor");
                    return;
                };
                session.dispatch_notification(generation, notification).await;
            }

            debug!(generation, "notification stream ended");
        })
    }
}

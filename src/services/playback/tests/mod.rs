//! Unit tests for the playback module
//! Device behavior is scripted through a fake handle; no real output device.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod fake;
mod shuffle;
mod track;

use std::time::Duration;

use crate::services::playback::track::{Track, TrackId};

/// Poll until `condition` holds, giving spawned monitors a chance to run.
async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !condition() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// A minimal playable track record.
fn track(id: &str, title: &str, duration: Option<f64>) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: None,
        description: None,
        file_url: Some(format!("https://media.example/{id}.mp3")),
        youtube_url: None,
        duration,
        album_art: None,
        genre: None,
        mood: None,
        tags: Vec::new(),
        play_count: 0,
        created_by: None,
        created_at: None,
        updated_at: None,
    }
}

/// A track record without a playable source.
fn unplayable_track(id: &str, title: &str) -> Track {
    Track {
        file_url: None,
        ..track(id, title, None)
    }
}

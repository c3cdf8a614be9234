//! Airtime - playback session engine for track-streaming surfaces.
//!
//! Airtime owns the client-side playback state of a listening surface: the
//! currently selected track, play/pause/seek state, and the policies for
//! moving through an ordered catalog of tracks. The main features include:
//!
//! - Reactive session state observable through watchable properties
//! - Sequential, wrapping, shuffled, and repeat-on-end track advancement
//! - A generation-guarded asynchronous boundary to the audio output device
//! - TOML-based player defaults
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use airtime::config::PlayerConfig;
//! use airtime::services::playback::TrackCatalog;
//!
//! // Player defaults for a new listening surface
//! let config = PlayerConfig::default();
//!
//! // Catalog snapshot decoded from the backend listing response
//! let catalog = TrackCatalog::from_json("[]")?;
//! println!("{} tracks, volume {}", catalog.len(), config.default_volume);
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Player defaults and their TOML loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive services for playback integration.
pub mod services;

/// Structured logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{AirtimeError, Result};

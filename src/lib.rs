//! In-game vehicle telemetry HUD overlay.
//!
//! Receives push updates describing the player's current vehicle and renders
//! a fixed-layout overlay reflecting the latest known state. The pipeline is
//! strictly one-directional:
//!
//! inbound payload → [`event`] (defaulting) → [`store`] (replace) →
//! [`visibility`] / [`gauge`] / [`layout`] → [`render`] (draw)
//!
//! - [`event`]: named-channel event bus and the vehicle listener
//! - [`snapshot`]: telemetry snapshot type and payload defaulting
//! - [`store`]: single-slot display state store (last write wins)
//! - [`gauge`]: value + threshold → fill fraction and icon tint
//! - [`layout`]: snapshot → five positioned visual groups
//! - [`visibility`]: in-vehicle overlay gate
//! - [`render`]: draws the composed overlay on any `Rgb565` target
//! - [`widgets`]: gauge bars and corner label drawing
//! - [`colors`], [`styles`], [`config`]: palette, text styles, layout constants
//! - [`thresholds`]: fixed tint-flip thresholds per sub-gauge
//! - [`log`]: bounded debug log used by the simulator loop
//!
//! The library draws against generic `DrawTarget<Color = Rgb565>`; only the
//! simulator binary depends on a concrete backend.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod event;
pub mod gauge;
pub mod layout;
pub mod log;
pub mod render;
pub mod snapshot;
pub mod store;
pub mod styles;
pub mod thresholds;
pub mod visibility;
pub mod widgets;

// Re-export the types the simulator and host wiring touch most
pub use event::{EventBus, VEHICLE_CHANNEL, subscribe_vehicle};
pub use snapshot::{TelemetrySnapshot, VehiclePayload};
pub use store::DisplayStateStore;

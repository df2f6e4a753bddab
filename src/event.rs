//! Named-channel event bus and the vehicle listener.
//!
//! The host transport delivers payloads by channel name; this bus keeps a
//! single registered handler per channel and dispatches synchronously.
//! Publishing on a channel nobody subscribed to is a no-op; malformed or
//! misrouted traffic degrades silently, nothing is surfaced to the transport.
//!
//! The vehicle listener is the only handler this crate registers: on every
//! `"vehicle"` payload it runs the defaulting step and replaces the store
//! snapshot unconditionally. Each event is handled to completion before the
//! next one is looked at; there is no queueing or coalescing.

use std::rc::Rc;

use crate::snapshot::{TelemetrySnapshot, VehiclePayload};
use crate::store::DisplayStateStore;

/// Channel the host transport uses for vehicle telemetry.
pub const VEHICLE_CHANNEL: &str = "vehicle";

type Handler = Box<dyn for<'a> FnMut(&VehiclePayload<'a>)>;

/// Message source abstraction: one handler per named channel.
#[derive(Default)]
pub struct EventBus {
    channels: Vec<(&'static str, Handler)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { channels: Vec::new() }
    }

    /// Register the handler for a channel. Subscribing again to the same
    /// channel replaces the previous handler; each channel has exactly one.
    pub fn subscribe<F>(&mut self, channel: &'static str, handler: F)
    where
        F: for<'a> FnMut(&VehiclePayload<'a>) + 'static,
    {
        if let Some(entry) = self.channels.iter_mut().find(|(name, _)| *name == channel) {
            entry.1 = Box::new(handler);
        } else {
            self.channels.push((channel, Box::new(handler)));
        }
    }

    /// Dispatch a payload to the channel's handler, synchronously and to
    /// completion. Unknown channels are ignored.
    pub fn publish(&mut self, channel: &str, payload: &VehiclePayload<'_>) {
        if let Some((_, handler)) = self.channels.iter_mut().find(|(name, _)| *name == channel) {
            handler(payload);
        }
    }
}

/// Wire the vehicle listener: subscribe once to [`VEHICLE_CHANNEL`] with a
/// handler whose only effect is defaulting-then-replace on the store.
pub fn subscribe_vehicle(bus: &mut EventBus, store: Rc<DisplayStateStore>) {
    bus.subscribe(VEHICLE_CHANNEL, move |payload| {
        store.replace(TelemetrySnapshot::from_payload(payload));
    });
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_event_replaces_snapshot() {
        let store = Rc::new(DisplayStateStore::new());
        let mut bus = EventBus::new();
        subscribe_vehicle(&mut bus, Rc::clone(&store));

        bus.publish(
            VEHICLE_CHANNEL,
            &VehiclePayload {
                fuel: Some(80.0),
                is_in_vehicle: Some(true),
                ..VehiclePayload::default()
            },
        );
        assert_eq!(store.current().unwrap().fuel, Some(80.0));

        bus.publish(
            VEHICLE_CHANNEL,
            &VehiclePayload {
                fuel: Some(20.0),
                is_in_vehicle: Some(true),
                ..VehiclePayload::default()
            },
        );
        assert_eq!(
            store.current().unwrap().fuel,
            Some(20.0),
            "second event fully replaces the first, never merges"
        );
    }

    #[test]
    fn test_unknown_channel_is_ignored() {
        let store = Rc::new(DisplayStateStore::new());
        let mut bus = EventBus::new();
        subscribe_vehicle(&mut bus, Rc::clone(&store));

        bus.publish("weapon", &VehiclePayload::default());
        assert!(store.current().is_none(), "misrouted payloads must not touch the store");
    }

    #[test]
    fn test_resubscribe_replaces_handler() {
        let mut bus = EventBus::new();
        let store_a = Rc::new(DisplayStateStore::new());
        let store_b = Rc::new(DisplayStateStore::new());

        subscribe_vehicle(&mut bus, Rc::clone(&store_a));
        subscribe_vehicle(&mut bus, Rc::clone(&store_b));

        bus.publish(VEHICLE_CHANNEL, &VehiclePayload::default());
        assert!(store_a.current().is_none(), "old handler is gone");
        assert!(store_b.current().is_some(), "only the latest handler runs");
    }

    #[test]
    fn test_defaulting_happens_in_listener() {
        let store = Rc::new(DisplayStateStore::new());
        let mut bus = EventBus::new();
        subscribe_vehicle(&mut bus, Rc::clone(&store));

        bus.publish(VEHICLE_CHANNEL, &VehiclePayload::default());
        let snap = store.current().unwrap();
        assert_eq!(snap.fuel, Some(100.0));
        assert_eq!(snap.heading.as_str(), "N");
        assert!(!snap.is_in_vehicle);
    }
}

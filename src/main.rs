//! Vehicle HUD simulator for desktop.
//!
//! Drives the full pipeline against a fake host transport: every frame a
//! generated vehicle payload is published on the `"vehicle"` channel, the
//! listener defaults-and-replaces the store, and the overlay is rendered
//! from the store's current snapshot.
//!
//! # Keys
//!
//! - `V`: enter/leave the vehicle (overlay visibility gate)
//! - `N`: toggle nitrous presence in the payload
//! - `F`: omit/include the fuel field (exercises the 100 default)
//! - `R`: toggle reverse (gear sentinel 0)

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use vehicle_hud::colors::BLACK;
use vehicle_hud::config::{SURFACE_HEIGHT, SURFACE_WIDTH};
use vehicle_hud::log::EventLog;
use vehicle_hud::render::render_overlay;
use vehicle_hud::{DisplayStateStore, EventBus, VEHICLE_CHANNEL, VehiclePayload, subscribe_vehicle};

/// Target frame time (~50 FPS).
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Compass labels cycled by the fake heading signal.
const HEADINGS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SURFACE_WIDTH, SURFACE_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Vehicle HUD Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // Pipeline wiring: bus → listener → store → render
    let store = Rc::new(DisplayStateStore::new());
    let mut bus = EventBus::new();
    subscribe_vehicle(&mut bus, Rc::clone(&store));

    // Simulation state
    let mut t = 0.0f32;
    let mut in_vehicle = true;
    let mut nitrous_fitted = true;
    let mut omit_fuel = false;
    let mut reverse = false;
    let mut was_visible = false;

    let mut log = EventLog::new();
    log.push("simulator started");

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::V => {
                            in_vehicle = !in_vehicle;
                            log.push(if in_vehicle { "entered vehicle" } else { "left vehicle" });
                        }
                        Keycode::N => {
                            nitrous_fitted = !nitrous_fitted;
                            log.push(if nitrous_fitted { "nitrous: fitted" } else { "nitrous: removed" });
                        }
                        Keycode::F => {
                            omit_fuel = !omit_fuel;
                            log.push(if omit_fuel { "payload: fuel omitted" } else { "payload: fuel present" });
                        }
                        Keycode::R => {
                            reverse = !reverse;
                            log.push(if reverse { "gear: reverse" } else { "gear: forward" });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Fake telemetry for this frame
        let speed = fake_signal(t, 0.0, 140.0, 0.07);
        let fuel = fake_signal(t, 5.0, 95.0, 0.015);
        let engine_health = fake_signal(t, 15.0, 100.0, 0.008);
        let nitrous = fake_signal(t, 0.0, 90.0, 0.05);
        let gear = if reverse { 0 } else { 1 + (speed / 28.0) as i32 };
        let heading = HEADINGS[((t * 0.2) as usize) % HEADINGS.len()];

        let payload = VehiclePayload {
            speed: Some(speed),
            gear: Some(gear),
            speed_unit: Some("kmh"),
            street_name1: Some("INNSBRUCK AVE"),
            street_name2: Some(if (t as u32 / 120).is_multiple_of(2) { "GROVE ST" } else { "" }),
            heading: Some(heading),
            fuel: if omit_fuel { None } else { Some(fuel) },
            engine_health: Some(engine_health),
            nitrous: if nitrous_fitted { Some(nitrous) } else { None },
            is_in_vehicle: Some(in_vehicle),
        };
        bus.publish(VEHICLE_CHANNEL, &payload);

        // Full-replace semantics: repaint from scratch every frame
        display.clear(BLACK).ok();
        let visible = render_overlay(&mut display, &store);
        if visible != was_visible {
            log.push(if visible { "overlay: visible" } else { "overlay: hidden" });
            was_visible = visible;
        }
        window.update(&display);

        t += 0.05;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    println!("session log:");
    for line in log.iter() {
        println!("  {line}");
    }
}

/// Sine-based fake signal sweeping between `min` and `max` at `freq`.
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

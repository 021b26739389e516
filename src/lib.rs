//! Campus escape: a small top-down room-exploration game core
//!
//! This crate provides:
//! - A room graph with four doors per room
//! - Room events (pickups, quizzes, hidden encounters) with a shared lifecycle
//! - Room transitions, countdown, score and win/lose detection
//! - Input state with winit key codes, RON/JSON configuration and map layouts
//!
//! Rendering and audio are left to the host through the
//! [`render::Canvas`] and [`audio::AudioSink`] traits.

pub mod audio;
pub mod core;
pub mod event;
pub mod game;
pub mod input;
pub mod map;
pub mod physics;
pub mod render;
pub mod ui;

// Re-exports for convenience
pub use glam;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::audio::{AudioHandle, AudioSink, NullAudio, SoundCue};
    pub use crate::core::{GameConfig, GameSignal, SignalQueue};
    pub use crate::event::{Event, EventKind, EventType, RoomEvent};
    pub use crate::game::{GameController, GameOutcome, OutcomeSnapshot, Player};
    pub use crate::input::{Input, InputAction};
    pub use crate::map::{Direction, MapLayout, RoomChange, RoomId};
    pub use crate::render::{Canvas, DrawList};
    pub use glam::Vec2;
    pub use winit::keyboard::KeyCode;
}

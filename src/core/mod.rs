//! Core module
//!
//! Session configuration and the signal queue shared by all systems.

mod config;
mod signals;

pub use config::{
    ConfigError, EventConfig, GameConfig, PlayerConfig, Question, ScoringConfig, TimerConfig,
    WorldConfig,
};
pub use signals::{GameSignal, SignalQueue};

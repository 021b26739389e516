//! Session state: player, countdown, score and the controller tying them
//! to the map.

mod controller;
mod outcome;
mod player;
mod score;
mod timer;

pub use controller::{GameController, GameError};
pub use outcome::{GameOutcome, OutcomeSnapshot};
pub use player::Player;
pub use score::ScoreManager;
pub use timer::Timer;

//! Input handling module
//!
//! Provides raw key/pointer state and the key-to-action bindings the game
//! queries.

mod bindings;
mod state;

pub use bindings::{InputAction, InputMapper};
pub use state::Input;

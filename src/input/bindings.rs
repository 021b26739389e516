//! Key bindings
//!
//! Game code asks about [`InputAction`]s; only this table knows which
//! physical keys produce them. Several keys may share an action, a key
//! triggers at most one.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

/// What the player can ask for from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Walk towards the north wall
    MoveUp,
    /// Walk towards the south wall
    MoveDown,
    /// Walk towards the west wall
    MoveLeft,
    /// Walk towards the east wall
    MoveRight,
    /// Use the prop next to the player
    Interact,
    /// Freeze or resume the session
    Pause,
}

/// Default layout: arrows and WASD walk, E uses props, Escape pauses
const DEFAULT_LAYOUT: [(KeyCode, InputAction); 10] = [
    (KeyCode::ArrowUp, InputAction::MoveUp),
    (KeyCode::ArrowDown, InputAction::MoveDown),
    (KeyCode::ArrowLeft, InputAction::MoveLeft),
    (KeyCode::ArrowRight, InputAction::MoveRight),
    (KeyCode::KeyW, InputAction::MoveUp),
    (KeyCode::KeyS, InputAction::MoveDown),
    (KeyCode::KeyA, InputAction::MoveLeft),
    (KeyCode::KeyD, InputAction::MoveRight),
    (KeyCode::KeyE, InputAction::Interact),
    (KeyCode::Escape, InputAction::Pause),
];

/// Key to action table, rebindable at runtime
#[derive(Debug, Clone)]
pub struct InputMapper {
    table: FxHashMap<KeyCode, InputAction>,
}

impl InputMapper {
    /// Mapper with nothing bound
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    /// Mapper with the default layout
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            table: DEFAULT_LAYOUT.into_iter().collect(),
        }
    }

    /// Make `key` trigger `action`, replacing whatever it did before
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(previous) = self.table.insert(key, action)
            && previous != action
        {
            log::debug!("Rebound {key:?}: {previous:?} -> {action:?}");
        }
    }

    /// Make `key` do nothing. Returns the action it used to trigger.
    pub fn unbind(&mut self, key: KeyCode) -> Option<InputAction> {
        self.table.remove(&key)
    }

    /// Action triggered by `key`
    #[must_use]
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.table.get(&key).copied()
    }

    /// Keys that trigger `action`
    pub fn keys_for(&self, action: InputAction) -> impl Iterator<Item = KeyCode> + '_ {
        self.table
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }

    /// Number of bound keys
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.table.len()
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::with_defaults()
    }
}

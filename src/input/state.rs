//! Per-frame input state

use std::hash::Hash;

use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use super::bindings::{InputAction, InputMapper};

/// Held buttons plus the edges seen since the last frame boundary
#[derive(Debug)]
struct ButtonState<T> {
    held: FxHashSet<T>,
    pressed: FxHashSet<T>,
    released: FxHashSet<T>,
}

impl<T> Default for ButtonState<T> {
    fn default() -> Self {
        Self {
            held: FxHashSet::default(),
            pressed: FxHashSet::default(),
            released: FxHashSet::default(),
        }
    }
}

impl<T: Copy + Eq + Hash> ButtonState<T> {
    fn apply(&mut self, button: T, state: ElementState) {
        match state {
            ElementState::Pressed => {
                // OS key repeat arrives as another press; only the first counts
                if self.held.insert(button) {
                    self.pressed.insert(button);
                }
            }
            ElementState::Released => {
                self.held.remove(&button);
                self.released.insert(button);
            }
        }
    }

    fn clear_edges(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// Keyboard and pointer state fed by the host window loop.
///
/// The pointer position is in UI space (see [`crate::ui`]); projecting
/// window pixels onto the UI canvas is the host's job. Edges (`just_*`)
/// last until [`Input::end_frame`].
#[derive(Debug, Default)]
pub struct Input {
    keys: ButtonState<KeyCode>,
    buttons: ButtonState<MouseButton>,
    pointer: Vec2,
    mapper: InputMapper,
}

impl Input {
    /// Input state with the default bindings
    #[must_use]
    pub fn new() -> Self {
        Self::with_mapper(InputMapper::with_defaults())
    }

    /// Input state with custom bindings
    #[must_use]
    pub fn with_mapper(mapper: InputMapper) -> Self {
        Self {
            mapper,
            ..Self::default()
        }
    }

    /// Forget this frame's edges. Call after the frame has been simulated.
    pub fn end_frame(&mut self) {
        self.keys.clear_edges();
        self.buttons.clear_edges();
    }

    /// Record a key going down or up
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        self.keys.apply(key, state);
    }

    /// Record a mouse button going down or up
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.buttons.apply(button, state);
    }

    /// Record the pointer position (UI space)
    pub fn process_pointer_motion(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Whether `key` is held
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.held.contains(&key)
    }

    /// Whether `key` went down this frame
    #[must_use]
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.pressed.contains(&key)
    }

    /// Whether `key` went up this frame
    #[must_use]
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys.released.contains(&key)
    }

    /// Whether any key bound to `action` is held
    #[must_use]
    pub fn is_action_pressed(&self, action: InputAction) -> bool {
        self.mapper
            .keys_for(action)
            .any(|key| self.is_key_pressed(key))
    }

    /// Whether any key bound to `action` went down this frame
    #[must_use]
    pub fn is_action_just_pressed(&self, action: InputAction) -> bool {
        self.mapper
            .keys_for(action)
            .any(|key| self.is_key_just_pressed(key))
    }

    /// Whether the left mouse button went down this frame
    #[must_use]
    pub fn is_pointer_just_pressed(&self) -> bool {
        self.buttons.pressed.contains(&MouseButton::Left)
    }

    /// Pointer position (UI space)
    #[must_use]
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    /// Bindings in use
    #[must_use]
    pub fn mapper(&self) -> &InputMapper {
        &self.mapper
    }

    /// Bindings, for rebinding at runtime
    pub fn mapper_mut(&mut self) -> &mut InputMapper {
        &mut self.mapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_lasts_one_frame() {
        let mut input = Input::new();

        input.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        assert!(input.is_key_just_pressed(KeyCode::KeyE));
        assert!(input.is_action_just_pressed(InputAction::Interact));

        input.end_frame();
        assert!(!input.is_action_just_pressed(InputAction::Interact));
        assert!(input.is_action_pressed(InputAction::Interact));

        // Repeat while held
        input.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        assert!(!input.is_key_just_pressed(KeyCode::KeyE));
    }

    #[test]
    fn test_release_edge() {
        let mut input = Input::new();

        input.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
        input.process_keyboard(KeyCode::ArrowUp, ElementState::Released);

        assert!(!input.is_action_pressed(InputAction::MoveUp));
        assert!(input.is_key_just_released(KeyCode::ArrowUp));

        input.end_frame();
        assert!(!input.is_key_just_released(KeyCode::ArrowUp));
    }

    #[test]
    fn test_rebound_key_drives_action() {
        let mut input = Input::new();
        input.mapper_mut().bind(KeyCode::KeyF, InputAction::Interact);

        input.process_keyboard(KeyCode::KeyF, ElementState::Pressed);

        assert!(input.is_action_just_pressed(InputAction::Interact));
    }

    #[test]
    fn test_left_click_only() {
        let mut input = Input::new();

        input.process_pointer_motion(Vec2::new(640.0, 864.0));
        input.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(!input.is_pointer_just_pressed());

        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(input.is_pointer_just_pressed());
        assert_eq!(input.pointer_position(), Vec2::new(640.0, 864.0));

        input.end_frame();
        assert!(!input.is_pointer_just_pressed());
    }
}

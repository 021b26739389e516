//! Canvas trait and a recording implementation

use glam::Vec2;

use crate::physics::Aabb;
use crate::ui::{Rect, RectStyle};

/// Sink for draw calls.
///
/// World-pass calls use world units (y-up); UI-pass calls use UI pixels
/// (y-down). Which pass a call belongs to is decided by the caller.
pub trait Canvas {
    /// Draw a named texture stretched over `bounds`
    fn draw_texture(&mut self, texture: &str, bounds: Aabb);

    /// Draw a styled panel; `parent_size` resolves the rect's anchor
    fn draw_panel(&mut self, rect: &Rect, parent_size: Vec2);

    /// Draw text centered on `position`
    fn draw_text(&mut self, text: &str, position: Vec2);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Textured quad
    Texture {
        /// Texture name
        texture: String,
        /// Target area
        bounds: Aabb,
    },
    /// Styled panel
    Panel {
        /// Top-left corner
        min: Vec2,
        /// Bottom-right corner
        max: Vec2,
        /// Panel style
        style: RectStyle,
    },
    /// Text label
    Text {
        /// Label contents
        text: String,
        /// Center of the label
        position: Vec2,
    },
}

/// Canvas that records every call, for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing was drawn
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Check whether a texture was drawn
    #[must_use]
    pub fn has_texture(&self, name: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Texture { texture, .. } if texture == name))
    }

    /// Count draws of a texture
    #[must_use]
    pub fn texture_count(&self, name: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Texture { texture, .. } if texture == name))
            .count()
    }

    /// Check whether a text label containing `needle` was drawn
    #[must_use]
    pub fn has_text(&self, needle: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(needle)))
    }
}

impl Canvas for DrawList {
    fn draw_texture(&mut self, texture: &str, bounds: Aabb) {
        self.commands.push(DrawCommand::Texture {
            texture: texture.to_string(),
            bounds,
        });
    }

    fn draw_panel(&mut self, rect: &Rect, parent_size: Vec2) {
        let (min, max) = rect.bounds(parent_size);
        self.commands.push(DrawCommand::Panel {
            min,
            max,
            style: rect.style,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();

        list.draw_texture("Room1.png", Aabb::new(0.0, 0.0, 16.0, 9.0));
        list.draw_text("Time: 300s", Vec2::new(75.0, 80.0));

        assert_eq!(list.len(), 2);
        assert!(list.has_texture("Room1.png"));
        assert!(list.has_text("300"));
        assert!(matches!(list.commands()[0], DrawCommand::Texture { .. }));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_panel_resolves_anchor() {
        let mut list = DrawList::new();
        let rect = Rect::centered(Vec2::ZERO, Vec2::new(100.0, 50.0));

        list.draw_panel(&rect, Vec2::new(800.0, 600.0));

        match &list.commands()[0] {
            DrawCommand::Panel { min, max, .. } => {
                assert_eq!(*min, Vec2::new(350.0, 275.0));
                assert_eq!(*max, Vec2::new(450.0, 325.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

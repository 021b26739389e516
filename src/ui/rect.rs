//! Overlay layout
//!
//! Every overlay box is placed relative to the middle of the UI canvas, so
//! layouts survive a change of canvas size. UI space is y-down.

use glam::Vec2;

/// Fill and outline colors of an overlay box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color (RGBA)
    pub background_color: [f32; 4],
    /// Outline color (RGBA)
    pub border_color: [f32; 4],
    /// Outline thickness in pixels
    pub border_width: f32,
}

impl RectStyle {
    /// Title, question and dialogue panels
    pub const PANEL: Self = Self::outlined([0.85, 0.88, 0.95, 1.0], [0.2, 0.3, 0.6, 1.0]);

    /// The "TRUE" answer button
    pub const CONFIRM: Self = Self::outlined([0.8, 0.95, 0.8, 1.0], [0.2, 0.6, 0.2, 1.0]);

    /// The "FALSE" answer button
    pub const DENY: Self = Self::outlined([1.0, 0.9, 0.8, 1.0], [0.85, 0.45, 0.1, 1.0]);

    const fn outlined(background_color: [f32; 4], border_color: [f32; 4]) -> Self {
        Self {
            background_color,
            border_color,
            border_width: 4.0,
        }
    }
}

impl Default for RectStyle {
    fn default() -> Self {
        Self::PANEL
    }
}

/// An overlay box: `size` pixels, centered `offset` pixels from the canvas middle
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Offset of the box center from the canvas center
    pub offset: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Colors
    pub style: RectStyle,
}

impl Rect {
    /// Box of `size` whose center sits `offset` away from the canvas center
    #[must_use]
    pub fn centered(offset: Vec2, size: Vec2) -> Self {
        Self {
            offset,
            size,
            style: RectStyle::default(),
        }
    }

    /// Replace the colors
    #[must_use]
    pub fn with_style(mut self, style: RectStyle) -> Self {
        self.style = style;
        self
    }

    /// Center of the box on a canvas of `canvas_size`
    #[must_use]
    pub fn center(&self, canvas_size: Vec2) -> Vec2 {
        canvas_size * 0.5 + self.offset
    }

    /// Top-left and bottom-right corners on a canvas of `canvas_size`
    #[must_use]
    pub fn bounds(&self, canvas_size: Vec2) -> (Vec2, Vec2) {
        let half = self.size * 0.5;
        let center = self.center(canvas_size);
        (center - half, center + half)
    }

    /// Whether `point` lies inside the box, edges included
    #[must_use]
    pub fn contains(&self, point: Vec2, canvas_size: Vec2) -> bool {
        let (min, max) = self.bounds(canvas_size);
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(1920.0, 1080.0);

    #[test]
    fn test_answer_button_layout() {
        let button = Rect::centered(Vec2::new(-320.0, 324.0), Vec2::new(600.0, 240.0));

        let center = button.center(CANVAS);
        assert!((center.x - 640.0).abs() < 0.01);
        assert!((center.y - 864.0).abs() < 0.01);

        let (min, max) = button.bounds(CANVAS);
        assert!((min.x - 340.0).abs() < 0.01);
        assert!((max.y - 984.0).abs() < 0.01);
    }

    #[test]
    fn test_contains_edges_but_not_outside() {
        let panel = Rect::centered(Vec2::ZERO, Vec2::new(200.0, 100.0));

        assert!(panel.contains(Vec2::new(960.0, 540.0), CANVAS));
        assert!(panel.contains(Vec2::new(860.0, 490.0), CANVAS));
        assert!(!panel.contains(Vec2::new(859.0, 540.0), CANVAS));
        assert!(!panel.contains(Vec2::new(960.0, 591.0), CANVAS));
    }

    #[test]
    fn test_layout_follows_canvas_size() {
        let panel = Rect::centered(Vec2::new(0.0, 380.0), Vec2::new(1200.0, 240.0));

        assert_eq!(panel.center(Vec2::new(800.0, 600.0)), Vec2::new(400.0, 680.0));
        assert_eq!(panel.center(CANVAS), Vec2::new(960.0, 920.0));
    }
}

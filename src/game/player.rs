//! The player character

use glam::Vec2;

use crate::core::PlayerConfig;
use crate::input::{Input, InputAction};
use crate::map::Direction;
use crate::physics::Aabb;
use crate::render::{Canvas, names};

/// The player: a box that walks around the current room.
///
/// World space is y-up with the origin in the bottom-left corner.
#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite bounds
    bounds: Aabb,
    /// Movement speed in world units per second
    speed: f32,
    /// Whether input moves the player
    movement_enabled: bool,
    /// Room size
    world_size: Vec2,
    /// Minimum distance between center and a world edge
    edge_limit: f32,
    /// Distance from the entry edge after a room change
    entry_inset: f32,
}

impl Player {
    /// Create a player centered in the room
    #[must_use]
    pub fn new(config: &PlayerConfig, world_size: Vec2) -> Self {
        Self {
            bounds: Aabb::from_center(
                world_size * 0.5,
                Vec2::new(config.width, config.height),
            ),
            speed: config.speed,
            movement_enabled: true,
            world_size,
            edge_limit: config.edge_limit,
            entry_inset: config.entry_inset,
        }
    }

    /// Move according to held movement actions
    pub fn update(&mut self, delta: f32, input: &Input) {
        if !self.movement_enabled {
            return;
        }

        let center = self.center();
        let step = self.speed * delta;
        let mut motion = Vec2::ZERO;

        if input.is_action_pressed(InputAction::MoveRight)
            && center.x < self.world_size.x - self.edge_limit
        {
            motion.x += step;
        }
        if input.is_action_pressed(InputAction::MoveLeft) && center.x > self.edge_limit {
            motion.x -= step;
        }
        if input.is_action_pressed(InputAction::MoveUp)
            && center.y < self.world_size.y - self.edge_limit
        {
            motion.y += step;
        }
        if input.is_action_pressed(InputAction::MoveDown) && center.y > self.edge_limit {
            motion.y -= step;
        }

        self.bounds.translate(motion);
    }

    /// Place the player just inside the edge they came through.
    ///
    /// Walking through the north door lands the player near the south
    /// edge of the next room, and so on, clear of the door they used.
    pub fn position_after_room_change(&mut self, direction: Direction) {
        let w = self.world_size.x;
        let h = self.world_size.y;
        let inset = self.entry_inset;

        let center = match direction {
            Direction::North => Vec2::new(w / 2.0, inset),
            Direction::East => Vec2::new(inset, h / 2.0),
            Direction::South => Vec2::new(w / 2.0, h - inset),
            Direction::West => Vec2::new(w - inset, h / 2.0),
        };
        self.bounds.set_center(center);
    }

    /// Draw the player sprite
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_texture(names::PLAYER, self.bounds);
    }

    /// Whether the player overlaps `other`
    #[must_use]
    pub fn check_collision(&self, other: &Aabb) -> bool {
        self.bounds.overlaps(other)
    }

    /// Sprite bounds
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Center of the sprite
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Move the sprite so its center is at `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.bounds.set_center(center);
    }

    /// Distance from the player's center to `point`
    #[must_use]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.center().distance(point)
    }

    /// Current speed
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change speed by `amount`; speed never drops below zero
    pub fn increase_speed(&mut self, amount: f32) {
        self.speed = (self.speed + amount).max(0.0);
    }

    /// Allow or block movement
    pub fn enable_movement(&mut self, enabled: bool) {
        self.movement_enabled = enabled;
    }

    /// Whether input moves the player
    #[must_use]
    pub fn is_movement_enabled(&self) -> bool {
        self.movement_enabled
    }
}

//! The four doors and their indicators

use crate::event::EventType;
use crate::game::Player;
use crate::physics::Aabb;
use crate::render::{Canvas, TextureSet, names};

use super::{Direction, RoomGraph, RoomId};

/// Hint drawn on a door about the event behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    /// Nothing to show
    #[default]
    None,
    /// Something good behind this door
    Positive,
    /// Something bad behind this door
    Negative,
}

impl Indicator {
    /// Indicator for a neighbor's event type.
    ///
    /// Hidden events stay hidden.
    #[must_use]
    pub const fn for_event(event_type: EventType) -> Self {
        match event_type {
            EventType::Positive => Self::Positive,
            EventType::Negative => Self::Negative,
            EventType::Hidden | EventType::None => Self::None,
        }
    }

    /// Texture to draw, if any
    #[must_use]
    pub const fn texture(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Positive => Some(names::POSITIVE_INDICATOR),
            Self::Negative => Some(names::NEGATIVE_INDICATOR),
        }
    }
}

/// A door on one edge of the room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    direction: Direction,
    bounds: Aabb,
    active: bool,
}

impl Door {
    /// Fixed door area for `direction` in a 16x9 room
    #[must_use]
    pub const fn geometry(direction: Direction) -> Aabb {
        match direction {
            Direction::North => Aabb::new(7.5, 8.0, 1.0, 1.0),
            Direction::East => Aabb::new(15.0, 4.0, 1.0, 1.0),
            Direction::South => Aabb::new(7.5, 0.0, 1.0, 1.0),
            Direction::West => Aabb::new(0.0, 4.0, 1.0, 1.0),
        }
    }

    /// Create an inactive door
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            bounds: Self::geometry(direction),
            active: false,
        }
    }

    /// Edge the door sits on
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Collision area
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Whether the door leads anywhere
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Owns the four doors and keeps them in sync with the current room.
#[derive(Debug)]
pub struct DoorController {
    doors: [Door; 4],
    indicators: [Indicator; 4],
    textures: TextureSet,
}

impl DoorController {
    /// Create the four doors, all inactive
    #[must_use]
    pub fn new() -> Self {
        Self {
            doors: Direction::ALL.map(Door::new),
            indicators: [Indicator::None; 4],
            textures: TextureSet::new([
                names::DOOR,
                names::POSITIVE_INDICATOR,
                names::NEGATIVE_INDICATOR,
            ]),
        }
    }

    /// Activate the doors `room` has neighbors behind and refresh indicators
    pub fn update_for_room(&mut self, graph: &RoomGraph, room: RoomId) {
        for (slot, neighbor) in graph.room(room).all_adjacent().iter().enumerate() {
            self.doors[slot].active = neighbor.is_some();
            self.indicators[slot] =
                neighbor.map_or(Indicator::None, |n| Indicator::for_event(graph.room(n).event_type()));
        }
        log::debug!(
            "Doors for {}: {:?}",
            graph.room(room).name(),
            self.doors.map(|d| d.active)
        );
    }

    /// Direction of the first active door the player touches.
    ///
    /// Doors are checked north, east, south, west.
    #[must_use]
    pub fn update(&self, player: &Player) -> Option<Direction> {
        self.doors
            .iter()
            .find(|door| door.active && player.check_collision(&door.bounds))
            .map(|door| door.direction)
    }

    /// Draw active doors and their indicators
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for (door, indicator) in self.doors.iter().zip(self.indicators) {
            if !door.active {
                continue;
            }
            canvas.draw_texture(names::DOOR, door.bounds);
            if let Some(texture) = indicator.texture() {
                canvas.draw_texture(texture, door.bounds);
            }
        }
    }

    /// Door on `direction`'s edge
    #[must_use]
    pub fn door(&self, direction: Direction) -> &Door {
        &self.doors[direction.index()]
    }

    /// Indicator shown on `direction`'s door
    #[must_use]
    pub fn indicator(&self, direction: Direction) -> Indicator {
        self.indicators[direction.index()]
    }

    /// Release door textures; safe to call more than once
    pub fn dispose(&mut self) {
        self.textures.dispose();
    }

    /// Whether [`dispose`](Self::dispose) ran
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.textures.is_disposed()
    }
}

impl Default for DoorController {
    fn default() -> Self {
        Self::new()
    }
}

//! Rooms and the room graph
//!
//! Rooms live in an arena owned by [`RoomGraph`] and refer to each other by
//! [`RoomId`], so the graph may contain cycles without shared ownership.
//! Links are one-directional; whoever builds the map installs the way back.

use std::fmt;

use crate::event::{Event, EventType, RoomEvent};

use super::Direction;

/// Index of a room inside its [`RoomGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// A node of the map.
#[derive(Debug)]
pub struct Room {
    /// Arena index
    id: RoomId,
    /// Name used by map layouts and logs
    name: String,
    /// Background texture
    texture: String,
    /// Neighbors in direction slot order
    adjacent: [Option<RoomId>; 4],
    /// Event placed in this room, if any
    event: Option<Event>,
    /// Reaching this room wins the game
    is_exit: bool,
}

impl Room {
    fn new(id: RoomId, name: String, texture: String, is_exit: bool) -> Self {
        Self {
            id,
            name,
            texture,
            adjacent: [None; 4],
            event: None,
            is_exit,
        }
    }

    /// Arena index
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Room name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Background texture name
    #[must_use]
    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Whether entering this room wins the game
    #[must_use]
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    /// Link `room` as this room's neighbor in `direction` (one way only)
    pub fn add_adjacent(&mut self, room: RoomId, direction: Direction) {
        self.adjacent[direction.index()] = Some(room);
    }

    /// Neighbor in `direction`, if any
    #[must_use]
    pub fn adjacent(&self, direction: Direction) -> Option<RoomId> {
        self.adjacent[direction.index()]
    }

    /// All four neighbor slots, ordered north, east, south, west
    #[must_use]
    pub fn all_adjacent(&self) -> &[Option<RoomId>; 4] {
        &self.adjacent
    }

    /// Place an event in this room, replacing any previous one
    pub fn set_event(&mut self, event: Event) {
        self.event = Some(event);
    }

    /// The room's event
    #[must_use]
    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    /// The room's event, mutably
    pub fn event_mut(&mut self) -> Option<&mut Event> {
        self.event.as_mut()
    }

    /// Type of the room's event, `None` when the room has no event
    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event
            .as_ref()
            .map_or(EventType::None, RoomEvent::event_type)
    }
}

/// Arena of rooms.
#[derive(Debug, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its id
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        texture: impl Into<String>,
        is_exit: bool,
    ) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms
            .push(Room::new(id, name.into(), texture.into(), is_exit));
        id
    }

    /// Link `from` to `to` in `direction` and `to` back to `from`.
    ///
    /// Whatever either slot held before is replaced; check
    /// [`RoomGraph::is_free_for`] first to keep old links intact.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) {
        self.room_mut(from).add_adjacent(to, direction);
        self.room_mut(to).add_adjacent(from, direction.opposite());
    }

    /// Look up a room.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Look up a room mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// Look up a room, returning `None` for foreign ids
    #[must_use]
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Find a room by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.name == name).map(|r| r.id)
    }

    /// Neighbor of `room` in `direction`
    #[must_use]
    pub fn adjacent(&self, room: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(room).adjacent(direction)
    }

    /// Whether the `direction` slot of `room` is empty or already leads to `target`
    #[must_use]
    pub fn is_free_for(&self, room: RoomId, direction: Direction, target: RoomId) -> bool {
        self.adjacent(room, direction).is_none_or(|current| current == target)
    }

    /// Whether the link from `room` in `direction` has a matching way back
    #[must_use]
    pub fn is_reciprocal(&self, room: RoomId, direction: Direction) -> bool {
        match self.adjacent(room, direction) {
            Some(other) => self.adjacent(other, direction.opposite()) == Some(room),
            None => true,
        }
    }

    /// Iterate over all rooms
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of rooms
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check if the graph has no rooms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_adjacent_is_one_way() {
        let mut graph = RoomGraph::new();
        let a = graph.add_room("a", "Room1.png", false);
        let b = graph.add_room("b", "Room3.png", false);

        graph.room_mut(a).add_adjacent(b, Direction::East);

        assert_eq!(graph.adjacent(a, Direction::East), Some(b));
        assert_eq!(graph.adjacent(b, Direction::West), None);
        assert!(!graph.is_reciprocal(a, Direction::East));
    }

    #[test]
    fn test_connect_installs_reciprocal_links() {
        let mut graph = RoomGraph::new();
        let a = graph.add_room("a", "Room1.png", false);
        let b = graph.add_room("b", "Room3.png", false);
        let c = graph.add_room("c", "Room4.png", false);
        let d = graph.add_room("d", "Room5.png", false);

        // A square walk: every slot is written exactly once
        graph.connect(a, Direction::East, b);
        graph.connect(b, Direction::North, c);
        graph.connect(c, Direction::West, d);
        graph.connect(d, Direction::South, a);

        assert_eq!(graph.adjacent(a, Direction::North), Some(d));
        assert_eq!(graph.adjacent(c, Direction::South), Some(b));
        for room in [a, b, c, d] {
            assert_eq!(graph.room(room).all_adjacent().iter().flatten().count(), 2);
            for dir in Direction::ALL {
                assert!(graph.is_reciprocal(room, dir));
                if let Some(other) = graph.adjacent(room, dir) {
                    assert_eq!(graph.adjacent(other, dir.opposite()), Some(room));
                }
            }
        }
    }

    #[test]
    fn test_connect_over_taken_slot_breaks_old_link() {
        let mut graph = RoomGraph::new();
        let a = graph.add_room("a", "Room1.png", false);
        let b = graph.add_room("b", "Room3.png", false);
        let c = graph.add_room("c", "Room4.png", false);

        graph.connect(a, Direction::East, b);
        assert!(graph.is_free_for(a, Direction::East, b));
        assert!(!graph.is_free_for(a, Direction::East, c));
        assert!(graph.is_free_for(c, Direction::West, a));

        graph.connect(c, Direction::West, a);
        assert!(!graph.is_reciprocal(b, Direction::West));
    }

    #[test]
    fn test_all_adjacent_slot_order() {
        let mut graph = RoomGraph::new();
        let hub = graph.add_room("hub", "Room1.png", false);
        let north = graph.add_room("north", "Room1.png", false);
        let west = graph.add_room("west", "Room1.png", false);

        graph.connect(hub, Direction::North, north);
        graph.connect(hub, Direction::West, west);

        assert_eq!(
            graph.room(hub).all_adjacent(),
            &[Some(north), None, None, Some(west)]
        );
    }

    #[test]
    fn test_cycles_are_allowed() {
        let mut graph = RoomGraph::new();
        let a = graph.add_room("a", "Room1.png", false);
        let b = graph.add_room("b", "Room1.png", false);

        graph.connect(a, Direction::East, b);
        graph.room_mut(b).add_adjacent(a, Direction::East);

        assert_eq!(graph.adjacent(a, Direction::East), Some(b));
        assert_eq!(graph.adjacent(b, Direction::East), Some(a));
    }

    #[test]
    fn test_room_without_event() {
        let mut graph = RoomGraph::new();
        let exit = graph.add_room("exit", "Room1.png", true);

        assert!(graph.room(exit).is_exit());
        assert_eq!(graph.room(exit).event_type(), EventType::None);
        assert_eq!(graph.find("exit"), Some(exit));
        assert!(graph.find("nowhere").is_none());
    }
}

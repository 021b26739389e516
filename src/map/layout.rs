//! Map descriptions
//!
//! A [`MapLayout`] names rooms, links them and places events. Building it
//! resolves the names into a [`RoomGraph`]. The campus map is built in;
//! other maps can be loaded from RON.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::AudioHandle;
use crate::core::GameConfig;
use crate::event::{Event, HiddenEncounter, Pickup, QuizEvent};
use crate::render::TextureSet;

use super::{Direction, RoomGraph, RoomId};

/// Event placed in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSpec {
    /// Speed boost pickup
    Boost,
    /// Timer freeze pickup
    Freeze,
    /// Next question from the bank
    Quiz,
    /// Hidden encounter
    Hidden {
        /// Ghost dialogue; no ghost when absent
        #[serde(default)]
        dialogue: Option<String>,
        /// Room a bookshelf leads to; no bookshelf when absent
        #[serde(default)]
        passage: Option<String>,
    },
}

/// A room in a layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Unique name
    pub name: String,
    /// Background texture
    pub texture: String,
    /// Entering wins the game
    #[serde(default)]
    pub exit: bool,
    /// Event placed in the room
    #[serde(default)]
    pub event: Option<EventSpec>,
}

impl RoomSpec {
    /// Plain room
    pub fn new(name: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
            exit: false,
            event: None,
        }
    }

    /// Mark as exit
    #[must_use]
    pub fn exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Place an event
    #[must_use]
    pub fn with_event(mut self, event: EventSpec) -> Self {
        self.event = Some(event);
        self
    }
}

fn default_reciprocal() -> bool {
    true
}

/// A door between two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    /// Room the door is in
    pub from: String,
    /// Edge of `from` the door is on
    pub direction: Direction,
    /// Room behind the door
    pub to: String,
    /// Also add the door back from `to`
    #[serde(default = "default_reciprocal")]
    pub reciprocal: bool,
}

/// A whole map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayout {
    /// Name of the room the player starts in
    pub start: String,
    /// Rooms, in id order
    pub rooms: Vec<RoomSpec>,
    /// Doors
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

/// Map building and loading errors
#[derive(Debug, Error)]
pub enum MapError {
    /// A link, passage or the start names a room that does not exist
    #[error("unknown room `{0}`")]
    UnknownRoom(String),

    /// Two rooms share a name
    #[error("duplicate room `{0}`")]
    DuplicateRoom(String),

    /// The start room is not in the layout
    #[error("start room `{0}` is not defined")]
    MissingStart(String),

    /// A link would replace a neighbor an earlier link already set
    #[error("room `{room}` already has a different neighbor to the {direction:?}")]
    SlotTaken {
        /// Room whose slot is taken
        room: String,
        /// Slot
        direction: Direction,
    },

    /// A quiz room exists but the question bank is empty
    #[error("room `{0}` has a quiz but there are no questions")]
    NoQuestions(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed layout file
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result of building a layout
#[derive(Debug)]
pub struct BuiltMap {
    /// Rooms and doors
    pub graph: RoomGraph,
    /// Where the player starts
    pub start: RoomId,
    /// Room background textures
    pub textures: TextureSet,
}

impl MapLayout {
    /// Create an empty layout starting in `start`
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            rooms: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a room
    #[must_use]
    pub fn room(mut self, room: RoomSpec) -> Self {
        self.rooms.push(room);
        self
    }

    /// Add a two-way door
    #[must_use]
    pub fn link(self, from: &str, direction: Direction, to: &str) -> Self {
        self.add_link(from, direction, to, true)
    }

    /// Add a door with no way back
    #[must_use]
    pub fn one_way(self, from: &str, direction: Direction, to: &str) -> Self {
        self.add_link(from, direction, to, false)
    }

    fn add_link(mut self, from: &str, direction: Direction, to: &str, reciprocal: bool) -> Self {
        self.links.push(LinkSpec {
            from: from.to_string(),
            direction,
            to: to.to_string(),
            reciprocal,
        });
        self
    }

    /// The university campus: nine rooms, an exit east of the last one and
    /// a secret library behind a bookshelf.
    #[must_use]
    pub fn campus() -> Self {
        const GHOST_LINE: &str = "Ghost of Longboi: \"Quack ... Quack\"";

        Self::new("room1")
            .room(RoomSpec::new("room1", "Room1.png"))
            .room(RoomSpec::new("room2", "Room3.png"))
            .room(RoomSpec::new("room3", "Room4.png").with_event(EventSpec::Boost))
            .room(RoomSpec::new("room4", "Room7.png").with_event(EventSpec::Freeze))
            .room(RoomSpec::new("room5", "Room6.png").with_event(EventSpec::Quiz))
            .room(RoomSpec::new("room6", "Room8.png").with_event(EventSpec::Hidden {
                dialogue: None,
                passage: Some("secret_library".to_string()),
            }))
            .room(RoomSpec::new("room7", "Room5.png").with_event(EventSpec::Hidden {
                dialogue: Some(GHOST_LINE.to_string()),
                passage: None,
            }))
            .room(RoomSpec::new("room8", "Room9.png"))
            .room(RoomSpec::new("room9", "Room10.png"))
            .room(RoomSpec::new("exit", "Room1.png").exit())
            .room(
                RoomSpec::new("secret_library", "Room2.png").with_event(EventSpec::Hidden {
                    dialogue: None,
                    passage: Some("room6".to_string()),
                }),
            )
            .link("room1", Direction::East, "room2")
            .link("room2", Direction::North, "room3")
            .link("room2", Direction::East, "room4")
            .link("room2", Direction::South, "room6")
            .link("room4", Direction::South, "room5")
            .link("room5", Direction::West, "room6")
            .link("room5", Direction::South, "room7")
            .link("room5", Direction::East, "room8")
            .link("room8", Direction::East, "room9")
            .one_way("room9", Direction::East, "exit")
    }

    /// Parse a layout from RON
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Parse`] for malformed input
    pub fn from_ron_str(content: &str) -> Result<Self, MapError> {
        ron::from_str(content).map_err(|e| MapError::Parse(e.to_string()))
    }

    /// Load a layout from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let content = fs::read_to_string(path.as_ref())?;
        let layout = Self::from_ron_str(&content)?;
        log::info!("Loaded map layout from {:?}", path.as_ref());
        Ok(layout)
    }

    /// Save the layout as pretty-printed RON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), MapError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| MapError::Parse(e.to_string()))?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Resolve names into a room graph and create the events.
    ///
    /// Quiz rooms take questions from the bank in order, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError`] for duplicate or unknown room names, a
    /// missing start room, a link into a door slot that already leads
    /// elsewhere, or quiz rooms without questions
    pub fn build(&self, config: &GameConfig, audio: &AudioHandle) -> Result<BuiltMap, MapError> {
        let mut graph = RoomGraph::new();
        let mut ids: FxHashMap<&str, RoomId> = FxHashMap::default();
        let mut textures = TextureSet::default();

        for spec in &self.rooms {
            let id = graph.add_room(&spec.name, &spec.texture, spec.exit);
            if ids.insert(spec.name.as_str(), id).is_some() {
                return Err(MapError::DuplicateRoom(spec.name.clone()));
            }
            textures.insert(&spec.texture);
        }

        let start = *ids
            .get(self.start.as_str())
            .ok_or_else(|| MapError::MissingStart(self.start.clone()))?;

        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| MapError::UnknownRoom(name.to_string()))
        };

        for link in &self.links {
            let from = lookup(&link.from)?;
            let to = lookup(&link.to)?;
            let check_slot = |room: RoomId, name: &str, direction: Direction, target: RoomId| {
                if graph.is_free_for(room, direction, target) {
                    Ok(())
                } else {
                    Err(MapError::SlotTaken {
                        room: name.to_string(),
                        direction,
                    })
                }
            };
            check_slot(from, &link.from, link.direction, to)?;
            if link.reciprocal {
                check_slot(to, &link.to, link.direction.opposite(), from)?;
                graph.connect(from, link.direction, to);
            } else {
                graph.room_mut(from).add_adjacent(to, link.direction);
            }
        }

        let ui_size = config.world.ui_size();
        let events = &config.events;
        let mut next_question = 0;

        for spec in &self.rooms {
            let Some(event_spec) = &spec.event else {
                continue;
            };
            let event: Event = match event_spec {
                EventSpec::Boost => {
                    Pickup::speed_boost(events.boost_amount, events.pickup_radius, audio.clone())
                        .into()
                }
                EventSpec::Freeze => Pickup::freeze(
                    config.timer.freeze_duration,
                    events.pickup_radius,
                    audio.clone(),
                )
                .into(),
                EventSpec::Quiz => {
                    if events.questions.is_empty() {
                        return Err(MapError::NoQuestions(spec.name.clone()));
                    }
                    let question = events.questions[next_question % events.questions.len()].clone();
                    next_question += 1;
                    QuizEvent::new(question, events, ui_size, audio.clone()).into()
                }
                EventSpec::Hidden { dialogue, passage } => {
                    let mut encounter = HiddenEncounter::new(
                        events.reveal_radius,
                        events.interact_radius,
                        ui_size,
                        audio.clone(),
                    );
                    if let Some(line) = dialogue {
                        encounter = encounter.with_figure(line.clone());
                    }
                    if let Some(target) = passage {
                        encounter = encounter.with_passage(lookup(target)?);
                    }
                    encounter.into()
                }
            };
            let id = lookup(&spec.name)?;
            graph.room_mut(id).set_event(event);
        }

        log::info!(
            "Built map: {} rooms, {} links, start {}",
            graph.len(),
            self.links.len(),
            self.start
        );

        Ok(BuiltMap {
            graph,
            start,
            textures,
        })
    }
}

impl Default for MapLayout {
    fn default() -> Self {
        Self::campus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Question;
    use crate::event::{EventKind, EventType, RoomEvent};

    fn build(layout: &MapLayout) -> Result<BuiltMap, MapError> {
        layout.build(&GameConfig::default(), &AudioHandle::silent())
    }

    #[test]
    fn test_campus_topology() {
        let map = build(&MapLayout::campus()).unwrap();
        let graph = &map.graph;
        let room = |name: &str| graph.find(name).unwrap();

        assert_eq!(map.start, room("room1"));
        assert_eq!(graph.adjacent(room("room1"), Direction::East), Some(room("room2")));
        assert_eq!(graph.adjacent(room("room2"), Direction::South), Some(room("room6")));
        assert_eq!(graph.adjacent(room("room5"), Direction::East), Some(room("room8")));
        assert_eq!(graph.adjacent(room("room9"), Direction::East), Some(room("exit")));

        // The exit has no way back
        assert_eq!(graph.adjacent(room("exit"), Direction::West), None);
        assert!(graph.room(room("exit")).is_exit());

        for r in graph.iter() {
            for dir in Direction::ALL {
                if r.name() != "room9" || dir != Direction::East {
                    assert!(graph.is_reciprocal(r.id(), dir), "{} {dir}", r.name());
                }
            }
        }
    }

    #[test]
    fn test_campus_events() {
        let map = build(&MapLayout::campus()).unwrap();
        let graph = &map.graph;
        let kind = |name: &str| {
            graph
                .room(graph.find(name).unwrap())
                .event()
                .map(RoomEvent::kind)
        };

        assert_eq!(kind("room1"), None);
        assert_eq!(kind("room3"), Some(EventKind::SpeedBoost));
        assert_eq!(kind("room4"), Some(EventKind::TimeFreeze));
        assert_eq!(kind("room5"), Some(EventKind::Quiz));
        assert_eq!(kind("room7"), Some(EventKind::Hidden));

        let room7 = graph.room(graph.find("room7").unwrap());
        assert_eq!(room7.event_type(), EventType::Hidden);
    }

    #[test]
    fn test_secret_passages_point_at_each_other() {
        let map = build(&MapLayout::campus()).unwrap();
        let graph = &map.graph;
        let room6 = graph.find("room6").unwrap();
        let library = graph.find("secret_library").unwrap();

        let target = |room| match graph.room(room).event() {
            Some(Event::Hidden(h)) => h.passage().map(|p| p.target()),
            _ => None,
        };
        assert_eq!(target(room6), Some(library));
        assert_eq!(target(library), Some(room6));

        // Only reachable through the bookshelf
        assert!(graph.room(library).all_adjacent().iter().all(Option::is_none));
    }

    #[test]
    fn test_room_textures_collected_once() {
        let map = build(&MapLayout::campus()).unwrap();

        // Room1.png is shared by the start and the exit
        assert_eq!(map.textures.names().len(), map.graph.len() - 1);
    }

    #[test]
    fn test_unknown_room_in_link() {
        let layout = MapLayout::new("a")
            .room(RoomSpec::new("a", "Room1.png"))
            .link("a", Direction::East, "b");

        assert!(matches!(build(&layout), Err(MapError::UnknownRoom(name)) if name == "b"));
    }

    #[test]
    fn test_link_into_taken_slot() {
        let layout = MapLayout::new("a")
            .room(RoomSpec::new("a", "Room1.png"))
            .room(RoomSpec::new("b", "Room3.png"))
            .room(RoomSpec::new("c", "Room4.png"))
            .link("a", Direction::East, "b")
            .link("c", Direction::West, "a");

        assert!(matches!(
            build(&layout),
            Err(MapError::SlotTaken { room, direction: Direction::East }) if room == "a"
        ));

        // The way back is checked too
        let back = MapLayout::new("a")
            .room(RoomSpec::new("a", "Room1.png"))
            .room(RoomSpec::new("b", "Room3.png"))
            .room(RoomSpec::new("c", "Room4.png"))
            .link("a", Direction::East, "b")
            .link("c", Direction::East, "b");

        assert!(matches!(
            build(&back),
            Err(MapError::SlotTaken { room, direction: Direction::West }) if room == "b"
        ));
    }

    #[test]
    fn test_repeated_link_is_accepted() {
        let layout = MapLayout::new("a")
            .room(RoomSpec::new("a", "Room1.png"))
            .room(RoomSpec::new("b", "Room3.png"))
            .link("a", Direction::East, "b")
            .link("b", Direction::West, "a");

        let map = build(&layout).unwrap();
        assert!(map.graph.is_reciprocal(map.start, Direction::East));
    }

    #[test]
    fn test_duplicate_and_missing_start() {
        let dup = MapLayout::new("a")
            .room(RoomSpec::new("a", "Room1.png"))
            .room(RoomSpec::new("a", "Room3.png"));
        assert!(matches!(build(&dup), Err(MapError::DuplicateRoom(_))));

        let no_start = MapLayout::new("z").room(RoomSpec::new("a", "Room1.png"));
        assert!(matches!(build(&no_start), Err(MapError::MissingStart(_))));
    }

    #[test]
    fn test_quiz_questions_round_robin() {
        let mut config = GameConfig::default();
        config.events.questions = vec![Question::new("one", true), Question::new("two", false)];
        let layout = MapLayout::new("a")
            .room(RoomSpec::new("a", "Room1.png").with_event(EventSpec::Quiz))
            .room(RoomSpec::new("b", "Room1.png").with_event(EventSpec::Quiz))
            .room(RoomSpec::new("c", "Room1.png").with_event(EventSpec::Quiz));

        let map = layout.build(&config, &AudioHandle::silent()).unwrap();
        let text = |i: usize| match map.graph.room(RoomId(i)).event() {
            Some(Event::Quiz(q)) => q.question().text.clone(),
            _ => String::new(),
        };
        assert_eq!(text(0), "one");
        assert_eq!(text(1), "two");
        assert_eq!(text(2), "one");

        config.events.questions.clear();
        assert!(matches!(
            layout.build(&config, &AudioHandle::silent()),
            Err(MapError::NoQuestions(_))
        ));
    }

    #[test]
    fn test_layout_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.ron");

        MapLayout::campus().save_ron(&path).unwrap();
        let loaded = MapLayout::load_ron(&path).unwrap();
        assert_eq!(loaded, MapLayout::campus());

        let minimal = r#"(
            start: "a",
            rooms: [
                (name: "a", texture: "Room1.png"),
                (name: "b", texture: "Room3.png", exit: true),
            ],
            links: [(from: "a", direction: East, to: "b")],
        )"#;
        let layout = MapLayout::from_ron_str(minimal).unwrap();
        assert!(layout.links[0].reciprocal);
        let map = build(&layout).unwrap();
        assert_eq!(map.graph.adjacent(RoomId(1), Direction::West), Some(RoomId(0)));

        assert!(matches!(
            MapLayout::from_ron_str("(start: 3)"),
            Err(MapError::Parse(_))
        ));
    }
}

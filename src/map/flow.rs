//! Room transitions
//!
//! [`RoomFlowManager`] owns the room graph and the current room. A
//! transition runs synchronously inside one frame:
//!
//! 1. look up the neighbor (missing neighbor: nothing happens)
//! 2. detach the old room's event
//! 3. make the neighbor current
//! 4. resync the doors
//! 5. move the player to the entry edge
//! 6. start the new room's event
//! 7. if the new room is an exit, signal the win
//!
//! # Example
//!
//! ```ignore
//! if let Some(direction) = doors.update(&player) {
//!     match flow.change_room(direction, &mut doors, &mut events, &mut ctx) {
//!         RoomChange::Escaped(_) => show_win_screen(),
//!         RoomChange::Entered(room) => log::debug!("now in {room}"),
//!         RoomChange::Blocked => {}
//!     }
//! }
//! ```

use glam::Vec2;

use crate::core::GameSignal;
use crate::event::{EventContext, EventSystem};
use crate::game::{GameOutcome, OutcomeSnapshot};
use crate::physics::Aabb;
use crate::render::{Canvas, TextureSet};

use super::{BuiltMap, Direction, DoorController, RoomGraph, RoomId};

// ============================================================================
// Transition Results
// ============================================================================

/// Result of a transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomChange {
    /// No room there; nothing changed
    Blocked,
    /// Now in this room
    Entered(RoomId),
    /// Now in this exit room; the win was signalled
    Escaped(RoomId),
}

// ============================================================================
// Room Flow
// ============================================================================

/// Owns the map and moves the player through it.
///
/// Rooms are never created or dropped during play; transitions only move
/// the `current` index and toggle event activity. Textures are held until
/// [`dispose`](Self::dispose).
///
/// # Performance
///
/// - `change_room`: O(1) lookup plus one door resync (4 neighbors)
/// - `go_to_room`: same as `change_room`, without the reposition
/// - Win check: one flag read per arrival
#[derive(Debug)]
pub struct RoomFlowManager {
    graph: RoomGraph,
    start: RoomId,
    current: RoomId,
    textures: TextureSet,
    time_bonus_per_second: i32,
}

impl RoomFlowManager {
    /// Take ownership of a built map. The start room becomes current but
    /// is not entered until [`enter_start`](Self::enter_start).
    #[must_use]
    pub fn new(map: BuiltMap, time_bonus_per_second: i32) -> Self {
        Self {
            graph: map.graph,
            start: map.start,
            current: map.start,
            textures: map.textures,
            time_bonus_per_second,
        }
    }

    /// Enter the start room: resync doors and start its event
    pub fn enter_start(
        &mut self,
        doors: &mut DoorController,
        events: &mut EventSystem,
        ctx: &mut EventContext<'_>,
    ) -> RoomChange {
        events.on_exit_room();
        self.current = self.start;
        doors.update_for_room(&self.graph, self.start);
        log::info!("Starting in {}", self.graph.room(self.start).name());
        self.arrive(None, None, events, ctx)
    }

    /// Walk through the door on `direction`'s edge.
    ///
    /// Returns [`RoomChange::Blocked`] and changes nothing when the current
    /// room has no neighbor there.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let change = flow.change_room(Direction::East, &mut doors, &mut events, &mut ctx);
    /// assert_eq!(change, RoomChange::Entered(room2));
    /// ```
    pub fn change_room(
        &mut self,
        direction: Direction,
        doors: &mut DoorController,
        events: &mut EventSystem,
        ctx: &mut EventContext<'_>,
    ) -> RoomChange {
        let Some(next) = self.graph.adjacent(self.current, direction) else {
            log::warn!(
                "No room {direction} of {}, ignoring transition",
                self.graph.room(self.current).name()
            );
            return RoomChange::Blocked;
        };

        let from = self.current;
        events.on_exit_room();
        self.current = next;
        doors.update_for_room(&self.graph, next);
        ctx.player.position_after_room_change(direction);
        self.arrive(Some(from), Some(direction), events, ctx)
    }

    /// Jump straight to `target`, keeping the player where they stand.
    ///
    /// Used by secret passages. The same exit, resync and enter steps run
    /// as for [`change_room`](Self::change_room); the `RoomEntered` signal
    /// carries no direction.
    pub fn go_to_room(
        &mut self,
        target: RoomId,
        doors: &mut DoorController,
        events: &mut EventSystem,
        ctx: &mut EventContext<'_>,
    ) -> RoomChange {
        if self.graph.get(target).is_none() {
            log::warn!("Unknown room {target}, ignoring jump");
            return RoomChange::Blocked;
        }

        let from = self.current;
        events.on_exit_room();
        self.current = target;
        doors.update_for_room(&self.graph, target);
        self.arrive(Some(from), None, events, ctx)
    }

    fn arrive(
        &mut self,
        from: Option<RoomId>,
        direction: Option<Direction>,
        events: &mut EventSystem,
        ctx: &mut EventContext<'_>,
    ) -> RoomChange {
        let room = self.current;
        log::info!("Entered {}", self.graph.room(room).name());
        ctx.signals.push(GameSignal::RoomEntered {
            room,
            from,
            direction,
        });

        events.on_enter_room(&mut self.graph, room, ctx);

        if !self.graph.room(room).is_exit() {
            return RoomChange::Entered(room);
        }

        let snapshot = OutcomeSnapshot::capture(
            GameOutcome::Won,
            &*ctx.timer,
            &*ctx.score,
            self.time_bonus_per_second,
        );
        log::info!("Escaped with final score {}", snapshot.final_score);
        ctx.signals.push(GameSignal::Won(snapshot));
        RoomChange::Escaped(room)
    }

    /// The current room
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// The start room
    #[must_use]
    pub fn start_room(&self) -> RoomId {
        self.start
    }

    /// The map
    #[must_use]
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// The map, mutably
    pub fn graph_mut(&mut self) -> &mut RoomGraph {
        &mut self.graph
    }

    /// Draw the current room's background over the whole world
    pub fn draw_current_room(&self, canvas: &mut dyn Canvas, world_size: Vec2) {
        let room = self.graph.room(self.current);
        canvas.draw_texture(room.texture(), Aabb::new(0.0, 0.0, world_size.x, world_size.y));
    }

    /// Release room textures; safe to call more than once
    pub fn dispose(&mut self) {
        self.textures.dispose();
    }

    /// Whether [`dispose`](Self::dispose) ran
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.textures.is_disposed()
    }
}

// ============================================================================
// Tests
// ============================================================================

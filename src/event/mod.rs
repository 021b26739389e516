//! Room events
//!
//! Every room may own one event. All variants share the same lifecycle,
//! driven through the [`RoomEvent`] trait:
//!
//! 1. [`RoomEvent::start`] - the player entered the owning room
//! 2. [`RoomEvent::update`] - once per frame while the room is current
//! 3. [`RoomEvent::end`] - the event resolved and releases its side effects
//!
//! ```text
//! Dormant --start--> Active --trigger--> Resolved --end--> Finished
//! ```
//!
//! Starting or ending a finished event does nothing. Leaving a room does
//! not end its event: the state stays on the [`Room`](crate::map::Room)
//! and picks up where it left off when the player comes back.

mod hidden;
mod pickup;
mod quiz;
mod system;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::SignalQueue;
use crate::game::{Player, ScoreManager, Timer};
use crate::input::Input;
use crate::map::RoomId;
use crate::render::Canvas;

pub use hidden::{Figure, HiddenEncounter, Passage};
pub use pickup::{Pickup, PickupEffect};
pub use quiz::QuizEvent;
pub use system::EventSystem;

// ============================================================================
// Event Types
// ============================================================================

/// Coarse classification shown to the rest of the game.
///
/// Door indicators only reveal `Positive` and `Negative` neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    /// No event
    #[default]
    None,
    /// Helps the player
    Positive,
    /// Hinders the player
    Negative,
    /// Secret content
    Hidden,
}

/// Concrete event variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Permanent speed boost pickup
    SpeedBoost,
    /// Timer freeze pickup
    TimeFreeze,
    /// True/false question blocking the room
    Quiz,
    /// Reveal encounter and/or secret passage
    Hidden,
}

/// Lifecycle position of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventPhase {
    /// Built, never started
    #[default]
    Dormant,
    /// Waiting for its trigger
    Active,
    /// Triggered, effect applied, not yet ended
    Resolved,
    /// Terminal
    Finished,
}

/// What an event asks of the session after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventRequest {
    /// Nothing
    #[default]
    None,
    /// Move the player to another room without using a door
    GoToRoom(RoomId),
}

/// Session state events may read and change
pub struct EventContext<'a> {
    /// The player
    pub player: &'a mut Player,
    /// Countdown
    pub timer: &'a mut Timer,
    /// Score
    pub score: &'a mut ScoreManager,
    /// This frame's input
    pub input: &'a Input,
    /// Outgoing signals
    pub signals: &'a mut SignalQueue,
}

impl fmt::Debug for EventContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventContext")
            .field("player", &self.player.center())
            .field("time_left", &self.timer.time_left())
            .field("score", &self.score.score())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Lifecycle shared by all room events.
///
/// Implementors keep their own state across room visits; the
/// [`EventSystem`] only decides which room's event is driven this frame.
/// `start` and `end` are idempotent once the event has finished, so the
/// session may call them on every entry without checking.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct Bell { phase: EventPhase }
///
/// impl RoomEvent for Bell {
///     fn name(&self) -> &'static str { "Bell" }
///     fn event_type(&self) -> EventType { EventType::None }
///     fn kind(&self) -> EventKind { EventKind::Hidden }
///     fn phase(&self) -> EventPhase { self.phase }
///     fn start(&mut self, _ctx: &mut EventContext<'_>) {
///         if self.phase == EventPhase::Dormant {
///             self.phase = EventPhase::Active;
///         }
///     }
///     fn end(&mut self, _ctx: &mut EventContext<'_>) {
///         if self.phase == EventPhase::Resolved {
///             self.phase = EventPhase::Finished;
///         }
///     }
///     fn update(&mut self, _delta: f32, _ctx: &mut EventContext<'_>) -> EventRequest {
///         EventRequest::None
///     }
/// }
/// ```
pub trait RoomEvent: fmt::Debug {
    /// Event name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Classification used by door indicators and audio
    fn event_type(&self) -> EventType;

    /// Concrete variant
    fn kind(&self) -> EventKind;

    /// Current lifecycle phase
    fn phase(&self) -> EventPhase;

    /// Called when the player enters the owning room.
    ///
    /// No-op once finished.
    fn start(&mut self, ctx: &mut EventContext<'_>);

    /// Release the event's side effects and finish it.
    ///
    /// No-op until the event has resolved, and once finished.
    fn end(&mut self, ctx: &mut EventContext<'_>);

    /// Called each frame while the owning room is current.
    fn update(&mut self, delta: f32, ctx: &mut EventContext<'_>) -> EventRequest;

    /// Draw world-space sprites
    fn draw(&self, _canvas: &mut dyn Canvas) {}

    /// Draw UI overlays
    fn draw_ui(&self, _canvas: &mut dyn Canvas) {}

    /// Whether the event reached its terminal state
    fn is_finished(&self) -> bool {
        self.phase() == EventPhase::Finished
    }
}

// ============================================================================
// Event Variants
// ============================================================================

/// One of the known room events.
///
/// The set is closed, so rooms store events by value and dispatch without
/// boxing. Each variant converts into `Event` with `From`.
#[derive(Debug)]
pub enum Event {
    /// Speed boost or timer freeze
    Pickup(Pickup),
    /// True/false question
    Quiz(QuizEvent),
    /// Reveal encounter and/or secret passage
    Hidden(HiddenEncounter),
}

macro_rules! dispatch {
    ($self:ident, $event:ident => $body:expr) => {
        match $self {
            Event::Pickup($event) => $body,
            Event::Quiz($event) => $body,
            Event::Hidden($event) => $body,
        }
    };
}

impl RoomEvent for Event {
    fn name(&self) -> &'static str {
        dispatch!(self, e => e.name())
    }

    fn event_type(&self) -> EventType {
        dispatch!(self, e => e.event_type())
    }

    fn kind(&self) -> EventKind {
        dispatch!(self, e => e.kind())
    }

    fn phase(&self) -> EventPhase {
        dispatch!(self, e => e.phase())
    }

    fn start(&mut self, ctx: &mut EventContext<'_>) {
        dispatch!(self, e => e.start(ctx));
    }

    fn end(&mut self, ctx: &mut EventContext<'_>) {
        dispatch!(self, e => e.end(ctx));
    }

    fn update(&mut self, delta: f32, ctx: &mut EventContext<'_>) -> EventRequest {
        dispatch!(self, e => e.update(delta, ctx))
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        dispatch!(self, e => e.draw(canvas));
    }

    fn draw_ui(&self, canvas: &mut dyn Canvas) {
        dispatch!(self, e => e.draw_ui(canvas));
    }
}

impl From<Pickup> for Event {
    fn from(event: Pickup) -> Self {
        Self::Pickup(event)
    }
}

impl From<QuizEvent> for Event {
    fn from(event: QuizEvent) -> Self {
        Self::Quiz(event)
    }
}

impl From<HiddenEncounter> for Event {
    fn from(event: HiddenEncounter) -> Self {
        Self::Hidden(event)
    }
}

// ============================================================================
// Tests
// ============================================================================

/// Bundles the session state tests hand to events
#[cfg(test)]
pub(crate) struct TestSession {
    pub player: Player,
    pub timer: Timer,
    pub score: ScoreManager,
    pub input: Input,
    pub signals: SignalQueue,
}

#[cfg(test)]
impl TestSession {
    pub fn new() -> Self {
        Self {
            player: Player::new(&crate::core::PlayerConfig::default(), glam::Vec2::new(16.0, 9.0)),
            timer: Timer::new(300.0),
            score: ScoreManager::new(),
            input: Input::new(),
            signals: SignalQueue::new(),
        }
    }

    pub fn ctx(&mut self) -> EventContext<'_> {
        EventContext {
            player: &mut self.player,
            timer: &mut self.timer,
            score: &mut self.score,
            input: &self.input,
            signals: &mut self.signals,
        }
    }
}

//! Gameplay signals
//!
//! Rooms, events and the controller report what happened by pushing a
//! [`GameSignal`]; hosts read them to drive screens and sound. Signals
//! pushed during frame N become readable in frame N+1.
//!
//! # Example
//!
//! ```ignore
//! // Frame N: gameplay pushes
//! signals.push(GameSignal::ScoreChanged { score: 500 });
//!
//! // Frame N+1: host reads
//! signals.swap();
//! for signal in signals.iter() {
//!     if let GameSignal::Won(snapshot) = signal {
//!         show_win_screen(snapshot);
//!     }
//! }
//! ```

use crate::event::EventKind;
use crate::game::OutcomeSnapshot;
use crate::map::{Direction, RoomId};

/// Things that happened during a frame.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GameSignal {
    /// The current room changed.
    RoomEntered {
        /// Room now current
        room: RoomId,
        /// Room that was left, if any
        from: Option<RoomId>,
        /// Door used, `None` for the start room and secret passages
        direction: Option<Direction>,
    },

    /// A room's event was started on entry.
    EventStarted {
        /// Owning room
        room: RoomId,
        /// Event kind
        kind: EventKind,
    },

    /// A room's event reached its terminal state.
    EventFinished {
        /// Owning room
        room: RoomId,
        /// Event kind
        kind: EventKind,
    },

    /// The score changed.
    ScoreChanged {
        /// New score
        score: i32,
    },

    /// The player's speed changed.
    SpeedChanged {
        /// New speed
        speed: f32,
    },

    /// The countdown was frozen.
    TimerFrozen {
        /// Freeze length in seconds
        duration: f32,
    },

    /// The player reached the exit.
    Won(OutcomeSnapshot),

    /// The countdown ran out.
    Lost(OutcomeSnapshot),
}

/// Signals written this frame and the batch published at the last swap
#[derive(Debug, Default)]
pub struct SignalQueue {
    writing: Vec<GameSignal>,
    published: Vec<GameSignal>,
}

impl SignalQueue {
    /// Empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signal; readers see it after the next [`SignalQueue::swap`]
    pub fn push(&mut self, signal: GameSignal) {
        log::trace!("Signal: {signal:?}");
        self.writing.push(signal);
    }

    /// Publish this frame's signals and drop the previous batch.
    ///
    /// The controller calls this at the top of every update.
    pub fn swap(&mut self) {
        self.published = std::mem::take(&mut self.writing);
    }

    /// Published signals, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GameSignal> {
        self.published.iter()
    }

    /// Signals pushed since the last swap
    pub fn pending(&self) -> impl Iterator<Item = &GameSignal> {
        self.writing.iter()
    }

    /// Take the published signals
    pub fn drain(&mut self) -> impl Iterator<Item = GameSignal> + '_ {
        self.published.drain(..)
    }

    /// Whether nothing is published
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }

    /// Number of published signals
    #[must_use]
    pub fn len(&self) -> usize {
        self.published.len()
    }

    /// Number of signals pushed since the last swap
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.writing.len()
    }

    /// Drop everything, published or not
    pub fn clear(&mut self) {
        self.writing.clear();
        self.published.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_visible_after_swap() {
        let mut queue = SignalQueue::new();

        queue.push(GameSignal::ScoreChanged { score: 500 });
        assert!(queue.is_empty());
        assert_eq!(queue.pending_count(), 1);

        queue.swap();
        assert_eq!(queue.len(), 1);

        let signals: Vec<_> = queue.iter().collect();
        assert!(matches!(signals[0], GameSignal::ScoreChanged { score: 500 }));
    }

    #[test]
    fn test_each_swap_publishes_one_frame() {
        let mut queue = SignalQueue::new();

        queue.push(GameSignal::ScoreChanged { score: 1 });
        queue.swap();

        queue.push(GameSignal::ScoreChanged { score: 2 });

        let signals: Vec<_> = queue.iter().collect();
        assert_eq!(signals.len(), 1);
        assert!(matches!(signals[0], GameSignal::ScoreChanged { score: 1 }));

        queue.swap();
        let signals: Vec<_> = queue.iter().collect();
        assert_eq!(signals.len(), 1);
        assert!(matches!(signals[0], GameSignal::ScoreChanged { score: 2 }));
    }

    #[test]
    fn test_drain_and_clear() {
        let mut queue = SignalQueue::new();

        queue.push(GameSignal::TimerFrozen { duration: 30.0 });
        queue.push(GameSignal::SpeedChanged { speed: 5.0 });
        queue.swap();

        let signals: Vec<_> = queue.drain().collect();
        assert_eq!(signals.len(), 2);
        assert!(queue.is_empty());

        queue.push(GameSignal::ScoreChanged { score: 3 });
        queue.clear();
        assert_eq!(queue.pending_count(), 0);
    }
}

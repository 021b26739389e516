//! Activation of the current room's event

use crate::core::GameSignal;
use crate::map::{RoomGraph, RoomId};
use crate::render::Canvas;

use super::{EventContext, EventRequest, RoomEvent};

/// Tracks which room's event is live and forwards frame calls to it.
///
/// Only the room id is kept; the event itself stays on its
/// [`Room`](crate::map::Room), so leaving a room loses no event state.
#[derive(Debug, Default)]
pub struct EventSystem {
    active: Option<RoomId>,
}

impl EventSystem {
    /// Create a system with no active room
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Room whose event is live
    #[must_use]
    pub fn active_room(&self) -> Option<RoomId> {
        self.active
    }

    /// Activate `room`'s event and start it
    pub fn on_enter_room(&mut self, graph: &mut RoomGraph, room: RoomId, ctx: &mut EventContext<'_>) {
        self.active = Some(room);

        let Some(event) = graph.room_mut(room).event_mut() else {
            return;
        };
        if event.is_finished() {
            log::trace!("{} in {room} already finished", event.name());
            return;
        }

        event.start(ctx);
        ctx.signals.push(GameSignal::EventStarted {
            room,
            kind: event.kind(),
        });
    }

    /// Detach the live event without ending it
    pub fn on_exit_room(&mut self) {
        if let Some(room) = self.active.take() {
            log::trace!("Leaving events of {room}");
        }
    }

    /// Update the live event
    pub fn update(
        &mut self,
        graph: &mut RoomGraph,
        delta: f32,
        ctx: &mut EventContext<'_>,
    ) -> EventRequest {
        let Some(room) = self.active else {
            return EventRequest::None;
        };
        let Some(event) = graph.room_mut(room).event_mut() else {
            return EventRequest::None;
        };
        if event.is_finished() {
            return EventRequest::None;
        }

        let request = event.update(delta, ctx);
        if event.is_finished() {
            ctx.signals.push(GameSignal::EventFinished {
                room,
                kind: event.kind(),
            });
        }
        request
    }

    /// Draw the live event's world sprites
    pub fn draw_world(&self, graph: &RoomGraph, canvas: &mut dyn Canvas) {
        if let Some(event) = self.live_event(graph) {
            event.draw(canvas);
        }
    }

    /// Draw the live event's UI
    pub fn draw_ui(&self, graph: &RoomGraph, canvas: &mut dyn Canvas) {
        if let Some(event) = self.live_event(graph) {
            event.draw_ui(canvas);
        }
    }

    fn live_event<'g>(&self, graph: &'g RoomGraph) -> Option<&'g super::Event> {
        self.active
            .and_then(|room| graph.room(room).event())
            .filter(|event| !event.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioHandle;
    use crate::core::{EventConfig, Question};
    use crate::event::{EventKind, EventPhase, Pickup, QuizEvent, TestSession};
    use crate::render::{DrawList, names};
    use glam::Vec2;

    fn graph_with_boost() -> (RoomGraph, RoomId, RoomId) {
        let mut graph = RoomGraph::new();
        let plain = graph.add_room("plain", "Room1.png", false);
        let boost = graph.add_room("boost", "Room4.png", false);
        graph
            .room_mut(boost)
            .set_event(Pickup::speed_boost(2.0, 1.0, AudioHandle::silent()).into());
        (graph, plain, boost)
    }

    #[test]
    fn test_enter_starts_event() {
        let (mut graph, _, boost) = graph_with_boost();
        let mut session = TestSession::new();
        let mut events = EventSystem::new();

        events.on_enter_room(&mut graph, boost, &mut session.ctx());

        assert_eq!(events.active_room(), Some(boost));
        let phase = graph.room(boost).event().map(RoomEvent::phase);
        assert_eq!(phase, Some(EventPhase::Active));

        session.signals.swap();
        assert!(session.signals.iter().any(|s| matches!(
            s,
            GameSignal::EventStarted {
                kind: EventKind::SpeedBoost,
                ..
            }
        )));
    }

    #[test]
    fn test_room_without_event() {
        let (mut graph, plain, _) = graph_with_boost();
        let mut session = TestSession::new();
        let mut events = EventSystem::new();

        events.on_enter_room(&mut graph, plain, &mut session.ctx());
        let request = events.update(&mut graph, 0.016, &mut session.ctx());

        assert_eq!(request, EventRequest::None);
        assert_eq!(session.signals.pending_count(), 0);
    }

    #[test]
    fn test_exit_detaches_without_ending() {
        let mut graph = RoomGraph::new();
        let room = graph.add_room("quiz", "Room6.png", false);
        graph.room_mut(room).set_event(
            QuizEvent::new(
                Question::new("?", true),
                &EventConfig::default(),
                Vec2::new(1920.0, 1080.0),
                AudioHandle::silent(),
            )
            .into(),
        );
        let mut session = TestSession::new();
        let mut events = EventSystem::new();

        events.on_enter_room(&mut graph, room, &mut session.ctx());
        events.on_exit_room();

        assert_eq!(events.active_room(), None);
        let phase = graph.room(room).event().map(RoomEvent::phase);
        assert_eq!(phase, Some(EventPhase::Active));
    }

    #[test]
    fn test_update_reports_finish_once() {
        let (mut graph, _, boost) = graph_with_boost();
        let mut session = TestSession::new();
        let mut events = EventSystem::new();

        events.on_enter_room(&mut graph, boost, &mut session.ctx());
        session.player.set_center(Vec2::new(8.0, 4.5));
        for _ in 0..5 {
            events.update(&mut graph, 0.016, &mut session.ctx());
        }

        let finished = session
            .signals
            .pending()
            .filter(|s| matches!(s, GameSignal::EventFinished { .. }))
            .count();
        assert_eq!(finished, 1);
        assert!((session.player.speed() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_finished_event_is_not_drawn_or_restarted() {
        let (mut graph, plain, boost) = graph_with_boost();
        let mut session = TestSession::new();
        let mut events = EventSystem::new();

        let mut canvas = DrawList::new();
        events.on_enter_room(&mut graph, boost, &mut session.ctx());
        events.draw_world(&graph, &mut canvas);
        assert!(canvas.has_texture(names::SAUSAGE_ROLL));

        session.player.set_center(Vec2::new(8.0, 4.5));
        events.update(&mut graph, 0.016, &mut session.ctx());
        events.on_exit_room();
        events.on_enter_room(&mut graph, plain, &mut session.ctx());
        events.on_exit_room();
        session.signals.clear();

        events.on_enter_room(&mut graph, boost, &mut session.ctx());
        assert_eq!(session.signals.pending_count(), 0);

        canvas.clear();
        events.draw_world(&graph, &mut canvas);
        assert!(canvas.is_empty());
    }
}

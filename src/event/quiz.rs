//! True/false quiz that blocks the room until answered

use glam::Vec2;

use crate::audio::{AudioHandle, SoundCue};
use crate::core::{EventConfig, GameSignal, Question};
use crate::render::Canvas;
use crate::ui::{Rect, RectStyle};

use super::{EventContext, EventKind, EventPhase, EventRequest, EventType, RoomEvent};

const TITLE_OFFSET: Vec2 = Vec2::new(0.0, -270.0);
const TITLE_SIZE: Vec2 = Vec2::new(480.0, 120.0);
const QUESTION_SIZE: Vec2 = Vec2::new(1200.0, 360.0);
const BUTTON_SIZE: Vec2 = Vec2::new(600.0, 240.0);
const TRUE_OFFSET: Vec2 = Vec2::new(-320.0, 324.0);
const FALSE_OFFSET: Vec2 = Vec2::new(320.0, 324.0);

/// A negative event: the player is stopped and must answer a question.
///
/// A correct answer adds to the score, a wrong one costs speed. The
/// feedback stays on screen for a short delay, after which the event ends
/// and the player may move again.
#[derive(Debug)]
pub struct QuizEvent {
    question: Question,
    bonus: i32,
    speed_penalty: f32,
    answer_delay: f32,
    ui_size: Vec2,
    audio: AudioHandle,
    phase: EventPhase,
    choice: Option<bool>,
    since_answer: f32,
}

impl QuizEvent {
    /// Create a quiz for `question` laid out on a UI canvas of `ui_size`
    #[must_use]
    pub fn new(question: Question, config: &EventConfig, ui_size: Vec2, audio: AudioHandle) -> Self {
        Self {
            question,
            bonus: config.quiz_bonus,
            speed_penalty: config.quiz_speed_penalty,
            answer_delay: config.quiz_answer_delay,
            ui_size,
            audio,
            phase: EventPhase::Dormant,
            choice: None,
            since_answer: 0.0,
        }
    }

    /// The question asked
    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// The player's choice, once made
    #[must_use]
    pub fn choice(&self) -> Option<bool> {
        self.choice
    }

    /// Whether the player answered correctly, once answered
    #[must_use]
    pub fn was_correct(&self) -> Option<bool> {
        self.choice.map(|c| c == self.question.answer)
    }

    /// The TRUE button, in UI space
    #[must_use]
    pub fn true_button(&self) -> Rect {
        Rect::centered(TRUE_OFFSET, BUTTON_SIZE).with_style(RectStyle::CONFIRM)
    }

    /// The FALSE button, in UI space
    #[must_use]
    pub fn false_button(&self) -> Rect {
        Rect::centered(FALSE_OFFSET, BUTTON_SIZE).with_style(RectStyle::DENY)
    }

    /// Register an answer.
    ///
    /// Ignored unless the quiz is waiting for one.
    pub fn choose(&mut self, choice: bool, ctx: &mut EventContext<'_>) {
        if self.phase != EventPhase::Active {
            return;
        }

        self.choice = Some(choice);
        self.since_answer = 0.0;
        self.phase = EventPhase::Resolved;
        self.audio.play(SoundCue::Click);

        if choice == self.question.answer {
            ctx.score.add(self.bonus);
            log::debug!("Quiz answered correctly, score now {}", ctx.score.score());
            ctx.signals.push(GameSignal::ScoreChanged {
                score: ctx.score.score(),
            });
        } else {
            ctx.player.increase_speed(-self.speed_penalty);
            log::debug!("Quiz answered wrong, speed now {}", ctx.player.speed());
            ctx.signals.push(GameSignal::SpeedChanged {
                speed: ctx.player.speed(),
            });
        }
    }

    fn display_text(&self) -> String {
        match self.was_correct() {
            Some(true) => format!("Correct: Score +{}", self.bonus),
            Some(false) => "Incorrect: Speed Decrease".to_string(),
            None => self.question.text.clone(),
        }
    }
}

impl RoomEvent for QuizEvent {
    fn name(&self) -> &'static str {
        "Quiz"
    }

    fn event_type(&self) -> EventType {
        EventType::Negative
    }

    fn kind(&self) -> EventKind {
        EventKind::Quiz
    }

    fn phase(&self) -> EventPhase {
        self.phase
    }

    fn start(&mut self, ctx: &mut EventContext<'_>) {
        if self.phase == EventPhase::Finished {
            return;
        }

        ctx.player.enable_movement(false);
        self.audio.play(SoundCue::Event(EventType::Negative));

        // An answered quiz resumes its feedback delay
        if self.choice.is_none() {
            self.phase = EventPhase::Active;
        }
        log::debug!("Quiz started ({:?})", self.phase);
    }

    fn end(&mut self, ctx: &mut EventContext<'_>) {
        if self.phase != EventPhase::Resolved {
            return;
        }
        ctx.player.enable_movement(true);
        self.phase = EventPhase::Finished;
        log::debug!("Quiz finished");
    }

    fn update(&mut self, delta: f32, ctx: &mut EventContext<'_>) -> EventRequest {
        match self.phase {
            EventPhase::Active => {
                if ctx.input.is_pointer_just_pressed() {
                    let pointer = ctx.input.pointer_position();
                    if self.true_button().contains(pointer, self.ui_size) {
                        self.choose(true, ctx);
                    } else if self.false_button().contains(pointer, self.ui_size) {
                        self.choose(false, ctx);
                    }
                }
            }
            EventPhase::Resolved => {
                self.since_answer += delta;
                if self.since_answer > self.answer_delay {
                    self.end(ctx);
                }
            }
            EventPhase::Dormant | EventPhase::Finished => {}
        }
        EventRequest::None
    }

    fn draw_ui(&self, canvas: &mut dyn Canvas) {
        if matches!(self.phase, EventPhase::Dormant | EventPhase::Finished) {
            return;
        }
        let center = self.ui_size * 0.5;

        let title = Rect::centered(TITLE_OFFSET, TITLE_SIZE).with_style(RectStyle::PANEL);
        canvas.draw_panel(&title, self.ui_size);
        canvas.draw_text("THE3 Quiz", center + TITLE_OFFSET);

        let panel = Rect::centered(Vec2::ZERO, QUESTION_SIZE).with_style(RectStyle::PANEL);
        canvas.draw_panel(&panel, self.ui_size);
        canvas.draw_text(&self.display_text(), center);

        if self.phase == EventPhase::Active {
            canvas.draw_panel(&self.true_button(), self.ui_size);
            canvas.draw_text("TRUE", self.true_button().center(self.ui_size));
            canvas.draw_panel(&self.false_button(), self.ui_size);
            canvas.draw_text("FALSE", self.false_button().center(self.ui_size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::event::TestSession;
    use crate::render::DrawList;
    use std::cell::RefCell;
    use std::rc::Rc;
    use winit::event::{ElementState, MouseButton};

    const UI: Vec2 = Vec2::new(1920.0, 1080.0);

    fn quiz(answer: bool) -> QuizEvent {
        QuizEvent::new(
            Question::new("Is this a test?", answer),
            &EventConfig::default(),
            UI,
            AudioHandle::silent(),
        )
    }

    fn click(session: &mut TestSession, at: Vec2) {
        session.input.end_frame();
        session.input.process_pointer_motion(at);
        session
            .input
            .process_mouse_button(MouseButton::Left, ElementState::Pressed);
    }

    #[test]
    fn test_start_blocks_movement() {
        let mut session = TestSession::new();
        let mut event = quiz(true);

        event.start(&mut session.ctx());

        assert_eq!(event.phase(), EventPhase::Active);
        assert!(!session.player.is_movement_enabled());
    }

    #[test]
    fn test_correct_answer_finishes_after_delay() {
        let mut session = TestSession::new();
        let mut event = quiz(true);
        event.start(&mut session.ctx());

        let true_center = event.true_button().center(UI);
        assert_eq!(true_center, Vec2::new(640.0, 864.0));
        click(&mut session, true_center);
        event.update(0.016, &mut session.ctx());

        assert_eq!(session.score.score(), 500);
        assert_eq!(event.was_correct(), Some(true));
        assert!(!event.is_finished(), "must not finish on the answer frame");

        session.input.end_frame();
        event.update(0.6, &mut session.ctx());
        assert!(!event.is_finished());
        assert!(!session.player.is_movement_enabled());

        event.update(0.6, &mut session.ctx());
        assert!(event.is_finished());
        assert!(session.player.is_movement_enabled());
        assert_eq!(session.score.score(), 500);
    }

    #[test]
    fn test_wrong_answer_costs_speed() {
        let mut session = TestSession::new();
        let mut event = quiz(true);
        event.start(&mut session.ctx());

        let false_center = event.false_button().center(UI);
        click(&mut session, false_center);
        event.update(0.016, &mut session.ctx());

        assert_eq!(event.was_correct(), Some(false));
        assert_eq!(session.score.score(), 0);
        assert!((session.player.speed() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_click_outside_buttons_is_ignored() {
        let mut session = TestSession::new();
        let mut event = quiz(false);
        event.start(&mut session.ctx());

        click(&mut session, Vec2::new(960.0, 540.0));
        event.update(0.016, &mut session.ctx());

        assert_eq!(event.choice(), None);
        assert_eq!(event.phase(), EventPhase::Active);
    }

    #[test]
    fn test_answer_applies_once() {
        let mut session = TestSession::new();
        let mut event = quiz(false);
        event.start(&mut session.ctx());

        event.choose(false, &mut session.ctx());
        event.choose(false, &mut session.ctx());
        event.choose(true, &mut session.ctx());

        assert_eq!(session.score.score(), 500);
        assert_eq!(event.choice(), Some(false));
    }

    #[test]
    fn test_end_before_answer_is_noop() {
        let mut session = TestSession::new();
        let mut event = quiz(true);
        event.start(&mut session.ctx());

        event.end(&mut session.ctx());

        assert_eq!(event.phase(), EventPhase::Active);
        assert!(!session.player.is_movement_enabled());
    }

    #[test]
    fn test_reentry_resumes_feedback_delay() {
        let mut session = TestSession::new();
        let mut event = quiz(true);
        event.start(&mut session.ctx());
        event.choose(true, &mut session.ctx());

        event.start(&mut session.ctx());
        assert_eq!(event.phase(), EventPhase::Resolved);

        event.update(1.5, &mut session.ctx());
        assert!(event.is_finished());

        event.start(&mut session.ctx());
        assert!(session.player.is_movement_enabled());
        assert_eq!(session.score.score(), 500);
    }

    #[test]
    fn test_draw_ui_shows_question_then_feedback() {
        let recorder = Rc::new(RefCell::new(RecordingAudio::default()));
        let mut session = TestSession::new();
        let mut event = QuizEvent::new(
            Question::new("Is this a test?", true),
            &EventConfig::default(),
            UI,
            AudioHandle::shared(recorder.clone()),
        );
        event.start(&mut session.ctx());

        let mut canvas = DrawList::new();
        event.draw_ui(&mut canvas);
        assert!(canvas.has_text("Is this a test?"));
        assert!(canvas.has_text("TRUE"));

        event.choose(true, &mut session.ctx());
        canvas.clear();
        event.draw_ui(&mut canvas);
        assert!(canvas.has_text("Correct: Score +500"));
        assert!(!canvas.has_text("FALSE"));

        let recorder = recorder.borrow();
        assert_eq!(recorder.count(SoundCue::Event(EventType::Negative)), 1);
        assert_eq!(recorder.count(SoundCue::Click), 1);
    }
}

//! Hidden encounters: a figure that reveals itself and secret passages

use glam::Vec2;

use crate::audio::{AudioHandle, SoundCue};
use crate::input::InputAction;
use crate::map::RoomId;
use crate::physics::Aabb;
use crate::render::{Canvas, names};
use crate::ui::{Rect, RectStyle};

use super::{EventContext, EventKind, EventPhase, EventRequest, EventType, RoomEvent};

const DIALOGUE_OFFSET: Vec2 = Vec2::new(0.0, 380.0);
const DIALOGUE_SIZE: Vec2 = Vec2::new(1200.0, 240.0);

/// A figure shown as a shadow until the player comes close
#[derive(Debug, Clone)]
pub struct Figure {
    bounds: Aabb,
    dialogue: String,
    revealed: bool,
}

impl Figure {
    /// Create an unrevealed figure
    #[must_use]
    pub fn new(bounds: Aabb, dialogue: impl Into<String>) -> Self {
        Self {
            bounds,
            dialogue: dialogue.into(),
            revealed: false,
        }
    }

    /// Whether the player has seen the figure
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Line shown once revealed
    #[must_use]
    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    /// Center the player has to approach
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// A prop that takes the player to another room when used
#[derive(Debug, Clone)]
pub struct Passage {
    bounds: Aabb,
    target: RoomId,
    uses: u32,
}

impl Passage {
    /// Create a passage leading to `target`
    #[must_use]
    pub fn new(bounds: Aabb, target: RoomId) -> Self {
        Self {
            bounds,
            target,
            uses: 0,
        }
    }

    /// Room the passage leads to
    #[must_use]
    pub fn target(&self) -> RoomId {
        self.target
    }

    /// How many times the passage was taken
    #[must_use]
    pub fn uses(&self) -> u32 {
        self.uses
    }

    /// Center the player has to stand near
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Secret content in a room.
///
/// Never finishes by itself: a revealed figure stays revealed and a
/// passage stays usable, however often the player leaves and returns.
#[derive(Debug)]
pub struct HiddenEncounter {
    figure: Option<Figure>,
    passage: Option<Passage>,
    reveal_radius: f32,
    interact_radius: f32,
    ui_size: Vec2,
    audio: AudioHandle,
    phase: EventPhase,
}

impl HiddenEncounter {
    /// Ghost position
    pub const FIGURE_BOUNDS: Aabb = Aabb::new(8.0, 3.0, 1.0, 2.0);
    /// Bookshelf position
    pub const PASSAGE_BOUNDS: Aabb = Aabb::new(2.0, 3.0, 2.0, 2.0);

    /// Create an empty encounter whose dialogue is laid out on a UI canvas of `ui_size`
    #[must_use]
    pub fn new(reveal_radius: f32, interact_radius: f32, ui_size: Vec2, audio: AudioHandle) -> Self {
        Self {
            figure: None,
            passage: None,
            reveal_radius,
            interact_radius,
            ui_size,
            audio,
            phase: EventPhase::Dormant,
        }
    }

    /// Add the ghost with its dialogue line
    #[must_use]
    pub fn with_figure(mut self, dialogue: impl Into<String>) -> Self {
        self.figure = Some(Figure::new(Self::FIGURE_BOUNDS, dialogue));
        self
    }

    /// Add a bookshelf leading to `target`
    #[must_use]
    pub fn with_passage(mut self, target: RoomId) -> Self {
        self.passage = Some(Passage::new(Self::PASSAGE_BOUNDS, target));
        self
    }

    /// The figure, if any
    #[must_use]
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// The passage, if any
    #[must_use]
    pub fn passage(&self) -> Option<&Passage> {
        self.passage.as_ref()
    }

    fn is_revealed(&self) -> bool {
        self.figure.as_ref().is_some_and(Figure::is_revealed)
    }
}

impl RoomEvent for HiddenEncounter {
    fn name(&self) -> &'static str {
        "Hidden"
    }

    fn event_type(&self) -> EventType {
        EventType::Hidden
    }

    fn kind(&self) -> EventKind {
        EventKind::Hidden
    }

    fn phase(&self) -> EventPhase {
        self.phase
    }

    fn start(&mut self, _ctx: &mut EventContext<'_>) {
        if self.phase == EventPhase::Finished {
            return;
        }
        if self.phase == EventPhase::Dormant {
            self.phase = EventPhase::Active;
        }
        self.audio.play(SoundCue::Event(EventType::Hidden));
        log::debug!("Hidden encounter started ({:?})", self.phase);
    }

    fn end(&mut self, _ctx: &mut EventContext<'_>) {
        if self.phase != EventPhase::Resolved {
            return;
        }
        self.phase = EventPhase::Finished;
        log::debug!("Hidden encounter finished");
    }

    fn update(&mut self, _delta: f32, ctx: &mut EventContext<'_>) -> EventRequest {
        if !matches!(self.phase, EventPhase::Active | EventPhase::Resolved) {
            return EventRequest::None;
        }

        if let Some(figure) = self.figure.as_mut()
            && !figure.revealed
            && ctx.player.distance_to(figure.center()) < self.reveal_radius
        {
            figure.revealed = true;
            self.phase = EventPhase::Resolved;
            log::debug!("Figure revealed");
        }

        if let Some(passage) = self.passage.as_mut()
            && ctx.input.is_action_just_pressed(InputAction::Interact)
            && ctx.player.distance_to(passage.center()) < self.interact_radius
        {
            passage.uses += 1;
            self.phase = EventPhase::Resolved;
            log::debug!("Passage to {} taken", passage.target);
            return EventRequest::GoToRoom(passage.target);
        }

        EventRequest::None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.phase == EventPhase::Finished {
            return;
        }
        if let Some(passage) = &self.passage {
            canvas.draw_texture(names::BOOKSHELF, passage.bounds);
        }
        if let Some(figure) = &self.figure {
            let texture = if figure.revealed {
                names::GHOST
            } else {
                names::GHOST_SHADOW
            };
            canvas.draw_texture(texture, figure.bounds);
        }
    }

    fn draw_ui(&self, canvas: &mut dyn Canvas) {
        if self.phase == EventPhase::Finished || !self.is_revealed() {
            return;
        }
        let Some(figure) = &self.figure else {
            return;
        };

        let panel = Rect::centered(DIALOGUE_OFFSET, DIALOGUE_SIZE).with_style(RectStyle::PANEL);
        canvas.draw_panel(&panel, self.ui_size);
        canvas.draw_text(&figure.dialogue, panel.center(self.ui_size));
    }
}

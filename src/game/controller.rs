//! Session orchestration
//!
//! [`GameController`] owns everything a running session needs and drives
//! it one frame at a time:
//!
//! 1. swap the signal queue
//! 2. toggle pause on the pause action; stop here while paused or over
//! 3. move the player
//! 4. walk through a touched door
//! 5. update the current room's event, following passage requests
//! 6. count the timer down and check for the loss
//!
//! # Example
//!
//! ```ignore
//! let mut game = GameController::campus(AudioHandle::silent())?;
//! loop {
//!     game.update(delta, &input);
//!     input.end_frame();
//!     game.draw_world(&mut canvas);
//!     game.draw_ui(&mut canvas);
//!     if let Some(outcome) = game.outcome() {
//!         log::info!("{:?}: final score {}", outcome.outcome, outcome.final_score);
//!         break;
//!     }
//! }
//! game.dispose();
//! ```

use thiserror::Error;

use crate::audio::AudioHandle;
use crate::core::{ConfigError, GameConfig, GameSignal, SignalQueue};
use crate::event::{EventContext, EventRequest, EventSystem};
use crate::input::{Input, InputAction};
use crate::map::{DoorController, MapError, MapLayout, RoomChange, RoomFlowManager, RoomId};
use crate::render::Canvas;

use glam::Vec2;

use super::{GameOutcome, OutcomeSnapshot, Player, ScoreManager, Timer};

const TIME_LABEL_POSITION: Vec2 = Vec2::new(960.0, 60.0);
const SCORE_LABEL_POSITION: Vec2 = Vec2::new(1700.0, 60.0);

// ============================================================================
// Errors
// ============================================================================

/// Errors creating or resetting a session
#[derive(Debug, Error)]
pub enum GameError {
    /// Rejected configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Map that cannot be built
    #[error("map error: {0}")]
    Map(#[from] MapError),
}

// ============================================================================
// Game Controller
// ============================================================================

/// A running game session.
///
/// Owns the player, countdown, score, doors, event system and room flow,
/// and lends them to events through an
/// [`EventContext`](crate::event::EventContext) each frame. Once an
/// outcome is set, `update` does nothing until [`reset`](Self::reset).
///
/// # Performance
///
/// - `update`: O(1) per frame; door checks touch 4 rectangles
/// - Room changes: O(1), no allocation
/// - `reset`: rebuilds the map, O(rooms + links)
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    layout: MapLayout,
    audio: AudioHandle,
    player: Player,
    timer: Timer,
    score: ScoreManager,
    doors: DoorController,
    events: EventSystem,
    flow: RoomFlowManager,
    signals: SignalQueue,
    outcome: Option<OutcomeSnapshot>,
    paused: bool,
    disposed: bool,
}

impl GameController {
    /// Build the map and enter the start room
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the config is invalid or the map cannot be built
    pub fn new(config: GameConfig, layout: MapLayout, audio: AudioHandle) -> Result<Self, GameError> {
        config.validate()?;
        let map = layout.build(&config, &audio)?;

        let mut game = Self {
            player: Player::new(&config.player, config.world.size()),
            timer: Timer::new(config.timer.time_limit),
            score: ScoreManager::new(),
            doors: DoorController::new(),
            events: EventSystem::new(),
            flow: RoomFlowManager::new(map, config.scoring.time_bonus_per_second),
            signals: SignalQueue::new(),
            outcome: None,
            paused: false,
            disposed: false,
            config,
            layout,
            audio,
        };
        game.enter_start();
        log::info!("Session ready, {:.0}s on the clock", game.timer.time_left());
        Ok(game)
    }

    /// Campus map with the default config
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the built-in map fails to build
    pub fn campus(audio: AudioHandle) -> Result<Self, GameError> {
        Self::new(GameConfig::default(), MapLayout::campus(), audio)
    }

    fn enter_start(&mut self) {
        let input = Input::new();
        let mut ctx = EventContext {
            player: &mut self.player,
            timer: &mut self.timer,
            score: &mut self.score,
            input: &input,
            signals: &mut self.signals,
        };
        if let RoomChange::Escaped(_) =
            self.flow
                .enter_start(&mut self.doors, &mut self.events, &mut ctx)
        {
            self.outcome = Some(self.capture(GameOutcome::Won));
        }
    }

    /// Advance the session by `delta` seconds.
    ///
    /// Signals pushed during this call become readable through
    /// [`signals`](Self::signals) after the next call. A finished or
    /// disposed session only swaps its signals; a paused one also watches
    /// for the pause action.
    pub fn update(&mut self, delta: f32, input: &Input) {
        self.signals.swap();

        if self.disposed || self.outcome.is_some() {
            return;
        }
        if input.is_action_just_pressed(InputAction::Pause) {
            self.set_paused(!self.paused);
        }
        if self.paused {
            return;
        }

        self.player.update(delta, input);
        let door = self.doors.update(&self.player);

        let mut ctx = EventContext {
            player: &mut self.player,
            timer: &mut self.timer,
            score: &mut self.score,
            input,
            signals: &mut self.signals,
        };

        if let Some(direction) = door {
            let change =
                self.flow
                    .change_room(direction, &mut self.doors, &mut self.events, &mut ctx);
            if let RoomChange::Escaped(_) = change {
                self.outcome = Some(self.capture(GameOutcome::Won));
                return;
            }
        }

        let request = self
            .events
            .update(self.flow.graph_mut(), delta, &mut ctx);
        if let EventRequest::GoToRoom(target) = request {
            let change = self
                .flow
                .go_to_room(target, &mut self.doors, &mut self.events, &mut ctx);
            if let RoomChange::Escaped(_) = change {
                self.outcome = Some(self.capture(GameOutcome::Won));
                return;
            }
        }

        self.timer.update(delta);
        if self.timer.is_finished() {
            let snapshot = self.capture(GameOutcome::Lost);
            log::info!("Out of time with score {}", snapshot.score);
            self.signals.push(GameSignal::Lost(snapshot));
            self.outcome = Some(snapshot);
        }
    }

    fn capture(&self, outcome: GameOutcome) -> OutcomeSnapshot {
        OutcomeSnapshot::capture(
            outcome,
            &self.timer,
            &self.score,
            self.config.scoring.time_bonus_per_second,
        )
    }

    /// Draw the room, doors, player and event sprites (world space)
    pub fn draw_world(&self, canvas: &mut dyn Canvas) {
        self.flow.draw_current_room(canvas, self.config.world.size());
        self.doors.draw(canvas);
        self.player.draw(canvas);
        self.events.draw_world(self.flow.graph(), canvas);
    }

    /// Draw event overlays and the HUD (UI space)
    pub fn draw_ui(&self, canvas: &mut dyn Canvas) {
        self.events.draw_ui(self.flow.graph(), canvas);
        canvas.draw_text(
            &format!("Time: {}s", self.timer.time_left_secs()),
            TIME_LABEL_POSITION,
        );
        canvas.draw_text(
            &format!("Score: {}", self.score.score()),
            SCORE_LABEL_POSITION,
        );
        if self.paused {
            canvas.draw_text("Paused", self.config.world.ui_size() * 0.5);
        }
    }

    /// Start over: fresh map, player, timer and score
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Map`] if the map cannot be rebuilt
    pub fn reset(&mut self) -> Result<(), GameError> {
        // A failed rebuild leaves the running session untouched
        let map = self.layout.build(&self.config, &self.audio)?;
        self.flow.dispose();
        self.doors.dispose();

        self.flow = RoomFlowManager::new(map, self.config.scoring.time_bonus_per_second);
        self.doors = DoorController::new();
        self.events = EventSystem::new();
        self.player = Player::new(&self.config.player, self.config.world.size());
        self.timer.reset();
        self.score.reset();
        self.signals.clear();
        self.outcome = None;
        self.paused = false;
        self.disposed = false;

        self.enter_start();
        log::info!("Session reset");
        Ok(())
    }

    /// Release room and door textures; safe to call more than once
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.flow.dispose();
        self.doors.dispose();
        self.disposed = true;
        log::info!("Session disposed");
    }

    /// Pause or resume
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    /// Whether the session is paused
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// How the session ended, once it has
    #[must_use]
    pub fn outcome(&self) -> Option<&OutcomeSnapshot> {
        self.outcome.as_ref()
    }

    /// Whether the session has ended
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether [`dispose`](Self::dispose) ran
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The current room
    #[must_use]
    pub fn current_room(&self) -> RoomId {
        self.flow.current_room()
    }

    /// Room flow and map
    #[must_use]
    pub fn flow(&self) -> &RoomFlowManager {
        &self.flow
    }

    /// The four doors
    #[must_use]
    pub fn doors(&self) -> &DoorController {
        &self.doors
    }

    /// The player
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The player, mutably
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The countdown
    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The score
    #[must_use]
    pub fn score(&self) -> &ScoreManager {
        &self.score
    }

    /// Signals: readable ones are from the previous frame, pending ones from this frame
    #[must_use]
    pub fn signals(&self) -> &SignalQueue {
        &self.signals
    }

    /// Session config
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================

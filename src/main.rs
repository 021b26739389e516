//! Headless demo: an autopilot walks the campus to the exit
//!
//! Usage: `campus-escape [config.ron] [sounds_dir]`

use std::path::Path;

use campus_escape::audio::AudioManager;
use campus_escape::game::GameError;
use campus_escape::map::Door;
use campus_escape::prelude::*;
use winit::event::{ElementState, MouseButton};

const FRAME: f32 = 1.0 / 60.0;

/// Doors to take from the start room to the exit
const ROUTE: [Direction; 6] = [
    Direction::East,
    Direction::East,
    Direction::South,
    Direction::East,
    Direction::East,
    Direction::East,
];

/// Scripted player: walks to the next door on the route and answers quizzes
struct Autopilot {
    leg: usize,
    clicked: bool,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            leg: 0,
            clicked: false,
        }
    }

    fn steer(&mut self, game: &GameController, input: &mut Input) {
        if self.clicked {
            input.process_mouse_button(MouseButton::Left, ElementState::Released);
            self.clicked = false;
        }

        if !game.player().is_movement_enabled() {
            release_all(input);
            self.answer_quiz(game, input);
            return;
        }

        let Some(direction) = ROUTE.get(self.leg) else {
            release_all(input);
            return;
        };
        let target = Door::geometry(*direction).center();
        let offset = target - game.player().center();

        hold(input, KeyCode::ArrowRight, offset.x > 0.1);
        hold(input, KeyCode::ArrowLeft, offset.x < -0.1);
        hold(input, KeyCode::ArrowUp, offset.y > 0.1);
        hold(input, KeyCode::ArrowDown, offset.y < -0.1);
    }

    fn answer_quiz(&mut self, game: &GameController, input: &mut Input) {
        let graph = game.flow().graph();
        let Some(Event::Quiz(quiz)) = graph.room(game.current_room()).event() else {
            return;
        };
        if quiz.choice().is_some() {
            return;
        }

        let button = if quiz.question().answer {
            quiz.true_button()
        } else {
            quiz.false_button()
        };
        input.process_pointer_motion(button.center(game.config().world.ui_size()));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        self.clicked = true;
    }

    fn on_signal(&mut self, signal: &GameSignal) {
        if let GameSignal::RoomEntered {
            direction: Some(_), ..
        } = signal
        {
            self.leg += 1;
        }
    }
}

fn hold(input: &mut Input, key: KeyCode, pressed: bool) {
    let state = if pressed {
        ElementState::Pressed
    } else {
        ElementState::Released
    };
    if input.is_key_pressed(key) != pressed {
        input.process_keyboard(key, state);
    }
}

fn release_all(input: &mut Input) {
    for key in [
        KeyCode::ArrowRight,
        KeyCode::ArrowLeft,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
    ] {
        hold(input, key, false);
    }
}

/// Audio from `<dir>/<cue>.ogg` files, or silence if there is no device
fn open_audio(dir: &Path) -> AudioHandle {
    let mut manager = match AudioManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            log::warn!("Audio disabled: {e}");
            return AudioHandle::silent();
        }
    };
    let cues = [
        SoundCue::Event(EventType::Positive),
        SoundCue::Event(EventType::Negative),
        SoundCue::Event(EventType::Hidden),
        SoundCue::Click,
    ];
    for cue in cues {
        let path = dir.join(format!("{}.ogg", cue.asset_name()));
        if let Err(e) = manager.load_cue(cue, &path) {
            log::warn!("Skipping {cue:?}: {e}");
        }
    }
    AudioHandle::new(manager)
}

fn run() -> Result<(), GameError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_ron(path)?,
        None => GameConfig::default(),
    };
    let audio = match args.next() {
        Some(dir) => open_audio(Path::new(&dir)),
        None => AudioHandle::silent(),
    };
    let time_limit = config.timer.time_limit;

    let mut game = GameController::new(config, MapLayout::campus(), audio)?;
    let mut input = Input::new();
    let mut pilot = Autopilot::new();

    let max_frames = (time_limit / FRAME) as usize + 60;
    for _ in 0..max_frames {
        pilot.steer(&game, &mut input);
        game.update(FRAME, &input);
        input.end_frame();

        for signal in game.signals().pending() {
            log::debug!("{signal:?}");
            if let GameSignal::EventStarted { kind, .. } = signal {
                log::info!("Event: {kind:?}");
            }
            pilot.on_signal(signal);
        }

        if game.is_over() {
            break;
        }
    }

    match game.outcome() {
        Some(outcome) => match serde_json::to_string_pretty(outcome) {
            Ok(json) => log::info!("Outcome:\n{json}"),
            Err(e) => log::warn!("Failed to serialize outcome: {e}"),
        },
        None => log::warn!("Autopilot stopped without an outcome"),
    }

    let mut canvas = DrawList::new();
    game.draw_world(&mut canvas);
    game.draw_ui(&mut canvas);
    log::debug!("Last frame: {} draw calls", canvas.len());

    game.dispose();
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Game error: {e}");
        eprintln!("Game error: {e}");
        std::process::exit(1);
    }
}

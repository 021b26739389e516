//! Collectable pickups

use glam::Vec2;

use crate::audio::{AudioHandle, SoundCue};
use crate::core::GameSignal;
use crate::physics::Aabb;
use crate::render::{Canvas, names};

use super::{EventContext, EventKind, EventPhase, EventRequest, EventType, RoomEvent};

/// What collecting a pickup does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickupEffect {
    /// Add to the player's speed, permanently
    SpeedBoost(f32),
    /// Freeze the countdown for this many seconds
    FreezeTimer(f32),
}

/// A positive item the player collects by walking into it.
///
/// The effect is applied once; the `used` latch keeps it from being
/// applied again while the player stands on the spot.
#[derive(Debug)]
pub struct Pickup {
    effect: PickupEffect,
    bounds: Aabb,
    radius: f32,
    audio: AudioHandle,
    used: bool,
    phase: EventPhase,
}

impl Pickup {
    /// Sausage roll in the middle of the room
    const BOOST_BOUNDS: Aabb = Aabb::new(6.5, 3.5, 3.0, 2.0);
    /// Snowflake just above the middle of the room
    const FREEZE_BOUNDS: Aabb = Aabb::new(7.5, 5.5, 2.0, 1.0);

    /// Create a pickup with explicit geometry
    #[must_use]
    pub fn new(effect: PickupEffect, bounds: Aabb, radius: f32, audio: AudioHandle) -> Self {
        Self {
            effect,
            bounds,
            radius,
            audio,
            used: false,
            phase: EventPhase::Dormant,
        }
    }

    /// Speed boost pickup
    #[must_use]
    pub fn speed_boost(amount: f32, radius: f32, audio: AudioHandle) -> Self {
        Self::new(
            PickupEffect::SpeedBoost(amount),
            Self::BOOST_BOUNDS,
            radius,
            audio,
        )
    }

    /// Timer freeze pickup
    #[must_use]
    pub fn freeze(duration: f32, radius: f32, audio: AudioHandle) -> Self {
        Self::new(
            PickupEffect::FreezeTimer(duration),
            Self::FREEZE_BOUNDS,
            radius,
            audio,
        )
    }

    /// The pickup's effect
    #[must_use]
    pub fn effect(&self) -> PickupEffect {
        self.effect
    }

    /// Center the player has to get close to
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    /// Whether the effect has been applied
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.used
    }

    fn apply(&mut self, ctx: &mut EventContext<'_>) {
        self.used = true;
        match self.effect {
            PickupEffect::SpeedBoost(amount) => {
                ctx.player.increase_speed(amount);
                log::debug!("Speed boost collected, speed now {}", ctx.player.speed());
                ctx.signals.push(GameSignal::SpeedChanged {
                    speed: ctx.player.speed(),
                });
            }
            PickupEffect::FreezeTimer(duration) => {
                ctx.timer.freeze(duration);
                log::debug!("Timer frozen for {duration}s");
                ctx.signals.push(GameSignal::TimerFrozen { duration });
            }
        }
        self.audio.play(SoundCue::Event(EventType::Positive));
    }
}

impl RoomEvent for Pickup {
    fn name(&self) -> &'static str {
        match self.effect {
            PickupEffect::SpeedBoost(_) => "SpeedBoost",
            PickupEffect::FreezeTimer(_) => "TimeFreeze",
        }
    }

    fn event_type(&self) -> EventType {
        EventType::Positive
    }

    fn kind(&self) -> EventKind {
        match self.effect {
            PickupEffect::SpeedBoost(_) => EventKind::SpeedBoost,
            PickupEffect::FreezeTimer(_) => EventKind::TimeFreeze,
        }
    }

    fn phase(&self) -> EventPhase {
        self.phase
    }

    fn start(&mut self, _ctx: &mut EventContext<'_>) {
        if self.phase == EventPhase::Finished {
            return;
        }
        log::debug!("{} started", self.name());
        self.phase = EventPhase::Active;
    }

    fn end(&mut self, _ctx: &mut EventContext<'_>) {
        if self.phase == EventPhase::Finished || !self.used {
            return;
        }
        log::debug!("{} finished", self.name());
        self.phase = EventPhase::Finished;
    }

    fn update(&mut self, _delta: f32, ctx: &mut EventContext<'_>) -> EventRequest {
        if self.phase != EventPhase::Active || self.used {
            return EventRequest::None;
        }

        if ctx.player.distance_to(self.center()) < self.radius {
            self.apply(ctx);
            self.phase = EventPhase::Resolved;
            self.end(ctx);
        }
        EventRequest::None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.used {
            return;
        }
        let texture = match self.effect {
            PickupEffect::SpeedBoost(_) => names::SAUSAGE_ROLL,
            PickupEffect::FreezeTimer(_) => names::FREEZE,
        };
        canvas.draw_texture(texture, self.bounds);
    }
}

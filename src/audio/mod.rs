//! Audio collaborator
//!
//! Events never reach for a global audio player. Each one is handed an
//! [`AudioHandle`] when it is built and asks it to play a [`SoundCue`].
//! The handle forwards to whatever [`AudioSink`] the host installed: the
//! rodio-backed [`AudioManager`], [`NullAudio`] for headless runs, or
//! [`RecordingAudio`] in tests.

mod device;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::event::EventType;

pub use device::{AudioError, AudioManager};

/// Something the game wants to be heard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Sting for an event of the given type
    Event(EventType),
    /// UI click
    Click,
}

impl SoundCue {
    /// Name the sound is registered under in an [`AudioManager`]
    #[must_use]
    pub const fn asset_name(&self) -> &'static str {
        match self {
            Self::Event(EventType::Positive) => "event_positive",
            Self::Event(EventType::Negative) => "event_negative",
            Self::Event(EventType::Hidden) => "event_hidden",
            Self::Event(EventType::None) => "event_none",
            Self::Click => "click",
        }
    }
}

/// Receives sound requests
pub trait AudioSink {
    /// Play a cue
    fn play_cue(&mut self, cue: SoundCue);
}

/// Shared, single-threaded handle to the installed audio sink
#[derive(Clone)]
pub struct AudioHandle(Rc<RefCell<dyn AudioSink>>);

impl AudioHandle {
    /// Wrap a sink
    pub fn new<S: AudioSink + 'static>(sink: S) -> Self {
        Self(Rc::new(RefCell::new(sink)))
    }

    /// Wrap a sink the caller keeps a reference to
    pub fn shared<S: AudioSink + 'static>(sink: Rc<RefCell<S>>) -> Self {
        Self(sink)
    }

    /// Handle that discards every cue
    pub fn silent() -> Self {
        Self::new(NullAudio)
    }

    /// Play a cue through the sink
    pub fn play(&self, cue: SoundCue) {
        match self.0.try_borrow_mut() {
            Ok(mut sink) => sink.play_cue(cue),
            Err(_) => log::warn!("Audio sink busy, dropping {cue:?}"),
        }
    }
}

impl fmt::Debug for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioHandle").finish_non_exhaustive()
    }
}

/// Sink that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_cue(&mut self, cue: SoundCue) {
        log::trace!("Silent audio: {cue:?}");
    }
}

/// Sink that remembers every cue it was asked to play
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    /// Cues in play order
    pub played: Vec<SoundCue>,
}

impl RecordingAudio {
    /// Number of times `cue` was played
    #[must_use]
    pub fn count(&self, cue: SoundCue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play_cue(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_forwards_to_shared_sink() {
        let recorder = Rc::new(RefCell::new(RecordingAudio::default()));
        let handle = AudioHandle::shared(recorder.clone());
        let copy = handle.clone();

        handle.play(SoundCue::Event(EventType::Negative));
        copy.play(SoundCue::Event(EventType::Negative));
        copy.play(SoundCue::Click);

        let recorder = recorder.borrow();
        assert_eq!(recorder.played.len(), 3);
        assert_eq!(recorder.count(SoundCue::Event(EventType::Negative)), 2);
    }

    #[test]
    fn test_cue_asset_names_are_distinct() {
        let cues = [
            SoundCue::Event(EventType::Positive),
            SoundCue::Event(EventType::Negative),
            SoundCue::Event(EventType::Hidden),
            SoundCue::Click,
        ];
        let mut names: Vec<_> = cues.iter().map(SoundCue::asset_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cues.len());
    }
}

//! Device-backed audio sink built on rodio

use std::io::{self, Cursor};
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::{AudioSink, SoundCue};

/// Audio device and decoding errors
#[derive(Debug, Error)]
pub enum AudioError {
    /// Sound file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bytes are not a supported audio format
    #[error("decode error: {0}")]
    Decode(String),

    /// No output device could be opened
    #[error("no audio output device available")]
    NoDevice,
}

/// Encoded clip for one cue, decoded afresh for every play
struct CueClip {
    sink: Sink,
    bytes: Arc<[u8]>,
}

impl CueClip {
    fn new(mixer: &Mixer, bytes: Arc<[u8]>) -> Result<Self, AudioError> {
        // Reject bad data at load time rather than on first play
        decode(&bytes)?;
        let sink = Sink::connect_new(mixer);
        sink.pause();
        Ok(Self { sink, bytes })
    }

    /// Start the clip unless it is still sounding
    fn trigger(&self) -> Result<(), AudioError> {
        if self.sink.empty() {
            self.sink.append(decode(&self.bytes)?);
        }
        self.sink.play();
        Ok(())
    }
}

fn decode(bytes: &Arc<[u8]>) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
    Decoder::new(Cursor::new(Arc::clone(bytes))).map_err(|e| AudioError::Decode(e.to_string()))
}

/// Plays cues through the default output device.
///
/// Cues without a loaded clip are skipped with a debug log.
pub struct AudioManager {
    /// Kept alive for as long as sounds should play
    _stream: OutputStream,
    mixer: Mixer,
    clips: FxHashMap<SoundCue, CueClip>,
    master_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Open the default output device
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::NoDevice`] if no output device can be opened
    pub fn new() -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::from_default_device()
            .and_then(|builder| builder.open_stream())
            .map_err(|e| {
                log::debug!("Opening audio device failed: {e}");
                AudioError::NoDevice
            })?;
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
            clips: FxHashMap::default(),
            master_volume: 1.0,
            muted: false,
        })
    }

    /// Load the sound file played for `cue`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn load_cue(&mut self, cue: SoundCue, path: impl AsRef<Path>) -> Result<(), AudioError> {
        let bytes = std::fs::read(path.as_ref())?;
        self.load_cue_bytes(cue, Arc::from(bytes))?;
        log::debug!("Loaded {cue:?} from {:?}", path.as_ref());
        Ok(())
    }

    /// Use encoded `bytes` as the sound for `cue`
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Decode`] if the bytes are not a supported format
    pub fn load_cue_bytes(&mut self, cue: SoundCue, bytes: Arc<[u8]>) -> Result<(), AudioError> {
        let clip = CueClip::new(&self.mixer, bytes)?;
        clip.sink.set_volume(self.effective_volume());
        self.clips.insert(cue, clip);
        Ok(())
    }

    /// Whether a sound is loaded for `cue`
    #[must_use]
    pub fn has_cue(&self, cue: SoundCue) -> bool {
        self.clips.contains_key(&cue)
    }

    /// Set the master volume (0.0 = silent, 1.0 = normal)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.max(0.0);
        self.apply_volume();
    }

    /// Master volume
    #[must_use]
    pub const fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Toggle mute
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.apply_volume();
    }

    /// Whether audio is muted
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Cut every sounding clip
    pub fn stop_all(&mut self) {
        for clip in self.clips.values() {
            clip.sink.stop();
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    fn apply_volume(&self) {
        let volume = self.effective_volume();
        for clip in self.clips.values() {
            clip.sink.set_volume(volume);
        }
    }
}

impl AudioSink for AudioManager {
    fn play_cue(&mut self, cue: SoundCue) {
        let Some(clip) = self.clips.get(&cue) else {
            log::debug!("No sound loaded for {cue:?}");
            return;
        };
        if let Err(e) = clip.trigger() {
            log::warn!("Failed to play {cue:?}: {e}");
        }
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("cues", &self.clips.len())
            .field("master_volume", &self.master_volume)
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}

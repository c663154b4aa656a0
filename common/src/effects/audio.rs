use std::collections::HashMap;
use std::f32::consts::PI;

use crate::log;

pub const SAMPLE_RATE: u32 = 22_050;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CueKind {
    Collect,
    Miss,
    Level,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub volume: f32,
}

impl CueKind {
    pub fn tone(&self) -> ToneSpec {
        match self {
            CueKind::Collect => ToneSpec { frequency_hz: 880.0, duration_ms: 120, volume: 0.45 },
            CueKind::Miss => ToneSpec { frequency_hz: 220.0, duration_ms: 200, volume: 0.5 },
            CueKind::Level => ToneSpec { frequency_hz: 660.0, duration_ms: 350, volume: 0.4 },
            CueKind::GameOver => ToneSpec { frequency_hz: 110.0, duration_ms: 600, volume: 0.55 },
        }
    }
}

/// Renders a tone as mono 16-bit PCM: a sine/square blend with a linear
/// attack and release so the edges do not click.
pub fn synthesize(spec: ToneSpec, sample_rate: u32) -> Vec<i16> {
    let total = (spec.duration_ms as u64 * sample_rate as u64 / 1000) as usize;
    let attack = (total / 50).max(1);
    let release = (total / 8).max(1);

    (0..total)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let sine = (2.0 * PI * spec.frequency_hz * t).sin();
            let square = if sine >= 0.0 { 1.0 } else { -1.0 };
            let envelope = if i < attack {
                i as f32 / attack as f32
            } else if i >= total - release {
                (total - i) as f32 / release as f32
            } else {
                1.0
            };
            let sample = ((0.7 * sine + 0.3 * square) * spec.volume * envelope).clamp(-1.0, 1.0);
            (sample * i16::MAX as f32) as i16
        })
        .collect()
}

/// Platform playback. Hosts without one simply do not install a sink.
pub trait AudioSink: Send {
    fn play(&mut self, samples: &[i16], sample_rate: u32) -> Result<(), String>;

    fn stop_all(&mut self) {}
}

pub trait AudioCueEmitter: Send {
    /// Fire-and-forget; never fails.
    fn emit(&mut self, kind: CueKind);

    fn set_muted(&mut self, muted: bool);

    fn is_muted(&self) -> bool;

    /// Cuts any in-flight playback.
    fn silence(&mut self) {}
}

pub struct ToneEmitter {
    sink: Option<Box<dyn AudioSink>>,
    muted: bool,
    buffers: HashMap<CueKind, Vec<i16>>,
}

impl ToneEmitter {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink: Some(sink),
            muted: false,
            buffers: HashMap::new(),
        }
    }

    /// An emitter with no backend: every cue is a no-op.
    pub fn silent() -> Self {
        Self {
            sink: None,
            muted: false,
            buffers: HashMap::new(),
        }
    }

    pub fn has_backend(&self) -> bool {
        self.sink.is_some()
    }
}

impl AudioCueEmitter for ToneEmitter {
    fn emit(&mut self, kind: CueKind) {
        if self.muted {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let samples = self
            .buffers
            .entry(kind)
            .or_insert_with(|| synthesize(kind.tone(), SAMPLE_RATE));
        if let Err(e) = sink.play(samples, SAMPLE_RATE) {
            log!("Audio backend failed ({}); continuing without sound", e);
            self.sink = None;
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.silence();
        }
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn silence(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.stop_all();
        }
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingEmitter;

#[cfg(test)]
mod recording {
    use std::sync::{Arc, Mutex};

    use super::{AudioCueEmitter, CueKind};

    /// Keeps every cue that passed the mute gate.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingEmitter {
        pub cues: Arc<Mutex<Vec<CueKind>>>,
        muted: bool,
        pub silenced: Arc<Mutex<u32>>,
    }

    impl RecordingEmitter {
        pub fn take(&self) -> Vec<CueKind> {
            std::mem::take(&mut *self.cues.lock().unwrap())
        }
    }

    impl AudioCueEmitter for RecordingEmitter {
        fn emit(&mut self, kind: CueKind) {
            if !self.muted {
                self.cues.lock().unwrap().push(kind);
            }
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn is_muted(&self) -> bool {
            self.muted
        }

        fn silence(&mut self) {
            *self.silenced.lock().unwrap() += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct CountingSink {
        played: Arc<Mutex<Vec<usize>>>,
    }

    impl AudioSink for CountingSink {
        fn play(&mut self, samples: &[i16], _sample_rate: u32) -> Result<(), String> {
            self.played.lock().unwrap().push(samples.len());
            Ok(())
        }
    }

    struct BrokenSink {
        attempts: Arc<Mutex<u32>>,
    }

    impl AudioSink for BrokenSink {
        fn play(&mut self, _samples: &[i16], _sample_rate: u32) -> Result<(), String> {
            *self.attempts.lock().unwrap() += 1;
            Err("device unplugged".to_string())
        }
    }

    #[test]
    fn test_each_cue_has_a_distinct_tone() {
        let kinds = [CueKind::Collect, CueKind::Miss, CueKind::Level, CueKind::GameOver];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.tone().frequency_hz, b.tone().frequency_hz);
            }
        }
    }

    #[test]
    fn test_synthesize_length_and_envelope() {
        let spec = CueKind::Collect.tone();
        let samples = synthesize(spec, SAMPLE_RATE);
        assert_eq!(samples.len(), (SAMPLE_RATE as usize * 120) / 1000);
        assert_eq!(samples[0], 0);
        let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak > 0);
        assert!((peak as f32) <= i16::MAX as f32 * spec.volume + 1.0);
    }

    #[test]
    fn test_silent_emitter_is_a_no_op() {
        let mut emitter = ToneEmitter::silent();
        assert!(!emitter.has_backend());
        emitter.emit(CueKind::GameOver);
        emitter.silence();
    }

    #[test]
    fn test_mute_gate_blocks_playback() {
        let played = Arc::new(Mutex::new(Vec::new()));
        let mut emitter = ToneEmitter::new(Box::new(CountingSink { played: played.clone() }));
        emitter.emit(CueKind::Collect);
        emitter.set_muted(true);
        emitter.emit(CueKind::Miss);
        emitter.set_muted(false);
        emitter.emit(CueKind::Level);
        assert_eq!(played.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_failing_backend_is_dropped_after_first_error() {
        let attempts = Arc::new(Mutex::new(0));
        let mut emitter = ToneEmitter::new(Box::new(BrokenSink { attempts: attempts.clone() }));
        emitter.emit(CueKind::Collect);
        emitter.emit(CueKind::Collect);
        assert_eq!(*attempts.lock().unwrap(), 1);
        assert!(!emitter.has_backend());
    }
}

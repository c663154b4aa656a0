mod audio;
mod particles;
mod toast;

pub use audio::{AudioCueEmitter, AudioSink, CueKind, SAMPLE_RATE, ToneEmitter, ToneSpec, synthesize};
pub use particles::{Particle, ParticleSystem, PARTICLE_FRAME_MS};
pub use toast::{Toast, ToastBoard, DEFAULT_TOAST_DURATION_MS};

#[cfg(test)]
pub(crate) use audio::RecordingEmitter;

use common::effects::{AudioSink, ToneEmitter};
use common::log;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use tokio::sync::{mpsc, oneshot};

enum Playback {
    Play { samples: Vec<i16>, sample_rate: u32 },
    StopAll,
}

/// Feeds cue buffers to a rodio output owned by a dedicated thread.
/// The output stream cannot leave the thread that opened it.
pub struct RodioSink {
    tx: mpsc::UnboundedSender<Playback>,
}

impl RodioSink {
    pub fn open() -> Result<Self, String> {
        let (tx, rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = oneshot::channel();

        std::thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || playback_loop(rx, ready_tx))
            .map_err(|e| e.to_string())?;

        match ready_rx.blocking_recv() {
            Ok(Ok(())) => Ok(Self { tx }),
            Ok(Err(e)) => Err(e),
            Err(_) => Err("audio thread exited before opening the output".to_string()),
        }
    }
}

impl AudioSink for RodioSink {
    fn play(&mut self, samples: &[i16], sample_rate: u32) -> Result<(), String> {
        self.tx
            .send(Playback::Play {
                samples: samples.to_vec(),
                sample_rate,
            })
            .map_err(|_| "audio thread is gone".to_string())
    }

    fn stop_all(&mut self) {
        let _ = self.tx.send(Playback::StopAll);
    }
}

fn playback_loop(
    mut rx: mpsc::UnboundedReceiver<Playback>,
    ready_tx: oneshot::Sender<Result<(), String>>,
) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(output) => output,
        Err(e) => {
            let _ = ready_tx.send(Err(e.to_string()));
            return;
        }
    };
    let _ = ready_tx.send(Ok(()));

    let mut playing: Vec<Sink> = Vec::new();
    while let Some(command) = rx.blocking_recv() {
        playing.retain(|sink| !sink.empty());
        match command {
            Playback::Play { samples, sample_rate } => match Sink::try_new(&handle) {
                Ok(sink) => {
                    sink.append(SamplesBuffer::new(1, sample_rate, samples));
                    playing.push(sink);
                }
                Err(e) => log!("Failed to open audio sink: {}", e),
            },
            Playback::StopAll => {
                for sink in playing.drain(..) {
                    sink.stop();
                }
            }
        }
    }
}

/// Cue emitter for the window build; silent when no output device opens.
pub fn open_audio() -> ToneEmitter {
    match RodioSink::open() {
        Ok(sink) => ToneEmitter::new(Box::new(sink)),
        Err(e) => {
            log!("No audio output ({}); playing without sound", e);
            ToneEmitter::silent()
        }
    }
}

use std::sync::{Arc, Mutex};

use common::GameSnapshot;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

pub const EVENT_FEED_SIZE: usize = 32;

/// What the session thread publishes and the UI thread reads.
#[derive(Clone)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    event_feed: Arc<Mutex<AllocRingBuffer<String>>>,
    session_closed: Arc<Mutex<bool>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            event_feed: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_FEED_SIZE))),
            session_closed: Arc::new(Mutex::new(false)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn push_event(&self, line: String) {
        self.event_feed.lock().unwrap().enqueue(line);
    }

    /// Newest first.
    pub fn get_event_feed(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.event_feed.lock().unwrap().iter().cloned().collect();
        lines.reverse();
        lines
    }

    pub fn set_session_closed(&self) {
        *self.session_closed.lock().unwrap() = true;
        self.request_repaint();
    }

    pub fn is_session_closed(&self) -> bool {
        *self.session_closed.lock().unwrap()
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

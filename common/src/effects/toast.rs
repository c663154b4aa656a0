use crate::game::Point;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 900;

/// Floating "+1" feedback, positioned in pixels at the cell centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub created_at_ms: u64,
    pub expires_at_ms: u64,
}

impl Toast {
    /// 0 when fresh, 1 when about to disappear.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let span = self.expires_at_ms.saturating_sub(self.created_at_ms).max(1);
        (now_ms.saturating_sub(self.created_at_ms) as f32 / span as f32).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastBoard {
    toasts: Vec<Toast>,
    next_id: u64,
    duration_ms: u64,
}

impl ToastBoard {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            duration_ms,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, at: Point, label: impl Into<String>, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let (x, y) = at.center_pixel();
        self.toasts.push(Toast {
            id,
            x,
            y,
            label: label.into(),
            created_at_ms: now_ms,
            expires_at_ms: now_ms + self.duration_ms,
        });
        id
    }

    pub fn prune(&mut self, now_ms: u64) {
        self.toasts.retain(|t| t.expires_at_ms > now_ms);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
        self.next_id = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_duration() {
        let mut board = ToastBoard::new(900);
        board.push(Point::new(2, 3), "+1", 1000);
        board.prune(1899);
        assert_eq!(board.toasts().len(), 1);
        board.prune(1900);
        assert!(board.toasts().is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_reset_on_clear() {
        let mut board = ToastBoard::new(900);
        let a = board.push(Point::new(0, 0), "+1", 0);
        let b = board.push(Point::new(1, 0), "+1", 0);
        assert_ne!(a, b);
        board.clear();
        assert_eq!(board.push(Point::new(0, 0), "+1", 0), a);
    }

    #[test]
    fn test_toast_is_centered_on_cell() {
        let mut board = ToastBoard::new(900);
        board.push(Point::new(1, 1), "+1", 0);
        let toast = &board.toasts()[0];
        assert_eq!((toast.x, toast.y), Point::new(1, 1).center_pixel());
        assert_eq!(toast.progress(450), 0.5);
    }
}

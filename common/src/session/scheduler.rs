#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Movement,
    Spawn,
    Countdown,
    Particles,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Movement,
        TimerKind::Spawn,
        TimerKind::Countdown,
        TimerKind::Particles,
    ];

    fn index(&self) -> usize {
        match self {
            TimerKind::Movement => 0,
            TimerKind::Spawn => 1,
            TimerKind::Countdown => 2,
            TimerKind::Particles => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    period_ms: u64,
    next_due_ms: u64,
}

/// Per-subsystem due counters driven by one external millisecond clock.
/// A kind has at most one slot, so re-arming always replaces the old timer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scheduler {
    slots: [Option<Slot>; 4],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, kind: TimerKind, period_ms: u64, now_ms: u64) {
        let period_ms = period_ms.max(1);
        self.slots[kind.index()] = Some(Slot {
            period_ms,
            next_due_ms: now_ms + period_ms,
        });
    }

    /// Arms only if not already running with the same period.
    pub fn ensure(&mut self, kind: TimerKind, period_ms: u64, now_ms: u64) {
        if self.period(kind) != Some(period_ms.max(1)) {
            self.arm(kind, period_ms, now_ms);
        }
    }

    pub fn disarm(&mut self, kind: TimerKind) {
        self.slots[kind.index()] = None;
    }

    pub fn disarm_all(&mut self) {
        self.slots = [None; 4];
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub fn period(&self, kind: TimerKind) -> Option<u64> {
        self.slots[kind.index()].map(|slot| slot.period_ms)
    }

    pub fn next_due(&self, kind: TimerKind) -> Option<u64> {
        self.slots[kind.index()].map(|slot| slot.next_due_ms)
    }

    /// Pops the earliest timer due at `now_ms` together with the deadline it fired
    /// for, moving that deadline one period on. Ties go to the kind listed first
    /// in `TimerKind::ALL`.
    pub fn poll(&mut self, now_ms: u64) -> Option<(TimerKind, u64)> {
        let (due, kind) = TimerKind::ALL
            .into_iter()
            .filter_map(|kind| {
                self.slots[kind.index()]
                    .filter(|slot| slot.next_due_ms <= now_ms)
                    .map(|slot| (slot.next_due_ms, kind))
            })
            .min_by_key(|(due, kind)| (*due, kind.index()))?;

        if let Some(slot) = self.slots[kind.index()].as_mut() {
            slot.next_due_ms += slot.period_ms;
        }
        Some((kind, due))
    }
}

//! Event queue for signals the simulation raises toward its host

/// Events pushed by the simulation during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// The live list changed; the host should schedule a repaint.
    /// Drawing happens later, never inside the tick.
    RedrawRequested,
    /// Per-tick bookkeeping, useful for status output
    TickCompleted {
        spawned: u32,
        culled: u32,
        alive: usize,
    },
}

/// A simple queue the simulation pushes to and the host drains
#[derive(Default)]
pub struct EventQueue {
    events: Vec<SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, returning them in push order
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

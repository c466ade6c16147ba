//! Deterministic one-shot timers
//!
//! Cues are scheduled relative to the timeline clock and released when the
//! clock is advanced past their due time. Nothing runs on its own: the
//! animation loop feeds elapsed milliseconds in, which keeps tests exact
//! and makes cancellation a plain `clear`.

/// A cue due at an absolute timeline time
#[derive(Debug, Clone, PartialEq)]
struct Scheduled<C> {
    due_ms: f64,
    /// Insertion order, breaks ties between equal due times
    seq: u64,
    cue: C,
}

/// Ordered queue of pending cues
#[derive(Debug, Clone)]
pub struct Timeline<C> {
    now_ms: f64,
    next_seq: u64,
    pending: Vec<Scheduled<C>>,
}

impl<C> Default for Timeline<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Timeline<C> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current timeline clock
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Schedule `cue` to fire `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: f64, cue: C) {
        let entry = Scheduled {
            due_ms: self.now_ms + delay_ms.max(0.0),
            seq: self.next_seq,
            cue,
        };
        self.next_seq += 1;

        // Keep sorted by (due, seq); insertion after equal keys preserves FIFO
        let pos = self
            .pending
            .iter()
            .position(|s| s.due_ms > entry.due_ms)
            .unwrap_or(self.pending.len());
        self.pending.insert(pos, entry);
    }

    /// Advance the clock and return every cue that came due, in order
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<C> {
        self.now_ms += elapsed_ms.max(0.0);
        let split = self
            .pending
            .iter()
            .position(|s| s.due_ms > self.now_ms)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).map(|s| s.cue).collect()
    }

    /// Drop every pending cue
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_fire_when_due() {
        let mut timeline = Timeline::new();
        timeline.schedule(600.0, "show");
        assert!(timeline.advance(599.0).is_empty());
        assert_eq!(timeline.advance(1.0), vec!["show"]);
        assert_eq!(timeline.pending(), 0);
    }

    #[test]
    fn test_order_and_ties() {
        let mut timeline = Timeline::new();
        timeline.schedule(300.0, 3);
        timeline.schedule(100.0, 1);
        timeline.schedule(300.0, 4);
        timeline.schedule(200.0, 2);
        assert_eq!(timeline.advance(1000.0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_schedule_is_relative_to_now() {
        let mut timeline = Timeline::new();
        timeline.advance(1000.0);
        timeline.schedule(50.0, 'a');
        assert!(timeline.advance(49.0).is_empty());
        assert_eq!(timeline.advance(1.0), vec!['a']);
        assert_eq!(timeline.now_ms(), 1050.0);
    }

    #[test]
    fn test_clear_cancels() {
        let mut timeline = Timeline::new();
        timeline.schedule(10.0, ());
        timeline.schedule(20.0, ());
        assert_eq!(timeline.pending(), 2);
        timeline.clear();
        assert!(timeline.advance(100.0).is_empty());
    }
}

//! Single-slot frame coalescing.
//!
//! Platform-neutral stand-in for an animation-frame queue: at most one
//! payload may be pending, and scheduling while one is pending only
//! replaces the payload. The host owns frame timing: it requests a tick
//! when `schedule` says so and drives [`crate::EditorSession::on_frame`].

/// Holds the latest payload queued for the next frame tick.
#[derive(Debug)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Queue `payload` for the next tick. Returns true when no tick was
    /// pending yet, i.e. the caller must request one from the host;
    /// otherwise the already-requested tick will pick up the new payload.
    pub fn schedule(&mut self, payload: T) -> bool {
        let fresh = self.pending.is_none();
        self.pending = Some(payload);
        fresh
    }

    /// Consume the pending payload at tick time.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending payload so a stale update can never fire after the
    /// gesture ends.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_schedule_requests_a_tick_later_ones_coalesce() {
        let mut slot = FrameSlot::new();
        assert!(slot.schedule(1));
        assert!(!slot.schedule(2));
        assert!(!slot.schedule(3));
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
        assert!(slot.schedule(4), "drained slot accepts a new tick request");
    }

    #[test]
    fn cancel_discards_pending() {
        let mut slot = FrameSlot::new();
        slot.schedule("stale");
        slot.cancel();
        assert!(!slot.is_scheduled());
        assert_eq!(slot.take(), None);
    }
}

//! Mount/teardown bookkeeping for the frame loop.
//!
//! The web layer owns the real scheduler and listeners; this type owns the
//! state machine, so the teardown rules (idempotent, no frame left pending,
//! nothing scheduled after shutdown) are testable without a display surface.

/// Liveness plus the scheduler handle of the currently pending frame.
/// Mounted-and-alive to shut-down is one-way; a second shutdown is a no-op.
#[derive(Debug)]
pub struct Lifecycle {
    alive: bool,
    pending_frame: Option<i32>,
}

impl Lifecycle {
    /// A freshly mounted component: alive, no frame scheduled yet.
    pub fn new() -> Self {
        Self {
            alive: true,
            pending_frame: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Record the scheduler handle of the frame just requested. Ignored once
    /// shut down, so a reschedule racing teardown cannot revive the loop.
    pub fn frame_scheduled(&mut self, handle: i32) {
        if self.alive {
            self.pending_frame = Some(handle);
        }
    }

    /// Move the pending frame handle out for cancellation, if any.
    pub fn take_pending_frame(&mut self) -> Option<i32> {
        self.pending_frame.take()
    }

    /// Flip to shut down. `true` only on the first call; the caller does its
    /// cancel/detach work exactly when it sees `true`.
    pub fn shut_down(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_shutdown_is_a_no_op() {
        let mut lc = Lifecycle::new();
        lc.frame_scheduled(7);
        assert!(lc.shut_down());
        assert_eq!(lc.take_pending_frame(), Some(7));
        assert!(!lc.shut_down());
        assert_eq!(lc.take_pending_frame(), None);
        assert!(!lc.is_alive());
    }

    #[test]
    fn no_frame_recorded_after_shutdown() {
        let mut lc = Lifecycle::new();
        assert!(lc.shut_down());
        lc.frame_scheduled(3);
        assert_eq!(lc.take_pending_frame(), None);
    }

    #[test]
    fn reschedule_replaces_the_pending_handle() {
        let mut lc = Lifecycle::new();
        lc.frame_scheduled(1);
        lc.frame_scheduled(2);
        assert_eq!(lc.take_pending_frame(), Some(2));
        assert!(lc.is_alive());
    }
}

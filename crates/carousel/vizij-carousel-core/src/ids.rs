//! Identifiers and simple allocators for in-flight animations and timers.

use serde::{Deserialize, Serialize};

/// Handle for one issued slide animation. The host echoes it back on completion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnimationTicket(pub u64);

/// Handle for one armed auto-advance timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Monotonic allocator for tickets and timer ids.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_ticket: u64,
    next_timer: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_ticket(&mut self) -> AnimationTicket {
        let id = AnimationTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_timer(&mut self) -> TimerId {
        let id = TimerId(self.next_timer);
        self.next_timer = self.next_timer.wrapping_add(1);
        id
    }
}

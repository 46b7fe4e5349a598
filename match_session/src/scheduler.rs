//! Tick scheduling with cancellation tokens.
//!
//! The render and countdown loops are self-rescheduling: each tick call
//! hands back the token for its own next invocation. A `TaskSlot` owns the
//! cancellation state for one such loop as a generation counter. Scheduling
//! bumps the generation, so at most one token is ever live per slot and a
//! loop that lost its slot dies the moment it presents a stale token.

/// Token carried by one scheduled loop invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskToken {
    generation: u64,
}

/// Cancellation state for one recurring task
#[derive(Debug, Default)]
pub struct TaskSlot {
    generation: u64,
    active: bool,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the loop. Any token issued earlier is dead from
    /// here on, which is what makes duplicate loops impossible.
    pub fn schedule(&mut self) -> TaskToken {
        self.generation += 1;
        self.active = true;
        TaskToken {
            generation: self.generation,
        }
    }

    /// Stop the loop; the outstanding token becomes stale immediately
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.active = false;
    }

    /// Is this token the slot's live one?
    pub fn accepts(&self, token: TaskToken) -> bool {
        self.active && token.generation == self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

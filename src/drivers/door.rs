//! Door switch and latch.
//!
//! The reed switch reports whether the door is shut; the latch is engaged
//! when the door is shut and released by `unlock`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed { latched: bool },
}

pub struct DoorLatch {
    state: DoorState,
    unlock_count: u32,
}

impl DoorLatch {
    /// A shut, latched door.
    pub fn new() -> Self {
        Self {
            state: DoorState::Closed { latched: true },
            unlock_count: 0,
        }
    }

    /// Simulate the user opening or shutting the door.
    pub fn set_closed(&mut self, closed: bool) {
        self.state = if closed {
            DoorState::Closed { latched: true }
        } else {
            DoorState::Open
        };
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, DoorState::Closed { .. })
    }

    pub fn is_latched(&self) -> bool {
        matches!(self.state, DoorState::Closed { latched: true })
    }

    pub fn release(&mut self) {
        if let DoorState::Closed { latched } = &mut self.state {
            *latched = false;
        }
        self.unlock_count += 1;
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn unlock_count(&self) -> u32 {
        self.unlock_count
    }
}

impl Default for DoorLatch {
    fn default() -> Self {
        Self::new()
    }
}

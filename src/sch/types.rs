//! Core type definitions for the scheduler

/// Tick count type for delays and periods
pub type SchTick = u16;

/// Counter of due events waiting for dispatch
pub type SchRunCtr = u8;

/// Task body: no arguments, no return value
pub type TaskFn = fn();

/// Handle to a registered task
///
/// Wraps the index of the task's slot in the table. A handle stays valid
/// until the task is cancelled or, for one-shot tasks, dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(usize);

impl TaskHandle {
    /// Rebuild a handle from a slot index
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Slot index of this handle
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[cfg(all(feature = "defmt", target_arch = "arm"))]
impl defmt::Format for TaskHandle {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "#{=usize}", self.0)
    }
}

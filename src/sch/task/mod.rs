//! Task management module
//!
//! Provides task registration and cancellation.

mod slot;

pub use slot::{TaskEntry, TaskSlot};

use crate::critical::{critical_section, is_isr_context};
use crate::error::{SchError, SchResult};
use crate::kernel::{Scheduler, SCHEDULER};
use crate::types::{SchTick, TaskFn, TaskHandle};

impl<const N: usize> Scheduler<N> {
    /// Register a task
    ///
    /// The task first becomes due once `delay` ticks have elapsed, counting
    /// the first tick after [`start`](Scheduler::start) as tick 0. A `period`
    /// of 0 runs it once; otherwise it is due again every `period` ticks.
    ///
    /// # Arguments
    /// * `callback` - Task body
    /// * `delay` - Ticks before the first run
    /// * `period` - Ticks between runs, 0 for a one-shot task
    ///
    /// # Returns
    /// * `Ok(handle)` - Handle for a later [`delete_task`](Scheduler::delete_task)
    /// * `Err(SchError::NotInitialized)` - Scheduler not initialized
    /// * `Err(SchError::CalledFromIsr)` - Cannot register from ISR
    /// * `Err(SchError::TableFull)` - No free slot
    ///
    /// # Example
    /// ```ignore
    /// // every 1000 ticks, first at tick 300
    /// let handle = SCHEDULER.add_task(do_x, 300, 1000)?;
    /// ```
    pub fn add_task(&self, callback: TaskFn, delay: SchTick, period: SchTick) -> SchResult<TaskHandle> {
        if !self.is_initialized() {
            return Err(SchError::NotInitialized);
        }

        if is_isr_context() {
            return Err(SchError::CalledFromIsr);
        }

        let result = critical_section(|cs| self.table.borrow_mut(cs).insert(callback, delay, period));

        match result {
            Ok(handle) => crate::debug!("task {} added: delay {}, period {}", handle, delay, period),
            Err(_) => crate::warn!("task table full ({} slots)", N),
        }
        result
    }

    /// Remove a task from the scheduler
    ///
    /// The task body is no longer called; removing a task whose slot is
    /// already free is not an error.
    ///
    /// # Returns
    /// * `Err(SchError::CalledFromIsr)` - Cannot remove from ISR
    /// * `Err(SchError::InvalidHandle)` - Handle outside the table
    pub fn delete_task(&self, handle: TaskHandle) -> SchResult<()> {
        if is_isr_context() {
            return Err(SchError::CalledFromIsr);
        }

        critical_section(|cs| self.table.borrow_mut(cs).remove(handle)).inspect_err(|_| {
            crate::error!("delete of invalid task handle {}", handle);
        })
    }
}

/// Register a task on the global scheduler
///
/// See [`Scheduler::add_task`].
pub fn sch_add_task(callback: TaskFn, delay: SchTick, period: SchTick) -> SchResult<TaskHandle> {
    SCHEDULER.add_task(callback, delay, period)
}

/// Remove a task from the global scheduler
///
/// See [`Scheduler::delete_task`].
pub fn sch_delete_task(handle: TaskHandle) -> SchResult<()> {
    SCHEDULER.delete_task(handle)
}

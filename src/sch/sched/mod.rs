//! Dispatcher module
//!
//! Runs due tasks from the main loop, in table order, to completion.

mod table;

pub use table::TaskTable;

use crate::critical::{critical_section, is_isr_context};
use crate::error::{SchError, SchResult};
use crate::kernel::{Scheduler, SCHEDULER};

impl<const N: usize> Scheduler<N> {
    /// Run one dispatch pass
    ///
    /// Every task with a pending run is invoked once, even if several ticks
    /// made it due since the last pass; each invocation consumes exactly one
    /// pending run. One-shot tasks leave the table when they are claimed.
    ///
    /// The claim happens inside a critical section, the body runs outside it,
    /// so ticks keep arriving while tasks execute. A body may add or delete
    /// tasks, including itself. A long body delays every later slot of the
    /// same pass.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of task bodies invoked
    /// * `Err(SchError::CalledFromIsr)` - Cannot dispatch from ISR
    pub fn dispatch(&self) -> SchResult<usize> {
        if is_isr_context() {
            return Err(SchError::CalledFromIsr);
        }

        let mut ran = 0;
        for index in 0..N {
            let due = critical_section(|cs| self.table.borrow_mut(cs).claim(index));

            if let Some(task) = due {
                task();
                ran += 1;
            }
        }
        Ok(ran)
    }
}

/// Run one dispatch pass on the global scheduler
///
/// Call repeatedly from the main loop.
pub fn sch_dispatch_tasks() -> SchResult<usize> {
    SCHEDULER.dispatch()
}

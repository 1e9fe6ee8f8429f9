//! Time management module
//!
//! Provides the tick handler and tick/millisecond conversion.

use crate::critical::critical_section;
use crate::error::{SchError, SchResult};
use crate::kernel::{Scheduler, SCHEDULER};
use crate::types::SchTick;

impl<const N: usize> Scheduler<N> {
    /// Advance every registered task by one tick
    ///
    /// Called from the tick ISR. Ticks are ignored until the scheduler is
    /// started. Never calls a task body.
    #[inline]
    pub fn tick(&self) {
        if !self.is_running() {
            return;
        }

        self.tick_increment();

        critical_section(|cs| self.table.borrow_mut(cs).advance());
    }
}

/// Convert a duration to ticks, rounding up
///
/// # Returns
/// * `Err(SchError::TickIntervalInvalid)` - `tick_interval_ms` is 0
/// * `Err(SchError::TickOverflow)` - Result does not fit in [`SchTick`]
pub fn ms_to_ticks(ms: u32, tick_interval_ms: u16) -> SchResult<SchTick> {
    if tick_interval_ms == 0 {
        return Err(SchError::TickIntervalInvalid);
    }

    let ticks = ms.div_ceil(u32::from(tick_interval_ms));
    SchTick::try_from(ticks).map_err(|_| SchError::TickOverflow)
}

/// Get the global scheduler's tick count
#[inline]
pub fn sch_time_get() -> u32 {
    SCHEDULER.tick_get()
}

/// Tick handler for the global scheduler
pub fn sch_tick_handler() {
    SCHEDULER.tick();
}

/// SysTick interrupt handler
#[cfg(target_arch = "arm")]
#[no_mangle]
pub extern "C" fn SysTick() {
    sch_tick_handler();
}

//! Cooperative tick scheduler for single-core microcontrollers
//!
//! A fixed table of tasks driven by a timer interrupt:
//! - The tick ISR counts down each task's delay and marks it due
//! - The main loop dispatches due tasks to completion, in table order
//! - One-shot and periodic tasks, no preemption, no allocation
//! - Optional low-power wait between dispatch passes
//!
//! ```ignore
//! coopsched::sch_init(coopsched::CFG_TICK_INTERVAL_MS)?;
//! coopsched::sch_add_task(poll_serial, 0, 1)?;
//! coopsched::sch_add_task(check_mains, 0, 10)?;
//! coopsched::sch_start()?;
//! coopsched::sch_run();
//! ```

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

#[cfg(target_arch = "arm")]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;
mod lang_items;

pub mod sch;
pub mod port;

// ============ Re-exports ============

pub use sch::config;
pub use sch::config::*;
pub(crate) use sch::critical;
pub use sch::error;
pub use sch::error::{SchError, SchResult};
pub use sch::kernel;
pub use sch::kernel::{sch_init, sch_run, sch_sleep, sch_start, sch_stop, Scheduler, SCHEDULER};
pub use sch::types;
pub use sch::types::*;
pub use sch::task;
pub use sch::task::{sch_add_task, sch_delete_task};
pub use sch::sched;
pub use sch::sched::sch_dispatch_tasks;
pub use sch::time;
pub use sch::time::{ms_to_ticks, sch_tick_handler, sch_time_get};

#[cfg(feature = "pac")]
pub use stm32_metapac as pac;

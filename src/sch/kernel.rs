//! Scheduler state and lifecycle
//!
//! This module owns the scheduler instance: the task table shared with the
//! tick ISR, the lifecycle flags and the free-running tick counter. The
//! operations are split across the `task`, `sched` and `time` modules.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

use crate::config::{
    CFG_MAX_TASKS, CFG_TICK_CNTS_PER_MS, CFG_TICK_INTERVAL_MAX_MS, CFG_TICK_INTERVAL_MIN_MS,
};
use crate::critical::critical_section;
use crate::error::{SchError, SchResult};
use crate::sch::cs_cell::CsCell;
use crate::sched::TaskTable;
use crate::task::TaskEntry;
use crate::types::TaskHandle;

/// Cooperative tick scheduler with room for `N` tasks
///
/// Usually used through the global [`SCHEDULER`]; separate instances are
/// handy for tests and for firmware that wants a different capacity.
///
/// The task table and the critical-section guard that protects it stay
/// inside the crate; callers only reach the table through these methods.
///
/// ```compile_fail
/// use coopsched::critical::critical_section;
/// ```
///
/// ```compile_fail
/// let sched: coopsched::Scheduler<1> = coopsched::Scheduler::new();
/// let _ = &sched.table;
/// ```
pub struct Scheduler<const N: usize> {
    pub(crate) table: CsCell<TaskTable<N>>,
    initialized: AtomicBool,
    running: AtomicBool,
    tick_interval: AtomicU16,
    tick_counter: AtomicU32,
}

/// Global scheduler instance driven by the SysTick handler
pub static SCHEDULER: Scheduler<CFG_MAX_TASKS> = Scheduler::new();

impl<const N: usize> Scheduler<N> {
    /// Create a scheduler in the uninitialized state
    pub const fn new() -> Self {
        Self {
            table: CsCell::new(TaskTable::new()),
            initialized: AtomicBool::new(false),
            running: AtomicBool::new(false),
            tick_interval: AtomicU16::new(0),
            tick_counter: AtomicU32::new(0),
        }
    }

    /// Initialize the scheduler
    ///
    /// Disables the tick source, clears every slot and programs the timer for
    /// `tick_interval_ms`. The tick source stays disabled until [`start`].
    ///
    /// # Returns
    /// * `Ok(())` - Initialization successful
    /// * `Err(SchError::TickIntervalInvalid)` - Interval out of range
    /// * `Err(SchError::AlreadyRunning)` - Scheduler is running
    ///
    /// [`start`]: Scheduler::start
    pub fn init(&self, tick_interval_ms: u16) -> SchResult<()> {
        if !(CFG_TICK_INTERVAL_MIN_MS..=CFG_TICK_INTERVAL_MAX_MS).contains(&tick_interval_ms) {
            crate::error!("tick interval {} ms out of range", tick_interval_ms);
            return Err(SchError::TickIntervalInvalid);
        }

        if self.is_running() {
            return Err(SchError::AlreadyRunning);
        }

        crate::port::sch_cpu_tick_disable();

        critical_section(|cs| {
            self.table.borrow_mut(cs).clear();
            self.tick_counter.store(0, Ordering::SeqCst);
            self.tick_interval.store(tick_interval_ms, Ordering::SeqCst);
        });

        crate::port::sch_cpu_tick_init(u32::from(tick_interval_ms) * CFG_TICK_CNTS_PER_MS);

        self.initialized.store(true, Ordering::SeqCst);
        crate::info!("scheduler initialized: {} slots, {} ms tick", N, tick_interval_ms);
        Ok(())
    }

    /// Start ticking
    ///
    /// Register the periodic tasks first so they all start in step at tick 0.
    ///
    /// # Returns
    /// * `Err(SchError::NotInitialized)` - [`init`](Scheduler::init) not called
    /// * `Err(SchError::AlreadyRunning)` - Already started
    pub fn start(&self) -> SchResult<()> {
        if !self.is_initialized() {
            return Err(SchError::NotInitialized);
        }

        if self.running.swap(true, Ordering::SeqCst) {
            return Err(SchError::AlreadyRunning);
        }

        crate::port::sch_cpu_tick_enable();
        crate::info!("scheduler started with {} tasks", self.task_count());
        Ok(())
    }

    /// Stop ticking
    ///
    /// Registered tasks keep their timing state; [`start`](Scheduler::start)
    /// resumes from where the scheduler stopped.
    pub fn stop(&self) -> SchResult<()> {
        if !self.is_initialized() {
            return Err(SchError::NotInitialized);
        }

        if self.running.swap(false, Ordering::SeqCst) {
            crate::port::sch_cpu_tick_disable();
            crate::info!("scheduler stopped at tick {}", self.tick_get());
        }
        Ok(())
    }

    /// Wait for the next interrupt with the core halted
    ///
    /// Call after a dispatch pass. Interrupt masks are left as they are, so
    /// the tick and any external-edge interrupts still wake the core.
    #[inline]
    pub fn sleep(&self) {
        crate::port::sch_cpu_wait_for_interrupt();
    }

    /// Dispatch and sleep forever
    pub fn run(&self) -> ! {
        loop {
            if let Err(err) = self.dispatch() {
                crate::error!("dispatch failed: {}", err);
            }
            self.sleep();
        }
    }

    /// Check if the scheduler is running
    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Check if the scheduler is initialized
    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Configured tick interval in milliseconds, 0 before init
    #[inline(always)]
    pub fn tick_interval(&self) -> u16 {
        self.tick_interval.load(Ordering::Relaxed)
    }

    /// Ticks handled since init
    #[inline(always)]
    pub fn tick_get(&self) -> u32 {
        self.tick_counter.load(Ordering::Relaxed)
    }

    /// Increment and return tick count
    #[inline(always)]
    pub(crate) fn tick_increment(&self) -> u32 {
        self.tick_counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Table capacity
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of registered tasks
    pub fn task_count(&self) -> usize {
        critical_section(|cs| self.table.borrow_mut(cs).len())
    }

    /// Snapshot of the task behind `handle`
    pub fn task(&self, handle: TaskHandle) -> Option<TaskEntry> {
        critical_section(|cs| self.table.borrow_mut(cs).get(handle).copied())
    }
}

impl<const N: usize> Default for Scheduler<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============ Public API ============

/// Initialize the global scheduler
///
/// Must be called before any task is added.
pub fn sch_init(tick_interval_ms: u16) -> SchResult<()> {
    SCHEDULER.init(tick_interval_ms)
}

/// Start the global scheduler's tick
pub fn sch_start() -> SchResult<()> {
    SCHEDULER.start()
}

/// Stop the global scheduler's tick
pub fn sch_stop() -> SchResult<()> {
    SCHEDULER.stop()
}

/// Sleep until the next interrupt
#[inline]
pub fn sch_sleep() {
    SCHEDULER.sleep();
}

/// Run the global scheduler's main loop
pub fn sch_run() -> ! {
    SCHEDULER.run()
}


//! Port layer - CPU-specific implementations
//!
//! This module provides the hardware abstraction for the tick timer and the
//! low-power wait.

#[cfg(target_arch = "arm")]
pub mod cortex_m;

#[cfg(target_arch = "arm")]
pub use self::cortex_m::*;

// Stub implementations for non-ARM targets (for testing)
#[cfg(not(target_arch = "arm"))]
pub mod stub {
    use portable_atomic::{AtomicBool, AtomicU32, Ordering};

    static TICK_RELOAD: AtomicU32 = AtomicU32::new(0);
    static TICK_ENABLED: AtomicBool = AtomicBool::new(false);
    static WFI_COUNT: AtomicU32 = AtomicU32::new(0);

    pub fn sch_cpu_tick_init(cnts: u32) {
        TICK_ENABLED.store(false, Ordering::SeqCst);
        TICK_RELOAD.store(cnts - 1, Ordering::SeqCst);
    }

    pub fn sch_cpu_tick_enable() {
        TICK_ENABLED.store(true, Ordering::SeqCst);
    }

    pub fn sch_cpu_tick_disable() {
        TICK_ENABLED.store(false, Ordering::SeqCst);
    }

    pub fn sch_cpu_wait_for_interrupt() {
        WFI_COUNT.fetch_add(1, Ordering::SeqCst);
    }

    /// Reload value last programmed into the tick timer
    pub fn tick_reload() -> u32 {
        TICK_RELOAD.load(Ordering::SeqCst)
    }

    /// Whether the tick timer is counting
    pub fn tick_enabled() -> bool {
        TICK_ENABLED.load(Ordering::SeqCst)
    }

    /// Number of waits for interrupt so far
    pub fn wfi_count() -> u32 {
        WFI_COUNT.load(Ordering::SeqCst)
    }
}

#[cfg(not(target_arch = "arm"))]
pub use stub::*;

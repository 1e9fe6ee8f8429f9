//! Compile-time configuration for the scheduler
//!
//! These constants control the resource limits and the tick timing.

/// Maximum number of concurrently registered tasks
pub const CFG_MAX_TASKS: usize = 10;

/// Default tick interval in milliseconds
///
/// Pick the largest common factor of the task periods.
pub const CFG_TICK_INTERVAL_MS: u16 = 10;

/// Shortest supported tick interval in milliseconds
pub const CFG_TICK_INTERVAL_MIN_MS: u16 = 1;

/// Core clock feeding the tick timer
pub const CFG_CPU_FREQ_HZ: u32 = 16_000_000;

/// Largest value the tick timer reload register can hold (SysTick is 24-bit)
pub const CFG_TICK_RELOAD_MAX: u32 = 0x00FF_FFFF;

/// Timer counts per millisecond
pub const CFG_TICK_CNTS_PER_MS: u32 = CFG_CPU_FREQ_HZ / 1000;

/// Longest supported tick interval in milliseconds
pub const CFG_TICK_INTERVAL_MAX_MS: u16 =
    ((CFG_TICK_RELOAD_MAX as u64 + 1) / CFG_TICK_CNTS_PER_MS as u64) as u16;

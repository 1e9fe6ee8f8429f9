//! Cortex-M port implementation
//!
//! The tick comes from SysTick, which every Cortex-M core has. Its 24-bit
//! reload register bounds the longest tick interval.

use cortex_m::peripheral::syst::SystClkSource;

/// Configure SysTick for tick generation, leaving the counter stopped
///
/// # Arguments
/// * `cnts` - Core clock cycles per tick
///
/// # Example
/// For 16MHz clock with a 10ms tick: cnts = 16_000 * 10 = 160_000
pub fn sch_cpu_tick_init(cnts: u32) {
    let mut p = unsafe { cortex_m::Peripherals::steal() };

    p.SYST.disable_counter();
    p.SYST.set_reload(cnts - 1);
    p.SYST.clear_current();
    p.SYST.set_clock_source(SystClkSource::Core);
    p.SYST.enable_interrupt();
}

/// Start SysTick counting
pub fn sch_cpu_tick_enable() {
    let mut p = unsafe { cortex_m::Peripherals::steal() };
    p.SYST.clear_current();
    p.SYST.enable_counter();
}

/// Stop SysTick counting
pub fn sch_cpu_tick_disable() {
    let mut p = unsafe { cortex_m::Peripherals::steal() };
    p.SYST.disable_counter();
}

/// Halt the core until an interrupt arrives
///
/// WFI leaves PRIMASK alone and keeps the NVIC and SysTick clocked, so any
/// enabled interrupt wakes the core.
#[inline(always)]
pub fn sch_cpu_wait_for_interrupt() {
    cortex_m::asm::wfi();
}

//! Critical section handling
//!
//! Provides the guard that serializes the tick ISR against the main loop.

use core::marker::PhantomData;

use critical_section::RestoreState;

/// RAII guard for critical sections
///
/// When this guard is created, interrupts are disabled.
/// When it is dropped, interrupts are restored to their previous state,
/// so guards may nest.
pub struct CriticalSection {
    restore: RestoreState,
    _not_send: PhantomData<*mut ()>,
}

impl CriticalSection {
    /// Enter a critical section by disabling interrupts.
    ///
    /// Returns a guard that will restore interrupt state when dropped.
    #[inline(always)]
    pub fn enter() -> Self {
        // SAFETY: the matching release happens exactly once, in `drop`.
        let restore = unsafe { critical_section::acquire() };
        CriticalSection {
            restore,
            _not_send: PhantomData,
        }
    }
}

impl Drop for CriticalSection {
    #[inline(always)]
    fn drop(&mut self) {
        // SAFETY: `restore` came from the `acquire` in `enter`.
        unsafe { critical_section::release(self.restore) };
    }
}

/// Execute a closure with interrupts disabled
///
/// The closure receives a reference to the critical section guard,
/// which can be used to access `CsCell` protected data.
#[inline]
pub fn critical_section<F, R>(f: F) -> R
where
    F: FnOnce(&CriticalSection) -> R,
{
    let cs = CriticalSection::enter();
    f(&cs)
}

/// Check if currently executing in an ISR context
#[inline]
pub fn is_isr_context() -> bool {
    #[cfg(target_arch = "arm")]
    {
        let ipsr: u32;
        unsafe {
            core::arch::asm!(
                "mrs {}, IPSR",
                out(reg) ipsr,
                options(nomem, nostack, preserves_flags)
            );
        }
        ipsr & 0x1FF != 0
    }

    #[cfg(not(target_arch = "arm"))]
    {
        false
    }
}

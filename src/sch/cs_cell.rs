//! Critical section protected cell
//!
//! Zero-overhead wrapper for data shared between the tick ISR and the
//! main loop.

use core::cell::UnsafeCell;

use crate::sch::critical::CriticalSection;

/// A cell that can only be accessed within a critical section.
///
/// Callers must not hold two borrows of the same cell at once.
pub struct CsCell<T>(UnsafeCell<T>);

// SAFETY: every access goes through a `CriticalSection`, which on a single
// core excludes the only other context that could touch the value.
unsafe impl<T: Send> Sync for CsCell<T> {}

impl<T> CsCell<T> {
    /// Create a new CsCell
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(UnsafeCell::new(value))
    }

    /// Get a mutable reference to the inner value for the life of `_cs`
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub fn borrow_mut<'cs>(&'cs self, _cs: &'cs CriticalSection) -> &'cs mut T {
        unsafe { &mut *self.0.get() }
    }
}

//! Error types for the scheduler
//!
//! Uses Rust's Result pattern instead of sentinel return codes.

/// Scheduler error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(all(feature = "defmt", target_arch = "arm"), derive(defmt::Format))]
#[repr(u16)]
pub enum SchError {
    // ============ Task table errors ============
    /// No free slot left in the task table
    TableFull = 1001,
    /// Handle does not refer to a slot of this table
    InvalidHandle = 1002,

    // ============ Lifecycle errors ============
    /// Scheduler has not been initialized
    NotInitialized = 2001,
    /// Scheduler is already running
    AlreadyRunning = 2002,

    // ============ Timing errors ============
    /// Tick interval outside the range the timer can produce
    TickIntervalInvalid = 3001,
    /// Duration does not fit in a tick count
    TickOverflow = 3002,

    // ============ Context errors ============
    /// Function cannot be called from an ISR
    CalledFromIsr = 4001,
}

/// Result type alias for scheduler operations
pub type SchResult<T> = Result<T, SchError>;

impl SchError {
    /// Numeric error code
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }
}

//! Logging macros for the scheduler
//!
//! Forward to defmt on ARM targets with the `defmt` feature. Elsewhere they
//! only evaluate their arguments by reference.
//!
//! The ARM gate is needed because host test binaries link no defmt global
//! logger or transport, so a defmt call there would fail to link.

/// Debug message
#[cfg(all(feature = "defmt", target_arch = "arm"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

/// Info message
#[cfg(all(feature = "defmt", target_arch = "arm"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

/// Error message
#[cfg(all(feature = "defmt", target_arch = "arm"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { defmt::error!($($arg)*) };
}

/// Trace message
#[cfg(all(feature = "defmt", target_arch = "arm"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

/// Warning message
#[cfg(all(feature = "defmt", target_arch = "arm"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

// No-op versions when defmt is unavailable
#[cfg(not(all(feature = "defmt", target_arch = "arm")))]
#[macro_export]
macro_rules! debug { ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }}; }
#[cfg(not(all(feature = "defmt", target_arch = "arm")))]
#[macro_export]
macro_rules! info { ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }}; }
#[cfg(not(all(feature = "defmt", target_arch = "arm")))]
#[macro_export]
macro_rules! error { ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }}; }
#[cfg(not(all(feature = "defmt", target_arch = "arm")))]
#[macro_export]
macro_rules! trace { ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }}; }
#[cfg(not(all(feature = "defmt", target_arch = "arm")))]
#[macro_export]
macro_rules! warn { ($fmt:literal $(, $arg:expr)* $(,)?) => {{ $( let _ = &$arg; )* }}; }

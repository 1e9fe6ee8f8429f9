//! Core scheduler modules
//!
//! Contains the task table, the tick handler, the dispatcher and lifecycle
//! control.

pub mod config;
pub(crate) mod critical;
pub mod error;
pub mod kernel;
pub mod types;
pub mod task;
pub mod sched;
pub mod time;
pub(crate) mod cs_cell;

//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Cache reaper: evicts expired cache entries on a fixed period

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};

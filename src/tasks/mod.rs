//! Background Tasks Module
//!
//! Long-lived tasks spawned alongside cache instances.

mod cleanup;

pub use cleanup::spawn_cleanup_task;

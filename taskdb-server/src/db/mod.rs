//! Database layer - connection pool and task stores
//!
//! - One statement per store call, parameters bound positionally
//! - Rely on DB constraints for required fields; no check-then-write
//! - The pool is constructed explicitly and injected, never global

pub mod memory;
pub mod pool;
pub mod repos;

pub use memory::MemoryTaskStore;
pub use pool::{DbConfig, PoolError, TaskPool};
pub use repos::*;

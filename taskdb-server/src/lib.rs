//! taskdb-server: HTTP CRUD over a single `tasks` table
//!
//! Five handlers (list, get, create, update, delete), each issuing one
//! parameterized statement through an injected [`db::TaskStore`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbConfig, MemoryTaskStore, MySqlTaskStore, TaskPool, TaskStore};
pub use http::{build_router, run_server, AppState, ServerConfig};

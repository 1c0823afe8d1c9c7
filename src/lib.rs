// src/lib.rs
//! Champions titles and knockout eliminations ledger.
//!
//! The champions dataset lives in `core::ring::CircularList`, a circular
//! doubly-linked list with a stable merge sort. Eliminations live on a plain
//! stack. Both persist as JSON via `store`.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod file;
pub mod model;
pub mod store;

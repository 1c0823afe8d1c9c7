// src/core/mod.rs

pub mod merge;
pub mod ring;
pub mod sanitize;

pub use ring::{CircularList, RingError};

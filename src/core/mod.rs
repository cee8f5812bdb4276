//! Shared infrastructure

pub mod sync;

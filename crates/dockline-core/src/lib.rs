//! Dockline Core
//!
//! This crate contains the foundation utilities shared by the dockline
//! layout toolkit: geometry primitives, math re-exports, optimized
//! collections, logging, and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

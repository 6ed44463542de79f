//! Adapter implementations of the live ports.

pub mod memory;

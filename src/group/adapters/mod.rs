//! Adapter implementations of the group ports.

pub mod memory;

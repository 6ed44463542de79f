//! Concurrency primitives for ordered fan-out.
//!
//! This module provides the building blocks services use when several
//! independent asynchronous lookups must run concurrently yet be observed
//! in a deterministic order:
//!
//! - [`PriorityQueue`]: a generic, comparator-driven binary heap
//! - [`OrderedTaskGroup`]: concurrent task execution with strict
//!   submission-order result delivery

mod ordered_group;
mod priority_queue;

pub use ordered_group::OrderedTaskGroup;
pub use priority_queue::PriorityQueue;

#[cfg(test)]
mod tests;

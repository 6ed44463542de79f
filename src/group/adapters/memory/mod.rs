//! Thread-safe in-memory adapters for the group ports.

mod repository;

pub use repository::InMemoryGroupRepository;

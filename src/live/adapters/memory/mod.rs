//! Thread-safe in-memory adapters for the live ports.

mod repository;

pub use repository::InMemoryLiveRepository;

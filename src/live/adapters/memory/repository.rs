//! In-memory live repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::group::domain::GroupId;
use crate::live::{
    domain::{Live, LiveId},
    ports::{LiveRepository, LiveRepositoryError, LiveRepositoryResult},
};
use crate::pagination::{Page, PageRequest};

/// Thread-safe in-memory live repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLiveRepository {
    state: Arc<RwLock<InMemoryLiveState>>,
}

#[derive(Debug, Default)]
struct InMemoryLiveState {
    lives: HashMap<LiveId, Live>,
    insertion_order: Vec<LiveId>,
}

impl InMemoryLiveRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored live events.
    ///
    /// # Errors
    ///
    /// Returns [`LiveRepositoryError::Persistence`] when the state lock
    /// is poisoned.
    pub fn stored_count(&self) -> LiveRepositoryResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.lives.len())
    }
}

fn lock_error(err: impl std::fmt::Display) -> LiveRepositoryError {
    LiveRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn ordered_lives(state: &InMemoryLiveState) -> Vec<Live> {
    state
        .insertion_order
        .iter()
        .filter_map(|id| state.lives.get(id).cloned())
        .collect()
}

#[async_trait]
impl LiveRepository for InMemoryLiveRepository {
    async fn create(&self, live: &Live) -> LiveRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.lives.contains_key(&live.id()) {
            return Err(LiveRepositoryError::DuplicateLive(live.id()));
        }
        state.insertion_order.push(live.id());
        state.lives.insert(live.id(), live.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: LiveId) -> LiveRepositoryResult<Option<Live>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.lives.get(&id).cloned())
    }

    async fn page(&self, request: PageRequest) -> LiveRepositoryResult<Page<Live>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(Page::from_slice(&ordered_lives(&state), request))
    }

    async fn page_by_group(
        &self,
        group: GroupId,
        request: PageRequest,
    ) -> LiveRepositoryResult<Page<Live>> {
        let state = self.state.read().map_err(lock_error)?;
        let hosted: Vec<Live> = ordered_lives(&state)
            .into_iter()
            .filter(|live| live.host_group() == group)
            .collect();
        Ok(Page::from_slice(&hosted, request))
    }
}

//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pagination::{Page, PageRequest};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    insertion_order: Vec<UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn stored_count(&self) -> UserRepositoryResult<usize> {
        let state = read_state(&self.state)?;
        Ok(state.users.len())
    }
}

fn read_state(
    state: &Arc<RwLock<InMemoryUserState>>,
) -> UserRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryUserState>> {
    state
        .read()
        .map_err(|err| UserRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        state.insertion_order.push(user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = read_state(&self.state)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn exists(&self, id: UserId) -> UserRepositoryResult<bool> {
        let state = read_state(&self.state)?;
        Ok(state.users.contains_key(&id))
    }

    async fn page(&self, request: PageRequest) -> UserRepositoryResult<Page<User>> {
        let state = read_state(&self.state)?;
        let ordered: Vec<User> = state
            .insertion_order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect();
        Ok(Page::from_slice(&ordered, request))
    }
}

//! In-memory social-graph repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pagination::{Page, PageRequest};
use crate::user::{
    domain::{Follow, UserId},
    ports::{UserSocialRepository, UserSocialRepositoryError, UserSocialRepositoryResult},
};

/// Thread-safe in-memory social-graph repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserSocialRepository {
    state: Arc<RwLock<InMemorySocialState>>,
}

#[derive(Debug, Default)]
struct InMemorySocialState {
    // follower -> followees, in follow order
    following: HashMap<UserId, Vec<UserId>>,
}

impl InMemoryUserSocialRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserSocialRepositoryError {
    UserSocialRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserSocialRepository for InMemoryUserSocialRepository {
    async fn follow(&self, follow: &Follow) -> UserSocialRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let followees = state.following.entry(follow.follower()).or_default();
        if followees.contains(&follow.followee()) {
            return Err(UserSocialRepositoryError::DuplicateFollow {
                follower: follow.follower(),
                followee: follow.followee(),
            });
        }
        followees.push(follow.followee());
        Ok(())
    }

    async fn is_following(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> UserSocialRepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .following
            .get(&follower)
            .is_some_and(|followees| followees.contains(&followee)))
    }

    async fn page_following(
        &self,
        follower: UserId,
        request: PageRequest,
    ) -> UserSocialRepositoryResult<Page<UserId>> {
        let state = self.state.read().map_err(lock_error)?;
        let followees = state
            .following
            .get(&follower)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(Page::from_slice(followees, request))
    }
}

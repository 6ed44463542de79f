//! Domain validation tests for live events.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::group::domain::GroupId;
use crate::live::domain::{Live, LiveDomainError, LiveTitle};
use crate::user::domain::UserId;
use chrono::{Duration, Utc};
use mockable::DefaultClock;

#[test]
fn live_title_rejects_blank_input() {
    assert_eq!(
        LiveTitle::new("  ").expect_err("blank title rejected"),
        LiveDomainError::EmptyLiveTitle
    );
    let title = LiveTitle::new("Winter Tour Final").expect("valid title");
    assert_eq!(title.as_str(), "Winter Tour Final");
}

#[test]
fn live_carries_host_author_and_schedule() {
    let clock = DefaultClock;
    let host = GroupId::new();
    let author = UserId::new();
    let starts_at = Utc::now() + Duration::days(30);

    let live = Live::new(
        LiveTitle::new("Winter Tour Final").expect("valid title"),
        host,
        author,
        starts_at,
        &clock,
    );
    assert_eq!(live.host_group(), host);
    assert_eq!(live.author(), author);
    assert_eq!(live.starts_at(), starts_at);
}

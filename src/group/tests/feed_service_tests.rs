//! Service orchestration tests for group feed posts.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::group::{
    adapters::memory::InMemoryGroupRepository,
    domain::{Group, GroupDomainError, GroupId, GroupName, Membership},
    ports::{GroupRepository, repository::MockGroupRepository},
    services::{CreateFeedPostRequest, GroupFeedError, GroupFeedService},
};
use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{Part, Role, User, UserName},
    ports::UserRepository,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = GroupFeedService<InMemoryGroupRepository, DefaultClock>;

struct Harness {
    groups: Arc<InMemoryGroupRepository>,
    users: Arc<InMemoryUserRepository>,
    service: TestService,
}

#[fixture]
fn harness() -> Harness {
    let groups = Arc::new(InMemoryGroupRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    let service = GroupFeedService::new(Arc::clone(&groups), Arc::new(DefaultClock));
    Harness {
        groups,
        users,
        service,
    }
}

async fn seed_user(users: &InMemoryUserRepository, name: &str, role: Role) -> User {
    let user = User::new(
        UserName::new(name).expect("valid name"),
        role,
        &DefaultClock,
    );
    users.create(&user).await.expect("user stored");
    user
}

async fn seed_group(groups: &InMemoryGroupRepository, name: &str, member: &User) -> Group {
    let group = Group::new(GroupName::new(name).expect("valid name"), &DefaultClock);
    groups.create(&group).await.expect("group stored");
    groups
        .join(&Membership::new(group.id(), member.id(), &DefaultClock))
        .await
        .expect("member joined");
    group
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn artist_member_posts_to_the_feed(harness: Harness) {
    let artist = seed_user(
        &harness.users,
        "Aki",
        Role::Artist { part: Part::Vocal },
    )
    .await;
    let group = seed_group(&harness.groups, "Night Owls", &artist).await;

    let post = harness
        .service
        .post(CreateFeedPostRequest::new(
            artist.clone(),
            group.id(),
            "New single out friday",
        ))
        .await
        .expect("post succeeds");
    assert_eq!(post.author(), artist.id());
    assert_eq!(post.group_id(), group.id());

    let feed = harness.groups.feed_posts(group.id()).expect("feed readable");
    assert_eq!(feed, vec![post]);
}

#[tokio::test(flavor = "multi_thread")]
async fn fan_author_is_rejected_without_touching_storage() {
    let service = GroupFeedService::new(
        Arc::new(MockGroupRepository::new()),
        Arc::new(DefaultClock),
    );
    let fan = User::new(
        UserName::new("Dai").expect("valid name"),
        Role::Fan,
        &DefaultClock,
    );

    let result = service
        .post(CreateFeedPostRequest::new(fan, GroupId::new(), "hello"))
        .await;
    assert!(matches!(result, Err(GroupFeedError::FanCannotPost)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_member_artist_cannot_post(harness: Harness) {
    let member = seed_user(
        &harness.users,
        "Aki",
        Role::Artist { part: Part::Vocal },
    )
    .await;
    let outsider = seed_user(
        &harness.users,
        "Cho",
        Role::Artist { part: Part::Drums },
    )
    .await;
    let group = seed_group(&harness.groups, "Night Owls", &member).await;

    let result = harness
        .service
        .post(CreateFeedPostRequest::new(
            outsider.clone(),
            group.id(),
            "hello",
        ))
        .await;
    assert!(matches!(
        result,
        Err(GroupFeedError::AuthorNotMember { group: g, user })
            if g == group.id() && user == outsider.id()
    ));
    assert!(harness.groups.feed_posts(group.id()).expect("feed readable").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_body_is_rejected_before_the_mutation(harness: Harness) {
    let artist = seed_user(
        &harness.users,
        "Aki",
        Role::Artist { part: Part::Vocal },
    )
    .await;
    let group = seed_group(&harness.groups, "Night Owls", &artist).await;

    let result = harness
        .service
        .post(CreateFeedPostRequest::new(artist, group.id(), "   "))
        .await;
    assert!(matches!(
        result,
        Err(GroupFeedError::Domain(GroupDomainError::EmptyFeedBody))
    ));
    assert!(harness.groups.feed_posts(group.id()).expect("feed readable").is_empty());
}

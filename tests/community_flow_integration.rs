//! Behavioural integration tests for the in-memory community backend.
//!
//! These tests exercise the full service layer through realistic
//! higher-level flows, wiring the in-memory adapters together the way a
//! transport layer would and verifying the invitation, membership, live
//! scheduling, and social-graph contracts end to end.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use greenroom::group::{
    adapters::memory::InMemoryGroupRepository,
    domain::{Group, GroupName, InvitationState, Membership},
    ports::GroupRepository,
    services::{
        AcceptInvitationRequest, CreateFeedPostRequest, GroupFeedService, GroupMembershipService,
        InviteToGroupRequest,
    },
};
use greenroom::live::{
    adapters::memory::InMemoryLiveRepository,
    services::{CreateLiveRequest, CreateLiveService, LiveListingService},
};
use greenroom::pagination::PageRequest;
use greenroom::user::{
    adapters::memory::{InMemoryNotificationGateway, InMemoryUserRepository},
    domain::{Part, Role, User, UserName},
    ports::UserRepository,
};
use mockable::DefaultClock;
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// All in-memory adapters wired together, shared the way a composition
/// root would share them.
struct Backend {
    users: Arc<InMemoryUserRepository>,
    groups: Arc<InMemoryGroupRepository>,
    lives: Arc<InMemoryLiveRepository>,
    notifier: Arc<InMemoryNotificationGateway>,
    clock: Arc<DefaultClock>,
}

impl Backend {
    fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            groups: Arc::new(InMemoryGroupRepository::new()),
            lives: Arc::new(InMemoryLiveRepository::new()),
            notifier: Arc::new(InMemoryNotificationGateway::new()),
            clock: Arc::new(DefaultClock),
        }
    }

    fn membership_service(
        &self,
    ) -> GroupMembershipService<
        InMemoryGroupRepository,
        InMemoryUserRepository,
        InMemoryNotificationGateway,
        DefaultClock,
    > {
        GroupMembershipService::new(
            Arc::clone(&self.groups),
            Arc::clone(&self.users),
            Arc::clone(&self.notifier),
            Arc::clone(&self.clock),
        )
    }

    fn live_service(
        &self,
    ) -> CreateLiveService<InMemoryLiveRepository, InMemoryGroupRepository, DefaultClock> {
        CreateLiveService::new(
            Arc::clone(&self.lives),
            Arc::clone(&self.groups),
            Arc::clone(&self.clock),
        )
    }

    fn listing_service(
        &self,
    ) -> LiveListingService<InMemoryLiveRepository, InMemoryGroupRepository> {
        LiveListingService::new(Arc::clone(&self.lives), Arc::clone(&self.groups))
    }

    fn feed_service(&self) -> GroupFeedService<InMemoryGroupRepository, DefaultClock> {
        GroupFeedService::new(Arc::clone(&self.groups), Arc::clone(&self.clock))
    }

    async fn seed_user(&self, name: &str, role: Role) -> User {
        let user = User::new(UserName::new(name).expect("valid name"), role, &DefaultClock);
        self.users.create(&user).await.expect("user stored");
        user
    }

    async fn seed_group(&self, name: &str) -> Group {
        let group = Group::new(GroupName::new(name).expect("valid name"), &DefaultClock);
        self.groups.create(&group).await.expect("group stored");
        group
    }

    async fn seed_member(&self, group: &Group, user: &User) {
        let membership = Membership::new(group.id(), user.id(), &DefaultClock);
        self.groups.join(&membership).await.expect("member joined");
    }
}

/// Walks a user from invitation through accepted membership to a
/// scheduled and listed live event.
#[test]
fn invitation_to_live_listing_flow() {
    let rt = test_runtime();
    let backend = Backend::new();

    rt.block_on(async {
        let guitarist = backend
            .seed_user("Mio", Role::Artist { part: Part::Guitar })
            .await;
        let drummer = backend
            .seed_user("Ritsu", Role::Artist { part: Part::Drums })
            .await;
        let band = backend.seed_group("After School Tea Time").await;
        backend.seed_member(&band, &guitarist).await;

        // Founding member invites the drummer.
        let membership = backend.membership_service();
        let invitation = membership
            .invite(InviteToGroupRequest::new(
                guitarist.clone(),
                band.id(),
                drummer.id(),
            ))
            .await
            .expect("invite issued");
        assert_eq!(invitation.state(), InvitationState::Pending);
        assert_eq!(invitation.invitee(), drummer.id());

        // Invitee was told which group wants them.
        let published = backend.notifier.published().expect("published");
        assert_eq!(published.len(), 1);
        let (notified, message) = published.first().expect("one notification").clone();
        assert_eq!(notified, drummer.id());
        assert!(message.contains("After School Tea Time"));

        // Drummer accepts and becomes a member.
        let joined = membership
            .accept_invitation(AcceptInvitationRequest::new(
                invitation.id(),
                drummer.clone(),
            ))
            .await
            .expect("invitation accepted");
        assert_eq!(joined.group_id(), band.id());
        assert_eq!(joined.user_id(), drummer.id());
        assert!(
            backend
                .groups
                .is_member(band.id(), drummer.id())
                .await
                .expect("membership readable")
        );

        // The fresh member schedules a show.
        let live = backend
            .live_service()
            .create_live(CreateLiveRequest::new(
                drummer.clone(),
                band.id(),
                "Budokan Debut",
                Utc::now() + Duration::days(30),
            ))
            .await
            .expect("live scheduled");
        assert_eq!(live.author(), drummer.id());
        assert_eq!(live.host_group(), band.id());

        // The listing joins the live back to its host group.
        let page = backend
            .listing_service()
            .page_with_hosts(PageRequest::new(1, 10))
            .await
            .expect("listing succeeds");
        assert_eq!(page.total(), 1);
        let entry = page.items().first().expect("one listing entry");
        assert_eq!(entry.live().id(), live.id());
        assert_eq!(entry.host().name().as_str(), "After School Tea Time");
    });
}

/// Re-accepting an invitation after joining fails without disturbing the
/// established membership.
#[test]
fn second_accept_leaves_membership_intact() {
    let rt = test_runtime();
    let backend = Backend::new();

    rt.block_on(async {
        let bassist = backend
            .seed_user("Azusa", Role::Artist { part: Part::Bass })
            .await;
        let singer = backend
            .seed_user("Yui", Role::Artist { part: Part::Vocal })
            .await;
        let band = backend.seed_group("Wakaba Girls").await;
        backend.seed_member(&band, &bassist).await;

        let membership = backend.membership_service();
        let invitation = membership
            .invite(InviteToGroupRequest::new(
                bassist.clone(),
                band.id(),
                singer.id(),
            ))
            .await
            .expect("invite issued");
        membership
            .accept_invitation(AcceptInvitationRequest::new(invitation.id(), singer.clone()))
            .await
            .expect("first accept");

        let second = membership
            .accept_invitation(AcceptInvitationRequest::new(invitation.id(), singer.clone()))
            .await;
        assert!(second.is_err(), "second accept must fail");
        assert!(
            backend
                .groups
                .is_member(band.id(), singer.id())
                .await
                .expect("membership readable"),
            "membership survives the rejected retry"
        );
    });
}

/// Fans are blocked from every artist-only operation and the blocks
/// leave no trace in storage.
#[test]
fn fan_role_gates_across_services() {
    let rt = test_runtime();
    let backend = Backend::new();

    rt.block_on(async {
        let fan = backend.seed_user("Nodoka", Role::Fan).await;
        let artist = backend
            .seed_user("Mugi", Role::Artist { part: Part::Keyboard })
            .await;
        let band = backend.seed_group("Light Music Club").await;
        backend.seed_member(&band, &artist).await;

        let invite = backend
            .membership_service()
            .invite(InviteToGroupRequest::new(fan.clone(), band.id(), artist.id()))
            .await;
        assert!(invite.is_err(), "fan cannot invite");

        let live = backend
            .live_service()
            .create_live(CreateLiveRequest::new(
                fan.clone(),
                band.id(),
                "Secret Show",
                Utc::now() + Duration::days(7),
            ))
            .await;
        assert!(live.is_err(), "fan cannot schedule a live");

        let post = backend
            .feed_service()
            .post(CreateFeedPostRequest::new(
                fan.clone(),
                band.id(),
                "New single out now!",
            ))
            .await;
        assert!(post.is_err(), "fan cannot post to the feed");

        assert_eq!(backend.lives.stored_count().expect("count"), 0);
        assert!(
            backend
                .groups
                .feed_posts(band.id())
                .expect("feed readable")
                .is_empty()
        );
        assert!(backend.notifier.published().expect("published").is_empty());
    });
}

/// Feed posts land in their group with the acting artist as author.
#[test]
fn member_artist_posts_to_the_group_feed() {
    let rt = test_runtime();
    let backend = Backend::new();

    rt.block_on(async {
        let artist = backend
            .seed_user("Sawako", Role::Artist { part: Part::Guitar })
            .await;
        let band = backend.seed_group("Death Devil").await;
        backend.seed_member(&band, &artist).await;

        let post = backend
            .feed_service()
            .post(CreateFeedPostRequest::new(
                artist.clone(),
                band.id(),
                "Reunion gig announced.",
            ))
            .await
            .expect("post created");
        assert_eq!(post.author(), artist.id());
        assert_eq!(post.group_id(), band.id());

        let feed = backend.groups.feed_posts(band.id()).expect("feed readable");
        assert_eq!(feed.len(), 1);
        assert_eq!(
            feed.first().expect("one post").body().as_str(),
            "Reunion gig announced."
        );
    });
}

//! Domain validation tests for users, roles, and follows.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::user::domain::{
    DeviceToken, Follow, Part, Role, User, UserDomainError, UserId, UserName,
};
use mockable::DefaultClock;
use serde_json::json;

#[test]
fn role_serialises_with_snake_case_tag() {
    let artist = Role::Artist { part: Part::Guitar };
    let serialised = serde_json::to_value(artist).expect("role serialises");
    assert_eq!(serialised, json!({"type": "artist", "part": "guitar"}));

    let fan = serde_json::to_value(Role::Fan).expect("role serialises");
    assert_eq!(fan, json!({"type": "fan"}));
}

#[test]
fn role_round_trips_through_serde() {
    let role = Role::Artist { part: Part::Drums };
    let text = serde_json::to_string(&role).expect("role serialises");
    let back: Role = serde_json::from_str(&text).expect("role deserialises");
    assert_eq!(back, role);
}

#[test]
fn artist_is_artist_and_fan_is_not() {
    assert!(Role::Artist { part: Part::Vocal }.is_artist());
    assert!(!Role::Fan.is_artist());
}

#[test]
fn role_parses_from_storage_representation() {
    assert_eq!(Role::try_from("fan").expect("fan parses"), Role::Fan);
    assert!(Role::try_from(" Artist ").expect("artist parses").is_artist());
    assert!(Role::try_from("roadie").is_err());
}

#[test]
fn part_storage_representation_is_stable() {
    assert_eq!(Part::Keyboard.as_str(), "keyboard");
    assert_eq!(Part::Other.as_str(), "other");
}

#[test]
fn user_name_rejects_blank_input() {
    assert_eq!(
        UserName::new("   ").expect_err("blank name rejected"),
        UserDomainError::EmptyUserName
    );
    let name = UserName::new("Haruka").expect("valid name");
    assert_eq!(name.as_str(), "Haruka");
}

#[test]
fn device_token_rejects_blank_input() {
    assert_eq!(
        DeviceToken::new("").expect_err("blank token rejected"),
        UserDomainError::EmptyDeviceToken
    );
    let token = DeviceToken::new("apns-abc123").expect("valid token");
    assert_eq!(token.as_str(), "apns-abc123");
}

#[test]
fn user_carries_identity_and_role() {
    let clock = DefaultClock;
    let name = UserName::new("Mio").expect("valid name");
    let user = User::new(name, Role::Artist { part: Part::Bass }, &clock);
    assert!(user.role().is_artist());
    assert_eq!(user.name().as_str(), "Mio");
}

#[test]
fn follow_rejects_self_follow() {
    let clock = DefaultClock;
    let user = UserId::new();
    assert_eq!(
        Follow::new(user, user, &clock).expect_err("self-follow rejected"),
        UserDomainError::SelfFollow(user)
    );
}

#[test]
fn follow_links_two_distinct_users() {
    let clock = DefaultClock;
    let follower = UserId::new();
    let followee = UserId::new();
    let follow = Follow::new(follower, followee, &clock).expect("valid follow");
    assert_eq!(follow.follower(), follower);
    assert_eq!(follow.followee(), followee);
}

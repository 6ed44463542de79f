//! Ordering, failure-deferral, and cancellation tests for
//! [`OrderedTaskGroup`].

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::sync::OrderedTaskGroup;
use std::time::Duration;
use tokio::time::sleep;

async fn delayed(value: &'static str, delay_ms: u64) -> Result<&'static str, String> {
    sleep(Duration::from_millis(delay_ms)).await;
    Ok(value)
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_group_yields_end_of_sequence_immediately() {
    let mut group: OrderedTaskGroup<u64, String> = OrderedTaskGroup::new();
    assert_eq!(group.pending(), 0);
    assert!(group.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn results_surface_in_submission_order_despite_completion_order() {
    let mut group = OrderedTaskGroup::new();
    group.submit(delayed("A", 300));
    group.submit(delayed("B", 10));
    group.submit(delayed("C", 100));
    assert_eq!(group.pending(), 3);

    let mut drained = Vec::new();
    while let Some(result) = group.next().await {
        drained.push(result.expect("all operations succeed"));
    }

    assert_eq!(drained, vec!["A", "B", "C"]);
    assert_eq!(group.pending(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn single_operation_round_trips() {
    let mut group = OrderedTaskGroup::new();
    group.submit(delayed("only", 5));
    let first = group.next().await.expect("one result pending");
    assert_eq!(first.expect("operation succeeds"), "only");
    assert!(group.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn submission_may_continue_while_consuming() {
    let mut group = OrderedTaskGroup::new();
    group.submit(delayed("first", 50));
    group.submit(delayed("second", 5));

    let first = group.next().await.expect("result for index 0");
    assert_eq!(first.expect("operation succeeds"), "first");

    // Later submissions pick up the next index even mid-drain.
    group.submit(delayed("third", 1));
    let second = group.next().await.expect("result for index 1");
    assert_eq!(second.expect("operation succeeds"), "second");
    let third = group.next().await.expect("result for index 2");
    assert_eq!(third.expect("operation succeeds"), "third");
    assert!(group.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn failure_is_deferred_to_its_index_position() {
    let mut group = OrderedTaskGroup::new();
    group.submit(delayed("ok-0", 80));
    group.submit(async {
        // Fails quickly, long before index 0 completes.
        Err("boom".to_owned())
    });
    group.submit(delayed("ok-2", 10));

    let first = group.next().await.expect("result for index 0");
    assert_eq!(first.expect("index 0 succeeds"), "ok-0");

    let second = group.next().await.expect("result for index 1");
    assert_eq!(second.expect_err("index 1 fails"), "boom");

    let third = group.next().await.expect("result for index 2");
    assert_eq!(third.expect("index 2 succeeds"), "ok-2");
    assert!(group.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn one_failure_does_not_cancel_siblings() {
    let mut group = OrderedTaskGroup::new();
    group.submit(async { Err("early failure".to_owned()) });
    group.submit(delayed("survivor", 30));

    let first = group.next().await.expect("result for index 0");
    assert!(first.is_err());
    let second = group.next().await.expect("result for index 1");
    assert_eq!(second.expect("sibling unaffected"), "survivor");
}

#[tokio::test(flavor = "multi_thread")]
async fn cancellation_terminates_the_sequence_without_deadlock() {
    let mut group: OrderedTaskGroup<&'static str, String> = OrderedTaskGroup::new();
    group.submit(delayed("never-delivered", 10_000));
    group.submit(delayed("also-dropped", 10_000));

    group.cancel();

    // Aborted slots must surface as sequence termination, not a hang.
    assert!(group.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn submission_after_cancellation_is_ignored() {
    let mut group: OrderedTaskGroup<&'static str, String> = OrderedTaskGroup::new();
    group.cancel();
    group.submit(delayed("ghost", 1));
    assert_eq!(group.pending(), 0);
    assert!(group.next().await.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn consuming_early_index_does_not_wait_for_later_ones() {
    let mut group = OrderedTaskGroup::new();
    group.submit(delayed("fast", 5));
    group.submit(delayed("slow", 5_000));

    // Index 0 must be deliverable long before index 1 completes.
    let first = tokio::time::timeout(Duration::from_secs(1), group.next())
        .await
        .expect("index 0 is not gated on index 1");
    assert_eq!(
        first.expect("result for index 0").expect("fast succeeds"),
        "fast"
    );

    group.cancel();
}

#[tokio::test(flavor = "multi_thread")]
async fn randomised_delays_preserve_submission_order() {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut group: OrderedTaskGroup<u64, String> = OrderedTaskGroup::new();
    let count = 32_u64;
    for index in 0..count {
        let delay = rng.gen_range(0..40);
        group.submit(async move {
            sleep(Duration::from_millis(delay)).await;
            Ok(index)
        });
    }

    let mut drained = Vec::new();
    while let Some(result) = group.next().await {
        drained.push(result.expect("all operations succeed"));
    }
    let expected: Vec<u64> = (0..count).collect();
    assert_eq!(drained, expected);
}

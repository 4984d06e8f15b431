#![cfg(feature = "async")]
//! Tests for element streams on the Tokio runtime.

use eqset::{Error, ExtendedSet, extended_set};
use futures::StreamExt;
use rstest::rstest;

#[rstest]
fn test_stream_requires_runtime() {
    let set = extended_set![1, 2, 3];
    assert_eq!(set.stream().err(), Some(Error::MissingRuntime));
}

#[tokio::test]
async fn test_stream_yields_snapshot() {
    let mut set: ExtendedSet<u32> = (0..50).collect();
    let elements = set.stream().expect("inside runtime");
    set.clear();

    let collected: ExtendedSet<u32> = elements.collect::<Vec<_>>().await.into_iter().collect();
    assert_eq!(collected, (0..50).collect::<ExtendedSet<u32>>());
}

#[tokio::test]
async fn test_partial_consumption_yields_members() {
    let set: ExtendedSet<String> = (0..100).map(|value| value.to_string()).collect();
    let first_three: Vec<String> = set
        .stream()
        .expect("inside runtime")
        .take(3)
        .collect()
        .await;
    assert_eq!(first_three.len(), 3);
    assert!(first_three.iter().all(|value| set.has_element(value)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_streams_are_independent() {
    let set: ExtendedSet<i32> = (0..20).collect();
    let (left, right) = tokio::join!(
        set.stream().expect("inside runtime").collect::<Vec<_>>(),
        set.stream().expect("inside runtime").collect::<Vec<_>>(),
    );
    assert_eq!(left.len(), 20);
    assert_eq!(right.len(), 20);
}

#[tokio::test]
async fn test_dropped_stream_ends_producer_task() {
    let metrics = tokio::runtime::Handle::current().metrics();
    let alive_before = metrics.num_alive_tasks();

    let set: ExtendedSet<u32> = (0..1000).collect();
    let mut elements = Box::pin(set.stream().expect("inside runtime"));
    assert!(elements.next().await.is_some());
    assert_eq!(metrics.num_alive_tasks(), alive_before + 1);

    drop(elements);
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
    assert_eq!(metrics.num_alive_tasks(), alive_before);
}

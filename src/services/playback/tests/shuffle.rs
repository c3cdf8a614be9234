use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::services::playback::shuffle::ShuffleOrder;
use crate::services::playback::types::Direction;

use super::fake::FakeMediaHandle;
use super::track;

#[test]
fn generated_order_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    let order = ShuffleOrder::generate(8, &mut rng);

    let mut visited = BTreeSet::new();
    let mut index = Some(0);
    for _ in 0..8 {
        index = order.next_after(index);
        visited.insert(index.unwrap());
    }

    assert_eq!(order.len(), 8);
    assert_eq!(visited, (0..8).collect::<BTreeSet<_>>());
}

#[test]
fn next_and_previous_retrace_the_same_path() {
    let mut rng = StdRng::seed_from_u64(42);
    let order = ShuffleOrder::generate(5, &mut rng);

    let start = Some(3);
    let forward = order.next_after(start);
    assert_eq!(order.previous_before(forward), start);
}

#[test]
fn cyclic_walk_returns_to_the_starting_index() {
    let mut rng = StdRng::seed_from_u64(99);
    let order = ShuffleOrder::generate(6, &mut rng);

    let mut index = Some(2);
    for _ in 0..6 {
        index = order.next_after(index);
    }

    assert_eq!(index, Some(2));
}

#[test]
fn stale_index_falls_back_to_the_permutation_head() {
    let mut rng = StdRng::seed_from_u64(1);
    let order = ShuffleOrder::generate(4, &mut rng);

    let from_stale = order.next_after(Some(17));
    let from_none = order.next_after(None);

    assert_eq!(from_stale, from_none);
    assert!(from_stale.unwrap() < 4);
}

#[test]
fn empty_order_yields_nothing() {
    let order = ShuffleOrder::default();

    assert_eq!(order.next_after(Some(0)), None);
    assert_eq!(order.previous_before(None), None);
}

mod session_integration {
    use std::sync::Arc;

    use super::*;
    use crate::config::PlayerConfig;
    use crate::services::playback::catalog::TrackCatalog;
    use crate::services::playback::handle::MediaHandle;
    use crate::services::playback::session::PlaybackSession;

    #[tokio::test]
    async fn shuffled_advance_visits_every_track_once_per_cycle() {
        let fake = FakeMediaHandle::new();
        let handle: Arc<dyn MediaHandle> = fake.clone();
        let session = PlaybackSession::new(handle, PlayerConfig::default()).await;
        session
            .set_catalog(TrackCatalog::from_tracks(
                (0..5).map(|i| track(&format!("t{i}"), &format!("Track {i}"), None)),
            ))
            .await;

        session.select_track(0).await.unwrap();
        session.set_shuffle_enabled(true);

        let start = session.state.current_index.get().unwrap();
        let mut visited = BTreeSet::new();
        visited.insert(start);
        for _ in 0..4 {
            session.advance(Direction::Next).await.unwrap();
            visited.insert(session.state.current_index.get().unwrap());
        }

        assert_eq!(visited, (0..5).collect::<BTreeSet<_>>());

        session.advance(Direction::Next).await.unwrap();
        assert_eq!(session.state.current_index.get(), Some(start));
    }

    #[tokio::test]
    async fn shuffled_previous_undoes_a_shuffled_next() {
        let fake = FakeMediaHandle::new();
        let handle: Arc<dyn MediaHandle> = fake.clone();
        let session = PlaybackSession::new(handle, PlayerConfig::default()).await;
        session
            .set_catalog(TrackCatalog::from_tracks(
                (0..4).map(|i| track(&format!("t{i}"), &format!("Track {i}"), None)),
            ))
            .await;

        session.select_track(1).await.unwrap();
        session.set_shuffle_enabled(true);

        session.advance(Direction::Next).await.unwrap();
        session.advance(Direction::Previous).await.unwrap();

        assert_eq!(session.state.current_index.get(), Some(1));
    }
}

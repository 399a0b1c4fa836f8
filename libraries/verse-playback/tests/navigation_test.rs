//! Queue navigation through the player
//!
//! Covers activation publishing and wraparound over the injected store.


use test_helpers::rig;
use verse_core::TrackId;
use verse_playback::PlayerEvent;

#[test]
fn next_activates_following_track() {
    let mut rig = rig(&["a", "b", "c"], Some("b"), 180);

    assert_eq!(rig.player.next(), Some(TrackId::new("c")));
    assert_eq!(rig.store.borrow().active, Some(TrackId::new("c")));
    assert_eq!(rig.store.borrow().activations, vec![TrackId::new("c")]);

    let events = rig.player.take_events();
    assert!(events.contains(&PlayerEvent::TrackActivated {
        track_id: TrackId::new("c")
    }));
}

#[test]
fn previous_activates_preceding_track() {
    let mut rig = rig(&["a", "b", "c"], Some("b"), 180);

    assert_eq!(rig.player.previous(), Some(TrackId::new("a")));
    assert_eq!(rig.store.borrow().active, Some(TrackId::new("a")));
}

#[test]
fn next_wraps_from_last_to_first() {
    let mut rig = rig(&["a", "b", "c"], Some("c"), 180);

    assert_eq!(rig.player.next(), Some(TrackId::new("a")));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut rig = rig(&["a", "b", "c"], Some("a"), 180);

    assert_eq!(rig.player.previous(), Some(TrackId::new("c")));
}

#[test]
fn next_then_previous_returns_to_start() {
    let mut rig = rig(&["a", "b", "c"], Some("b"), 180);

    rig.player.next();
    rig.player.previous();

    assert_eq!(rig.store.borrow().active, Some(TrackId::new("b")));
}

#[test]
fn empty_queue_navigation_is_noop() {
    let mut rig = rig(&[], None, 180);

    assert_eq!(rig.player.next(), None);
    assert_eq!(rig.player.previous(), None);

    assert!(rig.store.borrow().activations.is_empty());
    assert!(rig.player.take_events().is_empty());
}

#[test]
fn stale_active_id_restarts_queue_forward() {
    // The active id was removed from the sequence behind our back
    let mut rig = rig(&["a", "b", "c"], Some("gone"), 180);
    assert_eq!(rig.player.next(), Some(TrackId::new("a")));
}

#[test]
fn stale_active_id_restarts_queue_backward() {
    let mut rig = rig(&["a", "b", "c"], Some("gone"), 180);
    assert_eq!(rig.player.previous(), Some(TrackId::new("c")));
}

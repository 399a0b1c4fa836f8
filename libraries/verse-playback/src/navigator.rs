//! Queue navigation
//!
//! Computes next/previous track ids over the externally-owned id sequence.
//! Navigation wraps around at both ends; the sequence itself is never
//! mutated here.

use verse_core::TrackId;

/// Next id in sequence order
///
/// Wraps to the first element past the end. An active id missing from the
/// sequence also yields the first element, so a stale active id restarts the
/// queue instead of stalling it. Empty sequence returns `None`.
pub(crate) fn next_id(ids: &[TrackId], active: Option<&TrackId>) -> Option<TrackId> {
    if ids.is_empty() {
        return None;
    }

    let index = active.and_then(|id| ids.iter().position(|candidate| candidate == id));

    let next = match index {
        Some(i) if i + 1 < ids.len() => i + 1,
        _ => 0, // Past the end (or active unknown): wrap to the first
    };

    Some(ids[next].clone())
}

/// Previous id in sequence order
///
/// Wraps to the last element before the start; an active id missing from the
/// sequence yields the last element. Empty sequence returns `None`.
pub(crate) fn previous_id(ids: &[TrackId], active: Option<&TrackId>) -> Option<TrackId> {
    if ids.is_empty() {
        return None;
    }

    let index = active.and_then(|id| ids.iter().position(|candidate| candidate == id));

    let previous = match index {
        Some(i) if i > 0 => i - 1,
        _ => ids.len() - 1, // Before the start (or active unknown): wrap to the last
    };

    Some(ids[previous].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<TrackId> {
        names.iter().copied().map(TrackId::new).collect()
    }

    #[test]
    fn next_returns_following_id() {
        let queue = ids(&["a", "b", "c"]);
        let next = next_id(&queue, Some(&TrackId::new("b"))).unwrap();
        assert_eq!(next, TrackId::new("c"));
    }

    #[test]
    fn previous_returns_preceding_id() {
        let queue = ids(&["a", "b", "c"]);
        let previous = previous_id(&queue, Some(&TrackId::new("b"))).unwrap();
        assert_eq!(previous, TrackId::new("a"));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let queue = ids(&["a", "b", "c"]);
        let next = next_id(&queue, Some(&TrackId::new("c"))).unwrap();
        assert_eq!(next, TrackId::new("a"));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let queue = ids(&["a", "b", "c"]);
        let previous = previous_id(&queue, Some(&TrackId::new("a"))).unwrap();
        assert_eq!(previous, TrackId::new("c"));
    }

    #[test]
    fn unknown_active_wraps() {
        let queue = ids(&["a", "b", "c"]);

        let next = next_id(&queue, Some(&TrackId::new("gone"))).unwrap();
        assert_eq!(next, TrackId::new("a"));

        let previous = previous_id(&queue, Some(&TrackId::new("gone"))).unwrap();
        assert_eq!(previous, TrackId::new("c"));
    }

    #[test]
    fn no_active_wraps() {
        let queue = ids(&["a", "b"]);
        assert_eq!(next_id(&queue, None), Some(TrackId::new("a")));
        assert_eq!(previous_id(&queue, None), Some(TrackId::new("b")));
    }

    #[test]
    fn empty_sequence_yields_nothing() {
        assert_eq!(next_id(&[], Some(&TrackId::new("a"))), None);
        assert_eq!(previous_id(&[], None), None);
    }

    #[test]
    fn single_element_wraps_onto_itself() {
        let queue = ids(&["only"]);
        assert_eq!(
            next_id(&queue, Some(&TrackId::new("only"))),
            Some(TrackId::new("only"))
        );
        assert_eq!(
            previous_id(&queue, Some(&TrackId::new("only"))),
            Some(TrackId::new("only"))
        );
    }
}

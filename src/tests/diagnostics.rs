//! Diagnostic hooks report the invariants of every reachable state.

use crate::AvlMap;

#[test]
fn empty_map_is_valid() {
    let map: AvlMap<i32, i32> = AvlMap::new();
    assert!(map.is_balanced());
    assert!(map.is_ordered());
    assert!(map.heights_consistent());
}

#[test]
fn valid_through_growth_and_shrink() {
    let mut map = AvlMap::new();
    for i in 0..256 {
        map.insert((i * 37) % 256, i);
        assert!(map.is_balanced(), "after inserting #{i}");
        assert!(map.is_ordered(), "after inserting #{i}");
        assert!(map.heights_consistent(), "after inserting #{i}");
    }
    for i in 0..256 {
        map.remove(&((i * 101) % 256));
        assert!(map.is_balanced(), "after removing #{i}");
        assert!(map.is_ordered(), "after removing #{i}");
        assert!(map.heights_consistent(), "after removing #{i}");
    }
    assert!(map.is_empty());
}

#[test]
fn valid_while_slots_are_reused() {
    let mut map = AvlMap::new();
    for i in 0..64 {
        map.insert(i, i);
    }
    for round in 0..8 {
        for i in (round..64).step_by(8) {
            map.remove(&i);
        }
        for i in (round..64).step_by(8) {
            map.insert(i + 64 * (round + 1), i);
        }
        assert!(map.is_balanced(), "round {round}");
        assert!(map.is_ordered(), "round {round}");
        assert!(map.heights_consistent(), "round {round}");
    }
    assert_eq!(map.keys().len(), 64);
    assert_eq!(map.arena_len(), 64);
}

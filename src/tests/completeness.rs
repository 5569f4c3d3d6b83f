//! Completeness tests: insert/update/remove must not lose data.

use crate::AvlMap;

// ---------------------------------------------------------------------------
// insert must return the old value when updating
// ---------------------------------------------------------------------------

#[test]
fn insert_new_returns_none() {
    let mut map = AvlMap::new();
    let old = map.insert("key", 42);
    assert_eq!(old, None, "inserting new key should return None");
}

#[test]
fn insert_update_returns_old_value() {
    let mut map = AvlMap::new();
    map.insert("key", 1);
    let old = map.insert("key", 2);
    assert_eq!(old, Some(1), "updating should return the previous value");
}

#[test]
fn insert_update_chain() {
    let mut map = AvlMap::new();
    assert_eq!(map.insert("k", 10), None);
    assert_eq!(map.insert("k", 20), Some(10));
    assert_eq!(map.insert("k", 30), Some(20));
    assert_eq!(map.get(&"k"), Some(&30));
    assert_eq!(map.len(), 1);
}

/// Re-inserting an equal key keeps the originally stored key.
#[test]
fn insert_update_keeps_original_key() {
    #[derive(Debug, Clone)]
    struct Tagged(u32, &'static str);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let mut map = AvlMap::new();
    map.insert(Tagged(1, "first"), 'a');
    map.insert(Tagged(1, "second"), 'b');
    let (key, value) = map.get_key_value(&Tagged(1, "")).expect("key present");
    assert_eq!(key.1, "first");
    assert_eq!(*value, 'b');
}

// ---------------------------------------------------------------------------
// update must return the replaced value and never insert
// ---------------------------------------------------------------------------

#[test]
fn update_chain_returns_each_old_value() {
    let mut map = AvlMap::new();
    map.insert(7, "a");
    assert_eq!(map.update(&7, "b"), Ok("a"));
    assert_eq!(map.update(&7, "c"), Ok("b"));
    assert_eq!(map.get(&7), Some(&"c"));
}

#[test]
fn update_deep_key_among_many() {
    let mut map = AvlMap::new();
    for i in 0..100 {
        map.insert(i, i);
    }
    let height = map.height();
    for i in 0..100 {
        assert_eq!(map.update(&i, i + 1000), Ok(i));
    }
    assert_eq!(map.height(), height, "update must not restructure");
    for i in 0..100 {
        assert_eq!(map.get(&i), Some(&(i + 1000)));
    }
    assert!(map.is_balanced());
}

// ---------------------------------------------------------------------------
// remove must return the removed value
// ---------------------------------------------------------------------------

#[test]
fn remove_existing_returns_value() {
    let mut map = AvlMap::new();
    map.insert("a", 100);
    let removed = map.remove(&"a");
    assert_eq!(removed, Some(100), "remove should return the removed value");
}

#[test]
fn remove_missing_returns_none() {
    let mut map = AvlMap::new();
    map.insert("a", 1);
    let removed = map.remove(&"z");
    assert_eq!(removed, None, "removing missing key should return None");
}

#[test]
fn remove_returns_correct_value_among_many() {
    let mut map = AvlMap::new();
    for i in 0..100 {
        map.insert(i, i * 10);
    }
    assert_eq!(map.remove(&50), Some(500));
    assert_eq!(map.remove(&50), None);
    assert_eq!(map.len(), 99);
}

#[test]
fn remove_after_update_returns_latest_value() {
    let mut map = AvlMap::new();
    for i in 0..20 {
        map.insert(i, i);
    }
    map.update(&10, 99).expect("key present");
    assert_eq!(map.remove(&10), Some(99));
}

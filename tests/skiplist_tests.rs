// Skip list: insert, lookup and ordered iteration.
// The list is generic over `K: Ord`; string keys keep these tests readable,
// the item key ordering is covered in item_key_tests.rs.

use item_index::iterator::StorageIterator;
use item_index::registry::skiplist::SkipList;

// =============================================================================
// Test 1: Insert and lookup
// =============================================================================
#[test]
fn insert_one_key_get_it_back() {
    let mut sl = SkipList::new();
    sl.insert("hello", "world");
    assert_eq!(sl.get(&"hello"), Some(&"world"));
}

#[test]
fn insert_two_keys_out_of_order() {
    let mut sl = SkipList::new();
    sl.insert("b", 2);
    sl.insert("a", 1);
    assert_eq!(sl.get(&"a"), Some(&1));
    assert_eq!(sl.get(&"b"), Some(&2));
}

// =============================================================================
// Test 2: Overwrite returns the previous value
// =============================================================================
#[test]
fn insert_duplicate_key_overwrites() {
    let mut sl = SkipList::new();
    assert_eq!(sl.insert("key", "old"), None);
    assert_eq!(sl.insert("key", "new"), Some("old"));
    assert_eq!(sl.get(&"key"), Some(&"new"));
    assert_eq!(sl.len(), 1);
}

#[test]
fn get_mut_updates_in_place() {
    let mut sl = SkipList::new();
    sl.insert(10u32, 1u64);
    if let Some(v) = sl.get_mut(&10) {
        *v += 41;
    }
    assert_eq!(sl.get(&10), Some(&42));
    assert!(sl.get_mut(&11).is_none());
}

#[test]
fn get_nonexistent_key_returns_none() {
    let mut sl = SkipList::new();
    sl.insert("a", 1);
    assert_eq!(sl.get(&"z"), None);
}

// =============================================================================
// Test 3: Many keys
// =============================================================================
#[test]
fn insert_1000_keys_get_all_back() {
    let mut sl = SkipList::new();
    // Multiplying by a unit mod 1000 shuffles the insertion order.
    for i in 0..1000u32 {
        let k = (i * 7919) % 1000;
        sl.insert(k, k * 2);
    }
    for k in 0..1000u32 {
        assert_eq!(sl.get(&k), Some(&(k * 2)));
    }
    assert_eq!(sl.len(), 1000);
}

#[test]
fn empty_skiplist_behavior() {
    let sl: SkipList<u32, u32> = SkipList::new();
    assert_eq!(sl.get(&1), None);
    assert_eq!(sl.len(), 0);
    assert!(sl.is_empty());
    assert!(!sl.iter().is_valid());
}

// =============================================================================
// Test 4: Iteration is sorted
// =============================================================================
#[test]
fn iterator_returns_sorted_order() {
    let mut sl = SkipList::new();
    sl.insert("charlie", 3);
    sl.insert("alpha", 1);
    sl.insert("bravo", 2);

    let mut iter = sl.iter();
    assert!(iter.is_valid());
    assert_eq!(*iter.key(), "alpha");
    assert_eq!(*iter.value(), 1);

    iter.next();
    assert_eq!(*iter.key(), "bravo");

    iter.next();
    assert_eq!(*iter.key(), "charlie");

    iter.next();
    assert!(!iter.is_valid());
}

#[test]
fn iterator_collect_all_entries() {
    let mut sl = SkipList::new();
    for i in (0..100u32).rev() {
        sl.insert(i, i + 1000);
    }

    let mut iter = sl.iter();
    let mut collected = Vec::new();
    while let Some((k, v)) = iter.entry() {
        collected.push((*k, *v));
        iter.next();
    }

    let expected: Vec<(u32, u32)> = (0..100).map(|i| (i, i + 1000)).collect();
    assert_eq!(collected, expected);
}

// =============================================================================
// Test 5: Seek
// =============================================================================
#[test]
fn iterator_seek_to_existing_key() {
    let mut sl = SkipList::new();
    sl.insert("a", 1);
    sl.insert("c", 3);
    sl.insert("e", 5);

    let mut iter = sl.iter();
    iter.seek(&"c");
    assert!(iter.is_valid());
    assert_eq!(*iter.key(), "c");
    assert_eq!(*iter.value(), 3);
}

#[test]
fn iterator_seek_to_nonexistent_key() {
    let mut sl = SkipList::new();
    sl.insert("a", 1);
    sl.insert("c", 3);
    sl.insert("e", 5);

    let mut iter = sl.iter();
    iter.seek(&"b"); // lands on "c"
    assert_eq!(*iter.key(), "c");
}

#[test]
fn iterator_seek_past_end() {
    let mut sl = SkipList::new();
    sl.insert("a", 1);
    sl.insert("b", 2);

    let mut iter = sl.iter();
    iter.seek(&"z");
    assert!(!iter.is_valid());
}

#[test]
fn iterator_seek_to_beginning() {
    let mut sl = SkipList::new();
    sl.insert("b", 2);
    sl.insert("c", 3);

    let mut iter = sl.iter();
    iter.seek(&"a");
    assert_eq!(*iter.key(), "b");
}

use pretty_assertions::assert_eq;

use super::arena::{Arena, Idx};

#[test]
fn test_alloc_returns_sequential_handles() {
    let mut arena = Arena::new();
    let a = arena.alloc("a");
    let b = arena.alloc("b");

    assert_eq!(a.raw(), 0);
    assert_eq!(b.raw(), 1);
    assert_eq!(arena[a], "a");
    assert_eq!(arena[b], "b");
}

#[test]
fn test_rollback_discards_later_allocations() {
    let mut arena = Arena::with_capacity(4);
    arena.alloc(1);
    let mark = arena.checkpoint();
    let dropped = arena.alloc(2);
    arena.alloc(3);

    arena.rollback(mark);

    assert_eq!(arena.len(), 1);
    assert_eq!(arena.checkpoint(), mark);
    assert!(arena.get(dropped).is_none());
}

#[test]
fn test_rollback_to_current_mark_is_noop() {
    let mut arena = Arena::new();
    arena.alloc('x');
    let mark = arena.checkpoint();

    arena.rollback(mark);

    assert_eq!(arena.as_slice(), &['x']);
}

#[test]
#[should_panic]
fn test_rollback_past_end_panics() {
    let mut arena = Arena::new();
    arena.alloc(1);
    arena.alloc(2);
    let mark = arena.checkpoint();
    arena.rollback(Arena::<i32>::new().checkpoint());

    arena.rollback(mark);
}

#[test]
fn test_since_and_extend() {
    let mut scratch = Arena::new();
    scratch.alloc(7u32);
    let mark = scratch.checkpoint();
    scratch.alloc(8);
    scratch.alloc(9);

    let mut lists = Arena::new();
    let start = lists.extend_from_slice(scratch.since(mark));

    assert_eq!(start.position(), 0);
    assert_eq!(lists.as_slice(), &[8, 9]);
}

#[test]
fn test_handles_compare_by_index() {
    let a: Idx<String> = Idx::from_raw(3);
    let b: Idx<String> = Idx::from_raw(3);

    assert_eq!(a, b);
    assert_eq!(format!("{:?}", a), "Idx(3)");
    assert_eq!(a.cast::<u8>().index(), 3);
}

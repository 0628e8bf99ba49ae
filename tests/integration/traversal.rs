//! Integration tests for building lists and traversing them

use intlist::{IntList, Node, checked_sum, sum, write_to};
use proptest::prelude::*;

fn printed(front: Option<&Node>) -> String {
    let mut out = Vec::new();
    write_to(front, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_hand_linked_and_collected_lists_match() {
    let third = Box::new(Node::new(30));
    let second = Box::new(Node::with_next(20, Some(third)));
    let linked = IntList::from_head(Some(Box::new(Node::with_next(10, Some(second)))));
    let collected: IntList = [10, 20, 30].into_iter().collect();

    assert_eq!(linked, collected);
    assert_eq!(printed(linked.head()), printed(collected.head()));
}

#[test]
fn test_free_functions_on_empty_chain() {
    assert_eq!(printed(None), "\n");
    assert_eq!(sum(None), 0);
    assert_eq!(checked_sum(None), Ok(0));
}

#[test]
fn test_traversal_from_middle_node() {
    let list = IntList::from(vec![10, 20, 30]);
    let middle = list.head().and_then(Node::next);

    assert_eq!(sum(middle), 50);
    assert_eq!(printed(middle), "A node: 20\tA node: 30\t\n");
}

#[test]
fn test_repeated_traversals_are_stable() {
    let mut list = IntList::new();
    list.push_back(42);
    list.push_back(9999);

    let first = (printed(list.head()), list.sum());
    let second = (printed(list.head()), list.sum());
    assert_eq!(first, second);
    assert_eq!(first.1, 10041);
}

#[test]
fn test_shared_read_only_across_threads() {
    let list = IntList::from(vec![1, 2, 3, 4]);

    let sums: Vec<i32> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| list.sum())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sums, vec![10; 4]);
}

proptest! {
    #[test]
    fn sum_matches_independent_reference(values in prop::collection::vec(-100_000i32..100_000, 0..128)) {
        let list: IntList = values.iter().copied().collect();
        prop_assert_eq!(list.sum(), values.iter().sum::<i32>());
        prop_assert_eq!(list.len(), values.len());
    }
}

use gridmind::{Error, MinPriorityQueue};

#[test]
fn decreased_priority_wins_the_race() {
    // insert(x,5), insert(y,3), update(x,1) must pop x before y.
    let mut queue = MinPriorityQueue::new();
    queue.insert("x", 5.0);
    queue.insert("y", 3.0);
    queue.update("x", 1.0);

    assert_eq!(queue.pop_min().unwrap(), "x");
    assert_eq!(queue.pop_min().unwrap(), "y");
    assert!(queue.is_empty());
}

#[test]
fn raising_a_priority_never_changes_pop_order() {
    let mut queue = MinPriorityQueue::new();
    queue.insert("a", 1.0);
    queue.insert("b", 2.0);
    queue.update("b", 50.0);
    queue.update("b", 2.0);

    assert_eq!(queue.pop_min().unwrap(), "a");
    assert_eq!(queue.pop_min().unwrap(), "b");
}

#[test]
fn items_can_be_reinserted_after_popping() {
    let mut queue = MinPriorityQueue::new();
    queue.insert("a", 5.0);
    assert_eq!(queue.pop_min().unwrap(), "a");

    assert!(
        queue.insert("a", 2.0),
        "a popped item is no longer present and may be inserted again"
    );
    assert_eq!(queue.pop_min().unwrap(), "a");
}

#[test]
fn interleaved_operations_keep_live_count_consistent() {
    let mut queue = MinPriorityQueue::new();
    queue.insert(1, 10.0);
    queue.insert(2, 20.0);
    queue.insert(3, 30.0);
    queue.update(3, 5.0);
    queue.update(2, 1.0);
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.pop_min().unwrap(), 2);
    assert_eq!(queue.pop_min().unwrap(), 3);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.pop_min().unwrap(), 1);

    assert!(queue.is_empty());
    assert!(matches!(queue.pop_min(), Err(Error::EmptyContainer)));
}

#[test]
fn every_popped_item_is_live() {
    // Churn one item through many updates; the stale entries must never
    // surface, and each item must pop exactly once.
    let mut queue = MinPriorityQueue::new();
    for item in 0..20 {
        queue.insert(item, 100.0 + item as f64);
    }
    for round in 0..5 {
        for item in 0..20 {
            queue.update(item, (100 - round * 10 + item) as f64);
        }
    }

    let mut popped = Vec::new();
    while let Ok(item) = queue.pop_min() {
        popped.push(item);
    }

    assert_eq!(popped.len(), 20, "each live item pops exactly once");
    let sorted = {
        let mut copy = popped.clone();
        copy.sort_unstable();
        copy
    };
    assert_eq!(popped, sorted, "final priorities are ascending in item order");
}

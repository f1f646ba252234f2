//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations, replay them against a
//! plain sorted `Vec` model, and verify that the queue invariants hold after
//! every step.

use proptest::prelude::*;
use rb_priority_queue::{ArenaQueue, ConditionalPop, NodeKey, TieBreak};

/// Test that peek always returns the highest live priority
fn test_push_pop_invariant(
    tie_break: TieBreak,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut queue = ArenaQueue::with_tie_break(tie_break);
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !queue.is_empty() {
            let (priority, _item) = queue.pop().unwrap();
            let pos = inserted.iter().position(|&p| p == priority).unwrap();
            inserted.remove(pos);
        } else {
            queue.push(value, value);
            inserted.push(value);
        }

        let expected_max = inserted.iter().max();
        prop_assert_eq!(queue.peek().map(|(p, _)| p), expected_max);
        prop_assert_eq!(queue.validate(), Ok(()));
    }

    Ok(())
}

/// Test that popping everything yields non-increasing priorities
fn test_pop_order_invariant(tie_break: TieBreak, values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue = ArenaQueue::with_tie_break(tie_break);
    for val in &values {
        queue.push(*val, *val);
    }

    let mut popped = Vec::new();
    while let Some((priority, _item)) = queue.pop() {
        popped.push(priority);
    }

    let mut expected = values;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(popped, expected);

    Ok(())
}

/// Test that equal priorities come out in the order the tie-break promises
fn test_tie_order_invariant(tie_break: TieBreak, values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue = ArenaQueue::with_tie_break(tie_break);
    for (seq, val) in values.iter().enumerate() {
        queue.push(*val, seq);
    }

    let mut last: Option<(i32, usize)> = None;
    while let Some((priority, seq)) = queue.pop() {
        if let Some((last_priority, last_seq)) = last {
            if last_priority == priority {
                match tie_break {
                    TieBreak::Lifo => prop_assert!(seq < last_seq),
                    TieBreak::Fifo => prop_assert!(seq > last_seq),
                }
            }
        }
        last = Some((priority, seq));
    }

    Ok(())
}

/// Test len(), is_empty() and the reachable node count
fn test_len_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut queue = ArenaQueue::default();
    let mut expected_len = 0;

    for (should_pop, value) in ops {
        if should_pop && !queue.is_empty() {
            queue.pop();
            expected_len -= 1;
        } else {
            queue.push(value, value);
            expected_len += 1;
        }

        prop_assert_eq!(queue.len(), expected_len);
        prop_assert_eq!(queue.is_empty(), expected_len == 0);
        prop_assert_eq!(queue.is_not_empty(), expected_len != 0);
        prop_assert_eq!(queue.iter().count(), expected_len);
    }

    Ok(())
}

/// Test that pop_max_if pops exactly when the predicate accepts
fn test_pop_if_invariant(
    values: Vec<i32>,
    thresholds: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut queue = ArenaQueue::default();
    let mut live: Vec<i32> = Vec::new();
    for val in values {
        queue.push(val, ());
        live.push(val);
    }

    for threshold in thresholds {
        let before: Option<NodeKey> = queue.peek_max();
        let mut calls = 0;
        let outcome = queue.pop_max_if(|arena, key| {
            calls += 1;
            *arena.priority(key) >= threshold
        });

        match (before, outcome) {
            (None, None) => prop_assert_eq!(calls, 0),
            (Some(max), Some(ConditionalPop::Popped(node))) => {
                prop_assert_eq!(calls, 1);
                prop_assert_eq!(max, node);
                let priority = *queue.ops().priority(node);
                prop_assert!(priority >= threshold);
                let pos = live.iter().position(|&p| p == priority).unwrap();
                live.remove(pos);
            }
            (Some(max), Some(ConditionalPop::Kept(node))) => {
                prop_assert_eq!(calls, 1);
                prop_assert_eq!(max, node);
                prop_assert!(*queue.ops().priority(node) < threshold);
                prop_assert_eq!(queue.peek_max(), Some(node));
            }
            (before, outcome) => {
                prop_assert!(false, "peek {:?} but pop_max_if gave {:?}", before, outcome);
            }
        }

        prop_assert_eq!(queue.len(), live.len());
        prop_assert_eq!(queue.validate(), Ok(()));
    }

    Ok(())
}

/// Test clear followed by reuse
fn test_clear_invariant(first: Vec<i32>, second: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue = ArenaQueue::default();
    for val in first {
        queue.push(val, val);
    }

    queue.clear();
    prop_assert!(queue.is_empty());
    prop_assert_eq!(queue.peek_max(), None);
    prop_assert_eq!(queue.bst_root(), None);

    for val in &second {
        queue.push(*val, *val);
    }
    prop_assert_eq!(queue.peek().map(|(p, _)| *p), second.iter().max().copied());
    prop_assert_eq!(queue.validate(), Ok(()));

    Ok(())
}

proptest! {
    #[test]
    fn test_lifo_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant(TieBreak::Lifo, ops)?;
    }

    #[test]
    fn test_fifo_push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant(TieBreak::Fifo, ops)?;
    }

    #[test]
    fn test_lifo_pop_order_invariant(values in prop::collection::vec(-100i32..100, 1..100)) {
        test_pop_order_invariant(TieBreak::Lifo, values)?;
    }

    #[test]
    fn test_fifo_pop_order_invariant(values in prop::collection::vec(-100i32..100, 1..100)) {
        test_pop_order_invariant(TieBreak::Fifo, values)?;
    }

    #[test]
    fn test_lifo_tie_order_invariant(values in prop::collection::vec(0i32..5, 1..60)) {
        test_tie_order_invariant(TieBreak::Lifo, values)?;
    }

    #[test]
    fn test_fifo_tie_order_invariant(values in prop::collection::vec(0i32..5, 1..60)) {
        test_tie_order_invariant(TieBreak::Fifo, values)?;
    }

    #[test]
    fn test_queue_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant(ops)?;
    }

    #[test]
    fn test_queue_pop_if_invariant(
        values in prop::collection::vec(-100i32..100, 0..50),
        thresholds in prop::collection::vec(-100i32..100, 0..60)
    ) {
        test_pop_if_invariant(values, thresholds)?;
    }

    #[test]
    fn test_queue_clear_invariant(
        first in prop::collection::vec(-100i32..100, 0..50),
        second in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_clear_invariant(first, second)?;
    }
}

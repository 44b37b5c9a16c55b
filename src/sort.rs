//! Merge sort over the owned node chain.
//!
//! Variables:
//!   chain : Option<Box<Node>>  — detached list being sorted
//!   N     : usize              — nodes in the chain
//!
//! Equations:
//!   merge_sort(chain, N): split at N/2 by count, sort halves, merge  O(N log N)
//!   merge(a, b): repeatedly take the smaller head, ties from a (stable)
//!   recursion depth = ceil(log2 N) — only the split recurses
//!   nodes are relinked, never allocated or freed

use crate::queue::{Link, Node};

pub(crate) fn merge_sort(mut chain: Link, len: usize) -> Link {
    if len < 2 {
        return chain;
    }
    let mid = len / 2;
    let right = match chain.as_deref_mut() {
        Some(first) => split_after(first, mid),
        None => return chain,
    };
    let left = merge_sort(chain, mid);
    let right = merge_sort(right, len - mid);
    merge(left, right)
}

/// Detach and return the chain following the first `count` nodes.
fn split_after(first: &mut Node, count: usize) -> Link {
    let mut cur = first;
    for _ in 1..count {
        if cur.next.is_none() {
            break;
        }
        cur = cur.next.as_deref_mut().unwrap();
    }
    cur.next.take()
}

fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged: Link = None;
    let mut cursor = &mut merged;

    loop {
        let take_left = match (left.as_deref(), right.as_deref()) {
            (Some(l), Some(r)) => l.value <= r.value,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        cursor = &mut cursor.insert(node).next;
    }
    merged
}

//! Singly-linked FIFO/LIFO queue of owned strings.
//!
//! Variables:
//!   head : Option<Box<Node>>  — owning pointer to first node, None if empty
//!   tail : *mut Node          — non-owning pointer to last node, null if empty
//!   len  : usize              — number of nodes
//!
//! Equations:
//!   push_front(s): new.next = head,  head = new                O(1)
//!   push_back(s):  tail.next = new,  tail = new                O(1)
//!   pop_front():   head = head.next, N' = N-1                  O(1)
//!   reverse():     flip every next link, swap head/tail labels O(N)
//!   sort():        relink chain into ascending order           O(N log N)
//!   empty  iff  head == None  iff  tail == null  iff  N == 0

use std::ptr;

use crate::error::QueueError;
use crate::sort;

pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) next: Link,
}

pub(crate) type Link = Option<Box<Node>>;

pub struct StrQueue {
    pub(crate) head: Link,
    pub(crate) tail: *mut Node,
    pub(crate) len: usize,
}

/// Build the exactly-sized owned copy of an inserted value.
///
/// Reservation happens before any link is touched, so a failure leaves the
/// queue unmodified.
fn copy_value(value: &str) -> Result<String, QueueError> {
    let mut owned = String::new();
    owned.try_reserve_exact(value.len())?;
    owned.push_str(value);
    Ok(owned)
}

impl StrQueue {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn peek_front(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.value.as_str())
    }

    /// Insert a copy of `value` before the current head.
    pub fn push_front(&mut self, value: &str) -> Result<(), QueueError> {
        let owned = copy_value(value)?;
        let mut node = Box::new(Node {
            value: owned,
            next: self.head.take(),
        });
        if self.tail.is_null() {
            self.tail = &mut *node;
        }
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Insert a copy of `value` after the current tail.
    pub fn push_back(&mut self, value: &str) -> Result<(), QueueError> {
        let owned = copy_value(value)?;
        let mut node = Box::new(Node {
            value: owned,
            next: None,
        });
        let raw: *mut Node = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY:
            // - `tail` is non-null, so a prior insert set it to the last
            //   node of the chain owned by `head`
            // - every relinking operation refreshes `tail`, so it never
            //   dangles while the queue exists
            // - `&mut self` guarantees unique access to the chain
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = raw;
        self.len += 1;
        Ok(())
    }

    /// Remove the head element and hand its string to the caller.
    pub fn pop_front(&mut self) -> Option<String> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Some(value)
    }

    /// Remove the head element, copying at most `capacity - 1` characters
    /// of its string into `out` (`capacity` counts a reserved terminator
    /// slot; truncation never splits a character).
    ///
    /// Returns `false` on an empty queue and leaves `out` untouched.
    pub fn pop_front_into(&mut self, out: &mut String, capacity: usize) -> bool {
        let Some(value) = self.pop_front() else {
            return false;
        };
        out.clear();
        out.extend(value.chars().take(capacity.saturating_sub(1)));
        true
    }

    /// Reverse link direction in place. Nodes are relinked, never
    /// allocated or freed.
    pub fn reverse(&mut self) {
        let Some(first) = self.head.as_deref_mut() else {
            return;
        };
        // the old head ends up last
        self.tail = first;

        let mut reversed: Link = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Relink the chain into ascending lexicographic order by value.
    ///
    /// Stable merge sort; no-op below two elements.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        self.head = sort::merge_sort(self.head.take(), self.len);
        self.refresh_tail();
    }

    /// Detach and release every node, leaving the container reusable.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    /// Repoint the tail cache at the chain's current last node.
    fn refresh_tail(&mut self) {
        let mut last: *mut Node = ptr::null_mut();
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            last = &mut *node;
            cur = node.next.as_deref_mut();
        }
        self.tail = last;
    }
}

impl Drop for StrQueue {
    fn drop(&mut self) {
        // drop the chain iteratively; recursing per node overflows on
        // long queues
        self.clear();
    }
}

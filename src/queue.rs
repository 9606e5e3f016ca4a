//! A minimal first-in-first-out queue.
//!
//! This exists to drive breadth-first traversal order in
//! [`Tree::level_order`][crate::Tree::level_order] and
//! [`Tree::find`][crate::Tree::find]. It makes no guarantee beyond strict
//! FIFO ordering.

use std::collections::VecDeque;

/// A strict first-in-first-out queue.
///
/// # Examples
///
/// ```
/// use balanced_bst::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Reports whether no elements remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_queue_is_empty() {
        let queue: Queue<i32> = Queue::new();
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeue_on_empty_returns_none() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn enqueue_then_dequeue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Some("a"));

        // Interleaving keeps arrival order.
        queue.enqueue("d");
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), Some("d"));
        assert!(queue.is_empty());
    }

    quickcheck::quickcheck! {
        fn drains_in_arrival_order(xs: Vec<i16>) -> bool {
            let mut queue = Queue::new();
            for x in &xs {
                queue.enqueue(*x);
            }

            let mut drained = Vec::new();
            while let Some(x) = queue.dequeue() {
                drained.push(x);
            }

            queue.is_empty() && drained == xs
        }
    }
}

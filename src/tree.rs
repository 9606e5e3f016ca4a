//! A Binary Search Tree built balanced from a sorted sequence.
//!
//! The [`Tree`] here does not rebalance itself on mutation. It is
//! constructed height-balanced by [`Tree::from_sorted`], drifts as values
//! are inserted and deleted, and is rebuilt on demand by
//! [`Tree::rebalance`].
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_sorted(vec![1, 2, 3]);
//!
//! // A run of inserts can skew the tree.
//! for value in 4..=10 {
//!     tree.insert(value)?;
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding restores the height bound without losing any values.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.into_iter().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
//! # Ok::<(), balanced_bst::Error>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::queue::Queue;
use crate::Error;

/// A node in a [`Tree`]. It holds one value and owns up to two children.
///
/// References to nodes are handed out by [`Tree::find`] and passed to
/// traversal callbacks; the accessors on `Node` let callers walk the live
/// structure from any starting point.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// A Binary Search Tree holding unique, totally-ordered values.
///
/// An absent root represents the empty tree; every operation handles that
/// case explicitly.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-balanced tree from values sorted in ascending order.
    ///
    /// The middle element (lower middle for even lengths) becomes the root
    /// and each half becomes a subtree, so the resulting height is at most
    /// `⌈lg(n + 1)⌉ - 1`. An empty input yields the empty tree.
    ///
    /// The input must be sorted and free of duplicates; this is the
    /// caller's responsibility and is only checked in debug builds.
    /// Unsorted or duplicated input produces a tree that violates the BST
    /// invariant later operations rely on.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![0, 1, 2, 3, 5, 6, 9]);
    ///
    /// assert_eq!(tree.height(), Some(2));
    /// assert_eq!(tree.depth(&9), Ok(2));
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            assert!(
                values.windows(2).all(|pair| pair[0] < pair[1]),
                "input to from_sorted must be strictly ascending"
            );
        }
        Self {
            root: Self::build(values),
        }
    }

    /// Recursively partitions `values` around its lower-middle element.
    fn build(mut values: Vec<T>) -> Option<Box<Node<T>>> {
        if values.is_empty() {
            return None;
        }
        let mid = values.len() / 2;
        let mut upper = values.split_off(mid);
        let data = upper.remove(0);
        Some(Box::new(Node {
            data,
            left: Self::build(values),
            right: Self::build(upper),
        }))
    }

    /// Reports whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Finds the node holding `value`, or `None` if no node does.
    ///
    /// The returned reference points into the live tree, so the node's
    /// children can be inspected or traversed from there.
    ///
    /// The search is a breadth-first scan in FIFO discovery order, visiting
    /// the whole structure in the worst case. [`Tree::depth`] shows the
    /// ordered `O(height)` descent for callers that only need membership.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![0, 1, 2, 3, 5, 6, 9]);
    ///
    /// assert_eq!(tree.find(&9).map(|node| *node.data()), Some(9));
    /// assert!(tree.find(&4).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut queue = Queue::new();
        queue.enqueue(self.root.as_deref()?);

        while let Some(node) = queue.dequeue() {
            if node.data == *value {
                return Some(node);
            }
            if let Some(left) = node.left.as_deref() {
                queue.enqueue(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.enqueue(right);
            }
        }
        None
    }

    /// Inserts `value` as a new leaf, walking left or right from the root
    /// until an empty child slot is reached. The tree is not rebalanced.
    ///
    /// Returns [`Error::DuplicateValue`] and leaves the tree untouched if
    /// the value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::from_sorted(vec![0, 1, 2, 3, 5, 6, 9]);
    ///
    /// tree.insert(4)?;
    /// assert_eq!(tree.depth(&4), Ok(2));
    ///
    /// assert_eq!(tree.insert(4), Err(Error::DuplicateValue));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), Error>
    where
        T: Ord,
    {
        if self.find(&value).is_some() {
            return Err(Error::DuplicateValue);
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            // Equality is excluded by the duplicate check above.
            slot = if value < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        Ok(())
    }

    /// Deletes the node holding `value` and returns the removed value.
    ///
    /// A node with two children is replaced by its in-order predecessor,
    /// the maximum of its left subtree; nodes with fewer children are
    /// spliced out directly. Exactly one node is removed and the BST
    /// ordering is preserved.
    ///
    /// Returns [`Error::NotFound`] and leaves the tree untouched if the
    /// value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::from_sorted(vec![0, 1, 2, 3, 5, 6, 9]);
    ///
    /// assert_eq!(tree.delete(&3), Ok(3));
    /// assert!(tree.find(&3).is_none());
    ///
    /// assert_eq!(tree.delete(&3), Err(Error::NotFound));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, Error>
    where
        T: Ord,
    {
        let (root, removed) = Self::delete_node(self.root.take(), value);
        self.root = root;
        removed.ok_or(Error::NotFound)
    }

    /// Rebuilds the subtree rooted at `node` without `value`, returning the
    /// new subtree and the removed value if one was found.
    fn delete_node(node: Option<Box<Node<T>>>, value: &T) -> (Option<Box<Node<T>>>, Option<T>)
    where
        T: Ord,
    {
        let Some(mut node) = node else {
            return (None, None);
        };
        match value.cmp(&node.data) {
            Ordering::Less => {
                let (left, removed) = Self::delete_node(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete_node(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => (None, Some(node.data)),
                (Some(child), None) | (None, Some(child)) => (Some(child), Some(node.data)),
                (Some(left), Some(right)) => {
                    // Promote the in-order predecessor: the largest value in
                    // the left subtree. It has no right child, so removing it
                    // never recurses into this case again.
                    let (left, predecessor) = Self::delete_largest(left);
                    let removed = std::mem::replace(&mut node.data, predecessor);
                    node.left = left;
                    node.right = Some(right);
                    (Some(node), Some(removed))
                }
            },
        }
    }

    /// Removes the largest node of the subtree, returning the remaining
    /// subtree and the removed value.
    fn delete_largest(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.right.take() {
            None => (node.left.take(), node.data),
            Some(right) => {
                let (right, largest) = Self::delete_largest(right);
                node.right = right;
                (Some(node), largest)
            }
        }
    }

    /// Returns the number of edges between the root and the node holding
    /// `value`, walking by ordered comparison.
    ///
    /// Returns [`Error::NotFound`] if the walk reaches an empty child slot
    /// before matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::from_sorted(vec![0, 1, 2, 3, 5, 6, 9]);
    ///
    /// assert_eq!(tree.depth(&3), Ok(0));
    /// assert_eq!(tree.depth(&9), Ok(2));
    /// assert_eq!(tree.depth(&4), Err(Error::NotFound));
    /// ```
    pub fn depth(&self, value: &T) -> Result<usize, Error>
    where
        T: Ord,
    {
        let mut edges = 0;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match value.cmp(&node.data) {
                Ordering::Equal => return Ok(edges),
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
            }
            edges += 1;
        }
        Err(Error::NotFound)
    }

    /// Returns the height of the root, or `None` for the empty tree.
    ///
    /// Height counts edges on the longest downward path, so a tree holding
    /// a single value has height `Some(0)`.
    pub fn height(&self) -> Option<usize> {
        self.root.as_deref().map(Node::height)
    }

    /// Reports whether every node's subtree heights differ by at most one.
    ///
    /// This is the recursive definition: a top-level height comparison
    /// alone would miss imbalance buried deeper in the tree. The empty
    /// tree is balanced. Computed in one pass that short-circuits on the
    /// first imbalanced node.
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(self.root.as_deref()).is_some()
    }

    /// Returns the height of `node` (with `-1` for an absent node), or
    /// `None` as soon as any subtree is imbalanced.
    fn balanced_height(node: Option<&Node<T>>) -> Option<isize> {
        let Some(node) = node else {
            return Some(-1);
        };
        let left = Self::balanced_height(node.left.as_deref())?;
        let right = Self::balanced_height(node.right.as_deref())?;
        if (left - right).abs() <= 1 {
            Some(left.max(right) + 1)
        } else {
            None
        }
    }

    /// Discards the current node graph and rebuilds a height-balanced tree
    /// from its in-order value sequence. `O(n)` in the number of nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 1..=7 {
    ///     tree.insert(value)?;
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), Some(2));
    /// # Ok::<(), balanced_bst::Error>(())
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let mut values = Vec::new();
        Self::collect_in_order(self.root.take(), &mut values);
        // In-order on a valid BST is already sorted and duplicate-free.
        self.root = Self::build(values);
    }

    /// Consumes a subtree into `out` in ascending order.
    fn collect_in_order(node: Option<Box<Node<T>>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left, out);
            out.push(node.data);
            Self::collect_in_order(node.right, out);
        }
    }

    /// Visits every node in ascending value order: left subtree, node,
    /// right subtree. A no-op on the empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// let mut values = Vec::new();
    /// tree.in_order(|node| values.push(*node.data()));
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn in_order(&self, visit: impl FnMut(&Node<T>)) {
        if let Some(root) = self.root.as_deref() {
            root.in_order(visit);
        }
    }

    /// Visits every node in pre-order: node, left subtree, right subtree.
    /// A no-op on the empty tree.
    pub fn pre_order(&self, visit: impl FnMut(&Node<T>)) {
        if let Some(root) = self.root.as_deref() {
            root.pre_order(visit);
        }
    }

    /// Visits every node in post-order: left subtree, right subtree, node.
    /// A no-op on the empty tree.
    pub fn post_order(&self, visit: impl FnMut(&Node<T>)) {
        if let Some(root) = self.root.as_deref() {
            root.post_order(visit);
        }
    }

    /// Visits every node breadth-first, level by level in FIFO discovery
    /// order. A no-op on the empty tree.
    pub fn level_order(&self, visit: impl FnMut(&Node<T>)) {
        if let Some(root) = self.root.as_deref() {
            root.level_order(visit);
        }
    }

    /// Renders the tree as an indented diagram, right subtree on top.
    ///
    /// Identical trees always render identically, so the output is usable
    /// in golden tests. The empty tree renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.render(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// This node's left child, holding values less than its own.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, holding values greater than its own.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns the number of edges on the longest downward path from this
    /// node to a leaf. A leaf has height `0`.
    pub fn height(&self) -> usize {
        fn link_height<T>(link: Option<&Node<T>>) -> isize {
            // An absent child has height -1 so a leaf comes out at 0.
            link.map_or(-1, |node| node.height() as isize)
        }
        (1 + link_height(self.left()).max(link_height(self.right()))) as usize
    }

    /// Visits the subtree rooted here in ascending value order.
    pub fn in_order(&self, mut visit: impl FnMut(&Self)) {
        self.in_order_impl(&mut visit);
    }

    fn in_order_impl(&self, visit: &mut impl FnMut(&Self)) {
        if let Some(left) = self.left.as_deref() {
            left.in_order_impl(visit);
        }
        visit(self);
        if let Some(right) = self.right.as_deref() {
            right.in_order_impl(visit);
        }
    }

    /// Visits the subtree rooted here in pre-order.
    pub fn pre_order(&self, mut visit: impl FnMut(&Self)) {
        self.pre_order_impl(&mut visit);
    }

    fn pre_order_impl(&self, visit: &mut impl FnMut(&Self)) {
        visit(self);
        if let Some(left) = self.left.as_deref() {
            left.pre_order_impl(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.pre_order_impl(visit);
        }
    }

    /// Visits the subtree rooted here in post-order.
    pub fn post_order(&self, mut visit: impl FnMut(&Self)) {
        self.post_order_impl(&mut visit);
    }

    fn post_order_impl(&self, visit: &mut impl FnMut(&Self)) {
        if let Some(left) = self.left.as_deref() {
            left.post_order_impl(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.post_order_impl(visit);
        }
        visit(self);
    }

    /// Visits the subtree rooted here breadth-first, in FIFO discovery
    /// order.
    pub fn level_order(&self, mut visit: impl FnMut(&Self)) {
        let mut queue = Queue::new();
        queue.enqueue(self);

        while let Some(node) = queue.dequeue() {
            visit(node);
            if let Some(left) = node.left.as_deref() {
                queue.enqueue(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.enqueue(right);
            }
        }
    }
}

impl<T: fmt::Display> Node<T> {
    /// Writes the subtree diagram. `is_left` tracks which branch glyph and
    /// ancestor prefix the current node needs; the root renders as a left
    /// branch.
    fn render_into(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_left: bool) -> fmt::Result {
        if let Some(right) = self.right.as_deref() {
            let extended = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
            right.render_into(f, &extended, false)?;
        }
        writeln!(
            f,
            "{}{}{}",
            prefix,
            if is_left { "└── " } else { "┌── " },
            self.data
        )?;
        if let Some(left) = self.left.as_deref() {
            let extended = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
            left.render_into(f, &extended, true)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, "", true)
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut values = Vec::new();
        Self::collect_in_order(self.root.take(), &mut values);
        values.into_iter()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    fn sorted_unique(mut values: Vec<i16>) -> Vec<i16> {
        values.sort_unstable();
        values.dedup();
        values
    }

    fn in_order_values(tree: &Tree<i16>) -> Vec<i16> {
        let mut out = Vec::new();
        tree.in_order(|node| out.push(*node.data()));
        out
    }

    /// `⌈lg(n + 1)⌉ - 1`, the worst height `from_sorted` may produce.
    fn max_balanced_height(len: usize) -> usize {
        (usize::BITS - len.leading_zeros()) as usize - 1
    }

    /// Applies a set of operations to a tree and an ordered set. This way we
    /// can ensure that after a random smattering of inserts, deletes, and
    /// rebalances the two hold the same values.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    let newly_added = set.insert(*x);
                    assert_eq!(tree.insert(*x).is_ok(), newly_added);
                }
                Op::Delete(x) => {
                    let expected = if set.remove(x) {
                        Ok(*x)
                    } else {
                        Err(Error::NotFound)
                    };
                    assert_eq!(tree.delete(x), expected);
                }
                Op::Rebalance => tree.rebalance(),
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);

            let mut in_order = Vec::new();
            tree.in_order(|node| in_order.push(*node.data()));
            in_order == set.iter().copied().collect::<Vec<_>>()
        }
    }

    quickcheck::quickcheck! {
        fn from_sorted_round_trips_in_order(values: Vec<i16>) -> bool {
            let values = sorted_unique(values);
            let tree = Tree::from_sorted(values.clone());
            in_order_values(&tree) == values
        }
    }

    quickcheck::quickcheck! {
        fn from_sorted_height_is_log_bounded(values: Vec<i16>) -> bool {
            let values = sorted_unique(values);
            if values.is_empty() {
                return Tree::from_sorted(values).height().is_none();
            }
            let bound = max_balanced_height(values.len());
            let tree = Tree::from_sorted(values);
            tree.is_balanced() && tree.height() <= Some(bound)
        }
    }

    quickcheck::quickcheck! {
        fn inserted_values_are_found(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                // Duplicates are rejected but must not disturb the rest.
                let _ = tree.insert(*x);
            }
            xs.iter().all(|x| tree.find(x).map(Node::data) == Some(x))
        }
    }

    quickcheck::quickcheck! {
        fn delete_removes_exactly_the_target(values: Vec<i16>, pick: usize) -> bool {
            let values = sorted_unique(values);
            if values.is_empty() {
                return true;
            }
            let target = values[pick % values.len()];
            let mut tree = Tree::from_sorted(values.clone());

            let removed = tree.delete(&target);

            let mut remaining = values;
            remaining.retain(|x| *x != target);
            removed == Ok(target)
                && tree.find(&target).is_none()
                && in_order_values(&tree) == remaining
        }
    }

    quickcheck::quickcheck! {
        fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in xs {
                let _ = tree.insert(x);
            }

            tree.rebalance();
            let first = {
                let mut out = Vec::new();
                tree.in_order(|node| out.push(*node.data()));
                out
            };
            let balanced_once = tree.is_balanced();

            tree.rebalance();
            let second = {
                let mut out = Vec::new();
                tree.in_order(|node| out.push(*node.data()));
                out
            };

            balanced_once && tree.is_balanced() && first == second
        }
    }

    quickcheck::quickcheck! {
        fn rebuild_from_in_order_preserves_values(values: Vec<i16>) -> bool {
            let values = sorted_unique(values);
            let tree = Tree::from_sorted(values);

            let in_order = in_order_values(&tree);
            let rebuilt = Tree::from_sorted(in_order.clone());
            in_order_values(&rebuilt) == in_order
        }
    }
}

//! A mutable, unbalanced BST. Operations mutate the tree in place through
//! `&mut self`. Nothing rebalances: the shape is whatever the insertion
//! order produces, so a monotonic insertion order yields a degenerate
//! linked-list shape with `O(N)` operations.
//!
//! # Examples
//!
//! ```
//! use bstree::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(1);
//! assert!(tree.find(&1).is_some());
//!
//! // Inserting the same value again is a no-op.
//! tree.insert(1);
//! assert_eq!(tree.dfs_in_order(), [&1]);
//!
//! // Removing a node returns its value.
//! let removed = tree.remove(&1);
//!
//! assert_eq!(removed, Some(1));
//! assert!(tree.find(&1).is_none());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

/// An unbalanced Binary Search Tree over values with a total order. This
/// can be used for inserting, finding, traversing, and removing values.
/// Duplicate values are never stored - inserting a value that is already
/// present leaves the tree untouched.
#[derive(Clone, Debug)]
pub struct Tree<V> {
    root: Option<Box<Node<V>>>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tree<V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a `Tree` rooted at the given node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::{Node, Tree};
    ///
    /// let tree = Tree::with_root(Node::new(7));
    /// assert!(tree.find(&7).is_some());
    /// ```
    pub fn with_root(root: Node<V>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Returns `true` if the tree contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree at the unique position allowed
    /// by the BST invariants, using an iterative walk from the root. If the
    /// value is already present, nothing happens. Returns `&mut Self` so
    /// insertions can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
    ///
    /// // Duplicates are ignored.
    /// tree.insert(2);
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3]);
    /// ```
    pub fn insert(&mut self, value: V) -> &mut Self
    where
        V: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return self,
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(value)));
        self
    }

    /// Inserts the given value exactly as [`insert`][Self::insert] does but
    /// by recursing down the child links instead of walking a cursor. For
    /// any insertion order the two produce identical trees; the recursive
    /// variant consumes call stack proportional to the tree height.
    pub fn insert_recursively(&mut self, value: V) -> &mut Self
    where
        V: Ord,
    {
        Node::insert_link(&mut self.root, value);
        self
    }

    /// Potentially finds the node holding the given value, using an
    /// iterative walk from the root. If no node holds the value, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.find(&2).map(|node| node.value()), Some(&2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &V) -> Option<&Node<V>>
    where
        V: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Finds the node holding the given value by recursing down the child
    /// links. Returns exactly what [`find`][Self::find] returns.
    pub fn find_recursively(&self, value: &V) -> Option<&Node<V>>
    where
        V: Ord,
    {
        Node::find_link(self.root.as_deref(), value)
    }

    /// Returns every value in pre-order: each node before its left subtree,
    /// each left subtree before its right sibling subtree.
    pub fn dfs_pre_order(&self) -> Vec<&V> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut values);
        }
        values
    }

    /// Returns every value in-order: left subtree, node, right subtree. For
    /// a valid BST this is ascending sorted order - the defining property
    /// of the structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 8, 1, 4] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &3, &4, &5, &8]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&V> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut values);
        }
        values
    }

    /// Returns every value in post-order: left subtree, right subtree,
    /// then the node itself.
    pub fn dfs_post_order(&self) -> Vec<&V> {
        let mut values = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut values);
        }
        values
    }

    /// Returns every value in breadth-first order: increasing depth,
    /// left-to-right within a level. An empty tree yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 8, 1, 4] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.bfs(), [&5, &3, &8, &1, &4]);
    /// ```
    pub fn bfs(&self) -> Vec<&V> {
        let mut values = Vec::new();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            values.push(&node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        values
    }

    /// Removes the node holding the given value and returns the value, or
    /// `None` if the tree never held it. The BST invariants are preserved:
    /// a node with one child is replaced by that child, and a node with two
    /// children takes on its in-order successor (the smallest value of its
    /// right subtree) while that successor's node is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.dfs_in_order(), [&1, &3]);
    /// ```
    pub fn remove(&mut self, value: &V) -> Option<V>
    where
        V: Ord,
    {
        let (root, removed) = Node::remove_link(self.root.take(), value);
        self.root = root;
        removed
    }

    /// Reports whether every node's left and right subtrees differ in
    /// height by at most 1. An empty tree and a single node are balanced;
    /// any height difference of 2 or more anywhere makes the whole tree
    /// unbalanced.
    pub fn is_balanced(&self) -> bool {
        Node::balanced_height(self.root.as_deref()).is_some()
    }

    /// Returns the second-largest value in the tree. Returns `None` when
    /// the tree is empty or the root is a leaf; note this is a structural
    /// check on the root, not a node count, so a two-node tree always has a
    /// second-highest value (the non-root one).
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.find_second_highest(), Some(&8));
    /// ```
    pub fn find_second_highest(&self) -> Option<&V> {
        let root = self.root.as_deref()?;
        if root.left.is_none() && root.right.is_none() {
            return None;
        }

        // Walk to the largest node, remembering its parent.
        let mut parent = None;
        let mut current = root;
        while let Some(right) = current.right.as_deref() {
            parent = Some(current);
            current = right;
        }

        // The runner-up is the largest value left of the maximum, if the
        // maximum has a left subtree at all.
        if let Some(mut node) = current.left.as_deref() {
            while let Some(right) = node.right.as_deref() {
                node = right;
            }
            return Some(&node.value);
        }

        parent.map(|node| &node.value)
    }
}

/// A `Node` holds one value and owns up to two children, each themselves
/// the root of a subtree. Everything smaller than the value lives in the
/// left subtree and everything larger in the right one.
#[derive(Clone, Debug)]
pub struct Node<V> {
    value: V,
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    /// Constructs a new leaf `Node` holding the given value.
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value this node holds.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    fn insert_link(link: &mut Option<Box<Self>>, value: V)
    where
        V: Ord,
    {
        match link {
            None => *link = Some(Box::new(Self::new(value))),
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_link(&mut node.left, value),
                Ordering::Equal => {}
                Ordering::Greater => Self::insert_link(&mut node.right, value),
            },
        }
    }

    fn find_link<'a>(link: Option<&'a Self>, value: &V) -> Option<&'a Self>
    where
        V: Ord,
    {
        let node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::find_link(node.left.as_deref(), value),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::find_link(node.right.as_deref(), value),
        }
    }

    fn pre_order<'a>(&'a self, values: &mut Vec<&'a V>) {
        values.push(&self.value);
        if let Some(left) = self.left.as_deref() {
            left.pre_order(values);
        }
        if let Some(right) = self.right.as_deref() {
            right.pre_order(values);
        }
    }

    fn in_order<'a>(&'a self, values: &mut Vec<&'a V>) {
        if let Some(left) = self.left.as_deref() {
            left.in_order(values);
        }
        values.push(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.in_order(values);
        }
    }

    fn post_order<'a>(&'a self, values: &mut Vec<&'a V>) {
        if let Some(left) = self.left.as_deref() {
            left.post_order(values);
        }
        if let Some(right) = self.right.as_deref() {
            right.post_order(values);
        }
        values.push(&self.value);
    }

    /// Rebuilds the subtree rooted at `link` without the given value,
    /// returning the new subtree root and the removed value if it was
    /// found. Children are reattached by reassigning ownership links.
    fn remove_link(link: Option<Box<Self>>, value: &V) -> (Option<Box<Self>>, Option<V>)
    where
        V: Ord,
    {
        let mut node = match link {
            None => return (None, None),
            Some(node) => node,
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::remove_link(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_link(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => (right, Some(node.value)),
                (left, None) => (left, Some(node.value)),
                (left, Some(right)) => {
                    // Two children: promote the in-order successor's value
                    // into this node and unlink the successor's node.
                    let (right, successor) = Self::detach_min(right);
                    let removed = mem::replace(&mut node.value, successor);
                    node.left = left;
                    node.right = right;
                    (Some(node), Some(removed))
                }
            },
        }
    }

    /// Unlinks the leftmost node of the subtree, returning the remaining
    /// subtree and the minimum value that node held.
    fn detach_min(mut node: Box<Self>) -> (Option<Box<Self>>, V) {
        match node.left.take() {
            Some(left) => {
                let (left, min) = Self::detach_min(left);
                node.left = left;
                (Some(node), min)
            }
            None => (node.right.take(), node.value),
        }
    }

    /// The height of the subtree, or `None` as soon as any node below
    /// violates the height-balance condition. The `None` short-circuits so
    /// an imbalance deep in the tree stops the walk early.
    fn balanced_height(link: Option<&Self>) -> Option<usize> {
        let node = match link {
            None => return Some(0),
            Some(node) => node,
        };
        let left = Self::balanced_height(node.left.as_deref())?;
        let right = Self::balanced_height(node.right.as_deref())?;
        if left.abs_diff(right) > 1 {
            None
        } else {
            Some(left.max(right) + 1)
        }
    }
}

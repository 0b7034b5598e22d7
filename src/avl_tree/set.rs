use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use std::fmt;
use std::iter::FromIterator;

/// A set of unique, ordered keys stored in an avl tree.
///
/// Every insertion rebalances the path it walked, so for each node the left and right subtrees
/// never differ in height by more than one and lookups stay logarithmic. Re-inserting a key that
/// is already stored is ignored.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// for key in &[10, 20, 1, 5] {
///     set.insert(*key);
/// }
///
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.height(), 2);
/// assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), vec![1, 5, 10, 20]);
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Creates a set with no keys.
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Adds `key` to the set and rebalances. Returns `false` without touching the tree if an
    /// equal key is already stored.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert("b"));
    /// assert!(set.insert("a"));
    /// assert!(!set.insert("b"));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns `true` if an equal key is stored in the set.
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the underlying tree, counted in edges from the root down to the deepest leaf.
    /// It is `-1` for an empty set and `0` when the set holds one key.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    ///
    /// // three ascending keys trigger a rotation instead of forming a chain
    /// set.extend(vec![1, 2, 3]);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Drops every node, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Smallest key in the set, or `None` when it is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Largest key in the set, or `None` when it is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Walks the keys in ascending order. The walk is lazy and every call begins again at the
    /// smallest key.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set = vec![7, 3, 9].into_iter().collect::<AvlSet<u32>>();
    /// let mut keys = set.iter();
    /// assert_eq!(keys.next(), Some(&3));
    /// assert_eq!(keys.next(), Some(&7));
    ///
    /// assert_eq!(set.iter().last(), Some(&9));
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consumes an `AvlSet<T>` and hands out its keys in ascending order.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// Borrowing in-order walk over an `AvlSet<T>`, created by `AvlSet::iter`.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

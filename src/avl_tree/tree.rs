use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the cached height of a subtree, or `-1` if the subtree is empty.
pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

// The demoted node is updated before the promoted child since the child's height depends on it.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = Some(rotate_left(child));
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = Some(rotate_right(child));
    rotate_left(node)
}

/// Inserts `key` into the subtree held by `tree`, rebalancing on the way back up. Returns `true`
/// if a new node was allocated and `false` if the key already existed.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    // If a child side ends up two levels taller, nothing below this node was rotated, so the
    // child seen here is still the child after the recursive call.
    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let is_outer = node.left.as_ref().map_or(false, |child| key < child.key);
            let inserted = insert(&mut node.left, key);
            if node.balance() == 2 {
                if is_outer {
                    trace!("rotating right at subtree of height {}", height(&node.left) + 1);
                    node = rotate_right(node);
                } else {
                    trace!("rotating left-right at subtree of height {}", height(&node.left) + 1);
                    node = rotate_left_right(node);
                }
            }
            inserted
        },
        Ordering::Greater => {
            let is_outer = node.right.as_ref().map_or(false, |child| key > child.key);
            let inserted = insert(&mut node.right, key);
            if node.balance() == -2 {
                if is_outer {
                    trace!("rotating left at subtree of height {}", height(&node.right) + 1);
                    node = rotate_left(node);
                } else {
                    trace!("rotating right-left at subtree of height {}", height(&node.right) + 1);
                    node = rotate_right_left(node);
                }
            }
            inserted
        },
        Ordering::Equal => false,
    };

    node.update();
    *tree = Some(node);
    inserted
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

// Follows `next` from the root until it runs out of nodes and returns the last key visited.
fn descend<T>(tree: &Tree<T>, next: fn(&Node<T>) -> &Tree<T>) -> Option<&T> {
    let mut last = None;
    let mut curr = tree;
    while let Some(ref node) = curr {
        last = Some(&node.key);
        curr = next(node);
    }
    last
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    descend(tree, |node| &node.left)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    descend(tree, |node| &node.right)
}

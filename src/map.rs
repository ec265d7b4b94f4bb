use std::fmt::Debug;

use crate::{
    entry::Entry,
    iter::{OwnedIter, RefIter},
    node::{remove_recurse, Inserted, Node},
};

/// An ordered map backed by an AVL tree.
///
/// Every node carries a balance factor (the height of its right subtree
/// minus the height of its left subtree) that insertions and removals keep
/// within {-1, 0, 1} through rotations, bounding the tree height — and with
/// it the cost of all operations — to O(log n).
#[derive(Debug, Clone)]
pub struct AvlMap<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K, V> AvlMap<K, V>
where
    K: Ord,
{
    /// Initialise an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` indexed by `key`, returning the value previously
    /// stored for the key, if any.
    ///
    /// Overwriting an existing key replaces the value in place and leaves
    /// the tree structure untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let inserted = match self.root {
            Some(ref mut v) => v.insert(key, value),
            None => {
                self.root = Some(Box::new(Node::new(key, value)));
                Inserted::Grew
            }
        };

        match inserted {
            Inserted::Replaced(v) => Some(v),
            Inserted::Done | Inserted::Grew => {
                self.len += 1;
                None
            }
        }
    }

    /// Read the value stored for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.root.as_ref().and_then(|v| v.get(key))
    }

    /// Read the value stored for `key` mutably, if any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root.as_mut().and_then(|v| v.get_mut(key))
    }

    /// Return true if the map holds a value for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove the value indexed by `key` and return it.
    ///
    /// Removing a key that does not exist is a no-op, returning [`None`].
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (value, _) = remove_recurse(&mut self.root, key)?;
        self.len -= 1;
        Some(value)
    }

    /// Iterate over the `(key, value)` pairs in the map in ascending key
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.root
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| (v.key(), v.value()))
    }

    /// Gets the [`Entry`] for `key`, for in-place manipulation.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V>
    where
        K: Clone + Debug,
    {
        Entry::new(key, self)
    }
}

impl<K, V> AvlMap<K, V> {
    /// The number of `(key, value)` pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K, V> IntoIterator for AvlMap<K, V> {
    type Item = (K, V);
    type IntoIter = OwnedIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root)
    }
}

impl<K, V> FromIterator<(K, V)> for AvlMap<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::Result;
use crate::pattern::{KeyPattern, Pattern};

/// An insertion-ordered collection of values keyed by strings.
///
/// Overwriting a key keeps its original position, and removing a key keeps
/// the relative order of the remaining ones. Values can be of any type; use
/// an enum for `V` when the collection has to hold values of different kinds.
///
/// ```ignore
/// let mut bag = Collection::new();
/// bag.set("__prefix_a", "a").set("__prefix_b", "b").set("c", "c");
///
/// let matched = bag.matches("/^__prefix/")?;
/// assert_eq!(matched.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Collection<V> {
    // Backing map, iterated in insertion order.
    // Only order-preserving (`shift_*`) removals are used on it.
    items: IndexMap<String, V>,
}

impl<V> Collection<V> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite the value stored under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        self.items.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.items.get(key)
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.items.get(key).unwrap_or(default)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.items.get_mut(key)
    }

    /// Returns a copy of every entry, in insertion order.
    ///
    /// The copy is detached from the collection: changing it has no effect
    /// on the stored values.
    pub fn all(&self) -> IndexMap<String, V>
    where
        V: Clone,
    {
        self.items.clone()
    }

    /// Current keys in insertion order
    pub fn keys(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    /// Remove `key` if present. Removing an absent key does nothing.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.items.shift_remove(key);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Call `visitor` with every key and a mutable reference to its value,
    /// in insertion order.
    ///
    /// The visitor may replace values in place. It cannot add or remove keys
    /// while the walk is in progress.
    pub fn each<F>(&mut self, mut visitor: F) -> &mut Self
    where
        F: FnMut(&str, &mut V),
    {
        for (key, value) in self.items.iter_mut() {
            visitor(key, value);
        }

        self
    }

    /// Returns the entries whose key matches the regular expression `pattern`.
    ///
    /// Surrounding `/` delimiters are stripped before compiling. The search is
    /// unanchored. Fails with `Error::InvalidPattern` if the pattern does not
    /// compile.
    pub fn matches(&self, pattern: &str) -> Result<IndexMap<String, V>>
    where
        V: Clone,
    {
        let pattern = KeyPattern::new(pattern)?;
        Ok(self.matches_pattern(&pattern))
    }

    /// Same as `matches`, with an already compiled pattern.
    pub fn matches_pattern<P>(&self, pattern: &P) -> IndexMap<String, V>
    where
        P: Pattern + ?Sized,
        V: Clone,
    {
        let matched: IndexMap<String, V> = self
            .items
            .iter()
            .filter(|(key, _)| pattern.matches(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        log::debug!("Matched {} of {} keys", matched.len(), self.count());

        matched
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.items.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.items.iter_mut(),
        }
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Container for Collection<V> {
    type Value = V;

    fn set(&mut self, key: String, value: V) -> &mut Self {
        Collection::set(self, key, value)
    }

    fn get(&self, key: &str) -> Option<&V> {
        Collection::get(self, key)
    }

    fn has(&self, key: &str) -> bool {
        Collection::has(self, key)
    }

    fn remove(&mut self, key: &str) -> &mut Self {
        Collection::remove(self, key)
    }

    fn clear(&mut self) -> &mut Self {
        Collection::clear(self)
    }

    fn count(&self) -> usize {
        Collection::count(self)
    }

    fn keys(&self) -> Vec<&str> {
        Collection::keys(self)
    }
}

// Indexing panics on a missing key, like the std maps do.
impl<V> Index<&str> for Collection<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        &self.items[key]
    }
}

impl<V> IndexMut<&str> for Collection<V> {
    fn index_mut(&mut self, key: &str) -> &mut V {
        &mut self.items[key]
    }
}

impl<V> From<IndexMap<String, V>> for Collection<V> {
    fn from(items: IndexMap<String, V>) -> Self {
        Self { items }
    }
}

impl<V> From<Collection<V>> for IndexMap<String, V> {
    fn from(collection: Collection<V>) -> Self {
        collection.items
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Collection<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.items.insert(key.into(), value);
        }
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Collection<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Borrowing iterator over the entries of a `Collection`, in insertion order
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

pub struct IterMut<'a, V> {
    inner: indexmap::map::IterMut<'a, String, V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IterMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

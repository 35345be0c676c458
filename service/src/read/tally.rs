//! [`Tally`] definition.

use std::{hash::Hash, ops};

use indexmap::IndexMap;

/// Frequency table remembering the order its keys were first seen in.
///
/// Ties are always resolved in favor of the key seen first.
#[derive(Clone, Debug)]
pub struct Tally<K, V = usize>(IndexMap<K, V>);

impl<K, V> Default for Tally<K, V> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash,
{
    /// Adds the provided `value` to the one accumulated for the `key`.
    pub fn add(&mut self, key: K, value: V)
    where
        V: Copy + ops::Add<Output = V>,
    {
        _ = self
            .0
            .entry(key)
            .and_modify(|acc| *acc = *acc + value)
            .or_insert(value);
    }

    /// Returns the entry with the greatest accumulated value.
    ///
    /// [`None`] is returned if this [`Tally`] is empty.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)>
    where
        V: Ord,
    {
        let mut entries = self.0.iter();
        let first = entries.next()?;
        Some(entries.fold(first, |max, e| {
            // Strict comparison keeps the earliest of the equal entries.
            if e.1 > max.1 {
                e
            } else {
                max
            }
        }))
    }

    /// Returns the number of distinct keys in this [`Tally`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Tally`] has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in the order of their keys' first
    /// appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter()
    }

    /// Consumes this [`Tally`] returning its entries ordered by their
    /// values descending.
    ///
    /// Entries with equal values keep the order of their keys' first
    /// appearance.
    #[must_use]
    pub fn into_ranked(self) -> Vec<(K, V)>
    where
        V: Ord,
    {
        self.0.sorted_by(|_, a, _, b| b.cmp(a)).collect()
    }

    /// Consumes this [`Tally`] returning its entries in the order of their
    /// keys' first appearance.
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.0.into_iter().collect()
    }
}

impl<K> Tally<K>
where
    K: Eq + Hash,
{
    /// Counts one more occurrence of the `key`.
    pub fn count(&mut self, key: K) {
        self.add(key, 1);
    }
}

impl<K, V> Extend<(K, V)> for Tally<K, V>
where
    K: Eq + Hash,
    V: Copy + ops::Add<Output = V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Tally<K, V>
where
    K: Eq + Hash,
    V: Copy + ops::Add<Output = V>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tally = Self::default();
        tally.extend(iter);
        tally
    }
}

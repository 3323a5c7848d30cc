// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-counting set wrapper.
//!
//! [`CountingSet`] forwards every operation to an injected [`Backing`] set
//! and counts attempted insertions at its own boundary. Because counting
//! happens in exactly one place, it does not matter whether the backing
//! set's bulk insert is built on its single insert: every presented element
//! is counted once, duplicates and rejected elements included.

use std::collections::hash_map::RandomState;
use std::collections::{hash_set, BTreeSet, HashSet};
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use thiserror::Error;

/// Minimal set interface a [`CountingSet`] delegates to.
pub trait Backing<E> {
    /// Error returned when the set refuses an element.
    type Error;

    /// Insert `element`. Returns whether the set changed.
    fn insert(&mut self, element: E) -> Result<bool, Self::Error>;

    /// Insert every element in order, stopping at the first error.
    /// Returns whether the set changed.
    fn insert_all(&mut self, elements: Vec<E>) -> Result<bool, Self::Error> {
        let mut changed = false;
        for element in elements {
            changed |= self.insert(element)?;
        }
        Ok(changed)
    }

    fn contains(&self, element: &E) -> bool;

    /// Remove `element`. Returns whether it was present.
    fn remove(&mut self, element: &E) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

impl<E: Eq + Hash, S: BuildHasher> Backing<E> for HashSet<E, S> {
    type Error = Infallible;

    fn insert(&mut self, element: E) -> Result<bool, Infallible> {
        Ok(HashSet::insert(self, element))
    }

    fn insert_all(&mut self, elements: Vec<E>) -> Result<bool, Infallible> {
        let before = HashSet::len(self);
        self.extend(elements);
        Ok(HashSet::len(self) != before)
    }

    fn contains(&self, element: &E) -> bool {
        HashSet::contains(self, element)
    }

    fn remove(&mut self, element: &E) -> bool {
        HashSet::remove(self, element)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<E: Ord> Backing<E> for BTreeSet<E> {
    type Error = Infallible;

    fn insert(&mut self, element: E) -> Result<bool, Infallible> {
        Ok(BTreeSet::insert(self, element))
    }

    fn contains(&self, element: &E) -> bool {
        BTreeSet::contains(self, element)
    }

    fn remove(&mut self, element: &E) -> bool {
        BTreeSet::remove(self, element)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

/// Error from a [`BoundedSet`] that is already full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("set is full (capacity {capacity})")]
pub struct CapacityError {
    pub capacity: usize,
}

/// Hash set that refuses new elements beyond a fixed capacity.
///
/// Re-inserting an element that is already present always succeeds.
#[derive(Debug, Clone)]
pub struct BoundedSet<E> {
    items: HashSet<E>,
    capacity: usize,
}

impl<E: Eq + Hash> BoundedSet<E> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> hash_set::Iter<'_, E> {
        self.items.iter()
    }
}

impl<E: Eq + Hash> Backing<E> for BoundedSet<E> {
    type Error = CapacityError;

    fn insert(&mut self, element: E) -> Result<bool, CapacityError> {
        if self.items.contains(&element) {
            return Ok(false);
        }
        if self.items.len() >= self.capacity {
            return Err(CapacityError {
                capacity: self.capacity,
            });
        }
        Ok(self.items.insert(element))
    }

    fn contains(&self, element: &E) -> bool {
        self.items.contains(element)
    }

    fn remove(&mut self, element: &E) -> bool {
        self.items.remove(element)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, E> IntoIterator for &'a BoundedSet<E> {
    type Item = &'a E;
    type IntoIter = hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Set wrapper that counts attempted insertions.
///
/// `count()` grows by one per element presented to [`add`](Self::add) or
/// [`add_all`](Self::add_all), whether or not the backing set grew and
/// whether or not it accepted the element. Other operations pass straight
/// through and leave the count alone.
pub struct CountingSet<E, B = HashSet<E, RandomState>> {
    backing: B,
    add_count: usize,
    _element: PhantomData<fn(E)>,
}

impl<E, B: Default> CountingSet<E, B> {
    pub fn new() -> Self {
        Self::with_backing(B::default())
    }
}

impl<E, B> CountingSet<E, B> {
    pub fn with_backing(backing: B) -> Self {
        Self {
            backing,
            add_count: 0,
            _element: PhantomData,
        }
    }

    /// Number of attempted insertions so far.
    pub fn count(&self) -> usize {
        self.add_count
    }

    /// Read-only view of the backing set.
    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn into_inner(self) -> B {
        self.backing
    }

    pub fn iter<'a>(&'a self) -> <&'a B as IntoIterator>::IntoIter
    where
        &'a B: IntoIterator,
    {
        (&self.backing).into_iter()
    }
}

impl<E, B: Backing<E>> CountingSet<E, B> {
    /// Count one attempt, then insert into the backing set.
    pub fn add(&mut self, element: E) -> Result<bool, B::Error> {
        self.add_count += 1;
        let result = self.backing.insert(element);
        tracing::trace!(count = self.add_count, changed = ?result.as_ref().ok(), "add");
        result
    }

    /// Count every presented element, then hand the batch to the backing set.
    ///
    /// A backing error is returned as-is; the count keeps the full batch.
    pub fn add_all<I>(&mut self, elements: I) -> Result<bool, B::Error>
    where
        I: IntoIterator<Item = E>,
    {
        let elements: Vec<E> = elements.into_iter().collect();
        self.add_count += elements.len();
        let presented = elements.len();
        let result = self.backing.insert_all(elements);
        tracing::trace!(
            count = self.add_count,
            presented,
            changed = ?result.as_ref().ok(),
            "add_all"
        );
        result
    }

    pub fn contains(&self, element: &E) -> bool {
        self.backing.contains(element)
    }

    pub fn remove(&mut self, element: &E) -> bool {
        self.backing.remove(element)
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Empty the backing set. The attempt count is kept.
    pub fn clear(&mut self) {
        self.backing.clear();
    }
}

impl<E, B: Backing<E>> Backing<E> for CountingSet<E, B> {
    type Error = B::Error;

    fn insert(&mut self, element: E) -> Result<bool, B::Error> {
        self.add(element)
    }

    fn insert_all(&mut self, elements: Vec<E>) -> Result<bool, B::Error> {
        self.add_all(elements)
    }

    fn contains(&self, element: &E) -> bool {
        CountingSet::contains(self, element)
    }

    fn remove(&mut self, element: &E) -> bool {
        CountingSet::remove(self, element)
    }

    fn len(&self) -> usize {
        CountingSet::len(self)
    }

    fn clear(&mut self) {
        CountingSet::clear(self);
    }
}

impl<E, B: Backing<E, Error = Infallible>> Extend<E> for CountingSet<E, B> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        match self.add_all(elements) {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
}

impl<E, B: Default> Default for CountingSet<E, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, B: Clone> Clone for CountingSet<E, B> {
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.clone(),
            add_count: self.add_count,
            _element: PhantomData,
        }
    }
}

impl<E, B: std::fmt::Debug> std::fmt::Debug for CountingSet<E, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountingSet")
            .field("backing", &self.backing)
            .field("add_count", &self.add_count)
            .finish()
    }
}

impl<'a, E, B> IntoIterator for &'a CountingSet<E, B>
where
    &'a B: IntoIterator,
{
    type Item = <&'a B as IntoIterator>::Item;
    type IntoIter = <&'a B as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "counting_tests.rs"]
mod tests;

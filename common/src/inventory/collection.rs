//! # Collection
//!
//! The full inventory: one [`QuantityVector`] per [`Identity`]. Entries are
//! kept in a `BTreeMap`, so iteration is always in identity order, the same
//! order rows are written to the sheet.

use std::collections::BTreeMap;

use crate::error::CollectionError;
use crate::inventory::{Ball, Identity, QuantityVector};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    entries: BTreeMap<Identity, QuantityVector>,
}

impl Collection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (&Identity, &QuantityVector)> {
        self.entries.iter()
    }

    /// Adds `vector` to the entry for `identity`, creating it if absent.
    ///
    /// Repeated identities are summed, never overwritten.
    pub fn insert_or_merge(&mut self, identity: Identity, vector: QuantityVector) {
        self.entries
            .entry(identity)
            .and_modify(|existing| *existing = existing.add(&vector))
            .or_insert(vector);
    }

    /// Union of both collections, summing shared entries.
    pub fn merge(&self, other: &Collection) -> Collection {
        let mut merged = self.clone();
        for (identity, vector) in other.iter() {
            merged.insert_or_merge(identity.clone(), *vector);
        }
        merged
    }

    /// Removes `other` from `self`.
    ///
    /// Every identity in `other` must already be present in `self`, and no
    /// profile may drop below zero. Entries that reach zero are pruned.
    pub fn difference(&self, other: &Collection) -> Result<Collection, CollectionError> {
        let mut remaining = self.entries.clone();
        for (identity, subtrahend) in other.iter() {
            let Some(minuend) = remaining.get_mut(identity) else {
                return Err(CollectionError::MissingEntry(identity.clone()));
            };
            *minuend = minuend
                .subtract(subtrahend)
                .map_err(|cause| CollectionError::NegativeQuantity {
                    identity: identity.clone(),
                    cause,
                })?;
        }
        Ok(Collection { entries: remaining }.prune())
    }

    /// Drops every entry whose vector is all zeros.
    pub fn prune(self) -> Collection {
        let entries = self
            .entries
            .into_iter()
            .filter(|(_, vector)| !vector.is_zero())
            .collect();
        Collection { entries }
    }

    pub fn lookup(&self, identity: &Identity) -> Result<&QuantityVector, CollectionError> {
        self.entries
            .get(identity)
            .ok_or_else(|| CollectionError::NotFound(identity.clone()))
    }

    /// Per-ball sums across all species, in ball order. Balls with no
    /// entries are omitted.
    pub fn totals_by_ball(&self) -> BTreeMap<Ball, QuantityVector> {
        let mut totals: BTreeMap<Ball, QuantityVector> = BTreeMap::new();
        for (identity, vector) in self.iter() {
            let total = totals.entry(identity.ball()).or_default();
            *total = total.add(vector);
        }
        totals
    }

    /// Sum of every entry.
    pub fn total(&self) -> QuantityVector {
        self.entries
            .values()
            .fold(QuantityVector::zero(), |acc, vector| acc.add(vector))
    }
}

impl FromIterator<(Identity, QuantityVector)> for Collection {
    /// Folds with [`Collection::insert_or_merge`]; identities need not be unique.
    fn from_iter<T: IntoIterator<Item = (Identity, QuantityVector)>>(iter: T) -> Self {
        let mut collection = Collection::empty();
        for (identity, vector) in iter {
            collection.insert_or_merge(identity, vector);
        }
        collection
    }
}

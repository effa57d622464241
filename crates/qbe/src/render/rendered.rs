//! Render output: fragment text plus its bind parameters.

use indexmap::IndexMap;

use crate::error::{QbeError, QbeResult};

/// Bind parameters of a fragment, keyed by placeholder name, in placeholder order.
///
/// Keys are unique as long as every fragment of a statement draws from the same
/// [`SequenceCounter`](crate::SequenceCounter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentParameters<T> {
    entries: IndexMap<String, T>,
}

impl<T> FragmentParameters<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    // Keys come from a counter that never repeats, so this never replaces.
    pub(crate) fn push(&mut self, key: String, value: T) {
        self.entries.insert(key, value);
    }

    /// Get the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in placeholder order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Values in placeholder order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge another fragment's parameters into this one, appending its keys.
    ///
    /// Fails with [`QbeError::DuplicateParameter`] if any key is already
    /// present, which happens when the fragments were rendered with different
    /// counters. On error `self` is left unchanged.
    pub fn merge(&mut self, other: FragmentParameters<T>) -> QbeResult<()> {
        if let Some(key) = other.entries.keys().find(|k| self.entries.contains_key(*k)) {
            return Err(QbeError::DuplicateParameter(key.clone()));
        }
        self.entries.extend(other.entries);
        Ok(())
    }
}

impl<T> Default for FragmentParameters<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for FragmentParameters<T> {
    type Item = (String, T);
    type IntoIter = indexmap::map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A rendered WHERE-clause fragment and the parameters its placeholders refer to.
///
/// The fragment starts with a single space so fragments can be appended to a
/// clause directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCriterion<T> {
    where_clause_fragment: String,
    fragment_parameters: FragmentParameters<T>,
}

impl<T> RenderedCriterion<T> {
    pub(crate) fn new(
        where_clause_fragment: String,
        fragment_parameters: FragmentParameters<T>,
    ) -> Self {
        Self {
            where_clause_fragment,
            fragment_parameters,
        }
    }

    pub fn where_clause_fragment(&self) -> &str {
        &self.where_clause_fragment
    }

    pub fn fragment_parameters(&self) -> &FragmentParameters<T> {
        &self.fragment_parameters
    }

    /// Take the fragment and parameters apart.
    pub fn into_parts(self) -> (String, FragmentParameters<T>) {
        (self.where_clause_fragment, self.fragment_parameters)
    }
}

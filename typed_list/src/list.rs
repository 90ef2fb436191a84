use crate::capacity::{Capacity, CapacityMode, CapacityState};
use crate::element::{key_set, narrow_all, narrow_at, HashSet, ListElement, ValidationPolicy};
use crate::error::{Access, ListError};
use crate::mixed::MixedValue;
use collection_traits::{HasCapacity, HasLength};
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Dense, index-addressed list of a single element type
///
/// The logical capacity is tracked separately from the backing allocation.
/// Elastic lists double their capacity every time an append fills them up,
/// strict lists keep the capacity they were created with and reject appends
/// once full.
///
/// Every mutating operation either applies fully or leaves the list as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedList<T> {
    values: Vec<T>,
    capacity: CapacityState,
}

impl<T: ListElement> TypedList<T> {
    /// Creates an elastic list with a capacity of twice the initial length
    pub fn new(values: Vec<T>) -> Self {
        Self {
            capacity: CapacityState::elastic(values.len()),
            values,
        }
    }

    /// Creates a strict list that never holds more than `capacity` elements
    ///
    /// A zero capacity for an empty list creates an elastic list instead.
    pub fn with_capacity(values: Vec<T>, capacity: usize) -> Result<Self, ListError> {
        Self::try_new(values, Capacity::Strict(capacity))
    }

    pub fn try_new(values: Vec<T>, capacity: impl Into<Capacity>) -> Result<Self, ListError> {
        let capacity = CapacityState::resolve(capacity.into(), values.len())?;
        Ok(Self { values, capacity })
    }

    /// Creates a list out of dynamically typed candidates, validating every
    /// one of them
    pub fn from_mixed(
        values: Vec<MixedValue>,
        capacity: impl Into<Capacity>,
    ) -> Result<Self, ListError>
    where
        T: ValidationPolicy,
    {
        let capacity = CapacityState::resolve(capacity.into(), values.len())?;
        let values = narrow_all(values)?;
        Ok(Self { values, capacity })
    }

    /// Whether `candidate` could be stored in this kind of list
    pub fn accepts(candidate: &MixedValue) -> bool
    where
        T: ValidationPolicy,
    {
        T::accepts(candidate)
    }

    pub fn append(&mut self, value: T) -> Result<&mut Self, ListError> {
        self.ensure_fits(1)?;
        self.values.push(value);
        self.capacity.grow_for(self.values.len());
        Ok(self)
    }

    /// Validates and appends a dynamically typed candidate
    pub fn append_mixed(&mut self, value: MixedValue) -> Result<&mut Self, ListError>
    where
        T: ValidationPolicy,
    {
        let value = narrow_at(value, self.values.len())?;
        self.append(value)
    }

    /// Appends all `values`, or none of them if a strict list can't fit them
    pub fn extend_from(
        &mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self, ListError> {
        let values = values.into_iter().collect_vec();
        self.ensure_fits(values.len())?;
        self.values.extend(values);
        self.capacity.grow_for(self.values.len());
        Ok(self)
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.values
            .get(index)
            .ok_or_else(|| ListError::out_of_range(index, self.values.len(), Access::Get))
    }

    pub fn replace(&mut self, index: usize, value: T) -> Result<&mut Self, ListError> {
        let length = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| ListError::out_of_range(index, length, Access::Replace))?;
        *slot = value;
        Ok(self)
    }

    /// Validates a dynamically typed candidate and stores it at `index`
    pub fn replace_mixed(
        &mut self,
        index: usize,
        value: MixedValue,
    ) -> Result<&mut Self, ListError>
    where
        T: ValidationPolicy,
    {
        let value = narrow_at(value, index)?;
        self.replace(index, value)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one
    ///
    /// The capacity is never reduced.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.values.len() {
            return Err(ListError::out_of_range(
                index,
                self.values.len(),
                Access::Remove,
            ));
        }
        Ok(self.values.remove(index))
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.values.iter().position(|item| item.exact_eq(value))
    }

    /// Ascending positions of every element equal to any of `values`
    ///
    /// Each position is reported once, no matter how often its value repeats
    /// in the query.
    pub fn indexes_of<'a>(&'a self, values: &'a [T]) -> Vec<usize> {
        if values.is_empty() {
            return vec![];
        }
        let wanted = key_set(values);
        self.values
            .iter()
            .positions(|item| wanted.contains(&item.key()))
            .collect()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Whether any stored element equals any of `values`
    pub fn contains_any<'a>(&'a self, values: &'a [T]) -> bool {
        let wanted = key_set(values);
        self.values.iter().any(|item| wanted.contains(&item.key()))
    }

    /// Whether every distinct value of `values` is stored at least once
    pub fn contains_all<'a>(&'a self, values: &'a [T]) -> bool {
        let wanted = key_set(values);
        let found: HashSet<_> = self
            .values
            .iter()
            .map(ListElement::key)
            .filter(|key| wanted.contains(key))
            .collect();
        found.len() == wanted.len()
    }

    /// Drops every repeated element, keeping first occurrences in order
    pub fn unique(&mut self) -> &mut Self {
        let keep = {
            let mut seen = HashSet::default();
            self.values
                .iter()
                .map(|item| seen.insert(item.key()))
                .collect_vec()
        };
        let mut keep = keep.into_iter();
        self.values.retain(|_| keep.next().unwrap_or(true));
        self
    }

    /// Keeps only the elements matching `predicate`
    pub fn filter(&mut self, mut predicate: impl FnMut(&T) -> bool) -> &mut Self {
        self.values.retain(|item| predicate(item));
        self
    }

    /// Drops really-empty elements: blank strings, null, `false` and empty
    /// composites. Numeric zero is kept.
    pub fn filter_empty(&mut self) -> &mut Self {
        self.filter(|item| !item.is_really_empty())
    }

    /// Stable ascending sort by the element's natural order
    pub fn sort(&mut self) -> &mut Self {
        self.values.sort_by(T::natural_cmp);
        self
    }

    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) -> &mut Self {
        self.values.sort_by(compare);
        self
    }

    fn ensure_fits(&self, additional: usize) -> Result<(), ListError> {
        if self.capacity.fits(self.values.len(), additional) {
            Ok(())
        } else {
            debug!(
                capacity = self.capacity.capacity(),
                additional, "rejecting append to a full strict list"
            );
            Err(ListError::ListFull {
                capacity: self.capacity.capacity(),
            })
        }
    }
}

impl<T> TypedList<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.capacity()
    }

    /// Room left before an elastic list grows or a strict list fills up
    pub fn left(&self) -> usize {
        self.capacity.left(self.values.len())
    }

    /// Only strict lists can be full
    pub fn is_full(&self) -> bool {
        self.capacity.is_full(self.values.len())
    }

    pub fn capacity_mode(&self) -> CapacityMode {
        self.capacity.mode()
    }

    pub fn is_strict(&self) -> bool {
        self.capacity.mode().is_strict()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: ListElement> Default for TypedList<T> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<T: ListElement> FromIterator<T> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: ListElement + ValidationPolicy> TryFrom<Vec<MixedValue>> for TypedList<T> {
    type Error = ListError;

    fn try_from(values: Vec<MixedValue>) -> Result<Self, Self::Error> {
        Self::from_mixed(values, Capacity::Elastic)
    }
}

impl<T> IntoIterator for TypedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TypedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Display> Display for TypedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.values.iter().join(", "))
    }
}

impl<T> HasLength for TypedList<T> {
    fn len(&self) -> usize {
        TypedList::len(self)
    }

    fn is_empty(&self) -> bool {
        TypedList::is_empty(self)
    }
}

impl<T> HasCapacity for TypedList<T> {
    fn capacity(&self) -> usize {
        TypedList::capacity(self)
    }

    fn left(&self) -> usize {
        TypedList::left(self)
    }

    fn is_full(&self) -> bool {
        TypedList::is_full(self)
    }
}

impl<T> collection_traits::Iterable for TypedList<T> {
    type Item<'a> = &'a T where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.values.iter()
    }
}

#![forbid(clippy::unconditional_recursion)]

pub mod array;
pub mod slice;
pub mod vec;

pub trait HasLength {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collections that track an upper bound on their length separately from the
/// length itself
pub trait HasCapacity: HasLength {
    fn capacity(&self) -> usize;

    /// Room left before the collection has to grow or start rejecting items
    fn left(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }

    /// Whether the collection refuses new items
    ///
    /// Growable collections are never full
    fn is_full(&self) -> bool;
}

pub trait Iterable {
    type Item<'a>
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>>;
}

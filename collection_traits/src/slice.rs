use crate::{HasCapacity, HasLength, Iterable};

impl<T> HasLength for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

/// Slices can't grow, they are always at capacity
impl<T> HasCapacity for [T] {
    fn capacity(&self) -> usize {
        <[T]>::len(self)
    }

    fn is_full(&self) -> bool {
        true
    }
}

impl<T> Iterable for [T] {
    type Item<'a> = &'a T where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        <[T]>::iter(self)
    }
}

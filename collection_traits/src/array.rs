use crate::{HasCapacity, HasLength, Iterable};

impl<const N: usize, T> HasLength for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize, T> HasCapacity for [T; N] {
    fn capacity(&self) -> usize {
        N
    }

    fn is_full(&self) -> bool {
        true
    }
}

impl<const N: usize, T> Iterable for [T; N] {
    type Item<'a> = &'a T where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.as_slice().iter()
    }
}

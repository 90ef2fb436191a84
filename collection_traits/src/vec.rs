use crate::{HasCapacity, HasLength, Iterable};
use std::collections::VecDeque;

#[duplicate::duplicate_item(
    ty(T);
    [ Vec<T> ];
    [ VecDeque<T> ];
)]
impl<T> HasLength for ty([T]) {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

// Growable collections reallocate instead of refusing items
#[duplicate::duplicate_item(
    ty(T);
    [ Vec<T> ];
    [ VecDeque<T> ];
)]
impl<T> HasCapacity for ty([T]) {
    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn is_full(&self) -> bool {
        false
    }
}

impl<T> Iterable for Vec<T> {
    type Item<'a> = &'a T where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.as_slice().iter()
    }
}

impl<T> Iterable for VecDeque<T> {
    type Item<'a> = &'a T where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        VecDeque::iter(self)
    }
}

#[cfg(test)]
mod test {
    use crate::{HasCapacity, HasLength, Iterable};
    use std::collections::VecDeque;

    #[test]
    fn vec_is_never_full() {
        let mut v = Vec::with_capacity(2);
        v.push(1);
        v.push(2);

        assert!(!HasCapacity::is_full(&v));
        assert_eq!(HasCapacity::left(&v), HasCapacity::capacity(&v) - 2);
        assert_eq!(HasLength::len(&v), 2);
    }

    #[test]
    fn deque_iterates_front_to_back() {
        let mut q = VecDeque::new();
        q.push_back(2);
        q.push_front(1);

        assert_eq!(Iterable::iter(&q).copied().collect::<Vec<_>>(), vec![1, 2]);
        assert!(!HasLength::is_empty(&q));
    }
}

use crate::element::{narrow_all, ListElement, ValidationPolicy};
use crate::error::ListError;
use crate::list::TypedList;
use crate::mixed::MixedValue;
use collection_traits::HasLength;

/// Immutable list of a single element type
#[derive(Debug, Clone, PartialEq)]
pub struct TypedTuple<T> {
    values: Box<[T]>,
}

impl<T: ListElement> TypedTuple<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// Validates every candidate, reporting the position of the first
    /// rejected one
    pub fn from_mixed(values: Vec<MixedValue>) -> Result<Self, ListError>
    where
        T: ValidationPolicy,
    {
        Ok(Self::new(narrow_all(values)?))
    }

    /// Out of range indices yield `None`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn all(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: ListElement> From<TypedList<T>> for TypedTuple<T> {
    fn from(list: TypedList<T>) -> Self {
        Self::new(list.into_values())
    }
}

impl<T: ListElement + ValidationPolicy> TryFrom<Vec<MixedValue>> for TypedTuple<T> {
    type Error = ListError;

    fn try_from(values: Vec<MixedValue>) -> Result<Self, Self::Error> {
        Self::from_mixed(values)
    }
}

impl<'a, T> IntoIterator for &'a TypedTuple<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> HasLength for TypedTuple<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> collection_traits::Iterable for TypedTuple<T> {
    type Item<'a> = &'a T where Self: 'a;

    #[expect(clippy::needless_lifetimes)]
    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        self.values.iter()
    }
}

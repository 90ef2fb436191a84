//! Concrete list and tuple types for each supported element type

use crate::element::NumericElement;
use crate::list::TypedList;
use crate::mixed::MixedValue;
use crate::tuple::TypedTuple;

pub type IntList = TypedList<i64>;
pub type FloatList = TypedList<f64>;
pub type StringList = TypedList<String>;
/// List accepting values of any kind
pub type MixedList = TypedList<MixedValue>;

pub type IntTuple = TypedTuple<i64>;
pub type FloatTuple = TypedTuple<f64>;
pub type StringTuple = TypedTuple<String>;
pub type MixedTuple = TypedTuple<MixedValue>;

impl<T: NumericElement> TypedList<T> {
    /// Sum of all elements, zero for an empty list
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, value| acc.accumulate(*value))
    }
}

impl StringList {
    pub fn from_strs(values: &[&str]) -> Self {
        Self::new(values.iter().map(ToString::to_string).collect())
    }
}

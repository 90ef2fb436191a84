#![forbid(clippy::unconditional_recursion)]

//! Homogeneously typed lists with a logical capacity.
//!
//! A [`TypedList`] is created from an initial sequence and an optional
//! capacity. Without a capacity the list is elastic: it starts at twice the
//! initial length and doubles whenever an append fills it up. With a capacity
//! the list is strict: the capacity never changes and appends fail once the
//! list is full.
//!
//! Values can be offered as dynamically typed [`MixedValue`]s, in which case
//! the element type's [`ValidationPolicy`] decides whether they are accepted.

pub mod capacity;
pub mod element;
pub mod error;
pub mod facade;
pub mod list;
pub mod mixed;
pub mod tuple;

pub use capacity::{Capacity, CapacityMode};
pub use element::{ListElement, NumericElement, ValidationPolicy};
pub use error::{Access, ErrorKind, InvalidInput, ListError};
pub use facade::{
    FloatList, FloatTuple, IntList, IntTuple, MixedList, MixedTuple, StringList, StringTuple,
};
pub use list::TypedList;
pub use mixed::{MixedKind, MixedNumber, MixedValue};
pub use tuple::TypedTuple;

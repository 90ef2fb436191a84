use crate::error::InvalidInput;
use crate::mixed::MixedValue;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

// DOS is of no concern to us
pub(crate) type BuildHasher = std::hash::BuildHasherDefault<ahash::AHasher>;
pub(crate) type HashSet<V> = std::collections::HashSet<V, BuildHasher>;

/// Element of a [`TypedList`](crate::TypedList)
pub trait ListElement: Clone + Debug {
    /// Exact identity of an element, two elements are the same value if and
    /// only if their keys are equal
    type Key<'a>: Hash + Eq
    where
        Self: 'a;

    fn key(&self) -> Self::Key<'_>;

    /// Exact equality, without any cross-type or numeric-string coercion
    fn exact_eq<'a>(&'a self, other: &'a Self) -> bool {
        self.key() == other.key()
    }

    /// Whether the default filter drops this element
    fn is_really_empty(&self) -> bool;

    /// Natural total order used by [`TypedList::sort`](crate::TypedList::sort)
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

/// Decides which dynamically typed values may be stored as `Self`
///
/// [`MixedValue`] accepts everything.
pub trait ValidationPolicy: Sized {
    /// Name used in type mismatch errors
    const TYPE_NAME: &'static str;

    fn accepts(candidate: &MixedValue) -> bool;

    /// Converts an accepted candidate, handing rejected ones back
    fn narrow(candidate: MixedValue) -> Result<Self, MixedValue>;
}

/// Elements that can be summed up
pub trait NumericElement: ListElement + Copy + num_traits::Zero {
    fn accumulate(self, rhs: Self) -> Self;
}

impl ListElement for i64 {
    type Key<'a> = i64;

    fn key(&self) -> Self::Key<'_> {
        *self
    }

    fn is_really_empty(&self) -> bool {
        false
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl ValidationPolicy for i64 {
    const TYPE_NAME: &'static str = "int";

    fn accepts(candidate: &MixedValue) -> bool {
        candidate.is_int()
    }

    fn narrow(candidate: MixedValue) -> Result<Self, MixedValue> {
        match candidate {
            MixedValue::Int(value) => Ok(value),
            other => Err(other),
        }
    }
}

/// Integer sums saturate at the bounds of `i64`
impl NumericElement for i64 {
    fn accumulate(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl ListElement for f64 {
    type Key<'a> = OrderedFloat<f64>;

    fn key(&self) -> Self::Key<'_> {
        OrderedFloat(*self)
    }

    fn is_really_empty(&self) -> bool {
        false
    }

    /// NaN sorts last, `-0.0` and `0.0` are equal
    fn natural_cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

impl ValidationPolicy for f64 {
    const TYPE_NAME: &'static str = "float";

    fn accepts(candidate: &MixedValue) -> bool {
        candidate.is_float()
    }

    fn narrow(candidate: MixedValue) -> Result<Self, MixedValue> {
        match candidate {
            MixedValue::Float(value) => Ok(value.0),
            other => Err(other),
        }
    }
}

impl NumericElement for f64 {
    fn accumulate(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl ListElement for String {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        self.as_str()
    }

    fn is_really_empty(&self) -> bool {
        self.trim().is_empty()
    }

    /// Byte-wise order
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl ValidationPolicy for String {
    const TYPE_NAME: &'static str = "string";

    fn accepts(candidate: &MixedValue) -> bool {
        candidate.is_string()
    }

    fn narrow(candidate: MixedValue) -> Result<Self, MixedValue> {
        match candidate {
            MixedValue::String(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl ListElement for MixedValue {
    type Key<'a> = &'a MixedValue;

    fn key(&self) -> Self::Key<'_> {
        self
    }

    fn is_really_empty(&self) -> bool {
        MixedValue::is_really_empty(self)
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl ValidationPolicy for MixedValue {
    const TYPE_NAME: &'static str = "mixed";

    fn accepts(_candidate: &MixedValue) -> bool {
        true
    }

    fn narrow(candidate: MixedValue) -> Result<Self, MixedValue> {
        Ok(candidate)
    }
}

/// Validates a single candidate destined for `position`
pub(crate) fn narrow_at<T: ValidationPolicy>(
    candidate: MixedValue,
    position: usize,
) -> Result<T, InvalidInput> {
    T::narrow(candidate).map_err(|rejected| {
        debug!(
            expected = T::TYPE_NAME,
            found = %rejected.kind(),
            position,
            "rejected value"
        );
        InvalidInput::TypeMismatch {
            expected: T::TYPE_NAME,
            found: rejected.kind(),
            position,
        }
    })
}

/// Validates every candidate, failing on the first rejected one
pub(crate) fn narrow_all<T: ValidationPolicy>(
    candidates: Vec<MixedValue>,
) -> Result<Vec<T>, InvalidInput> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| narrow_at(candidate, position))
        .collect()
}

/// Set of exact element identities
pub(crate) fn key_set<'a, T: ListElement>(values: &'a [T]) -> HashSet<T::Key<'a>> {
    values.iter().map(ListElement::key).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mixed::MixedKind;
    use crate::mixed_vec;
    use rstest::rstest;

    #[rstest]
    #[case(MixedValue::Int(1), true, false, false)]
    #[case(MixedValue::from(1.5), false, true, false)]
    #[case(MixedValue::from("1"), false, false, true)]
    #[case(MixedValue::Boolean(true), false, false, false)]
    #[case(MixedValue::Null, false, false, false)]
    fn should_accept_exact_types(
        #[case] candidate: MixedValue,
        #[case] int: bool,
        #[case] float: bool,
        #[case] string: bool,
    ) {
        assert_eq!(i64::accepts(&candidate), int);
        assert_eq!(f64::accepts(&candidate), float);
        assert_eq!(String::accepts(&candidate), string);
        assert!(MixedValue::accepts(&candidate));
    }

    #[test]
    fn narrow_hands_back_rejected() {
        assert_eq!(i64::narrow(MixedValue::from(1.0)), Err(MixedValue::from(1.0)));
        assert_eq!(f64::narrow(MixedValue::Int(1)), Err(MixedValue::Int(1)));
        assert_eq!(String::narrow("a".into()), Ok("a".to_string()));
    }

    #[test]
    fn narrow_all_reports_position() {
        let err = narrow_all::<i64>(mixed_vec![1, 2, 1.5, "x"]).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::TypeMismatch {
                expected: "int",
                found: MixedKind::Float,
                position: 2,
            }
        );

        assert_eq!(narrow_all::<i64>(mixed_vec![1, 2]).unwrap(), vec![1, 2]);
    }

    #[test]
    fn float_keys_are_exact() {
        assert!(1.0_f64.exact_eq(&1.0));
        assert!(!1.0_f64.exact_eq(&1.000_000_1));
        assert!(f64::NAN.exact_eq(&f64::NAN));
    }

    #[test]
    fn integer_sum_saturates() {
        assert_eq!(i64::MAX.accumulate(1), i64::MAX);
        assert_eq!(i64::MIN.accumulate(-1), i64::MIN);
    }

    #[test]
    fn blank_strings_are_empty() {
        assert!(" \t".to_string().is_really_empty());
        assert!(!"0".to_string().is_really_empty());
        assert!(!0_i64.is_really_empty());
        assert!(!0.0_f64.is_really_empty());
    }
}

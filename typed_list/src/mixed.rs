use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use strum::{EnumDiscriminants, EnumIs, IntoStaticStr};

pub type MixedNumber = OrderedFloat<f64>;

/// Dynamically typed value stored by a [`MixedList`](crate::MixedList) and
/// offered to the other lists for validation
///
/// Equality is exact: `Int(0)`, `Float(0.0)`, `Boolean(false)`, `String("0")`
/// and `Null` are all different values.
#[derive(Debug, Clone, Eq, PartialEq, Hash, EnumDiscriminants, EnumIs)]
#[strum_discriminants(name(MixedKind), derive(Hash, strum::Display, IntoStaticStr))]
pub enum MixedValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(MixedNumber),
    String(String),
    List(Vec<MixedValue>),
    Map(BTreeMap<String, MixedValue>),
}

impl MixedValue {
    pub fn kind(&self) -> MixedKind {
        MixedKind::from(self)
    }

    /// Null, `false`, blank strings and empty composites
    ///
    /// Numeric zero is not empty.
    pub fn is_really_empty(&self) -> bool {
        match self {
            MixedValue::Null => true,
            MixedValue::Boolean(value) => !value,
            MixedValue::Int(_) | MixedValue::Float(_) => false,
            MixedValue::String(value) => value.trim().is_empty(),
            MixedValue::List(values) => values.is_empty(),
            MixedValue::Map(values) => values.is_empty(),
        }
    }

    /// Position of the value's group in the mixed sort order
    fn rank(&self) -> u8 {
        match self {
            MixedValue::Null => 0,
            MixedValue::Boolean(_) => 1,
            MixedValue::Int(_) | MixedValue::Float(_) => 2,
            MixedValue::String(_) => 3,
            MixedValue::List(_) => 4,
            MixedValue::Map(_) => 5,
        }
    }
}

/// Total order across all kinds of values:
///
/// `null < booleans < numbers < strings < lists < maps`
///
/// - `false < true`
/// - ints and floats compare numerically, an int sorts before an equal float
/// - strings compare case-insensitively, ties are broken by byte order so
///   `"Banana" < "banana"`
/// - lists and maps compare lexicographically
impl Ord for MixedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MixedValue::Null, MixedValue::Null) => Ordering::Equal,
            (MixedValue::Boolean(a), MixedValue::Boolean(b)) => a.cmp(b),
            (MixedValue::Int(a), MixedValue::Int(b)) => a.cmp(b),
            (MixedValue::Float(a), MixedValue::Float(b)) => a.cmp(b),
            (MixedValue::Int(a), MixedValue::Float(b)) => cmp_int_float(*a, b.0),
            (MixedValue::Float(a), MixedValue::Int(b)) => cmp_int_float(*b, a.0).reverse(),
            (MixedValue::String(a), MixedValue::String(b)) => cmp_case_insensitive(a, b),
            (MixedValue::List(a), MixedValue::List(b)) => a.iter().cmp(b.iter()),
            (MixedValue::Map(a), MixedValue::Map(b)) => a.iter().cmp(b.iter()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for MixedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_int_float(int: i64, float: f64) -> Ordering {
    // NaN sorts above every number, same as `OrderedFloat`
    if float.is_nan() {
        return Ordering::Less;
    }

    match OrderedFloat(int as f64).cmp(&OrderedFloat(float)) {
        // `float` is integral here, compare exactly to recover precision lost
        // by the cast of large ints
        Ordering::Equal => int.cmp(&(float as i64)).then(Ordering::Less),
        ord => ord,
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

macro_rules! try_to {
    ($type:tt, $result:ty, $name:tt) => {
        impl From<$result> for MixedValue {
            fn from(value: $result) -> Self {
                Self::$type(value)
            }
        }

        paste::item! {
            impl TryFrom<MixedValue> for $result {
                type Error = miette::Error;

                fn try_from(value: MixedValue) -> Result<Self, Self::Error> {
                    value.[<try_into_ $name>]()
                }
            }

            impl MixedValue {
                pub fn [<try_into_ $name>](self) -> miette::Result<$result> {
                    if let MixedValue::$type(value) = self {
                        Ok(value)
                    } else {
                        miette::bail!("invalid cast from {:?} to {}", self, stringify!($name))
                    }
                }

                pub fn [<try_as_ $name>](&self) -> miette::Result<&$result> {
                    if let MixedValue::$type(value) = self {
                        Ok(value)
                    } else {
                        miette::bail!("invalid cast from {:?} to {}", self, stringify!($name))
                    }
                }
            }
        }
    };
}

try_to!(Boolean, bool, boolean);
try_to!(Int, i64, int);
try_to!(Float, MixedNumber, float);
try_to!(String, String, string);
try_to!(List, Vec<MixedValue>, list);
try_to!(Map, BTreeMap<String, MixedValue>, map);

impl From<i32> for MixedValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for MixedValue {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl From<&str> for MixedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<MixedValue>> From<Option<T>> for MixedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(MixedValue::Null, Into::into)
    }
}

impl TryFrom<MixedValue> for f64 {
    type Error = miette::Error;

    fn try_from(value: MixedValue) -> Result<Self, Self::Error> {
        value.try_as_float().map(|n| n.0)
    }
}

impl Display for MixedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MixedValue::Null => write!(f, "null"),
            MixedValue::Boolean(value) => write!(f, "{value}"),
            MixedValue::Int(value) => write!(f, "{value}"),
            MixedValue::Float(value) => write!(f, "{:?}", value.0),
            MixedValue::String(value) => write!(f, "\"{value}\""),
            MixedValue::List(values) => {
                write!(f, "[{}]", values.iter().map(ToString::to_string).join(", "))
            }
            MixedValue::Map(values) => {
                write!(
                    f,
                    "{{{}}}",
                    values
                        .iter()
                        .map(|(k, v)| format!("\"{k}\": {v}"))
                        .join(", ")
                )
            }
        }
    }
}

/// Builds a `Vec<MixedValue>` from anything convertible into [`MixedValue`]
#[macro_export]
macro_rules! mixed_vec {
    ($($x:expr),* $(,)?) => {
        {
            let values: Vec<$crate::MixedValue> = vec![$($crate::MixedValue::from($x)),*];
            values
        }
    }
}

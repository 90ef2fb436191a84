use crate::error::InvalidInput;
use strum::{Display, EnumIs};
use tracing::trace;

/// Requested capacity of a new list
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Capacity {
    /// Start at twice the initial length and double whenever the list fills up
    #[default]
    Elastic,
    /// Never grow past the given number of elements
    Strict(usize),
}

impl From<usize> for Capacity {
    fn from(capacity: usize) -> Self {
        Self::Strict(capacity)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(capacity: Option<usize>) -> Self {
        capacity.map_or(Self::Elastic, Self::Strict)
    }
}

/// Capacity regime of a list, fixed for its whole lifetime
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIs)]
pub enum CapacityMode {
    Elastic,
    Strict,
}

/// Logical capacity bookkeeping, independent of the backing allocation
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct CapacityState {
    mode: CapacityMode,
    capacity: usize,
}

impl CapacityState {
    /// Resolves the requested capacity against the initial length
    ///
    /// An explicit zero capacity for an empty list is treated as if no
    /// capacity was given
    pub fn resolve(requested: Capacity, length: usize) -> Result<Self, InvalidInput> {
        match requested {
            Capacity::Strict(0) if length == 0 => Ok(Self::elastic(0)),
            Capacity::Strict(capacity) if capacity < length => {
                Err(InvalidInput::CapacityTooSmall { capacity, length })
            }
            Capacity::Strict(capacity) => Ok(Self {
                mode: CapacityMode::Strict,
                capacity,
            }),
            Capacity::Elastic => Ok(Self::elastic(length)),
        }
    }

    pub fn elastic(length: usize) -> Self {
        Self {
            mode: CapacityMode::Elastic,
            capacity: length.saturating_mul(2),
        }
    }

    pub fn mode(&self) -> CapacityMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn left(&self, length: usize) -> usize {
        self.capacity.saturating_sub(length)
    }

    pub fn is_full(&self, length: usize) -> bool {
        self.mode.is_strict() && self.left(length) == 0
    }

    /// Whether `additional` elements can be appended to a list of `length`
    pub fn fits(&self, length: usize, additional: usize) -> bool {
        match self.mode {
            CapacityMode::Elastic => true,
            CapacityMode::Strict => self.left(length) >= additional,
        }
    }

    /// Doubles an elastic capacity until it exceeds `length`
    ///
    /// An elastic list that started out empty grows to 2 on the first append
    pub fn grow_for(&mut self, length: usize) {
        if self.mode.is_strict() {
            return;
        }

        while length >= self.capacity {
            let grown = if self.capacity == 0 {
                2
            } else {
                self.capacity.saturating_mul(2)
            };
            if grown == self.capacity {
                break;
            }
            trace!(from = self.capacity, to = grown, "growing list capacity");
            self.capacity = grown;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Capacity::Elastic, 3, CapacityMode::Elastic, 6)]
    #[case(Capacity::Elastic, 0, CapacityMode::Elastic, 0)]
    #[case(Capacity::Strict(3), 3, CapacityMode::Strict, 3)]
    #[case(Capacity::Strict(10), 2, CapacityMode::Strict, 10)]
    #[case(Capacity::Strict(0), 0, CapacityMode::Elastic, 0)]
    fn should_resolve(
        #[case] requested: Capacity,
        #[case] length: usize,
        #[case] mode: CapacityMode,
        #[case] capacity: usize,
    ) {
        let state = CapacityState::resolve(requested, length).expect("Should resolve");
        assert_eq!(state.mode(), mode);
        assert_eq!(state.capacity(), capacity);
    }

    #[rstest]
    #[case(1, 2)]
    #[case(0, 1)]
    fn should_reject_small_capacity(#[case] capacity: usize, #[case] length: usize) {
        assert_eq!(
            CapacityState::resolve(Capacity::Strict(capacity), length),
            Err(InvalidInput::CapacityTooSmall { capacity, length })
        );
    }

    #[test]
    fn optional_capacity() {
        assert_eq!(Capacity::from(None), Capacity::Elastic);
        assert_eq!(Capacity::from(Some(4)), Capacity::Strict(4));
        assert_eq!(Capacity::from(4_usize), Capacity::Strict(4));
    }

    #[test]
    fn elastic_doubles_when_reached() {
        let mut state = CapacityState::resolve(Capacity::Elastic, 3).unwrap();
        state.grow_for(5);
        assert_eq!(state.capacity(), 6);
        state.grow_for(6);
        assert_eq!(state.capacity(), 12);
    }

    #[test]
    fn empty_elastic_seeds_capacity() {
        let mut state = CapacityState::resolve(Capacity::Elastic, 0).unwrap();
        state.grow_for(1);
        assert_eq!(state.capacity(), 2);
        state.grow_for(2);
        assert_eq!(state.capacity(), 4);
    }

    #[test]
    fn bulk_growth_matches_repeated_doubling() {
        let mut state = CapacityState::resolve(Capacity::Elastic, 1).unwrap();
        state.grow_for(9);
        assert_eq!(state.capacity(), 16);
    }

    #[test]
    fn strict_never_grows() {
        let mut state = CapacityState::resolve(Capacity::Strict(2), 2).unwrap();
        state.grow_for(2);
        assert_eq!(state.capacity(), 2);
        assert!(state.is_full(2));
        assert!(!state.fits(2, 1));
        assert!(state.fits(2, 0));
    }
}

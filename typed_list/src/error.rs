use crate::mixed::MixedKind;
use miette::Diagnostic;
use strum::{Display, EnumIs};
use thiserror::Error;

/// Broad category of a [`ListError`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumIs)]
pub enum ErrorKind {
    /// A value or capacity was rejected before touching the list
    InvalidInput,
    /// A strict list has no room left
    ResourceExhausted,
    /// An index outside of `0..len`
    OutOfRange,
}

/// Indexed operation that hit an out of range index
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Access {
    Get,
    Replace,
    Remove,
}

#[derive(Debug, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum InvalidInput {
    #[error("expected {expected} value at position {position}, got {found}")]
    #[diagnostic(code(typed_list::type_mismatch))]
    TypeMismatch {
        expected: &'static str,
        found: MixedKind,
        position: usize,
    },
    #[error("capacity {capacity} is less than the initial length {length}")]
    #[diagnostic(
        code(typed_list::capacity_too_small),
        help("omit the capacity to get an elastic list")
    )]
    CapacityTooSmall { capacity: usize, length: usize },
}

#[derive(Debug, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum ListError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("list is full, strict capacity of {capacity} reached")]
    #[diagnostic(
        code(typed_list::list_full),
        help("strict lists never grow, construct a new list with a larger capacity")
    )]
    ListFull { capacity: usize },
    #[error("index {index} is out of range for `{access}` on a list of length {length}")]
    #[diagnostic(code(typed_list::out_of_range))]
    OutOfRange {
        index: usize,
        length: usize,
        access: Access,
    },
}

impl ListError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListError::InvalidInput(_) => ErrorKind::InvalidInput,
            ListError::ListFull { .. } => ErrorKind::ResourceExhausted,
            ListError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    pub(crate) fn out_of_range(index: usize, length: usize, access: Access) -> Self {
        Self::OutOfRange {
            index,
            length,
            access,
        }
    }
}

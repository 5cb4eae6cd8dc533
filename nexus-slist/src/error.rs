//! Error types for sorted list operations.

use thiserror::Error;

use crate::ValueKind;

/// Result alias used throughout the crate.
pub type Result<T, E = SlistError> = core::result::Result<T, E>;

/// Errors reported by [`SortedList`](crate::SortedList) and its elements.
///
/// Every error is reported at the offending call. Operations that fail
/// leave the list exactly as it was before the call.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlistError {
    /// Sorting mode outside `0..=2`.
    #[error("{mode} is not a valid sorting mode (use 0, 1 or 2)")]
    InvalidSortMode {
        /// Rejected mode.
        mode: i64,
    },

    /// Only text and sequence values have a configurable sorting mode.
    #[error("{kind} values do not have a sorting mode")]
    UnsupportedKindForSorting {
        /// Kind passed to the re-sort.
        kind: ValueKind,
    },

    /// Positional access beyond either end of the list.
    #[error("list[{index}] is not a valid index (length {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: isize,
        /// Length at the time of the call.
        len: usize,
    },

    /// Positional access with something other than an integer.
    #[error("{kind} cannot index a list")]
    InvalidIndexType {
        /// Kind of the rejected index.
        kind: ValueKind,
    },

    /// Every slot a node link can address is in use.
    #[error("list is full ({len} nodes)")]
    CapacityExceeded {
        /// Length at the time of the call.
        len: usize,
    },

    /// A value could not be reduced to a comparable rank.
    #[error("{kind} value has no comparable rank: {reason}")]
    InvalidValueKind {
        /// Kind of the unrankable value.
        kind: ValueKind,
        /// What made the rank fail.
        reason: &'static str,
    },

    /// Arithmetic between element kinds that do not support it.
    #[error("unsupported operand kinds for {op}: {lhs} and {rhs}")]
    UnsupportedOperation {
        /// Operator symbol, e.g. `"+"`.
        op: &'static str,
        /// Left operand kind.
        lhs: ValueKind,
        /// Right operand kind.
        rhs: ValueKind,
    },

    /// Division, floor division or remainder by zero.
    #[error("{op} by zero")]
    DivisionByZero {
        /// Operator symbol.
        op: &'static str,
    },

    /// Integer arithmetic overflowed `i64`.
    #[error("integer overflow in {op}")]
    Overflow {
        /// Operator symbol.
        op: &'static str,
    },
}

impl SlistError {
    /// Returns `true` for positional access errors.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            SlistError::IndexOutOfRange { .. } | SlistError::InvalidIndexType { .. }
        )
    }

    /// Returns `true` for errors raised while changing the sorting configuration.
    pub fn is_sort_error(&self) -> bool {
        matches!(
            self,
            SlistError::InvalidSortMode { .. } | SlistError::UnsupportedKindForSorting { .. }
        )
    }

    /// Returns `true` for errors raised by element arithmetic.
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(
            self,
            SlistError::UnsupportedOperation { .. }
                | SlistError::DivisionByZero { .. }
                | SlistError::Overflow { .. }
        )
    }
}

//! List nodes and the slab links between them.
//!
//! Nodes live in the list's slab and refer to their neighbours by slot.
//! A [`Link`] uses a reserved sentinel slot instead of `Option` to mark the
//! end of the chain, keeping each link at four bytes.

use core::cmp::Ordering;
use core::fmt;

use crate::{Result, Value, ValueKind};

/// Slab slot of a neighbouring node, or [`Link::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link(u32);

impl Link {
    /// Sentinel for "no node". Never a valid slot.
    pub(crate) const NONE: Self = Link(u32::MAX);

    /// Creates a link to `slot`, or `None` if it does not fit below the
    /// sentinel.
    #[inline]
    pub(crate) fn try_from_slot(slot: usize) -> Option<Self> {
        match u32::try_from(slot) {
            Ok(slot) if slot != Self::NONE.0 => Some(Link(slot)),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub(crate) fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node of a [`SortedList`](crate::SortedList).
///
/// Nodes are handed out by reference from search, positional access and
/// iteration. They compare and compute through their value, against
/// another node or a raw [`Value`].
///
/// # Example
///
/// ```
/// use nexus_slist::{SortedList, Value};
///
/// let list = SortedList::from_values([4, 10]).unwrap();
/// let first = list.get(0).unwrap();
/// let last = list.get(-1).unwrap();
///
/// assert!(first < last);
/// assert_eq!(*first, Value::Int(4));
/// assert_eq!(first.try_add(last).unwrap(), Value::Int(14));
/// assert_eq!(last.try_rem(&Value::Int(4)).unwrap(), Value::Int(2));
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    value: Value,
    pub(crate) prev: Link,
    pub(crate) next: Link,
}

macro_rules! delegate_arithmetic {
    ($($(#[$doc:meta])* $name:ident),*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<R: AsRef<Value>>(&self, rhs: R) -> Result<Value> {
                self.value.$name(rhs.as_ref())
            }
        )*
    };
}

impl Node {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: Value) -> Self {
        Self {
            value,
            prev: Link::NONE,
            next: Link::NONE,
        }
    }

    /// Returns the held value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the kind of the held value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Indexes into a held sequence or text. See [`Value::get`].
    #[inline]
    pub fn get(&self, index: isize) -> Result<Value> {
        self.value.get(index)
    }

    #[inline]
    pub(crate) fn into_value(self) -> Value {
        self.value
    }

    delegate_arithmetic!(
        /// Adds (or concatenates) the held value and `rhs`. See [`Value::try_add`].
        try_add,
        /// Subtracts `rhs` from the held value. See [`Value::try_sub`].
        try_sub,
        /// Multiplies (or repeats) the held value by `rhs`. See [`Value::try_mul`].
        try_mul,
        /// Divides the held value by `rhs`. See [`Value::try_div`].
        try_div,
        /// Floor-divides the held value by `rhs`. See [`Value::try_floor_div`].
        try_floor_div,
        /// Remainder of the held value by `rhs`. See [`Value::try_rem`].
        try_rem,
        /// Raises the held value to `rhs`. See [`Value::try_pow`].
        try_pow
    );
}

impl AsRef<Value> for Node {
    #[inline]
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl PartialEq for Node {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<Value> for Node {
    #[inline]
    fn eq(&self, other: &Value) -> bool {
        self.value == *other
    }
}

impl PartialEq<Node> for Value {
    #[inline]
    fn eq(&self, other: &Node) -> bool {
        *self == other.value
    }
}

impl PartialOrd for Node {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl PartialOrd<Value> for Node {
    #[inline]
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<Node> for Value {
    #[inline]
    fn partial_cmp(&self, other: &Node) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

//! Sorted doubly-linked list with slab node storage.
//!
//! The list owns a [`slab::Slab`] of [`Node`]s and threads them into a
//! chain through `prev`/`next` slot links. Elements are kept in
//! non-decreasing rank order (see [`crate::rank`]); equal ranks keep their
//! insertion order.
//!
//! # Invariants
//!
//! - `len` equals the number of nodes reachable from `head` by `next`
//!   links, and from `tail` by `prev` links.
//! - `head.prev` and `tail.next` are `Link::NONE`; both `head` and `tail`
//!   are `NONE` exactly when the list is empty.
//! - Every link reachable from `head` or `tail` names an occupied slab slot.
//! - Every stored value ranks without error under the active configuration.
//!
//! # Concurrency
//!
//! The list is a plain single-owner structure. Borrowing rules already
//! forbid mutation while an iterator or node reference is alive.
//!
//! # Example
//!
//! ```
//! use nexus_slist::{SortedList, Value};
//!
//! let mut list = SortedList::new();
//! list.insert(3).unwrap();
//! list.insert(1).unwrap();
//! list.insert(2).unwrap();
//!
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! assert_eq!(list.index(&Value::Int(2)), Some(1));
//! assert_eq!(*list.get(-1).unwrap(), Value::Int(3));
//!
//! assert!(list.remove(&Value::Int(2)));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Runs
//!
//! Another list can be used as an ordered pattern:
//!
//! ```
//! use nexus_slist::SortedList;
//!
//! let host = SortedList::from_values([1, 2, 3, 4, 5]).unwrap();
//! let run = SortedList::from_values([3, 4]).unwrap();
//!
//! assert_eq!(host.index_of_run(&run), Some(2));
//! ```

use core::fmt::{self, Write};
use core::iter::FusedIterator;
use core::ops::Index;

use slab::Slab;
use tracing::{debug, trace};

use crate::node::Link;
use crate::{
    Node, Rank, Result, SequenceRank, SlistError, SortConfig, TextRank, Value, ValueKind,
};

/// A sorted, doubly-linked, index-addressable list of [`Value`]s.
#[derive(Clone)]
pub struct SortedList {
    nodes: Slab<Node>,
    head: Link,
    tail: Link,
    len: usize,
    config: SortConfig,
}

impl Default for SortedList {
    fn default() -> Self {
        Self::new()
    }
}

impl SortedList {
    /// Creates an empty list with the default ranking configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(SortConfig::default())
    }

    /// Creates an empty list with the given ranking configuration.
    #[inline]
    pub fn with_config(config: SortConfig) -> Self {
        Self {
            nodes: Slab::new(),
            head: Link::NONE,
            tail: Link::NONE,
            len: 0,
            config,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Creates a list holding `values`, inserted one by one in order.
    ///
    /// To seed from raw values and the contents of another list together,
    /// follow this with [`insert_from`](Self::insert_from):
    ///
    /// ```
    /// use nexus_slist::SortedList;
    ///
    /// let other = SortedList::from_values(["bb", "a"]).unwrap();
    /// let mut list = SortedList::from_values([3, 0]).unwrap();
    /// list.insert_from(&other).unwrap();
    ///
    /// assert_eq!(list.to_string(), "[0, 'a', 'bb', 3]");
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the first [`insert`](Self::insert) error.
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut list = Self::new();
        for value in values {
            list.insert(value)?;
        }
        Ok(list)
    }

    /// Returns the active ranking configuration.
    #[inline]
    pub const fn config(&self) -> SortConfig {
        self.config
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the list. Same as [`len`](Self::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first (lowest ranked) node.
    #[inline]
    pub fn front(&self) -> Option<&Node> {
        if self.head.is_none() {
            None
        } else {
            Some(self.node(self.head))
        }
    }

    /// Returns the last (highest ranked) node.
    #[inline]
    pub fn back(&self) -> Option<&Node> {
        if self.tail.is_none() {
            None
        } else {
            Some(self.node(self.tail))
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts a value at its sorted position.
    ///
    /// The scan starts at the head and stops at the first node the new value
    /// [precedes](crate::Rank::precedes). Values that rank equal to existing
    /// ones go after all of them. O(n).
    ///
    /// # Errors
    ///
    /// - [`SlistError::InvalidValueKind`] if the value cannot be ranked under
    ///   the active configuration.
    /// - [`SlistError::CapacityExceeded`] if every addressable slot is taken.
    ///
    /// The list is unchanged on error.
    pub fn insert(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let rank = self.config.rank(&value)?;
        let before = self.insertion_point(&rank)?;
        let key = Link::try_from_slot(self.nodes.vacant_key())
            .ok_or(SlistError::CapacityExceeded { len: self.len })?;

        let slot = self.nodes.insert(Node::new(value));
        debug_assert_eq!(slot, key.slot());
        if before.is_none() {
            self.link_back(key);
        } else {
            self.link_before(before, key);
        }

        trace!(slot = key.slot(), len = self.len, "inserted value");
        Ok(())
    }

    /// Inserts every value of `other`, one at a time in its iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`SlistError::InvalidValueKind`] if any value of `other`
    /// cannot be ranked under this list's configuration. Nothing is inserted
    /// in that case.
    pub fn insert_from(&mut self, other: &SortedList) -> Result<()> {
        for value in other.values() {
            self.config.rank(value)?;
        }
        for value in other.values() {
            self.insert(value.clone())?;
        }
        debug!(count = other.len(), len = self.len, "inserted values from list");
        Ok(())
    }

    /// First node that a value of `rank` precedes, or `NONE` to append.
    fn insertion_point(&self, rank: &Rank) -> Result<Link> {
        let mut curr = self.head;
        while curr.is_some() {
            let node = self.node(curr);
            if rank.precedes(&self.config.rank(node.value())?) {
                return Ok(curr);
            }
            curr = node.next;
        }
        Ok(Link::NONE)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the position of the first element of the same kind equal to
    /// `value` (see [`Value::same_as`]).
    pub fn index(&self, value: &Value) -> Option<usize> {
        self.values().position(|v| v.same_as(value))
    }

    /// Returns the start position of the first contiguous run of elements
    /// matching `pattern` element by element.
    ///
    /// After a partial match breaks, the scan resumes one position after
    /// where that partial match started. An empty pattern matches at `0` in
    /// any non-empty list.
    pub fn index_of_run(&self, pattern: &SortedList) -> Option<usize> {
        if pattern.is_empty() {
            return if self.is_empty() { None } else { Some(0) };
        }

        let mut start = self.head;
        let mut position = 0;
        while start.is_some() {
            let mut host = start;
            let mut needle = pattern.head;
            while needle.is_some()
                && host.is_some()
                && pattern.node(needle).value().same_as(self.node(host).value())
            {
                host = self.node(host).next;
                needle = pattern.node(needle).next;
            }

            if needle.is_none() {
                return Some(position);
            }
            if host.is_none() {
                // Fewer elements remain than the pattern holds.
                return None;
            }

            start = self.node(start).next;
            position += 1;
        }
        None
    }

    /// Returns the node at [`index(value)`](Self::index).
    pub fn find(&self, value: &Value) -> Option<&Node> {
        self.iter().find(|node| node.value().same_as(value))
    }

    /// Returns the node where [`index_of_run(pattern)`](Self::index_of_run)
    /// starts.
    pub fn find_run(&self, pattern: &SortedList) -> Option<&Node> {
        let position = self.index_of_run(pattern)?;
        self.iter().nth(position)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the first element matching `value` (see [`index`](Self::index)).
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &Value) -> bool {
        let key = self.link_of(value);
        if key.is_none() {
            return false;
        }
        self.unlink(key);
        trace!(slot = key.slot(), len = self.len, "removed value");
        true
    }

    /// Removes the first occurrence of each value of `pattern`, value by value.
    ///
    /// Returns `true` if at least one element was removed.
    pub fn remove_each(&mut self, pattern: &SortedList) -> bool {
        let before = self.len;
        let mut removed = false;
        for value in pattern.values() {
            removed |= self.remove(value);
        }
        debug!(removed = before - self.len, len = self.len, "removed values of list");
        removed
    }

    /// Removes every element matching `value`. Absent values are a no-op.
    pub fn remove_all(&mut self, value: &Value) {
        let removed = self.unlink_where(|v| v.same_as(value));
        trace!(removed, len = self.len, "removed all matches");
    }

    /// Applies [`remove_all`](Self::remove_all) to each value of `pattern`.
    pub fn remove_all_each(&mut self, pattern: &SortedList) {
        let before = self.len;
        for value in pattern.values() {
            self.remove_all(value);
        }
        debug!(removed = before - self.len, len = self.len, "removed all values of list");
    }

    /// Removes and returns the first value.
    pub fn pop_front(&mut self) -> Option<Value> {
        if self.head.is_none() {
            return None;
        }
        Some(self.unlink(self.head))
    }

    /// Removes and returns the last value.
    pub fn pop_back(&mut self) -> Option<Value> {
        if self.tail.is_none() {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Removes all elements. The configuration is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = Link::NONE;
        self.tail = Link::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Changes the ranking mode for `kind` and re-sorts the elements of that
    /// kind.
    ///
    /// Valid modes are `0`, `1` and `2` (see [`TextRank`] and
    /// [`SequenceRank`]). The elements of `kind` are taken out and inserted
    /// again under the new mode; other elements stay where they are relative
    /// to each other.
    ///
    /// # Errors
    ///
    /// - [`SlistError::InvalidSortMode`] if `mode` is outside `0..=2`.
    /// - [`SlistError::UnsupportedKindForSorting`] if `kind` is
    ///   [`ValueKind::Number`].
    /// - [`SlistError::InvalidValueKind`] if an element would not rank under
    ///   the new configuration.
    ///
    /// On error the list is untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_slist::{SortedList, ValueKind};
    ///
    /// let mut list = SortedList::from_values(["b", "aa"]).unwrap();
    /// assert_eq!(list.to_string(), "['b', 'aa']");
    ///
    /// list.resort(ValueKind::Text, 1).unwrap();
    /// assert_eq!(list.to_string(), "['aa', 'b']");
    /// ```
    pub fn resort(&mut self, kind: ValueKind, mode: i64) -> Result<()> {
        if !(0..=2).contains(&mode) {
            return Err(SlistError::InvalidSortMode { mode });
        }
        match kind {
            ValueKind::Text => self.set_text_rank(TextRank::try_from(mode)?),
            ValueKind::Sequence => self.set_sequence_rank(SequenceRank::try_from(mode)?),
            ValueKind::Number => Err(SlistError::UnsupportedKindForSorting { kind }),
        }
    }

    /// Switches text ranking to `text` and re-sorts the text elements.
    ///
    /// # Errors
    ///
    /// See [`resort`](Self::resort).
    pub fn set_text_rank(&mut self, text: TextRank) -> Result<()> {
        let config = SortConfig { text, ..self.config };
        self.reconfigure(ValueKind::Text, config)
    }

    /// Switches sequence ranking to `sequence` and re-sorts the sequence
    /// elements.
    ///
    /// # Errors
    ///
    /// See [`resort`](Self::resort).
    pub fn set_sequence_rank(&mut self, sequence: SequenceRank) -> Result<()> {
        let config = SortConfig {
            sequence,
            ..self.config
        };
        self.reconfigure(ValueKind::Sequence, config)
    }

    fn reconfigure(&mut self, kind: ValueKind, config: SortConfig) -> Result<()> {
        // Nothing moves until every element is known to rank under `config`.
        for value in self.values() {
            config.rank(value)?;
        }

        let mut extracted = SortedList::new();
        for value in self.values().filter(|v| v.kind() == kind) {
            extracted.insert(value.clone())?;
        }

        // Unlinked by position: values such as NaN never equal themselves.
        self.unlink_where(|value| value.kind() == kind);
        self.config = config;
        self.insert_from(&extracted)?;

        debug!(
            %kind,
            text = config.text.mode(),
            sequence = config.sequence.mode(),
            moved = extracted.len(),
            "re-sorted list"
        );
        Ok(())
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Returns the node at `index`.
    ///
    /// Non-negative indices count from the head, negative ones from the tail
    /// (`-1` is the last node). The walk starts at the nearer end of the two.
    ///
    /// # Errors
    ///
    /// Returns [`SlistError::IndexOutOfRange`] if `index` is past either end.
    pub fn get(&self, index: isize) -> Result<&Node> {
        let out_of_range = SlistError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let steps = index.unsigned_abs();

        let curr = if index >= 0 {
            if steps >= self.len {
                return Err(out_of_range);
            }
            let mut curr = self.head;
            for _ in 0..steps {
                curr = self.node(curr).next;
            }
            curr
        } else {
            if steps > self.len {
                return Err(out_of_range);
            }
            let mut curr = self.tail;
            for _ in 1..steps {
                curr = self.node(curr).prev;
            }
            curr
        };

        Ok(self.node(curr))
    }

    /// Returns the node at a dynamically typed index.
    ///
    /// # Errors
    ///
    /// - [`SlistError::InvalidIndexType`] if `index` is not an `Int`.
    /// - [`SlistError::IndexOutOfRange`] as for [`get`](Self::get).
    pub fn get_with(&self, index: &Value) -> Result<&Node> {
        match index {
            Value::Int(i) => match isize::try_from(*i) {
                Ok(i) => self.get(i),
                Err(_) => Err(SlistError::IndexOutOfRange {
                    index: if *i < 0 { isize::MIN } else { isize::MAX },
                    len: self.len,
                }),
            },
            other => Err(SlistError::InvalidIndexType { kind: other.kind() }),
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over nodes, head to tail.
    ///
    /// Each call starts again at the head.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns an iterator over values, head to tail.
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values { inner: self.iter() }
    }

    // ========================================================================
    // Links
    // ========================================================================

    #[inline]
    fn node(&self, key: Link) -> &Node {
        // Safety: callers only pass links reachable from head/tail, which
        // always name occupied slots (list invariant)
        unsafe { self.nodes.get_unchecked(key.slot()) }
    }

    #[inline]
    fn node_mut(&mut self, key: Link) -> &mut Node {
        // Safety: see `node`
        unsafe { self.nodes.get_unchecked_mut(key.slot()) }
    }

    /// Link of the first node matching `value`, or `NONE`.
    fn link_of(&self, value: &Value) -> Link {
        let mut curr = self.head;
        while curr.is_some() {
            let node = self.node(curr);
            if node.value().same_as(value) {
                return curr;
            }
            curr = node.next;
        }
        Link::NONE
    }

    /// Links an unlinked node to the back of the list.
    fn link_back(&mut self, key: Link) {
        let tail = self.tail;
        let node = self.node_mut(key);
        node.prev = tail;
        node.next = Link::NONE;

        if tail.is_some() {
            self.node_mut(tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Links an unlinked node before `before`.
    fn link_before(&mut self, before: Link, key: Link) {
        let prev = self.node(before).prev;
        let node = self.node_mut(key);
        node.next = before;
        node.prev = prev;

        self.node_mut(before).prev = key;

        if prev.is_some() {
            self.node_mut(prev).next = key;
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    /// Unlinks every node whose value satisfies `pred`, in one pass.
    fn unlink_where(&mut self, pred: impl Fn(&Value) -> bool) -> usize {
        let mut removed = 0;
        let mut curr = self.head;
        while curr.is_some() {
            let node = self.node(curr);
            let next = node.next;
            if pred(node.value()) {
                self.unlink(curr);
                removed += 1;
            }
            curr = next;
        }
        removed
    }

    /// Unlinks a node and frees its slot.
    fn unlink(&mut self, key: Link) -> Value {
        let node = self.nodes.remove(key.slot());
        let (prev, next) = (node.prev, node.next);

        if prev.is_some() {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        self.len -= 1;
        node.into_value()
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl fmt::Display for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::Text(s) => write!(f, "'{s}'")?,
                other => write!(f, "{other}")?,
            }
        }
        f.write_char(']')
    }
}

impl fmt::Debug for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl Index<isize> for SortedList {
    type Output = Node;

    /// # Panics
    ///
    /// Panics if `index` is out of range. Use [`SortedList::get`] to handle
    /// the error instead.
    fn index(&self, index: isize) -> &Node {
        match self.get(index) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over list nodes. See [`SortedList::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a SortedList,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(node)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over list values. See [`SortedList::values`].
#[derive(Clone)]
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Node::value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Node::value)
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

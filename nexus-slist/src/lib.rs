//! Sorted, doubly-linked, index-addressable list of mixed values.
//!
//! A [`SortedList`] holds numbers, text and nested sequences side by side
//! and keeps them ordered by a per-kind *rank* as they are inserted. Nodes
//! live in a slab and link to each other by slot, so the list supports
//! removal from anywhere, positional access from either end, and iteration
//! in both directions.
//!
//! # Quick Start
//!
//! ```
//! use nexus_slist::{SortedList, Value, ValueKind};
//!
//! let mut list = SortedList::new();
//! list.insert(5).unwrap();
//! list.insert("abc").unwrap();
//! list.insert(vec![1, 2]).unwrap();
//! list.insert(0.5).unwrap();
//!
//! // Text and sequences rank by length by default.
//! assert_eq!(list.to_string(), "[0.5, [1, 2], 'abc', 5]");
//!
//! // Rank text by the sum of its code points instead.
//! list.resort(ValueKind::Text, 2).unwrap();
//! assert_eq!(list.to_string(), "[0.5, [1, 2], 5, 'abc']");
//!
//! assert_eq!(list[-1], Value::from("abc"));
//! ```
//!
//! # Ranking
//!
//! | Kind | Mode 0 | Mode 1 | Mode 2 |
//! |------|--------|--------|--------|
//! | Number | value | value | value |
//! | Text | length | code points | code point sum |
//! | Sequence | length | element ranks | sum of element ranks |
//!
//! Modes are changed with [`SortedList::resort`] (or the typed
//! [`SortedList::set_text_rank`] / [`SortedList::set_sequence_rank`]). Only
//! the elements of the re-ranked kind move; see [`rank`] for how mixed
//! numeric and element-wise ranks compare.
//!
//! # Matching
//!
//! Search and removal match an element only when it has the same variant
//! and an equal value: `Int(5)` and `Float(5.0)` compare equal with `==`
//! but are different elements to [`SortedList::index`] and
//! [`SortedList::remove`].
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Value`], [`ValueKind`] and
//!   the ranking configuration types

#![warn(missing_docs)]

pub mod error;
pub mod list;
pub mod node;
pub mod rank;
pub mod value;

pub use error::{Result, SlistError};
pub use list::{Iter, SortedList, Values};
pub use node::Node;
pub use rank::{Rank, SequenceRank, SortConfig, TextRank};
pub use value::{Repr, Value, ValueKind};

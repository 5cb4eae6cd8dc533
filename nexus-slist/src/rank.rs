//! Rank projections that decide element order.
//!
//! Every comparison made while inserting goes through a [`Rank`]: a number,
//! or a sequence of ranks for the element-wise modes. Ranks are computed per
//! comparison from the list's [`SortConfig`] and never cached, so changing
//! the configuration changes the order of subsequent insertions.
//!
//! | Kind | Mode 0 | Mode 1 | Mode 2 |
//! |------|--------|--------|--------|
//! | Text | length | code points | code point sum |
//! | Sequence | length | element ranks | sum of element ranks |
//!
//! Numbers always rank as themselves.
//!
//! # Example
//!
//! ```
//! use nexus_slist::{Rank, SortConfig, TextRank, Value};
//!
//! let config = SortConfig::default();
//! assert_eq!(config.rank(&Value::from("abc")).unwrap(), Rank::Scalar(3.0));
//!
//! let config = SortConfig { text: TextRank::CodePoints, ..config };
//! let rank = config.rank(&Value::from("ab")).unwrap();
//! assert_eq!(rank, Rank::Seq(vec![Rank::Scalar(97.0), Rank::Scalar(98.0)]));
//! ```

use core::cmp::Ordering;

use crate::{Result, SlistError, Value, ValueKind};

/// Comparable projection of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rank {
    /// Single number.
    Scalar(f64),
    /// Element-wise rank, compared position by position.
    Seq(Vec<Rank>),
}

/// How text values are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextRank {
    /// Number of characters (mode 0).
    #[default]
    Length,
    /// Code point of each character, compared in order (mode 1).
    CodePoints,
    /// Sum of all code points (mode 2).
    CodePointSum,
}

/// How nested sequence values are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceRank {
    /// Number of elements (mode 0).
    #[default]
    Length,
    /// Rank of each element, compared in order (mode 1).
    Elements,
    /// Sum of the element ranks (mode 2).
    Sum,
}

macro_rules! impl_mode {
    ($ty:ident { $($variant:ident = $mode:literal),* }) => {
        impl $ty {
            /// Returns the numeric mode of this setting.
            #[inline]
            pub const fn mode(self) -> i64 {
                match self {
                    $($ty::$variant => $mode,)*
                }
            }
        }

        impl TryFrom<i64> for $ty {
            type Error = SlistError;

            fn try_from(mode: i64) -> Result<Self> {
                match mode {
                    $($mode => Ok($ty::$variant),)*
                    _ => Err(SlistError::InvalidSortMode { mode }),
                }
            }
        }
    };
}

impl_mode!(TextRank { Length = 0, CodePoints = 1, CodePointSum = 2 });
impl_mode!(SequenceRank { Length = 0, Elements = 1, Sum = 2 });

/// Ranking configuration of a list.
///
/// The default ranks both text and sequences by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortConfig {
    /// Ranking of text values.
    pub text: TextRank,
    /// Ranking of nested sequence values.
    pub sequence: SequenceRank,
}

impl SortConfig {
    /// Creates a configuration from the two settings.
    #[inline]
    pub const fn new(text: TextRank, sequence: SequenceRank) -> Self {
        Self { text, sequence }
    }

    /// Computes the rank of `value` under this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SlistError::InvalidValueKind`] when a sequence is ranked by
    /// [`SequenceRank::Sum`] and one of its elements does not reduce to a
    /// number (for example text ranked by [`TextRank::CodePoints`]).
    pub fn rank(&self, value: &Value) -> Result<Rank> {
        match value {
            Value::Int(v) => Ok(Rank::Scalar(*v as f64)),
            Value::Float(v) => Ok(Rank::Scalar(*v)),
            Value::Text(s) => Ok(match self.text {
                TextRank::Length => Rank::Scalar(s.chars().count() as f64),
                TextRank::CodePoints => {
                    Rank::Seq(s.chars().map(|c| Rank::Scalar(f64::from(u32::from(c)))).collect())
                }
                TextRank::CodePointSum => {
                    Rank::Scalar(s.chars().map(|c| f64::from(u32::from(c))).sum())
                }
            }),
            Value::Seq(items) => match self.sequence {
                SequenceRank::Length => Ok(Rank::Scalar(items.len() as f64)),
                SequenceRank::Elements => items
                    .iter()
                    .map(|item| self.rank(item))
                    .collect::<Result<Vec<_>>>()
                    .map(Rank::Seq),
                SequenceRank::Sum => {
                    let mut total = 0.0;
                    for item in items {
                        match self.rank(item)? {
                            Rank::Scalar(v) => total += v,
                            Rank::Seq(_) => {
                                return Err(SlistError::InvalidValueKind {
                                    kind: ValueKind::Sequence,
                                    reason: "element rank does not reduce to a number",
                                });
                            }
                        }
                    }
                    Ok(Rank::Scalar(total))
                }
            },
        }
    }
}

impl Rank {
    /// Returns `true` if a new element of rank `self` belongs strictly before
    /// an existing element of rank `current`.
    ///
    /// Both ranks are first collapsed to numbers:
    ///
    /// - Two sequences are walked together. The first differing position
    ///   decides. When one runs out first, or a position cannot be compared,
    ///   both collapse to their lengths (the shorter one wins).
    /// - A sequence against a number is walked until an element differs from
    ///   the number. That element stands in for the sequence. A nested
    ///   sequence element, or running out, makes the pair equal.
    ///
    /// Equal ranks never precede each other, which keeps insertion stable.
    pub fn precedes(&self, current: &Rank) -> bool {
        let (new, current) = settle(self, current);
        new < current
    }
}

/// Collapses `(new, current)` to a pair of numbers.
fn settle(new: &Rank, current: &Rank) -> (f64, f64) {
    match (new, current) {
        (Rank::Scalar(n), Rank::Scalar(c)) => (*n, *c),
        (Rank::Seq(n), Rank::Seq(c)) => {
            for (x, y) in n.iter().zip(c) {
                match order(y, x) {
                    Some(Ordering::Less) => return (1.0, 0.0),
                    Some(Ordering::Greater) => return (0.0, 1.0),
                    Some(Ordering::Equal) => continue,
                    None => break,
                }
            }
            (n.len() as f64, c.len() as f64)
        }
        (Rank::Scalar(n), Rank::Seq(c)) => (*n, stand_in(c, *n)),
        (Rank::Seq(n), Rank::Scalar(c)) => (stand_in(n, *c), *c),
    }
}

/// First element of `seq` that differs from `scalar`, or `scalar` itself.
fn stand_in(seq: &[Rank], scalar: f64) -> f64 {
    for item in seq {
        match item {
            Rank::Scalar(v) if *v != scalar => return *v,
            Rank::Scalar(_) => continue,
            Rank::Seq(_) => return scalar,
        }
    }
    scalar
}

/// Element order inside a sequence walk. Unordered scalars (NaN) compare
/// equal; a scalar against a sequence has no order.
fn order(a: &Rank, b: &Rank) -> Option<Ordering> {
    match (a, b) {
        (Rank::Scalar(x), Rank::Scalar(y)) => Some(if x < y {
            Ordering::Less
        } else if x > y {
            Ordering::Greater
        } else {
            Ordering::Equal
        }),
        (Rank::Seq(x), Rank::Seq(y)) => {
            for (p, q) in x.iter().zip(y) {
                match order(p, q)? {
                    Ordering::Equal => continue,
                    decided => return Some(decided),
                }
            }
            Some(x.len().cmp(&y.len()))
        }
        _ => None,
    }
}

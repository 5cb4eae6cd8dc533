//! Element values held by a [`SortedList`](crate::SortedList).
//!
//! The set of storable kinds is closed: numbers (integral or real), text,
//! and nested sequences of further values. Ordering inside the list is
//! decided by [`SortConfig::rank`](crate::SortConfig::rank), not by the
//! natural comparisons implemented here. The natural comparisons and the
//! arithmetic family are what list nodes expose to callers.
//!
//! # Example
//!
//! ```
//! use nexus_slist::Value;
//!
//! let a = Value::from(7);
//! let b = Value::from(2);
//!
//! assert_eq!(a.try_floor_div(&b).unwrap(), Value::Int(3));
//! assert_eq!(a.try_div(&b).unwrap(), Value::Float(3.5));
//! assert_eq!(Value::from("ab").try_mul(&b).unwrap(), Value::from("abab"));
//!
//! // Natural equality is numeric across Int/Float, kind-exact matching is not.
//! assert_eq!(Value::Int(3), Value::Float(3.0));
//! assert!(!Value::Int(3).same_as(&Value::Float(3.0)));
//! ```

use core::cmp::Ordering;
use core::fmt::{self, Write};

use crate::{Result, SlistError};

/// The closed category a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Integral or real number.
    Number,
    /// String of characters.
    Text,
    /// Ordered sequence of further values.
    Sequence,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Sequence => "sequence",
        })
    }
}

/// A value stored in a list node.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// Integral number.
    Int(i64),
    /// Real number.
    Float(f64),
    /// Text.
    Text(String),
    /// Nested ordered sequence.
    Seq(Vec<Value>),
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) | Value::Float(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Seq(_) => ValueKind::Sequence,
        }
    }

    /// Returns the numeric value for `Int` and `Float`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text for `Text` values.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements for `Seq` values.
    #[inline]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Kind-exact match: same variant and naturally equal.
    ///
    /// This is the matching rule used by list search and removal, so a
    /// stored `Int(3)` is not found by `Float(3.0)` nor by `Text("3")`.
    #[inline]
    pub fn same_as(&self, other: &Value) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other) && self == other
    }

    /// Returns the element at `index` of a sequence, or the character at
    /// `index` of a text (as a one-character `Text`).
    ///
    /// Negative indices count from the end, `-1` being the last element.
    ///
    /// # Errors
    ///
    /// - [`SlistError::IndexOutOfRange`] if `index` is past either end.
    /// - [`SlistError::UnsupportedOperation`] if the value is a number.
    pub fn get(&self, index: isize) -> Result<Value> {
        match self {
            Value::Seq(items) => {
                let pos = resolve_index(index, items.len())?;
                Ok(items[pos].clone())
            }
            Value::Text(s) => {
                let len = s.chars().count();
                let pos = resolve_index(index, len)?;
                let c = s
                    .chars()
                    .nth(pos)
                    .ok_or(SlistError::IndexOutOfRange { index, len })?;
                Ok(Value::Text(c.to_string()))
            }
            Value::Int(_) | Value::Float(_) => Err(SlistError::UnsupportedOperation {
                op: "[]",
                lhs: ValueKind::Number,
                rhs: ValueKind::Number,
            }),
        }
    }

    /// Returns a displayable form that quotes text, as used inside sequences.
    #[inline]
    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Adds numbers, or concatenates two texts or two sequences.
    pub fn try_add(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "+";
        match (self, rhs) {
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{a}{b}"))),
            (Value::Seq(a), Value::Seq(b)) => {
                Ok(Value::Seq(a.iter().chain(b).cloned().collect()))
            }
            _ => match operands(self, rhs) {
                Some(Operands::Ints(a, b)) => a
                    .checked_add(b)
                    .map(Value::Int)
                    .ok_or(SlistError::Overflow { op: OP }),
                Some(Operands::Floats(a, b)) => Ok(Value::Float(a + b)),
                None => Err(unsupported(OP, self, rhs)),
            },
        }
    }

    /// Subtracts numbers.
    pub fn try_sub(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "-";
        match operands(self, rhs) {
            Some(Operands::Ints(a, b)) => a
                .checked_sub(b)
                .map(Value::Int)
                .ok_or(SlistError::Overflow { op: OP }),
            Some(Operands::Floats(a, b)) => Ok(Value::Float(a - b)),
            None => Err(unsupported(OP, self, rhs)),
        }
    }

    /// Multiplies numbers, or repeats a text or sequence by an integer count.
    ///
    /// Non-positive counts produce an empty text or sequence.
    pub fn try_mul(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "*";
        match (self, rhs) {
            (Value::Text(s), Value::Int(n)) | (Value::Int(n), Value::Text(s)) => {
                Ok(Value::Text(s.repeat(repeat_count(*n))))
            }
            (Value::Seq(items), Value::Int(n)) | (Value::Int(n), Value::Seq(items)) => {
                let count = repeat_count(*n);
                let mut out = Vec::with_capacity(items.len().saturating_mul(count));
                for _ in 0..count {
                    out.extend_from_slice(items);
                }
                Ok(Value::Seq(out))
            }
            _ => match operands(self, rhs) {
                Some(Operands::Ints(a, b)) => a
                    .checked_mul(b)
                    .map(Value::Int)
                    .ok_or(SlistError::Overflow { op: OP }),
                Some(Operands::Floats(a, b)) => Ok(Value::Float(a * b)),
                None => Err(unsupported(OP, self, rhs)),
            },
        }
    }

    /// True division. Always produces a `Float`.
    pub fn try_div(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "/";
        let (a, b) = match operands(self, rhs) {
            Some(Operands::Ints(a, b)) => (a as f64, b as f64),
            Some(Operands::Floats(a, b)) => (a, b),
            None => return Err(unsupported(OP, self, rhs)),
        };
        if b == 0.0 {
            return Err(SlistError::DivisionByZero { op: OP });
        }
        Ok(Value::Float(a / b))
    }

    /// Floor division, rounding toward negative infinity.
    pub fn try_floor_div(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "//";
        match operands(self, rhs) {
            Some(Operands::Ints(_, 0)) => Err(SlistError::DivisionByZero { op: OP }),
            Some(Operands::Ints(a, b)) => {
                let q = a.checked_div(b).ok_or(SlistError::Overflow { op: OP })?;
                // Truncation rounds toward zero; step down when the signs differ.
                if a % b != 0 && ((a < 0) != (b < 0)) {
                    Ok(Value::Int(q - 1))
                } else {
                    Ok(Value::Int(q))
                }
            }
            Some(Operands::Floats(_, b)) if b == 0.0 => Err(SlistError::DivisionByZero { op: OP }),
            Some(Operands::Floats(a, b)) => Ok(Value::Float((a / b).floor())),
            None => Err(unsupported(OP, self, rhs)),
        }
    }

    /// Remainder whose sign follows the divisor.
    pub fn try_rem(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "%";
        match operands(self, rhs) {
            Some(Operands::Ints(_, 0)) => Err(SlistError::DivisionByZero { op: OP }),
            Some(Operands::Ints(a, b)) => {
                let r = a.wrapping_rem(b);
                if r != 0 && ((r < 0) != (b < 0)) {
                    Ok(Value::Int(r + b))
                } else {
                    Ok(Value::Int(r))
                }
            }
            Some(Operands::Floats(_, b)) if b == 0.0 => Err(SlistError::DivisionByZero { op: OP }),
            Some(Operands::Floats(a, b)) => {
                let r = a % b;
                if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                    Ok(Value::Float(r + b))
                } else {
                    Ok(Value::Float(r))
                }
            }
            None => Err(unsupported(OP, self, rhs)),
        }
    }

    /// Exponentiation. An integer base with a negative integer exponent
    /// produces a `Float`.
    pub fn try_pow(&self, rhs: &Value) -> Result<Value> {
        const OP: &str = "**";
        match operands(self, rhs) {
            Some(Operands::Ints(a, b)) if b >= 0 => u32::try_from(b)
                .ok()
                .and_then(|exp| a.checked_pow(exp))
                .map(Value::Int)
                .ok_or(SlistError::Overflow { op: OP }),
            Some(Operands::Ints(0, _)) => Err(SlistError::DivisionByZero { op: OP }),
            Some(Operands::Ints(a, b)) => Ok(Value::Float((a as f64).powf(b as f64))),
            Some(Operands::Floats(a, b)) if a == 0.0 && b < 0.0 => {
                Err(SlistError::DivisionByZero { op: OP })
            }
            Some(Operands::Floats(a, b)) => Ok(Value::Float(a.powf(b))),
            None => Err(unsupported(OP, self, rhs)),
        }
    }
}

enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

#[inline]
fn operands(lhs: &Value, rhs: &Value) -> Option<Operands> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Some(Operands::Ints(*a, *b)),
        _ => Some(Operands::Floats(lhs.as_f64()?, rhs.as_f64()?)),
    }
}

#[inline]
fn unsupported(op: &'static str, lhs: &Value, rhs: &Value) -> SlistError {
    SlistError::UnsupportedOperation {
        op,
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}

#[inline]
fn repeat_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Maps a possibly negative index onto `0..len`.
pub(crate) fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let pos = if index >= 0 {
        index.unsigned_abs()
    } else {
        len.checked_sub(index.unsigned_abs())
            .ok_or(SlistError::IndexOutOfRange { index, len })?
    };
    if pos < len {
        Ok(pos)
    } else {
        Err(SlistError::IndexOutOfRange { index, len })
    }
}

// =============================================================================
// Natural comparison
// =============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Seq(a), Value::Seq(b)) => {
                for (x, y) in a.iter().zip(b) {
                    if x != y {
                        return x.partial_cmp(y);
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl AsRef<Value> for Value {
    #[inline]
    fn as_ref(&self) -> &Value {
        self
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write_float(f, *v),
            Value::Text(s) => f.write_str(s),
            Value::Seq(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.repr())?;
                }
                f.write_char(']')
            }
        }
    }
}

/// Display adapter that renders text quoted. See [`Value::repr`].
#[derive(Debug, Clone, Copy)]
pub struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Text(s) => write_quoted(f, s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("nan")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "inf" } else { "-inf" })
    } else if v != 0.0 && (v.abs() >= 1e16 || v.abs() < 1e-4) {
        write_exponent(f, v)
    } else if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

/// Scientific form with a signed, two-digit minimum exponent: `1e+16`,
/// `2.5e-07`.
fn write_exponent(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let formatted = format!("{v:e}");
    let (mantissa, exp) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

//! Tagged payload for lists that mix value types.
//!
//! [`List`](crate::List) is generic over one payload type. When a single list
//! has to carry integers next to strings, the payload is [`Value`] and reads
//! go through [`FromValue`], which fails with
//! [`ChainError::TypeMismatch`] when the stored tag is not the one asked for.

use core::fmt;

use crate::ChainError;

/// Closed set of payload kinds a heterogeneous list can hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Any integer; narrower integer types widen into it.
    Int(i64),
    /// Floating point; `f32` widens into it.
    Float(f64),
    /// Single character.
    Char(char),
    /// Owned string.
    Str(String),
}

impl Value {
    /// Name of this value's tag, as reported in type mismatches.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the integer if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Into Value
// =============================================================================

macro_rules! impl_from_for_value {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(Int => i8, i16, i32, i64, u8, u16, u32);
impl_from_for_value!(Float => f32, f64);
impl_from_for_value!(Bool => bool);
impl_from_for_value!(Char => char);
impl_from_for_value!(Str => String, &str);

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

// =============================================================================
// Out of Value
// =============================================================================

/// Conversion from a stored payload into a caller's destination type.
///
/// Every `Clone` type converts from itself, so homogeneous lists never fail.
/// Primitive types convert from the matching [`Value`] tag.
///
/// # Example
///
/// ```
/// use nexus_chain::{ChainError, FromValue, Value};
///
/// assert_eq!(i64::from_value(&Value::Int(7)), Ok(7));
/// assert_eq!(
///     i64::from_value(&Value::from("seven")),
///     Err(ChainError::TypeMismatch { expected: "i64", found: "str" })
/// );
/// ```
pub trait FromValue<V>: Sized {
    /// Converts `value`, or reports why it cannot be.
    fn from_value(value: &V) -> Result<Self, ChainError>;
}

impl<T: Clone> FromValue<T> for T {
    #[inline]
    fn from_value(value: &T) -> Result<Self, ChainError> {
        Ok(value.clone())
    }
}

#[inline]
fn mismatch(expected: &'static str, found: &Value) -> ChainError {
    ChainError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

macro_rules! impl_from_value {
    ($ty:ty, $name:literal, $pat:pat => $out:expr) => {
        impl FromValue<Value> for $ty {
            #[inline]
            fn from_value(value: &Value) -> Result<Self, ChainError> {
                match value {
                    $pat => Ok($out),
                    other => Err(mismatch($name, other)),
                }
            }
        }
    };
}

impl_from_value!(bool, "bool", Value::Bool(b) => *b);
impl_from_value!(i64, "i64", Value::Int(i) => *i);
impl_from_value!(f64, "f64", Value::Float(x) => *x);
impl_from_value!(char, "char", Value::Char(c) => *c);
impl_from_value!(String, "String", Value::Str(s) => s.clone());

// Narrow integers reject an `Int` that does not fit.
macro_rules! impl_from_value_narrow {
    ($($ty:ty => $name:literal),*) => {
        $(
            impl FromValue<Value> for $ty {
                fn from_value(value: &Value) -> Result<Self, ChainError> {
                    match value {
                        Value::Int(i) => <$ty>::try_from(*i).map_err(|_| mismatch($name, value)),
                        other => Err(mismatch($name, other)),
                    }
                }
            }
        )*
    };
}

impl_from_value_narrow!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32"
);

impl FromValue<Value> for f32 {
    fn from_value(value: &Value) -> Result<Self, ChainError> {
        match value {
            Value::Float(x) => {
                let narrowed = *x as f32;
                if x.is_finite() && !narrowed.is_finite() {
                    return Err(mismatch("f32", value));
                }
                Ok(narrowed)
            }
            other => Err(mismatch("f32", other)),
        }
    }
}

impl<T: FromValue<Value>> FromValue<Value> for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ChainError> {
        match value {
            Value::Nil => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

use crate::value::Value;
use std::{any::Any, sync::Arc};

///
/// ToValue
///
/// Read side of the conversion boundary. Implemented for borrowed and
/// unsized forms too, so getters may hand back `&str` or `&Arc<T>`.
///

pub trait ToValue {
    fn to_value(&self) -> Value;
}

///
/// FromValue
///
/// Write side of the conversion boundary. `None` means the value does not
/// fit this type and is reported as a type mismatch.
///

pub trait FromValue: Sized {
    #[must_use]
    fn from_value(value: &Value) -> Option<Self>;
}

///
/// FieldValue
///
/// Anything usable as a bean field type.
///

pub trait FieldValue: ToValue + FromValue {}

impl<T> FieldValue for T where T: ToValue + FromValue {}

// ---------------------------------------------------------------------------
// wrappers
// ---------------------------------------------------------------------------

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &mut T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Self::new)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

// Shared objects travel by reference: the target ends up holding the very
// same allocation as the source.
impl<T: Any + Send + Sync> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        Value::object(Self::clone(self))
    }
}

impl<T: Any + Send + Sync> FromValue for Arc<T> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?.downcast::<T>()
    }
}

// ---------------------------------------------------------------------------
// scalars
// ---------------------------------------------------------------------------

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Option<Self> {
        let mut chars = value.as_text()?.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v as Self),
            _ => None,
        }
    }
}

// impl_integer_value
// Integers accept either integer variant as long as the number fits.
macro_rules! impl_integer_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl ToValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }

            impl FromValue for $type {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(v) => Self::try_from(*v).ok(),
                        Value::Uint(v) => Self::try_from(*v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_integer_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);

// impl_pointer_sized_value
// `usize` and `isize` are at most 64 bits wide on every target Rust supports,
// so widening them is lossless; the way back stays range-checked.
macro_rules! impl_pointer_sized_value {
    ( $( $type:ty => $variant:ident as $wide:ty ),* $(,)? ) => {
        $(
            impl ToValue for $type {
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $wide)
                }
            }

            impl FromValue for $type {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(v) => Self::try_from(*v).ok(),
                        Value::Uint(v) => Self::try_from(*v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_pointer_sized_value!(
    isize => Int as i64,
    usize => Uint as u64,
);

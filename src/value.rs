//! Field shapes and text → value conversion.
//!
//! Every bindable field type implements [`Field`], which exposes the field as
//! one [`Slot`] variant. The binder only ever matches on `Slot`; it never needs
//! to know the concrete Rust type.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::Bind;
use crate::types::ScalarKind;

/// A field, seen through the one shape the binder dispatches on.
pub enum Slot<'a> {
    /// String, bool, signed integer, or float.
    Scalar(&'a mut dyn ScalarField),
    /// `Vec` of a scalar, filled from a comma-separated value.
    Sequence(&'a mut dyn SequenceField),
    /// Nested struct, bound recursively under an extended prefix.
    Struct(&'a mut dyn Bind),
    /// Anything else. The string names the kind in error messages.
    Unsupported(&'static str),
}

/// A type that can appear as a struct field in a [`Bind`] implementation.
pub trait Field {
    fn slot(&mut self) -> Slot<'_>;
}

/// A primitive parsed directly from variable text.
pub trait Scalar: Sized {
    const KIND: ScalarKind;
    /// Rust type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Parse `raw` as-is. Empty-string defaulting is the caller's concern.
    fn parse_env(raw: &str) -> Result<Self, String>;
}

/// Object-safe assignment for scalar fields.
pub trait ScalarField {
    fn kind(&self) -> ScalarKind;
    fn type_name(&self) -> &'static str;
    fn assign(&mut self, raw: &str) -> Result<(), String>;
}

impl<T: Scalar> ScalarField for T {
    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn assign(&mut self, raw: &str) -> Result<(), String> {
        *self = T::parse_env(raw)?;
        Ok(())
    }
}

/// Object-safe assignment for sequence fields.
pub trait SequenceField {
    fn element_kind(&self) -> ScalarKind;
    fn element_type_name(&self) -> &'static str;
    /// Replace the whole sequence with the parsed `elements`.
    fn assign_all(&mut self, elements: &[&str]) -> Result<(), ElementError>;
}

/// The element of a sequence that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementError {
    pub index: usize,
    pub value: String,
    pub reason: String,
}

impl<T: Scalar> SequenceField for Vec<T> {
    fn element_kind(&self) -> ScalarKind {
        T::KIND
    }

    fn element_type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn assign_all(&mut self, elements: &[&str]) -> Result<(), ElementError> {
        let parsed = elements
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                T::parse_env(raw).map_err(|reason| ElementError {
                    index,
                    value: raw.to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        *self = parsed;
        Ok(())
    }
}

impl<T: Scalar> Field for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Sequence(self)
    }
}

/// Boolean literals: `1 t T TRUE true True` and `0 f F FALSE false False`.
/// Other casings such as `tRuE` are rejected.
pub fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(
            "expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False".to_string(),
        ),
    }
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;
    const TYPE_NAME: &'static str = "String";

    fn parse_env(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;
    const TYPE_NAME: &'static str = "bool";

    fn parse_env(raw: &str) -> Result<Self, String> {
        parse_bool(raw)
    }
}

macro_rules! numeric_scalar {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = $kind;
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_env(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )+
    };
}

numeric_scalar!(ScalarKind::Int => i8, i16, i32, i64, i128, isize);
numeric_scalar!(ScalarKind::Float => f32, f64);

macro_rules! scalar_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Scalar(self)
                }
            }
        )+
    };
}

scalar_field!(String, bool, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! unsupported_field {
    ($($kind:literal => $ty:ty),+ $(,)?) => {
        $(
            impl Field for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported($kind)
                }
            }

            impl Field for Vec<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(concat!("Vec<", $kind, ">"))
                }
            }
        )+
    };
}

unsupported_field!(
    "u8" => u8,
    "u16" => u16,
    "u32" => u32,
    "u64" => u64,
    "u128" => u128,
    "usize" => usize,
    "char" => char,
    "path" => PathBuf,
);

impl<T> Field for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("option")
    }
}

impl<T> Field for Vec<Option<T>> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("Vec<option>")
    }
}

impl<K, V, S> Field for Vec<HashMap<K, V, S>> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("Vec<map>")
    }
}

impl<T> Field for Vec<Vec<T>> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("Vec<Vec>")
    }
}

impl<K, V, S> Field for HashMap<K, V, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("map")
    }
}

impl<K, V> Field for BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("map")
    }
}

//! Fill typed, nested Rust structs from environment variables using per-field
//! tags.
//!
//! Each field is bound through a tag of the form `NAME` or `NAME,omitempty`.
//! The variable read for a field is the current prefix followed by the tag
//! name, with nothing inserted between them. Nested structs extend the prefix
//! with their own tag name, so keys are always fully qualified from the root:
//!
//! ```ignore
//! #[derive(Default)]
//! struct AppConfig {
//!     name: String,
//!     ports: Vec<i32>,
//!     db: DbConfig,
//! }
//!
//! #[derive(Default)]
//! struct DbConfig {
//!     host: String,
//!     pool: i64,
//! }
//!
//! envtag::bind_struct! {
//!     AppConfig { name: "NAME", ports: "PORTS", db: "DB_" }
//!     DbConfig { host: "HOST", pool: "POOL,omitempty" }
//! }
//!
//! // APP_NAME, APP_PORTS, APP_DB_HOST, APP_DB_POOL
//! let mut config = AppConfig::default();
//! envtag::bind("APP_", &mut config)?;
//! ```
//!
//! # Conversion rules
//!
//! | Field type | Empty / unset variable | Otherwise |
//! |------------|------------------------|-----------|
//! | `String` | `""` | verbatim |
//! | `bool` | `false` | `1 t T TRUE true True 0 f F FALSE false False` |
//! | `i8`..`i128`, `isize` | `0` | base 10, must fit the width |
//! | `f32`, `f64` | `0.0` | decimal or exponent notation |
//! | `Vec<T>` | one element, `T`'s zero value | split on `,`, each element parsed as `T` |
//! | nested struct | recurse | recurse |
//!
//! With `omitempty`, an empty or unset variable leaves the field as it was.
//! A field with an empty tag name is never touched. Any other field type
//! (unsigned integers, `Option`, maps, ...) fails with
//! [`EnvtagError::UnsupportedType`] when it is reached.
//!
//! # Error handling
//!
//! Binding stops at the first failure, in declaration order, depth first.
//! Fields assigned before the failure are not rolled back, so a target that
//! failed to bind should be discarded. Errors raised inside a nested struct
//! are wrapped in [`EnvtagError::Nested`]; [`EnvtagError::root_cause`] and
//! [`EnvtagError::key`] see through the wrapping.
//!
//! # Sources
//!
//! [`bind`] reads the process environment. Anything implementing
//! [`EnvSource`] can stand in for it, including `HashMap`s, `BTreeMap`s and
//! closures, which keeps tests free of global state.

pub mod error;
pub mod types;

mod binder;
mod macros;
mod source;
mod value;

#[cfg(test)]
mod fixtures;

pub use binder::{Bind, Binder, Fields};
pub use error::EnvtagError;
pub use source::{EnvSource, ProcessEnv, vars_from};
pub use types::{ScalarKind, Tag};
pub use value::{ElementError, Field, Scalar, ScalarField, SequenceField, Slot, parse_bool};

/// Bind `target` from the process environment under `prefix`.
pub fn bind<T: Bind + ?Sized>(prefix: &str, target: &mut T) -> Result<(), EnvtagError> {
    Binder::new().prefix(prefix).bind(target)
}

/// Bind `target` from an explicit variable source under `prefix`.
pub fn bind_with<S, T>(prefix: &str, source: S, target: &mut T) -> Result<(), EnvtagError>
where
    S: EnvSource,
    T: Bind + ?Sized,
{
    Binder::new().prefix(prefix).source(source).bind(target)
}

use tracing::{debug, trace};

use crate::error::EnvtagError;
use crate::source::{self, EnvSource, ProcessEnv};
use crate::types::Tag;
use crate::value::{Field, ScalarField, SequenceField, Slot};

/// A struct whose fields can be filled from environment variables.
///
/// Implementations visit every field in declaration order, passing its tag and
/// a mutable reference to [`Fields::field`]. Usually generated by
/// [`bind_struct!`](crate::bind_struct).
pub trait Bind {
    fn bind_fields(&mut self, fields: &mut Fields<'_>) -> Result<(), EnvtagError>;
}

/// Per-struct traversal state handed to [`Bind::bind_fields`].
pub struct Fields<'a> {
    prefix: String,
    source: &'a dyn EnvSource,
}

impl<'a> Fields<'a> {
    fn new(prefix: String, source: &'a dyn EnvSource) -> Self {
        Self { prefix, source }
    }

    /// The prefix every key in this struct is built from.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Bind one field from the variable `prefix + tag name`.
    ///
    /// Nested structs always recurse, even under an empty tag name. Other
    /// fields are skipped when the name is empty, or when the value is empty
    /// and the tag carries `omitempty`.
    pub fn field<F: Field + ?Sized>(&mut self, tag: &str, value: &mut F) -> Result<(), EnvtagError> {
        let tag = Tag::parse(tag);
        let key = tag.key(&self.prefix);

        let leaf = match value.slot() {
            Slot::Struct(inner) => {
                debug!(key = %key, "binding nested struct");
                let mut nested = Fields::new(key.clone(), self.source);
                return inner
                    .bind_fields(&mut nested)
                    .map_err(|e| EnvtagError::nested(&key, e));
            }
            Slot::Scalar(field) => Leaf::Scalar(field),
            Slot::Sequence(field) => Leaf::Sequence(field),
            Slot::Unsupported(kind) => Leaf::Unsupported(kind),
        };

        if tag.name.is_empty() {
            trace!(prefix = %self.prefix, "skipping untagged field");
            return Ok(());
        }

        let raw = source::lookup(self.source, &key);
        if raw.is_empty() && tag.omit_empty {
            trace!(key = %key, "skipping empty omitempty field");
            return Ok(());
        }

        trace!(key = %key, value = %raw, "assigning field");
        assign(leaf, &key, &raw)
    }
}

/// A field that is read from a single variable.
enum Leaf<'a> {
    Scalar(&'a mut dyn ScalarField),
    Sequence(&'a mut dyn SequenceField),
    Unsupported(&'static str),
}

fn assign(leaf: Leaf<'_>, key: &str, raw: &str) -> Result<(), EnvtagError> {
    match leaf {
        Leaf::Scalar(field) => {
            let text = if raw.is_empty() {
                field.kind().empty_default()
            } else {
                raw
            };
            field.assign(text).map_err(|reason| {
                debug!(key, ty = field.type_name(), %reason, "conversion failed");
                EnvtagError::Conversion {
                    key: key.to_string(),
                    value: raw.to_string(),
                    ty: field.type_name(),
                    reason,
                }
            })
        }
        Leaf::Sequence(field) => {
            // An empty value splits into a single element holding the zero value.
            let elements: Vec<&str> = if raw.is_empty() {
                vec![field.element_kind().empty_default()]
            } else {
                raw.split(',').collect()
            };
            field.assign_all(&elements).map_err(|e| {
                debug!(key, index = e.index, reason = %e.reason, "element conversion failed");
                EnvtagError::Conversion {
                    key: key.to_string(),
                    value: e.value,
                    ty: field.element_type_name(),
                    reason: format!(
                        "{} element {}: {}",
                        field.element_kind(),
                        e.index,
                        e.reason
                    ),
                }
            })
        }
        Leaf::Unsupported(kind) => Err(EnvtagError::UnsupportedType {
            key: key.to_string(),
            kind,
        }),
    }
}

/// Configures where values come from and the root prefix, then binds.
///
/// ```ignore
/// let mut config = AppConfig::default();
/// Binder::new().prefix("APP_").bind(&mut config)?;
/// ```
pub struct Binder<S = ProcessEnv> {
    prefix: String,
    source: S,
}

impl Binder<ProcessEnv> {
    /// Empty prefix, reading the process environment.
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            source: ProcessEnv,
        }
    }
}

impl Default for Binder<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> Binder<S> {
    /// Set the root prefix. Include any separator yourself, e.g. `"APP_"`.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Replace the variable source (maps, closures, [`ProcessEnv`]).
    pub fn source<T: EnvSource>(self, source: T) -> Binder<T> {
        Binder {
            prefix: self.prefix,
            source,
        }
    }

    /// Walk `target` depth-first, assigning every tagged field.
    ///
    /// Stops at the first error. Fields assigned before the failure keep their
    /// new values, so `target` should be discarded on error.
    pub fn bind<T: Bind + ?Sized>(&self, target: &mut T) -> Result<(), EnvtagError> {
        debug!(prefix = %self.prefix, "binding environment");
        let mut fields = Fields::new(self.prefix.clone(), &self.source);
        target.bind_fields(&mut fields)
    }
}

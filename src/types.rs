use std::fmt;

/// Binding metadata attached to a field: `NAME` or `NAME,omitempty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Suffix appended to the current prefix to form the lookup key.
    /// An empty name means the field is not bound.
    pub name: &'a str,
    /// Leave the field untouched when its variable is unset or empty.
    pub omit_empty: bool,
}

impl<'a> Tag<'a> {
    /// Parse a raw tag. Only an exact `omitempty` second segment sets
    /// `omit_empty`; anything else after the first comma is ignored.
    pub fn parse(raw: &'a str) -> Self {
        let mut segments = raw.split(',');
        let name = segments.next().unwrap_or_default();
        let omit_empty = segments.next() == Some("omitempty");
        Tag { name, omit_empty }
    }

    /// Lookup key for this tag under `prefix`. No separator is inserted.
    pub fn key(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.name)
    }
}

/// The scalar shapes a field value can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Bool,
    Int,
    Float,
}

impl ScalarKind {
    /// Text substituted for an empty variable before conversion.
    pub fn empty_default(self) -> &'static str {
        match self {
            ScalarKind::String => "",
            ScalarKind::Bool => "false",
            ScalarKind::Int | ScalarKind::Float => "0",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
        };
        f.write_str(name)
    }
}

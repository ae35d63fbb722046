use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum EnvtagError {
    #[error("Invalid {ty} value '{value}' for {key}: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(envtag::conversion),
            help("check the environment variable named in the message")
        )
    )]
    Conversion {
        key: String,
        value: String,
        ty: &'static str,
        reason: String,
    },

    #[error("Cannot parse ENV value into {kind} (field {key})")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(envtag::unsupported_type),
            help("supported field types are String, bool, signed integers, floats, Vec of those, and nested structs")
        )
    )]
    UnsupportedType { key: String, kind: &'static str },

    #[error("Failed to bind nested struct {key}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(envtag::nested)))]
    Nested {
        key: String,
        #[source]
        source: Box<EnvtagError>,
    },
}

impl EnvtagError {
    /// The innermost error, looking through any `Nested` wrappers.
    pub fn root_cause(&self) -> &EnvtagError {
        let mut current = self;
        while let EnvtagError::Nested { source, .. } = current {
            current = &**source;
        }
        current
    }

    /// Fully qualified environment key of the field that failed.
    pub fn key(&self) -> &str {
        match self.root_cause() {
            EnvtagError::Conversion { key, .. } | EnvtagError::UnsupportedType { key, .. } => key,
            // root_cause never yields Nested
            EnvtagError::Nested { key, .. } => key,
        }
    }

    pub(crate) fn nested(key: &str, source: EnvtagError) -> Self {
        EnvtagError::Nested {
            key: key.to_string(),
            source: Box::new(source),
        }
    }
}

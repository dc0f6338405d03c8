use thiserror::Error;

/// Error type shared by all sequin crates.
///
/// The kind is boxed to keep `Result<T>` at a single pointer of overhead on
/// the success path.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn not_found(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotFound {
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn ambiguous_match(context: impl Into<String>, count: usize) -> Error {
        Error(
            ErrorKind::AmbiguousMatch {
                context: context.into(),
                count,
            }
            .into(),
        )
    }

    pub fn division_by_zero(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::DivisionByZero {
                context: context.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("no element found for '{context}'")]
    NotFound { context: String },

    #[error("expected a single element for '{context}', found {count}")]
    AmbiguousMatch { context: String, count: usize },

    #[error("division by zero in '{context}'")]
    DivisionByZero { context: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_roundtrip() {
        let err = Error::ambiguous_match("single", 3);
        match err.kind() {
            ErrorKind::AmbiguousMatch { context, count } => {
                assert_eq!(context, "single");
                assert_eq!(*count, 3);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::division_by_zero("average");
        assert_eq!(err.to_string(), "division by zero in 'average'");
    }
}

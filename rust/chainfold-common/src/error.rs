use thiserror::Error;

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

    pub fn empty_input(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptyInput {
                operation: operation.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("'{operation}' requires at least one element")]
    EmptyInput { operation: String },
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
    fn test_error_display() {
        let e = Error::invalid_arg("max", "max > 0");
        assert_eq!(e.to_string(), "invalid argument max: max > 0");

        let e = Error::empty_input("average");
        assert_eq!(e.to_string(), "'average' requires at least one element");
        assert!(matches!(e.into_kind(), ErrorKind::EmptyInput { .. }));
    }
}

// SPDX-License-Identifier: MPL-2.0
use crate::domain::document::SelectorError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Selector(SelectorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Selector(e) => write!(f, "Selector Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SelectorError> for Error {
    fn from(err: SelectorError) -> Self {
        Error::Selector(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let err: Error = toml::from_str::<toml::Table>("[broken")
            .expect_err("invalid toml")
            .into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn selector_errors_are_wrapped() {
        let err: Error = crate::domain::document::Selector::parse("")
            .expect_err("empty selector")
            .into();
        assert!(matches!(err, Error::Selector(SelectorError::Empty { .. })));
        assert!(format!("{}", err).starts_with("Selector Error: "));
    }
}

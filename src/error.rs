//! Crate-level error types.

use std::fmt;

/// Errors produced by the follow-cam crate.
///
/// Tracking itself never fails; only preset loading and saving do.
#[derive(Debug)]
pub enum FollowCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FollowCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FollowCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for FollowCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_prefixes_variant() {
        let err = FollowCamError::OptionsParse("bad key".to_owned());
        assert_eq!(err.to_string(), "options parse error: bad key");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FollowCamError::from(io);
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn io_errors_expose_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(FollowCamError::Io(io).source().is_some());
        assert!(FollowCamError::OptionsParse(String::new()).source().is_none());
    }
}

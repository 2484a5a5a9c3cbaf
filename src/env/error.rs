use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate a [`load`](super::EnvParser::load) call.
///
/// Lines processed before the failing one stay applied.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to open env file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed line {line} in env file '{path}': {kind}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        kind: MalformedKind,
    },

    #[error("failed to set environment variable '{key}': {reason}")]
    EnvironmentWrite {
        key: String,
        #[source]
        reason: WriteError,
    },

    #[error("failed to read line {line} of env file '{path}': {source}")]
    Scan {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
    },
}

/// Why a line could not be split into a key and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedKind {
    #[error("missing '=' separator")]
    MissingSeparator,

    #[error("more than one '=' separator")]
    ExtraSeparator,
}

/// Rejection from an [`EnvProvider`](super::EnvProvider) write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WriteError {
    #[error("key is empty")]
    EmptyKey,

    #[error("key contains '=' or a NUL character")]
    InvalidKey,

    #[error("value contains a NUL character")]
    InvalidValue,
}

impl WriteError {
    /// Checks a pair against the rules the process environment enforces.
    pub(crate) fn check(key: &str, value: &str) -> Result<(), WriteError> {
        if key.is_empty() {
            return Err(WriteError::EmptyKey);
        }
        if key.contains(['=', '\0']) {
            return Err(WriteError::InvalidKey);
        }
        if value.contains('\0') {
            return Err(WriteError::InvalidValue);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_plain_pair() {
        assert_eq!(WriteError::check("PORT", "8080"), Ok(()));
        assert_eq!(WriteError::check("EMPTY", ""), Ok(()));
    }

    #[test]
    fn test_check_rejects_bad_keys_and_values() {
        assert_eq!(WriteError::check("", "x"), Err(WriteError::EmptyKey));
        assert_eq!(WriteError::check("A=B", "x"), Err(WriteError::InvalidKey));
        assert_eq!(WriteError::check("A\0", "x"), Err(WriteError::InvalidKey));
        assert_eq!(
            WriteError::check("A", "x\0y"),
            Err(WriteError::InvalidValue)
        );
    }

    #[test]
    fn test_display_names_path_and_line() {
        let err = LoadError::MalformedLine {
            path: PathBuf::from("app.env"),
            line: 3,
            kind: MalformedKind::MissingSeparator,
        };
        assert_eq!(
            err.to_string(),
            "malformed line 3 in env file 'app.env': missing '=' separator"
        );
    }
}

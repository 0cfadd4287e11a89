use std::path::PathBuf;
use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    IoError = 12,
    UnsupportedCodec = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    MultipleOf(usize),
    Range { min: usize, max: Option<usize> },
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
            LengthConstraint::Range { min, max: Some(max) } => write!(f, "between {} and {}", min, max),
            LengthConstraint::Range { min, max: None } => write!(f, "at least {}", min),
        }
    }
}

#[derive(Debug, Error)]
pub enum BintextError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("invalid character '{}' at position {position}", .char.escape_debug())]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}{}", if !.message.is_empty() { format!(" ({})", .message) } else { String::new() })]
    InvalidLength {
        expected: LengthConstraint,
        actual: usize,
        message: String,
    },

    #[error("invalid group: {message}")]
    InvalidGroup { message: String },

    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("destination directory does not exist: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported codec: {name}")]
    UnsupportedCodec { name: String },
}

impl BintextError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BintextError::InvalidCharacter { .. }
            | BintextError::InvalidLength { .. }
            | BintextError::InvalidGroup { .. } => ExitCode::InvalidInput,
            BintextError::FileNotFound { .. }
            | BintextError::DirectoryNotFound { .. }
            | BintextError::Io(_) => ExitCode::IoError,
            BintextError::UnsupportedCodec { .. } => ExitCode::UnsupportedCodec,
            BintextError::InvalidArgument { .. } => ExitCode::GeneralError,
        }
    }

    /// True for faults raised because the text is not a valid encoding.
    pub fn is_decoding_fault(&self) -> bool {
        matches!(
            self,
            BintextError::InvalidCharacter { .. }
                | BintextError::InvalidLength { .. }
                | BintextError::InvalidGroup { .. }
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_char(byte: u8, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: char::from(byte),
            position: pos,
        }
    }

    pub fn invalid_length_msg(expected: LengthConstraint, actual: usize, message: impl Into<String>) -> Self {
        Self::InvalidLength {
            expected,
            actual,
            message: message.into(),
        }
    }

    pub fn invalid_group(message: impl Into<String>) -> Self {
        Self::InvalidGroup {
            message: message.into(),
        }
    }

    pub fn unsupported_codec(name: impl Into<String>) -> Self {
        Self::UnsupportedCodec { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, BintextError>;

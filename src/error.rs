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
    NotCongruent { modulus: usize, residue: usize },
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
            LengthConstraint::NotCongruent { modulus, residue } => {
                write!(f, "length not congruent to {} mod {}", residue, modulus)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Bin2TextError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: LengthConstraint, actual: usize },

    #[error("invalid padding: {message}")]
    InvalidPadding { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported codec: {name}")]
    UnsupportedCodec { name: String },
}

impl Bin2TextError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Bin2TextError::InvalidInput { .. }
            | Bin2TextError::InvalidCharacter { .. }
            | Bin2TextError::InvalidLength { .. }
            | Bin2TextError::InvalidPadding { .. } => ExitCode::InvalidInput,
            Bin2TextError::Io(_) => ExitCode::IoError,
            Bin2TextError::Json(_) => ExitCode::GeneralError,
            Bin2TextError::UnsupportedCodec { .. } => ExitCode::UnsupportedCodec,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub fn invalid_padding(message: impl Into<String>) -> Self {
        Self::InvalidPadding {
            message: message.into(),
        }
    }

    pub fn unsupported_codec(name: impl Into<String>) -> Self {
        Self::UnsupportedCodec { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, Bin2TextError>;

// crates/xf2bf-core/src/error.rs

use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, XfError>;

/// Failure of a single conversion job.
///
/// `Display` is the bare description of the underlying error; the path is
/// kept alongside for callers that want to report it themselves.
#[derive(Debug, Error)]
pub enum XfError {
    #[error("{source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Read(#[source] io::Error),

    #[error("{0}")]
    Write(#[source] io::Error),

    #[error("{source}")]
    Convert {
        token: String,
        #[source]
        source: ConvertError,
    },
}

impl XfError {
    /// Errno-like classification of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            XfError::OpenInput { source, .. } | XfError::CreateOutput { source, .. } => {
                source.kind()
            }
            XfError::Read(e) | XfError::Write(e) => e.kind(),
            XfError::Convert { .. } => io::ErrorKind::InvalidInput,
        }
    }

    /// The file the failure is about, for open/create failures.
    pub fn path(&self) -> Option<&Path> {
        match self {
            XfError::OpenInput { path, .. } | XfError::CreateOutput { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Raw OS error code, when the failure came from the OS.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            XfError::OpenInput { source, .. } | XfError::CreateOutput { source, .. } => {
                source.raw_os_error()
            }
            XfError::Read(e) | XfError::Write(e) => e.raw_os_error(),
            XfError::Convert { .. } => None,
        }
    }

    /// The OS description of the failure without std's `(os error N)` tail,
    /// i.e. what `strerror` would print.
    pub fn platform_message(&self) -> String {
        let msg = self.to_string();
        match self.raw_os_error() {
            Some(code) => msg
                .strip_suffix(&format!(" (os error {code})"))
                .map(str::to_owned)
                .unwrap_or(msg),
            None => msg,
        }
    }
}

/// A token that could not be parsed as a base-16 byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid argument")]
    Invalid,

    #[error("{}", parse_description(.0))]
    Parse(#[from] ParseIntError),
}

fn parse_description(e: &ParseIntError) -> &'static str {
    use std::num::IntErrorKind;
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "Numerical result out of range",
        _ => "Invalid argument",
    }
}

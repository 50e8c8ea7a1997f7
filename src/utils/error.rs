//! Error handling.

use std::fmt;

/// Broad category of a failure, used to decide how a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, timeout or non-2xx status.
    Http,
    /// The manifest could not be parsed.
    Parse,
    /// The manifest had no version to select.
    EmptyManifest,
    /// Filesystem failure.
    Io,
    Other,
}

impl ErrorKind {
    /// Short reason shown when a run aborts with this kind of error.
    pub const fn abort_reason(self) -> &'static str {
        match self {
            Self::Http => "Could not download required data",
            Self::Parse => "Could not parse the version manifest",
            Self::EmptyManifest => "No Minecraft versions found",
            Self::Io => "Could not write output files",
            Self::Other => "Pack format lookup aborted",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Other, message)
    }

    pub fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_kind(ErrorKind::Io, format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_kind(ErrorKind::Parse, format!("JSON error: {err}"))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::with_kind(ErrorKind::Http, format!("HTTP error: {err}"))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::new(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::new(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! simple_error {
    ($kind:ident, $msg:literal) => {
        $crate::utils::error::Error::with_kind($crate::utils::error::ErrorKind::$kind, format!($msg))
    };
    ($kind:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::Error::with_kind(
            $crate::utils::error::ErrorKind::$kind,
            format!($fmt, $($arg)*),
        )
    };
    ($msg:literal) => {
        $crate::utils::error::Error::new(format!($msg))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::Error::new(format!($fmt, $($arg)*))
    };
}

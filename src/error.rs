use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The result type used throughout this crate
pub type KeyprintResult<T> = Result<T, Error>;

/// The error type of this crate
///
/// It carries an [`ErrorKind`](enum.ErrorKind.html) which tells the caller what went wrong,
/// and optionally the lower level error which caused it.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub(crate) fn from_kind(kind: ErrorKind) -> Self {
        Error { kind, inner: None }
    }

    pub(crate) fn with_error<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Error {
            kind,
            inner: Some(err.into()),
        }
    }

    /// Get the kind of the error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.kind)?;
        if let Some(cause) = &self.inner {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_error(ErrorKind::IOError, err)
    }
}

/// Indicate the reason of an [`Error`](struct.Error.html)
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// The input doesn't contain a well-formed PEM block
    NoPemBlockFound,
    /// The PEM block is not a supported private key type
    UnsupportedKeyType,
    /// The key inside the PEM block can't be parsed
    MalformedKeyEncoding,
    /// The key algorithm can't be stored in the canonical PKCS#8 form
    UnsupportedAlgorithm,
    /// The elliptic curve of the key is not supported
    UnsupportedCurve,
    /// The canonical DER structure can't be serialized
    DerEncodingFailure,
    /// The string is not a colon separated hex fingerprint
    InvalidFingerprint,
    IOError,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        use ErrorKind::*;

        match self {
            NoPemBlockFound => "No PEM Block Found",
            UnsupportedKeyType => "Unsupported Key Type",
            MalformedKeyEncoding => "Malformed Key Encoding",
            UnsupportedAlgorithm => "Unsupported Algorithm",
            UnsupportedCurve => "Unsupported Elliptic Curve",
            DerEncodingFailure => "DER Encoding Failure",
            InvalidFingerprint => "Invalid Fingerprint",
            IOError => "I/O Error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

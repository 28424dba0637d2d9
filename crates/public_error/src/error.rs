// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Internal data that is boxed to keep `PublicError` pointer-sized.
struct Inner {
    source: BoxError,
    message: Cow<'static, str>,
    status_code: u16,
}

/// An error annotated with a public-safe message and a status code.
///
/// `PublicError` decorates an underlying error without changing how that error is reported
/// internally:
///
/// - [`Display`](fmt::Display) delegates to the wrapped error. The public message never appears
///   in log output produced by formatting the error.
/// - [`source()`](StdError::source) returns the wrapped error, so chain walks and
///   `downcast_ref` searches continue past the annotation.
/// - The public message and status code are only reachable through [`message()`](Self::message),
///   [`status_code()`](Self::status_code) and the chain search functions such as
///   [`find`](crate::find).
///
/// The data lives behind a single allocation so that `Result<T, PublicError>` stays small.
///
/// # Examples
///
/// ```rust
/// use std::error::Error;
///
/// use public_error::PublicError;
///
/// let cause = std::io::Error::other("permission denied: /var/lib/app/secrets.toml");
/// let err = PublicError::new(cause, "configuration could not be loaded", 500);
///
/// assert_eq!(err.message(), "configuration could not be loaded");
/// assert_eq!(err.status_code(), 500);
/// assert_eq!(err.to_string(), "permission denied: /var/lib/app/secrets.toml");
/// assert!(err.source().unwrap().downcast_ref::<std::io::Error>().is_some());
/// ```
pub struct PublicError {
    data: Box<Inner>,
}

impl PublicError {
    /// Annotates `source` with a public message and a status code.
    ///
    /// The source can be any error type, an already boxed error, or a plain string.
    /// Use [`wrap`] when the cause may be absent.
    #[must_use]
    pub fn new(source: impl Into<BoxError>, message: impl Into<Cow<'static, str>>, status_code: u16) -> Self {
        Self {
            data: Box::new(Inner {
                source: source.into(),
                message: message.into(),
                status_code,
            }),
        }
    }

    /// Returns the message intended for external disclosure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// Returns the status code attached to the error.
    ///
    /// The value is opaque to this crate; HTTP status codes are the common choice.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.data.status_code
    }

    /// Returns the status code as an HTTP status, if it is a valid one.
    #[cfg(feature = "http")]
    #[cfg_attr(docsrs, doc(cfg(feature = "http")))]
    #[must_use]
    pub fn http_status(&self) -> Option<http::StatusCode> {
        http::StatusCode::from_u16(self.data.status_code).ok()
    }

    /// Returns a reference to the wrapped error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.data.source.as_ref()
    }

    /// Consumes the annotation and returns the wrapped error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.data.source
    }
}

impl fmt::Display for PublicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data.source, f)
    }
}

impl fmt::Debug for PublicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicError")
            .field("source", &self.data.source)
            .field("message", &self.data.message)
            .field("status_code", &self.data.status_code)
            .finish()
    }
}

impl StdError for PublicError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.data.source.as_ref())
    }
}

/// Annotates `cause` with a public message and a status code, if there is a cause.
///
/// Returns `None` when `cause` is `None`, so a caller holding an optional error does not need a
/// separate check before annotating it. For `Result` values, see
/// [`ResultExt::public`](crate::ResultExt::public).
///
/// # Examples
///
/// ```rust
/// use public_error::wrap;
///
/// let missing: Option<std::io::Error> = None;
/// assert!(wrap(missing, "not found", 404).is_none());
///
/// let present = Some(std::io::Error::other("no row for key 'acct-991'"));
/// let err = wrap(present, "not found", 404).unwrap();
/// assert_eq!(err.message(), "not found");
/// ```
#[must_use]
pub fn wrap<E>(cause: Option<E>, message: impl Into<Cow<'static, str>>, status_code: u16) -> Option<PublicError>
where
    E: Into<BoxError>,
{
    cause.map(|cause| PublicError::new(cause, message, status_code))
}

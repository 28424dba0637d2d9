// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::error::Error as StdError;

use crate::error::BoxError;
use crate::{PublicError, find};

/// Annotates the error of a `Result` with a public message and a status code.
///
/// `Ok` values pass through untouched, which mirrors [`wrap`](crate::wrap) returning `None` for
/// an absent cause.
///
/// # Examples
///
/// ```rust
/// use public_error::ResultExt;
///
/// fn parse_port(raw: &str) -> Result<u16, public_error::PublicError> {
///     raw.parse::<u16>().public("port must be a number between 0 and 65535", 400)
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
///
/// let err = parse_port("eighty").unwrap_err();
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error, if any, in a [`PublicError`].
    ///
    /// # Errors
    ///
    /// Returns the original error annotated with `message` and `status_code`.
    fn public(self, message: impl Into<Cow<'static, str>>, status_code: u16) -> Result<T, PublicError>;

    /// Wraps the error, if any, in a [`PublicError`] built from a lazily evaluated annotation.
    ///
    /// The closure is only called if the result is an error.
    ///
    /// # Errors
    ///
    /// Returns the original error annotated with the message and status code from `f`.
    fn public_with<F, M>(self, f: F) -> Result<T, PublicError>
    where
        F: FnOnce() -> (M, u16),
        M: Into<Cow<'static, str>>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn public(self, message: impl Into<Cow<'static, str>>, status_code: u16) -> Result<T, PublicError> {
        self.map_err(|e| PublicError::new(e, message, status_code))
    }

    fn public_with<F, M>(self, f: F) -> Result<T, PublicError>
    where
        F: FnOnce() -> (M, u16),
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|e| {
            let (message, status_code) = f();
            PublicError::new(e, message, status_code)
        })
    }
}

/// Chain search methods available on every error.
///
/// These are method-call forms of [`find`], [`status_code`](crate::status_code) and
/// [`message`](crate::message), implemented for all sized error types and for `dyn Error`
/// trait objects.
///
/// # Examples
///
/// ```rust
/// use public_error::{ErrorChainExt, PublicError};
///
/// let err: Box<dyn std::error::Error + Send + Sync> =
///     PublicError::new("token signature mismatch", "unauthorized", 401).into();
///
/// assert_eq!(err.public_status_code(), 401);
/// assert_eq!(err.public_message(), "unauthorized");
/// ```
pub trait ErrorChainExt {
    /// Finds the first [`PublicError`] in the chain starting at `self`.
    fn find_public(&self) -> Option<&PublicError>;

    /// Returns the status code of the first [`PublicError`] in the chain, or
    /// [`DEFAULT_STATUS_CODE`](crate::DEFAULT_STATUS_CODE).
    fn public_status_code(&self) -> u16 {
        self.find_public().map_or(crate::DEFAULT_STATUS_CODE, PublicError::status_code)
    }

    /// Returns the public message of the first [`PublicError`] in the chain, or
    /// [`DEFAULT_MESSAGE`](crate::DEFAULT_MESSAGE).
    fn public_message(&self) -> &str {
        self.find_public().map_or(crate::DEFAULT_MESSAGE, PublicError::message)
    }
}

impl<E: StdError + 'static> ErrorChainExt for E {
    fn find_public(&self) -> Option<&PublicError> {
        find(self)
    }
}

impl ErrorChainExt for dyn StdError + 'static {
    fn find_public(&self) -> Option<&PublicError> {
        find(self)
    }
}

impl ErrorChainExt for dyn StdError + Send + 'static {
    fn find_public(&self) -> Option<&PublicError> {
        find(self)
    }
}

impl ErrorChainExt for dyn StdError + Send + Sync + 'static {
    fn find_public(&self) -> Option<&PublicError> {
        find(self)
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{Display, Formatter};

use crate::{AsChain, DEFAULT_MESSAGE, DEFAULT_STATUS_CODE, find};

/// The status code and message a boundary discloses to its caller.
///
/// A `Disclosure` is what remains of an error chain once everything private has been stripped
/// away: the status code and public message of the outermost [`PublicError`](crate::PublicError),
/// or the generic server error pair when the chain carries no annotation.
///
/// # Examples
///
/// ```rust
/// use public_error::{Disclosure, PublicError};
///
/// let err = PublicError::new("stripe: card_declined (do_not_honor)", "payment was declined", 402);
///
/// let disclosure = Disclosure::resolve(&err);
/// assert_eq!(disclosure.status_code(), 402);
/// assert_eq!(disclosure.message(), "payment was declined");
/// assert_eq!(disclosure.to_string(), "402 payment was declined");
///
/// let unannotated = std::io::Error::other("stripe api key sk_live_... rejected");
/// assert_eq!(Disclosure::resolve(&unannotated), Disclosure::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disclosure<'a> {
    status_code: u16,
    message: &'a str,
}

impl<'a> Disclosure<'a> {
    /// Resolves the disclosure for an error chain with a single chain search.
    #[must_use]
    pub fn resolve(err: impl AsChain<'a>) -> Self {
        find(err).map_or_else(Self::default, |public| Self {
            status_code: public.status_code(),
            message: public.message(),
        })
    }

    /// Returns the status code to report.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the message to report.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Returns `true` if this is the generic server error pair.
    ///
    /// An annotation that carries exactly the fallback values also reports `true`.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the status code as an HTTP status.
    ///
    /// Codes that are not valid HTTP status codes are reported as
    /// `500 Internal Server Error`.
    #[cfg(feature = "http")]
    #[cfg_attr(docsrs, doc(cfg(feature = "http")))]
    #[must_use]
    pub fn http_status(&self) -> http::StatusCode {
        http::StatusCode::from_u16(self.status_code).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Default for Disclosure<'_> {
    fn default() -> Self {
        Self {
            status_code: DEFAULT_STATUS_CODE,
            message: DEFAULT_MESSAGE,
        }
    }
}

impl Display for Disclosure<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status_code, self.message)
    }
}

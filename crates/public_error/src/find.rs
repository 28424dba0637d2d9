// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::PublicError;

/// Status code reported for chains that carry no [`PublicError`].
///
/// This is the HTTP "500 Internal Server Error" code, the conventional classification for an
/// unclassified server-side failure.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Message reported for chains that carry no [`PublicError`].
///
/// This is the canonical reason phrase of [`DEFAULT_STATUS_CODE`].
pub const DEFAULT_MESSAGE: &str = "Internal Server Error";

/// The starting point of an error chain, which may be absent.
///
/// Implemented for references to any error type, for references to `dyn Error` trait objects,
/// and for `Option`s of those. This lets the chain search functions accept `&err`,
/// `result.as_ref().err()` or `None` alike.
pub trait AsChain<'a> {
    /// Returns the first link of the chain, or `None` if there is no error.
    fn as_chain(self) -> Option<&'a (dyn StdError + 'static)>;
}

impl<'a, E: StdError + 'static> AsChain<'a> for &'a E {
    fn as_chain(self) -> Option<&'a (dyn StdError + 'static)> {
        Some(self)
    }
}

impl<'a> AsChain<'a> for &'a (dyn StdError + 'static) {
    fn as_chain(self) -> Option<&'a (dyn StdError + 'static)> {
        Some(self)
    }
}

impl<'a> AsChain<'a> for &'a (dyn StdError + Send + 'static) {
    fn as_chain(self) -> Option<&'a (dyn StdError + 'static)> {
        Some(self)
    }
}

impl<'a> AsChain<'a> for &'a (dyn StdError + Send + Sync + 'static) {
    fn as_chain(self) -> Option<&'a (dyn StdError + 'static)> {
        Some(self)
    }
}

impl<'a, T: AsChain<'a>> AsChain<'a> for Option<T> {
    fn as_chain(self) -> Option<&'a (dyn StdError + 'static)> {
        self.and_then(AsChain::as_chain)
    }
}

/// Finds the first [`PublicError`] in an error chain.
///
/// The search starts at `err` itself and follows [`source()`](StdError::source) links. It stops
/// at the first `PublicError` without looking into that annotation's own cause, so the
/// outermost annotation takes precedence over any deeper ones. Errors of other types are passed
/// through transparently, however many of them sit between the start and the annotation.
///
/// Returns `None` if `err` is absent or if no link in the chain is a `PublicError`.
///
/// A link that is a `Box<PublicError>` or an `Arc<PublicError>` counts as an annotation too,
/// since the `Error` impls of those pointers report the annotation's cause rather than the
/// annotation itself.
///
/// Only errors that report their wrapped error through `source()` are searched. Wrappers whose
/// `source()` skips the error they hold, such as [`std::io::Error::other`], hide an annotation
/// passed to them directly.
///
/// # Examples
///
/// ```rust
/// use public_error::{PublicError, find};
///
/// let inner = PublicError::new("row not found", "no such order", 404);
/// let outer = PublicError::new(inner, "order lookup failed", 400);
///
/// let found = find(&outer).unwrap();
/// assert_eq!(found.message(), "order lookup failed");
/// assert_eq!(found.status_code(), 400);
///
/// assert!(find(&std::io::Error::other("plain")).is_none());
/// assert!(find(None::<&std::io::Error>).is_none());
/// ```
#[must_use]
pub fn find<'a>(err: impl AsChain<'a>) -> Option<&'a PublicError> {
    let mut current = err.as_chain();
    while let Some(err) = current {
        if let Some(public) = as_public(err) {
            return Some(public);
        }
        current = err.source();
    }
    None
}

fn as_public<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a PublicError> {
    err.downcast_ref::<PublicError>()
        .or_else(|| err.downcast_ref::<Box<PublicError>>().map(|public| &**public))
        .or_else(|| err.downcast_ref::<Arc<PublicError>>().map(|public| &**public))
}

/// Returns the status code of the first [`PublicError`] in the chain.
///
/// Falls back to [`DEFAULT_STATUS_CODE`] when the chain carries no annotation.
#[must_use]
pub fn status_code<'a>(err: impl AsChain<'a>) -> u16 {
    find(err).map_or(DEFAULT_STATUS_CODE, PublicError::status_code)
}

/// Returns the public message of the first [`PublicError`] in the chain.
///
/// Falls back to [`DEFAULT_MESSAGE`] when the chain carries no annotation, so the text of an
/// unannotated internal error is never returned.
#[must_use]
pub fn message<'a>(err: impl AsChain<'a>) -> &'a str {
    find(err).map_or(DEFAULT_MESSAGE, PublicError::message)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("level {level}: {source}")]
    struct Layer {
        level: u8,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    }

    fn layer(level: u8, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Layer {
        Layer {
            level,
            source: source.into(),
        }
    }

    #[test]
    fn find_absent() {
        assert!(find(None::<&io::Error>).is_none());
        assert!(find(None::<&(dyn StdError + 'static)>).is_none());
    }

    #[test]
    fn find_without_annotation() {
        assert!(find(&io::Error::other("problem here")).is_none());
        assert!(find(&layer(2, io::Error::other("problem here"))).is_none());
    }

    #[test]
    fn find_self() {
        let err = PublicError::new("danger", "app problem", 0);
        let found = find(&err).unwrap();

        assert!(std::ptr::eq(found, &err));
    }

    #[test]
    fn find_through_ordinary_layers() {
        let err = layer(3, layer(2, PublicError::new("danger", "app problem", 409)));

        let found = find(&err).unwrap();
        assert_eq!(found.message(), "app problem");
        assert_eq!(found.status_code(), 409);
    }

    #[test]
    fn outermost_wins() {
        let inner = PublicError::new("danger", "inner", 10);
        let outer = PublicError::new(layer(2, inner), "outer", 20);
        let err = layer(3, outer);

        let found = find(&err).unwrap();
        assert_eq!(found.message(), "outer");
        assert_eq!(found.status_code(), 20);

        // The inner annotation is still in the chain.
        let inner = found.source().and_then(find).unwrap();
        assert_eq!(inner.message(), "inner");
        assert_eq!(inner.status_code(), 10);
    }

    #[test]
    fn find_through_trait_objects() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(layer(1, PublicError::new("x", "boxed", 401)));

        assert_eq!(find(boxed.as_ref()).unwrap().message(), "boxed");

        let plain: &(dyn StdError + 'static) = boxed.as_ref();
        assert_eq!(find(plain).unwrap().status_code(), 401);
        assert_eq!(find(Some(plain)).unwrap().status_code(), 401);
    }

    #[test]
    fn io_error_reports_the_source_of_its_payload() {
        let err = io::Error::other(PublicError::new("x", "hidden", 400));
        assert!(find(&err).is_none());

        let err = io::Error::other(layer(1, PublicError::new("x", "visible", 400)));
        assert_eq!(find(&err).unwrap().message(), "visible");
    }

    #[test]
    fn find_through_smart_pointers() {
        let boxed = Box::new(PublicError::new("x", "boxed", 404));
        assert_eq!(find(&boxed).unwrap().status_code(), 404);
        assert!(std::ptr::eq(find(&boxed).unwrap(), &*boxed));

        let shared = Arc::new(PublicError::new("x", "shared", 503));
        assert_eq!(find(&shared).unwrap().message(), "shared");

        let err = layer(2, Box::new(PublicError::new("x", "under a layer", 409)));
        assert_eq!(find(&err).unwrap().message(), "under a layer");

        let inner = Arc::new(PublicError::new("x", "inner", 10));
        let err = Box::new(PublicError::new(layer(1, Arc::clone(&inner)), "outer", 20));
        assert_eq!(find(&err).unwrap().message(), "outer");
    }

    #[test]
    fn defaults_when_missing() {
        assert_eq!(status_code(None::<&io::Error>), DEFAULT_STATUS_CODE);
        assert_eq!(message(None::<&io::Error>), DEFAULT_MESSAGE);

        let err = layer(1, io::Error::other("secret path /etc/shadow"));
        assert_eq!(status_code(&err), 500);
        assert_eq!(message(&err), "Internal Server Error");
    }

    #[test]
    fn annotation_values_when_present() {
        let err = layer(1, PublicError::new("secret", "bad input", 0));

        assert_eq!(status_code(&err), 0);
        assert_eq!(message(&err), "bad input");
    }

    #[test]
    fn default_message_is_canonical_reason() {
        let status = http::StatusCode::from_u16(DEFAULT_STATUS_CODE).unwrap();

        assert_eq!(status, http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status.canonical_reason(), Some(DEFAULT_MESSAGE));
    }

    #[test]
    fn result_err_as_chain() {
        let ok: Result<(), PublicError> = Ok(());
        assert!(find(ok.as_ref().err()).is_none());

        let err: Result<(), PublicError> = Err(PublicError::new("x", "from result", 422));
        assert_eq!(message(err.as_ref().err()), "from result");
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/public_error/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/public_error/favicon.ico")]

//! Public-safe messages and status codes for private error chains.
//!
//! # Why
//!
//! A service that fails while handling a request usually wants to log the complete error
//! chain, including file paths, SQL fragments and other sensitive details, while telling the
//! caller only a short, sanitized message and a classification code. The code that knows the
//! right public message is often several calls below the boundary that writes the response.
//!
//! This crate lets any layer attach a public message and a status code to an error without
//! replacing it. The annotation is transparent: rendering the error still shows the original
//! text, [`source()`](std::error::Error::source) still reaches the original cause, and
//! `downcast_ref` searches further down the chain keep working.
//!
//! # Core Types
//!
//! - [`PublicError`]: An error annotated with a public message and a status code.
//! - [`wrap`]: Annotates an error if there is one.
//! - [`find`], [`status_code`], [`message`]: Locate the outermost annotation in a chain.
//! - [`ResultExt`] and [`ErrorChainExt`]: Method-call forms of the above.
//! - [`Disclosure`]: The status/message pair a boundary sends to its caller.
//!
//! # Precedence
//!
//! When a chain holds more than one [`PublicError`], the outermost one (the most recently
//! applied) wins. Inner annotations stay in the chain and remain visible to loggers.
//!
//! # Examples
//!
//! ```rust
//! use std::io;
//!
//! use public_error::{ResultExt, message, status_code};
//!
//! fn load_user(id: u32) -> Result<String, public_error::PublicError> {
//!     let lookup: Result<String, io::Error> =
//!         Err(io::Error::other(format!("connection to db-7.internal refused for user {id}")));
//!     lookup.public("user service is unavailable", 503)
//! }
//!
//! let err = load_user(42).unwrap_err();
//!
//! // The log sees everything.
//! assert_eq!(err.to_string(), "connection to db-7.internal refused for user 42");
//!
//! // The caller sees only the annotation.
//! assert_eq!(status_code(&err), 503);
//! assert_eq!(message(&err), "user service is unavailable");
//! ```
//!
//! Errors without any annotation fall back to a generic server error, so internal text is never
//! disclosed by accident:
//!
//! ```rust
//! use public_error::{DEFAULT_MESSAGE, DEFAULT_STATUS_CODE, ErrorChainExt};
//!
//! let err = std::io::Error::other("disk /dev/sda1 is full");
//! assert_eq!(err.public_status_code(), DEFAULT_STATUS_CODE);
//! assert_eq!(err.public_message(), DEFAULT_MESSAGE);
//! ```
//!
//! # Features
//!
//! - `http`: Conversions to [`http::StatusCode`](https://docs.rs/http/latest/http/status/struct.StatusCode.html).

mod disclosure;
mod error;
mod ext;
mod find;

pub use disclosure::Disclosure;
pub use error::{PublicError, wrap};
pub use ext::{ErrorChainExt, ResultExt};
pub use find::{AsChain, DEFAULT_MESSAGE, DEFAULT_STATUS_CODE, find, message, status_code};

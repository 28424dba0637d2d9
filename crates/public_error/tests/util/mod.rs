// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Chain inspection helpers shared by the integration tests.

use std::error::Error;

/// Walks the chain starting at `err` (inclusive) and reports whether any link equals `target`.
///
/// This is the usual "is this the same underlying error" check: a `downcast_ref` at each link
/// followed by an equality test.
pub fn chain_contains<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    let mut current = Some(err);
    while let Some(err) = current {
        if err.downcast_ref::<T>().is_some_and(|candidate| candidate == target) {
            return true;
        }
        current = err.source();
    }
    false
}

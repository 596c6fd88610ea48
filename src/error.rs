// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! Error types.
//!
//! The span algebra is total: queries about the relation between spans
//! never fail. The one failure class is malformed endpoint input, which
//! surfaces chrono's parse error through [`SpanError`].

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpanError {
    /// An endpoint string could not be parsed as an RFC 3339 date-time.
    #[error("invalid span endpoint: {0}")]
    Parse(#[from] chrono::ParseError),
}

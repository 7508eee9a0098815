// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::{error, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError, // will never be produced
    /// A constraint allows fewer than one repeat; no sequence can satisfy it.
    RunLimitTooSmall,
    /// A retry budget of zero attempts was requested.
    AttemptBudgetTooSmall,
    /// A stimulus lacks a field named by the constraint table.
    MissingField,
    JsonDeserialization,
    Generic,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            RunLimitTooSmall => "run_limit_too_small",
            AttemptBudgetTooSmall => "attempt_budget_too_small",
            MissingField => "missing_field",
            JsonDeserialization => "json_deserialization",
            Generic => "generic",
        };

        write!(f, "{name}")
    }
}

/// Which contract was violated: `Config` errors are programming mistakes in
/// the caller (an impossible constraint table or retry budget); `Stimulus`
/// errors are malformed input data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Stimulus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Config => "ConfigError",
            ErrorKind::Stimulus => "StimulusError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[test]
fn test_error_display() {
    let err = Error::new(ErrorKind::Config, ErrorCode::RunLimitTooSmall, None);
    assert_eq!(format!("{err}"), "ConfigError{run_limit_too_small}");

    let err = Error::new(
        ErrorKind::Stimulus,
        ErrorCode::MissingField,
        Some("no field \"item_type\"".to_string()),
    );
    assert_eq!(
        format!("{err}"),
        "StimulusError{missing_field: no field \"item_type\"}"
    );
    assert_eq!(err.get_details(), Some("no field \"item_type\"".to_string()));
}

#[test]
fn test_error_code_display() {
    assert_eq!(
        format!("{}", ErrorCode::AttemptBudgetTooSmall),
        "attempt_budget_too_small"
    );
    assert_eq!(format!("{}", ErrorCode::JsonDeserialization), "json_deserialization");
}

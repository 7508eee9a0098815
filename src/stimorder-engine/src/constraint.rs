// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use stimorder_core::datamodel::{Constraints, Labeled};

use crate::common::Result;
use crate::{config_err, stim_err};

/// Decide whether appending `item` to `accepted` would keep every run-length
/// constraint satisfied.
///
/// Per constraint only the trailing `max_run` elements of `accepted` are
/// examined (plus the candidate itself), so admissibility stays cheap no
/// matter how long the accepted sequence grows.
///
/// Fails with a `Config` error for a run limit below 1 — no sequence can
/// repeat an item fewer than once in a row — and with a `Stimulus` error if
/// `item` lacks a constrained field.
pub fn fits<T: Labeled>(accepted: &[T], constraints: &Constraints, item: &T) -> Result<bool> {
    for (field, max_run) in constraints.iter() {
        if max_run < 1 {
            return config_err!(
                RunLimitTooSmall,
                format!("constraint on {field:?} allows fewer than one item in a row")
            );
        }
        let Some(value) = item.label(field) else {
            return stim_err!(MissingField, format!("item has no field {field:?}"));
        };

        // The window is the last `max_run` accepted items plus the candidate,
        // which always matches its own value.
        let window = &accepted[accepted.len().saturating_sub(max_run)..];
        let matches = 1 + window
            .iter()
            .filter(|prior| prior.label(field) == Some(value))
            .count();
        if matches > max_run {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check a finished sequence against every constraint.
///
/// For each position, the up-to-`max_run` elements immediately preceding it
/// are examined; `max_run` or more occurrences of the current value there
/// invalidate the sequence. The current item is excluded from its own
/// window, the counting convention [`fits`] call sites have always paired
/// with; both conventions are kept as independent contracts.
///
/// This is purely a predicate: it never errors and never mutates. Items
/// missing a constrained field compare by absence (two absent values are
/// equal), a window shorter than `max_run` is trivially satisfiable, and a
/// run limit of 0 rejects any non-empty sequence.
pub fn meets_constraints<T: Labeled>(sequence: &[T], constraints: &Constraints) -> bool {
    for (i, item) in sequence.iter().enumerate() {
        for (field, max_run) in constraints.iter() {
            let value = item.label(field);
            let window = &sequence[i.saturating_sub(max_run)..i];
            let matches = window
                .iter()
                .filter(|prior| prior.label(field) == value)
                .count();
            if matches >= max_run {
                return false;
            }
        }
    }
    true
}

// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! JSON interchange for stimulus sets.
//!
//! Trial definitions reach an experiment as a JSON array of flat objects,
//! one object per stimulus; this module decodes that form into
//! [`Stimulus`] records and encodes results back out.
//!
//! # Example
//! ```
//! use stimorder_engine::json;
//!
//! let stimuli = json::parse_stimuli(r#"[{"id": 1, "item_type": "filler"}]"#)?;
//! assert_eq!(stimuli.len(), 1);
//! # Ok::<(), stimorder_engine::Error>(())
//! ```

use stimorder_core::datamodel::Stimulus;

use crate::common::Result;
use crate::stim_err;

/// Decode a JSON array of flat objects into stimulus records.
pub fn parse_stimuli(json: &str) -> Result<Vec<Stimulus>> {
    match serde_json::from_str(json) {
        Ok(stimuli) => Ok(stimuli),
        Err(err) => stim_err!(JsonDeserialization, err.to_string()),
    }
}

/// Encode stimuli as a JSON array of flat objects.
pub fn to_json(stimuli: &[Stimulus]) -> Result<String> {
    match serde_json::to_string(stimuli) {
        Ok(json) => Ok(json),
        Err(err) => stim_err!(Generic, err.to_string()),
    }
}

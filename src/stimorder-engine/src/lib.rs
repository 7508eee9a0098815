// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

#![forbid(unsafe_code)]

pub mod common;
pub mod json;

mod constraint;
mod randomize;

#[cfg(test)]
mod randomize_proptest;

pub use stimorder_core::datamodel::{Constraints, FieldValue, Labeled, Stimulus};

pub use self::common::{Error, ErrorCode, ErrorKind, Result};
pub use self::constraint::{fits, meets_constraints};
pub use self::randomize::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_SAME_TYPE, DEFAULT_TYPE_FIELD, randomize_by_pick,
    randomize_by_shuffle_repair, randomize_single_field, shuffle,
};

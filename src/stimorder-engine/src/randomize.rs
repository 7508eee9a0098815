// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use rand::Rng;
use tracing::warn;

use stimorder_core::datamodel::{Constraints, Labeled};

use crate::common::Result;
use crate::config_err;
use crate::constraint::fits;

/// Retry budget used by [`randomize_single_field`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
/// Run limit for the common single-field case.
pub const DEFAULT_MAX_SAME_TYPE: usize = 2;
/// Field the single-field case constrains.
pub const DEFAULT_TYPE_FIELD: &str = "item_type";

/// A uniformly random permutation of `items`, as a new vector.
///
/// Fisher-Yates over a copy: position `i` swaps with a uniform index in
/// `[i, n)`. The input is never mutated.
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    let mut out = items.to_vec();
    let n = out.len();
    for i in 0..n {
        let j = rng.random_range(i..n);
        out.swap(i, j);
    }
    out
}

/// Randomize `items` by repeatedly picking a random element from the
/// remaining pool and appending it when it fits the constraints.
///
/// An attempt stalls out once it has drawn `2 * pool size` unusable elements
/// in a row; the next attempt restarts from a fresh copy of the input, up to
/// `max_attempts` attempts in total. No state carries across attempts.
///
/// Returns `Ok(Some(order))` on success and `Ok(None)` once the retry budget
/// is exhausted, which may mean the constraints are unsatisfiable for this
/// input but is not proof of it. A `max_attempts` of 0 is a `Config` error;
/// constraint errors from [`fits`] propagate immediately.
pub fn randomize_by_pick<T, R>(
    items: &[T],
    constraints: &Constraints,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Option<Vec<T>>>
where
    T: Labeled + Clone,
    R: Rng,
{
    if max_attempts < 1 {
        return config_err!(AttemptBudgetTooSmall, "max_attempts is < 1".to_string());
    }

    for _ in 0..max_attempts {
        if let Some(order) = pick_attempt(items, constraints, rng)? {
            return Ok(Some(order));
        }
    }

    warn!(
        attempts = max_attempts,
        "unable to randomize within the retry budget; consider relaxing the constraints"
    );
    Ok(None)
}

/// One pick-strategy attempt: `Ok(None)` means the attempt stalled.
fn pick_attempt<T, R>(items: &[T], constraints: &Constraints, rng: &mut R) -> Result<Option<Vec<T>>>
where
    T: Labeled + Clone,
    R: Rng,
{
    let mut pool = items.to_vec();
    let mut order = Vec::with_capacity(pool.len());
    // Number of draws since the last accepted element (NOT the number of
    // attempts to build an order).
    let mut stalls = 0;

    while !pool.is_empty() {
        // Earlier accepted picks can paint the attempt into a corner where
        // nothing left fits; give up once we have drawn twice the pool
        // without progress.
        if stalls == pool.len() * 2 {
            return Ok(None);
        }

        let idx = rng.random_range(0..pool.len());
        if fits(&order, constraints, &pool[idx])? {
            order.push(pool.swap_remove(idx));
            stalls = 0;
        } else {
            stalls += 1;
        }
    }

    Ok(Some(order))
}

/// Randomize `items` by shuffling a copy, then draining it into the output:
/// each step takes the first remaining element that fits the constraints.
///
/// Costlier per attempt than [`randomize_by_pick`] (a linear scan per
/// accepted element instead of a random draw), but the repair step finds any
/// admissible element deterministically, which succeeds more often on
/// imbalanced inputs or strict constraints.
///
/// Same contract as [`randomize_by_pick`]: `Ok(None)` after `max_attempts`
/// failed attempts, `Config` error for a zero budget, [`fits`] errors
/// propagate.
pub fn randomize_by_shuffle_repair<T, R>(
    items: &[T],
    constraints: &Constraints,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Option<Vec<T>>>
where
    T: Labeled + Clone,
    R: Rng,
{
    if max_attempts < 1 {
        return config_err!(AttemptBudgetTooSmall, "max_attempts is < 1".to_string());
    }

    for _ in 0..max_attempts {
        if let Some(order) = repair_attempt(items, constraints, rng)? {
            return Ok(Some(order));
        }
    }

    warn!(
        attempts = max_attempts,
        "unable to shuffle into a valid order within the retry budget"
    );
    Ok(None)
}

/// One shuffle-and-repair attempt: `Ok(None)` means no remaining element fit.
fn repair_attempt<T, R>(
    items: &[T],
    constraints: &Constraints,
    rng: &mut R,
) -> Result<Option<Vec<T>>>
where
    T: Labeled + Clone,
    R: Rng,
{
    let mut pool = shuffle(items, rng);
    let mut order = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let mut next = None;
        for (idx, candidate) in pool.iter().enumerate() {
            if fits(&order, constraints, candidate)? {
                next = Some(idx);
                break;
            }
        }
        match next {
            // Vec::remove keeps the scan order of the remaining pool intact
            Some(idx) => order.push(pool.remove(idx)),
            None => return Ok(None),
        }
    }

    Ok(Some(order))
}

/// Randomize with a single run-length limit on one field, the common case.
///
/// Equivalent to [`randomize_by_pick`] with a one-entry constraint table and
/// a [`DEFAULT_MAX_ATTEMPTS`] retry budget. [`DEFAULT_MAX_SAME_TYPE`] and
/// [`DEFAULT_TYPE_FIELD`] are the conventional arguments.
pub fn randomize_single_field<T, R>(
    items: &[T],
    max_same_type: usize,
    field: &str,
    rng: &mut R,
) -> Result<Option<Vec<T>>>
where
    T: Labeled + Clone,
    R: Rng,
{
    let constraints = Constraints::single(field, max_same_type);
    randomize_by_pick(items, &constraints, DEFAULT_MAX_ATTEMPTS, rng)
}

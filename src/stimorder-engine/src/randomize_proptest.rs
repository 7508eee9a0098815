// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests for the randomization strategies using proptest.
//!
//! These tests verify that:
//! 1. Every order a strategy produces is a permutation of the input multiset
//! 2. Every order a strategy produces passes the global validator
//! 3. The global validator is pure: it never mutates its input and returns
//!    the same verdict on repeated calls

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use stimorder_core::datamodel::{Constraints, Stimulus};

use crate::constraint::meets_constraints;
use crate::randomize::{randomize_by_pick, randomize_by_shuffle_repair, shuffle};

// Strategy helpers for generating stimulus sets and constraint tables

fn type_label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("filler"),
        Just("active"),
        Just("passive"),
        Just("distractor"),
    ]
}

fn stimulus_set_strategy() -> impl Strategy<Value = Vec<Stimulus>> {
    prop::collection::vec(type_label_strategy(), 0..40).prop_map(|labels| {
        labels
            .into_iter()
            .enumerate()
            .map(|(id, label)| Stimulus::new().with("id", id).with("item_type", label))
            .collect()
    })
}

fn constraints_strategy() -> impl Strategy<Value = Constraints> {
    (1usize..4).prop_map(|max_run| Constraints::single("item_type", max_run))
}

fn sorted(stimuli: &[Stimulus]) -> Vec<Stimulus> {
    let mut sorted = stimuli.to_vec();
    sorted.sort();
    sorted
}

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(
        stimuli in stimulus_set_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle(&stimuli, &mut rng);
        prop_assert_eq!(sorted(&shuffled), sorted(&stimuli));
    }

    #[test]
    fn prop_pick_result_is_valid_permutation(
        stimuli in stimulus_set_strategy(),
        constraints in constraints_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = randomize_by_pick(&stimuli, &constraints, 10, &mut rng).unwrap();
        if let Some(order) = result {
            prop_assert_eq!(sorted(&order), sorted(&stimuli));
            prop_assert!(meets_constraints(&order, &constraints));
        }
    }

    #[test]
    fn prop_shuffle_repair_result_is_valid_permutation(
        stimuli in stimulus_set_strategy(),
        constraints in constraints_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = randomize_by_shuffle_repair(&stimuli, &constraints, 10, &mut rng).unwrap();
        if let Some(order) = result {
            prop_assert_eq!(sorted(&order), sorted(&stimuli));
            prop_assert!(meets_constraints(&order, &constraints));
        }
    }

    #[test]
    fn prop_unconstrained_randomize_always_succeeds(
        stimuli in stimulus_set_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let order = randomize_by_pick(&stimuli, &Constraints::new(), 10, &mut rng)
            .unwrap()
            .expect("no constraints means any permutation is valid");
        prop_assert_eq!(sorted(&order), sorted(&stimuli));
    }

    #[test]
    fn prop_validator_is_pure(
        stimuli in stimulus_set_strategy(),
        constraints in constraints_strategy(),
    ) {
        let before = stimuli.clone();
        let first = meets_constraints(&stimuli, &constraints);
        let second = meets_constraints(&stimuli, &constraints);
        prop_assert_eq!(first, second);
        prop_assert_eq!(stimuli, before);
    }
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Random number helpers for EONN evolution.

Every operator takes its generator as an argument (`&mut R where R: Rng`);
nothing in this crate reaches for a process-wide source. These helpers build
generators and the distributions the operators share.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use crate::types::{EvoError, EvoResult};

/// Deterministic generator for `Some(seed)`, OS-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw a fresh seed, so a run can log it and be replayed later
pub fn fresh_seed() -> u64 {
    rand::thread_rng().gen()
}

/// `true` with probability `p`
///
/// Unlike `Rng::gen_bool` this never panics: `p <= 0` is always `false`,
/// `p >= 1` always `true`, NaN always `false`.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Zero-mean gaussian with standard deviation `std`
///
/// # Errors
/// `InvalidArgument` if `std` is negative or not finite.
pub fn gaussian(std: f64) -> EvoResult<Normal<f64>> {
    if !std.is_finite() || std < 0.0 {
        return Err(EvoError::InvalidArgument(format!(
            "mutation standard deviation must be finite and non-negative, got {}",
            std
        )));
    }
    Normal::new(0.0, std).map_err(|e| {
        EvoError::InvalidArgument(format!("mutation standard deviation {}: {}", std, e))
    })
}

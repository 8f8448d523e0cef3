// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Benchmark tasks
//!
//! Each task exposes a `fitness` function usable directly with
//! [`crate::evolutionary::optimize`], plus helpers that replay a network on
//! the task for inspection.

pub mod mountain_car;
pub mod xor;

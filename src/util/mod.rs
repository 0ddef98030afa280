// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers applied before anything reaches the wire encoder.

pub mod wrap;

pub use wrap::wrap_text;

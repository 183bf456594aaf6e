// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level views

mod preview;

pub use preview::preview;

// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Yakumono: Japanese text layout with bracket kerning, built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    yakumono::run(EventLoop::with_user_event())
}

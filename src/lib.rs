// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]

pub mod cli;
pub mod config;
pub mod detectors;
pub mod http;
pub mod input;
pub mod response;
pub mod scanner;
pub mod scanstate;

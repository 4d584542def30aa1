// WMC - wmc-error
// Module: WMC Error Types
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the WebAssembly Module Codec.
//!
//! This crate provides the error foundation shared by all WMC crates:
//! categorized errors with numeric codes, a common [`Result`] alias, and
//! factory helpers for the decode/encode error taxonomy. Every decode
//! failure carries the offending byte and/or stream offset in its message
//! so corrupt modules can be diagnosed without re-running the decoder.

#![forbid(unsafe_code)]

pub mod codes;
pub mod errors;
pub mod helpers;

pub use errors::{Error, ErrorCategory, Result};

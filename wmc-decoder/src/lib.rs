// WMC - wmc-decoder
// Module: WebAssembly Binary Decoder
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! WebAssembly module decoder and encoder for WMC.
//!
//! This crate provides the decode/encode machinery over the module tree
//! defined in `wmc-format`: a cursor-based byte reader, the
//! recursive-descent instruction grammar, per-section parsers, and the
//! module-level entry points [`decode_module`] and [`encode_module`].
//!
//! Decoding is a single depth-first pass: each node reads exactly its own
//! bytes from a shared cursor, with length-prefixed regions (section
//! payloads, code entries) sliced into sub-readers so a child can never
//! read past its declared boundary. Encoding mirrors that walk and writes
//! exactly what decode would have read, so a decoded module re-encodes to
//! the original bytes.

pub mod instructions;
pub mod module;
pub mod prelude;
pub mod reader;
pub mod sections;

pub use module::{decode_module, encode_module};
pub use reader::Reader;

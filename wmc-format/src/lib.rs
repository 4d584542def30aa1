// WMC - wmc-format
// Module: WebAssembly Binary Format
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! WebAssembly binary format handling for WMC.
//!
//! This crate owns the vocabulary of the binary format: the preamble and
//! opcode constants, the LEB128 integer codecs, the closed type
//! enumerations, and the in-memory module tree that `wmc-decoder` builds
//! and re-serializes. It contains no parsing logic of its own beyond the
//! byte-level primitives; the recursive grammar lives in `wmc-decoder`.

#![forbid(unsafe_code)]

pub mod binary;
pub mod instructions;
pub mod module;
pub mod prelude;
pub mod types;

pub use instructions::Instruction;
pub use module::{Code, Export, Func, FuncType, Locals, Module, Section};
pub use types::{BlockType, ExportKind, ValueType};

// WMC - wmc-format
// Module: Prelude
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for wmc-format.
//!
//! Re-exports the error types and the most commonly used format items so
//! downstream modules need a single import.

// Re-export from wmc-error
pub use wmc_error::{codes, helpers, Error, ErrorCategory, Result};

// Re-export from this crate's modules
pub use crate::{
    binary::{
        read_leb128_i32, read_leb128_u32, write_leb128_i32, write_leb128_u32, write_string,
        WASM_MAGIC, WASM_VERSION,
    },
    instructions::Instruction,
    module::{Code, Export, Func, FuncType, Locals, Module, Section},
    types::{
        block_type_to_byte, export_kind_to_byte, parse_block_type, parse_export_kind,
        parse_value_type, value_type_to_byte, BlockType, ExportKind, ValueType,
    },
};

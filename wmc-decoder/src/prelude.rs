// WMC - wmc-decoder
// Module: Prelude
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for wmc-decoder.
//!
//! Re-exports the format prelude (which carries the error types) plus
//! this crate's decode/encode entry points, so crate modules and
//! downstream users need a single import.

// Re-export from wmc-format, including the wmc-error items its prelude
// carries
pub use wmc_format::binary;
pub use wmc_format::prelude::*;

// Re-export from this crate's modules
pub use crate::{
    instructions::{
        encode_instruction, encode_instruction_sequence, parse_end_terminated_sequence,
        parse_instruction_sequence, Terminator, MAX_NESTING_DEPTH,
    },
    module::{decode_module, encode_module},
    reader::Reader,
    sections::{
        encode_section, parse_code_section, parse_export_section, parse_function_section,
        parse_type_section,
    },
};

// WMC - wmc-error
// Module: WMC Error Codes
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for WMC.

// Decode error codes (1000-1999)

/// Unexpected end of input
pub const UNEXPECTED_END: u16 = 1000;
/// Invalid magic bytes
pub const INVALID_MAGIC: u16 = 1001;
/// Unsupported binary version
pub const INVALID_VERSION: u16 = 1002;
/// Unknown section id
pub const INVALID_SECTION_ID: u16 = 1003;
/// Wrong function type tag byte
pub const INVALID_FUNC_TYPE_TAG: u16 = 1004;
/// Unknown value type byte
pub const INVALID_VALUE_TYPE: u16 = 1005;
/// Unknown block type byte
pub const INVALID_BLOCK_TYPE: u16 = 1006;
/// Unknown export kind tag
pub const INVALID_EXPORT_KIND: u16 = 1007;
/// Unknown instruction opcode
pub const INVALID_OPCODE: u16 = 1008;
/// Instruction sequence ended with the wrong terminator
pub const UNEXPECTED_TERMINATOR: u16 = 1009;
/// Declared size not fully consumed
pub const TRAILING_BYTES: u16 = 1010;
/// LEB128 integer exceeds its bit width
pub const LEB128_TOO_LONG: u16 = 1011;
/// Name bytes are not valid UTF-8
pub const INVALID_UTF8: u16 = 1012;
/// General parse error
pub const PARSE_ERROR: u16 = 1013;
/// Control-flow nesting exceeds the supported depth
pub const NESTING_TOO_DEEP: u16 = 1014;

// Encode error codes (2000-2999)

/// General encode error
pub const ENCODE_ERROR: u16 = 2000;

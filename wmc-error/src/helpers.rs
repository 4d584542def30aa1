// WMC - wmc-error
// Module: WMC Error Helpers
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Factory helpers for the decode/encode error taxonomy.
//!
//! Each helper builds an [`Error`] with position information baked into
//! the message, so call sites stay terse.

use crate::codes;
use crate::errors::{Error, ErrorCategory};

/// Unexpected end of input: `needed` bytes requested at `offset`, only
/// `available` remaining.
pub fn unexpected_end(offset: usize, needed: usize, available: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::UNEXPECTED_END,
        format!(
            "unexpected end of input at offset 0x{offset:x}: needed {needed} bytes, {available} available"
        ),
    )
}

/// The module preamble does not start with the expected magic bytes.
pub fn invalid_magic(actual: [u8; 4]) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_MAGIC,
        format!("invalid magic bytes: {actual:02x?}"),
    )
}

/// The module preamble carries an unsupported version.
pub fn invalid_version(actual: [u8; 4]) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_VERSION,
        format!("unsupported binary version: {actual:02x?}"),
    )
}

/// A section id byte matched no known section.
pub fn invalid_section_id(id: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_SECTION_ID,
        format!("invalid section id 0x{id:02x} at offset 0x{offset:x}"),
    )
}

/// A function type did not start with the 0x60 tag.
pub fn invalid_func_type_tag(byte: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_FUNC_TYPE_TAG,
        format!("expected function type tag 0x60, found 0x{byte:02x} at offset 0x{offset:x}"),
    )
}

/// A value type byte matched no known value type.
pub fn invalid_value_type(byte: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_VALUE_TYPE,
        format!("invalid value type 0x{byte:02x} at offset 0x{offset:x}"),
    )
}

/// A block type byte matched no known block type.
pub fn invalid_block_type(byte: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_BLOCK_TYPE,
        format!("invalid block type 0x{byte:02x} at offset 0x{offset:x}"),
    )
}

/// An export description tag matched no known export kind.
pub fn invalid_export_kind(byte: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_EXPORT_KIND,
        format!("invalid export kind 0x{byte:02x} at offset 0x{offset:x}"),
    )
}

/// An instruction opcode matched no supported instruction.
pub fn invalid_opcode(byte: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_OPCODE,
        format!("invalid opcode 0x{byte:02x} at offset 0x{offset:x}"),
    )
}

/// An instruction sequence ended with a terminator that is not allowed
/// in its position (an `else` outside an `if`).
pub fn unexpected_terminator(byte: u8, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::UNEXPECTED_TERMINATOR,
        format!("unexpected terminator 0x{byte:02x} at offset 0x{offset:x}"),
    )
}

/// A length-prefixed region was not fully consumed by its content.
pub fn trailing_bytes(context: &str, count: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::TRAILING_BYTES,
        format!("{count} trailing bytes after {context}"),
    )
}

/// A LEB128 integer used more continuation bytes than its bit width allows.
pub fn leb128_too_long(bits: u32, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::LEB128_TOO_LONG,
        format!("LEB128 integer at offset 0x{offset:x} exceeds {bits} bits"),
    )
}

/// Control-flow instructions are nested deeper than the supported limit.
pub fn nesting_too_deep(limit: usize, offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::NESTING_TOO_DEEP,
        format!("control-flow nesting at offset 0x{offset:x} exceeds {limit} levels"),
    )
}

/// Name bytes are not valid UTF-8.
pub fn invalid_utf8(offset: usize) -> Error {
    Error::new(
        ErrorCategory::Parse,
        codes::INVALID_UTF8,
        format!("invalid UTF-8 in name at offset 0x{offset:x}"),
    )
}

/// General parse error.
pub fn parse_error(message: impl Into<String>) -> Error {
    Error::new(ErrorCategory::Parse, codes::PARSE_ERROR, message)
}

/// General encode error.
pub fn encode_error(message: impl Into<String>) -> Error {
    Error::new(ErrorCategory::Encode, codes::ENCODE_ERROR, message)
}

// WMC - wmc-format
// Module: WebAssembly Type Definitions
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Closed type enumerations for the binary format.
//!
//! Each enumeration is matched exhaustively, so the enum-to-byte
//! direction is total; only the byte-to-enum boundary is fallible.

use crate::binary;
use wmc_error::{helpers, Result};

/// WebAssembly value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 32-bit integer
    I32,
    /// 64-bit integer
    I64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Function reference
    FuncRef,
    /// External reference
    ExternRef,
}

/// Block type for control-flow instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// No result value
    Empty,
    /// Single result value
    Value(ValueType),
}

/// WebAssembly export kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Function export
    Func,
    /// Table export
    Table,
    /// Memory export
    Memory,
    /// Global export
    Global,
}

/// Parse a value type byte.
///
/// `offset` is the position of the byte in the original stream, used only
/// for error reporting.
pub fn parse_value_type(byte: u8, offset: usize) -> Result<ValueType> {
    match byte {
        binary::I32_TYPE => Ok(ValueType::I32),
        binary::I64_TYPE => Ok(ValueType::I64),
        binary::F32_TYPE => Ok(ValueType::F32),
        binary::F64_TYPE => Ok(ValueType::F64),
        binary::FUNCREF_TYPE => Ok(ValueType::FuncRef),
        binary::EXTERNREF_TYPE => Ok(ValueType::ExternRef),
        _ => Err(helpers::invalid_value_type(byte, offset)),
    }
}

/// Convert a [`ValueType`] to its binary representation.
pub fn value_type_to_byte(value_type: ValueType) -> u8 {
    match value_type {
        ValueType::I32 => binary::I32_TYPE,
        ValueType::I64 => binary::I64_TYPE,
        ValueType::F32 => binary::F32_TYPE,
        ValueType::F64 => binary::F64_TYPE,
        ValueType::FuncRef => binary::FUNCREF_TYPE,
        ValueType::ExternRef => binary::EXTERNREF_TYPE,
    }
}

/// Parse a block type byte.
pub fn parse_block_type(byte: u8, offset: usize) -> Result<BlockType> {
    if byte == binary::EMPTY_BLOCK_TYPE {
        return Ok(BlockType::Empty);
    }
    parse_value_type(byte, offset)
        .map(BlockType::Value)
        .map_err(|_| helpers::invalid_block_type(byte, offset))
}

/// Convert a [`BlockType`] to its binary representation.
pub fn block_type_to_byte(block_type: BlockType) -> u8 {
    match block_type {
        BlockType::Empty => binary::EMPTY_BLOCK_TYPE,
        BlockType::Value(value_type) => value_type_to_byte(value_type),
    }
}

/// Parse an export kind tag.
pub fn parse_export_kind(byte: u8, offset: usize) -> Result<ExportKind> {
    match byte {
        binary::EXPORT_KIND_FUNC => Ok(ExportKind::Func),
        binary::EXPORT_KIND_TABLE => Ok(ExportKind::Table),
        binary::EXPORT_KIND_MEMORY => Ok(ExportKind::Memory),
        binary::EXPORT_KIND_GLOBAL => Ok(ExportKind::Global),
        _ => Err(helpers::invalid_export_kind(byte, offset)),
    }
}

/// Convert an [`ExportKind`] to its binary tag.
pub fn export_kind_to_byte(kind: ExportKind) -> u8 {
    match kind {
        ExportKind::Func => binary::EXPORT_KIND_FUNC,
        ExportKind::Table => binary::EXPORT_KIND_TABLE,
        ExportKind::Memory => binary::EXPORT_KIND_MEMORY,
        ExportKind::Global => binary::EXPORT_KIND_GLOBAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_bytes_are_stable() {
        for (byte, expected) in [
            (0x7F, ValueType::I32),
            (0x7E, ValueType::I64),
            (0x7D, ValueType::F32),
            (0x7C, ValueType::F64),
            (0x70, ValueType::FuncRef),
            (0x6F, ValueType::ExternRef),
        ] {
            assert_eq!(parse_value_type(byte, 0).unwrap(), expected);
            assert_eq!(value_type_to_byte(expected), byte);
        }
    }

    #[test]
    fn unknown_value_type_is_error() {
        assert!(parse_value_type(0x7B, 0).is_err());
    }

    #[test]
    fn block_type_accepts_empty_and_values() {
        assert_eq!(parse_block_type(0x40, 0).unwrap(), BlockType::Empty);
        assert_eq!(
            parse_block_type(0x7F, 0).unwrap(),
            BlockType::Value(ValueType::I32)
        );
        assert!(parse_block_type(0x41, 0).is_err());
    }

    #[test]
    fn export_kind_tags_are_stable() {
        assert_eq!(parse_export_kind(0x00, 0).unwrap(), ExportKind::Func);
        assert_eq!(parse_export_kind(0x03, 0).unwrap(), ExportKind::Global);
        assert!(parse_export_kind(0x04, 0).is_err());
    }
}

// WMC - wmc-format
// Module: WebAssembly Module Tree
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The in-memory module tree.
//!
//! Every node exclusively owns its children; the tree has no shared or
//! back references. Decoding builds this tree depth-first from a byte
//! stream and encoding walks it in the same order, so the field order
//! here mirrors the binary layout.

use crate::binary;
use crate::instructions::Instruction;
use crate::types::{ExportKind, ValueType};

/// A decoded WebAssembly module.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Magic bytes as read from the stream
    pub magic: [u8; 4],
    /// Version bytes as read from the stream
    pub version: [u8; 4],
    /// Sections in encounter order. Duplicate ids are not merged; they
    /// re-encode in the order they appeared.
    pub sections: Vec<Section>,
}

impl Module {
    /// Create an empty module with the standard preamble.
    pub fn new() -> Self {
        Self {
            magic: binary::WASM_MAGIC,
            version: binary::WASM_VERSION,
            sections: Vec::new(),
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}

/// A module section, tagged by its section id in the stream.
///
/// The declared byte length that prefixes a section payload is not
/// retained: encode recomputes it from the re-serialized payload, so the
/// two can never diverge.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Type section (id 1): function signatures
    Type(Vec<FuncType>),
    /// Function section (id 3): type index per function
    Function(Vec<u32>),
    /// Export section (id 7)
    Export(Vec<Export>),
    /// Code section (id 10): one body per function
    Code(Vec<Code>),
}

impl Section {
    /// The section id byte this variant decodes from and encodes to.
    pub fn id(&self) -> u8 {
        match self {
            Self::Type(_) => binary::TYPE_SECTION_ID,
            Self::Function(_) => binary::FUNCTION_SECTION_ID,
            Self::Export(_) => binary::EXPORT_SECTION_ID,
            Self::Code(_) => binary::CODE_SECTION_ID,
        }
    }
}

/// A function signature: parameter types and result types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    /// Parameter types
    pub params: Vec<ValueType>,
    /// Result types
    pub results: Vec<ValueType>,
}

/// A module export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Export name (UTF-8)
    pub name: String,
    /// Export kind
    pub kind: ExportKind,
    /// Index into the corresponding index space
    pub index: u32,
}

/// A code section entry.
///
/// The declared byte size that prefixes the entry in the stream is
/// derived from the encoded [`Func`] at encode time, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    /// The function body
    pub func: Func,
}

/// A function body: locals declarations plus the instruction sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    /// Run-length encoded locals declarations
    pub locals: Vec<Locals>,
    /// The body, terminated in the stream by `end`
    pub body: Vec<Instruction>,
}

/// One locals declaration: a repeat count and a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locals {
    /// Number of locals of this type
    pub count: u32,
    /// Their value type
    pub value_type: ValueType,
}

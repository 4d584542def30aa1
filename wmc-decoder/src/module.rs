// WMC - wmc-decoder
// Module: Module Decode/Encode
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Module-level decode and encode entry points.
//!
//! Decode validates the 8-byte preamble, then loops over sections: one id
//! byte, a LEB128 declared size, and a payload sliced to exactly that
//! size. Unknown section ids abort the whole decode; no partial module is
//! ever returned. Encode walks the section sequence in order and derives
//! every size field from the bytes it just produced.

use log::debug;

use crate::prelude::*;

/// Decode a WebAssembly module from its binary encoding.
pub fn decode_module(bytes: &[u8]) -> Result<Module> {
    let mut reader = Reader::new(bytes);

    let mut magic = [0u8; 4];
    magic.copy_from_slice(reader.read_bytes(4)?);
    if magic != binary::WASM_MAGIC {
        return Err(helpers::invalid_magic(magic));
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(reader.read_bytes(4)?);
    if version != binary::WASM_VERSION {
        return Err(helpers::invalid_version(version));
    }

    let mut sections = Vec::new();
    while !reader.is_empty() {
        sections.push(decode_section(&mut reader)?);
    }

    debug!("decoded module with {} sections", sections.len());

    Ok(Module {
        magic,
        version,
        sections,
    })
}

fn decode_section(reader: &mut Reader) -> Result<Section> {
    let id_offset = reader.offset();
    let id = reader.read_u8()?;
    let size = reader.read_leb128_u32()?;
    let mut payload = reader.subreader(size as usize)?;

    debug!("section id {id} at offset 0x{id_offset:x}, {size} payload bytes");

    let section = match id {
        binary::TYPE_SECTION_ID => Section::Type(parse_type_section(&mut payload)?),
        binary::FUNCTION_SECTION_ID => Section::Function(parse_function_section(&mut payload)?),
        binary::EXPORT_SECTION_ID => Section::Export(parse_export_section(&mut payload)?),
        binary::CODE_SECTION_ID => Section::Code(parse_code_section(&mut payload)?),
        _ => return Err(helpers::invalid_section_id(id, id_offset)),
    };

    payload.expect_empty("section payload")?;
    Ok(section)
}

/// Encode a module back into its binary encoding.
///
/// Walks the tree in the same depth-first order as decode and writes
/// minimal-length LEB128 for every integer, so a module decoded from a
/// conformant producer re-encodes byte-identically.
pub fn encode_module(module: &Module) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&module.magic);
    bytes.extend_from_slice(&module.version);
    for section in &module.sections {
        encode_section(section, &mut bytes);
    }
    bytes
}

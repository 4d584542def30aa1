// WMC - wmc-decoder
// Module: Section Parsers and Encoders
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Section payload parsers and encoders.
//!
//! Each parser consumes a reader sliced to the section's declared size.
//! Every payload is a length-prefixed vector of the section's element
//! type; the element parsers below mirror the encoders one-to-one so the
//! two can be checked against each other line by line.

use crate::prelude::*;

/// Parse a type section payload: a vector of function types.
pub fn parse_type_section(reader: &mut Reader) -> Result<Vec<FuncType>> {
    reader.read_vec(parse_func_type)
}

/// Parse a function section payload: a vector of type indices.
pub fn parse_function_section(reader: &mut Reader) -> Result<Vec<u32>> {
    reader.read_vec(Reader::read_leb128_u32)
}

/// Parse an export section payload: a vector of exports.
pub fn parse_export_section(reader: &mut Reader) -> Result<Vec<Export>> {
    reader.read_vec(parse_export)
}

/// Parse a code section payload: a vector of size-prefixed function bodies.
pub fn parse_code_section(reader: &mut Reader) -> Result<Vec<Code>> {
    reader.read_vec(parse_code)
}

fn parse_func_type(reader: &mut Reader) -> Result<FuncType> {
    let offset = reader.offset();
    let tag = reader.read_u8()?;
    if tag != binary::FUNC_TYPE_TAG {
        return Err(helpers::invalid_func_type_tag(tag, offset));
    }
    let params = reader.read_vec(read_value_type)?;
    let results = reader.read_vec(read_value_type)?;
    Ok(FuncType { params, results })
}

fn read_value_type(reader: &mut Reader) -> Result<ValueType> {
    let offset = reader.offset();
    let byte = reader.read_u8()?;
    parse_value_type(byte, offset)
}

fn parse_export(reader: &mut Reader) -> Result<Export> {
    let name = reader.read_name()?;
    let offset = reader.offset();
    let tag = reader.read_u8()?;
    let kind = parse_export_kind(tag, offset)?;
    let index = reader.read_leb128_u32()?;
    Ok(Export { name, kind, index })
}

fn parse_code(reader: &mut Reader) -> Result<Code> {
    let size = reader.read_leb128_u32()?;
    let mut func_reader = reader.subreader(size as usize)?;
    let func = parse_func(&mut func_reader)?;
    func_reader.expect_empty("code entry")?;
    Ok(Code { func })
}

fn parse_func(reader: &mut Reader) -> Result<Func> {
    let locals = reader.read_vec(parse_locals)?;
    let body = parse_end_terminated_sequence(reader)?;
    Ok(Func { locals, body })
}

fn parse_locals(reader: &mut Reader) -> Result<Locals> {
    let count = reader.read_leb128_u32()?;
    let offset = reader.offset();
    let byte = reader.read_u8()?;
    let value_type = parse_value_type(byte, offset)?;
    Ok(Locals { count, value_type })
}

/// Encode a section: id byte, payload size, payload.
///
/// The payload is built in a temporary buffer first; its exact length is
/// what the size field must carry.
pub fn encode_section(section: &Section, bytes: &mut Vec<u8>) {
    let payload = encode_section_payload(section);
    bytes.push(section.id());
    bytes.extend_from_slice(&binary::write_leb128_u32(payload.len() as u32));
    bytes.extend_from_slice(&payload);
}

fn encode_section_payload(section: &Section) -> Vec<u8> {
    let mut payload = Vec::new();
    match section {
        Section::Type(types) => {
            payload.extend_from_slice(&binary::write_leb128_u32(types.len() as u32));
            for func_type in types {
                encode_func_type(func_type, &mut payload);
            }
        }
        Section::Function(type_idxs) => {
            payload.extend_from_slice(&binary::write_leb128_u32(type_idxs.len() as u32));
            for type_idx in type_idxs {
                payload.extend_from_slice(&binary::write_leb128_u32(*type_idx));
            }
        }
        Section::Export(exports) => {
            payload.extend_from_slice(&binary::write_leb128_u32(exports.len() as u32));
            for export in exports {
                encode_export(export, &mut payload);
            }
        }
        Section::Code(codes) => {
            payload.extend_from_slice(&binary::write_leb128_u32(codes.len() as u32));
            for code in codes {
                encode_code(code, &mut payload);
            }
        }
    }
    payload
}

fn encode_func_type(func_type: &FuncType, bytes: &mut Vec<u8>) {
    bytes.push(binary::FUNC_TYPE_TAG);
    bytes.extend_from_slice(&binary::write_leb128_u32(func_type.params.len() as u32));
    for value_type in &func_type.params {
        bytes.push(value_type_to_byte(*value_type));
    }
    bytes.extend_from_slice(&binary::write_leb128_u32(func_type.results.len() as u32));
    for value_type in &func_type.results {
        bytes.push(value_type_to_byte(*value_type));
    }
}

fn encode_export(export: &Export, bytes: &mut Vec<u8>) {
    bytes.extend_from_slice(&binary::write_string(&export.name));
    bytes.push(export_kind_to_byte(export.kind));
    bytes.extend_from_slice(&binary::write_leb128_u32(export.index));
}

fn encode_code(code: &Code, bytes: &mut Vec<u8>) {
    // The size prefix is derived from the encoded func, never stored
    let mut func_bytes = Vec::new();
    encode_func(&code.func, &mut func_bytes);
    bytes.extend_from_slice(&binary::write_leb128_u32(func_bytes.len() as u32));
    bytes.extend_from_slice(&func_bytes);
}

fn encode_func(func: &Func, bytes: &mut Vec<u8>) {
    bytes.extend_from_slice(&binary::write_leb128_u32(func.locals.len() as u32));
    for locals in &func.locals {
        bytes.extend_from_slice(&binary::write_leb128_u32(locals.count));
        bytes.push(value_type_to_byte(locals.value_type));
    }
    encode_instruction_sequence(&func.body, bytes);
    bytes.push(binary::END);
}

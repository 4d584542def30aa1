// WMC - wmc-decoder
// Module: Instruction Grammar
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Recursive-descent parsing and encoding of instruction sequences.
//!
//! An instruction sequence is a run of instructions terminated by `end`
//! or `else`. Which terminator was consumed is reported to the caller:
//! it is the sole signal that an `if` has an else-branch. Nested
//! sequences inside `block`/`loop`/`if` recurse through the same
//! functions.

use crate::prelude::*;

/// Maximum nesting depth of `block`/`loop`/`if` instructions.
///
/// Input nested deeper than this is rejected before the recursive
/// descent can exhaust the call stack.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// The sentinel opcode that ended an instruction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Sequence ended with `end` (0x0B)
    End,
    /// Sequence ended with `else` (0x05)
    Else,
}

/// Parse an instruction sequence up to and including its terminator.
///
/// The terminator byte is consumed but not represented as an element of
/// the returned sequence.
pub fn parse_instruction_sequence(reader: &mut Reader) -> Result<(Vec<Instruction>, Terminator)> {
    parse_sequence_at_depth(reader, 0)
}

/// Parse an instruction sequence that must end with `end`.
///
/// `block` and `loop` bodies and function bodies may not be terminated
/// by `else`; only an `if` then-branch accepts it.
pub fn parse_end_terminated_sequence(reader: &mut Reader) -> Result<Vec<Instruction>> {
    parse_end_terminated_at_depth(reader, 0)
}

fn parse_sequence_at_depth(
    reader: &mut Reader,
    depth: usize,
) -> Result<(Vec<Instruction>, Terminator)> {
    let mut instructions = Vec::new();
    loop {
        let offset = reader.offset();
        let opcode = reader.read_u8()?;
        match opcode {
            binary::END => return Ok((instructions, Terminator::End)),
            binary::ELSE => return Ok((instructions, Terminator::Else)),
            _ => instructions.push(parse_instruction(reader, opcode, offset, depth)?),
        }
    }
}

fn parse_end_terminated_at_depth(reader: &mut Reader, depth: usize) -> Result<Vec<Instruction>> {
    let (instructions, terminator) = parse_sequence_at_depth(reader, depth)?;
    match terminator {
        Terminator::End => Ok(instructions),
        Terminator::Else => Err(helpers::unexpected_terminator(
            binary::ELSE,
            reader.offset() - 1,
        )),
    }
}

/// Parse one instruction whose opcode byte has already been consumed.
///
/// `offset` is the position of the opcode byte, used for error reporting.
/// Control-flow opcodes recurse into their nested sequences one level
/// deeper; past [`MAX_NESTING_DEPTH`] the input is rejected.
fn parse_instruction(
    reader: &mut Reader,
    opcode: u8,
    offset: usize,
    depth: usize,
) -> Result<Instruction> {
    match opcode {
        binary::BLOCK => {
            check_depth(depth, offset)?;
            let block_type = read_block_type(reader)?;
            let body = parse_end_terminated_at_depth(reader, depth + 1)?;
            Ok(Instruction::Block(block_type, body))
        }
        binary::LOOP => {
            check_depth(depth, offset)?;
            let block_type = read_block_type(reader)?;
            let body = parse_end_terminated_at_depth(reader, depth + 1)?;
            Ok(Instruction::Loop(block_type, body))
        }
        binary::IF => {
            check_depth(depth, offset)?;
            let block_type = read_block_type(reader)?;
            let (then_branch, terminator) = parse_sequence_at_depth(reader, depth + 1)?;
            let else_branch = match terminator {
                Terminator::End => None,
                Terminator::Else => Some(parse_end_terminated_at_depth(reader, depth + 1)?),
            };
            Ok(Instruction::If(block_type, then_branch, else_branch))
        }
        binary::BR => Ok(Instruction::Br(reader.read_leb128_u32()?)),
        binary::BR_IF => Ok(Instruction::BrIf(reader.read_leb128_u32()?)),
        binary::LOCAL_GET => Ok(Instruction::LocalGet(reader.read_leb128_u32()?)),
        binary::LOCAL_SET => Ok(Instruction::LocalSet(reader.read_leb128_u32()?)),
        binary::I32_CONST => Ok(Instruction::I32Const(reader.read_leb128_i32()?)),
        binary::I32_EQZ => Ok(Instruction::I32Eqz),
        binary::I32_LT_S => Ok(Instruction::I32LtS),
        binary::I32_GE_S => Ok(Instruction::I32GeS),
        binary::I32_ADD => Ok(Instruction::I32Add),
        binary::I32_REM_S => Ok(Instruction::I32RemS),
        _ => Err(helpers::invalid_opcode(opcode, offset)),
    }
}

fn check_depth(depth: usize, offset: usize) -> Result<()> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(helpers::nesting_too_deep(MAX_NESTING_DEPTH, offset));
    }
    Ok(())
}

fn read_block_type(reader: &mut Reader) -> Result<BlockType> {
    let offset = reader.offset();
    let byte = reader.read_u8()?;
    parse_block_type(byte, offset)
}

/// Encode one instruction, recursing into nested sequences.
///
/// Every nested sequence is closed with `end`; an `if` with an
/// else-branch writes `else` between the branches.
pub fn encode_instruction(instruction: &Instruction, bytes: &mut Vec<u8>) {
    match instruction {
        Instruction::Block(block_type, body) => {
            bytes.push(binary::BLOCK);
            bytes.push(block_type_to_byte(*block_type));
            encode_instruction_sequence(body, bytes);
            bytes.push(binary::END);
        }
        Instruction::Loop(block_type, body) => {
            bytes.push(binary::LOOP);
            bytes.push(block_type_to_byte(*block_type));
            encode_instruction_sequence(body, bytes);
            bytes.push(binary::END);
        }
        Instruction::If(block_type, then_branch, else_branch) => {
            bytes.push(binary::IF);
            bytes.push(block_type_to_byte(*block_type));
            encode_instruction_sequence(then_branch, bytes);
            if let Some(else_branch) = else_branch {
                bytes.push(binary::ELSE);
                encode_instruction_sequence(else_branch, bytes);
            }
            bytes.push(binary::END);
        }
        Instruction::Br(label_idx) => {
            bytes.push(binary::BR);
            bytes.extend_from_slice(&binary::write_leb128_u32(*label_idx));
        }
        Instruction::BrIf(label_idx) => {
            bytes.push(binary::BR_IF);
            bytes.extend_from_slice(&binary::write_leb128_u32(*label_idx));
        }
        Instruction::LocalGet(local_idx) => {
            bytes.push(binary::LOCAL_GET);
            bytes.extend_from_slice(&binary::write_leb128_u32(*local_idx));
        }
        Instruction::LocalSet(local_idx) => {
            bytes.push(binary::LOCAL_SET);
            bytes.extend_from_slice(&binary::write_leb128_u32(*local_idx));
        }
        Instruction::I32Const(value) => {
            bytes.push(binary::I32_CONST);
            bytes.extend_from_slice(&binary::write_leb128_i32(*value));
        }
        Instruction::I32Eqz => bytes.push(binary::I32_EQZ),
        Instruction::I32LtS => bytes.push(binary::I32_LT_S),
        Instruction::I32GeS => bytes.push(binary::I32_GE_S),
        Instruction::I32Add => bytes.push(binary::I32_ADD),
        Instruction::I32RemS => bytes.push(binary::I32_REM_S),
    }
}

/// Encode a run of instructions without a terminator.
///
/// The caller owns the terminator: function bodies and `block`/`loop`
/// bodies append `end`, an `if` then-branch appends `else` or `end`
/// depending on whether an else-branch follows.
pub fn encode_instruction_sequence(instructions: &[Instruction], bytes: &mut Vec<u8>) {
    for instruction in instructions {
        encode_instruction(instruction, bytes);
    }
}

// WMC - wmc-format
// Module: WebAssembly Instruction Tree
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The instruction tree.
//!
//! One variant per supported opcode family. Control-flow variants own
//! their nested instruction sequences, which is the recursive edge of the
//! module tree. Parsing and encoding of these nodes lives in
//! `wmc-decoder`; this is pure data.

use crate::types::BlockType;

/// WebAssembly instruction enumeration.
///
/// Only the opcode subset recognized by the codec is represented; the
/// decoder rejects anything else at the byte boundary, so an exhaustive
/// match over this enum covers every instruction that can reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    // Control instructions
    /// `block` with a body terminated by `end`
    Block(BlockType, Vec<Instruction>),
    /// `loop` with a body terminated by `end`
    Loop(BlockType, Vec<Instruction>),
    /// `if` with a then-branch and, when the then-branch was terminated
    /// by `else` rather than `end`, an else-branch.
    ///
    /// The else-branch is `Option` rather than a possibly-empty `Vec`:
    /// `if ... end` and `if ... else end` are different byte sequences
    /// and must re-encode differently.
    If(BlockType, Vec<Instruction>, Option<Vec<Instruction>>),
    /// `br` with a label index
    Br(u32),
    /// `br_if` with a label index
    BrIf(u32),

    // Variable instructions
    /// `local.get` with a local index
    LocalGet(u32),
    /// `local.set` with a local index
    LocalSet(u32),

    // Numeric instructions
    /// `i32.const` with a signed immediate
    I32Const(i32),
    /// `i32.eqz`
    I32Eqz,
    /// `i32.lt_s`
    I32LtS,
    /// `i32.ge_s`
    I32GeS,
    /// `i32.add`
    I32Add,
    /// `i32.rem_s`
    I32RemS,
}

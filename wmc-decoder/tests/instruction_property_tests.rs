// WMC - wmc-decoder
// Module: Instruction Property Tests
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Property tests: any instruction tree the model can represent encodes
//! to bytes that parse back to the identical tree, and those bytes
//! re-encode identically.

use proptest::prelude::*;

use wmc_decoder::prelude::*;

fn value_type_strategy() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        Just(ValueType::I32),
        Just(ValueType::I64),
        Just(ValueType::F32),
        Just(ValueType::F64),
        Just(ValueType::FuncRef),
        Just(ValueType::ExternRef),
    ]
}

fn block_type_strategy() -> impl Strategy<Value = BlockType> {
    prop_oneof![
        Just(BlockType::Empty),
        value_type_strategy().prop_map(BlockType::Value),
    ]
}

fn instruction_strategy() -> impl Strategy<Value = Instruction> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(Instruction::I32Const),
        (0u32..64).prop_map(Instruction::LocalGet),
        (0u32..64).prop_map(Instruction::LocalSet),
        (0u32..8).prop_map(Instruction::Br),
        (0u32..8).prop_map(Instruction::BrIf),
        Just(Instruction::I32Eqz),
        Just(Instruction::I32LtS),
        Just(Instruction::I32GeS),
        Just(Instruction::I32Add),
        Just(Instruction::I32RemS),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        let body = prop::collection::vec(inner, 0..4);
        prop_oneof![
            (block_type_strategy(), body.clone())
                .prop_map(|(block_type, body)| Instruction::Block(block_type, body)),
            (block_type_strategy(), body.clone())
                .prop_map(|(block_type, body)| Instruction::Loop(block_type, body)),
            (
                block_type_strategy(),
                body.clone(),
                proptest::option::of(body)
            )
                .prop_map(|(block_type, then_branch, else_branch)| {
                    Instruction::If(block_type, then_branch, else_branch)
                }),
        ]
    })
}

proptest! {
    #[test]
    fn encode_then_parse_is_identity(
        body in prop::collection::vec(instruction_strategy(), 0..8)
    ) {
        let mut bytes = Vec::new();
        encode_instruction_sequence(&body, &mut bytes);
        bytes.push(binary::END);

        let mut reader = Reader::new(&bytes);
        let parsed = parse_end_terminated_sequence(&mut reader).unwrap();
        prop_assert!(reader.is_empty());
        prop_assert_eq!(parsed, body);
    }

    #[test]
    fn parse_then_encode_is_byte_identity(
        body in prop::collection::vec(instruction_strategy(), 0..8)
    ) {
        let mut bytes = Vec::new();
        encode_instruction_sequence(&body, &mut bytes);
        bytes.push(binary::END);

        let mut reader = Reader::new(&bytes);
        let parsed = parse_end_terminated_sequence(&mut reader).unwrap();

        let mut reencoded = Vec::new();
        encode_instruction_sequence(&parsed, &mut reencoded);
        reencoded.push(binary::END);
        prop_assert_eq!(reencoded, bytes);
    }
}

// WMC - wmc-format
// Module: Binary Constants and LEB128 Codecs
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! WebAssembly binary constants and variable-length integer codecs.
//!
//! Read functions take `(bytes, pos)` and return the decoded value plus
//! the number of bytes consumed. Write functions return the minimal-length
//! encoding, which is what guarantees byte-identical round trips with
//! conformant producers.

use wmc_error::{helpers, Result};

/// Magic bytes for WebAssembly modules: \0asm
pub const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];

/// WebAssembly binary format version
pub const WASM_VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

/// Supported section IDs
pub const TYPE_SECTION_ID: u8 = 0x01;
pub const FUNCTION_SECTION_ID: u8 = 0x03;
pub const EXPORT_SECTION_ID: u8 = 0x07;
pub const CODE_SECTION_ID: u8 = 0x0A;

/// Function type tag preceding every functype
pub const FUNC_TYPE_TAG: u8 = 0x60;

/// WebAssembly value types
pub const I32_TYPE: u8 = 0x7F;
pub const I64_TYPE: u8 = 0x7E;
pub const F32_TYPE: u8 = 0x7D;
pub const F64_TYPE: u8 = 0x7C;
pub const FUNCREF_TYPE: u8 = 0x70;
pub const EXTERNREF_TYPE: u8 = 0x6F;

/// Empty block type (no result value)
pub const EMPTY_BLOCK_TYPE: u8 = 0x40;

/// Export kind tags
pub const EXPORT_KIND_FUNC: u8 = 0x00;
pub const EXPORT_KIND_TABLE: u8 = 0x01;
pub const EXPORT_KIND_MEMORY: u8 = 0x02;
pub const EXPORT_KIND_GLOBAL: u8 = 0x03;

/// WebAssembly control instructions
pub const BLOCK: u8 = 0x02;
pub const LOOP: u8 = 0x03;
pub const IF: u8 = 0x04;
pub const ELSE: u8 = 0x05;
pub const END: u8 = 0x0B;
pub const BR: u8 = 0x0C;
pub const BR_IF: u8 = 0x0D;

/// WebAssembly variable instructions
pub const LOCAL_GET: u8 = 0x20;
pub const LOCAL_SET: u8 = 0x21;

/// WebAssembly numeric instructions
pub const I32_CONST: u8 = 0x41;
pub const I32_EQZ: u8 = 0x45;
pub const I32_LT_S: u8 = 0x48;
pub const I32_GE_S: u8 = 0x4E;
pub const I32_ADD: u8 = 0x6A;
pub const I32_REM_S: u8 = 0x6F;

/// Read a LEB128 unsigned 32-bit integer from a byte array.
///
/// Returns the value and the number of bytes consumed. At most five bytes
/// are accepted for a 32-bit value; a sixth continuation byte is rejected,
/// as is a terminating byte carrying payload bits above bit 31.
/// Non-minimal encodings within those bounds are accepted.
pub fn read_leb128_u32(bytes: &[u8], pos: usize) -> Result<(u32, usize)> {
    let mut result = 0u32;
    let mut shift = 0;
    let mut offset = 0;

    loop {
        if pos + offset >= bytes.len() {
            return Err(helpers::unexpected_end(pos + offset, 1, 0));
        }

        let byte = bytes[pos + offset];
        offset += 1;

        if byte & 0x80 != 0 {
            result |= ((byte & 0x7F) as u32) << shift;
            shift += 7;

            if shift >= 32 {
                return Err(helpers::leb128_too_long(32, pos));
            }
            continue;
        }

        // Terminating byte: any payload bits past bit 31 would be
        // silently truncated, so they are an error.
        let remaining_bits = 32 - shift;
        if remaining_bits < 7 && byte >> remaining_bits != 0 {
            return Err(helpers::leb128_too_long(32, pos));
        }

        result |= (byte as u32) << shift;
        return Ok((result, offset));
    }
}

/// Read a LEB128 signed 32-bit integer from a byte array.
///
/// Returns the value and the number of bytes consumed. If the terminating
/// byte has its sign bit (bit 6) set and fewer than 32 bits were shifted
/// in, the result is sign-extended. Terminating-byte bits past bit 31 must
/// agree with the sign bit or the encoding is rejected.
pub fn read_leb128_i32(bytes: &[u8], pos: usize) -> Result<(i32, usize)> {
    let mut result = 0i32;
    let mut shift = 0;
    let mut offset = 0;

    loop {
        if pos + offset >= bytes.len() {
            return Err(helpers::unexpected_end(pos + offset, 1, 0));
        }

        let byte = bytes[pos + offset];
        offset += 1;

        if byte & 0x80 != 0 {
            result |= ((byte & 0x7F) as i32) << shift;
            shift += 7;

            if shift >= 32 {
                return Err(helpers::leb128_too_long(32, pos));
            }
            continue;
        }

        // Terminating byte: bits past bit 31 must all equal the highest
        // in-range bit, otherwise the value does not fit in 32 bits.
        let remaining_bits = 32 - shift;
        if remaining_bits < 7 {
            let mask = (1u8 << (8 - remaining_bits)) - 1;
            let high = (byte >> (remaining_bits - 1)) & mask;
            if high != 0 && high != mask {
                return Err(helpers::leb128_too_long(32, pos));
            }
        }

        result |= ((byte & 0x7F) as i32) << shift;
        if shift + 7 < 32 && (byte & 0x40) != 0 {
            result |= !0 << (shift + 7);
        }
        return Ok((result, offset));
    }
}

/// Write a LEB128 unsigned 32-bit integer, minimal length.
pub fn write_leb128_u32(value: u32) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }

    let mut result = Vec::new();
    let mut value = value;

    while value != 0 {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value != 0 {
            byte |= 0x80;
        }

        result.push(byte);
    }

    result
}

/// Write a LEB128 signed 32-bit integer, minimal length.
pub fn write_leb128_i32(value: i32) -> Vec<u8> {
    let mut result = Vec::new();
    let mut value = value;
    let mut more = true;

    while more {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        // Done once the remaining bits are pure sign extension and the
        // sign bit of the emitted byte already agrees with them.
        let sign_bit_set = (byte & 0x40) != 0;
        more = !((value == 0 && !sign_bit_set) || (value == -1 && sign_bit_set));

        if more {
            byte |= 0x80;
        }

        result.push(byte);
    }

    result
}

/// Write a length-prefixed UTF-8 name.
pub fn write_string(value: &str) -> Vec<u8> {
    let mut result = write_leb128_u32(value.len() as u32);
    result.extend_from_slice(value.as_bytes());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leb128_u32_single_byte() {
        assert_eq!(read_leb128_u32(&[0x00], 0).unwrap(), (0, 1));
        assert_eq!(read_leb128_u32(&[0x7F], 0).unwrap(), (127, 1));
    }

    #[test]
    fn leb128_u32_multi_byte() {
        // 624485 from the LEB128 reference example
        assert_eq!(read_leb128_u32(&[0xE5, 0x8E, 0x26], 0).unwrap(), (624_485, 3));
        assert_eq!(write_leb128_u32(624_485), vec![0xE5, 0x8E, 0x26]);
    }

    #[test]
    fn leb128_u32_truncated_is_error() {
        assert!(read_leb128_u32(&[0x80], 0).is_err());
        assert!(read_leb128_u32(&[], 0).is_err());
    }

    #[test]
    fn leb128_u32_too_long_is_error() {
        // Six continuation bytes exceed the 32-bit ceiling
        assert!(read_leb128_u32(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01], 0).is_err());
    }

    #[test]
    fn leb128_u32_overflow_bits_are_error() {
        // The fifth byte only has room for bits 28..31; anything above
        // must not be silently truncated
        assert!(read_leb128_u32(&[0x80, 0x80, 0x80, 0x80, 0x7F], 0).is_err());
        assert!(read_leb128_u32(&[0x80, 0x80, 0x80, 0x80, 0x10], 0).is_err());
        // u32::MAX itself is still in range
        assert_eq!(
            read_leb128_u32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F], 0).unwrap(),
            (u32::MAX, 5)
        );
    }

    #[test]
    fn leb128_i32_overflow_bits_are_error() {
        // Fifth-byte bits past bit 31 must agree with the sign bit
        assert!(read_leb128_i32(&[0x80, 0x80, 0x80, 0x80, 0x0F], 0).is_err());
        assert!(read_leb128_i32(&[0x80, 0x80, 0x80, 0x80, 0x70], 0).is_err());
        // The 32-bit extremes remain decodable
        assert_eq!(
            read_leb128_i32(&[0x80, 0x80, 0x80, 0x80, 0x78], 0).unwrap(),
            (i32::MIN, 5)
        );
        assert_eq!(
            read_leb128_i32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x07], 0).unwrap(),
            (i32::MAX, 5)
        );
    }

    #[test]
    fn leb128_i32_sign_extension() {
        assert_eq!(read_leb128_i32(&[0x7F], 0).unwrap(), (-1, 1));
        assert_eq!(read_leb128_i32(&[0x40], 0).unwrap(), (-64, 1));
        assert_eq!(read_leb128_i32(&[0xC0, 0xBB, 0x78], 0).unwrap(), (-123_456, 3));
    }

    #[test]
    fn leb128_i32_minimal_writes() {
        assert_eq!(write_leb128_i32(0), vec![0x00]);
        assert_eq!(write_leb128_i32(-1), vec![0x7F]);
        assert_eq!(write_leb128_i32(63), vec![0x3F]);
        // 64 needs a second byte: bit 6 of 0x40 would read as a sign bit
        assert_eq!(write_leb128_i32(64), vec![0xC0, 0x00]);
        assert_eq!(write_leb128_i32(-64), vec![0x40]);
        assert_eq!(write_leb128_i32(-65), vec![0xBF, 0x7F]);
    }

    #[test]
    fn string_codec_is_length_prefixed() {
        assert_eq!(write_string("add"), vec![0x03, b'a', b'd', b'd']);
        assert_eq!(write_string(""), vec![0x00]);
    }

    proptest! {
        #[test]
        fn leb128_u32_roundtrip(value: u32) {
            let encoded = write_leb128_u32(value);
            let (decoded, len) = read_leb128_u32(&encoded, 0).unwrap();
            prop_assert_eq!(decoded, value);
            prop_assert_eq!(len, encoded.len());
        }

        #[test]
        fn leb128_i32_roundtrip(value: i32) {
            let encoded = write_leb128_i32(value);
            let (decoded, len) = read_leb128_i32(&encoded, 0).unwrap();
            prop_assert_eq!(decoded, value);
            prop_assert_eq!(len, encoded.len());
        }
    }
}

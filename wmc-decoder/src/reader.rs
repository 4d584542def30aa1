// WMC - wmc-decoder
// Module: Cursor Reader
//
// Copyright (c) 2025 The WMC Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Cursor-based reader over a byte slice.
//!
//! All reads past the end of the available bytes are hard
//! "unexpected end of input" errors; there is no sentinel or silent
//! truncation path. Offsets in errors are relative to the start of the
//! reader, which for sub-readers is the start of their length-prefixed
//! region.

use core::str;

use crate::prelude::*;

/// A read cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current cursor position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        if self.is_empty() {
            return Err(helpers::unexpected_end(self.offset, 1, 0));
        }
        let byte = self.bytes[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    /// Read exactly `size` bytes.
    pub fn read_bytes(&mut self, size: usize) -> Result<&'a [u8]> {
        if self.remaining() < size {
            return Err(helpers::unexpected_end(self.offset, size, self.remaining()));
        }
        let slice = &self.bytes[self.offset..self.offset + size];
        self.offset += size;
        Ok(slice)
    }

    /// Read a LEB128 unsigned 32-bit integer.
    pub fn read_leb128_u32(&mut self) -> Result<u32> {
        let (value, len) = binary::read_leb128_u32(self.bytes, self.offset)?;
        self.offset += len;
        Ok(value)
    }

    /// Read a LEB128 signed 32-bit integer.
    pub fn read_leb128_i32(&mut self) -> Result<i32> {
        let (value, len) = binary::read_leb128_i32(self.bytes, self.offset)?;
        self.offset += len;
        Ok(value)
    }

    /// Read a length-prefixed vector: a LEB128 count followed by that
    /// many elements, each read by `read_elem`.
    pub fn read_vec<T>(
        &mut self,
        mut read_elem: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let count = self.read_leb128_u32()?;
        // Every element takes at least one byte, so a count beyond the
        // remaining bytes can never be satisfied. Cap the pre-allocation
        // accordingly; the loop below still reports the unexpected end.
        let mut items = Vec::with_capacity((count as usize).min(self.remaining()));
        for _ in 0..count {
            items.push(read_elem(self)?);
        }
        Ok(items)
    }

    /// Slice the next `size` bytes into an independent reader positioned
    /// at 0. Used for length-prefixed regions so their content cannot
    /// read past the declared boundary.
    pub fn subreader(&mut self, size: usize) -> Result<Reader<'a>> {
        Ok(Reader::new(self.read_bytes(size)?))
    }

    /// Read a length-prefixed UTF-8 name.
    pub fn read_name(&mut self) -> Result<String> {
        let len = self.read_leb128_u32()? as usize;
        let start = self.offset;
        let bytes = self.read_bytes(len)?;
        match str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => Err(helpers::invalid_utf8(start)),
        }
    }

    /// Fail with a trailing-bytes error unless the reader is exhausted.
    ///
    /// Length-prefixed regions must be consumed exactly: a byte that was
    /// read but not represented in the tree could not be re-encoded.
    pub fn expect_empty(&self, context: &str) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(helpers::trailing_bytes(context, self.remaining()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u8_advances_cursor() {
        let mut reader = Reader::new(&[0x01, 0x02]);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.read_u8().unwrap(), 0x02);
        assert!(reader.is_empty());
        assert!(reader.read_u8().is_err());
    }

    #[test]
    fn read_bytes_rejects_underrun() {
        let mut reader = Reader::new(&[0x01, 0x02]);
        assert!(reader.read_bytes(3).is_err());
        // A failed read must not advance the cursor
        assert_eq!(reader.offset(), 0);
        assert_eq!(reader.read_bytes(2).unwrap(), &[0x01, 0x02]);
    }

    #[test]
    fn subreader_is_bounded() {
        let mut reader = Reader::new(&[0x01, 0x02, 0x03]);
        let mut sub = reader.subreader(2).unwrap();
        assert_eq!(sub.read_u8().unwrap(), 0x01);
        assert_eq!(sub.read_u8().unwrap(), 0x02);
        assert!(sub.read_u8().is_err());
        // Parent continues after the sliced region
        assert_eq!(reader.read_u8().unwrap(), 0x03);
    }

    #[test]
    fn read_vec_collects_in_order() {
        let mut reader = Reader::new(&[0x03, 0x0A, 0x0B, 0x0C]);
        let items = reader.read_vec(Reader::read_u8).unwrap();
        assert_eq!(items, vec![0x0A, 0x0B, 0x0C]);
    }

    #[test]
    fn read_vec_huge_count_fails_without_allocating() {
        // u32::MAX declared elements with nothing behind the count must
        // come back as a typed error, not a giant allocation
        let mut reader = Reader::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        let err = reader.read_vec(Reader::read_u8).unwrap_err();
        assert_eq!(err.code, codes::UNEXPECTED_END);
    }

    #[test]
    fn read_name_decodes_utf8() {
        let mut reader = Reader::new(&[0x03, b'a', b'd', b'd']);
        assert_eq!(reader.read_name().unwrap(), "add");
    }

    #[test]
    fn read_name_rejects_invalid_utf8() {
        let mut reader = Reader::new(&[0x02, 0xFF, 0xFE]);
        assert!(reader.read_name().is_err());
    }

    #[test]
    fn expect_empty_reports_leftovers() {
        let reader = Reader::new(&[0x01]);
        assert!(reader.expect_empty("test region").is_err());
        let empty = Reader::new(&[]);
        assert!(empty.expect_empty("test region").is_ok());
    }
}

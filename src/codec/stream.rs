//! Byte-stream primitives for the binary persistence format.
//!
//! The save/load subsystem hands modifier records around as raw byte
//! runs inside larger player/item blobs, so the encoding is an explicit
//! ordered field layout rather than a serde format. All multi-byte
//! integers are little-endian.
//!
//! `ReadStream` validates remaining length before consuming each field:
//! a truncated record surfaces as `CodecError::UnexpectedEof`, never as
//! a read past the end.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure while decoding a binary record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The stream ended before the field could be read.
    #[error("unexpected end of stream: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// The record was written by an incompatible format revision.
    #[error("unsupported augment format version {0}")]
    UnsupportedVersion(u8),

    /// A serialized name was not valid UTF-8.
    #[error("serialized name is not valid utf-8")]
    InvalidName,
}

/// Append-only byte sink for encoding records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteStream {
    buf: Vec<u8>,
}

impl WriteStream {
    /// Create an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a length-prefixed UTF-8 string (u16 length + bytes).
    ///
    /// Names longer than `u16::MAX` bytes are truncated at the limit;
    /// augment names are short identifiers in practice.
    pub fn write_str(&mut self, value: &str) {
        let bytes = value.as_bytes();
        let len = bytes.len().min(usize::from(u16::MAX));
        self.write_u16(len as u16);
        self.buf.extend_from_slice(&bytes[..len]);
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the stream and return the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Cursor over an encoded byte run.
#[derive(Clone, Debug)]
pub struct ReadStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadStream<'a> {
    /// Create a cursor at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < count {
            return Err(CodecError::UnexpectedEof {
                needed: count,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], CodecError> {
        self.take(count)
    }

    /// Read a length-prefixed UTF-8 string written by `write_str`.
    pub fn read_str(&mut self) -> Result<String, CodecError> {
        let len = usize::from(self.read_u16()?);
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidName)
    }
}

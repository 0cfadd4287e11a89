//! Method-style shortcuts over the shared codec instances.
//!
//! ```
//! use bintext::ext::{DecodeExt, EncodeExt};
//! use bintext::EncodingKind;
//!
//! let encoded = b"Test".encode_as(EncodingKind::Base32).unwrap();
//! assert_eq!(encoded, "KRSXG5A=");
//! assert_eq!(encoded.decode_as(EncodingKind::Base32).unwrap(), b"Test");
//! ```

use std::path::Path;

use crate::error::Result;
use crate::types::EncodingKind;

pub trait EncodeExt {
    fn encode_as(&self, kind: EncodingKind) -> Result<String>;
}

impl EncodeExt for [u8] {
    fn encode_as(&self, kind: EncodingKind) -> Result<String> {
        kind.codec().encode_bytes(self, 0)
    }
}

impl<const N: usize> EncodeExt for [u8; N] {
    fn encode_as(&self, kind: EncodingKind) -> Result<String> {
        self.as_slice().encode_as(kind)
    }
}

impl EncodeExt for str {
    fn encode_as(&self, kind: EncodingKind) -> Result<String> {
        kind.codec().encode_str(self, 0)
    }
}

pub trait DecodeExt {
    fn decode_as(&self, kind: EncodingKind) -> Result<Vec<u8>>;
    fn decode_string_as(&self, kind: EncodingKind) -> Result<String>;
}

impl DecodeExt for str {
    fn decode_as(&self, kind: EncodingKind) -> Result<Vec<u8>> {
        kind.codec().decode_bytes(self)
    }

    fn decode_string_as(&self, kind: EncodingKind) -> Result<String> {
        kind.codec().decode_string(self)
    }
}

pub fn encode_file(path: impl AsRef<Path>, kind: EncodingKind) -> Result<String> {
    kind.codec().encode_file(path.as_ref(), 0)
}

pub fn decode_file(path: impl AsRef<Path>, kind: EncodingKind) -> Result<Vec<u8>> {
    kind.codec().decode_file(path.as_ref())
}

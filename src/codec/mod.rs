mod base32;
mod base64;
mod base85;
mod base91;
pub mod framing;
mod radix;
pub mod registry;

pub use base32::Base32;
pub use base64::Base64;
pub use base85::Base85;
pub use base91::Base91;
pub use radix::{Base02, Base08, Base10, Base16};
pub use registry::Registry;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::Result;
use crate::files;
use crate::types::CodecMeta;

/// A binary-to-text encoding.
///
/// Implementations are stateless: every call keeps its bit accumulator,
/// pending group and line position on its own stack, so a single instance
/// can be shared by any number of threads.
///
/// `line_length` inserts [`framing::LINE_SEPARATOR`] after every
/// `line_length` emitted characters; `0` disables wrapping. Decoding always
/// drops NUL, TAB, LF, CR and SPACE, plus the codec's own
/// [`CodecMeta::skippable`] characters.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()>;
    fn decode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()>;

    fn name(&self) -> &'static str {
        self.meta().name
    }

    fn encode_bytes(&self, input: &[u8], line_length: usize) -> Result<String> {
        let mut reader = input;
        let mut encoded = Vec::<u8>::new();
        self.encode_stream(&mut reader, &mut encoded, line_length)?;
        into_text(encoded)
    }

    fn encode_str(&self, text: &str, line_length: usize) -> Result<String> {
        self.encode_bytes(text.as_bytes(), line_length)
    }

    fn decode_bytes(&self, code: &str) -> Result<Vec<u8>> {
        let mut reader = code.as_bytes();
        let mut decoded = Vec::<u8>::new();
        self.decode_stream(&mut reader, &mut decoded)?;
        Ok(decoded)
    }

    /// Decodes `code` and interprets the bytes as UTF-8, replacing invalid
    /// sequences with U+FFFD.
    fn decode_string(&self, code: &str) -> Result<String> {
        let decoded = self.decode_bytes(code)?;
        Ok(String::from_utf8(decoded).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    fn validate(&self, code: &str) -> Result<()> {
        let mut reader = code.as_bytes();
        self.decode_stream(&mut reader, &mut io::sink())
    }

    fn encode_file(&self, path: &Path, line_length: usize) -> Result<String> {
        files::encode_file(self, path, line_length)
    }

    fn encode_file_to(&self, src: &Path, dest: &Path, line_length: usize, overwrite: bool) -> Result<bool> {
        files::encode_file_to(self, src, dest, line_length, overwrite)
    }

    fn decode_file(&self, path: &Path) -> Result<Vec<u8>> {
        files::decode_file(self, path)
    }

    fn decode_file_to(&self, src: &Path, dest: &Path, overwrite: bool) -> Result<bool> {
        files::decode_file_to(self, src, dest, overwrite)
    }
}

pub(crate) fn into_text(encoded: Vec<u8>) -> Result<String> {
    String::from_utf8(encoded).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

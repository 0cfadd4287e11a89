//! Helpers shared by every codec: output line wrapping, skippable input
//! characters and buffer sizing.

use std::io::{self, BufRead, BufWriter, Read, Write};

use crate::error::BintextError;

#[cfg(windows)]
pub const LINE_SEPARATOR: &[u8] = b"\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &[u8] = b"\n";

/// Buffered writer that inserts [`LINE_SEPARATOR`] after every
/// `line_length` symbols. A `line_length` of zero disables wrapping.
pub struct LineWriter<W: Write> {
    inner: BufWriter<W>,
    line_length: usize,
    position: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W, line_length: usize) -> Self {
        Self {
            inner: BufWriter::new(inner),
            line_length,
            position: 0,
        }
    }

    pub fn put(&mut self, symbol: u8) -> io::Result<()> {
        self.put_all(&[symbol])
    }

    pub fn put_all(&mut self, mut symbols: &[u8]) -> io::Result<()> {
        if self.line_length == 0 {
            return self.inner.write_all(symbols);
        }
        while !symbols.is_empty() {
            let room = self.line_length - self.position;
            let (line, rest) = symbols.split_at(room.min(symbols.len()));
            self.inner.write_all(line)?;
            self.position += line.len();
            if self.position == self.line_length {
                self.position = 0;
                self.inner.write_all(LINE_SEPARATOR)?;
            }
            symbols = rest;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.put_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub fn is_skippable(byte: u8, extra: &[u8]) -> bool {
    matches!(byte, b'\0' | b'\t' | b'\n' | b'\r' | b' ') || extra.contains(&byte)
}

/// Iterates the significant bytes of `input` together with their offset in
/// the raw input.
pub fn symbols<'a>(
    input: &'a mut dyn BufRead,
    extra: &'a [u8],
) -> impl Iterator<Item = io::Result<(usize, u8)>> + 'a {
    input
        .bytes()
        .enumerate()
        .filter_map(move |(position, byte)| match byte {
            Ok(b) if is_skippable(b, extra) => None,
            other => Some(other.map(|b| (position, b))),
        })
}

pub fn reject(codec: &'static str, byte: u8, position: usize) -> BintextError {
    tracing::debug!(codec, position, byte, "symbol outside the alphabet");
    BintextError::invalid_char(byte, position)
}

/// Reader buffer size for an input of `len` bytes.
pub fn buffer_capacity(len: u64) -> usize {
    const KB128: usize = 0x20000;
    const KB64: usize = 0x10000;
    const KB32: usize = 0x8000;
    const KB16: usize = 0x4000;
    const KB8: usize = 0x2000;
    const KB4: usize = 0x1000;

    match usize::try_from(len.saturating_mul(2) / 3).unwrap_or(usize::MAX) {
        n if n > KB128 => KB128,
        n if n > KB64 => KB64,
        n if n > KB32 => KB32,
        n if n > KB16 => KB16,
        n if n > KB8 => KB8,
        _ => KB4,
    }
}

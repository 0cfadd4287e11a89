use std::io::{BufRead, BufWriter, Read, Write};

use super::framing::{self, LineWriter};
use super::Codec;
use crate::error::{BintextError, Result};
use crate::types::{CodecMeta, EncodingKind};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Fixed-width positional encoding of single bytes.
struct Radix {
    name: &'static str,
    radix: u32,
    width: usize,
    skippable: &'static [u8],
}

impl Radix {
    fn digits<'d>(&self, byte: u8, buf: &'d mut [u8; 8]) -> &'d [u8] {
        let mut value = u32::from(byte);
        for slot in buf[..self.width].iter_mut().rev() {
            *slot = DIGITS[(value % self.radix) as usize];
            value /= self.radix;
        }
        &buf[..self.width]
    }

    fn encode(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()> {
        let mut out = LineWriter::new(output, line_length);
        let mut buf = [0u8; 8];
        for byte in input.bytes() {
            out.put_all(self.digits(byte?, &mut buf))?;
        }
        out.finish()?;
        Ok(())
    }

    fn decode(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let mut out = BufWriter::new(output);
        let mut value: u32 = 0;
        let mut count = 0;

        for symbol in framing::symbols(input, self.skippable) {
            let (position, byte) = symbol?;
            let digit = char::from(byte)
                .to_digit(self.radix)
                .ok_or_else(|| framing::reject(self.name, byte, position))?;
            value = value * self.radix + digit;
            count += 1;
            if count < self.width {
                continue;
            }
            let byte = u8::try_from(value).map_err(|_| {
                BintextError::invalid_group(format!(
                    "{} group ending at position {} has value {}, which does not fit in a byte",
                    self.name, position, value
                ))
            })?;
            out.write_all(&[byte])?;
            value = 0;
            count = 0;
        }

        // An incomplete trailing group is dropped.
        out.flush()?;
        Ok(())
    }
}

macro_rules! impl_radix_codec {
    ($name:ident, $kind:expr, $codec_name:expr, $aliases:expr, $alphabet:expr,
     $radix:expr, $width:expr, $skippable:expr, $desc:expr) => {
        pub struct $name;

        impl $name {
            const RADIX: Radix = Radix {
                name: $codec_name,
                radix: $radix,
                width: $width,
                skippable: $skippable.as_bytes(),
            };
        }

        impl Codec for $name {
            fn meta(&self) -> CodecMeta {
                CodecMeta {
                    kind: $kind,
                    name: $codec_name,
                    aliases: $aliases,
                    alphabet: $alphabet,
                    skippable: $skippable,
                    description: $desc,
                }
            }

            fn encode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()> {
                Self::RADIX.encode(input, output, line_length)
            }

            fn decode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
                Self::RADIX.decode(input, output)
            }
        }
    };
}

impl_radix_codec!(
    Base02, EncodingKind::Base02, "base02", &["base2", "binary", "bin"], "01",
    2, 8, "-,",
    "Binary digits, 8 per byte"
);

impl_radix_codec!(
    Base08, EncodingKind::Base08, "base08", &["base8", "octal", "oct"], "01234567",
    8, 3, "-,",
    "Octal digits, 3 per byte"
);

impl_radix_codec!(
    Base10, EncodingKind::Base10, "base10", &["decimal"], "0123456789",
    10, 3, ",",
    "Decimal digits, 3 per byte"
);

impl_radix_codec!(
    Base16, EncodingKind::Base16, "base16", &["hex", "base16lower"], "0123456789abcdef",
    16, 2, "-,",
    "Hexadecimal digits, 2 per byte (decode accepts either case)"
);

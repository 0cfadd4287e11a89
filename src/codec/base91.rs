use std::io::{BufRead, BufWriter, Read, Write};

use super::framing::{self, LineWriter};
use super::Codec;
use crate::error::Result;
use crate::types::{CodecMeta, EncodingKind};

const NAME: &str = "base91";
const ALPHABET_STR: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,-.:;<=>?@[]^_`{|}~\"";
const ALPHABET: &[u8] = ALPHABET_STR.as_bytes();

const INVALID: u8 = 0xff;

const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Width of the next chunk taken from the bit queue. Chunks whose low 13
/// bits are above 88 fit in 13 bits, the rest take 14.
fn chunk_bits(value: u32) -> u32 {
    if value & 8191 > 88 {
        13
    } else {
        14
    }
}

pub struct Base91;

impl Codec for Base91 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            kind: EncodingKind::Base91,
            name: NAME,
            aliases: &["b91"],
            alphabet: ALPHABET_STR,
            skippable: "",
            description: "basE91, 13 or 14 bits per symbol pair",
        }
    }

    fn encode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()> {
        let mut out = LineWriter::new(output, line_length);
        let mut queue: u32 = 0;
        let mut nbits: u32 = 0;

        for byte in input.bytes() {
            queue |= u32::from(byte?) << nbits;
            nbits += 8;
            if nbits < 14 {
                continue;
            }
            let width = chunk_bits(queue);
            let value = queue & ((1 << width) - 1);
            queue >>= width;
            nbits -= width;
            out.put_all(&[ALPHABET[(value % 91) as usize], ALPHABET[(value / 91) as usize]])?;
        }

        if nbits > 0 {
            out.put(ALPHABET[(queue % 91) as usize])?;
            if nbits > 7 || queue > 90 {
                out.put(ALPHABET[(queue / 91) as usize])?;
            }
        }

        out.finish()?;
        Ok(())
    }

    fn decode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let mut out = BufWriter::new(output);
        let mut queue: u32 = 0;
        let mut nbits: u32 = 0;
        let mut low: Option<u32> = None;

        for symbol in framing::symbols(input, b"") {
            let (position, byte) = symbol?;
            let digit = match DECODE[byte as usize] {
                INVALID => return Err(framing::reject(NAME, byte, position)),
                d => u32::from(d),
            };
            let Some(first) = low.take() else {
                low = Some(digit);
                continue;
            };

            let value = first + digit * 91;
            queue |= value << nbits;
            nbits += chunk_bits(value);
            while nbits > 7 {
                out.write_all(&[queue as u8])?;
                queue >>= 8;
                nbits -= 8;
            }
        }

        if let Some(first) = low {
            out.write_all(&[(queue | first << nbits) as u8])?;
        }

        out.flush()?;
        Ok(())
    }
}

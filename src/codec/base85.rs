use std::io::{BufRead, BufWriter, Read, Write};

use super::framing::{self, LineWriter};
use super::Codec;
use crate::error::{BintextError, LengthConstraint, Result};
use crate::types::{CodecMeta, EncodingKind};

const NAME: &str = "base85";
const FIRST: u8 = b'!';
const LAST: u8 = b'u';
const ZERO_WORD: u8 = b'z';

const POW85: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];

fn to_digits(mut word: u32) -> [u8; 5] {
    let mut digits = [0u8; 5];
    for digit in digits.iter_mut().rev() {
        *digit = (word % 85) as u8 + FIRST;
        word /= 85;
    }
    digits
}

fn to_word(acc: u64) -> Result<[u8; 4]> {
    u32::try_from(acc)
        .map(u32::to_be_bytes)
        .map_err(|_| BintextError::invalid_group(format!("base85 group value {} does not fit in 32 bits", acc)))
}

pub struct Base85;

impl Codec for Base85 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            kind: EncodingKind::Base85,
            name: NAME,
            aliases: &["ascii85", "a85"],
            alphabet: "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu",
            skippable: "",
            description: "Ascii85 with 'z' for all-zero words, no <~ ~> delimiters",
        }
    }

    fn encode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()> {
        let mut out = LineWriter::new(output, line_length);
        let mut word: u32 = 0;
        let mut count: u32 = 0;

        for byte in input.bytes() {
            word |= u32::from(byte?) << (24 - count * 8);
            count += 1;
            if count < 4 {
                continue;
            }
            if word == 0 {
                out.put(ZERO_WORD)?;
            } else {
                out.put_all(&to_digits(word))?;
            }
            word = 0;
            count = 0;
        }

        if count > 0 {
            // n leftover bytes need n + 1 digits of the zero-padded word
            out.put_all(&to_digits(word)[..=count as usize])?;
        }

        out.finish()?;
        Ok(())
    }

    fn decode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let mut out = BufWriter::new(output);
        let mut acc: u64 = 0;
        let mut count = 0;

        for symbol in framing::symbols(input, b"") {
            let (position, byte) = symbol?;
            if byte == ZERO_WORD {
                if count != 0 {
                    return Err(BintextError::invalid_group(format!(
                        "'z' at position {} inside a base85 group",
                        position
                    )));
                }
                out.write_all(&[0; 4])?;
                continue;
            }
            if !(FIRST..=LAST).contains(&byte) {
                return Err(framing::reject(NAME, byte, position));
            }
            acc += u64::from(byte - FIRST) * u64::from(POW85[count]);
            count += 1;
            if count < POW85.len() {
                continue;
            }
            out.write_all(&to_word(acc)?)?;
            acc = 0;
            count = 0;
        }

        match count {
            0 => {}
            1 => {
                return Err(BintextError::invalid_length_msg(
                    LengthConstraint::Range { min: 2, max: Some(5) },
                    1,
                    "a single trailing base85 symbol cannot encode a byte",
                ));
            }
            n => {
                let kept = n - 1;
                acc += u64::from(POW85[kept]);
                out.write_all(&to_word(acc)?[..kept])?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

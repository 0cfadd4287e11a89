use std::io::{self, BufRead, BufWriter, Write};

use base64::prelude::*;
use base64::write::EncoderWriter;
use base64::DecodeError;

use super::framing::{self, LineWriter};
use super::Codec;
use crate::error::{BintextError, LengthConstraint, Result};
use crate::types::{CodecMeta, EncodingKind};

const NAME: &str = "base64";

/// Significant symbols decoded per step. A multiple of 4, so every block
/// but the last holds whole quads without padding.
const BLOCK: usize = 16 * 1024;

fn decode_block(block: &[u8], offset: usize, out: &mut impl Write) -> Result<()> {
    let decoded = BASE64_STANDARD.decode(block).map_err(|e| match e {
        DecodeError::InvalidByte(index, byte) => framing::reject(NAME, byte, offset + index),
        DecodeError::InvalidLength(len) => BintextError::invalid_length_msg(
            LengthConstraint::MultipleOf(4),
            offset + len,
            "base64 input ends inside a quad",
        ),
        DecodeError::InvalidLastSymbol(index, byte) => BintextError::invalid_group(format!(
            "base64 symbol '{}' at position {} leaves non-zero trailing bits",
            char::from(byte).escape_debug(),
            offset + index
        )),
        other => BintextError::invalid_group(format!("malformed base64 input: {}", other)),
    })?;
    out.write_all(&decoded)?;
    Ok(())
}

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            kind: EncodingKind::Base64,
            name: NAME,
            aliases: &["b64"],
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
            skippable: "",
            description: "RFC4648 Base64, standard alphabet with '=' padding",
        }
    }

    fn encode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()> {
        let mut out = LineWriter::new(output, line_length);
        {
            let mut encoder = EncoderWriter::new(&mut out, &BASE64_STANDARD);
            io::copy(input, &mut encoder)?;
            encoder.finish()?;
        }
        out.finish()?;
        Ok(())
    }

    fn decode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let mut out = BufWriter::new(output);
        let mut pending = Vec::with_capacity(BLOCK + 4);
        let mut offset = 0;

        for symbol in framing::symbols(input, b"") {
            let (_, byte) = symbol?;
            pending.push(byte);
            // Hold back one quad so trailing padding always lands in the last block.
            if pending.len() == BLOCK + 4 {
                decode_block(&pending[..BLOCK], offset, &mut out)?;
                pending.drain(..BLOCK);
                offset += BLOCK;
            }
        }
        decode_block(&pending, offset, &mut out)?;

        out.flush()?;
        Ok(())
    }
}

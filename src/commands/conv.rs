use std::io::Write;

use crate::io::open_input;
use bintext::error::Result;
use bintext::types::{Context, InputSource};

/// Decodes `input` with one codec and re-encodes the bytes with another.
pub fn run_conv(
    ctx: &Context,
    from_codec: &str,
    to_codec: &str,
    input: &InputSource,
    output: &mut dyn Write,
    line_length: usize,
) -> Result<()> {
    let decoder = ctx.registry.get(from_codec)?;
    let encoder = ctx.registry.get(to_codec)?;

    let mut reader = open_input(input)?;
    let mut decoded = Vec::<u8>::new();
    decoder.decode_stream(&mut reader, &mut decoded)?;
    tracing::debug!(from = decoder.name(), to = encoder.name(), bytes = decoded.len(), "converting");

    encoder.encode_stream(&mut decoded.as_slice(), output, line_length)
}

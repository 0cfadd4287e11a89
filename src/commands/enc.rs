use std::io::Write;

use crate::io::open_input;
use bintext::error::Result;
use bintext::types::{Context, InputSource};

pub fn run_encode(
    ctx: &Context,
    codec_name: &str,
    input: &InputSource,
    output: &mut dyn Write,
    line_length: usize,
) -> Result<()> {
    let codec = ctx.registry.get(codec_name)?;
    let mut reader = open_input(input)?;
    tracing::debug!(codec = codec.name(), line_length, "encoding");
    codec.encode_stream(&mut reader, output, line_length)
}

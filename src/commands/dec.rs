use std::io::Write;

use crate::io::open_input;
use bintext::error::Result;
use bintext::types::{Context, InputSource};

pub fn run_decode(ctx: &Context, codec_name: &str, input: &InputSource, output: &mut dyn Write) -> Result<()> {
    let codec = ctx.registry.get(codec_name)?;
    let mut reader = open_input(input)?;
    tracing::debug!(codec = codec.name(), "decoding");
    codec.decode_stream(&mut reader, output)
}

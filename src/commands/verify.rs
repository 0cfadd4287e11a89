use std::io;

use serde::Serialize;

use crate::io::open_input;
use bintext::error::{BintextError, Result};
use bintext::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub codec: String,
    pub error: Option<String>,
    #[serde(skip)]
    pub fault: Option<BintextError>,
}

/// Decodes `input` into a sink. Decoding faults make the result invalid;
/// any other failure is returned as an error.
pub fn run_verify(ctx: &Context, codec_name: &str, input: &InputSource) -> Result<VerifyResult> {
    let codec = ctx.registry.get(codec_name)?;
    let mut reader = open_input(input)?;

    let fault = match codec.decode_stream(&mut reader, &mut io::sink()) {
        Ok(()) => None,
        Err(e) if e.is_decoding_fault() => Some(e),
        Err(e) => return Err(e),
    };

    Ok(VerifyResult {
        schema_version: 1,
        valid: fault.is_none(),
        codec: codec.name().to_string(),
        error: fault.as_ref().map(|e| e.to_string()),
        fault,
    })
}

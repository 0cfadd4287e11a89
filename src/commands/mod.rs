mod conv;
mod dec;
mod enc;
mod info;
mod list;
mod verify;

use std::io::{self, Write};

pub use conv::run_conv;
pub use dec::run_decode;
pub use enc::run_encode;
pub use info::run_info;
pub use list::run_list;
pub use verify::run_verify;

use crate::io::{open_output, write_output, OutputConfig};
use bintext::codec::framing::LINE_SEPARATOR;
use bintext::error::Result;
use bintext::types::{Context, InputSource, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).map_err(io::Error::from)?);
    Ok(())
}

/// Streams text output into a file, or collects it on stdout and ends it
/// with a line separator unless wrapping already did.
fn emit_text(
    output: &OutputDest,
    overwrite: bool,
    produce: impl FnOnce(&mut dyn Write) -> Result<()>,
) -> Result<()> {
    let config = OutputConfig {
        dest: output.clone(),
        force: true,
        overwrite,
    };
    match output {
        OutputDest::File(_) => {
            let mut out = open_output(&config)?;
            produce(&mut out)?;
            out.flush()?;
        }
        OutputDest::Stdout => {
            let mut text = Vec::<u8>::new();
            produce(&mut text)?;
            terminate_line(&mut text);
            write_output(&text, &config)?;
        }
    }
    Ok(())
}

fn terminate_line(text: &mut Vec<u8>) {
    if !text.ends_with(LINE_SEPARATOR) {
        text.extend_from_slice(LINE_SEPARATOR);
    }
}

pub struct EncCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub line_length: usize,
    pub overwrite: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        emit_text(&self.output, self.overwrite, |out| {
            run_encode(ctx, &self.codec, &self.input, out, self.line_length)
        })
    }
}

pub struct DecCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub force: bool,
    pub overwrite: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let config = OutputConfig {
            dest: self.output.clone(),
            force: self.force,
            overwrite: self.overwrite,
        };
        match self.output {
            OutputDest::File(_) => {
                let mut out = open_output(&config)?;
                run_decode(ctx, &self.codec, &self.input, &mut out)?;
                out.flush()?;
            }
            OutputDest::Stdout => {
                let mut decoded = Vec::<u8>::new();
                run_decode(ctx, &self.codec, &self.input, &mut decoded)?;
                write_output(&decoded, &config)?;
            }
        }
        Ok(())
    }
}

pub struct ConvCommand {
    pub from: String,
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub line_length: usize,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        emit_text(&self.output, true, |out| {
            run_conv(ctx, &self.from, &self.to, &self.input, out, self.line_length)
        })
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let codecs = run_list(ctx);
        if self.json {
            return print_json(&codecs);
        }
        println!("{:<8} {:<28} DESCRIPTION", "NAME", "ALIASES");
        println!("{}", "-".repeat(72));
        for c in codecs {
            println!("{:<8} {:<28} {}", c.name, c.aliases.join(", "), c.description);
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub codec: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.codec)?;
        if self.json {
            return print_json(&meta);
        }
        let skippable: Vec<String> = meta.skippable.chars().map(|c| format!("{:?}", c)).collect();
        println!("Name:        {}", meta.name);
        println!("Aliases:     {}", meta.aliases.join(", "));
        println!("Alphabet:    {}", meta.alphabet);
        println!("Skippable:   NUL, TAB, LF, CR, SPACE {}", skippable.join(" "));
        println!("Description: {}", meta.description);
        Ok(())
    }
}

pub struct VerifyCommand {
    pub codec: String,
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for VerifyCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_verify(ctx, &self.codec, &self.input)?;
        if self.json {
            return print_json(&result);
        }
        match result.fault {
            None => {
                println!("valid");
                Ok(())
            }
            Some(fault) => {
                println!("invalid");
                Err(fault)
            }
        }
    }
}

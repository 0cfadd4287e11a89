use std::io::{self, BufWriter, Write};

use is_terminal::IsTerminal;

use bintext::error::Result;
use bintext::files::create_destination;
use bintext::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
    pub overwrite: bool,
}

pub fn open_output(config: &OutputConfig) -> Result<Box<dyn Write>> {
    match &config.dest {
        OutputDest::File(path) => Ok(Box::new(BufWriter::new(create_destination(path, config.overwrite)?))),
        OutputDest::Stdout => Ok(Box::new(io::stdout().lock())),
    }
}

/// Writes a complete payload. Binary data bound for a terminal is shown as
/// a hex preview unless `force` is set.
pub fn write_output(data: &[u8], config: &OutputConfig) -> Result<()> {
    if let OutputDest::Stdout = config.dest {
        let stdout = io::stdout();
        if stdout.is_terminal() && !config.force && !is_safe_for_terminal(data) {
            print_hex_preview(data);
            return Ok(());
        }
    }
    let mut out = open_output(config)?;
    out.write_all(data)?;
    out.flush()?;
    Ok(())
}

fn is_safe_for_terminal(data: &[u8]) -> bool {
    std::str::from_utf8(data).is_ok_and(|s| !s.chars().any(|c| c.is_control() && !c.is_whitespace()))
}

fn hex_line(offset: usize, chunk: &[u8]) -> String {
    let mut hex = String::with_capacity(50);
    for (i, byte) in chunk.iter().enumerate() {
        if i == 8 {
            hex.push(' ');
        }
        hex.push_str(&format!("{:02x} ", byte));
    }
    let text: String = chunk
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { char::from(b) } else { '.' })
        .collect();
    format!("{:08x}  {:<49} |{}|", offset, hex, text)
}

fn print_hex_preview(data: &[u8]) {
    const BYTES_PER_LINE: usize = 16;
    const MAX_LINES: usize = 32;

    eprintln!(
        "Binary output ({} bytes). Showing hex preview (use --force to output raw or --out @file):\n",
        data.len()
    );

    for (idx, chunk) in data.chunks(BYTES_PER_LINE).take(MAX_LINES).enumerate() {
        println!("{}", hex_line(idx * BYTES_PER_LINE, chunk));
    }

    let shown = BYTES_PER_LINE * MAX_LINES;
    if data.len() > shown {
        eprintln!("\n... ({} more bytes)", data.len() - shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_safety() {
        assert!(is_safe_for_terminal(b"Test\n"));
        assert!(!is_safe_for_terminal(&[0xff, 0x00]));
        assert!(!is_safe_for_terminal(b"bell\x07"));
    }

    #[test]
    fn test_hex_line_layout() {
        let line = hex_line(16, b"Test");
        assert!(line.starts_with("00000010  54 65 73 74 "));
        assert!(line.ends_with("|Test|"));
    }
}

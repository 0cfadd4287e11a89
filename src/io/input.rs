use std::io::{self, BufRead, Cursor};

use bintext::error::Result;
use bintext::files::open_source;
use bintext::types::InputSource;

pub fn open_input(source: &InputSource) -> Result<Box<dyn BufRead>> {
    match source {
        InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
        InputSource::File(path) => Ok(Box::new(open_source(path)?)),
        InputSource::Literal(data) => Ok(Box::new(Cursor::new(data.clone()))),
    }
}

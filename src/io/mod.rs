mod input;
mod output;

pub use input::open_input;
pub use output::{open_output, write_output, OutputConfig};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bintext")]
#[command(about = "Binary-to-text encode/decode CLI (base02/08/10/16/32/64/85/91)")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, default_value = "warn", help = "Log filter directives, overridden by RUST_LOG")]
    pub log_level: String,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode bytes to text")]
    Enc {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-", help = "'-' for stdin, @path for a file, otherwise literal data")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, short = 'w', default_value_t = 0, help = "Wrap output every N characters (0 disables)")]
        line_length: usize,

        #[arg(long, help = "Fail instead of replacing an existing output file")]
        no_clobber: bool,
    },

    #[command(about = "Decode text to bytes")]
    Dec {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Write binary output to a terminal instead of a hex preview")]
        force: bool,

        #[arg(long, help = "Fail instead of replacing an existing output file")]
        no_clobber: bool,
    },

    #[command(about = "Convert between encodings")]
    Conv {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, short = 'w', default_value_t = 0)]
        line_length: usize,
    },

    #[command(about = "List supported codecs")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show codec details")]
    Info {
        codec: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Verify input decodes with a codec")]
    Verify {
        #[arg(long, default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },
}

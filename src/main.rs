mod cli;
mod commands;
mod io;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use bintext::{error, types, Context};
use cli::{Cli, Command};
use commands::CommandHandler;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level, cli.log_json);

    match run(cli.command) {
        Ok(()) => error::ExitCode::Success.into(),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(command: Command) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match command {
        Command::Enc {
            codec,
            r#in,
            out,
            line_length,
            no_clobber,
        } => Box::new(commands::EncCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            line_length,
            overwrite: !no_clobber,
        }),

        Command::Dec {
            codec,
            r#in,
            out,
            force,
            no_clobber,
        } => Box::new(commands::DecCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            force,
            overwrite: !no_clobber,
        }),

        Command::Conv {
            from,
            to,
            r#in,
            out,
            line_length,
        } => Box::new(commands::ConvCommand {
            from,
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            line_length,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { codec, json } => Box::new(commands::InfoCommand { codec, json }),

        Command::Verify { codec, r#in, json } => Box::new(commands::VerifyCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            json,
        }),
    };

    handler.execute(&ctx)
}

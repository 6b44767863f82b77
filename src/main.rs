mod cli;
mod commands;
mod io;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use bin2text::{error, types, Context};
use cli::{Cli, Command};
use commands::CommandHandler;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            codec,
            r#in,
            out,
            all,
            json,
        } => Box::new(commands::EncCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            all,
            json,
        }),

        Command::Dec {
            codec,
            r#in,
            out,
            mode,
            force,
            json,
        } => Box::new(commands::DecCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            mode: mode.into(),
            force,
            json,
        }),

        Command::Conv {
            from,
            to,
            r#in,
            out,
            mode,
            json,
        } => Box::new(commands::ConvCommand {
            from,
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            mode: mode.into(),
            json,
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

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use bin2text::types::Mode;

#[derive(Parser)]
#[command(name = "bin2text")]
#[command(about = "Base16/32/64/128 binary-to-text encoder and decoder")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Disable logging")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode bytes to text")]
    Enc {
        #[arg(long, short = 'c', default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Show encoding with all codecs")]
        all: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode text to bytes")]
    Dec {
        #[arg(long, short = 'c', default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, default_value = "lenient")]
        mode: ModeArg,

        #[arg(long, help = "Write binary output to a terminal")]
        force: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
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

        #[arg(long, default_value = "lenient")]
        mode: ModeArg,

        #[arg(long, help = "Output as JSON")]
        json: bool,
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

    #[command(about = "Check that input is exactly what the encoder produces")]
    Verify {
        #[arg(long, short = 'c', default_value = "base64")]
        codec: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Strict,
    Lenient,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Strict => Mode::Strict,
            ModeArg::Lenient => Mode::Lenient,
        }
    }
}

mod conv;
mod dec;
mod enc;
mod info;
mod list;
mod verify;

pub use conv::{run_conv, run_conv_json};
pub use dec::{run_decode, run_decode_json};
pub use enc::{run_encode, run_encode_all, run_encode_json};
pub use info::run_info;
pub use list::run_list;
pub use verify::run_verify;

use serde::Serialize;

use crate::io::{write_output, OutputConfig};
use bin2text::error::{Bin2TextError, Result};
use bin2text::types::{Context, InputSource, Mode, OutputDest};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn text_output(dest: &OutputDest) -> OutputConfig {
    OutputConfig {
        dest: dest.clone(),
        force: true,
        newline: true,
    }
}

pub struct EncCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub all: bool,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.all {
            let results = run_encode_all(ctx, &self.input)?;
            if self.json {
                return print_json(&results);
            }
            println!("{:<10} ENCODED", "CODEC");
            println!("{}", "-".repeat(60));
            for r in results {
                println!("{:<10} {}", r.codec, r.encoded);
            }
            return Ok(());
        }

        if self.json {
            return print_json(&run_encode_json(ctx, &self.codec, &self.input)?);
        }

        let encoded = run_encode(ctx, &self.codec, &self.input)?;
        write_output(encoded.as_bytes(), &text_output(&self.output))
    }
}

pub struct DecCommand {
    pub codec: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub mode: Mode,
    pub force: bool,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            return print_json(&run_decode_json(ctx, &self.codec, &self.input, self.mode)?);
        }

        let decoded = run_decode(ctx, &self.codec, &self.input, self.mode)?;
        let config = OutputConfig {
            dest: self.output.clone(),
            force: self.force,
            newline: false,
        };
        write_output(&decoded, &config)
    }
}

pub struct ConvCommand {
    pub from: String,
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub mode: Mode,
    pub json: bool,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            return print_json(&run_conv_json(ctx, &self.from, &self.to, &self.input, self.mode)?);
        }

        let converted = run_conv(ctx, &self.from, &self.to, &self.input, self.mode)?;
        write_output(converted.as_bytes(), &text_output(&self.output))
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
        println!("{:<10} {:<6} {:<16} DESCRIPTION", "NAME", "BITS", "ALIASES");
        println!("{}", "-".repeat(70));
        for c in codecs {
            println!(
                "{:<10} {:<6} {:<16} {}",
                c.name,
                c.bits_per_symbol,
                c.aliases.join(", "),
                c.description
            );
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
        println!("Name:        {}", meta.name);
        println!("Aliases:     {}", meta.aliases.join(", "));
        println!("Alphabet:    {}", meta.alphabet);
        println!("Bits/symbol: {}", meta.bits_per_symbol);
        println!("Padding:     {:?}", meta.padding);
        println!("Case:        {:?}", meta.case_sensitivity);
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
            print_json(&result)?;
        } else if result.valid {
            println!("valid");
        } else {
            println!("invalid: {}", result.error.as_deref().unwrap_or_default());
        }
        match result.error {
            Some(message) => Err(Bin2TextError::invalid_input(message)),
            None => Ok(()),
        }
    }
}
